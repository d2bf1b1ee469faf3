// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

use super::LoopbackSerial;
use crate::error::LoopbackError;
use crate::hal::{ByteStream, SerialIO};

impl<const N: usize> SerialIO for LoopbackSerial<'_, N> {
    type Error = LoopbackError;

    /// Accepts bytes until the ring is full
    ///
    /// Fails with `Full` only when not even the first byte fit.
    fn write(&mut self, data: &[u8]) -> Result<usize, Self::Error> {
        self.ensure_listening()?;
        let accepted = self.write_bytes(data);
        if accepted == 0 && !data.is_empty() {
            return Err(LoopbackError::Full);
        }
        Ok(accepted)
    }

    fn read(&mut self, buffer: &mut [u8]) -> Result<usize, Self::Error> {
        self.ensure_listening()?;
        let mut count = 0;
        for slot in buffer.iter_mut() {
            match self.ring.pop() {
                Some(byte) => *slot = byte,
                None => break,
            }
            count += 1;
        }
        Ok(count)
    }

    /// Discards buffered bytes (loopback has no transmit side to drain)
    fn flush(&mut self) -> Result<(), Self::Error> {
        self.ensure_listening()?;
        self.ring.reset();
        Ok(())
    }

    fn available(&self) -> Result<usize, Self::Error> {
        Ok(LoopbackSerial::available(self))
    }
}

impl<const N: usize> ByteStream for LoopbackSerial<'_, N> {
    type Error = LoopbackError;

    fn bytes_available(&self) -> usize {
        LoopbackSerial::available(self)
    }

    fn read_byte(&mut self) -> Result<u8, Self::Error> {
        LoopbackSerial::read(self)
    }

    fn peek_byte(&mut self) -> Result<u8, Self::Error> {
        LoopbackSerial::peek(self)
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        LoopbackSerial::write(self, byte)
    }

    fn discard(&mut self) {
        LoopbackSerial::flush(self);
    }
}

#[cfg(test)]
mod tests {
    use crate::hal::{ByteStream, SentinelStream, SerialIO, NO_DATA};
    use crate::{ListenGate, LoopbackError, LoopbackSerial};

    fn echo<S: ByteStream>(stream: &mut S, byte: u8) -> Result<u8, S::Error> {
        stream.write_byte(byte)?;
        stream.read_byte()
    }

    #[test]
    fn test_generic_byte_stream() {
        let mut port = LoopbackSerial::new();
        assert_eq!(echo(&mut port, 0x42), Ok(0x42));
    }

    #[test]
    fn test_serial_io_slices() {
        let mut port = LoopbackSerial::<8>::with_arbitration(crate::Arbitration::free());
        assert_eq!(SerialIO::write(&mut port, b"hello world"), Ok(7));
        assert_eq!(SerialIO::write(&mut port, b"!"), Err(LoopbackError::Full));
        assert_eq!(SerialIO::available(&port), Ok(7));

        let mut buf = [0u8; 4];
        assert_eq!(SerialIO::read(&mut port, &mut buf), Ok(4));
        assert_eq!(&buf, b"hell");
        let mut rest = [0u8; 16];
        assert_eq!(SerialIO::read(&mut port, &mut rest), Ok(3));
        assert_eq!(&rest[..3], b"o w");
        assert_eq!(SerialIO::read(&mut port, &mut rest), Ok(0));
    }

    #[test]
    fn test_serial_io_not_listening() {
        let gate = ListenGate::new();
        let mut port = LoopbackSerial::strict(&gate);
        let mut buf = [0u8; 2];
        assert_eq!(SerialIO::write(&mut port, b"x"), Err(LoopbackError::NotListening));
        assert_eq!(SerialIO::read(&mut port, &mut buf), Err(LoopbackError::NotListening));
        assert_eq!(SerialIO::flush(&mut port), Err(LoopbackError::NotListening));
        assert_eq!(SerialIO::available(&port), Ok(0));
    }

    #[test]
    fn test_sentinel_view() {
        let gate = ListenGate::new();
        let mut port = LoopbackSerial::strict(&gate);

        assert_eq!(SentinelStream::write(&mut port, 1), 0);
        assert_eq!(SentinelStream::read(&mut port), NO_DATA);
        assert_eq!(SentinelStream::peek(&mut port), NO_DATA);
        assert!(SentinelStream::is_valid(&port));

        port.listen();
        assert_eq!(SentinelStream::write(&mut port, 200), 1);
        assert_eq!(SentinelStream::available(&mut port), 1);
        assert_eq!(SentinelStream::peek(&mut port), 200);
        assert_eq!(SentinelStream::read(&mut port), 200);
        assert_eq!(SentinelStream::read(&mut port), NO_DATA);

        SentinelStream::write(&mut port, 3);
        SentinelStream::flush(&mut port);
        assert_eq!(SentinelStream::available(&mut port), 0);
    }
}
