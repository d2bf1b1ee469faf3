// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Byte-stream capability contracts
//!
//! [`ByteStream`] is the typed contract: every failure carries a reason.
//! [`SentinelStream`] is the Arduino `Stream` view of the same contract,
//! where `-1` means "no byte" and writes report `0` or `1`. It is
//! implemented for every `ByteStream`, so sketches ported to the host keep
//! their call shape.

/// `read`/`peek` result when no byte can be returned
pub const NO_DATA: i32 = -1;

/// Readable + Writable + Peekable byte stream
pub trait ByteStream {
    /// Failure reason for byte operations
    type Error;

    /// Bytes ready to read
    fn bytes_available(&self) -> usize;

    /// Consume the next byte
    fn read_byte(&mut self) -> Result<u8, Self::Error>;

    /// Look at the next byte without consuming it
    fn peek_byte(&mut self) -> Result<u8, Self::Error>;

    /// Queue one byte
    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error>;

    /// Drop whatever is buffered
    fn discard(&mut self);
}

/// Arduino `Stream`-shaped view with sentinel returns
pub trait SentinelStream {
    /// Byte count, `0` when nothing can be read
    fn available(&mut self) -> i32;

    /// Next byte as `0..=255`, or [`NO_DATA`]
    fn read(&mut self) -> i32;

    /// Next byte without consuming it, or [`NO_DATA`]
    fn peek(&mut self) -> i32;

    /// Bytes accepted, `0` or `1`
    fn write(&mut self, byte: u8) -> usize;

    fn flush(&mut self);

    /// Boolean conversion of the stream object: always valid
    fn is_valid(&self) -> bool {
        true
    }
}

impl<T: ByteStream> SentinelStream for T {
    fn available(&mut self) -> i32 {
        i32::try_from(self.bytes_available()).unwrap_or(i32::MAX)
    }

    fn read(&mut self) -> i32 {
        self.read_byte().map_or(NO_DATA, i32::from)
    }

    fn peek(&mut self) -> i32 {
        self.peek_byte().map_or(NO_DATA, i32::from)
    }

    fn write(&mut self, byte: u8) -> usize {
        usize::from(self.write_byte(byte).is_ok())
    }

    fn flush(&mut self) {
        self.discard();
    }
}
