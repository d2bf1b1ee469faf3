// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! `std::io` adapters
//!
//! - not listening: `ErrorKind::NotConnected`
//! - nothing to read, or no room for the first byte: `ErrorKind::WouldBlock`
//! - `io::Write::flush` does nothing; buffered bytes are already readable.
//!   Use [`LoopbackSerial::flush`] to discard them.

#![cfg(feature = "std")]

use std::io;

use super::LoopbackSerial;
use crate::error::LoopbackError;

impl From<LoopbackError> for io::Error {
    fn from(err: LoopbackError) -> Self {
        let kind = match err {
            LoopbackError::NotListening => io::ErrorKind::NotConnected,
            LoopbackError::Empty | LoopbackError::Full => io::ErrorKind::WouldBlock,
            LoopbackError::MissingGate => io::ErrorKind::InvalidInput,
        };
        io::Error::new(kind, err)
    }
}

impl<const N: usize> io::Read for LoopbackSerial<'_, N> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        let count = crate::hal::SerialIO::read(self, buf)?;
        if count == 0 {
            return Err(LoopbackError::Empty.into());
        }
        Ok(count)
    }
}

impl<const N: usize> io::Write for LoopbackSerial<'_, N> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(crate::hal::SerialIO::write(self, buf)?)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
