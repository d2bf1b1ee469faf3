// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/// Slice-level serial port contract
///
/// Calls never block. Short writes and short reads are normal results, not
/// errors.
pub trait SerialIO {
    type Error;

    /// Queue as many bytes of `data` as fit; returns how many were taken
    fn write(&mut self, data: &[u8]) -> Result<usize, Self::Error>;

    /// Fill `buffer` from pending input; `Ok(0)` when nothing is pending
    fn read(&mut self, buffer: &mut [u8]) -> Result<usize, Self::Error>;

    fn flush(&mut self) -> Result<(), Self::Error>;

    /// Pending input byte count; ports without a receive queue report 0
    fn available(&self) -> Result<usize, Self::Error> {
        Ok(0)
    }
}
