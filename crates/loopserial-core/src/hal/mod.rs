// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Capability contracts a loopback port satisfies
//!
//! Code written against these traits accepts a [`crate::LoopbackSerial`]
//! wherever a real serial port would be used:
//! - Slice-level UART I/O (SerialIO)
//! - Byte-level reads, peeks and writes (ByteStream)
//! - Arduino-style sentinel returns (SentinelStream)

/// Serial input/output traits for UART-style communication.
pub mod serial;
/// Byte-level stream capability traits (Readable + Writable + Peekable).
pub mod stream;

// Re-export trait types
pub use serial::SerialIO;
pub use stream::{ByteStream, SentinelStream, NO_DATA};
