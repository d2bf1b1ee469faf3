// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Loopserial Core
//!
//! In-memory loopback stand-in for a byte-oriented serial port: bytes written
//! to a port are read back from the same port, with no hardware involved.
//!
//! ## Features
//! - ✅ `no_std` compatible (`std` enables `std::io` adapters)
//! - ✅ Fixed-size ring, no heap allocation
//! - ✅ Single-producer/single-consumer safe across execution contexts
//! - ✅ Software-serial style `listen()` arbitration through an injected gate
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────┐
//! │ LoopbackSerial<'g, N>        │  begin/end/listen/read/peek/write/flush
//! └──────┬───────────────┬───────┘
//!        │ owns          │ borrows (strict mode)
//! ┌──────▼───────┐ ┌─────▼────────┐
//! │ RingBuffer<N>│ │ ListenGate   │  one active PortId, lock-free
//! └──────────────┘ └──────────────┘
//! ```
//!
//! ## Usage
//!
//! ```
//! use loopserial_core::LoopbackSerial;
//!
//! let port = LoopbackSerial::new(); // non-strict: always listening
//! port.write(b'A').unwrap();
//! assert_eq!(port.available(), 1);
//! assert_eq!(port.read(), Ok(b'A'));
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]

/// Error types returned by port operations.
pub mod error;
/// Single-active-port arbitration.
pub mod gate;
/// Capability traits (serial, byte stream, sentinel view).
pub mod hal;
/// The loopback port itself.
pub mod port;
/// Fixed-capacity byte ring.
pub mod ring;
/// Construction-time settings (mostly inert).
pub mod settings;

// Re-export commonly used types
pub use error::{LoopbackError, LoopbackResult};
pub use gate::{ListenGate, PortId};
pub use hal::{ByteStream, SentinelStream, SerialIO, NO_DATA};
pub use port::{Arbitration, LoopbackSerial};
pub use ring::{RingBuffer, DEFAULT_SLOTS};
pub use settings::{PortSettings, DEFAULT_BAUD_RATE};

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
