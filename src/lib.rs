// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Loopserial - in-memory loopback serial ports
//!
//! Data written to a loopback port is read back from the same port, with no
//! UART behind it. Code written against a serial/stream interface can be
//! exercised in tests and simulations that have no hardware.
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! loopserial = "0.1"  # Default: std + config + observability
//! ```
//!
//! ## Feature Flags
//!
//! - **`std`** (default): `std::io::Read`/`Write` on ports
//! - **`config`** (default): TOML configuration loader
//! - **`observability`** (default): tracing subscriber setup for tools
//! - **`tools`** (default): builds the `loopback_echo` binary
//!
//! For `no_std` targets depend on `loopserial` with
//! `default-features = false`, or on `loopserial-core` directly.
//!
//! ## Usage Examples
//!
//! ### Free port (always listening)
//!
//! ```rust
//! use loopserial::prelude::*;
//!
//! let port = LoopbackSerial::new();
//! port.write(b'A').unwrap();
//! assert_eq!(port.read(), Ok(b'A'));
//! ```
//!
//! ### Strict ports sharing a gate
//!
//! ```rust
//! use loopserial::prelude::*;
//!
//! let gate = ListenGate::new();
//! let a = LoopbackSerial::strict(&gate);
//! let b = LoopbackSerial::strict(&gate);
//!
//! a.listen();
//! a.write(1).unwrap();
//! b.listen(); // `a` stops listening
//! assert_eq!(a.read(), Err(LoopbackError::NotListening));
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Core: loopserial-core (re-exported as `loopback`)      │
//! │  (RingBuffer, ListenGate, LoopbackSerial, traits)       │
//! └─────────────────────────────────────────────────────────┘
//!                         ↓
//! ┌─────────────────────────────────────────────────────────┐
//! │  Infrastructure: loopserial-config,                     │
//! │  loopserial-observability (std only)                    │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## License
//!
//! Apache-2.0

#![cfg_attr(not(feature = "std"), no_std)]

// Re-export core
pub use loopserial_core as loopback;

// Re-export infrastructure
#[cfg(feature = "config")]
pub use loopserial_config as config;

#[cfg(feature = "observability")]
pub use loopserial_observability as observability;

/// Prelude - commonly used types and traits
pub mod prelude {
    pub use loopserial_core::{
        Arbitration, ByteStream, ListenGate, LoopbackError, LoopbackResult, LoopbackSerial,
        PortId, PortSettings, RingBuffer, SentinelStream, SerialIO, DEFAULT_SLOTS, NO_DATA,
    };

    #[cfg(feature = "config")]
    pub use crate::config::{load_config, validate_config, LoopserialConfig};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_facade_imports() {
        use crate::prelude::*;
        let port = LoopbackSerial::new();
        assert!(port.is_listening());
        assert_eq!(port.capacity(), DEFAULT_SLOTS - 1);
    }
}
