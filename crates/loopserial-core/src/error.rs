// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Error types for loopback port operations
//!
//! All failures are local and silent: they are returned to the caller and
//! never abort, panic or get logged as errors. The only durable failure
//! signal is the sticky overflow flag, polled with `overflow()`.

use core::fmt;

/// Reason a byte operation did not complete
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoopbackError {
    /// Port is in strict mode and does not currently hold the listen gate
    NotListening,
    /// Nothing buffered to read or peek
    Empty,
    /// Usable capacity reached; the new byte was dropped and overflow latched
    Full,
    /// Strict mode requested without a gate to arbitrate on
    MissingGate,
}

impl fmt::Display for LoopbackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotListening => write!(f, "port is not the active listener"),
            Self::Empty => write!(f, "no data buffered"),
            Self::Full => write!(f, "buffer full, byte dropped"),
            Self::MissingGate => write!(f, "strict mode requires a listen gate"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LoopbackError {}

/// Result type for loopback operations
pub type LoopbackResult<T> = Result<T, LoopbackError>;
