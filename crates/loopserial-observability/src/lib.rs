// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # loopserial-observability
//!
//! Logging setup shared by loopserial tools and test harnesses.
//!
//! Library crates only emit `tracing` events; binaries call
//! [`init_logging`] once to install a console subscriber whose filter is
//! built from per-crate debug flags (`--debug-loopserial-core`,
//! `--debug-all`, `LOOPSERIAL_DEBUG`) or the configured log level.

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cli;
pub mod init;

// Re-export commonly used items
pub use cli::*;
pub use init::*;

/// Known loopserial crate names for debug flags
pub const KNOWN_CRATES: &[&str] = &["loopserial", "loopserial-core", "loopserial-config"];
