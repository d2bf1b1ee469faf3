// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Console logging initialization

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

use crate::cli::CrateDebugFlags;

/// Build the filter used by [`init_logging`]
///
/// Debug flags take precedence; otherwise `RUST_LOG` if set; otherwise
/// `default_level`.
pub fn build_filter(debug_flags: &CrateDebugFlags, default_level: &str) -> Result<EnvFilter> {
    if debug_flags.any_enabled() {
        let directives = debug_flags.to_filter_string(default_level);
        return EnvFilter::try_new(&directives)
            .with_context(|| format!("Invalid log filter: {}", directives));
    }

    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    EnvFilter::try_new(default_level.to_lowercase())
        .with_context(|| format!("Invalid log level: {}", default_level))
}

/// Install a console subscriber
///
/// # Arguments
/// * `debug_flags` - Per-crate debug flags for filtering
/// * `default_level` - Level for everything not named by a flag
///
/// # Errors
/// Fails if the filter does not parse or a global subscriber is already set.
pub fn init_logging(debug_flags: &CrateDebugFlags, default_level: &str) -> Result<()> {
    let filter = build_filter(debug_flags, default_level)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to install tracing subscriber: {}", e))
}
