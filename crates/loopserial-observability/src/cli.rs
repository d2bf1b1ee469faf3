// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! CLI argument parsing for per-crate debug flags
//!
//! Supports flags like `--debug-loopserial-core` to enable debug logging
//! per crate.

use std::collections::BTreeSet;
use std::env;

use crate::KNOWN_CRATES;

/// Environment variable listing crates to debug (comma-separated, or `all`)
pub const DEBUG_ENV: &str = "LOOPSERIAL_DEBUG";

/// Per-crate debug flags
///
/// # Example
/// ```rust
/// use loopserial_observability::CrateDebugFlags;
///
/// let flags = CrateDebugFlags::from_args(vec!["--debug-loopserial-core".to_string()]);
/// assert!(flags.is_enabled("loopserial-core"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct CrateDebugFlags {
    pub enabled_crates: BTreeSet<String>,
}

impl CrateDebugFlags {
    /// Parse debug flags from command-line arguments
    ///
    /// Looks for arguments matching `--debug-{crate-name}` pattern.
    /// Also supports `--debug-all` to enable all crates.
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut flags = CrateDebugFlags::default();

        for arg in args {
            if arg == "--debug-all" {
                flags.enable_all();
                continue;
            }
            if let Some(crate_name) = arg.strip_prefix("--debug-") {
                flags.enable(crate_name);
            }
        }

        flags
    }

    /// Merge crates named in a `LOOPSERIAL_DEBUG`-style value
    pub fn merge_env_value(&mut self, value: &str) {
        if value.trim() == "all" {
            self.enable_all();
            return;
        }
        for crate_name in value.split(',') {
            let crate_name = crate_name.trim();
            if !crate_name.is_empty() {
                self.enable(crate_name);
            }
        }
    }

    pub fn enable(&mut self, crate_name: &str) {
        self.enabled_crates.insert(crate_name.to_string());
    }

    fn enable_all(&mut self) {
        for crate_name in KNOWN_CRATES {
            self.enable(crate_name);
        }
    }

    /// Check if debug is enabled for a specific crate
    pub fn is_enabled(&self, crate_name: &str) -> bool {
        self.enabled_crates.contains(crate_name)
    }

    /// Check if debug is enabled for any crate
    pub fn any_enabled(&self) -> bool {
        !self.enabled_crates.is_empty()
    }

    /// Create a tracing filter from debug flags
    ///
    /// Crate names are turned into tracing targets (`-` becomes `_`).
    /// Format: `"loopserial_core=debug,info"`, or just `default_level` when
    /// no crate is enabled.
    pub fn to_filter_string(&self, default_level: &str) -> String {
        let mut filters: Vec<String> = self
            .enabled_crates
            .iter()
            .map(|crate_name| format!("{}=debug", crate_name.replace('-', "_")))
            .collect();
        filters.push(default_level.to_lowercase());
        filters.join(",")
    }
}

/// Pull `--debug-*` flags out of `args`, merging `LOOPSERIAL_DEBUG`
///
/// Returns the flags and the remaining arguments, in order, for the
/// binary's own argument parser.
pub fn split_debug_flags<I>(args: I) -> (CrateDebugFlags, Vec<String>)
where
    I: IntoIterator<Item = String>,
{
    let (debug_args, rest): (Vec<String>, Vec<String>) =
        args.into_iter().partition(|arg| arg.starts_with("--debug-"));

    let mut flags = CrateDebugFlags::from_args(debug_args);
    if let Ok(value) = env::var(DEBUG_ENV) {
        flags.merge_env_value(&value);
    }
    (flags, rest)
}

/// Generate help text for debug flags
pub fn debug_flags_help() -> String {
    format!(
        r#"Debug Flags:
  --debug-all                    Enable debug logging for all crates
  --debug-{{crate-name}}          Enable debug logging for specific crate

Available crates:
  {}

Environment Variable:
  {}={{crate-name}}[,{{crate-name}}]  Enable debug for crates (comma-separated)
  {}=all                               Enable debug for all crates
"#,
        KNOWN_CRATES.join(", "),
        DEBUG_ENV,
        DEBUG_ENV
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_args() {
        let args = vec![
            "loopback_echo".to_string(),
            "--debug-loopserial-core".to_string(),
            "config.toml".to_string(),
        ];
        let flags = CrateDebugFlags::from_args(args);
        assert!(flags.is_enabled("loopserial-core"));
        assert!(!flags.is_enabled("loopserial-config"));
    }

    #[test]
    fn test_split_debug_flags_keeps_other_args() {
        let args = [
            "loopback_echo",
            "--debug-loopserial-config",
            "--config",
            "loopserial.toml",
            "--debug-loopserial-core",
        ]
        .map(String::from);

        let (flags, rest) = split_debug_flags(args);
        assert!(flags.is_enabled("loopserial-config"));
        assert!(flags.is_enabled("loopserial-core"));
        assert_eq!(rest, ["loopback_echo", "--config", "loopserial.toml"]);
    }

    #[test]
    fn test_debug_all() {
        let flags = CrateDebugFlags::from_args(vec!["--debug-all".to_string()]);
        for crate_name in KNOWN_CRATES {
            assert!(flags.is_enabled(crate_name));
        }
    }

    #[test]
    fn test_merge_env_value() {
        let mut flags = CrateDebugFlags::default();
        flags.merge_env_value(" loopserial-config, ,loopserial ");
        assert!(flags.is_enabled("loopserial-config"));
        assert!(flags.is_enabled("loopserial"));
        assert_eq!(flags.enabled_crates.len(), 2);
    }

    #[test]
    fn test_filter_string() {
        assert_eq!(CrateDebugFlags::default().to_filter_string("WARN"), "warn");

        let flags = CrateDebugFlags::from_args(vec!["--debug-loopserial-core".to_string()]);
        assert_eq!(flags.to_filter_string("info"), "loopserial_core=debug,info");
    }

    #[test]
    fn test_help_lists_crates() {
        let help = debug_flags_help();
        assert!(help.contains("loopserial-core"));
        assert!(help.contains(DEBUG_ENV));
    }
}
