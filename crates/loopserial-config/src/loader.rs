// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Loading `loopserial.toml`
//!
//! Later layers win: file, then `LOOPSERIAL_*` environment variables, then
//! dotted-key overrides from the command line.

use crate::{ConfigError, ConfigResult, LoopserialConfig, CONFIG_FILE_NAME};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Environment variable naming a config file explicitly
pub const CONFIG_PATH_ENV: &str = "LOOPSERIAL_CONFIG_PATH";

/// Parent directories searched above the working directory
const PARENT_SEARCH_DEPTH: usize = 5;

/// Locate `loopserial.toml`
///
/// `LOOPSERIAL_CONFIG_PATH` wins when set and must name an existing file.
/// Otherwise the working directory and up to five of its parents are tried,
/// nearest first.
pub fn find_config_file() -> ConfigResult<PathBuf> {
    if let Ok(explicit) = env::var(CONFIG_PATH_ENV) {
        let path = PathBuf::from(explicit);
        if path.is_file() {
            return Ok(path);
        }
        return Err(ConfigError::FileNotFound(format!(
            "{} points to {}, which does not exist",
            CONFIG_PATH_ENV,
            path.display()
        )));
    }

    let cwd = env::current_dir()?;
    cwd.ancestors()
        .take(PARENT_SEARCH_DEPTH + 1)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find(|candidate| candidate.is_file())
        .ok_or_else(|| {
            ConfigError::FileNotFound(format!(
                "no {} in {} or its {} nearest parents (set {} to point at one)",
                CONFIG_FILE_NAME,
                cwd.display(),
                PARENT_SEARCH_DEPTH,
                CONFIG_PATH_ENV
            ))
        })
}

/// Read `config_path` (or the file [`find_config_file`] locates), then
/// layer environment and `cli_args` overrides on top
///
/// Validation is left to [`crate::validate_config`].
pub fn load_config(
    config_path: Option<&Path>,
    cli_args: Option<&HashMap<String, String>>,
) -> ConfigResult<LoopserialConfig> {
    let config_file = if let Some(path) = config_path {
        path.to_path_buf()
    } else {
        find_config_file()?
    };
    debug!(path = %config_file.display(), "loading loopserial config");

    let content = fs::read_to_string(&config_file)?;
    let mut config: LoopserialConfig = toml::from_str(&content)?;

    apply_environment_overrides(&mut config);

    if let Some(cli) = cli_args {
        apply_cli_overrides(&mut config, cli);
    }

    Ok(config)
}

/// Apply environment variable overrides to configuration
///
/// Supported environment variables:
/// - `LOOPSERIAL_STRICT_MODE` -> `port.strict_mode`
/// - `LOOPSERIAL_BAUD_RATE` -> `port.baud_rate`
/// - `LOOPSERIAL_LOG_LEVEL` -> `logging.level`
pub fn apply_environment_overrides(config: &mut LoopserialConfig) {
    if let Ok(value) = env::var("LOOPSERIAL_STRICT_MODE") {
        set_strict_mode(config, "LOOPSERIAL_STRICT_MODE", &value);
    }
    if let Ok(value) = env::var("LOOPSERIAL_BAUD_RATE") {
        set_baud_rate(config, "LOOPSERIAL_BAUD_RATE", &value);
    }
    if let Ok(value) = env::var("LOOPSERIAL_LOG_LEVEL") {
        config.logging.level = value;
    }
}

/// Apply dotted-key overrides such as `port.baud_rate = "19200"`
pub fn apply_cli_overrides(config: &mut LoopserialConfig, cli_args: &HashMap<String, String>) {
    if let Some(value) = cli_args.get("port.strict_mode") {
        set_strict_mode(config, "port.strict_mode", value);
    }
    if let Some(value) = cli_args.get("port.baud_rate") {
        set_baud_rate(config, "port.baud_rate", value);
    }
    if let Some(value) = cli_args.get("logging.level") {
        config.logging.level = value.clone();
    }
}

fn set_strict_mode(config: &mut LoopserialConfig, source: &str, value: &str) {
    match parse_flag(value) {
        Some(flag) => config.port.strict_mode = flag,
        None => warn!(source, value, "ignoring non-boolean strict_mode override"),
    }
}

fn set_baud_rate(config: &mut LoopserialConfig, source: &str, value: &str) {
    match value.parse::<u32>() {
        Ok(baud) => config.port.baud_rate = baud,
        Err(_) => warn!(source, value, "ignoring non-numeric baud_rate override"),
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
