// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Loopback Echo Tool

Pushes each stdin line through a loopback port and prints what comes back.
Lines longer than the port's usable capacity come back truncated and the
overflow is reported.

Usage:
  cargo run --bin loopback_echo -- [CONFIG] [--strict-mode <BOOL>] [--baud-rate <N>]
                                   [--log-level <LEVEL>] [--debug-all | --debug-<crate>]

Example:
  printf 'hello\nworld\n' | cargo run --bin loopback_echo -- loopserial.toml
*/

use std::collections::HashMap;
use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use loopserial::config::{
    apply_cli_overrides, apply_environment_overrides, load_config, validate_config, ConfigError,
    LoopserialConfig,
};
use loopserial::observability::{debug_flags_help, init_logging, split_debug_flags};
use loopserial::prelude::*;
use tracing::{info, warn};

/// Echo stdin lines through an in-memory loopback serial port
#[derive(Parser, Debug)]
#[command(name = "loopback_echo", version, about, after_help = debug_flags_help())]
struct Args {
    /// Path to loopserial.toml (searched for when omitted)
    config: Option<PathBuf>,

    /// Override port.strict_mode
    #[arg(long)]
    strict_mode: Option<bool>,

    /// Override port.baud_rate (inert)
    #[arg(long)]
    baud_rate: Option<u32>,

    /// Override logging.level
    #[arg(long)]
    log_level: Option<String>,
}

impl Args {
    /// Dotted-key overrides understood by the config loader
    fn overrides(&self) -> HashMap<String, String> {
        let mut overrides = HashMap::new();
        if let Some(strict) = self.strict_mode {
            overrides.insert("port.strict_mode".to_string(), strict.to_string());
        }
        if let Some(baud) = self.baud_rate {
            overrides.insert("port.baud_rate".to_string(), baud.to_string());
        }
        if let Some(level) = &self.log_level {
            overrides.insert("logging.level".to_string(), level.clone());
        }
        overrides
    }
}

fn main() -> Result<()> {
    let (debug_flags, cli_args) = split_debug_flags(std::env::args());
    let args = Args::parse_from(cli_args);

    let config = load_or_default(&args)?;
    validate_config(&config).context("Invalid loopserial configuration")?;

    init_logging(&debug_flags, &config.logging.level)?;

    let gate = ListenGate::new();
    let port = LoopbackSerial::with_settings(&config.port.settings(), Some(&gate))
        .context("Failed to build loopback port")?;
    port.begin_with_baud(config.port.baud_rate);
    if port.is_strict() {
        port.listen();
    }
    info!(
        strict = port.is_strict(),
        capacity = port.capacity(),
        "loopback port ready"
    );

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read stdin")?;
        let accepted = port.write_bytes(line.as_bytes());

        let mut echoed = Vec::with_capacity(accepted);
        while let Ok(byte) = port.read() {
            echoed.push(byte);
        }
        println!("{}", String::from_utf8_lossy(&echoed));

        if port.overflow() {
            warn!(
                dropped = line.len() - accepted,
                capacity = port.capacity(),
                "line exceeded loopback capacity"
            );
        }
    }

    port.end();
    Ok(())
}

/// Load the config file, or fall back to defaults when none was named and
/// none was found
fn load_or_default(args: &Args) -> Result<LoopserialConfig> {
    let overrides = args.overrides();
    match load_config(args.config.as_deref(), Some(&overrides)) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) if args.config.is_none() => {
            let mut config = LoopserialConfig::default();
            apply_environment_overrides(&mut config);
            apply_cli_overrides(&mut config, &overrides);
            Ok(config)
        }
        Err(e) => Err(e).context("Failed to load loopserial configuration"),
    }
}
