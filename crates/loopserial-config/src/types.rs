// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration type definitions
//!
//! This module defines all configuration structs that map to sections in
//! `loopserial.toml`.

use loopserial_core::{PortSettings, DEFAULT_BAUD_RATE};
use serde::{Deserialize, Serialize};

/// Default configuration file name
pub const CONFIG_FILE_NAME: &str = "loopserial.toml";

/// Log levels accepted by `logging.level`
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct LoopserialConfig {
    pub port: PortConfig,
    pub logging: LoggingConfig,
}

/// Loopback port configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PortConfig {
    /// Require `listen()` before I/O (software-serial arbitration)
    pub strict_mode: bool,
    /// Inert, kept for call-site compatibility
    pub receive_pin: u8,
    /// Inert, kept for call-site compatibility
    pub transmit_pin: u8,
    /// Inert, kept for call-site compatibility
    pub inverse_logic: bool,
    /// Inert; no baud timing is emulated
    pub baud_rate: u32,
}

impl PortConfig {
    /// Core settings for building a port
    pub fn settings(&self) -> PortSettings {
        PortSettings::from(self)
    }
}

impl Default for PortConfig {
    fn default() -> Self {
        Self {
            strict_mode: false,
            receive_pin: 0,
            transmit_pin: 0,
            inverse_logic: false,
            baud_rate: DEFAULT_BAUD_RATE,
        }
    }
}

impl From<&PortConfig> for PortSettings {
    fn from(config: &PortConfig) -> Self {
        PortSettings {
            strict_mode: config.strict_mode,
            receive_pin: config.receive_pin,
            transmit_pin: config.transmit_pin,
            inverse_logic: config.inverse_logic,
            baud_rate: config.baud_rate,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}
