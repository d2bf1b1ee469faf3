// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration validation
//!
//! Port fields other than `strict_mode` are inert, so any value that
//! deserializes is accepted for them, including `baud_rate = 0`.

use crate::{ConfigError, ConfigResult, LoopserialConfig, LOG_LEVELS};

/// Validation errors that can occur during config validation
#[derive(Debug, Clone)]
pub enum ConfigValidationError {
    UnknownLogLevel { level: String },
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownLogLevel { level } => {
                write!(
                    f,
                    "Unknown log level '{}' (expected one of: {})",
                    level,
                    LOG_LEVELS.join(", ")
                )
            }
        }
    }
}

/// Validate the complete configuration
///
/// Checks that `logging.level` is a known level (case-insensitive).
///
/// # Errors
///
/// Returns `ConfigError::ValidationError` with details if validation fails
pub fn validate_config(config: &LoopserialConfig) -> ConfigResult<()> {
    let mut errors = Vec::new();

    validate_logging(config, &mut errors);

    if !errors.is_empty() {
        let error_messages = errors
            .iter()
            .map(|e| format!("  - {}", e))
            .collect::<Vec<_>>()
            .join("\n");

        return Err(ConfigError::ValidationError(format!(
            "Configuration validation failed:\n{}",
            error_messages
        )));
    }

    Ok(())
}

fn validate_logging(config: &LoopserialConfig, errors: &mut Vec<ConfigValidationError>) {
    let level = config.logging.level.to_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ConfigValidationError::UnknownLogLevel {
            level: config.logging.level.clone(),
        });
    }
}
