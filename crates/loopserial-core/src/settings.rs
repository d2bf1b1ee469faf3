// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Construction-time port settings
//!
//! Mirrors the parameter shape of hardware software-serial constructors so
//! loopback ports drop in at existing call sites. Only `strict_mode` has an
//! effect; pins, line inversion and baud rate are accepted and ignored.

/// Default baud rate reported for inert configurations
pub const DEFAULT_BAUD_RATE: u32 = 9600;

/// Settings used to build a [`crate::LoopbackSerial`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortSettings {
    /// Require holding the listen gate before any I/O succeeds
    pub strict_mode: bool,
    /// Receive pin (inert)
    pub receive_pin: u8,
    /// Transmit pin (inert)
    pub transmit_pin: u8,
    /// Inverse line logic (inert)
    pub inverse_logic: bool,
    /// Baud rate (inert, no timing emulation)
    pub baud_rate: u32,
}

impl PortSettings {
    /// Settings for a strict port, pin arguments in software-serial order
    pub const fn with_pins(receive_pin: u8, transmit_pin: u8, inverse_logic: bool) -> Self {
        Self {
            strict_mode: true,
            receive_pin,
            transmit_pin,
            inverse_logic,
            baud_rate: DEFAULT_BAUD_RATE,
        }
    }
}

impl Default for PortSettings {
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
