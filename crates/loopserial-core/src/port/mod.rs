// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Loopback serial port
//!
//! Bytes written to a port are read back from the same port. Strict ports
//! only operate while they hold their [`ListenGate`]; free ports are always
//! listening.
//!
//! ```
//! use loopserial_core::{ListenGate, LoopbackError, LoopbackSerial};
//!
//! let gate = ListenGate::new();
//! let a = LoopbackSerial::strict(&gate);
//! let b = LoopbackSerial::strict(&gate);
//!
//! assert_eq!(a.write(b'x'), Err(LoopbackError::NotListening));
//! assert!(a.listen());
//! a.write(b'x').unwrap();
//!
//! assert!(b.listen()); // displaces `a`
//! assert!(!a.is_listening());
//! assert_eq!(a.available(), 0);
//! ```

mod io;
mod streams;

use tracing::trace;

use crate::error::{LoopbackError, LoopbackResult};
use crate::gate::{ListenGate, PortId};
use crate::ring::{RingBuffer, DEFAULT_SLOTS};
use crate::settings::PortSettings;

/// Arbitration policy, fixed at construction
#[derive(Debug)]
pub struct Arbitration<'g> {
    strict: Option<(&'g ListenGate, PortId)>,
}

impl<'g> Arbitration<'g> {
    /// Always listening, never touches a gate
    pub const fn free() -> Self {
        Self { strict: None }
    }

    /// Listening only while holding `gate`; registers a fresh port id
    pub fn strict(gate: &'g ListenGate) -> Self {
        Self {
            strict: Some((gate, gate.register())),
        }
    }

    pub fn is_strict(&self) -> bool {
        self.strict.is_some()
    }
}

/// In-memory loopback stand-in for a software serial port
///
/// `N` is the slot count of the ring (usable capacity `N - 1`). Operations
/// take `&self` so one producer context and one consumer context can share
/// a port.
pub struct LoopbackSerial<'g, const N: usize = DEFAULT_SLOTS> {
    ring: RingBuffer<N>,
    arbitration: Arbitration<'g>,
}

impl LoopbackSerial<'static, DEFAULT_SLOTS> {
    /// Non-strict port: always listening, no gate involved
    pub fn new() -> Self {
        Self::with_arbitration(Arbitration::free())
    }
}

impl Default for LoopbackSerial<'static, DEFAULT_SLOTS> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'g> LoopbackSerial<'g, DEFAULT_SLOTS> {
    /// Strict port arbitrated by `gate`
    pub fn strict(gate: &'g ListenGate) -> Self {
        Self::with_arbitration(Arbitration::strict(gate))
    }

    /// Strict port with software-serial constructor shape
    ///
    /// `receive_pin`, `transmit_pin` and `inverse_logic` are accepted for
    /// call-site compatibility and have no effect.
    pub fn with_pins(
        gate: &'g ListenGate,
        receive_pin: u8,
        transmit_pin: u8,
        inverse_logic: bool,
    ) -> Self {
        let _ = (receive_pin, transmit_pin, inverse_logic);
        Self::strict(gate)
    }

    /// Build from settings; see [`LoopbackSerial::from_settings`]
    pub fn with_settings(
        settings: &PortSettings,
        gate: Option<&'g ListenGate>,
    ) -> LoopbackResult<Self> {
        Self::from_settings(settings, gate)
    }
}

impl<'g, const N: usize> LoopbackSerial<'g, N> {
    /// Port of any slot count with an explicit arbitration policy
    pub fn with_arbitration(arbitration: Arbitration<'g>) -> Self {
        Self {
            ring: RingBuffer::new(),
            arbitration,
        }
    }

    /// Build from settings
    ///
    /// Only `strict_mode` is honored; every other field is inert.
    ///
    /// # Errors
    /// `LoopbackError::MissingGate` when strict mode is requested without a gate.
    pub fn from_settings(
        settings: &PortSettings,
        gate: Option<&'g ListenGate>,
    ) -> LoopbackResult<Self> {
        let arbitration = match (settings.strict_mode, gate) {
            (true, Some(gate)) => Arbitration::strict(gate),
            (true, None) => return Err(LoopbackError::MissingGate),
            (false, _) => Arbitration::free(),
        };
        Ok(Self::with_arbitration(arbitration))
    }

    /// Reset buffer offsets and overflow status
    pub fn begin(&self) {
        self.ring.reset();
    }

    /// Same as [`begin`](Self::begin); `baud` is inert
    pub fn begin_with_baud(&self, baud: u32) {
        let _ = baud;
        self.begin();
    }

    /// Rewind buffer offsets and give up the gate if held
    ///
    /// The overflow flag is left for a later [`overflow`](Self::overflow) query.
    pub fn end(&self) {
        self.ring.rewind();
        if let Some((gate, id)) = self.arbitration.strict {
            gate.release(id);
        }
    }

    /// Become the active listener
    ///
    /// Strict ports take the gate from whoever holds it and start from an
    /// empty buffer; returns `false` (and keeps the buffer) if this port
    /// already held it. Free ports return `true` and change nothing.
    pub fn listen(&self) -> bool {
        match self.arbitration.strict {
            Some((gate, id)) => {
                if !gate.acquire(id) {
                    return false;
                }
                self.ring.reset();
                trace!(port = id.get(), "buffer reset on listen");
                true
            }
            None => true,
        }
    }

    pub fn is_listening(&self) -> bool {
        match self.arbitration.strict {
            Some((gate, id)) => gate.is_held_by(id),
            None => true,
        }
    }

    /// Buffered byte count, `0` when not listening
    pub fn available(&self) -> usize {
        if !self.is_listening() {
            return 0;
        }
        self.ring.len()
    }

    /// Consume the oldest byte
    pub fn read(&self) -> LoopbackResult<u8> {
        self.ensure_listening()?;
        self.ring.pop().ok_or(LoopbackError::Empty)
    }

    /// Return the oldest byte without consuming it
    pub fn peek(&self) -> LoopbackResult<u8> {
        self.ensure_listening()?;
        self.ring.peek().ok_or(LoopbackError::Empty)
    }

    /// Append one byte
    ///
    /// # Errors
    /// - `NotListening` if a strict port does not hold the gate
    /// - `Full` if usable capacity is reached; the byte is dropped and
    ///   the overflow flag latched
    pub fn write(&self, byte: u8) -> LoopbackResult<()> {
        self.ensure_listening()?;
        self.ring.push(byte)
    }

    /// Write bytes in order until one is refused
    ///
    /// Returns the number of bytes accepted.
    pub fn write_bytes(&self, data: &[u8]) -> usize {
        data.iter()
            .take_while(|&&byte| self.write(byte).is_ok())
            .count()
    }

    /// Discard buffered bytes and clear overflow; no-op when not listening
    pub fn flush(&self) {
        if self.is_listening() {
            self.ring.reset();
        }
    }

    /// Read-and-clear: did a write overflow since the last query?
    pub fn overflow(&self) -> bool {
        self.ring.take_overflow()
    }

    /// Boolean conversion of the port object: always valid
    pub fn is_valid(&self) -> bool {
        true
    }

    /// Gate-issued id (strict ports only)
    pub fn id(&self) -> Option<PortId> {
        self.arbitration.strict.map(|(_, id)| id)
    }

    pub fn is_strict(&self) -> bool {
        self.arbitration.is_strict()
    }

    /// Usable capacity in bytes
    pub const fn capacity(&self) -> usize {
        N - 1
    }

    fn ensure_listening(&self) -> LoopbackResult<()> {
        if self.is_listening() {
            Ok(())
        } else {
            Err(LoopbackError::NotListening)
        }
    }
}

impl<const N: usize> Drop for LoopbackSerial<'_, N> {
    fn drop(&mut self) {
        self.end();
    }
}

impl<const N: usize> core::fmt::Debug for LoopbackSerial<'_, N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LoopbackSerial")
            .field("id", &self.id())
            .field("strict", &self.is_strict())
            .field("listening", &self.is_listening())
            .field("ring", &self.ring)
            .finish()
    }
}
