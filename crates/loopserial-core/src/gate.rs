// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Listen gate: single-active-port arbitration
//!
//! Mirrors half-duplex software-serial hardware where only one port object
//! can be the active receiver. Strict ports register with a gate and must
//! hold it before any I/O succeeds. Activating a port silently displaces the
//! previous holder.
//!
//! The gate is an ordinary value injected into ports by reference, so tests
//! can create independent gates. Applications that want the classic global
//! behavior can place one in a `static`:
//!
//! ```
//! use loopserial_core::{ListenGate, LoopbackSerial};
//!
//! static GATE: ListenGate = ListenGate::new();
//!
//! let port: LoopbackSerial<'static> = LoopbackSerial::strict(&GATE);
//! assert!(port.listen());
//! assert!(GATE.is_held_by(port.id().unwrap()));
//! ```

use core::fmt;
use core::num::NonZeroU32;

use atomic_polyfill::{AtomicU32, Ordering};
use tracing::debug;

/// Raw value stored when no port holds the gate
const VACANT: u32 = 0;

/// Identity a gate hands out to each registered strict port
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PortId(NonZeroU32);

impl PortId {
    /// Numeric value (never zero)
    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for PortId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "port#{}", self.0)
    }
}

/// Process-wide arbitration deciding which strict port is listening
///
/// The active holder is a single atomic word, so readers never see a torn
/// owner and no lock is taken. At most one port id is stored at any instant.
pub struct ListenGate {
    active: AtomicU32,
    next_id: AtomicU32,
}

impl ListenGate {
    /// Create a vacant gate
    pub const fn new() -> Self {
        Self::with_next_id(1)
    }

    const fn with_next_id(next_id: u32) -> Self {
        Self {
            active: AtomicU32::new(VACANT),
            next_id: AtomicU32::new(next_id),
        }
    }

    /// Issue a fresh id for a strict port
    ///
    /// Ids are never reused, so a gate can register at most `u32::MAX - 1`
    /// ports over its lifetime.
    ///
    /// # Panics
    /// When the id space is exhausted.
    pub fn register(&self) -> PortId {
        let mut current = self.next_id.load(Ordering::Relaxed);
        loop {
            let (Some(id), Some(next)) = (NonZeroU32::new(current), current.checked_add(1)) else {
                panic!("listen gate has no port ids left");
            };
            match self
                .next_id
                .compare_exchange(current, next, Ordering::Relaxed, Ordering::Relaxed)
            {
                Ok(_) => return PortId(id),
                Err(actual) => current = actual,
            }
        }
    }

    /// Install `id` as the sole holder
    ///
    /// Returns `false` if `id` already held the gate (nothing changes).
    /// Otherwise any previous holder is displaced without notification.
    pub fn acquire(&self, id: PortId) -> bool {
        let previous = self.active.swap(id.get(), Ordering::AcqRel);
        if previous == id.get() {
            return false;
        }

        match NonZeroU32::new(previous) {
            Some(displaced) => debug!(
                port = id.get(),
                displaced = displaced.get(),
                "listen gate handed over"
            ),
            None => debug!(port = id.get(), "listen gate acquired"),
        }
        true
    }

    /// Vacate the gate if `id` holds it
    ///
    /// Returns `true` only if `id` was the holder.
    pub fn release(&self, id: PortId) -> bool {
        let released = self
            .active
            .compare_exchange(id.get(), VACANT, Ordering::AcqRel, Ordering::Acquire)
            .is_ok();
        if released {
            debug!(port = id.get(), "listen gate released");
        }
        released
    }

    /// Current holder, if any
    pub fn holder(&self) -> Option<PortId> {
        NonZeroU32::new(self.active.load(Ordering::Acquire)).map(PortId)
    }

    pub fn is_held_by(&self, id: PortId) -> bool {
        self.active.load(Ordering::Acquire) == id.get()
    }

    pub fn is_vacant(&self) -> bool {
        self.active.load(Ordering::Acquire) == VACANT
    }
}

impl Default for ListenGate {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ListenGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenGate")
            .field("holder", &self.holder())
            .finish()
    }
}
