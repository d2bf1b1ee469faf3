// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Fixed-size byte ring for loopback ports
//!
//! Bytes are written at `tail` and read from `head`. One slot is always kept
//! free so that `head == tail` means empty, which leaves `N - 1` usable bytes.
//!
//! Every slot and index is an atomic so one producer (an interrupt-like
//! source) and one consumer (polling application code) can share a ring
//! without register caching or reordering. Producer stores the slot, then
//! publishes `tail` with `Release`; consumer loads `tail` with `Acquire`
//! before touching the slot. Multiple producers or multiple consumers are
//! not supported.

use atomic_polyfill::{AtomicBool, AtomicU8, AtomicUsize, Ordering};
use tracing::trace;

use crate::error::{LoopbackError, LoopbackResult};

/// Slot count of the reference sizing (63 usable bytes)
pub const DEFAULT_SLOTS: usize = 64;

#[allow(clippy::declare_interior_mutable_const)]
const EMPTY_SLOT: AtomicU8 = AtomicU8::new(0);

/// Fixed-capacity single-producer/single-consumer byte ring
///
/// Overflow policy is reject-newest: a write against a full ring drops the
/// incoming byte, keeps everything already buffered and latches a sticky
/// overflow flag that only [`RingBuffer::take_overflow`] or a reset clears.
///
/// # Example
/// ```
/// use loopserial_core::RingBuffer;
///
/// let ring = RingBuffer::<4>::new();
/// assert_eq!(ring.capacity(), 3);
/// ring.push(7).unwrap();
/// assert_eq!(ring.pop(), Some(7));
/// ```
pub struct RingBuffer<const N: usize = DEFAULT_SLOTS> {
    slots: [AtomicU8; N],
    head: AtomicUsize,
    tail: AtomicUsize,
    overflow: AtomicBool,
}

impl<const N: usize> RingBuffer<N> {
    const VALID_SLOTS: () = assert!(
        N >= 2,
        "RingBuffer needs at least 2 slots: one is reserved to tell full from empty"
    );

    /// Create an empty ring
    pub const fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::VALID_SLOTS;
        Self {
            slots: [EMPTY_SLOT; N],
            head: AtomicUsize::new(0),
            tail: AtomicUsize::new(0),
            overflow: AtomicBool::new(false),
        }
    }

    /// Number of physical slots (`N`)
    pub const fn slots(&self) -> usize {
        N
    }

    /// Usable capacity in bytes (`N - 1`)
    pub const fn capacity(&self) -> usize {
        N - 1
    }

    /// Occupied byte count, `(tail + N - head) mod N`
    pub fn len(&self) -> usize {
        let head = self.head.load(Ordering::Acquire);
        let tail = self.tail.load(Ordering::Acquire);
        (tail + N - head) % N
    }

    pub fn is_empty(&self) -> bool {
        self.head.load(Ordering::Acquire) == self.tail.load(Ordering::Acquire)
    }

    pub fn is_full(&self) -> bool {
        let tail = self.tail.load(Ordering::Acquire);
        (tail + 1) % N == self.head.load(Ordering::Acquire)
    }

    /// Append one byte at `tail`
    ///
    /// # Errors
    /// `LoopbackError::Full` when `N - 1` bytes are already held. The byte is
    /// dropped and the overflow flag is latched.
    pub fn push(&self, byte: u8) -> LoopbackResult<()> {
        let tail = self.tail.load(Ordering::Acquire);
        let next = (tail + 1) % N;

        if next == self.head.load(Ordering::Acquire) {
            if !self.overflow.swap(true, Ordering::AcqRel) {
                trace!(slots = N, "loopback ring overflow latched");
            }
            return Err(LoopbackError::Full);
        }

        self.slots[tail].store(byte, Ordering::Relaxed);
        self.tail.store(next, Ordering::Release);
        Ok(())
    }

    /// Remove and return the byte at `head`
    pub fn pop(&self) -> Option<u8> {
        let head = self.head.load(Ordering::Acquire);
        if head == self.tail.load(Ordering::Acquire) {
            return None;
        }

        let byte = self.slots[head].load(Ordering::Relaxed);
        self.head.store((head + 1) % N, Ordering::Release);
        Some(byte)
    }

    /// Return the byte at `head` without consuming it
    pub fn peek(&self) -> Option<u8> {
        let head = self.head.load(Ordering::Acquire);
        if head == self.tail.load(Ordering::Acquire) {
            return None;
        }
        Some(self.slots[head].load(Ordering::Relaxed))
    }

    /// Discard buffered bytes and clear the overflow flag
    pub fn reset(&self) {
        self.rewind();
        self.overflow.store(false, Ordering::Release);
    }

    /// Discard buffered bytes, leaving the overflow flag as it is
    pub fn rewind(&self) {
        self.head.store(0, Ordering::SeqCst);
        self.tail.store(0, Ordering::SeqCst);
        trace!(slots = N, "loopback ring rewound");
    }

    /// Read-and-clear the sticky overflow flag
    pub fn take_overflow(&self) -> bool {
        self.overflow.swap(false, Ordering::AcqRel)
    }

    /// Inspect the overflow flag without clearing it
    pub fn overflow_pending(&self) -> bool {
        self.overflow.load(Ordering::Acquire)
    }

    /// Get memory footprint in bytes
    pub const fn memory_footprint() -> usize {
        core::mem::size_of::<Self>()
    }
}

impl<const N: usize> Default for RingBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> core::fmt::Debug for RingBuffer<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RingBuffer")
            .field("slots", &N)
            .field("head", &self.head.load(Ordering::Acquire))
            .field("tail", &self.tail.load(Ordering::Acquire))
            .field("overflow", &self.overflow.load(Ordering::Acquire))
            .finish()
    }
}
