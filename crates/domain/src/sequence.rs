//! Process-wide request sequence counter
//!
//! One `RequestSequence` instance exists per logical endpoint that
//! needs a request cadence (interval-based fault injection, tracking
//! number assignment, inventory routing). The counter starts at zero,
//! is bumped exactly once per request, and is never persisted; a
//! process restart resets the sequence.

use std::sync::atomic::{AtomicU64, Ordering};

/// A monotonically increasing, linearizable request counter.
///
/// `next` is an atomic fetch-and-increment: concurrent callers each
/// observe a distinct value, and the observed values form a contiguous
/// run with no gaps. The first call returns 1.
#[derive(Debug, Default)]
pub struct RequestSequence(AtomicU64);

impl RequestSequence {
    /// Create a counter starting at zero
    #[must_use]
    pub const fn new() -> Self {
        Self(AtomicU64::new(0))
    }

    /// Increment the counter and return the post-increment value
    pub fn next(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Read the current value without incrementing
    pub fn current(&self) -> u64 {
        self.0.load(Ordering::SeqCst)
    }
}
