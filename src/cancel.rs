//! One-shot success latch shared by every branch of a search.

use crossbeam::utils::CachePadded;
use std::sync::atomic::{AtomicBool, Ordering};

/// A monotone `false -> true` latch.
///
/// Every recursive step polls [`CancellationToken::is_set`] before doing any work, and a branch
/// that closes a cycle must win [`CancellationToken::try_set_found`] before it may report it.
/// The flag sits on its own cache line: it is read by every worker on every step and written
/// exactly once.
#[derive(Debug, Default)]
pub struct CancellationToken {
    found: CachePadded<AtomicBool>,
}

impl CancellationToken {
    /// Creates an unset token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attempts the single `false -> true` transition.
    ///
    /// Returns `true` to exactly one caller over the lifetime of the token.
    #[inline]
    pub fn try_set_found(&self) -> bool {
        self.found
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Non-blocking observation of the latch.
    #[inline]
    pub fn is_set(&self) -> bool {
        self.found.load(Ordering::Acquire)
    }
}

// ============================================================================
// Tests
// ============================================================================
