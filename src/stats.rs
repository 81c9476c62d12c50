//! Lock-free counters describing how a search unfolded.

use crossbeam::utils::CachePadded;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counters shared by every branch of one search.
///
/// All updates are `Relaxed`: the numbers are diagnostics, read after the search has joined
/// every branch. Each counter is cache-padded so workers bumping `steps` do not contend with
/// the rarer counters.
#[derive(Debug, Default)]
pub struct SearchStats {
    steps: CachePadded<AtomicU64>,
    branch_points: CachePadded<AtomicU64>,
    units_spawned: CachePadded<AtomicU64>,
    threads_spawned: CachePadded<AtomicU64>,
    late_closures: CachePadded<AtomicU64>,
}

impl SearchStats {
    /// Creates zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// One recursive step entered (including steps that abort on cancellation).
    #[inline]
    pub fn inc_steps(&self) {
        self.steps.fetch_add(1, Ordering::Relaxed);
    }

    /// A branch point with `fan_out` candidates, `fan_out - 1` of them handed off.
    #[inline]
    pub fn record_branch(&self, fan_out: usize) {
        self.branch_points.fetch_add(1, Ordering::Relaxed);
        self.units_spawned
            .fetch_add(fan_out.saturating_sub(1) as u64, Ordering::Relaxed);
    }

    /// An OS thread was started for a child branch.
    #[inline]
    pub fn inc_threads(&self) {
        self.threads_spawned.fetch_add(1, Ordering::Relaxed);
    }

    /// A branch closed a cycle but lost the race for the cancellation token.
    #[inline]
    pub fn inc_late_closures(&self) {
        self.late_closures.fetch_add(1, Ordering::Relaxed);
    }

    /// Returns the current counter values.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            steps: self.steps.load(Ordering::Relaxed),
            branch_points: self.branch_points.load(Ordering::Relaxed),
            units_spawned: self.units_spawned.load(Ordering::Relaxed),
            threads_spawned: self.threads_spawned.load(Ordering::Relaxed),
            late_closures: self.late_closures.load(Ordering::Relaxed),
        }
    }
}

/// Plain copy of [`SearchStats`] at one point in time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatsSnapshot {
    /// Recursive steps entered.
    pub steps: u64,
    /// Steps that forked into two or more branches.
    pub branch_points: u64,
    /// Branches handed to the scheduler (pool task or thread) rather than run inline.
    pub units_spawned: u64,
    /// OS threads started by the budgeted-thread engine.
    pub threads_spawned: u64,
    /// Cycles closed after another branch had already won.
    pub late_closures: u64,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn new_stats_are_zero() {
        assert_eq!(SearchStats::new().snapshot(), StatsSnapshot::default());
    }

    #[test]
    fn record_branch_counts_handed_off_units() {
        let stats = SearchStats::new();
        stats.record_branch(3);
        stats.record_branch(2);
        let snap = stats.snapshot();
        assert_eq!(snap.branch_points, 2);
        assert_eq!(snap.units_spawned, 3);
    }

    #[test]
    fn concurrent_increments_are_not_lost() {
        let stats = Arc::new(SearchStats::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let s = Arc::clone(&stats);
                thread::spawn(move || {
                    for _ in 0..1_000 {
                        s.inc_steps();
                        s.inc_threads();
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        let snap = stats.snapshot();
        assert_eq!(snap.steps, 8_000);
        assert_eq!(snap.threads_spawned, 8_000);
        assert_eq!(snap.late_closures, 0);
    }
}
