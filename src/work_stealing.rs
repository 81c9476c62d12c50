//! Work-stealing engine: recursive tasks on a bounded rayon pool.
//!
//! At a branch point the first candidate is explored on the current worker while the remaining
//! siblings are exposed to the pool through [`rayon::join`]. Rayon pushes the sibling job onto
//! the local deque; an idle worker may steal it, and if nobody has by the time the inline branch
//! finishes, the joining worker runs it itself. Blocking on a child therefore never deadlocks,
//! even with a single worker. Results are collected in sibling order, never completion order.

use crate::search::{
    clamp_parallelism, CycleSearch, Outcome, SearchContext, SearchError, Step, WORKER_STACK_SIZE,
};
use crate::state::SearchState;
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use std::panic::{self, AssertUnwindSafe};
use tracing::{debug, warn};

/// Engine running the search on a dedicated pool of `pool_size` workers.
#[derive(Clone, Copy, Debug)]
pub struct WorkStealingEngine {
    pool_size: usize,
}

impl WorkStealingEngine {
    /// Creates an engine with `pool_size` workers (0 is treated as 1).
    pub fn new(pool_size: usize) -> Self {
        Self {
            pool_size: clamp_parallelism(pool_size),
        }
    }

    /// Number of pool workers.
    pub fn pool_size(&self) -> usize {
        self.pool_size
    }
}

impl CycleSearch for WorkStealingEngine {
    fn name(&self) -> &'static str {
        "work-stealing"
    }

    fn run(&self, ctx: &SearchContext<'_>) -> Result<Outcome, SearchError> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(self.pool_size)
            .stack_size(WORKER_STACK_SIZE)
            .thread_name(|i| format!("hamcycle-ws-{i}"))
            .build()?;

        let root = ctx.root_state();
        // A panicking branch resurfaces at its join point and unwinds to here.
        panic::catch_unwind(AssertUnwindSafe(|| pool.install(|| explore(ctx, root)))).map_err(|_| {
            warn!("work-stealing branch panicked");
            ctx.note_panic();
            SearchError::BranchPanicked
        })
    }
}

/// Explores the subtree rooted at `state`, which this task owns.
fn explore(ctx: &SearchContext<'_>, mut state: SearchState) -> Outcome {
    loop {
        match ctx.step(&state) {
            Step::Abort | Step::DeadEnd => return Outcome::NotFound,
            Step::Closed(outcome) => return outcome,
            // Nobody else holds this state, so extending it in place is a private copy.
            Step::Forced(next) => state.push(next),
            Step::Branch(candidates) => return fork(ctx, &state, &candidates),
        }
    }
}

/// Forks one task per candidate: the first inline, the rest stealable.
fn fork(ctx: &SearchContext<'_>, state: &SearchState, candidates: &[usize]) -> Outcome {
    let Some((&first, rest)) = candidates.split_first() else {
        return Outcome::NotFound;
    };
    ctx.stats().record_branch(candidates.len());
    debug!(depth = state.depth(), fan_out = candidates.len(), "fork");

    let (inline, spawned) = rayon::join(
        || explore(ctx, state.extended(first)),
        || {
            rest.par_iter()
                .map(|&next| explore(ctx, state.extended(next)))
                .collect::<Vec<_>>()
        },
    );

    if inline.is_found() {
        return inline;
    }
    spawned
        .into_iter()
        .find(Outcome::is_found)
        .unwrap_or(Outcome::NotFound)
}

// ============================================================================
// Tests
// ============================================================================
