//! Budgeted-thread engine: OS threads gated by a budget split among children.
//!
//! A branch point with `k` candidates and budget `b` gives child `i` a budget of
//! `max(1, b / k + (i < b % k))`. The first child is explored on the current thread; each other
//! child gets its own scoped thread, with the same stack size as the work-stealing workers. A
//! subtree whose budget has dropped to 1, or whose current vertex has a single candidate, is
//! finished by the sequential backtracker without creating further threads. Threads are joined in spawn order and are never terminated early: after a
//! win elsewhere they notice the token at their next step and unwind.

use crate::search::{
    clamp_parallelism, CycleSearch, Outcome, SearchContext, SearchError, Step, WORKER_STACK_SIZE,
};
use crate::sequential;
use crate::state::SearchState;
use std::panic::{self, AssertUnwindSafe};
use std::thread::{self, ScopedJoinHandle};
use tracing::{debug, warn};

/// Engine that spreads branches over scoped OS threads, limited by a thread budget.
#[derive(Clone, Copy, Debug)]
pub struct BudgetedThreadEngine {
    budget: usize,
}

impl BudgetedThreadEngine {
    /// Creates an engine with the given thread budget (0 is treated as 1).
    pub fn new(budget: usize) -> Self {
        Self {
            budget: clamp_parallelism(budget),
        }
    }

    /// The initial thread budget.
    pub fn budget(&self) -> usize {
        self.budget
    }
}

impl CycleSearch for BudgetedThreadEngine {
    fn name(&self) -> &'static str {
        "budgeted-threads"
    }

    fn run(&self, ctx: &SearchContext<'_>) -> Result<Outcome, SearchError> {
        let budget = self.budget;
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            let mut root = ctx.root_state();
            if budget == 1 {
                sequential::backtrack(ctx, &mut root)
            } else {
                explore(ctx, root, budget)
            }
        }));
        outcome.map_err(|_| {
            warn!("budgeted search panicked on the calling thread");
            ctx.note_panic();
            SearchError::BranchPanicked
        })
    }
}

/// Splits `budget` among `k` children: integer division, leftovers to the earliest children,
/// and never less than 1 per child.
pub fn split_budget(budget: usize, k: usize) -> Vec<usize> {
    if k == 0 {
        return Vec::new();
    }
    let base = budget / k;
    let rem = budget % k;
    (0..k).map(|i| (base + usize::from(i < rem)).max(1)).collect()
}

fn explore(ctx: &SearchContext<'_>, mut state: SearchState, budget: usize) -> Outcome {
    let candidates = match ctx.step(&state) {
        Step::Abort | Step::DeadEnd => return Outcome::NotFound,
        Step::Closed(outcome) => return outcome,
        Step::Forced(_) => return sequential::backtrack(ctx, &mut state),
        Step::Branch(_) if budget <= 1 => return sequential::backtrack(ctx, &mut state),
        Step::Branch(candidates) => candidates,
    };

    ctx.stats().record_branch(candidates.len());
    let shares = split_budget(budget, candidates.len());
    debug!(depth = state.depth(), fan_out = candidates.len(), budget, ?shares, "fork threads");

    let parent = &state;
    let mut children = candidates.iter().copied().zip(shares);
    let Some((first, first_share)) = children.next() else {
        return Outcome::NotFound;
    };

    thread::scope(|scope| {
        let pending: Vec<Child<'_>> = children
            .map(|(next, share)| {
                let spawned = thread::Builder::new()
                    .name(format!("hamcycle-bt-{next}"))
                    .stack_size(WORKER_STACK_SIZE)
                    .spawn_scoped(scope, move || explore(ctx, parent.extended(next), share));
                match spawned {
                    Ok(handle) => {
                        ctx.stats().inc_threads();
                        Child::Thread(handle)
                    }
                    Err(e) => {
                        warn!(next, error = %e, "failed to spawn search thread; running inline");
                        Child::Inline(next, share)
                    }
                }
            })
            .collect();

        let mut result = explore(ctx, parent.extended(first), first_share);

        // Join every child so none outlives this frame; only the first win is kept.
        for child in pending {
            let joined = match child {
                Child::Thread(handle) => handle.join(),
                Child::Inline(next, share) => Ok(explore(ctx, parent.extended(next), share)),
            };
            match joined {
                Ok(outcome) if !result.is_found() => result = outcome,
                Ok(_) => {}
                Err(_) => {
                    warn!(depth = parent.depth(), "search thread panicked");
                    ctx.note_panic();
                }
            }
        }
        result
    })
}

/// A sibling branch waiting to be joined, in spawn order.
enum Child<'scope> {
    Thread(ScopedJoinHandle<'scope, Outcome>),
    /// The thread could not be started; `(vertex, budget)` runs on the joining thread instead.
    Inline(usize, usize),
}

// ============================================================================
// Tests
// ============================================================================
