//! Single-threaded in-place backtracking.
//!
//! This is the degenerate schedule both parallel engines fall back to: the budgeted engine runs
//! it for any subtree whose budget is exhausted, and it doubles as the deterministic baseline
//! (vertices are tried strictly in graph order, so the first cycle in DFS order is returned).

use crate::cycle::HamiltonianCycle;
use crate::graph::Graph;
use crate::search::{CycleSearch, Outcome, SearchContext, SearchError};
use crate::state::SearchState;

/// Engine that never forks.
#[derive(Clone, Copy, Debug, Default)]
pub struct SequentialEngine;

impl CycleSearch for SequentialEngine {
    fn name(&self) -> &'static str {
        "sequential"
    }

    fn run(&self, ctx: &SearchContext<'_>) -> Result<Outcome, SearchError> {
        let mut state = ctx.root_state();
        Ok(backtrack(ctx, &mut state))
    }
}

/// Searches `graph` for a Hamiltonian cycle through `start` on the calling thread.
///
/// Returns the first cycle in depth-first graph order.
///
/// # Errors
/// Returns [`SearchError::InvalidStart`] if `start` is not a vertex of `graph`.
pub fn find_cycle(graph: &Graph, start: usize) -> Result<Option<HamiltonianCycle>, SearchError> {
    SequentialEngine.find_hamiltonian_cycle(graph, start)
}

/// Depth-first search from `state`, mutating it in place and restoring it before returning.
///
/// The recursion lives in an explicit stack of successor cursors, one per vertex pushed
/// beyond the entry depth, so path length is bounded by memory rather than by the thread's
/// call stack. The token is polled on entry to every vertex and before every successor, so a
/// win elsewhere stops this subtree after at most one more extension.
pub(crate) fn backtrack(ctx: &SearchContext<'_>, state: &mut SearchState) -> Outcome {
    let base = state.depth();
    if let Some(outcome) = enter(ctx, state) {
        return outcome;
    }

    let graph = ctx.graph();
    // cursors[i] is the next successor index to try at depth `base + i`.
    let mut cursors: Vec<usize> = vec![0];
    while let Some(cursor) = cursors.last_mut() {
        if ctx.token().is_set() {
            return unwind(state, base, Outcome::NotFound);
        }
        let Some(&next) = graph.neighbors(state.current()).get(*cursor) else {
            // Successors exhausted: backtrack one level.
            cursors.pop();
            if state.depth() > base {
                state.pop();
            }
            continue;
        };
        *cursor += 1;
        if state.is_visited(next) {
            continue;
        }

        state.push(next);
        match enter(ctx, state) {
            None => cursors.push(0),
            Some(outcome) if outcome.is_found() => return unwind(state, base, outcome),
            Some(_) => state.pop(),
        }
    }
    Outcome::NotFound
}

/// Work done on arriving at a vertex. `Some` means the vertex is a leaf of the search.
fn enter(ctx: &SearchContext<'_>, state: &SearchState) -> Option<Outcome> {
    ctx.stats().inc_steps();
    ctx.inject_fault(state.path());
    if ctx.token().is_set() {
        return Some(Outcome::NotFound);
    }
    if state.depth() == ctx.graph().vertex_count() {
        return Some(ctx.try_close(state.path()));
    }
    None
}

/// Pops `state` back to `base` vertices and passes `outcome` through.
fn unwind(state: &mut SearchState, base: usize, outcome: Outcome) -> Outcome {
    while state.depth() > base {
        state.pop();
    }
    outcome
}

// ============================================================================
// Tests
// ============================================================================
