//! Search driver: configuration, the backtracking step shared by all engines, and result assembly.
//!
//! Every engine walks the same tree. A step looks at the current [`SearchState`] and decides
//! between aborting (the token is set), closing a full-length path, hitting a dead end,
//! following a forced single successor, or branching. Engines differ only in what they do with
//! a branch: the work-stealing engine hands siblings to a rayon pool, the budgeted engine
//! starts OS threads, and the sequential engine backtracks in place.

use crate::budgeted::BudgetedThreadEngine;
use crate::cancel::CancellationToken;
use crate::cycle::HamiltonianCycle;
use crate::graph::{Graph, GraphError};
use crate::sequential::SequentialEngine;
use crate::state::SearchState;
use crate::stats::{SearchStats, StatsSnapshot};
use crate::work_stealing::WorkStealingEngine;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info, info_span};

// ============================================================================
// Configuration
// ============================================================================

/// How the search tree is decomposed and scheduled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Single-threaded in-place backtracking.
    Sequential,
    /// Recursive tasks on a rayon pool of `pool_size` workers.
    WorkStealing {
        /// Number of pool workers. Values below 1 are treated as 1.
        pool_size: usize,
    },
    /// OS threads gated by a budget divided among children.
    BudgetedThreads {
        /// Maximum thread budget. Values below 1 are treated as 1.
        budget: usize,
    },
}

impl Strategy {
    /// The engine implementing this strategy.
    pub fn engine(self) -> Box<dyn CycleSearch> {
        match self {
            Strategy::Sequential => Box::new(SequentialEngine),
            Strategy::WorkStealing { pool_size } => Box::new(WorkStealingEngine::new(pool_size)),
            Strategy::BudgetedThreads { budget } => Box::new(BudgetedThreadEngine::new(budget)),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Sequential => write!(f, "sequential"),
            Strategy::WorkStealing { pool_size } => write!(f, "work-stealing(pool={pool_size})"),
            Strategy::BudgetedThreads { budget } => write!(f, "budgeted-threads(budget={budget})"),
        }
    }
}

/// Search parameters.
#[derive(Clone, Debug)]
pub struct SearchConfig {
    /// Scheduling strategy.
    pub strategy: Strategy,
    /// Vertex the cycle must start (and end) at.
    pub start: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        let pool_size = std::thread::available_parallelism()
            .map(std::num::NonZero::get)
            .unwrap_or(1);

        Self {
            strategy: Strategy::WorkStealing { pool_size },
            start: 0,
        }
    }
}

/// Stack size for engine worker threads. Branch recursion depth grows with the vertex count.
pub(crate) const WORKER_STACK_SIZE: usize = 16 * 1024 * 1024;

/// Clamps a concurrency parameter to at least 1.
#[inline]
pub(crate) fn clamp_parallelism(requested: usize) -> usize {
    if requested == 0 {
        debug!("concurrency parameter 0 clamped to 1 (sequential)");
    }
    requested.max(1)
}

// ============================================================================
// Errors
// ============================================================================

/// Errors surfaced by a search. Finding no cycle is not an error.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The start vertex is not in the graph.
    #[error("invalid start vertex: {0}")]
    InvalidStart(#[from] GraphError),
    /// A branch panicked, so the absence of a cycle cannot be claimed.
    #[error("a search branch panicked; the search space was not fully explored")]
    BranchPanicked,
    /// The worker pool could not be created.
    #[error("failed to build worker pool: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),
}

// ============================================================================
// Outcome / Step
// ============================================================================

/// Result of exploring one subtree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// This subtree closed the cycle and won the token; the full path.
    Found(Vec<usize>),
    /// No cycle from this subtree (or another branch won first).
    NotFound,
}

impl Outcome {
    /// Whether this is [`Outcome::Found`].
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, Outcome::Found(_))
    }
}

/// What a recursive step decided to do with the current state.
#[derive(Debug)]
pub(crate) enum Step {
    /// Another branch already won.
    Abort,
    /// The path holds every vertex; the closing attempt produced this outcome.
    Closed(Outcome),
    /// No unvisited successor.
    DeadEnd,
    /// Exactly one unvisited successor; continue without forking.
    Forced(usize),
    /// Two or more unvisited successors, in graph order.
    Branch(Vec<usize>),
}

// ============================================================================
// SearchContext
// ============================================================================

/// Everything shared by reference across the branches of one search.
///
/// Besides the read-only graph, only the token, the write-once solution slot and the
/// diagnostic counters are shared; each branch owns its path.
pub struct SearchContext<'g> {
    graph: &'g Graph,
    start: usize,
    token: CancellationToken,
    solution: OnceLock<Vec<usize>>,
    panicked: AtomicBool,
    stats: SearchStats,
    #[cfg(test)]
    fail_at: Option<Vec<usize>>,
}

impl<'g> SearchContext<'g> {
    /// Prepares a search from `start`.
    ///
    /// # Errors
    /// Returns [`SearchError::InvalidStart`] if `start` is not a vertex of `graph`.
    pub fn new(graph: &'g Graph, start: usize) -> Result<Self, SearchError> {
        graph.check_vertex(start)?;
        Ok(Self {
            graph,
            start,
            token: CancellationToken::new(),
            solution: OnceLock::new(),
            panicked: AtomicBool::new(false),
            stats: SearchStats::new(),
            #[cfg(test)]
            fail_at: None,
        })
    }

    /// Makes any step that reaches exactly `path` panic.
    #[cfg(test)]
    pub(crate) fn fail_at(mut self, path: Vec<usize>) -> Self {
        self.fail_at = Some(path);
        self
    }

    #[cfg(test)]
    pub(crate) fn inject_fault(&self, path: &[usize]) {
        if self.fail_at.as_deref() == Some(path) {
            panic!("injected failure at {path:?}");
        }
    }

    #[cfg(not(test))]
    #[inline(always)]
    #[allow(clippy::unused_self)]
    pub(crate) fn inject_fault(&self, _path: &[usize]) {}

    /// The graph being searched.
    #[inline]
    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    /// The start vertex.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// The shared success latch.
    #[inline]
    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    /// Diagnostic counters.
    #[inline]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// `path = [start]`, `visited = {start}`.
    pub fn root_state(&self) -> SearchState {
        SearchState::root(self.graph.vertex_count(), self.start)
    }

    /// The recorded cycle, if some branch has won.
    pub fn solution(&self) -> Option<&[usize]> {
        self.solution.get().map(Vec::as_slice)
    }

    /// Marks that a branch died by panicking.
    pub(crate) fn note_panic(&self) {
        self.panicked.store(true, Ordering::Release);
    }

    /// Whether any branch died by panicking.
    pub(crate) fn branch_panicked(&self) -> bool {
        self.panicked.load(Ordering::Acquire)
    }

    /// Tries to close a full-length path back to the start vertex.
    ///
    /// Only the caller that wins the token records the path and gets [`Outcome::Found`].
    pub(crate) fn try_close(&self, path: &[usize]) -> Outcome {
        let last = path[path.len() - 1];
        if !self.graph.has_edge(last, self.start) {
            return Outcome::NotFound;
        }
        if self.token.try_set_found() {
            info!(start = self.start, len = path.len(), "hamiltonian cycle found");
            let _ = self.solution.set(path.to_vec());
            Outcome::Found(path.to_vec())
        } else {
            self.stats.inc_late_closures();
            Outcome::NotFound
        }
    }

    /// One recursive step over `state`.
    pub(crate) fn step(&self, state: &SearchState) -> Step {
        self.stats.inc_steps();
        self.inject_fault(state.path());
        if self.token.is_set() {
            return Step::Abort;
        }
        if state.depth() == self.graph.vertex_count() {
            return Step::Closed(self.try_close(state.path()));
        }

        let mut candidates = state.candidates(self.graph);
        match candidates.len() {
            0 => Step::DeadEnd,
            1 => Step::Forced(candidates.remove(0)),
            _ => Step::Branch(candidates),
        }
    }

    fn into_solution(self) -> Option<Vec<usize>> {
        self.solution.into_inner()
    }
}

// ============================================================================
// Engine trait
// ============================================================================

/// A scheduling strategy for the shared backtracking search.
pub trait CycleSearch: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Explores the whole tree rooted at `ctx.root_state()`.
    ///
    /// A winning branch records its path in `ctx` before returning; engines may return
    /// [`Outcome::NotFound`] even when a sibling recorded a solution.
    ///
    /// # Errors
    /// Engine-specific scheduling failures.
    fn run(&self, ctx: &SearchContext<'_>) -> Result<Outcome, SearchError>;

    /// Searches `graph` for a Hamiltonian cycle starting at `start`.
    ///
    /// # Errors
    /// Returns [`SearchError::InvalidStart`] for an out-of-range start, or a scheduling error
    /// when the search could not finish and found nothing.
    fn find_hamiltonian_cycle(
        &self,
        graph: &Graph,
        start: usize,
    ) -> Result<Option<HamiltonianCycle>, SearchError> {
        let ctx = SearchContext::new(graph, start)?;
        let _span = info_span!("search", engine = self.name(), n = graph.vertex_count(), start).entered();
        let run = self.run(&ctx);
        conclude(run, ctx)
    }
}

/// Turns an engine run into the caller-facing result.
///
/// A panicked branch invalidates an `Ok` run, then [`assemble`] merges in the solution slot.
pub(crate) fn conclude(
    run: Result<Outcome, SearchError>,
    ctx: SearchContext<'_>,
) -> Result<Option<HamiltonianCycle>, SearchError> {
    let run = match run {
        Ok(_) if ctx.branch_panicked() => Err(SearchError::BranchPanicked),
        other => other,
    };
    assemble(run, ctx.into_solution())
}

/// Combines an engine's return with the solution slot.
///
/// A recorded cycle wins over any error: it was verified at the moment it was recorded.
fn assemble(
    run: Result<Outcome, SearchError>,
    recorded: Option<Vec<usize>>,
) -> Result<Option<HamiltonianCycle>, SearchError> {
    match (run, recorded) {
        (Ok(outcome), recorded) => {
            if let (Outcome::Found(path), Some(slot)) = (&outcome, &recorded) {
                debug_assert_eq!(path, slot, "returned path differs from recorded path");
            }
            let path = match outcome {
                Outcome::Found(path) => Some(path),
                Outcome::NotFound => recorded,
            };
            Ok(path.map(HamiltonianCycle::from_path))
        }
        (Err(_), Some(path)) => Ok(Some(HamiltonianCycle::from_path(path))),
        (Err(e), None) => Err(e),
    }
}

// ============================================================================
// Public API
// ============================================================================

/// Searches `graph` for a Hamiltonian cycle through `start` using `strategy`.
///
/// # Errors
/// Returns [`SearchError::InvalidStart`] if `start` is out of range, or a scheduling error
/// that prevented an exhaustive search.
pub fn find_hamiltonian_cycle(
    graph: &Graph,
    start: usize,
    strategy: Strategy,
) -> Result<Option<HamiltonianCycle>, SearchError> {
    strategy.engine().find_hamiltonian_cycle(graph, start)
}

/// A search result together with counters and wall time.
#[derive(Clone, Debug)]
pub struct SearchReport {
    /// The cycle, if one exists.
    pub cycle: Option<HamiltonianCycle>,
    /// Counters at the end of the search.
    pub stats: StatsSnapshot,
    /// Wall-clock time of the search.
    pub elapsed: Duration,
}

/// Runs a search described by `cfg` and reports counters and timing alongside the result.
///
/// # Errors
/// Same as [`find_hamiltonian_cycle`].
pub fn search_with_stats(graph: &Graph, cfg: &SearchConfig) -> Result<SearchReport, SearchError> {
    let engine = cfg.strategy.engine();
    let ctx = SearchContext::new(graph, cfg.start)?;
    let _span = info_span!("search", engine = engine.name(), n = graph.vertex_count(), start = cfg.start).entered();

    let started = Instant::now();
    let run = engine.run(&ctx);
    let elapsed = started.elapsed();

    let stats = ctx.stats().snapshot();
    let cycle = conclude(run, ctx)?;
    Ok(SearchReport {
        cycle,
        stats,
        elapsed,
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::{planted_cycle, random_graph, ring_with_chords, split_components};
    use proptest::prelude::*;
    use super::Strategy;
    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;

    const PARAMS: [usize; 5] = [0, 1, 2, 4, 8];

    fn all_strategies() -> Vec<Strategy> {
        let mut out = vec![Strategy::Sequential];
        for p in PARAMS {
            out.push(Strategy::WorkStealing { pool_size: p });
            out.push(Strategy::BudgetedThreads { budget: p });
        }
        out
    }

    /// Plain recursive DFS in graph order, kept independent of the engines.
    fn oracle(graph: &Graph, start: usize) -> Option<Vec<usize>> {
        fn go(g: &Graph, start: usize, path: &mut Vec<usize>, seen: &mut [bool]) -> bool {
            let cur = *path.last().unwrap();
            if path.len() == g.vertex_count() {
                return g.has_edge(cur, start);
            }
            for &v in g.neighbors(cur) {
                if !seen[v] {
                    seen[v] = true;
                    path.push(v);
                    if go(g, start, path, seen) {
                        return true;
                    }
                    path.pop();
                    seen[v] = false;
                }
            }
            false
        }
        let mut seen = vec![false; graph.vertex_count()];
        seen[start] = true;
        let mut path = vec![start];
        go(graph, start, &mut path, &mut seen).then_some(path)
    }

    fn square_with_distractors() -> Graph {
        Graph::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0), (0, 2), (1, 3)]).unwrap()
    }

    // -------------------------------------------------------------------------
    // Scenarios
    // -------------------------------------------------------------------------

    #[test]
    fn square_with_distractors_finds_the_only_cycle() {
        let g = square_with_distractors();
        for strategy in all_strategies() {
            let cycle = find_hamiltonian_cycle(&g, 0, strategy)
                .unwrap()
                .unwrap_or_else(|| panic!("{strategy}: expected a cycle"));
            assert_eq!(cycle.vertices(), &[0, 1, 2, 3], "{strategy}");
        }
    }

    #[test]
    fn single_vertex_without_self_loop_has_no_cycle() {
        let g = Graph::new(1);
        for strategy in all_strategies() {
            assert_eq!(find_hamiltonian_cycle(&g, 0, strategy).unwrap(), None, "{strategy}");
        }
    }

    #[test]
    fn single_vertex_with_self_loop_is_a_cycle() {
        let g = Graph::from_edges(1, [(0, 0)]).unwrap();
        for strategy in all_strategies() {
            let cycle = find_hamiltonian_cycle(&g, 0, strategy).unwrap().unwrap();
            assert_eq!(cycle.vertices(), &[0], "{strategy}");
        }
    }

    #[test]
    fn two_vertices_need_both_directions() {
        let one_way = Graph::from_edges(2, [(0, 1)]).unwrap();
        let both = Graph::from_edges(2, [(0, 1), (1, 0)]).unwrap();
        for strategy in all_strategies() {
            assert_eq!(find_hamiltonian_cycle(&one_way, 0, strategy).unwrap(), None);
            let cycle = find_hamiltonian_cycle(&both, 1, strategy).unwrap().unwrap();
            assert_eq!(cycle.vertices(), &[1, 0], "{strategy}");
        }
    }

    #[test]
    fn invalid_start_is_an_error() {
        let g = square_with_distractors();
        for strategy in all_strategies() {
            let err = find_hamiltonian_cycle(&g, 4, strategy).unwrap_err();
            assert!(matches!(
                err,
                SearchError::InvalidStart(GraphError::InvalidVertex { vertex: 4, n: 4 })
            ));
        }
        assert!(find_hamiltonian_cycle(&Graph::new(0), 0, Strategy::Sequential).is_err());
    }

    #[test]
    fn ring_with_chords_follows_the_ring() {
        let g = ring_with_chords(24);
        let expected: Vec<usize> = (0..24).collect();
        for strategy in all_strategies() {
            let cycle = find_hamiltonian_cycle(&g, 0, strategy).unwrap().unwrap();
            assert_eq!(cycle.vertices(), expected.as_slice(), "{strategy}");
        }
    }

    // -------------------------------------------------------------------------
    // Correctness / exhaustiveness
    // -------------------------------------------------------------------------

    #[test]
    fn planted_cycles_are_found_and_valid() {
        let mut rng = XorShiftRng::seed_from_u64(0x5EED);
        for n in [3usize, 5, 8, 12, 16] {
            let (g, _) = planted_cycle(n, 2 * n, &mut rng);
            for start in [0, n - 1] {
                for strategy in all_strategies() {
                    let cycle = find_hamiltonian_cycle(&g, start, strategy)
                        .unwrap()
                        .unwrap_or_else(|| panic!("{strategy}: n={n} start={start}"));
                    cycle.verify(&g, start).unwrap();
                }
            }
        }
    }

    #[test]
    fn split_components_have_no_cycle() {
        for n in [2usize, 5, 10, 16] {
            let g = split_components(n);
            for strategy in all_strategies() {
                assert_eq!(find_hamiltonian_cycle(&g, 0, strategy).unwrap(), None, "{strategy}");
            }
        }
    }

    #[test]
    fn engines_agree_on_random_graphs() {
        let mut rng = XorShiftRng::seed_from_u64(0xC0FFEE);
        for _ in 0..40 {
            let g = random_graph(9, 0.3, &mut rng);
            let expected = oracle(&g, 0).is_some();
            for strategy in all_strategies() {
                let got = find_hamiltonian_cycle(&g, 0, strategy).unwrap();
                assert_eq!(got.is_some(), expected, "{strategy}");
                if let Some(cycle) = got {
                    cycle.verify(&g, 0).unwrap();
                }
            }
        }
    }

    // -------------------------------------------------------------------------
    // Determinism of single-worker configurations
    // -------------------------------------------------------------------------

    #[test]
    fn single_worker_strategies_match_the_oracle() {
        let mut rng = XorShiftRng::seed_from_u64(0xBADC0DE);
        for _ in 0..30 {
            let g = random_graph(10, 0.35, &mut rng);
            let expected = oracle(&g, 0);
            for _ in 0..3 {
                for strategy in [
                    Strategy::Sequential,
                    Strategy::BudgetedThreads { budget: 1 },
                    Strategy::BudgetedThreads { budget: 0 },
                    Strategy::WorkStealing { pool_size: 1 },
                ] {
                    let got = find_hamiltonian_cycle(&g, 0, strategy)
                        .unwrap()
                        .map(HamiltonianCycle::into_vertices);
                    assert_eq!(got, expected, "{strategy}");
                }
            }
        }
    }

    // -------------------------------------------------------------------------
    // Reports / assembly
    // -------------------------------------------------------------------------

    #[test]
    fn search_with_stats_reports_counters() {
        let g = ring_with_chords(16);
        let cfg = SearchConfig {
            strategy: Strategy::BudgetedThreads { budget: 4 },
            start: 0,
        };
        let report = search_with_stats(&g, &cfg).unwrap();
        assert!(report.cycle.is_some());
        assert!(report.stats.steps > 0);
        assert!(report.stats.branch_points > 0);
        assert!(report.stats.threads_spawned <= 3);
    }

    #[test]
    fn default_config_is_valid() {
        let cfg = SearchConfig::default();
        assert_eq!(cfg.start, 0);
        match cfg.strategy {
            Strategy::WorkStealing { pool_size } => assert!(pool_size >= 1),
            other => panic!("unexpected default strategy {other}"),
        }
    }

    #[test]
    fn clamp_parallelism_never_returns_zero() {
        assert_eq!(clamp_parallelism(0), 1);
        assert_eq!(clamp_parallelism(1), 1);
        assert_eq!(clamp_parallelism(7), 7);
    }

    #[test]
    fn assemble_prefers_recorded_cycle_over_error() {
        let got = assemble(Err(SearchError::BranchPanicked), Some(vec![0, 1])).unwrap();
        assert_eq!(got.unwrap().vertices(), &[0, 1]);

        let err = assemble(Err(SearchError::BranchPanicked), None).unwrap_err();
        assert!(matches!(err, SearchError::BranchPanicked));

        let got = assemble(Ok(Outcome::NotFound), Some(vec![2, 0, 1])).unwrap();
        assert_eq!(got.unwrap().vertices(), &[2, 0, 1]);

        assert!(assemble(Ok(Outcome::NotFound), None).unwrap().is_none());
    }

    #[test]
    fn step_classifies_states() {
        let g = Graph::from_edges(4, [(0, 1), (0, 2), (1, 2), (2, 3), (3, 0)]).unwrap();
        let ctx = SearchContext::new(&g, 0).unwrap();
        let root = ctx.root_state();
        assert!(matches!(ctx.step(&root), Step::Branch(c) if c == vec![1, 2]));

        let at1 = root.extended(1);
        assert!(matches!(ctx.step(&at1), Step::Forced(2)));

        let at3 = root.extended(2).extended(3);
        assert!(matches!(ctx.step(&at3), Step::DeadEnd));

        let full = root.extended(1).extended(2).extended(3);
        assert!(matches!(ctx.step(&full), Step::Closed(Outcome::Found(ref p)) if p == &vec![0, 1, 2, 3]));
        assert_eq!(ctx.solution(), Some(&[0, 1, 2, 3][..]));

        // Token is now set: every step aborts, and a second closure is rejected.
        assert!(matches!(ctx.step(&root), Step::Abort));
        assert_eq!(ctx.try_close(full.path()), Outcome::NotFound);
        assert_eq!(ctx.stats().snapshot().late_closures, 1);
    }

    /// `0 -> 2` is listed before `0 -> 1`, so depth-first order walks the whole chain
    /// `2 -> 3 -> ... -> n-1 -> 0` and fails before trying the Hamiltonian ring through 1.
    fn forced_chain(n: usize) -> Graph {
        let mut edges = vec![(0, 2), (0, 1)];
        edges.extend((1..n).map(|u| (u, (u + 1) % n)));
        Graph::from_edges(n, edges).unwrap()
    }

    #[test]
    fn long_forced_chain_is_found_by_every_engine() {
        let n = 200_000;
        let g = forced_chain(n);
        for strategy in [
            Strategy::Sequential,
            Strategy::WorkStealing { pool_size: 2 },
            Strategy::BudgetedThreads { budget: 1 },
            Strategy::BudgetedThreads { budget: 2 },
            Strategy::BudgetedThreads { budget: 8 },
        ] {
            let cycle = find_hamiltonian_cycle(&g, 0, strategy)
                .unwrap()
                .unwrap_or_else(|| panic!("{strategy}: expected a cycle"));
            assert_eq!(cycle.len(), n, "{strategy}");
            assert_eq!(&cycle.vertices()[..3], &[0, 1, 2], "{strategy}");
        }
    }

    #[test]
    fn conclude_rejects_clean_run_after_branch_panic() {
        let g = square_with_distractors();
        let ctx = SearchContext::new(&g, 0).unwrap();
        ctx.note_panic();
        let err = conclude(Ok(Outcome::NotFound), ctx).unwrap_err();
        assert!(matches!(err, SearchError::BranchPanicked));

        let ctx = SearchContext::new(&g, 0).unwrap();
        assert!(ctx.try_close(&[0, 1, 2, 3]).is_found());
        ctx.note_panic();
        let cycle = conclude(Ok(Outcome::NotFound), ctx).unwrap().unwrap();
        assert_eq!(cycle.vertices(), &[0, 1, 2, 3]);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(24))]

        #[test]
        fn existence_agrees_across_engines(seed in any::<u64>(), n in 1usize..9, p in 0.1f64..0.7) {
            let mut rng = XorShiftRng::seed_from_u64(seed);
            let g = random_graph(n, p, &mut rng);
            let expected = oracle(&g, 0).is_some();
            for strategy in [
                Strategy::WorkStealing { pool_size: 3 },
                Strategy::BudgetedThreads { budget: 3 },
                Strategy::BudgetedThreads { budget: 16 },
            ] {
                let got = find_hamiltonian_cycle(&g, 0, strategy).unwrap();
                prop_assert_eq!(got.is_some(), expected);
            }
        }
    }
}
