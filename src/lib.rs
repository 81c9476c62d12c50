//! # Hamiltonian Cycle Search
//!
//! Exhaustive, exact backtracking search for a directed Hamiltonian cycle, run under
//! interchangeable scheduling strategies.
//!
//! This crate provides:
//! - A directed adjacency-list [`graph::Graph`] whose successor order drives the search order.
//! - A one-shot [`cancel::CancellationToken`] shared by all branches; the first branch to
//!   close a cycle wins it, and every other branch stops at its next step.
//! - Three engines over the same search tree:
//!   - [`work_stealing::WorkStealingEngine`]: recursive tasks on a bounded rayon pool.
//!   - [`budgeted::BudgetedThreadEngine`]: OS threads gated by a budget split among children.
//!   - [`sequential::SequentialEngine`]: in-place depth-first backtracking.
//!
//! ## Quick Start
//!
//! ```
//! use hamcycle::graph::Graph;
//! use hamcycle::search::{find_hamiltonian_cycle, Strategy};
//!
//! let mut g = Graph::new(4);
//! for (u, v) in [(0, 1), (1, 2), (2, 3), (3, 0), (0, 2), (1, 3)] {
//!     g.add_edge(u, v).unwrap();
//! }
//!
//! let cycle = find_hamiltonian_cycle(&g, 0, Strategy::WorkStealing { pool_size: 4 })
//!     .unwrap()
//!     .expect("graph is Hamiltonian");
//! assert_eq!(cycle.vertices(), &[0, 1, 2, 3]);
//! assert_eq!(cycle.to_string(), "0 -> 1 -> 2 -> 3 -> 0");
//! ```
//!
//! ## Choosing an Engine
//!
//! ```
//! use hamcycle::generate::split_components;
//! use hamcycle::search::{CycleSearch, Strategy};
//!
//! let g = split_components(10);
//! for strategy in [
//!     Strategy::Sequential,
//!     Strategy::WorkStealing { pool_size: 2 },
//!     Strategy::BudgetedThreads { budget: 4 },
//! ] {
//!     // No Hamiltonian cycle is a normal result, not an error.
//!     assert!(strategy.engine().find_hamiltonian_cycle(&g, 0).unwrap().is_none());
//! }
//! ```
//!
//! ## Modules
//!
//! - [`graph`]: Graph type and the `n` / `m` / `u v` edge-list format.
//! - [`search`]: Strategies, the shared backtracking step, and result assembly.
//! - [`work_stealing`], [`budgeted`], [`sequential`]: the engines.
//! - [`cycle`]: The returned cycle and its independent validation.
//! - [`generate`]: Graph generators for benchmarks and tests.
//!
//! ## Behavior Notes
//!
//! - When several cycles exist, parallel engines may return any of them. With one worker
//!   (or budget 1) the result is the first cycle in depth-first graph order.
//! - Cancellation is cooperative: branches already running when a cycle is found finish
//!   their current step before unwinding.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::inline_always)] // Intentional for hot-path code
#![allow(clippy::doc_markdown)]

pub mod budgeted;
pub mod cancel;
pub mod cycle;
pub mod generate;
pub mod graph;
pub mod search;
pub mod sequential;
pub mod state;
pub mod stats;
pub mod work_stealing;

/// Re-export commonly used types for convenience.
pub mod prelude {
    pub use crate::budgeted::{split_budget, BudgetedThreadEngine};
    pub use crate::cancel::CancellationToken;
    pub use crate::cycle::{CycleError, HamiltonianCycle};
    pub use crate::graph::{parse_edge_list, Graph, GraphError};
    pub use crate::search::{
        find_hamiltonian_cycle, search_with_stats, CycleSearch, SearchConfig, SearchError,
        SearchReport, Strategy,
    };
    pub use crate::sequential::{find_cycle, SequentialEngine};
    pub use crate::stats::{SearchStats, StatsSnapshot};
    pub use crate::work_stealing::WorkStealingEngine;
}
