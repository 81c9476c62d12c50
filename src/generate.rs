//! Graph generators for benchmarks and tests.

use crate::graph::Graph;
use rand::seq::SliceRandom;
use rand::Rng;

/// Ring `0 -> 1 -> ... -> n-1 -> 0` where every vertex also has a chord `u -> u+2`,
/// listed **before** the ring edge.
///
/// Depth-first search in graph order always tries the chord first, so the search has to back
/// out of misleading branches before following the ring. For even `n` the ring is the only
/// Hamiltonian cycle; for odd `n` the all-chord tour `0, 2, 4, ...` is a second one.
pub fn ring_with_chords(n: usize) -> Graph {
    let mut graph = Graph::new(n);
    if n == 0 {
        return graph;
    }
    for u in 0..n {
        add(&mut graph, u, (u + 2) % n);
        add(&mut graph, u, (u + 1) % n);
    }
    graph
}

/// A random Hamiltonian cycle through all `n` vertices plus `extra_edges` random distractor
/// edges (no self-loops), with every successor list shuffled.
///
/// Returns the graph and the planted cycle, rotated to start at vertex 0.
pub fn planted_cycle<R: Rng>(n: usize, extra_edges: usize, rng: &mut R) -> (Graph, Vec<usize>) {
    let mut order: Vec<usize> = (0..n).collect();
    order.shuffle(rng);
    if let Some(pos) = order.iter().position(|&v| v == 0) {
        order.rotate_left(pos);
    }

    let mut edges: Vec<(usize, usize)> = Vec::with_capacity(n + extra_edges);
    for (i, &u) in order.iter().enumerate() {
        edges.push((u, order[(i + 1) % n]));
    }
    if n > 1 {
        for _ in 0..extra_edges {
            let u = rng.random_range(0..n);
            let mut v = rng.random_range(0..n);
            while v == u {
                v = rng.random_range(0..n);
            }
            edges.push((u, v));
        }
    }
    edges.shuffle(rng);

    let mut graph = Graph::new(n);
    for (u, v) in edges {
        add(&mut graph, u, v);
    }
    (graph, order)
}

/// Two disjoint directed rings on `0..n/2` and `n/2..n`. Never Hamiltonian for `n >= 2`.
///
/// A ring of a single vertex gets no self-loop.
pub fn split_components(n: usize) -> Graph {
    let mut graph = Graph::new(n);
    let half = n / 2;
    for (lo, hi) in [(0, half), (half, n)] {
        let len = hi - lo;
        if len < 2 {
            continue;
        }
        for u in lo..hi {
            add(&mut graph, u, lo + (u - lo + 1) % len);
        }
    }
    graph
}

/// Directed Erdős–Rényi graph: each ordered pair `u != v` is an edge with probability `p`.
pub fn random_graph<R: Rng>(n: usize, p: f64, rng: &mut R) -> Graph {
    debug_assert!((0.0..=1.0).contains(&p), "p must be in [0, 1]");
    let p = p.clamp(0.0, 1.0);
    let mut graph = Graph::new(n);
    for u in 0..n {
        for v in 0..n {
            if u != v && rng.random_bool(p) {
                add(&mut graph, u, v);
            }
        }
    }
    graph
}

#[inline]
fn add(graph: &mut Graph, u: usize, v: usize) {
    // Generators only produce in-range endpoints.
    let added = graph.add_edge(u, v);
    debug_assert!(added.is_ok());
}

// ============================================================================
// Tests
// ============================================================================
