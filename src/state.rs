//! Per-branch search state: the current path and its visited bitset.
//!
//! Branches never share a `SearchState`. Forking a branch goes through
//! [`SearchState::extended`], which copies both the path and the bitset, so concurrently running
//! branches need no locking. The sequential backtracker instead uses [`SearchState::push`] /
//! [`SearchState::pop`] on a single owned state.

use crate::graph::Graph;

#[inline(always)]
const fn bit(v: usize) -> u64 {
    1u64 << (v % 64)
}

// ============================================================================
// VisitedSet
// ============================================================================

/// Fixed-capacity bitset over vertices `0..n`, one `u64` word per 64 vertices.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisitedSet {
    words: Vec<u64>,
    len: usize,
}

impl VisitedSet {
    /// Creates an empty set able to hold vertices `0..n`.
    pub fn new(n: usize) -> Self {
        Self {
            words: vec![0u64; n.div_ceil(64)],
            len: 0,
        }
    }

    /// Returns whether `v` is in the set.
    #[inline(always)]
    pub fn contains(&self, v: usize) -> bool {
        self.words.get(v / 64).is_some_and(|w| w & bit(v) != 0)
    }

    /// Inserts `v`; returns `false` if it was already present.
    #[inline]
    pub fn insert(&mut self, v: usize) -> bool {
        let w = &mut self.words[v / 64];
        if *w & bit(v) != 0 {
            return false;
        }
        *w |= bit(v);
        self.len += 1;
        true
    }

    /// Removes `v`; returns `false` if it was absent.
    #[inline]
    pub fn remove(&mut self, v: usize) -> bool {
        let w = &mut self.words[v / 64];
        if *w & bit(v) == 0 {
            return false;
        }
        *w &= !bit(v);
        self.len -= 1;
        true
    }

    /// Number of vertices in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no vertex is in the set.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

// ============================================================================
// SearchState
// ============================================================================

/// Ordered path from the start vertex plus its membership bitset.
///
/// Invariant: `visited.contains(v)` iff `v` is on `path`, and `path` has no duplicates.
#[derive(Clone, Debug)]
pub struct SearchState {
    path: Vec<usize>,
    visited: VisitedSet,
}

impl SearchState {
    /// The root state of a search: `path = [start]`, `visited = {start}`.
    ///
    /// `start` must be a vertex of a graph with `n` vertices.
    pub fn root(n: usize, start: usize) -> Self {
        let mut path = Vec::with_capacity(n);
        path.push(start);
        let mut visited = VisitedSet::new(n);
        visited.insert(start);
        Self { path, visited }
    }

    /// The path so far, starting with the start vertex.
    #[inline]
    pub fn path(&self) -> &[usize] {
        &self.path
    }

    /// Consumes the state, returning its path.
    #[inline]
    pub fn into_path(self) -> Vec<usize> {
        self.path
    }

    /// The vertex at the end of the path.
    #[inline]
    pub fn current(&self) -> usize {
        // The path always holds at least the start vertex.
        self.path[self.path.len() - 1]
    }

    /// Number of vertices on the path.
    #[inline]
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    /// Whether `v` is already on the path.
    #[inline]
    pub fn is_visited(&self, v: usize) -> bool {
        self.visited.contains(v)
    }

    /// Unvisited successors of the current vertex, in graph order.
    ///
    /// A duplicated edge yields a duplicated candidate.
    pub fn candidates(&self, graph: &Graph) -> Vec<usize> {
        graph
            .neighbors(self.current())
            .iter()
            .copied()
            .filter(|&v| !self.visited.contains(v))
            .collect()
    }

    /// A copy of this state with `v` appended. Used at every fork.
    pub fn extended(&self, v: usize) -> Self {
        debug_assert!(!self.visited.contains(v), "vertex {v} already on path");
        let mut next = self.clone();
        next.push(v);
        next
    }

    /// Appends `v` in place.
    #[inline]
    pub fn push(&mut self, v: usize) {
        let inserted = self.visited.insert(v);
        debug_assert!(inserted, "vertex {v} already on path");
        self.path.push(v);
    }

    /// Removes the last vertex in place. The start vertex is never popped.
    #[inline]
    pub fn pop(&mut self) {
        debug_assert!(self.path.len() > 1, "cannot pop the start vertex");
        if self.path.len() > 1 {
            if let Some(v) = self.path.pop() {
                self.visited.remove(v);
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_consistent(state: &SearchState, n: usize) {
        assert!(state.path().len() <= n);
        assert_eq!(state.visited.len(), state.path().len());
        for &v in state.path() {
            assert!(state.is_visited(v));
        }
        for v in 0..n {
            assert_eq!(state.is_visited(v), state.path().contains(&v));
        }
    }

    #[test]
    fn visited_set_spans_word_boundaries() {
        let mut set = VisitedSet::new(130);
        assert!(set.is_empty());
        for v in [0, 63, 64, 127, 128, 129] {
            assert!(set.insert(v));
            assert!(!set.insert(v));
            assert!(set.contains(v));
        }
        assert_eq!(set.len(), 6);
        assert!(!set.contains(1));
        assert!(!set.contains(65));
        assert!(!set.contains(500), "out-of-range lookups are false");
        assert!(set.remove(64));
        assert!(!set.remove(64));
        assert!(!set.contains(64));
        assert!(set.contains(63));
        assert_eq!(set.len(), 5);
    }

    #[test]
    fn root_contains_only_start() {
        let state = SearchState::root(5, 3);
        assert_eq!(state.path(), &[3]);
        assert_eq!(state.current(), 3);
        assert_eq!(state.depth(), 1);
        assert_consistent(&state, 5);
    }

    #[test]
    fn extended_copies_and_leaves_parent_untouched() {
        let root = SearchState::root(4, 0);
        let a = root.extended(2);
        let b = root.extended(1).extended(3);

        assert_eq!(root.path(), &[0]);
        assert_eq!(a.path(), &[0, 2]);
        assert_eq!(b.path(), &[0, 1, 3]);
        assert!(!root.is_visited(2));
        assert!(!a.is_visited(1));
        assert_consistent(&root, 4);
        assert_consistent(&a, 4);
        assert_consistent(&b, 4);
    }

    #[test]
    fn push_pop_restores_state() {
        let mut state = SearchState::root(6, 0);
        state.push(4);
        state.push(2);
        assert_consistent(&state, 6);
        state.pop();
        assert_eq!(state.path(), &[0, 4]);
        assert!(!state.is_visited(2));
        state.pop();
        assert_eq!(state.path(), &[0]);
        assert_consistent(&state, 6);
    }

    #[test]
    fn candidates_follow_graph_order_and_skip_visited() {
        let g = Graph::from_edges(5, [(0, 3), (0, 1), (0, 4), (0, 1), (1, 0)]).unwrap();
        let state = SearchState::root(5, 0);
        assert_eq!(state.candidates(&g), vec![3, 1, 4, 1]);

        let state = state.extended(1);
        assert!(state.candidates(&g).is_empty(), "only edge from 1 goes back to start");
    }
}
