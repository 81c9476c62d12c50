//! The value a successful search returns, plus an independent check of its validity.

use crate::graph::Graph;
use std::fmt;
use thiserror::Error;

/// Reasons a vertex sequence is not a Hamiltonian cycle of a given graph.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CycleError {
    /// The sequence does not visit every vertex exactly once by count.
    #[error("cycle has {got} vertices, graph has {expected}")]
    WrongLength {
        /// Number of vertices in the graph.
        expected: usize,
        /// Length of the sequence.
        got: usize,
    },
    /// The sequence does not begin at the requested start vertex.
    #[error("cycle starts at {got}, expected {expected}")]
    WrongStart {
        /// Requested start vertex.
        expected: usize,
        /// First vertex of the sequence.
        got: usize,
    },
    /// A vertex is outside the graph.
    #[error("vertex {vertex} is not in the graph")]
    UnknownVertex {
        /// The offending vertex.
        vertex: usize,
    },
    /// A vertex appears more than once.
    #[error("vertex {vertex} is visited twice")]
    Duplicate {
        /// The repeated vertex.
        vertex: usize,
    },
    /// Two consecutive vertices are not joined by a directed edge.
    #[error("missing edge {from} -> {to}")]
    MissingEdge {
        /// Source of the missing edge.
        from: usize,
        /// Target of the missing edge.
        to: usize,
    },
}

/// A Hamiltonian cycle, stored open: `n` vertices beginning with the start vertex.
///
/// The closing edge from the last vertex back to [`HamiltonianCycle::start`] is implied.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct HamiltonianCycle {
    vertices: Vec<usize>,
}

impl HamiltonianCycle {
    /// Wraps a path produced by the search. Never empty.
    pub(crate) fn from_path(vertices: Vec<usize>) -> Self {
        debug_assert!(!vertices.is_empty());
        Self { vertices }
    }

    /// Validates `vertices` against `graph` and wraps it.
    ///
    /// # Errors
    /// Returns the first violation found, see [`HamiltonianCycle::verify`].
    pub fn try_new(graph: &Graph, start: usize, vertices: Vec<usize>) -> Result<Self, CycleError> {
        let cycle = Self { vertices };
        cycle.verify(graph, start)?;
        Ok(cycle)
    }

    /// The start vertex.
    #[inline]
    pub fn start(&self) -> usize {
        self.vertices[0]
    }

    /// The vertices in visiting order, without the closing repetition of the start.
    #[inline]
    pub fn vertices(&self) -> &[usize] {
        &self.vertices
    }

    /// Consumes the cycle, returning its vertices.
    #[inline]
    pub fn into_vertices(self) -> Vec<usize> {
        self.vertices
    }

    /// Number of vertices (equals the graph order).
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns true if the cycle has no vertices. Never the case for a search result.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterates the vertices and then the start vertex again, closing the cycle.
    pub fn closed(&self) -> impl Iterator<Item = usize> + '_ {
        self.vertices.iter().copied().chain(std::iter::once(self.start()))
    }

    /// Checks that this is a Hamiltonian cycle of `graph` beginning at `start`.
    ///
    /// # Errors
    /// Returns the first violation in this order: length, start, range, duplicates, edges.
    pub fn verify(&self, graph: &Graph, start: usize) -> Result<(), CycleError> {
        let n = graph.vertex_count();
        if self.vertices.len() != n {
            return Err(CycleError::WrongLength {
                expected: n,
                got: self.vertices.len(),
            });
        }
        let Some(&first) = self.vertices.first() else {
            return Err(CycleError::WrongLength { expected: n, got: 0 });
        };
        if first != start {
            return Err(CycleError::WrongStart {
                expected: start,
                got: first,
            });
        }

        let mut seen = vec![false; n];
        for &v in &self.vertices {
            if v >= n {
                return Err(CycleError::UnknownVertex { vertex: v });
            }
            if seen[v] {
                return Err(CycleError::Duplicate { vertex: v });
            }
            seen[v] = true;
        }

        let closed: Vec<usize> = self.closed().collect();
        for pair in closed.windows(2) {
            if !graph.has_edge(pair[0], pair[1]) {
                return Err(CycleError::MissingEdge {
                    from: pair[0],
                    to: pair[1],
                });
            }
        }
        Ok(())
    }
}

impl fmt::Display for HamiltonianCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for v in self.closed() {
            if !first {
                write!(f, " -> ")?;
            }
            write!(f, "{v}")?;
            first = false;
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
