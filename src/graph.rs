//! Directed adjacency-list graph and the plain-text edge-list format it is loaded from.
//!
//! Successor lists keep **insertion order**. The backtracking engines visit neighbors in that
//! order, so the first-listed successor is always the one explored inline (and, on a single
//! worker, the one explored first). Edge queries scan the list instead of hashing for the same
//! reason: the adjacency list is the only source of truth for both existence and order.

use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;
use thiserror::Error;

// ============================================================================
// Errors
// ============================================================================

/// Errors raised while building, loading, or querying a [`Graph`].
#[derive(Debug, Error)]
pub enum GraphError {
    /// A vertex index is outside `0..n`.
    #[error("vertex {vertex} is out of range for a graph with {n} vertices")]
    InvalidVertex {
        /// The offending vertex.
        vertex: usize,
        /// Number of vertices in the graph.
        n: usize,
    },
    /// The input ended before a required line.
    #[error("line {line}: unexpected end of input, expected {expected}")]
    UnexpectedEof {
        /// 1-based line number where the missing line was expected.
        line: usize,
        /// What was expected there.
        expected: &'static str,
    },
    /// A token could not be parsed as a non-negative integer.
    #[error("line {line}: invalid integer {token:?}")]
    InvalidInteger {
        /// 1-based line number.
        line: usize,
        /// The token as it appeared in the input.
        token: String,
    },
    /// An edge line did not contain exactly two endpoints.
    #[error("line {line}: expected `u v`, got {got} token(s)")]
    MalformedEdge {
        /// 1-based line number.
        line: usize,
        /// Number of tokens found on the line.
        got: usize,
    },
    /// An edge endpoint is outside `0..n`.
    #[error("line {line}: {source}")]
    EdgeOutOfRange {
        /// 1-based line number.
        line: usize,
        /// The underlying range error.
        #[source]
        source: Box<GraphError>,
    },
    /// I/O error while reading or writing a graph file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

// ============================================================================
// Graph
// ============================================================================

/// A directed graph on vertices `0..n` stored as ordered successor lists.
///
/// Duplicate edges are kept as-is; they only make a successor appear twice in
/// [`Graph::neighbors`], which the search tolerates because a visited vertex is
/// never a candidate twice on the same path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graph {
    adj: Vec<Vec<usize>>,
    edge_count: usize,
}

impl Graph {
    /// Creates a graph with `n` vertices and no edges.
    pub fn new(n: usize) -> Self {
        Self {
            adj: vec![Vec::new(); n],
            edge_count: 0,
        }
    }

    /// Builds a graph from an edge iterator, in iteration order.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertex`] on the first out-of-range endpoint.
    pub fn from_edges<I>(n: usize, edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut graph = Self::new(n);
        for (u, v) in edges {
            graph.add_edge(u, v)?;
        }
        Ok(graph)
    }

    /// Number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    /// Number of edges added so far, duplicates included.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns `Ok(())` if `v` is a vertex of this graph.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertex`] if `v >= n`.
    #[inline]
    pub fn check_vertex(&self, v: usize) -> Result<(), GraphError> {
        if v < self.adj.len() {
            Ok(())
        } else {
            Err(GraphError::InvalidVertex {
                vertex: v,
                n: self.adj.len(),
            })
        }
    }

    /// Appends the directed edge `u -> v` to `u`'s successor list.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertex`] if either endpoint is out of range.
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<(), GraphError> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        self.adj[u].push(v);
        self.edge_count += 1;
        Ok(())
    }

    /// Returns whether `u -> v` exists. Linear in the out-degree of `u`.
    ///
    /// Out-of-range vertices have no edges.
    #[inline]
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.adj.get(u).is_some_and(|succ| succ.contains(&v))
    }

    /// Successors of `u` in insertion order. Empty for out-of-range `u`.
    #[inline]
    pub fn neighbors(&self, u: usize) -> &[usize] {
        self.adj.get(u).map_or(&[], Vec::as_slice)
    }

    /// Successors of `u`, failing for out-of-range vertices.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertex`] if `u >= n`.
    pub fn try_neighbors(&self, u: usize) -> Result<&[usize], GraphError> {
        self.check_vertex(u)?;
        Ok(&self.adj[u])
    }

    /// Out-degree of `u`.
    #[inline]
    pub fn out_degree(&self, u: usize) -> usize {
        self.neighbors(u).len()
    }

    /// Iterates over all edges as `(u, v)` pairs, grouped by source in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.adj
            .iter()
            .enumerate()
            .flat_map(|(u, succ)| succ.iter().map(move |&v| (u, v)))
    }

    /// Writes the graph in edge-list format (`n`, `m`, then one `u v` line per edge).
    ///
    /// # Errors
    /// Returns an error if writing fails.
    pub fn write_to<W: Write>(&self, mut w: W) -> io::Result<()> {
        writeln!(w, "{}", self.vertex_count())?;
        writeln!(w, "{}", self.edge_count)?;
        for (u, v) in self.edges() {
            writeln!(w, "{u} {v}")?;
        }
        Ok(())
    }

    /// Saves the graph to `filename` in edge-list format.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or written.
    pub fn save_to_file(&self, filename: impl AsRef<Path>) -> io::Result<()> {
        let mut w = BufWriter::new(File::create(filename)?);
        self.write_to(&mut w)?;
        w.flush()
    }

    /// Loads a graph from an edge-list file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is malformed.
    pub fn load_from_file(filename: impl AsRef<Path>) -> Result<Self, GraphError> {
        let mut text = String::new();
        File::open(filename)?.read_to_string(&mut text)?;
        parse_edge_list(&text)
    }
}

// ============================================================================
// Parsing
// ============================================================================

/// Parses the edge-list format:
///
/// ```text
/// n
/// m
/// u0 v0
/// ...
/// u{m-1} v{m-1}
/// ```
///
/// Blank lines are skipped. Lines after the `m`-th edge are ignored.
///
/// # Errors
/// Returns an error naming the 1-based line of the first problem.
pub fn parse_edge_list(text: &str) -> Result<Graph, GraphError> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty());
    let last_line = text.lines().count();

    let (line, n_str) = lines.next().ok_or(GraphError::UnexpectedEof {
        line: 1,
        expected: "vertex count",
    })?;
    let n = parse_usize(n_str, line)?;

    let (line, m_str) = lines.next().ok_or(GraphError::UnexpectedEof {
        line: line + 1,
        expected: "edge count",
    })?;
    let m = parse_usize(m_str, line)?;

    let mut graph = Graph::new(n);
    for _ in 0..m {
        let (line, edge) = lines.next().ok_or(GraphError::UnexpectedEof {
            line: last_line + 1,
            expected: "edge line",
        })?;
        let tokens: Vec<&str> = edge.split_whitespace().collect();
        let [u, v] = tokens[..] else {
            return Err(GraphError::MalformedEdge {
                line,
                got: tokens.len(),
            });
        };
        let u = parse_usize(u, line)?;
        let v = parse_usize(v, line)?;
        graph
            .add_edge(u, v)
            .map_err(|e| GraphError::EdgeOutOfRange {
                line,
                source: Box::new(e),
            })?;
    }
    Ok(graph)
}

fn parse_usize(token: &str, line: usize) -> Result<usize, GraphError> {
    token.parse().map_err(|_| GraphError::InvalidInteger {
        line,
        token: token.to_string(),
    })
}

// ============================================================================
// Tests
// ============================================================================
