use std::fmt;

use itertools::Itertools;

use crate::error::{Error, Result};

/// Identifier of a vertex in the left partition
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LeftId(pub usize);

/// Identifier of a vertex in the right partition
///
/// Left and right ids live in separate namespaces: `LeftId(0)` and
/// `RightId(0)` are different vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RightId(pub usize);

impl fmt::Display for LeftId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for RightId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Represents an immutable bipartite graph given as an edge list
///
/// Both partitions draw their ids from `[0, n)`. Neighbor lists preserve the
/// order edges appeared in the input; that order decides which of several
/// equally sized maximum matchings the engine reports.
#[derive(Debug, Clone)]
pub struct BipartiteGraph {
    /// Size of each vertex id space
    n: usize,
    /// Number of edges as given, duplicates included
    edge_count: usize,
    /// adj[u] = right neighbors of left vertex u, in input order
    adj: Vec<Vec<RightId>>,
    /// Distinct left endpoints in order of first appearance
    lefts: Vec<LeftId>,
}

impl BipartiteGraph {
    /// Build a graph over the vertex space `[0, n)` from an edge list.
    ///
    /// Rejects any edge with an endpoint outside the vertex space.
    pub fn new(n: usize, edges: &[(usize, usize)]) -> Result<Self> {
        let mut adj = vec![Vec::new(); n];
        for &(u, v) in edges {
            if u >= n || v >= n {
                return Err(Error::malformed(format!(
                    "edge ({}, {}) references a vertex outside [0, {})",
                    u, v, n
                )));
            }
            adj[u].push(RightId(v));
        }
        let lefts = edges.iter().map(|&(u, _)| LeftId(u)).unique().collect();
        Ok(BipartiteGraph {
            n,
            edge_count: edges.len(),
            adj,
            lefts,
        })
    }

    /// Size of each vertex id space
    pub fn vertex_space(&self) -> usize {
        self.n
    }

    /// Number of edges as given in the input
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Right neighbors of a left vertex, in input order
    pub fn neighbors(&self, left: LeftId) -> &[RightId] {
        &self.adj[left.0]
    }

    /// Distinct left vertices that carry at least one edge, ordered by first
    /// appearance in the edge list
    pub fn left_vertices(&self) -> &[LeftId] {
        &self.lefts
    }
}

// Module declarations
pub mod error;
pub mod matching;
pub mod parser;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graph_creation() {
        let g = BipartiteGraph::new(3, &[(0, 1), (2, 0), (0, 2)]).unwrap();
        assert_eq!(g.vertex_space(), 3);
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.neighbors(LeftId(0)), &[RightId(1), RightId(2)]);
        assert!(g.neighbors(LeftId(1)).is_empty());
        assert_eq!(g.left_vertices(), &[LeftId(0), LeftId(2)]);
    }

    #[test]
    fn test_graph_rejects_out_of_range_edge() {
        let result = BipartiteGraph::new(2, &[(0, 1), (1, 2)]);
        assert!(matches!(result, Err(Error::MalformedInput { .. })));
    }

    #[test]
    fn test_parse_simple_instance() {
        let input = "2 2\n0 0\n1 1\n";
        let result = parser::parse_instance(input);
        assert!(result.is_ok());
    }

    #[test]
    fn test_matching_smoke() {
        let g = BipartiteGraph::new(2, &[(0, 0), (1, 1)]).unwrap();
        let mut engine = matching::MatchingEngine::new(&g);
        assert_eq!(engine.compute(), 2);
    }
}
