//! Shared utilities for graph algorithms
//!
//! Provides a read-only, dense view of an undirected multigraph for algorithm execution.

/// Dense node index (0..N)
pub type NodeIndex = usize;

/// A dense, integer-indexed view of an undirected multigraph using Compressed Sparse Row (CSR) format.
///
/// Each undirected edge `(u, v)` is stored twice, once in the row of `u` and once in the row of `v`.
/// Parallel edges are kept, so the row length of a node is its multigraph degree.
#[derive(Debug, Clone, Default)]
pub struct GraphView {
    /// Number of nodes
    pub node_count: usize,
    /// Offsets into `neighbors`. Size = node_count + 1
    pub offsets: Vec<usize>,
    /// Contiguous array of neighbor node indices
    pub neighbors: Vec<NodeIndex>,
}

impl GraphView {
    /// Build a view from an undirected edge list.
    ///
    /// Self-loops and edges with an endpoint outside `0..node_count` are skipped.
    pub fn from_edges(node_count: usize, edges: &[(NodeIndex, NodeIndex)]) -> Self {
        let mut adjacency: Vec<Vec<NodeIndex>> = vec![Vec::new(); node_count];

        for &(u, v) in edges {
            if u == v || u >= node_count || v >= node_count {
                continue;
            }
            adjacency[u].push(v);
            adjacency[v].push(u);
        }

        Self::from_adjacency_list(adjacency)
    }

    /// Flatten per-node neighbor lists into CSR
    pub fn from_adjacency_list(adjacency: Vec<Vec<NodeIndex>>) -> Self {
        let node_count = adjacency.len();
        let mut offsets = Vec::with_capacity(node_count + 1);
        let mut neighbors = Vec::new();

        offsets.push(0);
        for row in adjacency {
            neighbors.extend(row);
            offsets.push(neighbors.len());
        }

        GraphView {
            node_count,
            offsets,
            neighbors,
        }
    }

    /// Number of undirected edges (parallel edges counted individually)
    pub fn edge_count(&self) -> usize {
        self.neighbors.len() / 2
    }

    /// Get the degree of a node (by index), counting parallel edges
    pub fn degree(&self, idx: NodeIndex) -> usize {
        self.offsets[idx + 1] - self.offsets[idx]
    }

    /// Get the neighbors of a node. A neighbor appears once per parallel edge.
    pub fn neighbors(&self, idx: NodeIndex) -> &[NodeIndex] {
        let start = self.offsets[idx];
        let end = self.offsets[idx + 1];
        &self.neighbors[start..end]
    }

    /// Sum of all degrees, always twice the edge count
    pub fn degree_sum(&self) -> usize {
        self.neighbors.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_edges_is_symmetric() {
        // 0 - 1 - 2
        let view = GraphView::from_edges(3, &[(0, 1), (1, 2)]);

        assert_eq!(view.node_count, 3);
        assert_eq!(view.edge_count(), 2);
        assert_eq!(view.neighbors(0), &[1]);
        assert_eq!(view.neighbors(1), &[0, 2]);
        assert_eq!(view.neighbors(2), &[1]);
    }

    #[test]
    fn test_parallel_edges_count_toward_degree() {
        let view = GraphView::from_edges(2, &[(0, 1), (1, 0), (0, 1)]);

        assert_eq!(view.degree(0), 3);
        assert_eq!(view.degree(1), 3);
        assert_eq!(view.edge_count(), 3);
    }

    #[test]
    fn test_self_loops_and_out_of_range_skipped() {
        let view = GraphView::from_edges(2, &[(0, 0), (1, 5), (0, 1)]);

        assert_eq!(view.degree(0), 1);
        assert_eq!(view.degree(1), 1);
        assert_eq!(view.degree_sum(), 2);
    }

    #[test]
    fn test_isolated_nodes() {
        let view = GraphView::from_edges(4, &[]);

        assert_eq!(view.offsets, vec![0, 0, 0, 0, 0]);
        assert!((0..4).all(|i| view.degree(i) == 0));
    }
}
