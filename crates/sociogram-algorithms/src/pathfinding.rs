//! Pathfinding algorithms
//!
//! Unweighted shortest-path lengths by breadth-first search.

use super::common::{GraphView, NodeIndex};
use rayon::prelude::*;
use std::collections::VecDeque;

/// Hop counts from one source, indexed by target. `None` means unreachable.
pub type Distances = Vec<Option<usize>>;

/// Breadth-First Search (Unweighted Shortest Path Lengths)
///
/// Returns the hop count from `source` to every node. The source itself is at distance 0.
/// Returns an all-`None` vector if `source` is out of range.
pub fn bfs_distances(view: &GraphView, source: NodeIndex) -> Distances {
    let mut dist: Distances = vec![None; view.node_count];
    if source >= view.node_count {
        return dist;
    }

    let mut queue = VecDeque::new();
    dist[source] = Some(0);
    queue.push_back(source);

    while let Some(current) = queue.pop_front() {
        let next_hop = dist[current].unwrap_or(0) + 1;
        for &next in view.neighbors(current) {
            if dist[next].is_none() {
                dist[next] = Some(next_hop);
                queue.push_back(next);
            }
        }
    }

    dist
}

/// BFS from every node.
///
/// Row `i` holds the distances from node `i`. Sources are independent reads over
/// the same view, so they run in parallel.
pub fn all_pairs_bfs(view: &GraphView) -> Vec<Distances> {
    (0..view.node_count)
        .into_par_iter()
        .map(|source| bfs_distances(view, source))
        .collect()
}
