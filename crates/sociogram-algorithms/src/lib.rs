pub mod common;
pub mod pathfinding;

pub use common::{GraphView, NodeIndex};
pub use pathfinding::{all_pairs_bfs, bfs_distances, Distances};
