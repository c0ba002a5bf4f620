//! Social network analytics
//!
//! Read-only queries layered on `SocialGraph`. Topology work (degree, BFS)
//! lives in the `sociogram-algorithms` crate; this module maps its dense
//! indices back to people.

pub mod popularity;
pub mod separation;
pub mod stats;

pub use popularity::{least_popular, more_than_threshold, most_popular, DEFAULT_THRESHOLD};
pub use separation::{adjacency_at_distance, friends, friends_of_friends, Adjacency};
pub use stats::{average_degree, Rounding};
