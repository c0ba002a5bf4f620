//! Sociogram
//!
//! A small social network modelled as an undirected multigraph, with the
//! relationship metrics derived from it.
//!
//! # Components
//!
//! - `graph`: people, connections, connection generation strategies and the
//!   immutable `SocialGraph`
//! - `algo`: read-only analytics (degrees of separation, popularity, averages)
//! - `report`: the six-part report a driver prints
//! - `snapshot`: node/edge export for a visualization sink
//! - `config`: YAML/JSON description of which network to build
//!
//! Loading the library has no side effects; drivers build and report explicitly.
//!
//! ## Example Usage
//!
//! ```rust
//! use sociogram::{algo, Connection, SocialGraph};
//!
//! let graph = SocialGraph::new(
//!     ["A", "B", "C"],
//!     vec![Connection::new("A", "B"), Connection::new("B", "C")],
//! );
//!
//! assert_eq!(graph.degree(&"B".into()).unwrap(), 2);
//!
//! let popular = algo::most_popular(&graph).unwrap();
//! assert_eq!(popular.len(), 1);
//!
//! let fof = algo::friends_of_friends(&graph);
//! assert!(fof["B"].is_empty());
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod config;
pub mod graph;
pub mod report;
pub mod snapshot;

// Re-export main types for convenience
pub use graph::{
    Connection, GraphError, GraphResult, PathLengths, Person, SocialGraph, Strategy,
};

pub use algo::{Adjacency, Rounding};

pub use config::{ConfigError, ConfigResult, NetworkConfig};

pub use report::{Report, ReportOptions};

pub use snapshot::GraphSnapshot;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let ver = version();
        assert!(!ver.is_empty());
        assert_eq!(ver, "0.1.0");
    }
}
