//! Social network graph
//!
//! This module implements the network data model:
//! - People as nodes, identified by name
//! - Undirected connections, parallel connections allowed, self-loops skipped
//! - Connection generation strategies for networks given only their people
//! - An immutable in-memory store answering degree and distance queries

pub mod generator;
pub mod store;
pub mod types;

// Re-export main types
pub use generator::{generate_full, generate_random, Strategy};
pub use store::{GraphError, GraphResult, PathLengths, SocialGraph};
pub use types::{Connection, Person};
