//! Popularity queries
//!
//! Extremal degree search. Ties are always reported in full.

use crate::graph::{GraphError, GraphResult, Person, SocialGraph};
use std::collections::BTreeSet;

/// Degree a person must exceed to count as highly connected
pub const DEFAULT_THRESHOLD: usize = 4;

/// Everyone whose degree equals the network maximum
pub fn most_popular(graph: &SocialGraph) -> GraphResult<BTreeSet<Person>> {
    let max = graph
        .degrees()
        .map(|(_, d)| d)
        .max()
        .ok_or(GraphError::EmptyGraph)?;
    Ok(with_degree(graph, |d| d == max))
}

/// Everyone whose degree equals the network minimum
pub fn least_popular(graph: &SocialGraph) -> GraphResult<BTreeSet<Person>> {
    let min = graph
        .degrees()
        .map(|(_, d)| d)
        .min()
        .ok_or(GraphError::EmptyGraph)?;
    Ok(with_degree(graph, |d| d == min))
}

/// Everyone with strictly more than `threshold` connections. Empty when nobody qualifies.
pub fn more_than_threshold(graph: &SocialGraph, threshold: usize) -> BTreeSet<Person> {
    with_degree(graph, |d| d > threshold)
}

fn with_degree(graph: &SocialGraph, keep: impl Fn(usize) -> bool) -> BTreeSet<Person> {
    graph
        .degrees()
        .filter(|(_, d)| keep(*d))
        .map(|(p, _)| p.clone())
        .collect()
}
