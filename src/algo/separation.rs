//! Degrees of separation
//!
//! Groups people by exact hop count. This is graph distance, not the social
//! science notion.

use crate::graph::{Person, SocialGraph};
use indexmap::IndexMap;
use std::collections::BTreeSet;

/// Person -> people at a given distance from them
pub type Adjacency = IndexMap<Person, BTreeSet<Person>>;

/// For every person, the people exactly `degree` hops away.
///
/// Every person is a key, with an empty set when nobody sits at that distance.
/// `degree == 0` maps each person to themselves.
pub fn adjacency_at_distance(graph: &SocialGraph, degree: usize) -> Adjacency {
    graph
        .distance_matrix()
        .into_iter()
        .enumerate()
        .map(|(source, row)| {
            let at_distance = row
                .into_iter()
                .enumerate()
                .filter(|(_, d)| *d == Some(degree))
                .map(|(target, _)| graph.person_at(target).clone())
                .collect();
            (graph.person_at(source).clone(), at_distance)
        })
        .collect()
}

/// People one hop away
pub fn friends(graph: &SocialGraph) -> Adjacency {
    adjacency_at_distance(graph, 1)
}

/// People exactly two hops away
pub fn friends_of_friends(graph: &SocialGraph) -> Adjacency {
    adjacency_at_distance(graph, 2)
}
