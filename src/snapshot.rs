//! Graph export for visualization
//!
//! A renderer consumes the finished network as plain lists. Nothing here draws;
//! it only fixes the order and grouping a drawing would use.

use crate::graph::{Connection, Person, SocialGraph};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Stable, serializable copy of a network's nodes and edges
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    /// People in declaration order
    pub people: Vec<Person>,
    /// Connections in input order, self-loops already removed
    pub connections: Vec<Connection>,
    /// Concentric shells, innermost first
    pub shells: Vec<Vec<Person>>,
}

impl GraphSnapshot {
    pub fn capture(graph: &SocialGraph) -> Self {
        Self {
            people: graph.people().cloned().collect(),
            connections: graph.connections().to_vec(),
            shells: shell_layout(graph),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Group people into concentric shells by degree.
///
/// One shell per distinct degree, highest degree innermost. Within a shell,
/// people keep declaration order.
pub fn shell_layout(graph: &SocialGraph) -> Vec<Vec<Person>> {
    let mut by_degree: BTreeMap<usize, Vec<Person>> = BTreeMap::new();
    for (person, degree) in graph.degrees() {
        by_degree.entry(degree).or_default().push(person.clone());
    }
    by_degree.into_values().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shells_on_star() {
        let g = SocialGraph::new(
            ["Leaf1", "Hub", "Leaf2", "Loner"],
            vec![Connection::new("Hub", "Leaf1"), Connection::new("Hub", "Leaf2")],
        );

        let shells = shell_layout(&g);
        assert_eq!(
            shells,
            vec![
                vec![Person::from("Hub")],
                vec![Person::from("Leaf1"), Person::from("Leaf2")],
                vec![Person::from("Loner")],
            ]
        );
    }

    #[test]
    fn test_capture_round_trips_through_json() {
        let g = SocialGraph::new(
            ["A", "B"],
            vec![Connection::new("A", "A"), Connection::new("A", "B")],
        );

        let snapshot = GraphSnapshot::capture(&g);
        assert_eq!(snapshot.connections, vec![Connection::new("A", "B")]);

        let back: GraphSnapshot = serde_json::from_str(&snapshot.to_json().unwrap()).unwrap();
        assert_eq!(back, snapshot);
    }

    #[test]
    fn test_empty_network_has_no_shells() {
        let g = SocialGraph::new(Vec::<Person>::new(), Vec::new());
        assert!(shell_layout(&g).is_empty());
    }
}
