//! In-memory social graph
//!
//! An undirected multigraph over people. Built once from people and connections,
//! read-only afterwards.

use super::generator::Strategy;
use super::types::{Connection, Person};
use indexmap::{IndexMap, IndexSet};
use rand::Rng;
use sociogram_algorithms::{all_pairs_bfs, Distances, GraphView, NodeIndex};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during graph queries
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("Person {0} is not in the network")]
    UnknownNode(Person),

    #[error("Network has no people")]
    EmptyGraph,
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Shortest-path hop counts between every pair of reachable people
pub type PathLengths = IndexMap<Person, IndexMap<Person, usize>>;

/// Immutable social network
///
/// - people: insertion-ordered set, the position of a person is their dense index
/// - connections: every accepted connection, in input order, parallel ones included
/// - view: CSR topology used by the algorithms crate
#[derive(Debug, Clone)]
pub struct SocialGraph {
    people: IndexSet<Person>,
    connections: Vec<Connection>,
    view: GraphView,
}

impl SocialGraph {
    /// Build a network from people and explicit connections.
    ///
    /// Duplicate people collapse to one node. A connection naming someone who was
    /// not declared adds them as a new node, after the declared people, in the
    /// order they are first seen. Self-loops add no edge.
    pub fn new<P, C>(people: P, connections: C) -> Self
    where
        P: IntoIterator,
        P::Item: Into<Person>,
        C: IntoIterator<Item = Connection>,
    {
        let mut people: IndexSet<Person> = people.into_iter().map(Into::into).collect();
        let declared = people.len();

        let mut accepted = Vec::new();
        let mut edges: Vec<(NodeIndex, NodeIndex)> = Vec::new();
        let mut skipped_loops = 0usize;

        for connection in connections {
            let (a, _) = people.insert_full(connection.0.clone());
            let (b, _) = people.insert_full(connection.1.clone());
            if a == b {
                skipped_loops += 1;
                continue;
            }
            edges.push((a, b));
            accepted.push(connection);
        }

        if skipped_loops > 0 {
            debug!("Skipped {} self-connections", skipped_loops);
        }
        if people.len() > declared {
            debug!(
                "Added {} people named only by connections",
                people.len() - declared
            );
        }

        let view = GraphView::from_edges(people.len(), &edges);
        info!(
            "Built social graph with {} people and {} connections",
            people.len(),
            accepted.len()
        );

        SocialGraph {
            people,
            connections: accepted,
            view,
        }
    }

    /// Build a network whose connections come from a generation strategy
    pub fn generated<P, R>(people: P, strategy: Strategy, rng: &mut R) -> Self
    where
        P: IntoIterator,
        P::Item: Into<Person>,
        R: Rng + ?Sized,
    {
        let people: Vec<Person> = people.into_iter().map(Into::into).collect();
        let connections = strategy.generate(&people, rng);
        Self::new(people, connections)
    }

    /// People in declaration order
    pub fn people(&self) -> impl ExactSizeIterator<Item = &Person> + '_ {
        self.people.iter()
    }

    /// Accepted connections in input order
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn node_count(&self) -> usize {
        self.people.len()
    }

    pub fn edge_count(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// Number of connection endpoints at `person`, parallel connections included
    pub fn degree(&self, person: &Person) -> GraphResult<usize> {
        let idx = self.index_of(person)?;
        Ok(self.view.degree(idx))
    }

    /// Every person with their degree, in declaration order
    pub fn degrees(&self) -> impl Iterator<Item = (&Person, usize)> + '_ {
        self.people
            .iter()
            .enumerate()
            .map(move |(idx, person)| (person, self.view.degree(idx)))
    }

    /// Hop counts between all reachable pairs.
    ///
    /// Each person maps to itself at distance 0. People in different components
    /// have no entry for each other.
    pub fn shortest_path_lengths(&self) -> PathLengths {
        self.distance_matrix()
            .into_iter()
            .enumerate()
            .map(|(source, row)| {
                let reachable = row
                    .into_iter()
                    .enumerate()
                    .filter_map(|(target, d)| d.map(|d| (self.people[target].clone(), d)))
                    .collect();
                (self.people[source].clone(), reachable)
            })
            .collect()
    }

    pub(crate) fn index_of(&self, person: &Person) -> GraphResult<NodeIndex> {
        self.people
            .get_index_of(person)
            .ok_or_else(|| GraphError::UnknownNode(person.clone()))
    }

    pub(crate) fn person_at(&self, idx: NodeIndex) -> &Person {
        &self.people[idx]
    }

    pub(crate) fn distance_matrix(&self) -> Vec<Distances> {
        all_pairs_bfs(&self.view)
    }

    pub(crate) fn view(&self) -> &GraphView {
        &self.view
    }
}
