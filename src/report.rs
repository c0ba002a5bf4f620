//! Network report
//!
//! The six analytics a driver shows for a network, computed in a fixed order:
//! friends, friends of friends, most popular, least popular, average degree,
//! and people above the connectivity threshold.

use crate::algo::{
    average_degree, friends, friends_of_friends, least_popular, more_than_threshold,
    most_popular, Adjacency, Rounding,
};
use crate::graph::{GraphResult, Person, SocialGraph};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use tracing::debug;

/// Parameters of a report
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportOptions {
    pub threshold: usize,
    pub rounding: Rounding,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            threshold: crate::algo::DEFAULT_THRESHOLD,
            rounding: Rounding::None,
        }
    }
}

/// Computed report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub friends: Adjacency,
    pub friends_of_friends: Adjacency,
    pub most_popular: BTreeSet<Person>,
    pub least_popular: BTreeSet<Person>,
    pub average_degree: f64,
    pub rounding: Rounding,
    pub threshold: usize,
    pub more_than_threshold: BTreeSet<Person>,
}

impl Report {
    /// Run every analytic against `graph`. Fails with `EmptyGraph` on a network without people.
    pub fn compute(graph: &SocialGraph, options: ReportOptions) -> GraphResult<Self> {
        debug!("Computing report for {} people", graph.node_count());

        Ok(Report {
            friends: friends(graph),
            friends_of_friends: friends_of_friends(graph),
            most_popular: most_popular(graph)?,
            least_popular: least_popular(graph)?,
            average_degree: average_degree(graph, options.rounding)?,
            rounding: options.rounding,
            threshold: options.threshold,
            more_than_threshold: more_than_threshold(graph, options.threshold),
        })
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Friends: {}", AdjacencyDisplay(&self.friends))?;
        writeln!(f, "Friends of friends: {}", AdjacencyDisplay(&self.friends_of_friends))?;
        writeln!(f, "Most popular: {}", SetDisplay(&self.most_popular))?;
        writeln!(f, "Least popular: {}", SetDisplay(&self.least_popular))?;
        writeln!(f, "Average popularity: {}", self.average_degree)?;
        write!(
            f,
            "More than {} friends: {}",
            self.threshold,
            SetDisplay(&self.more_than_threshold)
        )
    }
}

/// `{A, B}` rendering of a set of people
pub struct SetDisplay<'a>(pub &'a BTreeSet<Person>);

impl fmt::Display for SetDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, person) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", person)?;
        }
        f.write_str("}")
    }
}

/// `{A: {B}, B: {A, C}}` rendering of an adjacency map
pub struct AdjacencyDisplay<'a>(pub &'a Adjacency);

impl fmt::Display for AdjacencyDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (person, others)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", person, SetDisplay(others))?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Connection, GraphError};

    #[test]
    fn test_report_text_order() {
        let g = SocialGraph::new(
            ["A", "B", "C"],
            vec![Connection::new("A", "B"), Connection::new("B", "C")],
        );
        let options = ReportOptions {
            threshold: 4,
            rounding: Rounding::Ceiling,
        };

        let report = Report::compute(&g, options).unwrap();
        let text = report.to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines,
            vec![
                "Friends: {A: {B}, B: {A, C}, C: {B}}",
                "Friends of friends: {A: {C}, B: {}, C: {A}}",
                "Most popular: {B}",
                "Least popular: {A, C}",
                "Average popularity: 2",
                "More than 4 friends: {}",
            ]
        );
    }

    #[test]
    fn test_report_json() {
        let g = SocialGraph::new(["Solo"], Vec::new());
        let report = Report::compute(&g, ReportOptions::default()).unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["most_popular"], serde_json::json!(["Solo"]));
        assert_eq!(json["friends"]["Solo"], serde_json::json!([]));
        assert_eq!(json["more_than_threshold"], serde_json::json!([]));
        assert_eq!(json["rounding"], "none");
    }

    #[test]
    fn test_report_on_empty_network() {
        let g = SocialGraph::new(Vec::<Person>::new(), Vec::new());
        assert_eq!(
            Report::compute(&g, ReportOptions::default()),
            Err(GraphError::EmptyGraph)
        );
    }
}
