//! Aggregate statistics

use crate::graph::{GraphError, GraphResult, SocialGraph};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Rounding applied to an average
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rounding {
    /// Unrounded mean
    #[default]
    None,
    Floor,
    Ceiling,
    /// Drop the fractional part
    #[serde(alias = "cast")]
    Truncate,
}

impl Rounding {
    pub fn apply(&self, value: f64) -> f64 {
        match self {
            Rounding::None => value,
            Rounding::Floor => value.floor(),
            Rounding::Ceiling => value.ceil(),
            Rounding::Truncate => value.trunc(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rounding::None => "none",
            Rounding::Floor => "floor",
            Rounding::Ceiling => "ceiling",
            Rounding::Truncate => "truncate",
        }
    }
}

impl fmt::Display for Rounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rounding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "" => Ok(Rounding::None),
            "floor" => Ok(Rounding::Floor),
            "ceiling" | "ceil" => Ok(Rounding::Ceiling),
            "truncate" | "cast" => Ok(Rounding::Truncate),
            other => Err(format!(
                "unknown rounding '{}', expected none, floor, ceiling or truncate",
                other
            )),
        }
    }
}

/// Mean degree over all people
pub fn average_degree(graph: &SocialGraph, rounding: Rounding) -> GraphResult<f64> {
    if graph.is_empty() {
        return Err(GraphError::EmptyGraph);
    }
    let mean = graph.view().degree_sum() as f64 / graph.node_count() as f64;
    Ok(rounding.apply(mean))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Connection, Person};

    fn abc() -> SocialGraph {
        SocialGraph::new(
            ["A", "B", "C"],
            vec![Connection::new("A", "B"), Connection::new("B", "C")],
        )
    }

    #[test]
    fn test_average_on_path() {
        let g = abc();

        let mean = average_degree(&g, Rounding::None).unwrap();
        assert!((mean - 4.0 / 3.0).abs() < 1e-12);
        assert_eq!(average_degree(&g, Rounding::Floor).unwrap(), 1.0);
        assert_eq!(average_degree(&g, Rounding::Ceiling).unwrap(), 2.0);
        assert_eq!(average_degree(&g, Rounding::Truncate).unwrap(), 1.0);
    }

    #[test]
    fn test_average_matches_degree_sum() {
        let g = abc();
        let total: usize = g.degrees().map(|(_, d)| d).sum();
        let mean = average_degree(&g, Rounding::None).unwrap();

        assert!((mean * g.node_count() as f64 - total as f64).abs() < 1e-9);
    }

    #[test]
    fn test_isolated_person_averages_zero() {
        let g = SocialGraph::new(["Solo"], Vec::new());
        assert_eq!(average_degree(&g, Rounding::None).unwrap(), 0.0);
    }

    #[test]
    fn test_empty_network_errors() {
        let g = SocialGraph::new(Vec::<Person>::new(), Vec::new());
        assert_eq!(average_degree(&g, Rounding::Floor), Err(GraphError::EmptyGraph));
    }

    #[test]
    fn test_rounding_parse() {
        assert_eq!("cast".parse::<Rounding>().unwrap(), Rounding::Truncate);
        assert_eq!("CEILING".parse::<Rounding>().unwrap(), Rounding::Ceiling);
        assert_eq!("none".parse::<Rounding>().unwrap(), Rounding::None);
        assert!("round".parse::<Rounding>().is_err());

        let r: Rounding = serde_json::from_str("\"cast\"").unwrap();
        assert_eq!(r, Rounding::Truncate);
    }
}
