//! Network configuration
//!
//! Describes which network to build: its people, optional explicit connections,
//! the generation strategy used otherwise, and the report parameters.

use crate::algo::{Rounding, DEFAULT_THRESHOLD};
use crate::report::ReportOptions;
use crate::graph::{Connection, Person, SocialGraph, Strategy};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

/// People of the built-in demo network
pub const DEMO_PEOPLE: [&str; 8] = [
    "Ahmed", "Mohamed", "Mahmoud", "Moaz", "Amr", "Omar", "Mai", "Hoda",
];

/// Errors that can occur while loading a configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Network configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// People in the network
    pub people: Vec<Person>,
    /// Explicit connections. When set, `strategy` is ignored
    pub connections: Option<Vec<Connection>>,
    /// Generation strategy used when no connections are given
    pub strategy: Strategy,
    /// Seed for random generation (None = seeded from entropy)
    pub seed: Option<u64>,
    /// Degree a person must exceed for the high-connectivity report
    pub threshold: usize,
    /// Rounding applied to the average degree
    pub rounding: Rounding,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            people: DEMO_PEOPLE.iter().map(|n| Person::from(*n)).collect(),
            connections: None,
            strategy: Strategy::Random,
            seed: None,
            threshold: DEFAULT_THRESHOLD,
            rounding: Rounding::None,
        }
    }
}

impl NetworkConfig {
    pub fn from_yaml_str(s: &str) -> ConfigResult<Self> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn from_json_str(s: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Load from a `.yaml`/`.yml` or `.json` file
    pub fn from_path(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        info!("Loading network config from {:?}", path);
        match ext.as_str() {
            "yaml" | "yml" => Self::from_yaml_str(&contents),
            "json" => Self::from_json_str(&contents),
            other => Err(ConfigError::UnsupportedFormat(other.to_string())),
        }
    }

    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            threshold: self.threshold,
            rounding: self.rounding,
        }
    }

    /// Build the network this configuration describes
    pub fn build(&self) -> SocialGraph {
        match &self.connections {
            Some(connections) => {
                debug!("Using {} explicit connections", connections.len());
                SocialGraph::new(self.people.iter().cloned(), connections.iter().cloned())
            }
            None => {
                let mut rng = match self.seed {
                    Some(seed) => StdRng::seed_from_u64(seed),
                    None => StdRng::from_entropy(),
                };
                debug!("Generating connections with strategy {}", self.strategy);
                SocialGraph::generated(self.people.iter().cloned(), self.strategy, &mut rng)
            }
        }
    }
}
