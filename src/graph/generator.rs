//! Connection generation strategies
//!
//! Produces the connection list for a network when only its people are known.

use super::types::{Connection, Person};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Named connection-generation strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Sparse network, each person initiates at most one connection
    #[default]
    Random,
    /// Everyone knows everyone, every ordered pair emitted
    Full,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Random => "random",
            Strategy::Full => "full",
        }
    }

    /// Run this strategy over `people`
    pub fn generate<R: Rng + ?Sized>(&self, people: &[Person], rng: &mut R) -> Vec<Connection> {
        match self {
            Strategy::Random => generate_random(people, rng),
            Strategy::Full => generate_full(people),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(Strategy::Random),
            "full" => Ok(Strategy::Full),
            other => Err(format!("unknown strategy '{}', expected 'random' or 'full'", other)),
        }
    }
}

/// Connect every person to every other person.
///
/// Emits one connection per ordered pair, so each unordered pair appears twice.
/// A name listed twice is paired once per listing.
/// Only meant as a dense fixture, not as a model of a real network.
pub fn generate_full(people: &[Person]) -> Vec<Connection> {
    let mut connections = Vec::with_capacity(people.len() * people.len().saturating_sub(1));

    for a in people {
        for b in people {
            if a == b {
                continue;
            }
            connections.push(Connection(a.clone(), b.clone()));
        }
    }

    debug!("Generated {} full connections for {} people", connections.len(), people.len());
    connections
}

/// Connect people at random, one coin flip per candidate.
///
/// Each person scans the others in order and connects to the first candidate
/// whose flip succeeds, then stops. A person may initiate zero connections but
/// never more than one; they can still receive connections initiated by others.
///
/// The one-per-person bound assumes `people` has no repeats. A name listed twice
/// is scanned twice and can initiate once per listing. Candidates equal to the
/// initiator are skipped, so no self-loop is emitted either way.
pub fn generate_random<R: Rng + ?Sized>(people: &[Person], rng: &mut R) -> Vec<Connection> {
    let mut connections = Vec::with_capacity(people.len());

    for a in people {
        for b in people {
            if a == b {
                continue;
            }
            if rng.gen_bool(0.5) {
                connections.push(Connection(a.clone(), b.clone()));
                break;
            }
        }
    }

    debug!("Generated {} random connections for {} people", connections.len(), people.len());
    connections
}
