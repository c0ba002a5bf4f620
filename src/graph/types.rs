//! Core type definitions for the social network

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// A person in the network, identified by name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
pub struct Person(String);

impl Person {
    pub fn new(name: impl Into<String>) -> Self {
        Person(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Borrow<str> for Person {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<String> for Person {
    fn from(s: String) -> Self {
        Person(s)
    }
}

impl From<&str> for Person {
    fn from(s: &str) -> Self {
        Person(s.to_string())
    }
}

/// An undirected connection between two people
///
/// The pair is unordered for every graph query; the stored order is the order
/// it was supplied or generated in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Connection(pub Person, pub Person);

impl Connection {
    pub fn new(a: impl Into<Person>, b: impl Into<Person>) -> Self {
        Connection(a.into(), b.into())
    }

    pub fn is_self_loop(&self) -> bool {
        self.0 == self.1
    }
}

impl fmt::Display for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -- {}", self.0, self.1)
    }
}

impl<A: Into<Person>, B: Into<Person>> From<(A, B)> for Connection {
    fn from((a, b): (A, B)) -> Self {
        Connection::new(a, b)
    }
}
