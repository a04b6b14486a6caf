//! Weighted edge between two movies, as used by the spanning-tree algorithms.

use catalog::MovieId;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

/// An edge of the similarity graph seen as an undirected weighted graph.
///
/// Edges order by weight ascending. Equal weights fall back to the endpoint
/// ids so the order is total and deterministic.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Edge {
    pub origin: MovieId,
    pub destination: MovieId,
    pub weight: f64,
    pub shared_genres: u32,
}

impl Edge {
    pub fn new(origin: MovieId, destination: MovieId, weight: f64, shared_genres: u32) -> Self {
        Self {
            origin,
            destination,
            weight,
            shared_genres,
        }
    }

    /// Endpoint ids as `(min, max)`, identical for both directions of an edge.
    pub fn canonical_key(&self) -> (MovieId, MovieId) {
        (
            self.origin.min(self.destination),
            self.origin.max(self.destination),
        )
    }

    /// The same edge traversed the other way.
    pub fn reversed(&self) -> Self {
        Self::new(self.destination, self.origin, self.weight, self.shared_genres)
    }
}

impl Ord for Edge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then_with(|| self.origin.cmp(&other.origin))
            .then_with(|| self.destination.cmp(&other.destination))
    }
}

impl PartialOrd for Edge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Edge {}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -[{:.2}]-> {}", self.origin, self.weight, self.destination)
    }
}
