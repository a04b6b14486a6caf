//! Value objects returned by the marathon and spanning-tree algorithms.
//!
//! Every result is built fresh and owned by the caller. Counters that the
//! branch and bound search accumulates live in its result, not in the
//! solver, so one solver can serve any number of calls.

use crate::edge::Edge;
use catalog::Movie;
use serde::Serialize;
use std::fmt;

/// Which strategy produced a marathon selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// 0/1 knapsack dynamic programming
    Knapsack,
    /// Shortest-first fill maximizing the number of movies
    MaxCount,
    /// Knapsack fell short of the minimum; shortest-first fill was used instead
    ForcedMinimum(usize),
    /// Greedy fill by rating
    Greedy,
    /// Best-first branch and bound
    BranchAndBound,
    /// Branch and bound optimum has fewer movies than requested
    BranchAndBoundMinimumUnmet(usize),
    /// Shortest-first fill reported through the branch and bound interface
    BranchAndBoundMaxCount,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Knapsack => write!(f, "Dynamic programming - knapsack"),
            Strategy::MaxCount => write!(f, "Dynamic programming - maximize count"),
            Strategy::ForcedMinimum(k) => {
                write!(f, "Dynamic programming - forcing a minimum of {} movies", k)
            }
            Strategy::Greedy => write!(f, "Greedy - best rating first"),
            Strategy::BranchAndBound => write!(f, "Branch & Bound - optimization with pruning"),
            Strategy::BranchAndBoundMinimumUnmet(k) => {
                write!(f, "Branch & Bound - minimum of {} movies not reached", k)
            }
            Strategy::BranchAndBoundMaxCount => {
                write!(f, "Branch & Bound - maximize count (greedy + sorting)")
            }
        }
    }
}

/// A selection of movies that fits a time budget.
#[derive(Debug, Clone, Serialize)]
pub struct MarathonResult {
    pub movies: Vec<Movie>,
    /// Sum of durations, minutes
    pub total_time: u32,
    /// Sum of ratings
    pub total_score: f64,
    /// `total_score / total_time`, or 0 for an empty marathon
    pub efficiency: f64,
    pub strategy: Strategy,
}

impl MarathonResult {
    pub fn new(movies: Vec<Movie>, total_time: u32, total_score: f64, strategy: Strategy) -> Self {
        let efficiency = if total_time > 0 {
            total_score / f64::from(total_time)
        } else {
            0.0
        };
        Self {
            movies,
            total_time,
            total_score,
            efficiency,
            strategy,
        }
    }

    /// Build a result by summing durations and ratings of `movies`.
    pub fn from_movies(movies: Vec<Movie>, strategy: Strategy) -> Self {
        let total_time = movies.iter().map(|m| m.duration).sum();
        let total_score = movies.iter().map(|m| m.rating).sum();
        Self::new(movies, total_time, total_score, strategy)
    }

    pub fn empty(strategy: Strategy) -> Self {
        Self::new(Vec::new(), 0, 0.0, strategy)
    }

    pub fn movie_ids(&self) -> Vec<catalog::MovieId> {
        self.movies.iter().map(|m| m.id).collect()
    }
}

/// Branch and bound selection plus search instrumentation.
#[derive(Debug, Clone, Serialize)]
pub struct BranchBoundResult {
    #[serde(flatten)]
    pub marathon: MarathonResult,
    pub nodes_explored: u64,
    pub nodes_pruned: u64,
}

/// Which algorithm built a spanning tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MstAlgorithm {
    Prim,
    Kruskal,
}

impl fmt::Display for MstAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MstAlgorithm::Prim => write!(f, "Prim"),
            MstAlgorithm::Kruskal => write!(f, "Kruskal"),
        }
    }
}

/// A minimum spanning tree (or forest, for Kruskal on a disconnected graph).
#[derive(Debug, Clone, Serialize)]
pub struct MstResult {
    pub edges: Vec<Edge>,
    pub total_weight: f64,
    pub vertex_count: usize,
    pub edge_count: usize,
    pub algorithm: MstAlgorithm,
}

impl MstResult {
    pub fn new(edges: Vec<Edge>, vertex_count: usize, algorithm: MstAlgorithm) -> Self {
        let total_weight = edges.iter().map(|e| e.weight).sum();
        Self {
            edge_count: edges.len(),
            edges,
            total_weight,
            vertex_count,
            algorithm,
        }
    }

    pub fn empty(algorithm: MstAlgorithm) -> Self {
        Self::new(Vec::new(), 0, algorithm)
    }
}
