//! Best-first branch and bound marathon planner.
//!
//! Solves the same 0/1 knapsack as [`crate::dynamic`] without a table, so the
//! cost does not grow with the time budget.
//!
//! ## Algorithm
//! 1. Order movies by rating per minute, best first (input order breaks ties)
//! 2. Keep a max-heap of search nodes keyed by their upper bound
//! 3. Pop the most promising node; prune it if its bound cannot beat the
//!    best selection found so far
//! 4. Otherwise branch on the movie at the node's level: include it (only
//!    when it fits) and exclude it; push each child whose bound beats the
//!    best, prune the rest
//! 5. Stop when the heap is empty
//!
//! The bound is the fractional relaxation: take whole movies in ratio order
//! while they fit, then the fitting fraction of the next one. Because the
//! movies are in ratio order, no completion of the node can score higher.
//!
//! Node counters are part of the returned [`BranchBoundResult`].

use crate::dynamic::shortest_first;
use crate::results::{BranchBoundResult, MarathonResult, Strategy};
use catalog::Movie;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use tracing::{debug, instrument};

/// A partial selection: movies before `level` have been decided.
#[derive(Debug, Clone)]
struct Node {
    level: usize,
    score: f64,
    time: u64,
    chosen: Vec<usize>,
    bound: f64,
}

/// Heap entry; higher bound first, earlier insertion first on equal bounds.
struct Frontier {
    seq: u64,
    node: Node,
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        self.node
            .bound
            .total_cmp(&other.node.bound)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frontier {}

/// Rating per minute. Zero-length movies cost nothing and rank first.
fn ratio(movie: &Movie) -> f64 {
    if movie.duration == 0 {
        f64::INFINITY
    } else {
        movie.rating / f64::from(movie.duration)
    }
}

/// Upper bound for a node at `level` that has already spent `time` minutes
/// and collected `score`. `movies` must be in ratio order.
pub(crate) fn fractional_bound(
    movies: &[&Movie],
    level: usize,
    score: f64,
    time: u64,
    max_time: u64,
) -> f64 {
    let mut bound = score;
    let mut remaining = max_time.saturating_sub(time);

    for movie in &movies[level.min(movies.len())..] {
        let duration = u64::from(movie.duration);
        if duration <= remaining {
            bound += movie.rating;
            remaining -= duration;
        } else {
            bound += remaining as f64 / duration as f64 * movie.rating;
            break;
        }
    }
    bound
}

/// Highest-rated marathon within `max_time` minutes.
#[instrument(skip(movies), fields(movie_count = movies.len()))]
pub fn optimal_marathon(movies: &[Movie], max_time: u32) -> BranchBoundResult {
    if movies.is_empty() || max_time == 0 {
        return BranchBoundResult {
            marathon: MarathonResult::empty(Strategy::BranchAndBound),
            nodes_explored: 0,
            nodes_pruned: 0,
        };
    }

    let mut sorted: Vec<&Movie> = movies.iter().collect();
    // Stable, so equal ratios keep input order
    sorted.sort_by(|a, b| ratio(b).total_cmp(&ratio(a)));

    let capacity = u64::from(max_time);
    let n = sorted.len();

    let mut best_score = 0.0;
    let mut best_chosen: Vec<usize> = Vec::new();
    let mut explored: u64 = 0;
    let mut pruned: u64 = 0;

    let mut seq: u64 = 0;
    let mut heap = BinaryHeap::new();
    heap.push(Frontier {
        seq,
        node: Node {
            level: 0,
            score: 0.0,
            time: 0,
            chosen: Vec::new(),
            bound: fractional_bound(&sorted, 0, 0.0, 0, capacity),
        },
    });

    while let Some(Frontier { node, .. }) = heap.pop() {
        explored += 1;

        if node.bound <= best_score {
            pruned += 1;
            continue;
        }
        if node.level >= n {
            if node.score > best_score {
                best_score = node.score;
                best_chosen = node.chosen;
            }
            continue;
        }

        let movie = sorted[node.level];
        let next = node.level + 1;

        // Include
        let time = node.time + u64::from(movie.duration);
        if time <= capacity {
            let score = node.score + movie.rating;
            let mut chosen = node.chosen.clone();
            chosen.push(node.level);

            if score > best_score {
                best_score = score;
                best_chosen = chosen.clone();
            }

            let bound = fractional_bound(&sorted, next, score, time, capacity);
            if bound > best_score {
                seq += 1;
                heap.push(Frontier {
                    seq,
                    node: Node {
                        level: next,
                        score,
                        time,
                        chosen,
                        bound,
                    },
                });
            } else {
                pruned += 1;
            }
        }

        // Exclude
        let bound = fractional_bound(&sorted, next, node.score, node.time, capacity);
        if bound > best_score {
            seq += 1;
            heap.push(Frontier {
                seq,
                node: Node {
                    level: next,
                    bound,
                    ..node
                },
            });
        } else {
            pruned += 1;
        }
    }

    debug!(
        "Branch and bound explored {} nodes, pruned {}, best score {:.2}",
        explored, pruned, best_score
    );

    let selected: Vec<Movie> = best_chosen.iter().map(|&i| sorted[i].clone()).collect();
    BranchBoundResult {
        marathon: MarathonResult::from_movies(selected, Strategy::BranchAndBound),
        nodes_explored: explored,
        nodes_pruned: pruned,
    }
}

/// Optimal marathon, flagged when it holds fewer than `min_movies` movies.
/// The selection itself is not changed.
pub fn marathon_with_minimum(movies: &[Movie], max_time: u32, min_movies: usize) -> BranchBoundResult {
    let mut result = optimal_marathon(movies, max_time);
    if result.marathon.movies.len() < min_movies {
        result.marathon.strategy = Strategy::BranchAndBoundMinimumUnmet(min_movies);
    }
    result
}

/// Shortest movies first, as many as fit. No search happens, so the
/// counters report a single node and nothing pruned.
pub fn max_count_marathon(movies: &[Movie], max_time: u32) -> BranchBoundResult {
    BranchBoundResult {
        marathon: MarathonResult::from_movies(
            shortest_first(movies, max_time),
            Strategy::BranchAndBoundMaxCount,
        ),
        nodes_explored: 1,
        nodes_pruned: 0,
    }
}
