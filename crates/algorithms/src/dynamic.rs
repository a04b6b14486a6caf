//! Dynamic programming marathon planner (0/1 knapsack).
//!
//! Maximize the sum of ratings of a set of movies whose durations add up to
//! at most `max_time` minutes.
//!
//! ## Algorithm
//! `table[i][t]` is the best rating sum using the first `i` movies within
//! `t` minutes:
//!
//! ```text
//! table[i][t] = table[i-1][t]                                   if d_i > t
//!             = max(table[i-1][t], table[i-1][t-d_i] + r_i)     otherwise
//! ```
//!
//! The selection is recovered by walking `i` from `n` down to 1: movie `i`
//! was taken exactly when `table[i][t] != table[i-1][t]`, in which case `t`
//! drops by its duration.
//!
//! The table width is `max_time` clamped to the total duration of the input,
//! since no selection can use more minutes than that. Time and space are
//! O(n * min(max_time, total duration)).

use crate::results::{MarathonResult, Strategy};
use crate::sorting::merge_sort;
use catalog::Movie;
use tracing::{debug, instrument};

/// Best-rated marathon within `max_time` minutes.
#[instrument(skip(movies), fields(movie_count = movies.len()))]
pub fn optimal_marathon(movies: &[Movie], max_time: u32) -> MarathonResult {
    if movies.is_empty() || max_time == 0 {
        return MarathonResult::empty(Strategy::Knapsack);
    }

    let total_duration: u64 = movies.iter().map(|m| u64::from(m.duration)).sum();
    let capacity = u64::from(max_time).min(total_duration) as usize;

    let table = build_table(movies, capacity);
    let selected = reconstruct(movies, &table, capacity);

    let total_time = selected.iter().map(|m| m.duration).sum();
    let total_score = table[movies.len()][capacity];
    debug!(
        "Knapsack table {}x{} selected {} movies",
        movies.len() + 1,
        capacity + 1,
        selected.len()
    );

    MarathonResult::new(selected, total_time, total_score, Strategy::Knapsack)
}

/// Shortest movies first, as many as fit. Not a DP solution: it maximizes
/// the number of movies rather than their ratings.
pub fn max_count_marathon(movies: &[Movie], max_time: u32) -> MarathonResult {
    MarathonResult::from_movies(shortest_first(movies, max_time), Strategy::MaxCount)
}

/// Optimal marathon, unless it holds fewer than `min_movies` movies; then the
/// count-maximizing selection is returned instead.
pub fn marathon_with_minimum(movies: &[Movie], max_time: u32, min_movies: usize) -> MarathonResult {
    let optimal = optimal_marathon(movies, max_time);
    if optimal.movies.len() >= min_movies {
        return optimal;
    }

    debug!(
        "Knapsack picked {} movies, below the minimum of {}; switching to max count",
        optimal.movies.len(),
        min_movies
    );
    let mut fallback = max_count_marathon(movies, max_time);
    fallback.strategy = Strategy::ForcedMinimum(min_movies);
    fallback
}

/// Shortest-first fill shared by the count-maximizing strategies.
pub(crate) fn shortest_first(movies: &[Movie], max_time: u32) -> Vec<Movie> {
    if movies.is_empty() || max_time == 0 {
        return Vec::new();
    }

    let mut selected = Vec::new();
    let mut elapsed: u32 = 0;
    for movie in merge_sort::by_duration_asc(movies) {
        if let Some(total) = elapsed.checked_add(movie.duration) {
            if total <= max_time {
                elapsed = total;
                selected.push(movie);
            }
        }
    }
    selected
}

fn build_table(movies: &[Movie], capacity: usize) -> Vec<Vec<f64>> {
    let mut table = vec![vec![0.0; capacity + 1]; movies.len() + 1];

    for (i, movie) in movies.iter().enumerate() {
        let duration = movie.duration as usize;
        let (done, rest) = table.split_at_mut(i + 1);
        let previous = &done[i];
        let row = &mut rest[0];

        for t in 0..=capacity {
            row[t] = previous[t];
            if duration <= t {
                let with_movie = previous[t - duration] + movie.rating;
                if with_movie > row[t] {
                    row[t] = with_movie;
                }
            }
        }
    }
    table
}

fn reconstruct(movies: &[Movie], table: &[Vec<f64>], capacity: usize) -> Vec<Movie> {
    let mut selected = Vec::new();
    let mut remaining = capacity;

    for i in (1..=movies.len()).rev() {
        if table[i][remaining] != table[i - 1][remaining] {
            let movie = &movies[i - 1];
            selected.push(movie.clone());
            remaining -= movie.duration as usize;
        }
    }

    // Collected back to front
    selected.reverse();
    selected
}
