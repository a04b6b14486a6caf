//! Backtracking enumerators.
//!
//! Each enumerator walks the movies in input order and, at every index,
//! tries "include this movie" before "skip this movie". Indices only move
//! forward, so a movie appears at most once per combination and every
//! combination lists its movies in input order. Results come back in
//! discovery order.
//!
//! The search space is exponential. Callers exposing these to untrusted
//! input should cap the number of movies first.

use catalog::{Genre, Movie, MovieId};
use std::collections::HashSet;
use tracing::debug;

/// Every set of movies that covers each desired genre with exactly one movie.
///
/// Each movie in a combination is assigned one distinct genre from `desired`
/// that it carries, and all of `desired` is covered. A movie carrying several
/// desired genres can be assigned any one of them; the same set of movies
/// reached through different assignments is reported once.
pub fn genre_mix(movies: &[Movie], desired: &[Genre]) -> Vec<Vec<Movie>> {
    let mut wanted: Vec<&Genre> = Vec::new();
    for genre in desired {
        if !wanted.contains(&genre) {
            wanted.push(genre);
        }
    }
    if movies.is_empty() || wanted.is_empty() {
        return Vec::new();
    }

    let mut search = GenreMix {
        movies,
        used: vec![false; wanted.len()],
        wanted,
        used_count: 0,
        current: Vec::new(),
        seen: HashSet::new(),
        results: Vec::new(),
    };
    search.explore(0);

    debug!("Genre mix found {} combinations", search.results.len());
    search.results
}

struct GenreMix<'a> {
    movies: &'a [Movie],
    wanted: Vec<&'a Genre>,
    used: Vec<bool>,
    used_count: usize,
    current: Vec<usize>,
    seen: HashSet<Vec<MovieId>>,
    results: Vec<Vec<Movie>>,
}

impl GenreMix<'_> {
    fn explore(&mut self, index: usize) {
        if self.used_count == self.wanted.len() {
            let ids: Vec<MovieId> = self.current.iter().map(|&i| self.movies[i].id).collect();
            if self.seen.insert(ids) {
                self.results
                    .push(self.current.iter().map(|&i| self.movies[i].clone()).collect());
            }
            return;
        }
        // Not enough movies left to cover the remaining genres
        if self.movies.len() - index < self.wanted.len() - self.used_count {
            return;
        }

        let movies = self.movies;
        let movie = &movies[index];

        // Include: spend one of this movie's still-uncovered genres
        for genre in &movie.genres {
            let Some(slot) = self.wanted.iter().position(|&w| w == genre) else {
                continue;
            };
            if self.used[slot] {
                continue;
            }
            self.used[slot] = true;
            self.used_count += 1;
            self.current.push(index);

            self.explore(index + 1);

            self.current.pop();
            self.used_count -= 1;
            self.used[slot] = false;
        }

        // Skip
        self.explore(index + 1);
    }
}

/// Every combination whose durations add up to exactly `target` minutes.
///
/// Branches whose running total already exceeds the target are pruned.
pub fn exact_time(movies: &[Movie], target: u32) -> Vec<Vec<Movie>> {
    if movies.is_empty() || target == 0 {
        return Vec::new();
    }

    let mut current = Vec::new();
    let mut results = Vec::new();
    exact_time_step(movies, u64::from(target), 0, 0, &mut current, &mut results);

    debug!(
        "Exact-time search for {} minutes found {} combinations",
        target,
        results.len()
    );
    results
}

fn exact_time_step(
    movies: &[Movie],
    target: u64,
    elapsed: u64,
    index: usize,
    current: &mut Vec<usize>,
    results: &mut Vec<Vec<Movie>>,
) {
    if elapsed == target {
        results.push(current.iter().map(|&i| movies[i].clone()).collect());
        return;
    }
    if elapsed > target || index >= movies.len() {
        return;
    }

    current.push(index);
    let with_movie = elapsed + u64::from(movies[index].duration);
    exact_time_step(movies, target, with_movie, index + 1, current, results);
    current.pop();

    exact_time_step(movies, target, elapsed, index + 1, current, results);
}

/// All combinations of `k` movies, in lexicographic order of input positions.
pub fn combinations(movies: &[Movie], k: usize) -> Vec<Vec<Movie>> {
    if k == 0 || k > movies.len() {
        return Vec::new();
    }

    let mut current = Vec::with_capacity(k);
    let mut results = Vec::new();
    combinations_step(movies, k, 0, &mut current, &mut results);
    results
}

fn combinations_step(
    movies: &[Movie],
    k: usize,
    start: usize,
    current: &mut Vec<usize>,
    results: &mut Vec<Vec<Movie>>,
) {
    if current.len() == k {
        results.push(current.iter().map(|&i| movies[i].clone()).collect());
        return;
    }

    // Leave room for the movies still needed after position i
    let last_start = movies.len() - (k - current.len());
    for i in start..=last_start {
        current.push(i);
        combinations_step(movies, k, i + 1, current, results);
        current.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(combos: &[Vec<Movie>]) -> Vec<Vec<MovieId>> {
        combos
            .iter()
            .map(|c| c.iter().map(|m| m.id).collect())
            .collect()
    }

    fn genres(names: &[&str]) -> Vec<Genre> {
        names.iter().map(|&n| Genre::new(n)).collect()
    }

    #[test]
    fn test_genre_mix_basic() {
        let movies = vec![
            Movie::new(1, "A").with_genres(["Drama"]),
            Movie::new(2, "B").with_genres(["Action"]),
            Movie::new(3, "C").with_genres(["Drama", "Thriller"]),
        ];
        let combos = genre_mix(&movies, &genres(&["Drama", "Action"]));
        assert_eq!(ids(&combos), vec![vec![1, 2], vec![2, 3]]);
    }

    #[test]
    fn test_genre_mix_no_duplicate_sets() {
        // Both movies can play either genre; the pair must show up once
        let movies = vec![
            Movie::new(1, "A").with_genres(["Drama", "Thriller"]),
            Movie::new(2, "B").with_genres(["Drama", "Thriller"]),
        ];
        let combos = genre_mix(&movies, &genres(&["Drama", "Thriller"]));
        assert_eq!(ids(&combos), vec![vec![1, 2]]);
    }

    #[test]
    fn test_genre_mix_uncoverable() {
        let movies = vec![Movie::new(1, "A").with_genres(["Drama"])];
        assert!(genre_mix(&movies, &genres(&["Drama", "Horror"])).is_empty());
        assert!(genre_mix(&movies, &[]).is_empty());
    }

    #[test]
    fn test_genre_mix_duplicate_desired_genres() {
        let movies = vec![Movie::new(1, "A").with_genres(["Drama"])];
        let combos = genre_mix(&movies, &genres(&["Drama", "Drama"]));
        assert_eq!(ids(&combos), vec![vec![1]]);
    }

    #[test]
    fn test_exact_time() {
        let movies = vec![
            Movie::new(1, "A").with_duration(90),
            Movie::new(2, "B").with_duration(60),
            Movie::new(3, "C").with_duration(30),
        ];
        assert_eq!(ids(&exact_time(&movies, 120)), vec![vec![1, 3]]);
        assert_eq!(ids(&exact_time(&movies, 90)), vec![vec![1], vec![2, 3]]);
        assert!(exact_time(&movies, 0).is_empty());
        assert!(exact_time(&movies, 1000).is_empty());
    }

    #[test]
    fn test_combinations() {
        let movies: Vec<Movie> = (1..=4).map(|id| Movie::new(id, format!("M{id}"))).collect();
        let combos = combinations(&movies, 2);
        assert_eq!(
            ids(&combos),
            vec![
                vec![1, 2],
                vec![1, 3],
                vec![1, 4],
                vec![2, 3],
                vec![2, 4],
                vec![3, 4]
            ]
        );
        assert_eq!(combinations(&movies, 4).len(), 1);
        assert!(combinations(&movies, 5).is_empty());
        assert!(combinations(&movies, 0).is_empty());
    }
}
