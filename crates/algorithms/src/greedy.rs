//! Greedy recommendations.
//!
//! Three one-pass strategies that commit to the locally best choice:
//! - recommend the best-rated movie of the most frequent genre
//! - top N movies by rating
//! - fill a time budget with the best-rated movies that still fit

use crate::results::{MarathonResult, Strategy};
use crate::sorting::merge_sort;
use catalog::{Genre, Movie};
use std::collections::HashMap;
use tracing::debug;

/// Best-rated movie of the genre that appears on the most movies.
///
/// ## Algorithm
/// 1. Count how many movies carry each genre
/// 2. Pick the genre with the highest count (first encountered wins a tie)
/// 3. Among movies of that genre, return the highest rated (first wins a tie)
///
/// Returns `None` for an empty list and the first movie when no movie has
/// any genre.
pub fn recommend_by_most_frequent_genre(movies: &[Movie]) -> Option<&Movie> {
    let first = movies.first()?;

    // Genre -> (count, first-seen position) so ties resolve deterministically
    let mut frequency: HashMap<&Genre, (usize, usize)> = HashMap::new();
    for genre in movies.iter().flat_map(|m| &m.genres) {
        let next_position = frequency.len();
        frequency.entry(genre).or_insert((0, next_position)).0 += 1;
    }

    let Some((top_genre, (count, _))) = frequency
        .into_iter()
        .max_by(|(_, (count_a, pos_a)), (_, (count_b, pos_b))| {
            count_a.cmp(count_b).then_with(|| pos_b.cmp(pos_a))
        })
    else {
        return Some(first);
    };
    debug!("Most frequent genre: {} ({} movies)", top_genre, count);

    movies
        .iter()
        .filter(|m| m.genres.contains(top_genre))
        .reduce(|best, m| if m.rating > best.rating { m } else { best })
        .or(Some(first))
}

/// The `n` best-rated movies. Equal ratings keep their input order.
pub fn top_n_by_rating(movies: &[Movie], n: usize) -> Vec<Movie> {
    if n == 0 {
        return Vec::new();
    }
    let mut ranked = merge_sort::by_rating_desc(movies);
    ranked.truncate(n);
    ranked
}

/// Walk movies from best to worst rating, keeping each one that still fits.
///
/// A movie that does not fit is skipped, not a stopping point: a shorter
/// movie further down may still fit.
pub fn greedy_marathon(movies: &[Movie], max_time: u32) -> MarathonResult {
    if movies.is_empty() || max_time == 0 {
        return MarathonResult::empty(Strategy::Greedy);
    }

    let mut selected = Vec::new();
    let mut elapsed: u32 = 0;
    for movie in merge_sort::by_rating_desc(movies) {
        if let Some(total) = elapsed.checked_add(movie.duration) {
            if total <= max_time {
                elapsed = total;
                selected.push(movie);
            }
        }
    }

    debug!(
        "Greedy marathon picked {} movies for {} of {} minutes",
        selected.len(),
        elapsed,
        max_time
    );
    MarathonResult::from_movies(selected, Strategy::Greedy)
}
