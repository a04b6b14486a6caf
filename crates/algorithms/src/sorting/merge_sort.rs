//! Stable top-down MergeSort.
//!
//! ## Algorithm
//! 1. Split the range in half and sort each half
//! 2. Merge the halves, taking from the left whenever the left element does
//!    not belong after the right one
//!
//! Step 2 is what makes the sort stable: on a tie the left element, which
//! came first in the input, wins.

use super::SortKey;
use catalog::Movie;
use std::cmp::Ordering;

/// Sort a copy of `items` with `compare`. Equal elements keep their input order.
pub fn sort_by<T, F>(items: &[T], mut compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut sorted = items.to_vec();
    merge_sort(&mut sorted, &mut compare);
    sorted
}

pub fn sort_by_key(movies: &[Movie], key: SortKey) -> Vec<Movie> {
    sort_by(movies, |a, b| key.compare(a, b))
}

pub fn by_rating_desc(movies: &[Movie]) -> Vec<Movie> {
    sort_by_key(movies, SortKey::RatingDesc)
}

pub fn by_year_desc(movies: &[Movie]) -> Vec<Movie> {
    sort_by_key(movies, SortKey::YearDesc)
}

pub fn by_duration_asc(movies: &[Movie]) -> Vec<Movie> {
    sort_by_key(movies, SortKey::DurationAsc)
}

pub fn by_title_asc(movies: &[Movie]) -> Vec<Movie> {
    sort_by_key(movies, SortKey::TitleAsc)
}

fn merge_sort<T, F>(slice: &mut [T], compare: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if slice.len() <= 1 {
        return;
    }
    let mid = slice.len().div_ceil(2);
    merge_sort(&mut slice[..mid], compare);
    merge_sort(&mut slice[mid..], compare);
    merge(slice, mid, compare);
}

fn merge<T, F>(slice: &mut [T], mid: usize, compare: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let left = slice[..mid].to_vec();
    let right = slice[mid..].to_vec();

    let (mut i, mut j) = (0, 0);
    for slot in slice.iter_mut() {
        let take_left = j >= right.len()
            || (i < left.len() && compare(&left[i], &right[j]) != Ordering::Greater);
        if take_left {
            *slot = left[i].clone();
            i += 1;
        } else {
            *slot = right[j].clone();
            j += 1;
        }
    }
}
