//! QuickSort with Lomuto partitioning.
//!
//! ## Algorithm
//! 1. Move the middle element to the end and use it as pivot
//! 2. Sweep the range, moving every element that does not belong after the
//!    pivot to the front
//! 3. Drop the pivot between the two halves and sort each half
//!
//! Plain Lomuto pivots on the last element as it stands. Here the pivot is
//! the middle element, swapped into the last slot before partitioning, so
//! `partition` itself still works on the last slot. Sorted and reverse
//! sorted input then split evenly instead of going quadratic. Output order
//! is the same either way; only equal elements may land differently.
//!
//! The smaller half is sorted recursively and the larger one in a loop, so
//! stack depth stays O(log n). Not stable.

use super::SortKey;
use catalog::Movie;
use std::cmp::Ordering;

/// Sort a copy of `items` with `compare`.
pub fn sort_by<T, F>(items: &[T], mut compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut sorted = items.to_vec();
    quick_sort(&mut sorted, &mut compare);
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

fn quick_sort<T, F>(mut slice: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    while slice.len() > 1 {
        let last = slice.len() - 1;
        slice.swap(slice.len() / 2, last);
        let pivot = partition(slice, compare);
        let (left, right) = std::mem::take(&mut slice).split_at_mut(pivot);
        let right = &mut right[1..];

        if left.len() < right.len() {
            quick_sort(left, compare);
            slice = right;
        } else {
            quick_sort(right, compare);
            slice = left;
        }
    }
}

/// Lomuto partition around the last element; returns the pivot's final index.
fn partition<T, F>(slice: &mut [T], compare: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let last = slice.len() - 1;
    let mut store = 0;
    for j in 0..last {
        if compare(&slice[j], &slice[last]) != Ordering::Greater {
            slice.swap(store, j);
            store += 1;
        }
    }
    slice.swap(store, last);
    store
}
