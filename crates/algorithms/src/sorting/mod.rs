//! QuickSort and MergeSort over movie lists.
//!
//! Both sorters work on a copy: the caller's slice is never reordered.
//! MergeSort is stable (movies with equal keys keep their input order);
//! QuickSort makes no such promise.
//!
//! Each sorter exposes one comparator-driven `sort_by` plus thin per-key
//! wrappers built on [`SortKey`].

pub mod merge_sort;
pub mod quick_sort;

use catalog::Movie;
use std::cmp::Ordering;

/// The movie orderings the catalog supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Highest rating first
    RatingDesc,
    /// Most recent first
    YearDesc,
    /// Shortest first
    DurationAsc,
    /// Alphabetical
    TitleAsc,
}

impl SortKey {
    /// Compare two movies; `Less` means `a` belongs before `b`.
    pub fn compare(self, a: &Movie, b: &Movie) -> Ordering {
        match self {
            SortKey::RatingDesc => b.rating.total_cmp(&a.rating),
            SortKey::YearDesc => b.year.cmp(&a.year),
            SortKey::DurationAsc => a.duration.cmp(&b.duration),
            SortKey::TitleAsc => a.title.cmp(&b.title),
        }
    }

    /// True if `movies` is already ordered by this key.
    pub fn is_sorted(self, movies: &[Movie]) -> bool {
        movies
            .windows(2)
            .all(|pair| self.compare(&pair[0], &pair[1]) != Ordering::Greater)
    }
}
