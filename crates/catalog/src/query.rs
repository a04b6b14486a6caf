//! Lookups and graph walks over a built catalog.
//!
//! Lookups filter the arena and keep catalog order unless they rank.
//! Walks start from one movie and never return it. Depth counts hops from
//! the start, so a depth of 0 finds nothing. Edges pointing outside the
//! catalog are skipped, and an unknown start yields an empty walk.

use crate::types::*;
use std::collections::{HashMap, HashSet, VecDeque};
use tracing::debug;

/// Depth used for related-movie walks when the caller gives none
pub const DEFAULT_DEPTH: usize = 3;

impl Catalog {
    /// Movies tagged with `genre`, in catalog order.
    pub fn movies_by_genre(&self, genre: &str) -> Vec<&Movie> {
        self.movies.iter().filter(|m| m.has_genre(genre)).collect()
    }

    /// Movies featuring `actor`, in catalog order.
    pub fn movies_with_actor(&self, actor: &str) -> Vec<&Movie> {
        self.movies.iter().filter(|m| m.has_actor(actor)).collect()
    }

    /// Movies rated strictly above `threshold`, in catalog order.
    pub fn rated_above(&self, threshold: f64) -> Vec<&Movie> {
        self.movies.iter().filter(|m| m.rating > threshold).collect()
    }

    /// The `n` best-rated movies, best first. Equal ratings keep catalog
    /// order.
    pub fn top_rated(&self, n: usize) -> Vec<&Movie> {
        let mut ranked: Vec<&Movie> = self.movies.iter().collect();
        ranked.sort_by(|a, b| b.rating.total_cmp(&a.rating));
        ranked.truncate(n);
        ranked
    }

    /// Breadth-first walk over similarity edges.
    ///
    /// Movies come out level by level, closest first. Within a level they
    /// follow edge order.
    pub fn bfs(&self, start: MovieId, depth: usize) -> Vec<&Movie> {
        let found = self.breadth_first(start, depth, |movie| {
            movie.similar.iter().map(|edge| edge.target).collect()
        });
        debug!("BFS from {} (depth {}) found {} movies", start, depth, found.len());
        found
    }

    /// Depth-first walk over similarity edges, in preorder.
    ///
    /// Finds the same movies as [`Catalog::bfs`] with the same depth, in the
    /// order a branch is followed to its end before the next one starts.
    pub fn dfs(&self, start: MovieId, depth: usize) -> Vec<&Movie> {
        let Some(origin) = self.get_movie(start) else {
            return Vec::new();
        };

        // Shallowest level each movie was expanded at. Reaching a movie again
        // closer to the start expands it again, or its far neighbors would be
        // cut off by the depth limit.
        let mut expanded: HashMap<MovieId, usize> = HashMap::new();
        let mut reported: HashSet<MovieId> = HashSet::from([start]);
        let mut found = Vec::new();
        let mut stack = vec![(origin, 0usize)];

        while let Some((movie, level)) = stack.pop() {
            if expanded.get(&movie.id).is_some_and(|&seen| seen <= level) {
                continue;
            }
            expanded.insert(movie.id, level);
            if reported.insert(movie.id) {
                found.push(movie);
            }
            if level == depth {
                continue;
            }
            // Reversed so the first edge is popped first
            for edge in movie.similar.iter().rev() {
                if let Some(next) = self.get_movie(edge.target) {
                    stack.push((next, level + 1));
                }
            }
        }

        debug!("DFS from {} (depth {}) found {} movies", start, depth, found.len());
        found
    }

    /// Up to `limit` movies related to `start`, closest first.
    ///
    /// A hop is either a similarity edge or a shared genre. Similar movies
    /// are listed before genre mates on the same level.
    pub fn related(&self, start: MovieId, depth: usize, limit: usize) -> Vec<&Movie> {
        let mut by_genre: HashMap<&Genre, Vec<MovieId>> = HashMap::new();
        for movie in &self.movies {
            for genre in &movie.genres {
                by_genre.entry(genre).or_default().push(movie.id);
            }
        }

        let mut related = self.breadth_first(start, depth, |movie| {
            let similar = movie.similar.iter().map(|edge| edge.target);
            let mates = movie
                .genres
                .iter()
                .flat_map(|genre| by_genre.get(genre).into_iter().flatten().copied());
            similar.chain(mates).collect()
        });
        related.truncate(limit);
        related
    }

    fn breadth_first<F>(&self, start: MovieId, depth: usize, neighbors: F) -> Vec<&Movie>
    where
        F: Fn(&Movie) -> Vec<MovieId>,
    {
        let Some(origin) = self.get_movie(start) else {
            return Vec::new();
        };

        let mut visited: HashSet<MovieId> = HashSet::from([start]);
        let mut queue = VecDeque::from([(origin, 0usize)]);
        let mut found = Vec::new();

        while let Some((movie, level)) = queue.pop_front() {
            if level == depth {
                continue;
            }
            for id in neighbors(movie) {
                let Some(next) = self.get_movie(id) else {
                    continue;
                };
                if visited.insert(id) {
                    found.push(next);
                    queue.push_back((next, level + 1));
                }
            }
        }
        found
    }
}
