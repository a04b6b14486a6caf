//! Shortest paths over the similarity graph.
//!
//! Similarity is the opposite of distance, so each edge weight goes through
//! a transform before the search. The default is [`similarity_distance`],
//! `1 / (weight + 0.1)`: the more similar two movies are, the closer they
//! sit. Any other transform can be injected with [`Dijkstra::with_transform`]
//! as long as it returns non-negative distances.
//!
//! Edges are followed in their stored direction only. Edges pointing at
//! movies that are not part of the input are ignored.
//!
//! ## Algorithm
//! 1. Tentative distance 0 for the start, infinity for everything else
//! 2. Pop the closest unfinished movie from a binary heap; skip it if it was
//!    already finalized
//! 3. Relax each outgoing edge, recording the parent of every improvement
//! 4. Repeat until the heap is empty (or the destination is popped)
//!
//! Equal distances pop in insertion order.

use catalog::{Movie, MovieId};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};
use tracing::{debug, instrument};

/// Default weight-to-distance transform.
pub fn similarity_distance(weight: f64) -> f64 {
    1.0 / (weight + 0.1)
}

/// A path between two movies and its length.
#[derive(Debug, Clone, Serialize)]
pub struct Route {
    pub movies: Vec<Movie>,
    pub distance: f64,
}

impl Route {
    pub fn movie_ids(&self) -> Vec<MovieId> {
        self.movies.iter().map(|m| m.id).collect()
    }
}

/// Heap entry; smallest distance first, earliest insertion first on ties.
struct Pending {
    distance: f64,
    seq: u64,
    id: MovieId,
}

impl Ord for Pending {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Pending {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Pending {}

/// Finalized distances and the parent each movie was reached from.
struct Search {
    distances: HashMap<MovieId, f64>,
    parents: HashMap<MovieId, MovieId>,
}

/// Dijkstra search with a pluggable weight-to-distance transform.
pub struct Dijkstra<F = fn(f64) -> f64> {
    transform: F,
}

impl Dijkstra {
    pub fn new() -> Self {
        Self {
            transform: similarity_distance,
        }
    }
}

impl Default for Dijkstra {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> Dijkstra<F>
where
    F: Fn(f64) -> f64,
{
    pub fn with_transform(transform: F) -> Self {
        Self { transform }
    }

    /// Distance of a single edge after the transform.
    pub fn edge_distance(&self, weight: f64) -> f64 {
        (self.transform)(weight)
    }

    /// Shortest route from `from` to `to`.
    ///
    /// `None` when either movie is missing from `movies` or `to` cannot be
    /// reached.
    #[instrument(skip(self, movies), fields(movie_count = movies.len()))]
    pub fn shortest_route(&self, movies: &[Movie], from: MovieId, to: MovieId) -> Option<Route> {
        let graph = index(movies);
        if !graph.contains_key(&from) || !graph.contains_key(&to) {
            debug!("Unknown endpoint, no route");
            return None;
        }

        let search = self.search(&graph, from, Some(to));
        let distance = *search.distances.get(&to)?;

        let mut path = vec![to];
        let mut current = to;
        while let Some(&parent) = search.parents.get(&current) {
            path.push(parent);
            current = parent;
        }
        path.reverse();

        debug!("Route of {} movies, distance {:.4}", path.len(), distance);
        Some(Route {
            movies: path.iter().map(|id| graph[id].clone()).collect(),
            distance,
        })
    }

    /// Movies on the shortest route, start and end included. Empty when there
    /// is no route.
    pub fn shortest_path(&self, movies: &[Movie], from: MovieId, to: MovieId) -> Vec<Movie> {
        self.shortest_route(movies, from, to)
            .map(|route| route.movies)
            .unwrap_or_default()
    }

    /// Distance from `start` to every movie in `movies`.
    ///
    /// Unreachable movies map to infinity. The map is empty when `start` is
    /// not one of `movies`.
    #[instrument(skip(self, movies), fields(movie_count = movies.len()))]
    pub fn all_distances(&self, movies: &[Movie], start: MovieId) -> HashMap<MovieId, f64> {
        let graph = index(movies);
        if !graph.contains_key(&start) {
            return HashMap::new();
        }

        let search = self.search(&graph, start, None);
        debug!("Reached {} of {} movies", search.distances.len(), movies.len());

        movies
            .iter()
            .map(|m| {
                let distance = search.distances.get(&m.id).copied().unwrap_or(f64::INFINITY);
                (m.id, distance)
            })
            .collect()
    }

    /// The `n` reachable movies closest to `start`, nearest first. The start
    /// itself is never included.
    pub fn top_n_nearest(&self, movies: &[Movie], start: MovieId, n: usize) -> Vec<Movie> {
        if n == 0 {
            return Vec::new();
        }
        let distances = self.all_distances(movies, start);

        let mut reachable: Vec<(&Movie, f64)> = movies
            .iter()
            .filter(|m| m.id != start)
            .filter_map(|m| {
                let distance = *distances.get(&m.id)?;
                distance.is_finite().then_some((m, distance))
            })
            .collect();
        // Stable: equal distances keep input order
        reachable.sort_by(|a, b| a.1.total_cmp(&b.1));

        reachable
            .into_iter()
            .take(n)
            .map(|(m, _)| m.clone())
            .collect()
    }

    fn search(&self, graph: &HashMap<MovieId, &Movie>, start: MovieId, stop_at: Option<MovieId>) -> Search {
        let mut distances: HashMap<MovieId, f64> = HashMap::new();
        let mut parents: HashMap<MovieId, MovieId> = HashMap::new();
        let mut finalized: HashSet<MovieId> = HashSet::new();
        let mut heap = BinaryHeap::new();
        let mut seq: u64 = 0;

        distances.insert(start, 0.0);
        heap.push(Pending {
            distance: 0.0,
            seq,
            id: start,
        });

        while let Some(Pending { distance, id, .. }) = heap.pop() {
            if !finalized.insert(id) {
                continue;
            }
            if stop_at == Some(id) {
                break;
            }

            let Some(movie) = graph.get(&id) else {
                continue;
            };
            for edge in &movie.similar {
                if !graph.contains_key(&edge.target) || finalized.contains(&edge.target) {
                    continue;
                }
                let candidate = distance + (self.transform)(edge.weight);
                let known = distances.get(&edge.target).copied().unwrap_or(f64::INFINITY);
                if candidate < known {
                    distances.insert(edge.target, candidate);
                    parents.insert(edge.target, id);
                    seq += 1;
                    heap.push(Pending {
                        distance: candidate,
                        seq,
                        id: edge.target,
                    });
                }
            }
        }

        Search { distances, parents }
    }
}

fn index(movies: &[Movie]) -> HashMap<MovieId, &Movie> {
    movies.iter().map(|m| (m.id, m)).collect()
}
