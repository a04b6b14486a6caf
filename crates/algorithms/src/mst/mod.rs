//! Minimum spanning trees over the similarity graph.
//!
//! The graph is treated as undirected: an edge stored as `a -> b` and its
//! mirror `b -> a` collapse into one edge keyed by `(min, max)`. The first
//! direction seen is the one kept. Weights are the raw similarity weights.
//!
//! - [`prim`] grows one tree outward from a start movie
//! - [`kruskal`] merges components cheapest edge first, so a disconnected
//!   graph yields a spanning forest

pub mod kruskal;
pub mod prim;

pub use kruskal::{kruskal, kruskal_from_edges};
pub use prim::{prim, prim_from_edges};

use crate::edge::Edge;
use catalog::{Movie, MovieId};
use std::collections::HashSet;

/// Undirected edge list of `movies`. Edges pointing outside `movies` are
/// dropped.
pub fn undirected_edges(movies: &[Movie]) -> Vec<Edge> {
    let known: HashSet<MovieId> = movies.iter().map(|m| m.id).collect();
    let known = &known;

    canonicalize(movies.iter().flat_map(|movie| {
        let source = movie.id;
        movie
            .similar
            .iter()
            .filter(move |edge| known.contains(&edge.target))
            .map(move |edge| Edge::new(source, edge.target, edge.weight, edge.shared_genres))
    }))
}

/// Keep the first edge of every `(min, max)` endpoint pair.
pub(crate) fn canonicalize(edges: impl IntoIterator<Item = Edge>) -> Vec<Edge> {
    let mut seen = HashSet::new();
    edges
        .into_iter()
        .filter(|edge| seen.insert(edge.canonical_key()))
        .collect()
}
