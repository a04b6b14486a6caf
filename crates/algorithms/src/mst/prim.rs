//! Prim's algorithm.
//!
//! ## Algorithm
//! 1. Mark the start movie visited and push its edges onto a min-heap
//! 2. Pop the cheapest edge; skip it if its far end is already visited
//! 3. Otherwise take the edge, visit the far end and push its edges
//! 4. Stop when the heap is empty
//!
//! Only the component holding the start movie is spanned.

use super::{canonicalize, undirected_edges};
use crate::edge::Edge;
use crate::results::{MstAlgorithm, MstResult};
use catalog::{Movie, MovieId};
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};
use tracing::{debug, instrument};

/// Spanning tree of the similarity graph grown from `start`, or from the
/// first movie when `start` is `None`. Empty when the start is unknown.
#[instrument(skip(movies), fields(movie_count = movies.len()))]
pub fn prim(movies: &[Movie], start: Option<MovieId>) -> MstResult {
    let Some(start) = start.or_else(|| movies.first().map(|m| m.id)) else {
        return MstResult::empty(MstAlgorithm::Prim);
    };
    if !movies.iter().any(|m| m.id == start) {
        debug!("Start movie {} not in input", start);
        return MstResult::empty(MstAlgorithm::Prim);
    }

    prim_from_edges(&undirected_edges(movies), start)
}

/// Prim over an explicit edge list, read as undirected.
pub fn prim_from_edges(edges: &[Edge], start: MovieId) -> MstResult {
    let mut adjacency: HashMap<MovieId, Vec<Edge>> = HashMap::new();
    for edge in canonicalize(edges.iter().copied()) {
        adjacency.entry(edge.origin).or_default().push(edge);
        adjacency.entry(edge.destination).or_default().push(edge.reversed());
    }

    let mut visited: HashSet<MovieId> = HashSet::new();
    let mut heap: BinaryHeap<Reverse<Edge>> = BinaryHeap::new();
    let mut tree = Vec::new();

    visited.insert(start);
    push_edges(&adjacency, start, &visited, &mut heap);

    while let Some(Reverse(edge)) = heap.pop() {
        if !visited.insert(edge.destination) {
            continue;
        }
        tree.push(edge);
        push_edges(&adjacency, edge.destination, &visited, &mut heap);
    }

    debug!(
        "Prim spanned {} movies with {} edges",
        visited.len(),
        tree.len()
    );
    MstResult::new(tree, visited.len(), MstAlgorithm::Prim)
}

fn push_edges(
    adjacency: &HashMap<MovieId, Vec<Edge>>,
    from: MovieId,
    visited: &HashSet<MovieId>,
    heap: &mut BinaryHeap<Reverse<Edge>>,
) {
    let Some(edges) = adjacency.get(&from) else {
        return;
    };
    for edge in edges {
        if !visited.contains(&edge.destination) {
            heap.push(Reverse(*edge));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Vec<Edge> {
        vec![
            Edge::new(1, 2, 1.0, 0),
            Edge::new(2, 3, 2.0, 0),
            Edge::new(1, 3, 3.0, 0),
        ]
    }

    #[test]
    fn test_prim_triangle() {
        let result = prim_from_edges(&triangle(), 1);
        assert_eq!(result.total_weight, 3.0);
        assert_eq!(result.edge_count, 2);
        assert_eq!(result.vertex_count, 3);
        assert_eq!(result.algorithm, MstAlgorithm::Prim);
    }

    #[test]
    fn test_prim_follows_edges_both_ways() {
        // Every stored edge points at 1, the start has no outgoing edge
        let edges = vec![Edge::new(2, 1, 1.0, 0), Edge::new(3, 1, 4.0, 0)];
        let result = prim_from_edges(&edges, 1);
        assert_eq!(result.edge_count, 2);
        assert_eq!(result.total_weight, 5.0);
    }

    #[test]
    fn test_prim_spans_start_component_only() {
        let edges = vec![Edge::new(1, 2, 1.0, 0), Edge::new(3, 4, 1.0, 0)];
        let result = prim_from_edges(&edges, 3);
        assert_eq!(result.vertex_count, 2);
        let tree: Vec<(u32, u32)> = result.edges.iter().map(|e| (e.origin, e.destination)).collect();
        assert_eq!(tree, vec![(3, 4)]);
    }

    #[test]
    fn test_prim_from_movies() {
        let movies = vec![
            Movie::new(1, "A").with_similar(2, 1.0, 0).with_similar(3, 3.0, 0),
            Movie::new(2, "B").with_similar(3, 2.0, 0).with_similar(1, 1.0, 0),
            Movie::new(3, "C"),
        ];
        assert_eq!(prim(&movies, None).total_weight, 3.0);
        assert_eq!(prim(&movies, Some(3)).total_weight, 3.0);
        assert_eq!(prim(&movies, Some(7)).edge_count, 0);
        assert_eq!(prim(&[], None).vertex_count, 0);
    }

    #[test]
    fn test_prim_isolated_start() {
        let movies = vec![Movie::new(1, "Alone")];
        let result = prim(&movies, None);
        assert_eq!(result.vertex_count, 1);
        assert!(result.edges.is_empty());
    }
}
