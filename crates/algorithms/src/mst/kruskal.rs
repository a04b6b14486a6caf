//! Kruskal's algorithm.
//!
//! ## Algorithm
//! 1. Put every movie an edge touches into its own set
//! 2. Sort edges by weight, cheapest first
//! 3. Take each edge whose endpoints are in different sets and merge them
//! 4. Stop after `vertices - 1` edges or when the edges run out

use super::{canonicalize, undirected_edges};
use crate::disjoint_set::DisjointSet;
use crate::edge::Edge;
use crate::results::{MstAlgorithm, MstResult};
use catalog::Movie;
use tracing::{debug, instrument};

/// Minimum spanning forest of the similarity graph.
#[instrument(skip(movies), fields(movie_count = movies.len()))]
pub fn kruskal(movies: &[Movie]) -> MstResult {
    kruskal_from_edges(&undirected_edges(movies))
}

/// Kruskal over an explicit edge list, read as undirected.
///
/// The vertex count covers every movie the edges touch, so on a
/// disconnected graph `edge_count < vertex_count - 1`.
pub fn kruskal_from_edges(edges: &[Edge]) -> MstResult {
    let mut edges = canonicalize(edges.iter().copied());
    if edges.is_empty() {
        return MstResult::empty(MstAlgorithm::Kruskal);
    }

    let mut sets = DisjointSet::new();
    for edge in &edges {
        sets.make_set(edge.origin);
        sets.make_set(edge.destination);
    }
    let vertex_count = sets.len();

    edges.sort();

    let mut tree = Vec::with_capacity(vertex_count - 1);
    for edge in edges {
        if tree.len() == vertex_count - 1 {
            break;
        }
        if sets.union(edge.origin, edge.destination) {
            tree.push(edge);
        }
    }

    debug!(
        "Kruskal kept {} edges over {} movies",
        tree.len(),
        vertex_count
    );
    MstResult::new(tree, vertex_count, MstAlgorithm::Kruskal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kruskal_triangle() {
        let edges = vec![
            Edge::new(1, 2, 1.0, 0),
            Edge::new(2, 3, 2.0, 0),
            Edge::new(1, 3, 3.0, 0),
        ];
        let result = kruskal_from_edges(&edges);
        let tree: Vec<(u32, u32, f64)> = result
            .edges
            .iter()
            .map(|e| (e.origin, e.destination, e.weight))
            .collect();
        assert_eq!(tree, vec![(1, 2, 1.0), (2, 3, 2.0)]);
        assert_eq!(result.total_weight, 3.0);
        assert_eq!(result.vertex_count, 3);
        assert_eq!(result.algorithm, MstAlgorithm::Kruskal);
    }

    #[test]
    fn test_kruskal_forest() {
        let edges = vec![
            Edge::new(1, 2, 1.0, 0),
            Edge::new(3, 4, 2.0, 0),
            Edge::new(4, 5, 0.5, 0),
        ];
        let result = kruskal_from_edges(&edges);
        assert_eq!(result.vertex_count, 5);
        assert_eq!(result.edge_count, 3);
        assert_eq!(result.total_weight, 3.5);
    }

    #[test]
    fn test_kruskal_mirrored_edges() {
        let edges = vec![Edge::new(1, 2, 1.0, 0), Edge::new(2, 1, 1.0, 0)];
        let result = kruskal_from_edges(&edges);
        assert_eq!(result.edge_count, 1);
        assert_eq!(result.vertex_count, 2);
    }

    #[test]
    fn test_kruskal_no_edges() {
        let movies = vec![Movie::new(1, "A"), Movie::new(2, "B")];
        let result = kruskal(&movies);
        assert!(result.edges.is_empty());
        assert_eq!(result.vertex_count, 0);
    }
}
