//! Classic algorithm families applied to a movie catalog.
//!
//! Every algorithm takes a read-only slice of movies (plus parameters) and
//! returns a freshly built result. Nothing is cached between calls and no
//! input is modified.
//!
//! ## Modules
//! - **sorting**: QuickSort and MergeSort with per-attribute adapters
//! - **greedy**: genre recommendation, top N, greedy marathon
//! - **backtracking**: genre mixes, exact-time and k-combination enumerators
//! - **dynamic**: 0/1 knapsack marathon planner
//! - **branch_bound**: best-first knapsack with fractional-relaxation bounds
//! - **dijkstra**: shortest routes over the similarity graph
//! - **mst**: Prim and Kruskal spanning trees
//! - **disjoint_set**: union-find used by Kruskal
//!
//! ## Example Usage
//! ```ignore
//! use algorithms::{branch_bound, dynamic};
//!
//! let dp = dynamic::optimal_marathon(catalog.movies(), 360);
//! let bb = branch_bound::optimal_marathon(catalog.movies(), 360);
//! println!("{} vs {} ({} nodes)", dp.total_score, bb.marathon.total_score, bb.nodes_explored);
//! ```

pub mod backtracking;
pub mod branch_bound;
pub mod dijkstra;
pub mod disjoint_set;
pub mod dynamic;
pub mod edge;
pub mod greedy;
pub mod mst;
pub mod results;
pub mod sorting;

// Re-export main types
pub use dijkstra::{Dijkstra, Route};
pub use disjoint_set::DisjointSet;
pub use edge::Edge;
pub use results::{BranchBoundResult, MarathonResult, MstAlgorithm, MstResult, Strategy};
pub use sorting::SortKey;
