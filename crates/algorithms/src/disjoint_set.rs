//! Union-find (disjoint set union) over movie ids.
//!
//! Kruskal uses this to tell whether an edge would close a cycle. Movie ids
//! are sparse, so parents and ranks live in hash maps rather than vectors.
//!
//! - `find` compresses paths: every node visited ends up pointing at the root
//! - `union` attaches the shallower tree under the deeper one; rank grows only
//!   when two trees of equal rank merge
//!
//! Both run in amortized O(α(n)).

use catalog::MovieId;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct DisjointSet {
    parent: HashMap<MovieId, MovieId>,
    rank: HashMap<MovieId, u32>,
}

impl DisjointSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `id` as a singleton set. No effect if it is already tracked.
    pub fn make_set(&mut self, id: MovieId) {
        if !self.parent.contains_key(&id) {
            self.parent.insert(id, id);
            self.rank.insert(id, 0);
        }
    }

    pub fn contains(&self, id: MovieId) -> bool {
        self.parent.contains_key(&id)
    }

    /// Number of tracked elements
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Representative of the set holding `id`. Unknown ids become singletons.
    pub fn find(&mut self, id: MovieId) -> MovieId {
        self.make_set(id);

        let mut root = id;
        while self.parent[&root] != root {
            root = self.parent[&root];
        }

        let mut node = id;
        while node != root {
            let next = self.parent[&node];
            self.parent.insert(node, root);
            node = next;
        }

        root
    }

    /// Merge the sets holding `a` and `b`. Returns `false` if they were
    /// already in the same set.
    pub fn union(&mut self, a: MovieId, b: MovieId) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }

        let rank_a = self.rank[&root_a];
        let rank_b = self.rank[&root_b];
        if rank_a < rank_b {
            self.parent.insert(root_a, root_b);
        } else if rank_a > rank_b {
            self.parent.insert(root_b, root_a);
        } else {
            self.parent.insert(root_b, root_a);
            self.rank.insert(root_a, rank_a + 1);
        }
        true
    }

    pub fn connected(&mut self, a: MovieId, b: MovieId) -> bool {
        self.find(a) == self.find(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singletons() {
        let mut set = DisjointSet::new();
        set.make_set(1);
        set.make_set(2);
        assert_eq!(set.find(1), 1);
        assert!(!set.connected(1, 2));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_union_connects() {
        let mut set = DisjointSet::new();
        for id in 1..=4 {
            set.make_set(id);
        }
        assert!(set.union(1, 2));
        assert!(set.union(3, 4));
        assert!(!set.union(2, 1));
        assert!(set.connected(1, 2));
        assert!(!set.connected(1, 3));

        assert!(set.union(2, 4));
        assert!(set.connected(1, 3));
    }

    #[test]
    fn test_find_unknown_creates_singleton() {
        let mut set = DisjointSet::new();
        assert!(!set.contains(42));
        assert_eq!(set.find(42), 42);
        assert!(set.contains(42));
    }

    #[test]
    fn test_rank_grows_only_on_equal_merge() {
        let mut set = DisjointSet::new();
        set.union(1, 2); // ranks 0 + 0 -> root 1 gets rank 1
        assert_eq!(set.rank[&1], 1);
        set.union(1, 3); // rank 1 + rank 0 -> no growth
        assert_eq!(set.rank[&1], 1);
        assert_eq!(set.find(3), 1);
    }

    #[test]
    fn test_path_compression() {
        let mut set = DisjointSet::new();
        // Build a chain by hand: 4 -> 3 -> 2 -> 1
        for id in 1..=4 {
            set.make_set(id);
        }
        set.parent.insert(2, 1);
        set.parent.insert(3, 2);
        set.parent.insert(4, 3);

        assert_eq!(set.find(4), 1);
        assert_eq!(set.parent[&4], 1);
        assert_eq!(set.parent[&3], 1);
        assert_eq!(set.parent[&2], 1);
    }
}
