//! Randomized property tests.
//!
//! Small instances are generated from fixed seeds and checked against brute
//! force oracles, so every run sees the same cases.

use algorithms::{
    backtracking, branch_bound, dynamic, mst, sorting::merge_sort, sorting::quick_sort, Dijkstra,
    DisjointSet, Edge, SortKey,
};
use approx::assert_relative_eq;
use catalog::{Genre, Movie, SimilarityEdge};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::{HashMap, HashSet};

const GENRES: [&str; 4] = ["Drama", "Action", "Comedy", "Horror"];

fn random_movies(rng: &mut StdRng, n: usize) -> Vec<Movie> {
    (1..=n as u32)
        .map(|id| {
            let rating = (rng.random_range(10..=100) as f64) / 10.0;
            let mut movie = Movie::new(id, format!("Movie {id}"))
                .with_year(rng.random_range(1950..=2024))
                .with_duration(rng.random_range(20..=180))
                .with_rating(rating);
            for genre in GENRES {
                if rng.random_bool(0.4) {
                    movie.add_genre(Genre::new(genre));
                }
            }
            movie
        })
        .collect()
}

/// Best rating sum over every subset that fits, by enumeration.
fn brute_force_knapsack(movies: &[Movie], max_time: u32) -> f64 {
    let mut best = 0.0;
    for mask in 0u32..(1 << movies.len()) {
        let (mut time, mut score) = (0u32, 0.0);
        for (i, movie) in movies.iter().enumerate() {
            if mask & (1 << i) != 0 {
                time += movie.duration;
                score += movie.rating;
            }
        }
        if time <= max_time && score > best {
            best = score;
        }
    }
    best
}

#[test]
fn test_knapsack_matches_brute_force() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..40 {
        let n = rng.random_range(1..=10);
        let movies = random_movies(&mut rng, n);
        let max_time = rng.random_range(0..=600);

        let result = dynamic::optimal_marathon(&movies, max_time);
        assert!(result.total_time <= max_time);
        assert_relative_eq!(
            result.total_score,
            brute_force_knapsack(&movies, max_time),
            epsilon = 1e-9
        );

        // Reported totals describe the reported movies
        let time: u32 = result.movies.iter().map(|m| m.duration).sum();
        assert_eq!(time, result.total_time);
    }
}

#[test]
fn test_branch_bound_agrees_with_knapsack() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..60 {
        let n = rng.random_range(0..=14);
        let movies = random_movies(&mut rng, n);
        let max_time = rng.random_range(0..=900);

        let dp = dynamic::optimal_marathon(&movies, max_time);
        let bb = branch_bound::optimal_marathon(&movies, max_time);

        assert_relative_eq!(bb.marathon.total_score, dp.total_score, epsilon = 1e-9);
        assert!(bb.marathon.total_time <= max_time);
        assert!(bb.nodes_pruned <= 2 * bb.nodes_explored + 1);
    }
}

#[test]
fn test_sorters_order_every_key() {
    let mut rng = StdRng::seed_from_u64(3);
    let keys = [
        SortKey::RatingDesc,
        SortKey::YearDesc,
        SortKey::DurationAsc,
        SortKey::TitleAsc,
    ];
    for _ in 0..20 {
        let n = rng.random_range(0..=60);
        let movies = random_movies(&mut rng, n);
        for key in keys {
            let quick = quick_sort::sort_by_key(&movies, key);
            let merge = merge_sort::sort_by_key(&movies, key);
            assert!(key.is_sorted(&quick), "quick sort broke {key:?}");
            assert!(key.is_sorted(&merge), "merge sort broke {key:?}");
            assert_eq!(quick.len(), movies.len());
            assert_eq!(merge.len(), movies.len());
        }
    }
}

#[test]
fn test_merge_sort_is_stable() {
    let mut rng = StdRng::seed_from_u64(5);
    // Few distinct ratings so ties are common; ids grow with input position
    let movies: Vec<Movie> = (1..=200)
        .map(|id| Movie::new(id, "Same").with_rating(f64::from(rng.random_range(1..=4u32))))
        .collect();

    let sorted = merge_sort::by_rating_desc(&movies);
    for pair in sorted.windows(2) {
        if pair[0].rating == pair[1].rating {
            assert!(pair[0].id < pair[1].id);
        }
    }
}

#[test]
fn test_disjoint_set_matches_naive_partition() {
    let mut rng = StdRng::seed_from_u64(13);
    for _ in 0..20 {
        let n: u32 = rng.random_range(2..=40);
        let mut sets = DisjointSet::new();
        // Naive: every id carries a class label, relabel on merge
        let mut label: HashMap<u32, u32> = (0..n).map(|id| (id, id)).collect();
        for id in 0..n {
            sets.make_set(id);
        }

        for _ in 0..rng.random_range(0..=n) {
            let a = rng.random_range(0..n);
            let b = rng.random_range(0..n);
            let merged = sets.union(a, b);

            let (from, to) = (label[&a], label[&b]);
            assert_eq!(merged, from != to);
            for value in label.values_mut() {
                if *value == from {
                    *value = to;
                }
            }
        }

        for a in 0..n {
            for b in 0..n {
                assert_eq!(sets.connected(a, b), label[&a] == label[&b]);
            }
        }
    }
}

/// Random undirected graph; a chain through every vertex when `connected`.
fn random_edges(rng: &mut StdRng, n: u32, extra: usize, connected: bool) -> Vec<Edge> {
    let mut edges = Vec::new();
    if connected {
        for id in 2..=n {
            let parent = rng.random_range(1..id);
            edges.push(Edge::new(parent, id, rng.random_range(1..=20) as f64, 0));
        }
    }
    for _ in 0..extra {
        let a = rng.random_range(1..=n);
        let b = rng.random_range(1..=n);
        if a != b {
            edges.push(Edge::new(a, b, rng.random_range(1..=20) as f64, 0));
        }
    }
    edges
}

#[test]
fn test_prim_and_kruskal_agree() {
    let mut rng = StdRng::seed_from_u64(17);
    for _ in 0..40 {
        let n = rng.random_range(2..=25);
        let extra = rng.random_range(0..=60);
        let edges = random_edges(&mut rng, n, extra, true);

        let prim = mst::prim_from_edges(&edges, 1);
        let kruskal = mst::kruskal_from_edges(&edges);

        assert_relative_eq!(prim.total_weight, kruskal.total_weight, epsilon = 1e-9);
        assert_eq!(prim.edge_count, n as usize - 1);
        assert_eq!(kruskal.edge_count, n as usize - 1);
        assert_eq!(prim.vertex_count, n as usize);
        assert_eq!(kruskal.vertex_count, n as usize);
    }
}

#[test]
fn test_kruskal_forest_is_acyclic() {
    let mut rng = StdRng::seed_from_u64(19);
    for _ in 0..20 {
        let edges = random_edges(&mut rng, 30, 25, false);
        let forest = mst::kruskal_from_edges(&edges);

        let mut sets = DisjointSet::new();
        for edge in &forest.edges {
            assert!(sets.union(edge.origin, edge.destination), "cycle through {edge}");
        }
    }
}

fn random_graph(rng: &mut StdRng, n: usize) -> Vec<Movie> {
    let mut movies = random_movies(rng, n);
    for movie in &mut movies {
        let mut targets = HashSet::new();
        for _ in 0..rng.random_range(0..=3) {
            let target = rng.random_range(1..=n as u32);
            if target != movie.id && targets.insert(target) {
                let weight = rng.random_range(1..=50) as f64 / 10.0;
                movie.similar.push(SimilarityEdge::new(target, weight, 0));
            }
        }
    }
    movies
}

#[test]
fn test_dijkstra_distances_are_consistent() {
    let mut rng = StdRng::seed_from_u64(23);
    let dijkstra = Dijkstra::new();

    for _ in 0..30 {
        let n = rng.random_range(1..=15);
        let movies = random_graph(&mut rng, n);
        let start = rng.random_range(1..=n as u32);
        let distances = dijkstra.all_distances(&movies, start);

        assert_eq!(distances[&start], 0.0);
        assert!(distances.values().all(|&d| d >= 0.0));

        for movie in &movies {
            let Some(route) = dijkstra.shortest_route(&movies, start, movie.id) else {
                assert!(distances[&movie.id].is_infinite());
                continue;
            };
            assert_relative_eq!(route.distance, distances[&movie.id], epsilon = 1e-9);

            // Every hop follows a real edge and the hops add up
            let mut total = 0.0;
            for hop in route.movies.windows(2) {
                let edge = hop[0]
                    .similar
                    .iter()
                    .find(|e| e.target == hop[1].id)
                    .expect("route follows a stored edge");
                total += dijkstra.edge_distance(edge.weight);
            }
            assert_relative_eq!(total, route.distance, epsilon = 1e-9);
        }

        // Nearest list is sorted and never contains the start
        let nearest = dijkstra.top_n_nearest(&movies, start, n);
        assert!(nearest.iter().all(|m| m.id != start));
        for pair in nearest.windows(2) {
            assert!(distances[&pair[0].id] <= distances[&pair[1].id]);
        }
    }
}

/// True if the movies can take one distinct desired genre each and cover all.
fn covers_exactly(movies: &[&Movie], desired: &[Genre]) -> bool {
    fn assign(movies: &[&Movie], desired: &[Genre], used: &mut [bool]) -> bool {
        let Some((first, rest)) = movies.split_first() else {
            return used.iter().all(|&u| u);
        };
        for (slot, genre) in desired.iter().enumerate() {
            if !used[slot] && first.genres.contains(genre) {
                used[slot] = true;
                let found = assign(rest, desired, used);
                used[slot] = false;
                if found {
                    return true;
                }
            }
        }
        false
    }
    movies.len() == desired.len() && assign(movies, desired, &mut vec![false; desired.len()])
}

#[test]
fn test_genre_mix_is_complete_and_unique() {
    let mut rng = StdRng::seed_from_u64(29);
    for _ in 0..30 {
        let n = rng.random_range(1..=9);
        let movies = random_movies(&mut rng, n);
        let k = rng.random_range(1..=3);
        let desired: Vec<Genre> = GENRES[..k].iter().map(|&g| Genre::new(g)).collect();

        let found: Vec<Vec<u32>> = backtracking::genre_mix(&movies, &desired)
            .iter()
            .map(|combo| combo.iter().map(|m| m.id).collect())
            .collect();
        let unique: HashSet<&Vec<u32>> = found.iter().collect();
        assert_eq!(unique.len(), found.len(), "duplicate combination");

        let mut expected = Vec::new();
        for mask in 0u32..(1 << n) {
            let subset: Vec<&Movie> = movies
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, m)| m)
                .collect();
            if covers_exactly(&subset, &desired) {
                expected.push(subset.iter().map(|m| m.id).collect::<Vec<u32>>());
            }
        }

        let mut found_sorted = found.clone();
        found_sorted.sort();
        expected.sort();
        assert_eq!(found_sorted, expected);
    }
}

#[test]
fn test_exact_time_matches_brute_force() {
    let mut rng = StdRng::seed_from_u64(31);
    for _ in 0..30 {
        let n = rng.random_range(1..=10);
        let movies: Vec<Movie> = (1..=n as u32)
            .map(|id| Movie::new(id, "M").with_duration(rng.random_range(1..=6) * 15))
            .collect();
        let target = rng.random_range(1..=12) * 15;

        let combos = backtracking::exact_time(&movies, target);
        for combo in &combos {
            assert_eq!(combo.iter().map(|m| m.duration).sum::<u32>(), target);
        }

        let expected = (0u32..(1 << n))
            .filter(|mask| {
                let total: u32 = movies
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| mask & (1 << i) != 0)
                    .map(|(_, m)| m.duration)
                    .sum();
                total == target && *mask != 0
            })
            .count();
        assert_eq!(combos.len(), expected);
    }
}

#[test]
fn test_combination_count_is_binomial() {
    let movies: Vec<Movie> = (1..=10).map(|id| Movie::new(id, "M")).collect();
    let binomial = |n: usize, k: usize| -> usize { (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1)) };
    for k in 1..=10 {
        assert_eq!(backtracking::combinations(&movies, k).len(), binomial(10, k));
    }
}
