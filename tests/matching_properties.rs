//! End-to-end properties of the matching engine, checked on hand-built
//! instances and on small seeded random instances against a brute-force
//! reference

use std::collections::HashSet;

use bipartite_maximum_matching::matching::{MatchingEngine, SearchOutcome};
use bipartite_maximum_matching::parser::parse_instance;
use bipartite_maximum_matching::BipartiteGraph;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Exhaustive maximum matching by trying every assignment of left vertices
/// to free right vertices. Only usable on tiny instances.
fn brute_force_size(n: usize, edges: &[(usize, usize)]) -> usize {
    fn recurse(i: usize, lefts: &[usize], adj: &[Vec<usize>], used: &mut [bool]) -> usize {
        if i == lefts.len() {
            return 0;
        }
        let mut best = recurse(i + 1, lefts, adj, used);
        for &v in &adj[lefts[i]] {
            if !used[v] {
                used[v] = true;
                best = best.max(1 + recurse(i + 1, lefts, adj, used));
                used[v] = false;
            }
        }
        best
    }

    let mut adj = vec![Vec::new(); n];
    let mut seen = vec![false; n];
    let mut lefts = Vec::new();
    for &(u, v) in edges {
        adj[u].push(v);
        if !seen[u] {
            seen[u] = true;
            lefts.push(u);
        }
    }
    recurse(0, &lefts, &adj, &mut vec![false; n])
}

fn random_edges(n: usize, density: f64, rng: &mut StdRng) -> Vec<(usize, usize)> {
    let mut edges = Vec::new();
    for u in 0..n {
        for v in 0..n {
            if rng.gen::<f64>() < density {
                edges.push((u, v));
            }
        }
    }
    edges
}

#[test]
fn test_rerouting_instance_reaches_full_size() {
    // Left 2 only knows rights 0 and 1, which lefts 0 and 1 have already
    // claimed; left 0 must be rerouted to right 2 for all three to match.
    let graph = parse_instance("3 5\n0 0\n0 2\n1 1\n2 0\n2 1\n").unwrap();
    let mut engine = MatchingEngine::new(&graph);
    assert_eq!(engine.compute(), 3);
    engine.verify_matching().unwrap();
}

#[test]
fn test_size_agrees_with_brute_force() {
    for seed in 0..40 {
        let mut rng = StdRng::seed_from_u64(seed);
        let n = rng.gen_range(1..=6);
        let density = rng.gen_range(0.05..0.85);
        let edges = random_edges(n, density, &mut rng);

        let graph = BipartiteGraph::new(n, &edges).unwrap();
        let mut engine = MatchingEngine::new(&graph);
        let size = engine.compute();
        let optimum = brute_force_size(n, &edges);
        assert_eq!(
            size, optimum,
            "seed {}: engine found {} but the optimum is {}",
            seed, size, optimum
        );
    }
}

#[test]
fn test_matching_is_valid_and_self_consistent() {
    for seed in 0..40 {
        let mut rng = StdRng::seed_from_u64(1000 + seed);
        let n = rng.gen_range(1..=12);
        let edges = random_edges(n, 0.3, &mut rng);
        let edge_set: HashSet<(usize, usize)> = edges.iter().copied().collect();

        let graph = BipartiteGraph::new(n, &edges).unwrap();
        let mut engine = MatchingEngine::new(&graph);
        let size = engine.compute();
        engine.verify_matching().unwrap();

        let pairs = engine.matched_pairs();
        assert_eq!(pairs.len(), size);
        assert_eq!(engine.matching_size(), size);

        let mut lefts_used = HashSet::new();
        let mut rights_used = HashSet::new();
        for &(left, right) in &pairs {
            assert!(
                edge_set.contains(&(left.0, right.0)),
                "matched pair ({}, {}) is not an input edge",
                left,
                right
            );
            assert!(lefts_used.insert(left), "left {} matched twice", left);
            assert!(rights_used.insert(right), "right {} matched twice", right);
            assert_eq!(engine.partner_of_left(left), Some(right));
            assert_eq!(engine.partner_of_right(right), Some(left));
        }
    }
}

#[test]
fn test_no_augmenting_path_remains_after_compute() {
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(2000 + seed);
        let n = rng.gen_range(1..=12);
        let edges = random_edges(n, 0.25, &mut rng);

        let graph = BipartiteGraph::new(n, &edges).unwrap();
        let mut engine = MatchingEngine::new(&graph);
        let size = engine.compute();

        for &left in graph.left_vertices() {
            assert_eq!(engine.augment_from(left), SearchOutcome::Exhausted);
        }
        assert_eq!(engine.matching_size(), size);
    }
}

#[test]
fn test_size_never_exceeds_smaller_side() {
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(3000 + seed);
        let n = rng.gen_range(1..=12);
        let edges = random_edges(n, 0.2, &mut rng);

        let distinct_lefts: HashSet<usize> = edges.iter().map(|&(u, _)| u).collect();
        let distinct_rights: HashSet<usize> = edges.iter().map(|&(_, v)| v).collect();

        let graph = BipartiteGraph::new(n, &edges).unwrap();
        let mut engine = MatchingEngine::new(&graph);
        let size = engine.compute();
        assert!(size <= distinct_lefts.len().min(distinct_rights.len()));
    }
}

#[test]
fn test_identical_input_gives_identical_pairs() {
    let input = "6 9\n0 1\n0 4\n1 1\n2 2\n2 0\n3 4\n3 3\n5 0\n5 5\n";

    let first_graph = parse_instance(input).unwrap();
    let mut first_engine = MatchingEngine::new(&first_graph);
    let first_size = first_engine.compute();

    let second_graph = parse_instance(input).unwrap();
    let mut second_engine = MatchingEngine::new(&second_graph);
    let second_size = second_engine.compute();

    assert_eq!(first_size, second_size);
    assert_eq!(first_engine.matched_pairs(), second_engine.matched_pairs());
}

#[test]
fn test_recompute_matches_first_run() {
    let graph = parse_instance("4 6\n0 0\n0 1\n1 0\n2 1\n2 2\n3 2\n").unwrap();
    let mut engine = MatchingEngine::new(&graph);
    let first = engine.compute();
    let pairs = engine.matched_pairs();
    let second = engine.compute();
    assert_eq!(first, second);
    assert_eq!(engine.matched_pairs(), pairs);
}
