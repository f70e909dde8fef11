// Host-side integration tests for the connection scan strategies.

use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use spider_core::connections::{scan, scan_all_pairs, scan_grid};
use spider_core::*;

fn random_points(n: usize, w: f32, h: f32, seed: u64) -> Vec<Vec2> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| Vec2::new(rng.gen::<f32>() * w, rng.gen::<f32>() * h))
        .collect()
}

fn sorted_pairs(conns: &[Connection]) -> Vec<(usize, usize)> {
    let mut pairs: Vec<_> = conns.iter().map(|c| (c.a, c.b)).collect();
    pairs.sort_unstable();
    pairs
}

#[test]
fn grid_matches_all_pairs() {
    for seed in 0..5 {
        let pts = random_points(400, 1280.0, 720.0, seed);
        let brute = scan_all_pairs(&pts, CONNECT_DISTANCE_SQ);
        let grid = scan_grid(&pts, CONNECT_DISTANCE_SQ);
        assert!(!brute.is_empty());
        assert_eq!(sorted_pairs(&brute), sorted_pairs(&grid));
    }
}

#[test]
fn grid_matches_all_pairs_with_points_outside_surface() {
    let mut pts = random_points(200, 600.0, 600.0, 42);
    pts.push(Vec2::new(-80.0, -20.0));
    pts.push(Vec2::new(650.0, 610.0));
    let brute = scan_all_pairs(&pts, CONNECT_DISTANCE_SQ);
    let grid = scan_grid(&pts, CONNECT_DISTANCE_SQ);
    assert_eq!(sorted_pairs(&brute), sorted_pairs(&grid));
}

#[test]
fn every_pair_is_ordered_and_below_threshold() {
    let pts = random_points(150, 500.0, 500.0, 8);
    for c in scan_all_pairs(&pts, CONNECT_DISTANCE_SQ) {
        assert!(c.a < c.b);
        assert!(c.distance_sq < CONNECT_DISTANCE_SQ);
        assert!(c.opacity > 0.0 && c.opacity <= 1.0);
    }
}

#[test]
fn threshold_is_compared_on_squared_distance() {
    // 141 apart: 19881 < 20000
    let near = [Vec2::ZERO, Vec2::new(141.0, 0.0)];
    assert_eq!(scan_all_pairs(&near, CONNECT_DISTANCE_SQ).len(), 1);
    // 142 apart: 20164 >= 20000
    let far = [Vec2::ZERO, Vec2::new(142.0, 0.0)];
    assert!(scan_all_pairs(&far, CONNECT_DISTANCE_SQ).is_empty());
}

#[test]
fn scan_dispatches_on_strategy() {
    let pts = random_points(50, 300.0, 300.0, 2);
    let a = scan(&pts, CONNECT_DISTANCE_SQ, ConnectionStrategy::AllPairs);
    let g = scan(&pts, CONNECT_DISTANCE_SQ, ConnectionStrategy::Grid);
    let auto = scan(&pts, CONNECT_DISTANCE_SQ, ConnectionStrategy::Auto);
    assert_eq!(sorted_pairs(&a), sorted_pairs(&g));
    // below the auto threshold the reference order is kept
    assert_eq!(a, auto);
}

#[test]
fn grid_strategy_field_draws_same_lines() {
    let cfg = FieldConfig {
        strategy: ConnectionStrategy::Grid,
        ..FieldConfig::default()
    };
    let mut grid_field = ParticleField::with_seed(cfg, 21);
    let mut brute_field = ParticleField::with_seed(FieldConfig::default(), 21);
    grid_field.initialize(900.0, 600.0);
    brute_field.initialize(900.0, 600.0);
    assert_eq!(
        sorted_pairs(&grid_field.connections()),
        sorted_pairs(&brute_field.connections())
    );
}
