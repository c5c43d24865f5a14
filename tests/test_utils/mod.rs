#![allow(dead_code)]

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use skyline_rtree::{euclidean_distance, Coordinate, Point, Preference, Rectangle};

//// Utility functions

pub(crate) fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub(crate) fn get_random_points(rect: Rectangle, n: usize, seed: u64) -> Vec<Point> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..n)
        .map(|i| {
            Point::new(
                i as u64,
                rng.gen_range(rect.x_min, rect.x_max),
                rng.gen_range(rect.y_min, rect.y_max),
            )
        })
        .collect()
}

/// Points on a small integer grid, so equal coordinates and exact distance
/// ties are common.
pub(crate) fn get_random_grid_points(size: i32, n: usize, seed: u64) -> Vec<Point> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..n)
        .map(|i| {
            Point::new(
                i as u64,
                rng.gen_range(0, size) as f64,
                rng.gen_range(0, size) as f64,
            )
        })
        .collect()
}

pub(crate) fn get_random_queries(rect: Rectangle, n: usize, seed: u64) -> Vec<Coordinate> {
    get_random_points(rect, n, seed)
        .iter()
        .map(|p| p.coordinate())
        .collect()
}

/// Linear scan: smallest distance, then smallest id.
pub(crate) fn sequential_nearest(points: &[Point], query: Coordinate) -> Point {
    let mut best = points[0];
    let mut best_distance = euclidean_distance(best.coordinate(), query);
    for &point in &points[1..] {
        let distance = euclidean_distance(point.coordinate(), query);
        if distance < best_distance || (distance == best_distance && point.id < best.id) {
            best = point;
            best_distance = distance;
        }
    }
    best
}

/// Quadratic scan; returns sorted ids.
pub(crate) fn sequential_skyline(points: &[Point], preference: Preference) -> Vec<u64> {
    let mut ids: Vec<u64> = points
        .iter()
        .filter(|p| {
            !points
                .iter()
                .any(|other| preference.dominates(other.coordinate(), p.coordinate()))
        })
        .map(|p| p.id)
        .collect();
    ids.sort_unstable();
    ids
}

pub(crate) fn sorted_ids(points: &[Point]) -> Vec<u64> {
    let mut ids: Vec<u64> = points.iter().map(|p| p.id).collect();
    ids.sort_unstable();
    ids
}

pub(crate) fn centered_square(half_width: f64) -> Rectangle {
    Rectangle::new((-half_width, -half_width).into(), (half_width, half_width).into())
}
