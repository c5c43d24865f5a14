#![allow(dead_code)]

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use skyline_rtree::{Coordinate, Point};

//// Utility functions

pub(crate) fn get_random_points(n: usize, seed: u64) -> Vec<Point> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..n)
        .map(|i| {
            Point::new(
                i as u64,
                rng.gen_range(0., 1000.),
                rng.gen_range(0., 1000.),
            )
        })
        .collect()
}

pub(crate) fn get_random_queries(n: usize, seed: u64) -> Vec<Coordinate> {
    get_random_points(n, seed)
        .iter()
        .map(|p| p.coordinate())
        .collect()
}
