//! Divide-and-conquer query drivers.
//!
//! The input is split at the median x, each half gets its own index, and the
//! per-half answers are merged. The halves share nothing mutable, so they
//! are built and searched on two scoped threads.

use std::panic;
use std::thread;

use log::debug;

use crate::error::{Error, Result};
use crate::geometry::Preference;
use crate::nearest::{nearest_neighbor_with_stats, Nearest};
use crate::skyline::{dominance_filter, skyline_with};
use crate::{build_index, Coordinate, Point, RTree};

/// Sort by x (stable) and cut after the first `len / 2` points.
pub fn split_by_median_x(points: &[Point]) -> (Vec<Point>, Vec<Point>) {
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| a.x.total_cmp(&b.x));
    let upper = sorted.split_off(sorted.len() / 2);
    (sorted, upper)
}

/// Run `job` on both halves, the upper half on a second thread.
fn on_both_halves<T, F>(lower: &[Point], upper: &[Point], job: F) -> (T, T)
where
    T: Send,
    F: Fn(&[Point]) -> T + Sync,
{
    thread::scope(|scope| {
        let upper_job = scope.spawn(|| job(upper));
        let lower_result = job(lower);
        match upper_job.join() {
            Ok(upper_result) => (lower_result, upper_result),
            Err(payload) => panic::resume_unwind(payload),
        }
    })
}

fn split_validated(points: &[Point]) -> Result<(Vec<Point>, Vec<Point>)> {
    // Validate up front so the reported point is the first bad one in input
    // order, whichever half it lands in.
    points.iter().try_for_each(Point::validate)?;
    let (lower, upper) = split_by_median_x(points);
    debug!(
        "Split {} points at median x: {} / {}",
        points.len(),
        lower.len(),
        upper.len()
    );
    Ok((lower, upper))
}

fn nearest_in(tree: &RTree, query: Coordinate) -> Result<Option<Nearest>> {
    match nearest_neighbor_with_stats(tree, query) {
        Ok((nearest, _)) => Ok(Some(nearest)),
        Err(Error::EmptyIndex) => Ok(None),
        Err(err) => Err(err),
    }
}

/// Answer every query against two half indexes and keep the better answer.
///
/// Answers compare by distance, then id. Only an exact tie on both keeps
/// the lower-x half's point.
pub fn divide_and_conquer_nearest_neighbor(
    points: &[Point],
    queries: &[Coordinate],
) -> Result<Vec<Point>> {
    let (lower, upper) = split_validated(points)?;
    let (lower_tree, upper_tree) = on_both_halves(&lower, &upper, build_index);
    let (lower_tree, upper_tree) = (lower_tree?, upper_tree?);

    queries
        .iter()
        .map(|&query| {
            let low = nearest_in(&lower_tree, query)?;
            let high = nearest_in(&upper_tree, query)?;
            let merged = match (low, high) {
                (Some(low), Some(high)) => {
                    if high.is_better_than(&low) {
                        high
                    } else {
                        low
                    }
                }
                (Some(only), None) | (None, Some(only)) => only,
                (None, None) => return Err(Error::EmptyIndex),
            };
            Ok(merged.point)
        })
        .collect()
}

/// Skyline under the default preference, computed per half and merged.
pub fn divide_and_conquer_skyline(points: &[Point]) -> Result<Vec<Point>> {
    divide_and_conquer_skyline_with(points, Preference::default())
}

/// Per-half skylines, then a dominance re-filter over their union: a point
/// undominated in its own half can still be dominated from the other half.
pub fn divide_and_conquer_skyline_with(
    points: &[Point],
    preference: Preference,
) -> Result<Vec<Point>> {
    let (lower, upper) = split_validated(points)?;
    let (lower_skyline, upper_skyline) = on_both_halves(&lower, &upper, |half| {
        build_index(half).map(|tree| skyline_with(&tree, preference))
    });

    let mut union = lower_skyline?;
    union.extend(upper_skyline?);
    let merged = dominance_filter(&union, preference);
    debug!(
        "Merged half skylines: {} candidates, {} survive",
        union.len(),
        merged.len()
    );
    Ok(merged)
}
