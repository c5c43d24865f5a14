use crate::error::{Error, Result};
use crate::geometry::{euclidean_distance, mindist_point_to_mbr};
use crate::traversal::{walk, TraversalPolicy, TraversalStats};
use crate::{Coordinate, Point, RTree, Rectangle};

/// A nearest-neighbor answer together with its distance to the query.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Nearest {
    pub point: Point,
    pub distance: f64,
}

impl Nearest {
    /// Closer wins; at equal distance the lower id wins.
    pub(crate) fn is_better_than(&self, other: &Nearest) -> bool {
        match self.distance.total_cmp(&other.distance) {
            std::cmp::Ordering::Less => true,
            std::cmp::Ordering::Equal => self.point.id < other.point.id,
            std::cmp::Ordering::Greater => false,
        }
    }
}

struct NearestPolicy {
    query: Coordinate,
    best: Option<Nearest>,
}

impl TraversalPolicy for NearestPolicy {
    fn score(&self, mbr: &Rectangle) -> f64 {
        mindist_point_to_mbr(mbr, self.query)
    }

    // A subtree exactly as far as the best may still hold a lower id, so
    // only strictly farther entries are cut.
    fn admits(&self, _mbr: &Rectangle, score: f64) -> bool {
        self.best.map_or(true, |best| score <= best.distance)
    }

    fn visit_leaf(&mut self, points: &[Point]) {
        for &point in points {
            let candidate = Nearest {
                point,
                distance: euclidean_distance(point.coordinate(), self.query),
            };
            if self.best.map_or(true, |best| candidate.is_better_than(&best)) {
                self.best = Some(candidate);
            }
        }
    }

    fn is_settled(&self, next_score: f64) -> bool {
        self.best.map_or(false, |best| next_score > best.distance)
    }
}

/// Best-first nearest-neighbor search, with traversal counters.
pub fn nearest_neighbor_with_stats(
    index: &RTree,
    query: Coordinate,
) -> Result<(Nearest, TraversalStats)> {
    let mut policy = NearestPolicy { query, best: None };
    let stats = walk(index, &mut policy);
    policy
        .best
        .map(|nearest| (nearest, stats))
        .ok_or(Error::EmptyIndex)
}

/// The indexed point closest to `query`; equidistant points resolve to the
/// lowest id.
pub fn nearest_neighbor(index: &RTree, query: Coordinate) -> Result<Point> {
    nearest_neighbor_with_stats(index, query).map(|(nearest, _)| nearest.point)
}

/// Answer each query independently, in order.
pub fn nearest_neighbors(index: &RTree, queries: &[Coordinate]) -> Result<Vec<Point>> {
    queries
        .iter()
        .map(|&query| nearest_neighbor(index, query))
        .collect()
}
