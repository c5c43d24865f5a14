//! Branch-and-bound skyline (BBS).
//!
//! Nodes are expanded in order of the score of their best corner. A node
//! whose best corner is dominated by a skyline point found so far cannot
//! contain any skyline point and is skipped; there is no global stop, the
//! walk drains the frontier.

use crate::geometry::Preference;
use crate::traversal::{walk, TraversalPolicy, TraversalStats};
use crate::{Point, RTree, Rectangle};

struct SkylinePolicy {
    preference: Preference,
    skyline: Vec<Point>,
}

impl SkylinePolicy {
    fn is_dominated(&self, point: &Point) -> bool {
        let coord = point.coordinate();
        self.skyline
            .iter()
            .any(|s| self.preference.dominates(s.coordinate(), coord))
    }
}

impl TraversalPolicy for SkylinePolicy {
    fn score(&self, mbr: &Rectangle) -> f64 {
        self.preference.score(self.preference.best_corner(mbr))
    }

    fn admits(&self, mbr: &Rectangle, _score: f64) -> bool {
        let corner = self.preference.best_corner(mbr);
        !self
            .skyline
            .iter()
            .any(|s| self.preference.dominates(s.coordinate(), corner))
    }

    fn visit_leaf(&mut self, points: &[Point]) {
        for point in points {
            if self.is_dominated(point) {
                continue;
            }
            let preference = self.preference;
            let coord = point.coordinate();
            self.skyline
                .retain(|s| !preference.dominates(coord, s.coordinate()));
            self.skyline.push(*point);
        }
    }
}

/// Skyline under the default preference (minimize x, maximize y).
pub fn skyline(index: &RTree) -> Vec<Point> {
    skyline_with(index, Preference::default())
}

pub fn skyline_with(index: &RTree, preference: Preference) -> Vec<Point> {
    skyline_with_stats(index, preference).0
}

/// Skyline points sorted best-first, with traversal counters.
pub fn skyline_with_stats(index: &RTree, preference: Preference) -> (Vec<Point>, TraversalStats) {
    let mut policy = SkylinePolicy {
        preference,
        skyline: Vec::new(),
    };
    let stats = walk(index, &mut policy);
    let mut skyline = policy.skyline;
    skyline.sort_by(|a, b| preference.cmp_points(a, b));
    (skyline, stats)
}

/// Keep the points no other point in `points` dominates, sorted best-first.
pub fn dominance_filter(points: &[Point], preference: Preference) -> Vec<Point> {
    let mut survivors: Vec<Point> = points
        .iter()
        .filter(|p| {
            !points
                .iter()
                .any(|other| preference.dominates(other.coordinate(), p.coordinate()))
        })
        .copied()
        .collect();
    survivors.sort_by(|a, b| preference.cmp_points(a, b));
    survivors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build_index;
    use crate::geometry::Direction;

    fn ids(points: &[Point]) -> Vec<u64> {
        points.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_empty_index() {
        assert!(skyline(&RTree::default()).is_empty());
    }

    #[test]
    fn test_incomparable_points() {
        let points = vec![
            Point::new(1, 1., 1.),
            Point::new(2, 2., 2.),
            Point::new(3, 5., 1.),
        ];
        let tree = build_index(&points).unwrap();
        // (5, 1) is dominated by (2, 2)
        assert_eq!(ids(&skyline(&tree)), vec![1, 2]);

        let points = vec![
            Point::new(1, 1., 5.),
            Point::new(2, 2., 4.),
            Point::new(3, 5., 1.),
        ];
        let tree = build_index(&points).unwrap();
        // (1, 5) has the lowest x and the highest y.
        assert_eq!(ids(&skyline(&tree)), vec![1]);
        let min_min = Preference::new(Direction::Minimize, Direction::Minimize);
        assert_eq!(ids(&skyline_with(&tree, min_min)), vec![1, 2, 3]);
    }

    #[test]
    fn test_staircase() {
        // x grows with y: nobody dominates anybody.
        let points: Vec<Point> = (0..30)
            .map(|i| Point::new(i, i as f64, i as f64 * 2.))
            .collect();
        let tree = build_index(&points).unwrap();
        let result = skyline(&tree);
        assert_eq!(ids(&result), (0..30).collect::<Vec<u64>>());
    }

    #[test]
    fn test_prunes_dominated_subtrees() {
        let mut points: Vec<Point> = (0..200)
            .map(|i| Point::new(i, 10. + (i % 10) as f64, (i / 10) as f64))
            .collect();
        points.push(Point::new(1000, 0., 100.));
        let tree = build_index(&points).unwrap();
        let (result, stats) = skyline_with_stats(&tree, Preference::default());
        assert_eq!(ids(&result), vec![1000]);
        assert!(stats.entries_pruned > 0);
        assert_eq!(stats.leaves_visited, 1);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let points = vec![
            Point::new(1, 1., 1.),
            Point::new(2, 1., 1.),
            Point::new(3, 2., 0.),
        ];
        let tree = build_index(&points).unwrap();
        assert_eq!(ids(&skyline(&tree)), vec![1, 2]);
    }

    #[test]
    fn test_custom_preference() {
        let points = vec![
            Point::new(1, 1., 1.),
            Point::new(2, 2., 2.),
            Point::new(3, 3., 0.),
            Point::new(4, 0., 3.),
        ];
        let tree = build_index(&points).unwrap();
        let max_max = Preference::new(Direction::Maximize, Direction::Maximize);
        assert_eq!(ids(&skyline_with(&tree, max_max)), vec![3, 2, 4]);
        let min_min = Preference::new(Direction::Minimize, Direction::Minimize);
        assert_eq!(ids(&skyline_with(&tree, min_min)), vec![4, 1, 3]);
    }

    #[test]
    fn test_dominance_filter_is_idempotent() {
        let points: Vec<Point> = (0..50)
            .map(|i| Point::new(i, ((i * 7) % 13) as f64, ((i * 5) % 11) as f64))
            .collect();
        let once = dominance_filter(&points, Preference::default());
        let twice = dominance_filter(&once, Preference::default());
        assert_eq!(once, twice);
    }
}
