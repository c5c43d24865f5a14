//! Distance and dominance primitives.
//!
//! Everything here is pure and total over finite inputs.

use crate::{Coordinate, Point, Rectangle};

/// Smallest Euclidean distance from `point` to any point of `mbr`.
///
/// Bounds are inclusive, so a point on an edge or corner is at distance 0.
pub fn mindist_point_to_mbr(mbr: &Rectangle, point: Coordinate) -> f64 {
    let inside_x = mbr.x_min <= point.x && point.x <= mbr.x_max;
    let inside_y = mbr.y_min <= point.y && point.y <= mbr.y_max;

    match (inside_x, inside_y) {
        (true, true) => 0.,
        (true, false) => axis_gap(point.y, mbr.y_min, mbr.y_max),
        (false, true) => axis_gap(point.x, mbr.x_min, mbr.x_max),
        (false, false) => {
            let dx = axis_gap(point.x, mbr.x_min, mbr.x_max);
            let dy = axis_gap(point.y, mbr.y_min, mbr.y_max);
            dx.hypot(dy)
        }
    }
}

fn axis_gap(value: f64, low: f64, high: f64) -> f64 {
    (value - low).abs().min((value - high).abs())
}

pub fn euclidean_distance(p1: Coordinate, p2: Coordinate) -> f64 {
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    dx.hypot(dy)
}

/// Whether smaller or larger values are preferred along one axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Minimize,
    Maximize,
}

impl Direction {
    /// Turns a coordinate into a cost where lower is always better.
    fn cost(self, value: f64) -> f64 {
        match self {
            Direction::Minimize => value,
            Direction::Maximize => -value,
        }
    }

    fn best_of(self, low: f64, high: f64) -> f64 {
        match self {
            Direction::Minimize => low,
            Direction::Maximize => high,
        }
    }
}

/// A two-criteria preference used for dominance and skylines.
///
/// The default minimizes x and maximizes y.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Preference {
    pub x: Direction,
    pub y: Direction,
}

impl Default for Preference {
    fn default() -> Self {
        Preference {
            x: Direction::Minimize,
            y: Direction::Maximize,
        }
    }
}

impl Preference {
    pub fn new(x: Direction, y: Direction) -> Self {
        Preference { x, y }
    }

    /// True iff `a` is at least as good as `b` on both axes and strictly
    /// better on one. Equal coordinates never dominate each other.
    pub fn dominates(&self, a: Coordinate, b: Coordinate) -> bool {
        let (ax, ay) = (self.x.cost(a.x), self.y.cost(a.y));
        let (bx, by) = (self.x.cost(b.x), self.y.cost(b.y));
        ax <= bx && ay <= by && (ax < bx || ay < by)
    }

    /// The corner of `mbr` that is at least as good as every point inside it.
    pub fn best_corner(&self, mbr: &Rectangle) -> Coordinate {
        Coordinate::new(
            self.x.best_of(mbr.x_min, mbr.x_max),
            self.y.best_of(mbr.y_min, mbr.y_max),
        )
    }

    /// Total cost of a coordinate. If `a` dominates `b` then
    /// `score(a) <= score(b)` for any finite inputs.
    pub fn score(&self, coord: Coordinate) -> f64 {
        self.x.cost(coord.x) + self.y.cost(coord.y)
    }

    /// Orders points best-first: by x preference, then y preference, then id.
    pub(crate) fn cmp_points(&self, a: &Point, b: &Point) -> std::cmp::Ordering {
        self.x
            .cost(a.x)
            .total_cmp(&self.x.cost(b.x))
            .then(self.y.cost(a.y).total_cmp(&self.y.cost(b.y)))
            .then(a.id.cmp(&b.id))
    }
}

/// Dominance under the default preference: `a.x <= b.x` and `a.y >= b.y`,
/// with at least one strict.
pub fn dominates(a: Coordinate, b: Coordinate) -> bool {
    Preference::default().dominates(a, b)
}
