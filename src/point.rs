use crate::error::{Error, Result};
use crate::Coordinate;

/// An indexed point. Ids are opaque to the index but must be unique within
/// one point set; they are the final tie-breaker of every query.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Point {
    pub id: u64,
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(id: u64, x: f64, y: f64) -> Self {
        Point { id, x, y }
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.x, self.y)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.coordinate().is_finite() {
            Ok(())
        } else {
            Err(Error::InvalidPoint {
                id: self.id,
                x: self.x,
                y: self.y,
            })
        }
    }
}

impl From<Point> for Coordinate {
    fn from(point: Point) -> Self {
        point.coordinate()
    }
}

impl From<(u64, f64, f64)> for Point {
    fn from((id, x, y): (u64, f64, f64)) -> Self {
        Point { id, x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        assert!(Point::new(1, 3., -2.).validate().is_ok());
        assert_eq!(
            Point::new(7, f64::INFINITY, 0.).validate(),
            Err(Error::InvalidPoint {
                id: 7,
                x: f64::INFINITY,
                y: 0.
            })
        );
        assert!(Point::new(8, 0., f64::NAN).validate().is_err());
    }
}
