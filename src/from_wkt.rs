//! Read point sets written as WKT.

use wkt::{Geometry, Wkt};

use crate::error::{Error, Result};
use crate::Point;

/// Parse `POINT` and `MULTIPOINT` items into points numbered from 0 in
/// reading order. `POINT EMPTY` members are skipped; any other geometry is
/// an error.
pub fn points_from_wkt(text: &str) -> Result<Vec<Point>> {
    let parsed: Wkt<f64> = Wkt::from_str(text).map_err(|err| Error::Wkt(err.to_string()))?;

    let mut coords = Vec::new();
    for geometry in parsed.items {
        match geometry {
            Geometry::Point(point) => coords.extend(point.0),
            Geometry::MultiPoint(multi) => coords.extend(multi.0.into_iter().filter_map(|p| p.0)),
            _ => {
                return Err(Error::Wkt(
                    "only POINT and MULTIPOINT geometries hold points".to_string(),
                ))
            }
        }
    }

    Ok(coords
        .into_iter()
        .enumerate()
        .map(|(id, coord)| Point::new(id as u64, coord.x, coord.y))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multipoint() {
        let points = points_from_wkt("MULTIPOINT ((1 5), (2 4), (5 1))").unwrap();
        assert_eq!(
            points,
            vec![
                Point::new(0, 1., 5.),
                Point::new(1, 2., 4.),
                Point::new(2, 5., 1.)
            ]
        );
    }

    #[test]
    fn test_point() {
        let points = points_from_wkt("POINT (3 3)").unwrap();
        assert_eq!(points, vec![Point::new(0, 3., 3.)]);
    }

    #[test]
    fn test_rejects_other_geometries() {
        assert!(matches!(
            points_from_wkt("LINESTRING (0 0, 1 1)"),
            Err(Error::Wkt(_))
        ));
        assert!(matches!(points_from_wkt("POINT (1"), Err(Error::Wkt(_))));
    }
}
