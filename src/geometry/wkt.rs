//! Well-known-text rendering of line geometries.

use crate::primitives::{Point2, Segment2};
use std::fmt::Write;

/// Renders a point sequence as a WKT `LINESTRING`.
///
/// Coordinates use Rust's shortest round-trip formatting, so two point
/// sequences render identically exactly when their coordinates are equal
/// (with `-0` rendered as `0`).
pub fn points_wkt(points: &[Point2<f64>]) -> String {
    if points.is_empty() {
        return "LINESTRING EMPTY".to_string();
    }

    let mut out = String::from("LINESTRING(");
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        // Writing to a String cannot fail.
        let _ = write!(out, "{} {}", p.x + 0.0, p.y + 0.0);
    }
    out.push(')');
    out
}

/// Renders a segment as a two-point WKT `LINESTRING`.
///
/// # Example
///
/// ```
/// use morphometry::geometry::segment_wkt;
/// use morphometry::Segment2;
///
/// let s = Segment2::from_coords(0.0, 0.0, 10.5, -2.0);
/// assert_eq!(segment_wkt(&s), "LINESTRING(0 0, 10.5 -2)");
/// ```
pub fn segment_wkt(segment: &Segment2<f64>) -> String {
    points_wkt(&[segment.start, segment.end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(points_wkt(&[]), "LINESTRING EMPTY");
    }

    #[test]
    fn test_negative_zero_renders_as_zero() {
        let s = Segment2::from_coords(-0.0, 1.0, 2.0, -0.0);
        assert_eq!(segment_wkt(&s), "LINESTRING(0 1, 2 0)");
    }

    #[test]
    fn test_multi_point_line() {
        let line = [
            Point2::new(0.0, 0.0),
            Point2::new(1.25, 3.0),
            Point2::new(2.0, 2.0),
        ];
        assert_eq!(points_wkt(&line), "LINESTRING(0 0, 1.25 3, 2 2)");
    }
}
