//! Median axis of a geometry.
//!
//! The median is the segment joining the midpoints of the two shorter sides
//! of the minimum bounding rectangle. It carries the main orientation and
//! length of a shape.

use crate::angle::{angle_between, AngleInterval, AngleOptions, AngleUnit, OrientationOrigin};
use crate::bounds::MinimumBoundingRectangle;
use crate::geometry::Geometry;
use crate::hull::convex_hull;
use crate::measure::DistanceMeasurer;
use crate::primitives::{Point2, Segment2};
use crate::shape::Outcome;

/// The median axis of a geometry and its descriptors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Median {
    /// The axis, in canonical order.
    pub segment: Segment2<f64>,
    /// Orientation in degrees in `[0, 180)`, truncated to three decimals.
    pub orientation: f64,
    /// Measured length of the axis.
    pub length: f64,
    /// Elongation of the bounding rectangle; `NotComputable` for flat input.
    pub elongation: Outcome,
}

/// Computes the median axis of a geometry.
///
/// When all vertices are collinear the median spans the two extreme
/// vertices. Returns `None` for empty geometries and for geometries whose
/// vertices all coincide.
///
/// # Example
///
/// ```
/// use morphometry::angle::OrientationOrigin;
/// use morphometry::geometry::{Geometry, Polygon};
/// use morphometry::measure::PlanarMeasurer;
/// use morphometry::median::median_segment;
/// use morphometry::Point2;
///
/// let tall = Geometry::Polygon(Polygon::new(
///     vec![
///         Point2::new(0.0, 0.0),
///         Point2::new(0.0, 10.0),
///         Point2::new(2.0, 10.0),
///         Point2::new(2.0, 0.0),
///     ],
///     vec![],
/// ));
///
/// let east = median_segment(&tall, OrientationOrigin::East, &PlanarMeasurer).unwrap();
/// assert_eq!(east.orientation, 90.0);
/// let north = median_segment(&tall, OrientationOrigin::North, &PlanarMeasurer).unwrap();
/// assert_eq!(north.orientation, 0.0);
/// ```
pub fn median_segment(
    geometry: &Geometry,
    origin: OrientationOrigin,
    measurer: &dyn DistanceMeasurer,
) -> Option<Median> {
    let points: Vec<Point2<f64>> = geometry.vertices().collect();

    let (segment, elongation) = match MinimumBoundingRectangle::from_points(&points) {
        Some(mbr) => {
            let elongation = mbr
                .elongation()
                .map_or(Outcome::NotComputable, Outcome::Value);
            (mbr.long_axis(), elongation)
        }
        None => match convex_hull(&points).as_slice() {
            &[a, b] => (Segment2::normalized(a, b), Outcome::NotComputable),
            _ => return None,
        },
    };

    let options = AngleOptions {
        unit: AngleUnit::Degree,
        interval: AngleInterval::Full,
        origin,
        rounded: true,
    };

    Some(Median {
        segment,
        orientation: angle_between(segment.start, segment.end, &options),
        length: measurer.length(&segment),
        elongation,
    })
}
