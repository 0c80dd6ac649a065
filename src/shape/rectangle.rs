//! Rectangularity: surface distances to the convex hull and to the minimum
//! bounding rectangle, and the orientation of that rectangle.

use super::{polygon_elongation, Outcome};
use crate::bounds::MinimumBoundingRectangle;
use crate::geometry::{Geometry, Polygon};
use crate::hull::convex_hull_ring;
use crate::measure::DistanceMeasurer;
use crate::polygon::{clip_by_convex, Ring};
use crate::primitives::Point2;
use std::f64::consts::PI;

/// Diagnostic values behind the rectangle classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectangleIndices {
    /// Surface distance to the convex hull; `NotComputable` without a hull.
    pub sd_convex_hull: Outcome,
    /// Surface distance to the MBR; `NotComputable` without an MBR.
    pub sd_mbr: Outcome,
    /// MBR orientation in degrees; `NotApplicable` without an MBR.
    pub mbr_orientation: Outcome,
    /// Elongation of a simple quadrilateral, see [`polygon_elongation`].
    pub elongation: Outcome,
}

/// Surface distance `1 − |A∩B| / |A∪B|` between a geometry and a convex ring.
///
/// The ring may have either winding. Returns 1.0 when the intersection is
/// empty (disjoint or degenerate inputs) or the union has no area.
///
/// # Example
///
/// ```
/// use morphometry::geometry::{Geometry, Polygon};
/// use morphometry::measure::PlanarMeasurer;
/// use morphometry::polygon::Ring;
/// use morphometry::shape::surface_distance;
/// use morphometry::Point2;
///
/// let unit = |x: f64, y: f64| vec![
///     Point2::new(x, y),
///     Point2::new(x + 1.0, y),
///     Point2::new(x + 1.0, y + 1.0),
///     Point2::new(x, y + 1.0),
/// ];
///
/// let a = Geometry::Polygon(Polygon::new(unit(0.0, 0.0), vec![]));
/// assert_eq!(surface_distance(&a, &Ring::new(unit(0.0, 0.0)), &PlanarMeasurer), 0.0);
/// assert_eq!(surface_distance(&a, &Ring::new(unit(3.0, 3.0)), &PlanarMeasurer), 1.0);
/// ```
pub fn surface_distance(
    geometry: &Geometry,
    convex: &Ring<f64>,
    measurer: &dyn DistanceMeasurer,
) -> f64 {
    if geometry.is_empty() || convex.len() < 3 {
        return 1.0;
    }

    let intersection = intersect_convex(geometry, convex);
    if intersection.is_empty() {
        return 1.0;
    }

    let intersection_area = measurer.area(&intersection);
    let union_area =
        measurer.area(geometry) + measurer.area(&Geometry::from_ring(convex)) - intersection_area;
    if union_area <= 0.0 {
        return 1.0;
    }

    1.0 - intersection_area / union_area
}

/// Orientation of a minimum bounding rectangle, in degrees in `[0, 180)`.
///
/// The reference edge is the longer of the first two rectangle edges.
pub fn mbr_orientation(mbr: &MinimumBoundingRectangle<f64>) -> f64 {
    let [v0, v1, v2, _] = mbr.corners();
    let direction = if v0.distance_squared(v1) > v1.distance_squared(v2) {
        v0 - v1
    } else {
        v1 - v2
    };

    let mut angle = direction.angle_from_east();
    if angle < 0.0 {
        angle += PI;
    }
    if angle >= PI {
        angle = 0.0;
    }
    angle * 180.0 / PI
}

/// Classifies a polygon as a rectangle.
///
/// Returns the MBR orientation (degrees) when the surface distances to both
/// the convex hull and the MBR are within their thresholds,
/// [`Outcome::NotApplicable`] when they are not, and
/// [`Outcome::NotComputable`] when the hull or the MBR cannot be built
/// (for instance when all vertices are collinear).
pub fn is_rectangle(
    geometry: &Geometry,
    sd_convex_threshold: f64,
    sd_mbr_threshold: f64,
    measurer: &dyn DistanceMeasurer,
) -> Outcome {
    let points: Vec<Point2<f64>> = geometry.vertices().collect();
    let Some(hull) = convex_hull_ring(&points) else {
        return Outcome::NotComputable;
    };
    let Some(mbr) = MinimumBoundingRectangle::from_points(&points) else {
        return Outcome::NotComputable;
    };

    let sd_convex = surface_distance(geometry, &hull, measurer);
    let sd_mbr = surface_distance(geometry, &mbr.ring(), measurer);

    if sd_convex <= sd_convex_threshold && sd_mbr <= sd_mbr_threshold {
        Outcome::Value(mbr_orientation(&mbr))
    } else {
        Outcome::NotApplicable
    }
}

/// Computes every rectangle diagnostic independently, leaving the
/// thresholding to the caller.
pub fn rectangle_indices(geometry: &Geometry, measurer: &dyn DistanceMeasurer) -> RectangleIndices {
    let points: Vec<Point2<f64>> = geometry.vertices().collect();

    let sd_convex_hull = match convex_hull_ring(&points) {
        Some(hull) => Outcome::Value(surface_distance(geometry, &hull, measurer)),
        None => Outcome::NotComputable,
    };

    let (sd_mbr, mbr_orientation) = match MinimumBoundingRectangle::from_points(&points) {
        Some(mbr) => (
            Outcome::Value(surface_distance(geometry, &mbr.ring(), measurer)),
            Outcome::Value(self::mbr_orientation(&mbr)),
        ),
        None => (Outcome::NotComputable, Outcome::NotApplicable),
    };

    RectangleIndices {
        sd_convex_hull,
        sd_mbr,
        mbr_orientation,
        elongation: polygon_elongation(geometry),
    }
}

/// Clips every polygon of `geometry`, holes included, to a convex ring.
fn intersect_convex(geometry: &Geometry, convex: &Ring<f64>) -> Geometry {
    let clip = |points: &[Point2<f64>]| clip_by_convex(&Ring::from_closed(points), convex);

    let parts: Vec<Polygon> = geometry
        .polygons()
        .into_iter()
        .filter_map(|polygon| {
            let exterior = clip(polygon.exterior.as_slice());
            if exterior.len() < 3 {
                return None;
            }
            let holes = polygon
                .interiors
                .iter()
                .map(|hole| clip(hole.as_slice()))
                .filter(|hole| hole.len() >= 3)
                .map(|hole| hole.vertices)
                .collect();
            Some(Polygon::new(exterior.vertices, holes))
        })
        .collect();

    match parts.len() {
        0 => Geometry::Empty,
        _ => Geometry::MultiPolygon(parts),
    }
}
