//! Cartesian measures in the geometry's own coordinates.

use super::DistanceMeasurer;
use crate::geometry::Geometry;
use crate::polygon::ring_area;
use crate::primitives::{Point2, Segment2};

/// Euclidean lengths and shoelace areas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlanarMeasurer;

impl DistanceMeasurer for PlanarMeasurer {
    fn length(&self, segment: &Segment2<f64>) -> f64 {
        segment.length()
    }

    fn perimeter(&self, geometry: &Geometry) -> f64 {
        geometry
            .polygons()
            .into_iter()
            .flat_map(|polygon| polygon.rings())
            .map(path_length)
            .sum()
    }

    fn area(&self, geometry: &Geometry) -> f64 {
        geometry
            .polygons()
            .into_iter()
            .map(|polygon| {
                let holes: f64 = polygon.interiors.iter().map(|hole| ring_area(hole)).sum();
                (ring_area(&polygon.exterior) - holes).max(0.0)
            })
            .sum()
    }
}

fn path_length(points: &[Point2<f64>]) -> f64 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}
