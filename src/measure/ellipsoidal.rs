//! Geodesic measures on an ellipsoid.
//!
//! Coordinates are longitude/latitude in degrees. Lengths are in metres and
//! areas in square metres, using Karney's algorithms as provided by `geo`.

use super::DistanceMeasurer;
use crate::error::{MorphError, Result};
use crate::geometry::{Geometry, Polygon};
use crate::primitives::{Point2, Segment2};
use geo::algorithm::geodesic_area::GeodesicArea;
use geo::algorithm::line_measures::metric_spaces::Geodesic;
use geo::algorithm::line_measures::{Distance, Length};
use geo::orient::{Direction, Orient};
use geo::{Coord, LineString, Point};

/// Supported reference ellipsoids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ellipsoid {
    Wgs84,
}

impl Ellipsoid {
    /// Resolves an ellipsoid acronym or authority id, case-insensitively.
    ///
    /// Accepts `WGS84` and `EPSG:7030`.
    pub fn from_acronym(name: &str) -> Result<Self> {
        match name.trim().to_ascii_uppercase().as_str() {
            "WGS84" | "WGS 84" | "EPSG:7030" => Ok(Ellipsoid::Wgs84),
            _ => Err(MorphError::UnsupportedEllipsoid(name.to_string())),
        }
    }
}

/// Geodesic lengths and areas on an ellipsoid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EllipsoidalMeasurer {
    ellipsoid: Ellipsoid,
}

impl EllipsoidalMeasurer {
    pub fn new(ellipsoid: Ellipsoid) -> Self {
        Self { ellipsoid }
    }

    pub fn ellipsoid(&self) -> Ellipsoid {
        self.ellipsoid
    }
}

impl DistanceMeasurer for EllipsoidalMeasurer {
    fn length(&self, segment: &Segment2<f64>) -> f64 {
        Geodesic.distance(to_point(segment.start), to_point(segment.end))
    }

    fn perimeter(&self, geometry: &Geometry) -> f64 {
        geometry
            .polygons()
            .into_iter()
            .flat_map(|polygon| polygon.rings())
            .map(|ring| Geodesic.length(&to_line_string(ring)))
            .sum()
    }

    fn area(&self, geometry: &Geometry) -> f64 {
        geometry
            .polygons()
            .into_iter()
            .filter(|polygon| polygon.exterior.len() >= 4)
            .map(|polygon| {
                to_geo_polygon(polygon)
                    .orient(Direction::Default)
                    .geodesic_area_unsigned()
            })
            .sum()
    }
}

fn to_point(p: Point2<f64>) -> Point<f64> {
    Point::new(p.x, p.y)
}

fn to_line_string(points: &[Point2<f64>]) -> LineString<f64> {
    points.iter().map(|p| Coord { x: p.x, y: p.y }).collect()
}

fn to_geo_polygon(polygon: &Polygon) -> geo::Polygon<f64> {
    geo::Polygon::new(
        to_line_string(&polygon.exterior),
        polygon
            .interiors
            .iter()
            .map(|hole| to_line_string(hole))
            .collect(),
    )
}
