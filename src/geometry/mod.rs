//! Feature geometries: lines, multipart lines and polygons with holes.
//!
//! These are the values a host hands over for one feature. Polygon rings are
//! stored closed (first vertex repeated at the end), so vertex counts match
//! what GIS tooling reports: a simple rectangle has 5 vertices.
//!
//! # Example
//!
//! ```
//! use morphometry::geometry::{Geometry, Polygon};
//! use morphometry::Point2;
//!
//! let square = Geometry::Polygon(Polygon::new(
//!     vec![
//!         Point2::new(0.0, 0.0),
//!         Point2::new(0.0, 10.0),
//!         Point2::new(10.0, 10.0),
//!         Point2::new(10.0, 0.0),
//!     ],
//!     vec![],
//! ));
//!
//! assert_eq!(square.vertex_count(), 5);
//! assert_eq!(square.parts().len(), 1);
//! ```

mod wkt;

pub use wkt::{points_wkt, segment_wkt};

use crate::polygon::Ring;
use crate::primitives::Point2;
use serde::Deserialize;

/// Broad geometry family of a feature or a layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeometryKind {
    Line,
    Polygon,
}

/// A polygon: one exterior ring and zero or more holes, all closed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon {
    pub exterior: Vec<Point2<f64>>,
    pub interiors: Vec<Vec<Point2<f64>>>,
}

impl Polygon {
    /// Creates a polygon, closing any ring whose last vertex differs from its first.
    pub fn new(exterior: Vec<Point2<f64>>, interiors: Vec<Vec<Point2<f64>>>) -> Self {
        Self {
            exterior: close_ring(exterior),
            interiors: interiors.into_iter().map(close_ring).collect(),
        }
    }

    /// Iterates over the exterior ring followed by every hole.
    pub fn rings(&self) -> impl Iterator<Item = &[Point2<f64>]> + '_ {
        std::iter::once(self.exterior.as_slice()).chain(self.interiors.iter().map(Vec::as_slice))
    }

    /// Returns `true` if the exterior ring has no vertices.
    pub fn is_empty(&self) -> bool {
        self.exterior.is_empty()
    }
}

fn close_ring(mut ring: Vec<Point2<f64>>) -> Vec<Point2<f64>> {
    if let (Some(&first), Some(&last)) = (ring.first(), ring.last()) {
        if first != last {
            ring.push(first);
        }
    }
    ring
}

/// The geometry of one feature.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Geometry {
    /// Null or empty geometry.
    #[default]
    Empty,
    LineString(Vec<Point2<f64>>),
    MultiLineString(Vec<Vec<Point2<f64>>>),
    Polygon(Polygon),
    MultiPolygon(Vec<Polygon>),
}

impl Geometry {
    /// Returns the geometry family, or `None` for an empty geometry.
    pub fn kind(&self) -> Option<GeometryKind> {
        match self {
            Geometry::Empty => None,
            Geometry::LineString(_) | Geometry::MultiLineString(_) => Some(GeometryKind::Line),
            Geometry::Polygon(_) | Geometry::MultiPolygon(_) => Some(GeometryKind::Polygon),
        }
    }

    /// Returns `true` if the geometry carries no vertex at all.
    pub fn is_empty(&self) -> bool {
        self.vertex_count() == 0
    }

    /// Returns every line part or polygon ring, in traversal order.
    ///
    /// Polygons contribute their exterior ring then their holes; multipart
    /// geometries contribute their members in order.
    pub fn parts(&self) -> Vec<&[Point2<f64>]> {
        match self {
            Geometry::Empty => Vec::new(),
            Geometry::LineString(line) => vec![line.as_slice()],
            Geometry::MultiLineString(lines) => lines.iter().map(Vec::as_slice).collect(),
            Geometry::Polygon(polygon) => polygon.rings().collect(),
            Geometry::MultiPolygon(polygons) => polygons.iter().flat_map(Polygon::rings).collect(),
        }
    }

    /// Returns the polygons of a polygonal geometry (empty for lines).
    pub fn polygons(&self) -> Vec<&Polygon> {
        match self {
            Geometry::Polygon(polygon) => vec![polygon],
            Geometry::MultiPolygon(polygons) => polygons.iter().collect(),
            _ => Vec::new(),
        }
    }

    /// Iterates over all vertices, closing vertices of rings included.
    pub fn vertices(&self) -> impl Iterator<Item = Point2<f64>> + '_ {
        self.parts().into_iter().flat_map(|part| part.iter().copied())
    }

    /// Counts all vertices, closing vertices of rings included.
    pub fn vertex_count(&self) -> usize {
        self.parts().iter().map(|part| part.len()).sum()
    }

    /// Applies `f` to every vertex, keeping the structure.
    ///
    /// Used by hosts to reproject a geometry before measuring it.
    pub fn map_points<T>(&self, mut f: T) -> Geometry
    where
        T: FnMut(Point2<f64>) -> Point2<f64>,
    {
        let mut map_line = |line: &Vec<Point2<f64>>| line.iter().map(|&p| f(p)).collect::<Vec<_>>();
        match self {
            Geometry::Empty => Geometry::Empty,
            Geometry::LineString(line) => Geometry::LineString(map_line(line)),
            Geometry::MultiLineString(lines) => {
                Geometry::MultiLineString(lines.iter().map(&mut map_line).collect())
            }
            Geometry::Polygon(polygon) => Geometry::Polygon(Polygon {
                exterior: map_line(&polygon.exterior),
                interiors: polygon.interiors.iter().map(&mut map_line).collect(),
            }),
            Geometry::MultiPolygon(polygons) => Geometry::MultiPolygon(
                polygons
                    .iter()
                    .map(|polygon| Polygon {
                        exterior: map_line(&polygon.exterior),
                        interiors: polygon.interiors.iter().map(&mut map_line).collect(),
                    })
                    .collect(),
            ),
        }
    }

    /// Builds a single-ring polygon geometry from a closed or open ring.
    pub fn from_ring(ring: &Ring<f64>) -> Geometry {
        if ring.is_empty() {
            Geometry::Empty
        } else {
            Geometry::Polygon(Polygon::new(ring.vertices.clone(), Vec::new()))
        }
    }
}

impl From<Polygon> for Geometry {
    fn from(polygon: Polygon) -> Self {
        Geometry::Polygon(polygon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x0: f64, y0: f64, size: f64) -> Polygon {
        Polygon::new(
            vec![
                Point2::new(x0, y0),
                Point2::new(x0, y0 + size),
                Point2::new(x0 + size, y0 + size),
                Point2::new(x0 + size, y0),
            ],
            vec![],
        )
    }

    #[test]
    fn test_polygon_new_closes_rings() {
        let polygon = square(0.0, 0.0, 1.0);
        assert_eq!(polygon.exterior.len(), 5);
        assert_eq!(polygon.exterior.first(), polygon.exterior.last());
    }

    #[test]
    fn test_polygon_new_keeps_closed_ring() {
        let ring = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
            Point2::new(0.0, 0.0),
        ];
        let polygon = Polygon::new(ring.clone(), vec![]);
        assert_eq!(polygon.exterior, ring);
    }

    #[test]
    fn test_empty_geometry() {
        let g = Geometry::Empty;
        assert!(g.is_empty());
        assert_eq!(g.kind(), None);
        assert_eq!(g.vertex_count(), 0);
        assert!(g.parts().is_empty());
    }

    #[test]
    fn test_parts_include_holes() {
        let mut outer = square(0.0, 0.0, 10.0);
        outer.interiors.push(square(2.0, 2.0, 2.0).exterior);
        let g = Geometry::Polygon(outer);
        assert_eq!(g.parts().len(), 2);
        assert_eq!(g.vertex_count(), 10);
        assert_eq!(g.kind(), Some(GeometryKind::Polygon));
    }

    #[test]
    fn test_multipolygon_parts_in_order() {
        let g = Geometry::MultiPolygon(vec![square(0.0, 0.0, 1.0), square(5.0, 5.0, 1.0)]);
        let parts = g.parts();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[1][0], Point2::new(5.0, 5.0));
    }

    #[test]
    fn test_multiline_vertices() {
        let g = Geometry::MultiLineString(vec![
            vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)],
            vec![Point2::new(2.0, 0.0), Point2::new(3.0, 0.0), Point2::new(4.0, 1.0)],
        ]);
        assert_eq!(g.kind(), Some(GeometryKind::Line));
        let xs: Vec<f64> = g.vertices().map(|p| p.x).collect();
        assert_eq!(xs, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_map_points_translates() {
        let g = Geometry::Polygon(square(0.0, 0.0, 1.0));
        let moved = g.map_points(|p| Point2::new(p.x + 10.0, p.y));
        assert!(moved.vertices().all(|p| p.x >= 10.0));
        assert_eq!(moved.vertex_count(), g.vertex_count());
    }
}
