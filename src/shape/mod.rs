//! Polygon shape descriptors.
//!
//! Descriptors never fail: degenerate input yields an in-band result. The
//! ternary ones return an [`Outcome`], which hosts that need the legacy
//! numeric attribute values map back with [`Outcome::to_sentinel`].
//!
//! # Example
//!
//! ```
//! use morphometry::geometry::{Geometry, Polygon};
//! use morphometry::measure::PlanarMeasurer;
//! use morphometry::shape::{is_rectangle, miller_compactness, Outcome};
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
//! let miller = miller_compactness(&square, &PlanarMeasurer);
//! assert!((miller - std::f64::consts::FRAC_PI_4).abs() < 1e-12);
//!
//! match is_rectangle(&square, 0.05, 0.05, &PlanarMeasurer) {
//!     Outcome::Value(orientation) => assert!((0.0..180.0).contains(&orientation)),
//!     other => panic!("expected an orientation, got {:?}", other),
//! }
//! ```

mod indicators;
mod rectangle;

pub use indicators::{polygon_indicators, Indicator, IndicatorSelection};
pub use rectangle::{
    is_rectangle, mbr_orientation, rectangle_indices, surface_distance, RectangleIndices,
};

use crate::geometry::Geometry;
use crate::measure::DistanceMeasurer;
use std::f64::consts::PI;

/// Result of a descriptor that may not apply to, or not be computable for,
/// a given geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    /// The descriptor value.
    Value(f64),
    /// The descriptor does not apply (legacy value `-1.0`).
    NotApplicable,
    /// A prerequisite geometry could not be built (legacy value `-2.0`).
    NotComputable,
}

impl Outcome {
    /// Maps the outcome to the legacy attribute value.
    #[inline]
    pub fn to_sentinel(self) -> f64 {
        match self {
            Outcome::Value(v) => v,
            Outcome::NotApplicable => -1.0,
            Outcome::NotComputable => -2.0,
        }
    }

    /// Returns the value, if any.
    #[inline]
    pub fn value(self) -> Option<f64> {
        match self {
            Outcome::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Applies `f` to the value, keeping the other variants.
    #[inline]
    pub fn map<T: FnOnce(f64) -> f64>(self, f: T) -> Outcome {
        match self {
            Outcome::Value(v) => Outcome::Value(f(v)),
            other => other,
        }
    }
}

/// Number of vertices of all rings or parts, closing vertices included.
///
/// A simple quadrilateral polygon has 5 vertices; an empty geometry has 0.
#[inline]
pub fn vertex_count(geometry: &Geometry) -> usize {
    geometry.vertex_count()
}

/// Ratio of the longer to the shorter of the first two edges.
///
/// Only defined for a single closed 4-sided ring (exactly 5 vertices);
/// any other geometry is [`Outcome::NotApplicable`]. A zero-length edge
/// makes the ratio [`Outcome::NotComputable`].
pub fn polygon_elongation(geometry: &Geometry) -> Outcome {
    if vertex_count(geometry) != 5 {
        return Outcome::NotApplicable;
    }

    let v: Vec<_> = geometry.vertices().take(3).collect();
    let first = v[0].distance(v[1]);
    let second = v[1].distance(v[2]);
    let (long, short) = if first >= second {
        (first, second)
    } else {
        (second, first)
    };

    if short <= 0.0 {
        return Outcome::NotComputable;
    }
    Outcome::Value(long / short)
}

/// Miller's compactness index, `4π·area / perimeter²`.
///
/// 1.0 for a disc. Returns 0.0 for fewer than 4 vertices or a zero perimeter.
pub fn miller_compactness(geometry: &Geometry, measurer: &dyn DistanceMeasurer) -> f64 {
    if vertex_count(geometry) < 4 {
        return 0.0;
    }
    miller_from_measures(measurer.perimeter(geometry), measurer.area(geometry))
}

/// Gravelius' compactness index, `perimeter / (2·√(π·area))`.
///
/// 1.0 for a disc. Returns 0.0 for fewer than 4 vertices, a zero perimeter
/// or a zero area.
pub fn gravelius_compactness(geometry: &Geometry, measurer: &dyn DistanceMeasurer) -> f64 {
    if vertex_count(geometry) < 4 {
        return 0.0;
    }
    gravelius_from_measures(measurer.perimeter(geometry), measurer.area(geometry))
}

/// Tests whether Miller's index reaches `threshold`.
pub fn is_circle(geometry: &Geometry, threshold: f64, measurer: &dyn DistanceMeasurer) -> bool {
    miller_compactness(geometry, measurer) >= threshold
}

pub(crate) fn miller_from_measures(perimeter: f64, area: f64) -> f64 {
    if perimeter == 0.0 {
        return 0.0;
    }
    4.0 * PI * area / (perimeter * perimeter)
}

pub(crate) fn gravelius_from_measures(perimeter: f64, area: f64) -> f64 {
    if perimeter == 0.0 || area == 0.0 {
        return 0.0;
    }
    perimeter / (2.0 * (PI * area).sqrt())
}
