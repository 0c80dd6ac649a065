//! morphometry - Morphological descriptors for line and polygon features
//!
//! Shape indices for 2D geometries as used in spatial analysis of urban
//! fabric and landscapes: orientations, compactness and elongation indices,
//! rectangularity tests, median axes and boundary decomposition into
//! unique segments.
//!
//! The descriptor functions are pure and take a [`DistanceMeasurer`] for
//! every length and area they need, so the same code measures in layer
//! units, in a reprojected CRS or on the WGS84 ellipsoid. The
//! [`processing`] module runs them over whole layers through a small host
//! interface.
//!
//! # Example
//!
//! ```
//! use morphometry::geometry::{Geometry, Polygon};
//! use morphometry::measure::PlanarMeasurer;
//! use morphometry::shape::{miller_compactness, polygon_elongation, Outcome};
//! use morphometry::Point2;
//!
//! let parcel = Geometry::Polygon(Polygon::new(
//!     vec![
//!         Point2::new(0.0, 0.0),
//!         Point2::new(0.0, 1.0),
//!         Point2::new(4.0, 1.0),
//!         Point2::new(4.0, 0.0),
//!     ],
//!     vec![],
//! ));
//!
//! assert_eq!(polygon_elongation(&parcel), Outcome::Value(4.0));
//! let miller = miller_compactness(&parcel, &PlanarMeasurer);
//! assert!((miller - std::f64::consts::PI / 25.0 * 4.0).abs() < 1e-12);
//! ```
//!
//! [`DistanceMeasurer`]: measure::DistanceMeasurer

pub mod angle;
pub mod bounds;
pub mod error;
pub mod geometry;
pub mod hull;
pub mod measure;
pub mod median;
pub mod polygon;
pub mod primitives;
pub mod processing;
pub mod segments;
pub mod shape;

pub use error::{MorphError, Result};
pub use geometry::{Geometry, GeometryKind, Polygon};
pub use primitives::{compare_points, Point2, Segment2, Vec2};
