//! Length, perimeter and area measurement.
//!
//! A [`DistanceMeasurer`] is configured once per run and then used read-only
//! for every feature. Which implementation is used depends on the
//! [`MeasureMethod`] the host selected:
//!
//! - `LayerCrs`: planar measures in the coordinates of the input layer
//! - `ProjectCrs`: planar measures after the host reprojects each geometry
//!   with its [`CoordinateTransform`]
//! - `Ellipsoidal`: geodesic measures on an ellipsoid, coordinates being
//!   longitude/latitude degrees
//!
//! # Example
//!
//! ```
//! use morphometry::measure::{MeasureMethod, MeasurerConfig};
//! use morphometry::Segment2;
//!
//! let measurer = MeasurerConfig::default().build(None).unwrap();
//! assert_eq!(measurer.length(&Segment2::from_coords(0.0, 0.0, 3.0, 4.0)), 5.0);
//!
//! let ellipsoidal = MeasurerConfig {
//!     method: MeasureMethod::Ellipsoidal,
//!     ellipsoid: None,
//! };
//! assert!(ellipsoidal.build(None).is_err());
//! ```

mod ellipsoidal;
mod planar;

pub use ellipsoidal::{Ellipsoid, EllipsoidalMeasurer};
pub use planar::PlanarMeasurer;

use crate::error::{MorphError, Result};
use crate::geometry::Geometry;
use crate::primitives::{Point2, Segment2};
use serde::Deserialize;

/// Measures lengths, perimeters and areas under one coordinate method.
pub trait DistanceMeasurer {
    /// Length of a segment.
    fn length(&self, segment: &Segment2<f64>) -> f64;

    /// Perimeter of a polygonal geometry: all rings, holes included.
    ///
    /// Zero for lines and empty geometries.
    fn perimeter(&self, geometry: &Geometry) -> f64;

    /// Area of a polygonal geometry, holes subtracted.
    ///
    /// Zero for lines and empty geometries.
    fn area(&self, geometry: &Geometry) -> f64;
}

/// Reprojection capability supplied by the host.
pub trait CoordinateTransform {
    /// Transforms one point into the target CRS.
    fn transform(&self, point: Point2<f64>) -> Point2<f64>;

    /// Transforms every vertex of a geometry.
    fn transform_geometry(&self, geometry: &Geometry) -> Geometry {
        geometry.map_points(|p| self.transform(p))
    }
}

impl<T> CoordinateTransform for T
where
    T: Fn(Point2<f64>) -> Point2<f64>,
{
    fn transform(&self, point: Point2<f64>) -> Point2<f64> {
        self(point)
    }
}

/// Coordinate method used for all measures of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasureMethod {
    /// Planar, in the input layer CRS.
    #[default]
    LayerCrs,
    /// Planar, in the project CRS (host reprojects each geometry).
    ProjectCrs,
    /// Geodesic, on an ellipsoid.
    Ellipsoidal,
}

/// Measurement settings for one run.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct MeasurerConfig {
    pub method: MeasureMethod,
    /// Ellipsoid acronym, required by the ellipsoidal method.
    pub ellipsoid: Option<String>,
}

impl MeasurerConfig {
    /// Builds the measurer for this configuration.
    ///
    /// `project_transform` is the host's reprojection context; it must be
    /// present when the project-CRS method is selected.
    ///
    /// # Errors
    ///
    /// - [`MorphError::MissingProjectTransform`] for `ProjectCrs` without a transform
    /// - [`MorphError::MissingEllipsoid`] for `Ellipsoidal` without an ellipsoid
    /// - [`MorphError::UnsupportedEllipsoid`] for an unknown ellipsoid acronym
    pub fn build(
        &self,
        project_transform: Option<&dyn CoordinateTransform>,
    ) -> Result<Box<dyn DistanceMeasurer>> {
        match self.method {
            MeasureMethod::LayerCrs => Ok(Box::new(PlanarMeasurer)),
            MeasureMethod::ProjectCrs => match project_transform {
                Some(_) => Ok(Box::new(PlanarMeasurer)),
                None => Err(MorphError::MissingProjectTransform),
            },
            MeasureMethod::Ellipsoidal => {
                let name = self.ellipsoid.as_deref().ok_or(MorphError::MissingEllipsoid)?;
                let ellipsoid = Ellipsoid::from_acronym(name)?;
                Ok(Box::new(EllipsoidalMeasurer::new(ellipsoid)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_layer_crs() {
        let config = MeasurerConfig::default();
        assert_eq!(config.method, MeasureMethod::LayerCrs);
        assert!(config.build(None).is_ok());
    }

    #[test]
    fn test_project_crs_requires_transform() {
        let config = MeasurerConfig {
            method: MeasureMethod::ProjectCrs,
            ellipsoid: None,
        };
        assert_eq!(
            config.build(None).err(),
            Some(MorphError::MissingProjectTransform)
        );

        let shift = |p: Point2<f64>| Point2::new(p.x + 1.0, p.y);
        assert!(config.build(Some(&shift)).is_ok());
    }

    #[test]
    fn test_ellipsoid_errors() {
        let missing = MeasurerConfig {
            method: MeasureMethod::Ellipsoidal,
            ellipsoid: None,
        };
        assert_eq!(missing.build(None).err(), Some(MorphError::MissingEllipsoid));

        let unknown = MeasurerConfig {
            method: MeasureMethod::Ellipsoidal,
            ellipsoid: Some("Bessel".into()),
        };
        assert_eq!(
            unknown.build(None).err(),
            Some(MorphError::UnsupportedEllipsoid("Bessel".into()))
        );

        let wgs84 = MeasurerConfig {
            method: MeasureMethod::Ellipsoidal,
            ellipsoid: Some("WGS84".into()),
        };
        assert!(wgs84.build(None).is_ok());
    }

    #[test]
    fn test_closure_transform_geometry() {
        let shift = |p: Point2<f64>| Point2::new(p.x + 1.0, p.y - 1.0);
        let g = Geometry::LineString(vec![Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)]);
        let moved = shift.transform_geometry(&g);
        assert_eq!(
            moved,
            Geometry::LineString(vec![Point2::new(1.0, -1.0), Point2::new(2.0, 0.0)])
        );
    }

    #[test]
    fn test_config_from_json() {
        let config: MeasurerConfig =
            serde_json::from_str(r#"{"method": "ellipsoidal", "ellipsoid": "EPSG:7030"}"#)
                .unwrap();
        assert_eq!(config.method, MeasureMethod::Ellipsoidal);
        assert!(config.build(None).is_ok());

        let empty: MeasurerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, MeasurerConfig::default());
    }
}
