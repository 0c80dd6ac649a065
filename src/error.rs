//! Error types for morphometry runs.
//!
//! Only run-level failures are errors. Degenerate geometries never raise:
//! they produce the in-band values documented on each descriptor.

use crate::geometry::GeometryKind;
use thiserror::Error;

/// Errors that abort a processing run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MorphError {
    /// Project-CRS measurement was requested without a reprojection context.
    #[error("no project coordinate transform is available in this context")]
    MissingProjectTransform,

    /// Ellipsoidal measurement was requested without an ellipsoid.
    #[error("ellipsoidal measurement requires an ellipsoid")]
    MissingEllipsoid,

    /// The requested ellipsoid is not supported.
    #[error("unsupported ellipsoid: {0}")]
    UnsupportedEllipsoid(String),

    /// The input layer has the wrong geometry family for the algorithm.
    #[error("layer geometry type {found:?} is not one of {expected:?}")]
    WrongGeometryType {
        /// Geometry families the algorithm accepts.
        expected: Vec<GeometryKind>,
        /// Geometry family of the input layer, if known.
        found: Option<GeometryKind>,
    },

    /// The input layer contains no feature.
    #[error("the layer doesn't contain any feature: no output provided")]
    EmptySource,

    /// A numeric parameter is outside its accepted range.
    #[error("parameter {name} = {value} is outside [{min}, {max}]")]
    ParameterOutOfRange {
        /// Parameter name.
        name: &'static str,
        /// Rejected value.
        value: f64,
        /// Inclusive lower bound.
        min: f64,
        /// Inclusive upper bound.
        max: f64,
    },
}

/// Result alias for run-level operations.
pub type Result<T> = std::result::Result<T, MorphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            MorphError::UnsupportedEllipsoid("GRS80".into()).to_string(),
            "unsupported ellipsoid: GRS80"
        );
        let err = MorphError::ParameterOutOfRange {
            name: "classification_step",
            value: 0.0,
            min: 0.001,
            max: 200.0,
        };
        assert!(err.to_string().contains("classification_step"));
    }
}
