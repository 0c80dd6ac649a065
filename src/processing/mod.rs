//! Batch algorithms over a layer of features.
//!
//! The host supplies a [`FeatureSource`], one or more [`FeatureSink`]s, a
//! [`Feedback`] channel and a [`RunContext`] holding the measurement
//! settings. Each algorithm validates the run configuration up front (a bad
//! configuration is a [`MorphError`](crate::MorphError)), then processes
//! features one at a time, polling for cancellation between features.
//! Degenerate geometries never abort a run.
//!
//! Output rows are the input attributes followed by the computed values,
//! padded with nulls to the full output width.
//!
//! # Example
//!
//! ```
//! use morphometry::geometry::{Geometry, GeometryKind, Polygon};
//! use morphometry::processing::{perimeter_area, AttributeValue, MemoryLayer, RunContext, Silent};
//! use morphometry::Point2;
//!
//! let parcels = MemoryLayer::new("parcels", GeometryKind::Polygon, 1).with_feature(
//!     vec![AttributeValue::Int(7)],
//!     Geometry::Polygon(Polygon::new(
//!         vec![
//!             Point2::new(0.0, 0.0),
//!             Point2::new(0.0, 2.0),
//!             Point2::new(3.0, 2.0),
//!             Point2::new(3.0, 0.0),
//!         ],
//!         vec![],
//!     )),
//! );
//!
//! let mut out = Vec::new();
//! let summary = perimeter_area(&parcels, &mut out, &RunContext::layer_crs(), &mut Silent).unwrap();
//!
//! assert_eq!(summary.records(), 1);
//! assert_eq!(
//!     out[0].attributes,
//!     vec![AttributeValue::Int(7), AttributeValue::Double(10.0), AttributeValue::Double(6.0)]
//! );
//! ```

mod algorithms;
mod host;
mod naming;

pub use algorithms::{
    geometry_to_medians, geometry_to_segments, perimeter_area, polygon_indicators,
    rectangular_characterisation, segment_orientation, MedianParams, RectangleLevel,
    RectangleParams, SegmentOrientationParams, SegmentParams, PERIMETER_AREA_FIELDS,
    RECTANGLE_FIELDS,
};
pub use host::{
    AttributeValue, Feature, FeatureSink, FeatureSource, Feedback, MemoryLayer, RunContext, Silent,
};
pub use naming::OutputLayerName;

/// One output layer produced by a run.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerOutput {
    /// Display name for the layer, if the algorithm names its output.
    pub name: Option<OutputLayerName>,
    /// Records written to the layer.
    pub records: usize,
}

/// What a run did.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RunSummary {
    /// Output layers, in sink order.
    pub outputs: Vec<LayerOutput>,
    /// Features read before the run ended.
    pub features_read: usize,
    /// Features for which nothing was computed.
    pub skipped: usize,
    /// Whether the host canceled the run.
    pub canceled: bool,
}

impl RunSummary {
    /// Total records written across all outputs.
    pub fn records(&self) -> usize {
        self.outputs.iter().map(|output| output.records).sum()
    }
}
