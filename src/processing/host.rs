//! Host adapter boundary: features in, records out, cancellation and
//! progress signals.

use crate::error::{MorphError, Result};
use crate::geometry::{Geometry, GeometryKind};
use crate::measure::{CoordinateTransform, DistanceMeasurer, MeasureMethod, MeasurerConfig};
use crate::shape::Outcome;
use std::borrow::Cow;

/// One attribute value of a feature record.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AttributeValue {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Double(f64),
    Text(String),
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        AttributeValue::Double(value)
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        AttributeValue::Bool(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        AttributeValue::Int(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::Text(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::Text(value)
    }
}

impl<T: Into<AttributeValue>> From<Option<T>> for AttributeValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(AttributeValue::Null, Into::into)
    }
}

/// Outcomes are written with their legacy numeric values.
impl From<Outcome> for AttributeValue {
    fn from(value: Outcome) -> Self {
        AttributeValue::Double(value.to_sentinel())
    }
}

/// A feature read from the host: attribute row and geometry.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Feature {
    pub attributes: Vec<AttributeValue>,
    pub geometry: Geometry,
}

impl Feature {
    pub fn new(attributes: Vec<AttributeValue>, geometry: Geometry) -> Self {
        Self {
            attributes,
            geometry,
        }
    }

    /// Returns `true` if the feature carries a non-empty geometry.
    pub fn has_geometry(&self) -> bool {
        !self.geometry.is_empty()
    }
}

/// Read access to an input layer.
pub trait FeatureSource {
    /// Layer name, used to name outputs.
    fn name(&self) -> &str;

    /// Geometry family of the layer, `None` if it has no geometry.
    fn geometry_kind(&self) -> Option<GeometryKind>;

    /// Number of attribute fields of the layer.
    fn field_count(&self) -> usize;

    fn feature_count(&self) -> usize;

    /// Iterates over the features in layer order.
    fn features(&self) -> Box<dyn Iterator<Item = Feature> + '_>;
}

/// Write access to an output layer.
pub trait FeatureSink {
    fn add_record(&mut self, attributes: Vec<AttributeValue>, geometry: Geometry);
}

impl FeatureSink for Vec<Feature> {
    fn add_record(&mut self, attributes: Vec<AttributeValue>, geometry: Geometry) {
        self.push(Feature::new(attributes, geometry));
    }
}

/// Cancellation and progress channel to the host.
pub trait Feedback {
    /// Polled between features.
    fn is_canceled(&self) -> bool {
        false
    }

    /// Reports progress in percent.
    fn set_progress(&mut self, _percent: f64) {}
}

/// Feedback that never cancels and ignores progress.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl Feedback for Silent {}

/// A layer held in memory.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MemoryLayer {
    pub name: String,
    pub kind: Option<GeometryKind>,
    pub field_count: usize,
    pub features: Vec<Feature>,
}

impl MemoryLayer {
    pub fn new(name: impl Into<String>, kind: GeometryKind, field_count: usize) -> Self {
        Self {
            name: name.into(),
            kind: Some(kind),
            field_count,
            features: Vec::new(),
        }
    }

    /// Adds a feature and returns the layer.
    pub fn with_feature(mut self, attributes: Vec<AttributeValue>, geometry: Geometry) -> Self {
        self.features.push(Feature::new(attributes, geometry));
        self
    }
}

impl FeatureSource for MemoryLayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn geometry_kind(&self) -> Option<GeometryKind> {
        self.kind
    }

    fn field_count(&self) -> usize {
        self.field_count
    }

    fn feature_count(&self) -> usize {
        self.features.len()
    }

    fn features(&self) -> Box<dyn Iterator<Item = Feature> + '_> {
        Box::new(self.features.iter().cloned())
    }
}

impl FeatureSink for MemoryLayer {
    fn add_record(&mut self, attributes: Vec<AttributeValue>, geometry: Geometry) {
        self.features.push(Feature::new(attributes, geometry));
    }
}

/// Run-wide settings supplied by the host.
#[derive(Clone, Default)]
pub struct RunContext<'a> {
    pub measure: MeasurerConfig,
    /// Reprojection into the project CRS, when the host has a project.
    pub project_transform: Option<&'a dyn CoordinateTransform>,
}

impl<'a> RunContext<'a> {
    /// Context measuring in the layer CRS.
    pub fn layer_crs() -> Self {
        Self::default()
    }

    pub fn new(measure: MeasurerConfig, project_transform: Option<&'a dyn CoordinateTransform>) -> Self {
        Self {
            measure,
            project_transform,
        }
    }

    /// Builds the measurer and picks the geometry transform for the run.
    pub(crate) fn measurement(&self) -> Result<Measurement<'a>> {
        let measurer = self.measure.build(self.project_transform)?;
        Ok(Measurement {
            measurer,
            projection: self.projection()?,
        })
    }

    /// Picks the geometry transform alone, for runs that measure nothing.
    ///
    /// Only the project CRS method needs anything from the host; the
    /// ellipsoid setting is ignored.
    pub(crate) fn projection(&self) -> Result<Projection<'a>> {
        match (self.measure.method, self.project_transform) {
            (MeasureMethod::ProjectCrs, None) => Err(MorphError::MissingProjectTransform),
            (MeasureMethod::ProjectCrs, transform) => Ok(Projection(transform)),
            _ => Ok(Projection(None)),
        }
    }
}

/// Optional reprojection into the coordinates a run works in.
#[derive(Clone, Copy)]
pub(crate) struct Projection<'a>(Option<&'a dyn CoordinateTransform>);

impl Projection<'_> {
    /// Returns the geometry in the coordinates of the run.
    pub fn project<'g>(&self, geometry: &'g Geometry) -> Cow<'g, Geometry> {
        match self.0 {
            Some(transform) => Cow::Owned(transform.transform_geometry(geometry)),
            None => Cow::Borrowed(geometry),
        }
    }
}

/// Measurer and optional reprojection, fixed for one run.
pub(crate) struct Measurement<'a> {
    pub measurer: Box<dyn DistanceMeasurer>,
    projection: Projection<'a>,
}

impl Measurement<'_> {
    /// Returns the geometry in the coordinates measures are taken in.
    pub fn project<'g>(&self, geometry: &'g Geometry) -> Cow<'g, Geometry> {
        self.projection.project(geometry)
    }
}

/// Extends `attributes` with nulls up to `width` values.
pub(crate) fn pad_row(mut attributes: Vec<AttributeValue>, width: usize) -> Vec<AttributeValue> {
    if attributes.len() < width {
        attributes.resize(width, AttributeValue::Null);
    }
    attributes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::Point2;

    #[test]
    fn test_attribute_conversions() {
        assert_eq!(AttributeValue::from(1.5), AttributeValue::Double(1.5));
        assert_eq!(AttributeValue::from(None::<f64>), AttributeValue::Null);
        assert_eq!(AttributeValue::from(Some(3_i64)), AttributeValue::Int(3));
        assert_eq!(
            AttributeValue::from(Outcome::NotComputable),
            AttributeValue::Double(-2.0)
        );
    }

    #[test]
    fn test_pad_row() {
        let row = pad_row(vec![AttributeValue::Int(1)], 3);
        assert_eq!(
            row,
            vec![AttributeValue::Int(1), AttributeValue::Null, AttributeValue::Null]
        );
        assert_eq!(pad_row(row.clone(), 2), row);
    }

    #[test]
    fn test_project_crs_transforms_geometry() {
        let shift = |p: Point2<f64>| Point2::new(p.x * 2.0, p.y);
        let ctx = RunContext::new(
            MeasurerConfig {
                method: MeasureMethod::ProjectCrs,
                ellipsoid: None,
            },
            Some(&shift),
        );
        let measurement = ctx.measurement().unwrap();
        let g = Geometry::LineString(vec![Point2::new(1.0, 1.0), Point2::new(2.0, 2.0)]);
        assert_eq!(
            measurement.project(&g).into_owned(),
            Geometry::LineString(vec![Point2::new(2.0, 1.0), Point2::new(4.0, 2.0)])
        );
    }

    #[test]
    fn test_layer_crs_ignores_transform() {
        let shift = |p: Point2<f64>| Point2::new(p.x + 1.0, p.y);
        let ctx = RunContext::new(MeasurerConfig::default(), Some(&shift));
        let measurement = ctx.measurement().unwrap();
        let g = Geometry::LineString(vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)]);
        assert!(matches!(measurement.project(&g), Cow::Borrowed(_)));
    }

    #[test]
    fn test_projection_skips_measurer_checks() {
        let ctx = RunContext::new(
            MeasurerConfig {
                method: MeasureMethod::Ellipsoidal,
                ellipsoid: None,
            },
            None,
        );
        assert_eq!(ctx.measurement().err(), Some(MorphError::MissingEllipsoid));

        let projection = ctx.projection().unwrap();
        let g = Geometry::LineString(vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)]);
        assert!(matches!(projection.project(&g), Cow::Borrowed(_)));
    }

    #[test]
    fn test_missing_project_is_fatal() {
        let ctx = RunContext::new(
            MeasurerConfig {
                method: MeasureMethod::ProjectCrs,
                ellipsoid: None,
            },
            None,
        );
        assert_eq!(
            ctx.measurement().err().map(|e| e.to_string()),
            Some(MorphError::MissingProjectTransform.to_string())
        );
    }

    #[test]
    fn test_memory_layer_round_trip() {
        let mut layer = MemoryLayer::new("roads", GeometryKind::Line, 1);
        layer.add_record(vec![AttributeValue::from("a")], Geometry::Empty);
        assert_eq!(layer.feature_count(), 1);
        assert!(!layer.features().next().unwrap().has_geometry());
    }
}
