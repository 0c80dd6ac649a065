//! The six batch algorithms.

use super::host::{pad_row, AttributeValue, Feature, FeatureSink, FeatureSource, Feedback, RunContext};
use super::naming::OutputLayerName;
use super::{LayerOutput, RunSummary};
use crate::angle::{line_angle, orientation_class, AngleOptions, OrientationOrigin};
use crate::error::{MorphError, Result};
use crate::geometry::{Geometry, GeometryKind};
use crate::median::median_segment;
use crate::segments::{decompose_into, SegmentDeduper};
use crate::shape::{self, is_circle, miller_compactness, polygon_elongation, rectangle_indices, IndicatorSelection};
use serde::Deserialize;
use tracing::{debug, info, warn};

/// Fields appended by [`perimeter_area`].
pub const PERIMETER_AREA_FIELDS: [&str; 2] = ["perimeter", "area"];

/// Fields appended by [`rectangular_characterisation`].
pub const RECTANGLE_FIELDS: [&str; 6] = [
    "SD_CONVEX",
    "SD_MBR",
    "ORIENT_REC",
    "MILLER_IND",
    "CIRCLE",
    "ELONGATION",
];

/// Parameters of [`segment_orientation`].
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct SegmentOrientationParams {
    pub angle: AngleOptions,
    /// Also write the orientation class.
    pub classification: bool,
    /// Width of an orientation class, in the angle unit.
    pub classification_step: f64,
}

impl Default for SegmentOrientationParams {
    fn default() -> Self {
        Self {
            angle: AngleOptions::default(),
            classification: false,
            classification_step: 10.0,
        }
    }
}

impl SegmentOrientationParams {
    /// Fields appended to each record.
    pub fn fields(&self) -> Vec<&'static str> {
        if self.classification {
            vec!["orientation", "classification"]
        } else {
            vec!["orientation"]
        }
    }

    fn validate(&self) -> Result<()> {
        if self.classification {
            check_range("classification_step", self.classification_step, 0.001, 200.0)?;
        }
        Ok(())
    }
}

/// One level of [`rectangular_characterisation`].
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct RectangleLevel {
    pub enabled: bool,
    /// Maximum surface distance to the convex hull.
    pub sd_convex: f64,
    /// Maximum surface distance to the minimum bounding rectangle.
    pub sd_mbr: f64,
}

impl Default for RectangleLevel {
    fn default() -> Self {
        Self::new(0.05)
    }
}

impl RectangleLevel {
    /// An enabled level using `threshold` for both surface distances.
    pub fn new(threshold: f64) -> Self {
        Self {
            enabled: true,
            sd_convex: threshold,
            sd_mbr: threshold,
        }
    }

    fn accepts(&self, sd_convex: f64, sd_mbr: f64) -> bool {
        sd_convex <= self.sd_convex && sd_mbr <= self.sd_mbr
    }
}

/// Parameters of [`rectangular_characterisation`].
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct RectangleParams {
    /// Levels from the strictest to the loosest.
    pub levels: [RectangleLevel; 3],
    /// Miller index from which a shape is a circle.
    pub miller_threshold: f64,
}

impl Default for RectangleParams {
    fn default() -> Self {
        Self {
            levels: [
                RectangleLevel::new(0.05),
                RectangleLevel::new(0.1),
                RectangleLevel::new(0.15),
            ],
            miller_threshold: 0.9,
        }
    }
}

impl RectangleParams {
    fn validate(&self) -> Result<()> {
        for level in &self.levels {
            check_range("sd_convex", level.sd_convex, 0.0, 1.0)?;
            check_range("sd_mbr", level.sd_mbr, 0.0, 1.0)?;
        }
        check_range("miller_threshold", self.miller_threshold, 0.0, 1.0)
    }
}

/// Parameters of [`geometry_to_segments`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SegmentParams {
    /// Write each segment once per run.
    pub unique: bool,
}

impl Default for SegmentParams {
    fn default() -> Self {
        Self { unique: true }
    }
}

/// Parameters of [`geometry_to_medians`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct MedianParams {
    pub origin: OrientationOrigin,
}

impl MedianParams {
    /// Fields appended to each record.
    pub fn fields(&self) -> Vec<&'static str> {
        vec![self.origin.field_name(), "LENGTH", "ELONGATION"]
    }
}

/// Writes the perimeter and area of every polygon.
pub fn perimeter_area(
    source: &dyn FeatureSource,
    sink: &mut dyn FeatureSink,
    ctx: &RunContext<'_>,
    feedback: &mut dyn Feedback,
) -> Result<RunSummary> {
    const ALGORITHM: &str = "perimeter_area";
    check_source(source, &[GeometryKind::Polygon], false, ALGORITHM)?;
    let measurement = ctx.measurement()?;
    let width = source.field_count() + PERIMETER_AREA_FIELDS.len();
    started(ALGORITHM, source);

    let mut records = 0;
    let progress = for_each_feature(source, feedback, |index, feature| {
        let (mut attributes, geometry) = split(feature, source.field_count());
        let step = if geometry.is_empty() {
            debug!(algorithm = ALGORITHM, index, "feature has no geometry");
            Step::Skipped
        } else {
            let projected = measurement.project(&geometry);
            attributes.push(measurement.measurer.perimeter(&projected).into());
            attributes.push(measurement.measurer.area(&projected).into());
            Step::Done
        };
        sink.add_record(pad_row(attributes, width), geometry);
        records += 1;
        step
    });

    Ok(finished(ALGORITHM, progress, vec![LayerOutput { name: None, records }]))
}

/// Writes the orientation, and optionally its class, of every 2-point line.
///
/// Lines with more or fewer than two vertices get null values.
pub fn segment_orientation(
    source: &dyn FeatureSource,
    sink: &mut dyn FeatureSink,
    params: &SegmentOrientationParams,
    ctx: &RunContext<'_>,
    feedback: &mut dyn Feedback,
) -> Result<RunSummary> {
    const ALGORITHM: &str = "segment_orientation";
    check_source(source, &[GeometryKind::Line], false, ALGORITHM)?;
    params.validate()?;
    let projection = ctx.projection()?;
    let width = source.field_count() + params.fields().len();
    started(ALGORITHM, source);

    let mut records = 0;
    let progress = for_each_feature(source, feedback, |index, feature| {
        let (mut attributes, geometry) = split(feature, source.field_count());
        let orientation = line_angle(&projection.project(&geometry), &params.angle);
        let step = match orientation {
            Some(orientation) => {
                attributes.push(orientation.into());
                if params.classification {
                    let class = orientation_class(orientation, params.classification_step);
                    attributes.push((class as f64).into());
                }
                Step::Done
            }
            None => {
                debug!(algorithm = ALGORITHM, index, "feature is not a 2-point line");
                Step::Skipped
            }
        };
        sink.add_record(pad_row(attributes, width), geometry);
        records += 1;
        step
    });

    Ok(finished(ALGORITHM, progress, vec![LayerOutput { name: None, records }]))
}

/// Writes the selected morphological indicators of every polygon.
pub fn polygon_indicators(
    source: &dyn FeatureSource,
    sink: &mut dyn FeatureSink,
    selection: &IndicatorSelection,
    ctx: &RunContext<'_>,
    feedback: &mut dyn Feedback,
) -> Result<RunSummary> {
    const ALGORITHM: &str = "polygon_indicators";
    check_source(source, &[GeometryKind::Polygon], false, ALGORITHM)?;
    let measurement = ctx.measurement()?;
    let width = source.field_count() + selection.selected().len();
    started(ALGORITHM, source);

    let mut records = 0;
    let progress = for_each_feature(source, feedback, |index, feature| {
        let (mut attributes, geometry) = split(feature, source.field_count());
        let values = if geometry.is_empty() {
            Vec::new()
        } else {
            let projected = measurement.project(&geometry);
            shape::polygon_indicators(&projected, selection, measurement.measurer.as_ref())
        };
        let step = if values.is_empty() {
            debug!(algorithm = ALGORITHM, index, "no indicator for this feature");
            Step::Skipped
        } else {
            Step::Done
        };
        attributes.extend(values.into_iter().map(|(_, value)| AttributeValue::from(value)));
        sink.add_record(pad_row(attributes, width), geometry);
        records += 1;
        step
    });

    let name = OutputLayerName::indicators(source.name());
    Ok(finished(ALGORITHM, progress, vec![LayerOutput { name: Some(name), records }]))
}

/// Sorts rectangular polygons into three levels of tolerance.
///
/// Levels are tried in order, stopping at the first disabled one. Every
/// polygon whose convex hull and bounding rectangle exist is written, with
/// its diagnostics, to the sink of the first tried level whose thresholds
/// it meets. Other polygons are not written.
pub fn rectangular_characterisation(
    source: &dyn FeatureSource,
    mut sinks: [&mut dyn FeatureSink; 3],
    params: &RectangleParams,
    ctx: &RunContext<'_>,
    feedback: &mut dyn Feedback,
) -> Result<RunSummary> {
    const ALGORITHM: &str = "rectangular_characterisation";
    check_source(source, &[GeometryKind::Polygon], false, ALGORITHM)?;
    params.validate()?;
    let measurement = ctx.measurement()?;
    let measurer = measurement.measurer.as_ref();
    let width = source.field_count() + RECTANGLE_FIELDS.len();
    started(ALGORITHM, source);

    let mut counts = [0usize; 3];
    let progress = for_each_feature(source, feedback, |index, feature| {
        let (mut attributes, geometry) = split(feature, source.field_count());
        if geometry.is_empty() {
            debug!(algorithm = ALGORITHM, index, "feature has no geometry");
            return Step::Skipped;
        }

        let projected = measurement.project(&geometry);
        let indices = rectangle_indices(&projected, measurer);
        attributes.extend([
            AttributeValue::from(indices.sd_convex_hull),
            AttributeValue::from(indices.sd_mbr),
            AttributeValue::from(indices.mbr_orientation),
            AttributeValue::from(miller_compactness(&projected, measurer)),
            AttributeValue::from(is_circle(&projected, params.miller_threshold, measurer)),
            AttributeValue::from(polygon_elongation(&projected)),
        ]);

        let (Some(sd_convex), Some(sd_mbr), Some(_)) = (
            indices.sd_convex_hull.value(),
            indices.sd_mbr.value(),
            indices.mbr_orientation.value(),
        ) else {
            debug!(algorithm = ALGORITHM, index, "no hull or bounding rectangle");
            return Step::Skipped;
        };

        // A disabled level ends the cascade
        let level = params
            .levels
            .iter()
            .take_while(|level| level.enabled)
            .position(|level| level.accepts(sd_convex, sd_mbr));
        if let Some(level) = level {
            sinks[level].add_record(pad_row(attributes, width), geometry);
            counts[level] += 1;
        }
        Step::Done
    });

    let outputs = params
        .levels
        .iter()
        .zip(counts)
        .enumerate()
        .map(|(i, (level, records))| LayerOutput {
            name: Some(OutputLayerName::rectangles(
                source.name(),
                i + 1,
                level.sd_convex,
                level.sd_mbr,
            )),
            records,
        })
        .collect();
    Ok(finished(ALGORITHM, progress, outputs))
}

/// Splits every line or polygon boundary into 2-point segments.
///
/// Each segment record carries the attributes of its feature. With
/// [`SegmentParams::unique`], a segment shared by several features (or
/// repeated within one) is written once, for its first occurrence.
pub fn geometry_to_segments(
    source: &dyn FeatureSource,
    sink: &mut dyn FeatureSink,
    params: &SegmentParams,
    feedback: &mut dyn Feedback,
) -> Result<RunSummary> {
    const ALGORITHM: &str = "geometry_to_segments";
    check_source(source, &[GeometryKind::Line, GeometryKind::Polygon], true, ALGORITHM)?;
    started(ALGORITHM, source);

    let mut deduper = params.unique.then(SegmentDeduper::new);
    let mut records = 0;
    let mut segments = Vec::new();
    let progress = for_each_feature(source, feedback, |index, feature| {
        let (attributes, geometry) = split(feature, source.field_count());
        if geometry.is_empty() {
            debug!(algorithm = ALGORITHM, index, "feature has no geometry");
            return Step::Skipped;
        }

        segments.clear();
        decompose_into(&geometry, deduper.as_mut(), &mut segments);
        for segment in &segments {
            sink.add_record(
                attributes.clone(),
                Geometry::LineString(vec![segment.start, segment.end]),
            );
            records += 1;
        }
        Step::Done
    });

    let name = OutputLayerName::segments(source.name(), params.unique);
    Ok(finished(ALGORITHM, progress, vec![LayerOutput { name: Some(name), records }]))
}

/// Replaces every geometry by its median axis.
///
/// Records carry the axis orientation, its length and the elongation of
/// the bounding rectangle. Geometries with no axis get an empty geometry
/// and null values.
pub fn geometry_to_medians(
    source: &dyn FeatureSource,
    sink: &mut dyn FeatureSink,
    params: &MedianParams,
    ctx: &RunContext<'_>,
    feedback: &mut dyn Feedback,
) -> Result<RunSummary> {
    const ALGORITHM: &str = "geometry_to_medians";
    check_source(source, &[GeometryKind::Line, GeometryKind::Polygon], true, ALGORITHM)?;
    let measurement = ctx.measurement()?;
    let width = source.field_count() + params.fields().len();
    started(ALGORITHM, source);

    let mut records = 0;
    let progress = for_each_feature(source, feedback, |index, feature| {
        let (mut attributes, geometry) = split(feature, source.field_count());
        if geometry.is_empty() {
            debug!(algorithm = ALGORITHM, index, "feature has no geometry");
            return Step::Skipped;
        }

        let projected = measurement.project(&geometry);
        let median = median_segment(&projected, params.origin, measurement.measurer.as_ref());
        let (output, step) = match median {
            Some(median) => {
                attributes.extend([
                    AttributeValue::from(median.orientation),
                    AttributeValue::from(median.length),
                    AttributeValue::from(median.elongation),
                ]);
                let axis = Geometry::LineString(vec![median.segment.start, median.segment.end]);
                (axis, Step::Done)
            }
            None => {
                debug!(algorithm = ALGORITHM, index, "geometry has no median axis");
                (Geometry::Empty, Step::Skipped)
            }
        };
        sink.add_record(pad_row(attributes, width), output);
        records += 1;
        step
    });

    let name = OutputLayerName::medians(source.name(), params.origin);
    Ok(finished(ALGORITHM, progress, vec![LayerOutput { name: Some(name), records }]))
}

enum Step {
    Done,
    Skipped,
}

#[derive(Debug, Default)]
struct Progress {
    read: usize,
    skipped: usize,
    canceled: bool,
}

/// Feeds every feature to `each`, polling for cancellation before each one.
fn for_each_feature<T>(source: &dyn FeatureSource, feedback: &mut dyn Feedback, mut each: T) -> Progress
where
    T: FnMut(usize, Feature) -> Step,
{
    let count = source.feature_count();
    let total = if count > 0 { 100.0 / count as f64 } else { 0.0 };

    let mut progress = Progress::default();
    for (index, feature) in source.features().enumerate() {
        if feedback.is_canceled() {
            progress.canceled = true;
            break;
        }
        progress.read += 1;
        if let Step::Skipped = each(index, feature) {
            progress.skipped += 1;
        }
        feedback.set_progress(index as f64 * total);
    }
    progress
}

/// Separates a feature into its attribute row, padded to the layer's
/// field count, and its geometry.
fn split(feature: Feature, field_count: usize) -> (Vec<AttributeValue>, Geometry) {
    (pad_row(feature.attributes, field_count), feature.geometry)
}

fn check_source(
    source: &dyn FeatureSource,
    accepted: &[GeometryKind],
    require_features: bool,
    algorithm: &str,
) -> Result<()> {
    let found = source.geometry_kind();
    if !found.is_some_and(|kind| accepted.contains(&kind)) {
        warn!(algorithm, source = source.name(), ?found, "wrong layer geometry type");
        return Err(MorphError::WrongGeometryType {
            expected: accepted.to_vec(),
            found,
        });
    }
    if require_features && source.feature_count() == 0 {
        warn!(algorithm, source = source.name(), "layer has no feature");
        return Err(MorphError::EmptySource);
    }
    Ok(())
}

fn check_range(name: &'static str, value: f64, min: f64, max: f64) -> Result<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        warn!(parameter = name, value, "parameter out of range");
        Err(MorphError::ParameterOutOfRange {
            name,
            value,
            min,
            max,
        })
    }
}

fn started(algorithm: &str, source: &dyn FeatureSource) {
    info!(
        algorithm,
        source = source.name(),
        features = source.feature_count(),
        "run started"
    );
}

fn finished(algorithm: &str, progress: Progress, outputs: Vec<LayerOutput>) -> RunSummary {
    let summary = RunSummary {
        outputs,
        features_read: progress.read,
        skipped: progress.skipped,
        canceled: progress.canceled,
    };
    info!(
        algorithm,
        read = summary.features_read,
        skipped = summary.skipped,
        records = summary.records(),
        canceled = summary.canceled,
        "run finished"
    );
    summary
}
