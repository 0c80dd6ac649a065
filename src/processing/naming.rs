//! Display names for output layers.

use crate::angle::OrientationOrigin;
use std::fmt;

/// Name a host should give an output layer once the run completes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OutputLayerName(String);

impl OutputLayerName {
    /// `{source}-Segments`, with `-Unicity` appended for deduplicated output.
    pub fn segments(source: &str, unique: bool) -> Self {
        let suffix = if unique { "-Unicity" } else { "" };
        Self(format!("{source}-Segments{suffix}"))
    }

    /// `{source}-Morphological_indicators`
    pub fn indicators(source: &str) -> Self {
        Self(format!("{source}-Morphological_indicators"))
    }

    /// `{source}-Medians-East` or `{source}-Medians-North`
    pub fn medians(source: &str, origin: OrientationOrigin) -> Self {
        let origin = match origin {
            OrientationOrigin::East => "East",
            OrientationOrigin::North => "North",
        };
        Self(format!("{source}-Medians-{origin}"))
    }

    /// `{source}-Rectangles-Level_{level}-{sd_convex}-{sd_mbr}`
    pub fn rectangles(source: &str, level: usize, sd_convex: f64, sd_mbr: f64) -> Self {
        Self(format!(
            "{source}-Rectangles-Level_{level}-{}-{}",
            threshold_text(sd_convex),
            threshold_text(sd_mbr)
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for OutputLayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Whole thresholds keep one decimal (`1.0`, not `1`).
fn threshold_text(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}
