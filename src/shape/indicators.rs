//! Morphological indicator suite.

use super::{gravelius_from_measures, miller_from_measures};
use crate::angle::round_down_3;
use crate::bounds::MinimumBoundingRectangle;
use crate::geometry::Geometry;
use crate::hull::convex_hull_ring;
use crate::measure::DistanceMeasurer;
use crate::primitives::{Point2, Segment2};
use serde::Deserialize;
use std::f64::consts::PI;

/// Polygons with an area at or below this value get no indicator.
const MIN_AREA: f64 = 1e-9;

/// A polygon indicator, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Indicator {
    Perimeter,
    Area,
    /// Schum elongation, `√area / (dist_max·√π)`.
    Schum,
    /// Morton index, `4·area / (dist_max²·π)`.
    Morton,
    /// Alternative compacity, `perimeter² / area`.
    AltCompacity,
    /// Alternative circle compacity, `area / (π·(dist_max/2)²)`.
    AltCircleCompacity,
    Gravelius,
    Miller,
    /// Longer over shorter side of the minimum bounding rectangle.
    Elongation,
    /// `area / hull area`
    AreaConvexityDefect,
    /// `hull perimeter / perimeter`
    PerimeterConvexityDefect,
    /// `area / MBR area`
    RectangularDifference,
}

impl Indicator {
    /// Every indicator, in output order.
    pub const ALL: [Indicator; 12] = [
        Indicator::Perimeter,
        Indicator::Area,
        Indicator::Schum,
        Indicator::Morton,
        Indicator::AltCompacity,
        Indicator::AltCircleCompacity,
        Indicator::Gravelius,
        Indicator::Miller,
        Indicator::Elongation,
        Indicator::AreaConvexityDefect,
        Indicator::PerimeterConvexityDefect,
        Indicator::RectangularDifference,
    ];

    /// Output attribute name.
    pub fn field_name(self) -> &'static str {
        match self {
            Indicator::Perimeter => "PERIMETER",
            Indicator::Area => "AREA",
            Indicator::Schum => "SCHUM",
            Indicator::Morton => "MORTON",
            Indicator::AltCompacity => "ALT_COMP",
            Indicator::AltCircleCompacity => "ALT_C_COMP",
            Indicator::Gravelius => "GRAVELIUS",
            Indicator::Miller => "MILLER",
            Indicator::Elongation => "ELONGATION",
            Indicator::AreaConvexityDefect => "A_CONV_DEF",
            Indicator::PerimeterConvexityDefect => "P_CONV_DEF",
            Indicator::RectangularDifference => "RECT_DIFF",
        }
    }
}

/// Which indicators to compute, and whether to truncate them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct IndicatorSelection {
    pub perimeter: bool,
    pub area: bool,
    pub schum: bool,
    pub morton: bool,
    pub alt_compacity: bool,
    pub alt_circle_compacity: bool,
    pub gravelius: bool,
    pub miller: bool,
    pub elongation: bool,
    pub area_convexity_defect: bool,
    pub perimeter_convexity_defect: bool,
    pub rectangular_difference: bool,
    /// Truncate values to three decimals.
    pub rounded: bool,
}

impl Default for IndicatorSelection {
    fn default() -> Self {
        Self::all()
    }
}

impl IndicatorSelection {
    /// Selects every indicator, rounded.
    pub fn all() -> Self {
        Self {
            perimeter: true,
            area: true,
            schum: true,
            morton: true,
            alt_compacity: true,
            alt_circle_compacity: true,
            gravelius: true,
            miller: true,
            elongation: true,
            area_convexity_defect: true,
            perimeter_convexity_defect: true,
            rectangular_difference: true,
            rounded: true,
        }
    }

    /// Selects nothing.
    pub fn none() -> Self {
        Self {
            perimeter: false,
            area: false,
            schum: false,
            morton: false,
            alt_compacity: false,
            alt_circle_compacity: false,
            gravelius: false,
            miller: false,
            elongation: false,
            area_convexity_defect: false,
            perimeter_convexity_defect: false,
            rectangular_difference: false,
            rounded: true,
        }
    }

    /// Returns whether `indicator` is selected.
    pub fn contains(&self, indicator: Indicator) -> bool {
        match indicator {
            Indicator::Perimeter => self.perimeter,
            Indicator::Area => self.area,
            Indicator::Schum => self.schum,
            Indicator::Morton => self.morton,
            Indicator::AltCompacity => self.alt_compacity,
            Indicator::AltCircleCompacity => self.alt_circle_compacity,
            Indicator::Gravelius => self.gravelius,
            Indicator::Miller => self.miller,
            Indicator::Elongation => self.elongation,
            Indicator::AreaConvexityDefect => self.area_convexity_defect,
            Indicator::PerimeterConvexityDefect => self.perimeter_convexity_defect,
            Indicator::RectangularDifference => self.rectangular_difference,
        }
    }

    /// Selected indicators, in output order.
    pub fn selected(&self) -> Vec<Indicator> {
        Indicator::ALL
            .into_iter()
            .filter(|&indicator| self.contains(indicator))
            .collect()
    }
}

/// Measures shared by all indicators of one polygon.
struct Measures {
    perimeter: f64,
    area: f64,
    hull_perimeter: f64,
    hull_area: f64,
    mbr_area: f64,
    mbr_elongation: f64,
    dist_max: f64,
}

impl Measures {
    fn compute(geometry: &Geometry, measurer: &dyn DistanceMeasurer) -> Option<Self> {
        let perimeter = measurer.perimeter(geometry);
        let area = measurer.area(geometry);
        if area <= MIN_AREA {
            return None;
        }

        let points: Vec<Point2<f64>> = geometry.vertices().collect();
        let hull = Geometry::from_ring(&convex_hull_ring(&points)?);
        let mbr = MinimumBoundingRectangle::from_points(&points)?;

        Some(Self {
            perimeter,
            area,
            hull_perimeter: measurer.perimeter(&hull),
            hull_area: measurer.area(&hull),
            mbr_area: measurer.area(&Geometry::from_ring(&mbr.ring())),
            mbr_elongation: mbr.elongation()?,
            dist_max: max_vertex_distance(&points, measurer),
        })
    }

    fn indicator(&self, indicator: Indicator) -> f64 {
        let Self {
            perimeter,
            area,
            dist_max,
            ..
        } = *self;
        match indicator {
            Indicator::Perimeter => perimeter,
            Indicator::Area => area,
            Indicator::Schum => area.sqrt() / (dist_max * PI.sqrt()),
            Indicator::Morton => 4.0 * area / (dist_max * dist_max * PI),
            Indicator::AltCompacity => perimeter * perimeter / area,
            Indicator::AltCircleCompacity => area / (PI * (0.5 * dist_max).powi(2)),
            Indicator::Gravelius => gravelius_from_measures(perimeter, area),
            Indicator::Miller => miller_from_measures(perimeter, area),
            Indicator::Elongation => self.mbr_elongation,
            Indicator::AreaConvexityDefect => area / self.hull_area,
            Indicator::PerimeterConvexityDefect => self.hull_perimeter / perimeter,
            Indicator::RectangularDifference => area / self.mbr_area,
        }
    }
}

/// Largest measured distance between any two vertices.
fn max_vertex_distance(points: &[Point2<f64>], measurer: &dyn DistanceMeasurer) -> f64 {
    let mut dist_max = 0.0f64;
    for (i, &a) in points.iter().enumerate() {
        for &b in &points[i + 1..] {
            dist_max = dist_max.max(measurer.length(&Segment2::normalized(a, b)));
        }
    }
    dist_max
}

/// Computes the selected indicators of a polygon, in output order.
///
/// Returns an empty list for polygons with no significant area, or whose
/// convex hull or bounding rectangle cannot be built; the host then pads
/// the attribute row with nulls.
///
/// # Example
///
/// ```
/// use morphometry::geometry::{Geometry, Polygon};
/// use morphometry::measure::PlanarMeasurer;
/// use morphometry::shape::{polygon_indicators, Indicator, IndicatorSelection};
/// use morphometry::Point2;
///
/// let rectangle = Geometry::Polygon(Polygon::new(
///     vec![
///         Point2::new(0.0, 0.0),
///         Point2::new(0.0, 2.0),
///         Point2::new(4.0, 2.0),
///         Point2::new(4.0, 0.0),
///     ],
///     vec![],
/// ));
///
/// let selection = IndicatorSelection {
///     area: true,
///     elongation: true,
///     ..IndicatorSelection::none()
/// };
/// let values = polygon_indicators(&rectangle, &selection, &PlanarMeasurer);
/// assert_eq!(values, vec![(Indicator::Area, 8.0), (Indicator::Elongation, 2.0)]);
/// ```
pub fn polygon_indicators(
    geometry: &Geometry,
    selection: &IndicatorSelection,
    measurer: &dyn DistanceMeasurer,
) -> Vec<(Indicator, f64)> {
    let Some(measures) = Measures::compute(geometry, measurer) else {
        return Vec::new();
    };

    selection
        .selected()
        .into_iter()
        .map(|indicator| {
            let value = measures.indicator(indicator);
            let value = if selection.rounded {
                round_down_3(value)
            } else {
                value
            };
            (indicator, value)
        })
        .collect()
}
