//! Orientation of a line between two points.
//!
//! Orientations are undirected: the segment from `a` to `b` has the same
//! orientation as the one from `b` to `a`. Raw `atan2` angles are folded into
//! `[0, π)` or `[0, π/2)`, converted to the requested unit and optionally
//! truncated to three decimals.
//!
//! # Example
//!
//! ```
//! use morphometry::angle::{angle_between, AngleOptions};
//! use morphometry::Point2;
//!
//! let options = AngleOptions::default();
//! let o = Point2::new(0.0, 0.0);
//!
//! assert_eq!(angle_between(o, Point2::new(10.0, 0.0), &options), 0.0);
//! assert_eq!(angle_between(o, Point2::new(0.0, 10.0), &options), 90.0);
//! assert_eq!(angle_between(o, Point2::new(-10.0, -10.0), &options), 45.0);
//! ```

use crate::geometry::Geometry;
use crate::primitives::{Point2, Vec2};
use serde::Deserialize;
use std::f64::consts::{FRAC_PI_2, PI};

/// Unit of a returned angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AngleUnit {
    #[default]
    Degree,
    Radian,
    Grade,
}

impl AngleUnit {
    /// Converts an angle in radians to this unit.
    #[inline]
    pub fn from_radians(self, angle: f64) -> f64 {
        match self {
            AngleUnit::Degree => angle * 180.0 / PI,
            AngleUnit::Radian => angle,
            AngleUnit::Grade => angle * 200.0 / PI,
        }
    }
}

/// Interval the undirected orientation is folded into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AngleInterval {
    /// `[0, π)`
    #[default]
    Full,
    /// `[0, π/2)`
    Half,
}

impl AngleInterval {
    /// Folds a raw `atan2` angle in `(-π, π]` into this interval.
    pub fn fold(self, raw: f64) -> f64 {
        let mut angle = if raw < 0.0 { raw + PI } else { raw };
        match self {
            AngleInterval::Full => {
                if angle == PI {
                    angle = 0.0;
                }
            }
            AngleInterval::Half => {
                angle %= FRAC_PI_2;
                if angle == FRAC_PI_2 {
                    angle = 0.0;
                }
            }
        }
        angle
    }
}

/// Reference axis an orientation is measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrientationOrigin {
    /// Counter-clockwise from the x-axis.
    #[default]
    East,
    /// Clockwise from the y-axis.
    North,
}

impl OrientationOrigin {
    /// Raw angle of the direction `(dx, dy)` in `(-π, π]`.
    #[inline]
    pub fn raw_angle(self, dx: f64, dy: f64) -> f64 {
        let direction = Vec2::new(dx, dy);
        match self {
            OrientationOrigin::East => direction.angle_from_east(),
            OrientationOrigin::North => direction.angle_from_north(),
        }
    }

    /// Attribute name used for orientations from this origin.
    pub fn field_name(self) -> &'static str {
        match self {
            OrientationOrigin::East => "E_ORIENTATION",
            OrientationOrigin::North => "N_ORIENTATION",
        }
    }
}

/// How angles are computed and reported.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct AngleOptions {
    pub unit: AngleUnit,
    pub interval: AngleInterval,
    pub origin: OrientationOrigin,
    /// Truncate results to three decimals.
    pub rounded: bool,
}

impl Default for AngleOptions {
    fn default() -> Self {
        Self {
            unit: AngleUnit::Degree,
            interval: AngleInterval::Full,
            origin: OrientationOrigin::East,
            rounded: true,
        }
    }
}

/// Computes the undirected orientation of the line from `p0` to `p1`.
pub fn angle_between(p0: Point2<f64>, p1: Point2<f64>, options: &AngleOptions) -> f64 {
    let raw = options.origin.raw_angle(p1.x - p0.x, p1.y - p0.y);
    let angle = options.unit.from_radians(options.interval.fold(raw));
    if options.rounded {
        round_down_3(angle)
    } else {
        angle
    }
}

/// Computes the orientation of a two-vertex line.
///
/// Returns `None` for empty geometries and for any geometry that does not
/// have exactly two vertices.
///
/// # Example
///
/// ```
/// use morphometry::angle::{line_angle, AngleOptions, AngleUnit};
/// use morphometry::geometry::Geometry;
/// use morphometry::Point2;
///
/// let line = Geometry::LineString(vec![Point2::new(0.0, 0.0), Point2::new(0.0, 10.0)]);
/// let options = AngleOptions { unit: AngleUnit::Grade, ..Default::default() };
/// assert_eq!(line_angle(&line, &options), Some(100.0));
///
/// let polyline = Geometry::LineString(vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(2.0, 1.0),
/// ]);
/// assert_eq!(line_angle(&polyline, &options), None);
/// ```
pub fn line_angle(geometry: &Geometry, options: &AngleOptions) -> Option<f64> {
    let mut vertices = geometry.vertices();
    let (p0, p1) = (vertices.next()?, vertices.next()?);
    if vertices.next().is_some() {
        return None;
    }
    Some(angle_between(p0, p1, options))
}

/// Truncates `value` to `decimals` decimals, towards negative infinity.
#[inline]
pub fn round_down(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).floor() / scale
}

/// Truncates `value` to three decimals, towards negative infinity.
#[inline]
pub fn round_down_3(value: f64) -> f64 {
    (value * 1000.0).floor() / 1000.0
}

/// Classifies an orientation into bins of width `step`.
///
/// The class is the integer part of `orientation / step`.
#[inline]
pub fn orientation_class(orientation: f64, step: f64) -> i64 {
    (orientation / step).trunc() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn origin() -> Point2<f64> {
        Point2::new(0.0, 0.0)
    }

    #[test]
    fn test_horizontal_both_directions_is_zero() {
        let options = AngleOptions::default();
        assert_eq!(angle_between(origin(), Point2::new(10.0, 0.0), &options), 0.0);
        assert_eq!(angle_between(origin(), Point2::new(-10.0, 0.0), &options), 0.0);
    }

    #[test]
    fn test_end_to_end_degrees() {
        let options = AngleOptions::default();
        assert_eq!(angle_between(origin(), Point2::new(0.0, 10.0), &options), 90.0);
        assert_eq!(angle_between(origin(), Point2::new(-10.0, -10.0), &options), 45.0);
    }

    #[test]
    fn test_rounding_is_floor() {
        let options = AngleOptions::default();
        // 126.86989... would round to 126.870
        assert_eq!(angle_between(origin(), Point2::new(3.0, -4.0), &options), 126.869);
        // 63.43494... would round to 63.435
        assert_eq!(angle_between(origin(), Point2::new(1.0, 2.0), &options), 63.434);
        assert_eq!(round_down_3(12.3459), 12.345);
        assert_eq!(round_down(12.3459, 2), 12.34);
    }

    #[test]
    fn test_unrounded_keeps_precision() {
        let options = AngleOptions {
            rounded: false,
            ..Default::default()
        };
        let angle = angle_between(origin(), Point2::new(3.0, -4.0), &options);
        assert_relative_eq!(angle, 126.86989764584402, epsilon = 1e-12);
    }

    #[test]
    fn test_half_interval() {
        let options = AngleOptions {
            interval: AngleInterval::Half,
            ..Default::default()
        };
        assert_eq!(angle_between(origin(), Point2::new(0.0, 10.0), &options), 0.0);
        assert_eq!(angle_between(origin(), Point2::new(3.0, -4.0), &options), 36.869);
        assert_eq!(angle_between(origin(), Point2::new(10.0, 10.0), &options), 45.0);
    }

    #[test]
    fn test_units() {
        let radian = AngleOptions {
            unit: AngleUnit::Radian,
            rounded: false,
            ..Default::default()
        };
        assert_relative_eq!(
            angle_between(origin(), Point2::new(0.0, 10.0), &radian),
            FRAC_PI_2
        );

        let grade = AngleOptions {
            unit: AngleUnit::Grade,
            ..Default::default()
        };
        assert_eq!(angle_between(origin(), Point2::new(-10.0, -10.0), &grade), 50.0);
    }

    #[test]
    fn test_north_origin() {
        let options = AngleOptions {
            origin: OrientationOrigin::North,
            ..Default::default()
        };
        assert_eq!(angle_between(origin(), Point2::new(0.0, 10.0), &options), 0.0);
        assert_eq!(angle_between(origin(), Point2::new(0.0, -10.0), &options), 0.0);
        assert_eq!(angle_between(origin(), Point2::new(10.0, 0.0), &options), 90.0);
        assert_eq!(angle_between(origin(), Point2::new(10.0, 10.0), &options), 45.0);
    }

    #[test]
    fn test_line_angle_vertex_count() {
        let options = AngleOptions::default();
        assert_eq!(line_angle(&Geometry::Empty, &options), None);
        let single = Geometry::LineString(vec![origin()]);
        assert_eq!(line_angle(&single, &options), None);
        let line = Geometry::LineString(vec![origin(), Point2::new(-10.0, -10.0)]);
        assert_eq!(line_angle(&line, &options), Some(45.0));
    }

    #[test]
    fn test_orientation_class() {
        assert_eq!(orientation_class(0.0, 10.0), 0);
        assert_eq!(orientation_class(45.0, 10.0), 4);
        assert_eq!(orientation_class(179.999, 10.0), 17);
        assert_eq!(orientation_class(90.0, 45.0), 2);
    }

    #[test]
    fn test_options_from_json() {
        let options: AngleOptions =
            serde_json::from_str(r#"{"unit": "grade", "origin": "north"}"#).unwrap();
        assert_eq!(options.unit, AngleUnit::Grade);
        assert_eq!(options.origin, OrientationOrigin::North);
        assert_eq!(options.interval, AngleInterval::Full);
        assert!(options.rounded);
    }

    proptest! {
        #[test]
        fn folded_angles_stay_in_interval(
            dx in -1e3_f64..1e3, dy in -1e3_f64..1e3,
            north in any::<bool>(), half in any::<bool>(),
        ) {
            let options = AngleOptions {
                unit: AngleUnit::Radian,
                interval: if half { AngleInterval::Half } else { AngleInterval::Full },
                origin: if north { OrientationOrigin::North } else { OrientationOrigin::East },
                rounded: false,
            };
            let upper = if half { FRAC_PI_2 } else { PI };
            let angle = angle_between(origin(), Point2::new(dx, dy), &options);
            prop_assert!((0.0..upper).contains(&angle), "{} not in [0, {})", angle, upper);
        }
    }
}
