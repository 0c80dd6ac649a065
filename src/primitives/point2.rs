//! 2D point type and the canonical point ordering.

use super::Vec2;
use num_traits::Float;
use std::cmp::Ordering;
use std::ops::{Add, Sub};

/// A 2D point with x and y coordinates.
///
/// Generic over floating-point types (`f32` or `f64`). Coordinates are
/// interpreted in whatever CRS the caller works in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Point2<F> {
    /// Creates a new point.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    /// Creates a point at the origin (0, 0).
    #[inline]
    pub fn origin() -> Self {
        Self {
            x: F::zero(),
            y: F::zero(),
        }
    }

    /// Computes the squared distance to another point.
    #[inline]
    pub fn distance_squared(self, other: Self) -> F {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }

    /// Computes the Euclidean distance to another point.
    #[inline]
    pub fn distance(self, other: Self) -> F {
        self.distance_squared(other).sqrt()
    }

    /// Returns the midpoint between `self` and `other`.
    #[inline]
    pub fn midpoint(self, other: Self) -> Self {
        let two = F::one() + F::one();
        Self {
            x: (self.x + other.x) / two,
            y: (self.y + other.y) / two,
        }
    }

    /// Lexicographic comparison: by x first, then by y, both ascending.
    ///
    /// Used to put segment endpoints in canonical order. Incomparable
    /// coordinates (NaN) compare as equal on that axis.
    pub fn compare(self, other: Self) -> Ordering {
        self.x
            .partial_cmp(&other.x)
            .unwrap_or(Ordering::Equal)
            .then_with(|| self.y.partial_cmp(&other.y).unwrap_or(Ordering::Equal))
    }
}

/// Compares two points lexicographically (x, then y).
///
/// Returns -1, 0 or 1.
///
/// # Example
///
/// ```
/// use morphometry::primitives::{compare_points, Point2};
///
/// assert_eq!(compare_points(Point2::new(0.0, 5.0), Point2::new(1.0, 0.0)), -1);
/// assert_eq!(compare_points(Point2::new(1.0, 2.0), Point2::new(1.0, 1.0)), 1);
/// assert_eq!(compare_points(Point2::new(1.0, 1.0), Point2::new(1.0, 1.0)), 0);
/// ```
pub fn compare_points<F: Float>(p1: Point2<F>, p2: Point2<F>) -> i8 {
    match p1.compare(p2) {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

// Point - Point = Vec2
impl<F: Float> Sub for Point2<F> {
    type Output = Vec2<F>;

    #[inline]
    fn sub(self, other: Self) -> Vec2<F> {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

// Point + Vec2 = Point
impl<F: Float> Add<Vec2<F>> for Point2<F> {
    type Output = Self;

    #[inline]
    fn add(self, v: Vec2<F>) -> Self {
        Self {
            x: self.x + v.x,
            y: self.y + v.y,
        }
    }
}

impl<F: Float> Default for Point2<F> {
    fn default() -> Self {
        Self::origin()
    }
}

impl<F: Float> From<(F, F)> for Point2<F> {
    fn from((x, y): (F, F)) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        let a: Point2<f64> = Point2::new(0.0, 0.0);
        let b = Point2::new(3.0, 4.0);
        assert_eq!(a.distance_squared(b), 25.0);
        assert_eq!(a.distance(b), 5.0);
    }

    #[test]
    fn test_midpoint() {
        let m = Point2::new(0.0_f64, 0.0).midpoint(Point2::new(10.0, -4.0));
        assert_eq!(m, Point2::new(5.0, -2.0));
    }

    #[test]
    fn test_compare_x_first() {
        let a: Point2<f64> = Point2::new(0.0, 100.0);
        let b = Point2::new(1.0, -100.0);
        assert_eq!(a.compare(b), Ordering::Less);
        assert_eq!(b.compare(a), Ordering::Greater);
    }

    #[test]
    fn test_compare_y_breaks_ties() {
        let a: Point2<f64> = Point2::new(2.0, 1.0);
        let b = Point2::new(2.0, 3.0);
        assert_eq!(compare_points(a, b), -1);
        assert_eq!(compare_points(b, a), 1);
        assert_eq!(compare_points(a, a), 0);
    }

    #[test]
    fn test_sub_gives_vector() {
        let v = Point2::new(4.0_f64, 6.0) - Point2::new(1.0, 2.0);
        assert_eq!(v, Vec2::new(3.0, 4.0));
        assert_eq!(Point2::new(1.0, 2.0) + v, Point2::new(4.0, 6.0));
    }
}
