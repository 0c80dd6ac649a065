//! 2D line segment type.

use super::{Point2, Vec2};
use num_traits::Float;

/// A 2D line segment defined by two endpoints.
///
/// Segments produced by [`Segment2::normalized`] are in canonical order:
/// `start` is the lexicographically smaller endpoint, so the segment joining
/// two points has a single representation whatever the input order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2<F> {
    pub start: Point2<F>,
    pub end: Point2<F>,
}

impl<F: Float> Segment2<F> {
    /// Creates a new segment from two points, keeping their order.
    #[inline]
    pub fn new(start: Point2<F>, end: Point2<F>) -> Self {
        Self { start, end }
    }

    /// Creates a segment from coordinate pairs.
    #[inline]
    pub fn from_coords(x1: F, y1: F, x2: F, y2: F) -> Self {
        Self {
            start: Point2::new(x1, y1),
            end: Point2::new(x2, y2),
        }
    }

    /// Creates the canonical segment joining `p1` and `p2`.
    ///
    /// Returns `(p1, p2)` when `p1` sorts before `p2`, otherwise `(p2, p1)`.
    /// Equal endpoints are accepted and give a zero-length segment.
    ///
    /// # Example
    ///
    /// ```
    /// use morphometry::primitives::{Point2, Segment2};
    ///
    /// let a = Point2::new(5.0, 1.0);
    /// let b = Point2::new(-2.0, 3.0);
    /// assert_eq!(Segment2::normalized(a, b), Segment2::normalized(b, a));
    /// assert_eq!(Segment2::normalized(a, b).start, b);
    /// ```
    #[inline]
    pub fn normalized(p1: Point2<F>, p2: Point2<F>) -> Self {
        if super::compare_points(p1, p2) < 0 {
            Self::new(p1, p2)
        } else {
            Self::new(p2, p1)
        }
    }

    /// Returns this segment in canonical order.
    #[inline]
    pub fn canonical(self) -> Self {
        Self::normalized(self.start, self.end)
    }

    /// Returns the direction vector from start to end.
    #[inline]
    pub fn direction(self) -> Vec2<F> {
        self.end - self.start
    }

    /// Returns the squared length of the segment.
    #[inline]
    pub fn length_squared(self) -> F {
        self.start.distance_squared(self.end)
    }

    /// Returns the Euclidean length of the segment.
    #[inline]
    pub fn length(self) -> F {
        self.start.distance(self.end)
    }

    /// Returns the midpoint of the segment.
    #[inline]
    pub fn midpoint(self) -> Point2<F> {
        self.start.midpoint(self.end)
    }

    /// Returns the reversed segment (start and end swapped).
    #[inline]
    pub fn reversed(self) -> Self {
        Self {
            start: self.end,
            end: self.start,
        }
    }

    /// Returns `true` if both endpoints are the same point.
    #[inline]
    pub fn is_degenerate(self) -> bool {
        self.start == self.end
    }
}

impl<F: Float> From<(Point2<F>, Point2<F>)> for Segment2<F> {
    fn from((start, end): (Point2<F>, Point2<F>)) -> Self {
        Self::new(start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_length() {
        let s: Segment2<f64> = Segment2::from_coords(0.0, 0.0, 3.0, 4.0);
        assert_eq!(s.length_squared(), 25.0);
        assert_eq!(s.length(), 5.0);
    }

    #[test]
    fn test_midpoint_and_direction() {
        let s: Segment2<f64> = Segment2::from_coords(0.0, 0.0, 10.0, 20.0);
        assert_eq!(s.midpoint(), Point2::new(5.0, 10.0));
        assert_eq!(s.direction(), Vec2::new(10.0, 20.0));
    }

    #[test]
    fn test_normalized_puts_smaller_point_first() {
        let s = Segment2::normalized(Point2::new(3.0_f64, 0.0), Point2::new(1.0, 9.0));
        assert_eq!(s.start, Point2::new(1.0, 9.0));
        assert_eq!(s.end, Point2::new(3.0, 0.0));

        // Same x: y decides
        let v = Segment2::normalized(Point2::new(0.0_f64, 5.0), Point2::new(0.0, -5.0));
        assert_eq!(v.start, Point2::new(0.0, -5.0));
    }

    #[test]
    fn test_normalized_degenerate() {
        let p = Point2::new(2.0_f64, 2.0);
        let s = Segment2::normalized(p, p);
        assert!(s.is_degenerate());
        assert_eq!(s.start, p);
        assert_eq!(s.length(), 0.0);
    }

    #[test]
    fn test_canonical_of_reversed() {
        let s: Segment2<f64> = Segment2::from_coords(4.0, 4.0, 1.0, 1.0);
        assert_eq!(s.canonical(), s.reversed().canonical());
        assert_eq!(s.canonical().start, Point2::new(1.0, 1.0));
    }

    proptest! {
        #[test]
        fn normalized_ignores_input_order(
            ax in -1e6_f64..1e6, ay in -1e6_f64..1e6,
            bx in -1e6_f64..1e6, by in -1e6_f64..1e6,
        ) {
            let a = Point2::new(ax, ay);
            let b = Point2::new(bx, by);
            prop_assert_eq!(Segment2::normalized(a, b), Segment2::normalized(b, a));
        }
    }
}
