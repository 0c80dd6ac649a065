//! Oriented minimum bounding rectangle.
//!
//! The smallest-area rectangle, at any orientation, enclosing a point set.
//! Computed with rotating calipers over the convex hull: the optimal
//! rectangle always has one side collinear with a hull edge.
//!
//! # Example
//!
//! ```
//! use morphometry::bounds::MinimumBoundingRectangle;
//! use morphometry::Point2;
//!
//! // A rotated rectangle's vertices
//! let points = vec![
//!     Point2::new(1.0_f64, 0.0),
//!     Point2::new(3.0, 1.0),
//!     Point2::new(2.0, 3.0),
//!     Point2::new(0.0, 2.0),
//! ];
//!
//! let mbr = MinimumBoundingRectangle::from_points(&points).unwrap();
//! assert!((mbr.area() - 5.0).abs() < 1e-9);
//! assert_eq!(mbr.closed_vertices().len(), 5);
//! ```

use crate::hull::convex_hull;
use crate::polygon::Ring;
use crate::primitives::{Point2, Segment2, Vec2};
use num_traits::Float;

/// A 2D oriented minimum bounding rectangle.
///
/// Represented by a center point, half-extents along local axes, and an
/// orientation angle (radians, counter-clockwise from positive x-axis).
/// The local x-axis is aligned with the hull edge that produced the optimum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinimumBoundingRectangle<F> {
    /// Center of the rectangle.
    pub center: Point2<F>,
    /// Half-width along the local x-axis.
    pub half_width: F,
    /// Half-height along the local y-axis.
    pub half_height: F,
    /// Rotation angle in radians (counter-clockwise from positive x-axis).
    pub angle: F,
}

impl<F: Float> MinimumBoundingRectangle<F> {
    /// Creates a rectangle with the given parameters.
    #[inline]
    pub fn new(center: Point2<F>, half_width: F, half_height: F, angle: F) -> Self {
        Self {
            center,
            half_width,
            half_height,
            angle,
        }
    }

    /// Constructs the minimum-area rectangle using rotating calipers.
    ///
    /// # Returns
    ///
    /// `None` when the points do not span an area (fewer than three
    /// non-collinear points), i.e. when no proper rectangle exists.
    pub fn from_points(points: &[Point2<F>]) -> Option<Self> {
        let hull = convex_hull(points);
        if hull.len() < 3 {
            return None;
        }

        let two = F::one() + F::one();
        let n = hull.len();
        let mut best_area = F::infinity();
        let mut best = None;

        // For each edge of the hull, compute the rectangle aligned to that edge
        for i in 0..n {
            let edge = hull[(i + 1) % n] - hull[i];
            let edge_len = edge.magnitude();

            if edge_len <= F::epsilon() {
                continue;
            }

            // Unit vectors for this orientation
            let u = Vec2::new(edge.x / edge_len, edge.y / edge_len);
            let v = u.perpendicular();

            // Project all hull points onto this orientation
            let mut min_u = F::infinity();
            let mut max_u = F::neg_infinity();
            let mut min_v = F::infinity();
            let mut max_v = F::neg_infinity();

            for p in &hull {
                let pu = p.x * u.x + p.y * u.y;
                let pv = p.x * v.x + p.y * v.y;

                min_u = min_u.min(pu);
                max_u = max_u.max(pu);
                min_v = min_v.min(pv);
                max_v = max_v.max(pv);
            }

            let width = max_u - min_u;
            let height = max_v - min_v;
            let area = width * height;

            if area < best_area {
                best_area = area;

                let center_u = (min_u + max_u) / two;
                let center_v = (min_v + max_v) / two;
                let center = Point2::origin() + u * center_u + v * center_v;

                best = Some(Self {
                    center,
                    half_width: width / two,
                    half_height: height / two,
                    angle: u.angle_from_east(),
                });
            }
        }

        best.filter(|mbr: &Self| mbr.area() > F::zero())
    }

    /// Returns the full extent along the local x-axis.
    #[inline]
    pub fn width(self) -> F {
        self.half_width + self.half_width
    }

    /// Returns the full extent along the local y-axis.
    #[inline]
    pub fn height(self) -> F {
        self.half_height + self.half_height
    }

    /// Returns the planar area of the rectangle.
    #[inline]
    pub fn area(self) -> F {
        self.width() * self.height()
    }

    /// Ratio of the longer side to the shorter one.
    ///
    /// `None` for a flat rectangle.
    pub fn elongation(self) -> Option<F> {
        let (long, short) = self.sides();
        if short <= F::zero() {
            return None;
        }
        Some(long / short)
    }

    /// Returns the four corners in counter-clockwise order.
    ///
    /// The first edge (corner 0 to corner 1) runs along the local x-axis.
    pub fn corners(self) -> [Point2<F>; 4] {
        let ux = Vec2::new(self.angle.cos(), self.angle.sin());
        let uy = ux.perpendicular();

        let hw = self.half_width;
        let hh = self.half_height;

        // Local corners: (+hw, +hh), (-hw, +hh), (-hw, -hh), (+hw, -hh)
        let local = [(hw, hh), (-hw, hh), (-hw, -hh), (hw, -hh)];
        local.map(|(lx, ly)| self.center + ux * lx + uy * ly)
    }

    /// Returns the rectangle as a ring.
    pub fn ring(self) -> Ring<F> {
        Ring::new(self.corners().to_vec())
    }

    /// Returns the rectangle as a closed 5-point vertex list.
    pub fn closed_vertices(self) -> Vec<Point2<F>> {
        self.ring().closed_vertices()
    }

    /// Returns the segment joining the midpoints of the two shorter sides,
    /// i.e. the long axis through the center, in canonical order.
    pub fn long_axis(self) -> Segment2<F> {
        let [c0, c1, c2, c3] = self.corners();
        if self.half_width >= self.half_height {
            // Short sides are c1-c2 and c3-c0
            Segment2::normalized(c1.midpoint(c2), c3.midpoint(c0))
        } else {
            Segment2::normalized(c0.midpoint(c1), c2.midpoint(c3))
        }
    }

    fn sides(self) -> (F, F) {
        let (w, h) = (self.width(), self.height());
        if w >= h {
            (w, h)
        } else {
            (h, w)
        }
    }
}
