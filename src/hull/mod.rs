//! Convex hull of a vertex set.
//!
//! # Example
//!
//! ```
//! use morphometry::hull::convex_hull;
//! use morphometry::Point2;
//!
//! let points: Vec<Point2<f64>> = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(0.5, 0.5), // Interior point
//!     Point2::new(1.0, 1.0),
//!     Point2::new(0.0, 1.0),
//! ];
//!
//! let hull = convex_hull(&points);
//!
//! // Hull should be the 4 corners (interior point excluded)
//! assert_eq!(hull.len(), 4);
//! ```

use crate::polygon::Ring;
use crate::primitives::Point2;
use num_traits::Float;

/// Computes the convex hull of a set of points using Andrew's monotone chain algorithm.
///
/// Returns the hull vertices in counter-clockwise order, starting from the
/// lexicographically smallest point. The hull is implicitly closed and
/// collinear or repeated points are dropped, so closed GIS rings can be
/// passed in directly.
///
/// # Returns
///
/// An empty vector for no input, a single point when all points coincide,
/// and two points when all points are collinear.
pub fn convex_hull<F: Float>(points: &[Point2<F>]) -> Vec<Point2<F>> {
    let mut sorted: Vec<Point2<F>> = points.to_vec();
    sorted.sort_by(|a, b| a.compare(*b));
    sorted.dedup();

    if sorted.len() < 3 {
        return sorted;
    }

    // Build lower hull
    let mut lower: Vec<Point2<F>> = Vec::new();
    for &p in &sorted {
        while lower.len() >= 2 && cross(lower[lower.len() - 2], lower[lower.len() - 1], p) <= F::zero()
        {
            lower.pop();
        }
        lower.push(p);
    }

    // Build upper hull
    let mut upper: Vec<Point2<F>> = Vec::new();
    for &p in sorted.iter().rev() {
        while upper.len() >= 2 && cross(upper[upper.len() - 2], upper[upper.len() - 1], p) <= F::zero()
        {
            upper.pop();
        }
        upper.push(p);
    }

    // Remove last point of each half because it's repeated
    lower.pop();
    upper.pop();

    lower.extend(upper);
    lower
}

/// Computes the convex hull as a ring, or `None` when it has no area.
///
/// A hull with fewer than three vertices (empty input, a single point or
/// collinear points) is treated as unavailable.
///
/// # Example
///
/// ```
/// use morphometry::hull::convex_hull_ring;
/// use morphometry::Point2;
///
/// let collinear = [
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 1.0),
///     Point2::new(2.0, 2.0),
/// ];
/// assert!(convex_hull_ring(&collinear).is_none());
/// ```
pub fn convex_hull_ring<F: Float>(points: &[Point2<F>]) -> Option<Ring<F>> {
    let hull = convex_hull(points);
    if hull.len() < 3 {
        return None;
    }
    Some(Ring::new(hull))
}

/// Cross product of (b - a) and (c - a).
#[inline]
fn cross<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> F {
    (b - a).cross(c - a)
}
