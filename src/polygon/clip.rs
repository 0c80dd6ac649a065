//! Clipping of rings against a convex ring (Sutherland-Hodgman).

use crate::polygon::core::Ring;
use crate::primitives::Point2;
use num_traits::Float;

/// Clips a ring against a convex clipping ring.
///
/// The subject may be concave: the output then can contain zero-width
/// bridges along the clip boundary, which contribute nothing to the area.
/// This makes the result exact for area purposes, which is all the surface
/// distance needs. The clip ring may have either winding.
///
/// # Returns
///
/// The clipped ring. Empty if the subject lies entirely outside the clip
/// region or if either input is empty.
///
/// # Example
///
/// ```
/// use morphometry::polygon::{clip_by_convex, Ring};
/// use morphometry::Point2;
///
/// let subject = Ring::new(vec![
///     Point2::new(0.0_f64, 0.0),
///     Point2::new(3.0, 0.0),
///     Point2::new(3.0, 3.0),
///     Point2::new(0.0, 3.0),
/// ]);
///
/// let clip = Ring::new(vec![
///     Point2::new(1.0, 1.0),
///     Point2::new(2.0, 1.0),
///     Point2::new(2.0, 2.0),
///     Point2::new(1.0, 2.0),
/// ]);
///
/// let result = clip_by_convex(&subject, &clip);
/// assert!((result.area() - 1.0).abs() < 1e-10);
/// ```
pub fn clip_by_convex<F: Float>(subject: &Ring<F>, convex: &Ring<F>) -> Ring<F> {
    if subject.is_empty() || convex.len() < 3 {
        return Ring::empty();
    }

    let mut clip = convex.clone();
    clip.ensure_ccw();

    let mut output = subject.vertices.clone();

    let clip_n = clip.vertices.len();
    for i in 0..clip_n {
        if output.is_empty() {
            break;
        }

        let edge_start = clip.vertices[i];
        let edge_end = clip.vertices[(i + 1) % clip_n];

        let input = output;
        output = Vec::with_capacity(input.len() + 1);

        let input_n = input.len();
        for j in 0..input_n {
            let current = input[j];
            let next = input[(j + 1) % input_n];

            let current_inside = is_inside(current, edge_start, edge_end);
            let next_inside = is_inside(next, edge_start, edge_end);

            if current_inside {
                output.push(current);
                if !next_inside {
                    // Exiting
                    if let Some(p) = line_intersection(current, next, edge_start, edge_end) {
                        output.push(p);
                    }
                }
            } else if next_inside {
                // Entering
                if let Some(p) = line_intersection(current, next, edge_start, edge_end) {
                    output.push(p);
                }
            }
        }
    }

    Ring::new(output)
}

/// Tests if a point is on the "inside" (left side) of a directed edge.
#[inline]
fn is_inside<F: Float>(point: Point2<F>, edge_start: Point2<F>, edge_end: Point2<F>) -> bool {
    (edge_end - edge_start).cross(point - edge_start) >= F::zero()
}

/// Computes the intersection of two infinite lines.
fn line_intersection<F: Float>(
    p1: Point2<F>,
    p2: Point2<F>,
    p3: Point2<F>,
    p4: Point2<F>,
) -> Option<Point2<F>> {
    let d1 = p2 - p1;
    let d2 = p4 - p3;

    let denom = d1.cross(d2);
    if denom.abs() < F::epsilon() {
        return None; // Parallel
    }

    let t = (p3 - p1).cross(d2) / denom;
    Some(p1 + d1 * t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn square(x0: f64, y0: f64, size: f64) -> Ring<f64> {
        Ring::new(vec![
            Point2::new(x0, y0),
            Point2::new(x0 + size, y0),
            Point2::new(x0 + size, y0 + size),
            Point2::new(x0, y0 + size),
        ])
    }

    #[test]
    fn test_overlapping_squares() {
        let result = clip_by_convex(&square(0.0, 0.0, 2.0), &square(1.0, 1.0, 2.0));
        assert_relative_eq!(result.area(), 1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_disjoint_squares() {
        let result = clip_by_convex(&square(0.0, 0.0, 1.0), &square(5.0, 5.0, 1.0));
        assert_eq!(result.area(), 0.0);
    }

    #[test]
    fn test_subject_inside_clip_is_unchanged() {
        let subject = square(1.0, 1.0, 1.0);
        let result = clip_by_convex(&subject, &square(0.0, 0.0, 5.0));
        assert_relative_eq!(result.area(), subject.area(), epsilon = 1e-10);
    }

    #[test]
    fn test_clockwise_clip_ring() {
        let mut clip = square(1.0, 1.0, 2.0);
        clip.vertices.reverse();
        let result = clip_by_convex(&square(0.0, 0.0, 2.0), &clip);
        assert_relative_eq!(result.area(), 1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_concave_subject_area_is_exact() {
        // U shape: 3x3 square minus the 1x2 notch at the top middle.
        let u_shape = Ring::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(3.0, 0.0),
            Point2::new(3.0, 3.0),
            Point2::new(2.0, 3.0),
            Point2::new(2.0, 1.0),
            Point2::new(1.0, 1.0),
            Point2::new(1.0, 3.0),
            Point2::new(0.0, 3.0),
        ]);
        // Clip to the upper band y in [2, 3]: only the two prongs remain.
        let band = Ring::new(vec![
            Point2::new(-1.0, 2.0),
            Point2::new(4.0, 2.0),
            Point2::new(4.0, 3.0),
            Point2::new(-1.0, 3.0),
        ]);
        let result = clip_by_convex(&u_shape, &band);
        assert_relative_eq!(result.area(), 2.0, epsilon = 1e-10);
    }

    #[test]
    fn test_degenerate_clip_gives_empty() {
        let line = Ring::new(vec![Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)]);
        assert!(clip_by_convex(&square(0.0, 0.0, 1.0), &line).is_empty());
    }
}
