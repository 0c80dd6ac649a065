//! Ring type and basic planar ring measures.

use crate::primitives::Point2;
use num_traits::Float;

/// A simple ring represented as a sequence of vertices.
///
/// The ring is implicitly closed (the last vertex connects to the first), so
/// the closing duplicate carried by GIS rings is not stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Ring<F> {
    /// The vertices of the ring, without the closing duplicate.
    pub vertices: Vec<Point2<F>>,
}

impl<F: Float> Ring<F> {
    /// Creates a new ring from vertices.
    #[inline]
    pub fn new(vertices: Vec<Point2<F>>) -> Self {
        Self { vertices }
    }

    /// Creates a ring from an explicitly closed vertex list, dropping the
    /// closing duplicate if present.
    pub fn from_closed(points: &[Point2<F>]) -> Self {
        let mut vertices = points.to_vec();
        if vertices.len() > 1 && vertices.first() == vertices.last() {
            vertices.pop();
        }
        Self { vertices }
    }

    /// Creates an empty ring.
    #[inline]
    pub fn empty() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }

    /// Returns true if the ring has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the vertices with the first one repeated at the end.
    pub fn closed_vertices(&self) -> Vec<Point2<F>> {
        let mut closed = self.vertices.clone();
        if let Some(&first) = self.vertices.first() {
            closed.push(first);
        }
        closed
    }

    /// Returns the signed area of the ring using the shoelace formula.
    ///
    /// Positive for CCW winding, negative for CW winding.
    pub fn signed_area(&self) -> F {
        ring_signed_area(&self.vertices)
    }

    /// Returns the absolute area of the ring.
    pub fn area(&self) -> F {
        self.signed_area().abs()
    }

    /// Ensures the ring has CCW winding order.
    pub fn ensure_ccw(&mut self) {
        if self.signed_area() < F::zero() {
            self.vertices.reverse();
        }
    }

    /// Returns the perimeter of the ring, closing edge included.
    pub fn perimeter(&self) -> F {
        if self.vertices.len() < 2 {
            return F::zero();
        }

        let n = self.vertices.len();
        (0..n).fold(F::zero(), |acc, i| {
            acc + self.vertices[i].distance(self.vertices[(i + 1) % n])
        })
    }
}

/// Computes the signed area of a ring using the shoelace formula.
///
/// Works on open or explicitly closed rings: a repeated closing vertex adds
/// a zero-area term. Positive for CCW winding, negative for CW winding.
pub fn ring_signed_area<F: Float>(vertices: &[Point2<F>]) -> F {
    if vertices.len() < 3 {
        return F::zero();
    }

    let mut area = F::zero();
    let n = vertices.len();

    for i in 0..n {
        let j = (i + 1) % n;
        area = area + vertices[i].x * vertices[j].y;
        area = area - vertices[j].x * vertices[i].y;
    }

    area / (F::one() + F::one())
}

/// Computes the absolute area of a ring.
pub fn ring_area<F: Float>(vertices: &[Point2<F>]) -> F {
    ring_signed_area(vertices).abs()
}
