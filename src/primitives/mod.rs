//! Floating-point geometric primitives and the canonical point ordering.

mod point2;
mod segment2;
mod vec2;

pub use point2::{compare_points, Point2};
pub use segment2::Segment2;
pub use vec2::Vec2;
