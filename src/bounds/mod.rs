//! Oriented minimum bounding rectangle.

mod mbr;

pub use mbr::MinimumBoundingRectangle;
