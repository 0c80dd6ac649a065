//! Ring measures and convex clipping.
//!
//! This module provides the planar building blocks behind the shape
//! descriptors:
//! - Shoelace area and perimeter of a ring
//! - Winding normalisation
//! - Clipping of an arbitrary ring by a convex ring
//!
//! # Example
//!
//! ```
//! use morphometry::polygon::{clip_by_convex, Ring};
//! use morphometry::Point2;
//!
//! // Two overlapping squares
//! let square1 = Ring::new(vec![
//!     Point2::new(0.0_f64, 0.0),
//!     Point2::new(2.0, 0.0),
//!     Point2::new(2.0, 2.0),
//!     Point2::new(0.0, 2.0),
//! ]);
//!
//! let square2 = Ring::new(vec![
//!     Point2::new(1.0, 1.0),
//!     Point2::new(3.0, 1.0),
//!     Point2::new(3.0, 3.0),
//!     Point2::new(1.0, 3.0),
//! ]);
//!
//! let overlap = clip_by_convex(&square1, &square2);
//! assert!((overlap.area() - 1.0).abs() < 1e-10);
//! ```

mod clip;
mod core;

pub use clip::clip_by_convex;
pub use core::{ring_area, ring_signed_area, Ring};
