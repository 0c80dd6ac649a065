//! Decomposition of boundaries and lines into canonical 2-point segments.
//!
//! Every ring of a polygon (holes included) and every part of a line is
//! split into one segment per consecutive vertex pair. Segments are stored
//! in canonical order, so a shared edge of two adjacent polygons is the same
//! segment whichever way each ring walks it.
//!
//! With deduplication, a [`SegmentDeduper`] remembers what has already been
//! emitted. Its scope is the caller's choice: one call, or one output layer
//! by passing the same deduper for every feature.
//!
//! # Example
//!
//! ```
//! use morphometry::geometry::{Geometry, Polygon};
//! use morphometry::segments::decompose_to_segments;
//! use morphometry::Point2;
//!
//! let square = |x: f64| Polygon::new(
//!     vec![
//!         Point2::new(x, 0.0),
//!         Point2::new(x, 1.0),
//!         Point2::new(x + 1.0, 1.0),
//!         Point2::new(x + 1.0, 0.0),
//!     ],
//!     vec![],
//! );
//!
//! // Two squares sharing the edge x = 1
//! let pair = Geometry::MultiPolygon(vec![square(0.0), square(1.0)]);
//! assert_eq!(decompose_to_segments(&pair, false).len(), 8);
//! assert_eq!(decompose_to_segments(&pair, true).len(), 7);
//! ```

use crate::geometry::Geometry;
use crate::primitives::{Point2, Segment2};
use std::collections::HashSet;

/// Exact identity of a canonical segment: the bit patterns of its
/// coordinates, with negative zero folded onto zero.
type SegmentKey = [u64; 4];

fn coordinate_key(value: f64) -> u64 {
    // -0.0 and 0.0 print the same
    if value == 0.0 {
        0.0f64.to_bits()
    } else {
        value.to_bits()
    }
}

fn segment_key(segment: &Segment2<f64>) -> SegmentKey {
    [
        coordinate_key(segment.start.x),
        coordinate_key(segment.start.y),
        coordinate_key(segment.end.x),
        coordinate_key(segment.end.y),
    ]
}

/// Set of canonical segments already emitted.
#[derive(Debug, Clone, Default)]
pub struct SegmentDeduper {
    seen: HashSet<SegmentKey>,
}

impl SegmentDeduper {
    /// Creates an empty deduper.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a segment, returning `true` the first time it is seen.
    ///
    /// The segment is canonicalised first, so both orientations of the
    /// same edge share one entry.
    pub fn insert(&mut self, segment: &Segment2<f64>) -> bool {
        self.seen.insert(segment_key(&segment.canonical()))
    }

    /// Returns `true` if the segment has already been recorded.
    pub fn contains(&self, segment: &Segment2<f64>) -> bool {
        self.seen.contains(&segment_key(&segment.canonical()))
    }

    /// Number of distinct segments recorded.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    /// Forgets every recorded segment.
    pub fn clear(&mut self) {
        self.seen.clear();
    }
}

/// Returns every polygon ring (exterior then holes) or line part.
#[inline]
pub fn boundary_parts(geometry: &Geometry) -> Vec<&[Point2<f64>]> {
    geometry.parts()
}

/// Appends the canonical segments of `geometry` to `out`.
///
/// When a deduper is given, a segment is appended only the first time it is
/// seen by that deduper; the first occurrence in traversal order wins.
pub fn decompose_into(
    geometry: &Geometry,
    mut deduper: Option<&mut SegmentDeduper>,
    out: &mut Vec<Segment2<f64>>,
) {
    for part in boundary_parts(geometry) {
        for pair in part.windows(2) {
            let segment = Segment2::normalized(pair[0], pair[1]);
            let keep = match deduper.as_deref_mut() {
                Some(seen) => seen.insert(&segment),
                None => true,
            };
            if keep {
                out.push(segment);
            }
        }
    }
}

/// Decomposes a geometry into canonical segments.
///
/// With `dedupe`, repeated segments within this geometry are emitted once.
pub fn decompose_to_segments(geometry: &Geometry, dedupe: bool) -> Vec<Segment2<f64>> {
    let mut out = Vec::new();
    if dedupe {
        let mut deduper = SegmentDeduper::new();
        decompose_into(geometry, Some(&mut deduper), &mut out);
    } else {
        decompose_into(geometry, None, &mut out);
    }
    out
}
