//! Coalescing classified cells into maximal same-attribute runs.
//!
//! A segment is the emitter's atomic unit: the longest run of consecutive
//! cells sharing both font style and diff status. Coalescing keeps the output
//! stream minimal, since every segment costs one font-selection directive.

use crate::cell::{CharCell, DiffStatus, Style};
use smallvec::SmallVec;

/// A maximal run of cells sharing (style, status) within one sub-line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    /// Offset of the first cell, relative to the sub-line.
    pub start: usize,
    /// Number of cells in the run.
    pub len: usize,
    /// Shared font style.
    pub style: Style,
    /// Shared diff status.
    pub status: DiffStatus,
}

impl Segment {
    /// End offset (exclusive), relative to the sub-line.
    #[inline]
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

/// Segment runs for one sub-line. Most sub-lines coalesce to a handful of
/// runs, so inline storage covers the common case.
pub type SegmentVec = SmallVec<[Segment; 8]>;

/// Group `cells` into maximal same-attribute runs, in order.
///
/// Single pass; consecutive cells merge iff both style and status match.
/// The returned runs cover every cell exactly once.
pub fn coalesce(cells: &[CharCell]) -> SegmentVec {
    let mut segments = SegmentVec::new();
    let mut iter = cells.iter().enumerate();

    let Some((_, first)) = iter.next() else {
        return segments;
    };
    let mut current = Segment {
        start: 0,
        len: 1,
        style: first.style,
        status: first.status,
    };

    for (i, cell) in iter {
        if cell.style == current.style && cell.status == current.status {
            current.len += 1;
        } else {
            segments.push(current);
            current = Segment {
                start: i,
                len: 1,
                style: cell.style,
                status: cell.status,
            };
        }
    }
    segments.push(current);

    segments
}
