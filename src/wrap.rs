//! Splitting expanded lines across a column budget.
//!
//! The wrapper partitions an [`ExpandedLine`] into sub-line cell ranges, each
//! spanning at most `width` display columns. The whole partition is computed
//! up front (page-break accounting needs the sub-line count before emission
//! starts). Two modes:
//!
//! - dumb (`clever_wrap` off): cut at exactly the column budget;
//! - intelligent (default): search backward from the budget for the nearest
//!   whitespace or punctuation boundary, and take it only when the head piece
//!   is at least `min_line_length` columns, otherwise fall back to the hard
//!   cut.

use crate::config::Config;
use crate::expand::ExpandedLine;
use smallvec::SmallVec;
use std::ops::Range;

/// Cell ranges of one logical line's sub-lines, in output order.
pub type SubLines = SmallVec<[Range<usize>; 4]>;

/// True for characters an intelligent wrap may break after.
#[inline]
pub fn is_break_char(ch: char) -> bool {
    ch.is_whitespace() || ch.is_ascii_punctuation()
}

/// Partition `line` into sub-line cell ranges.
///
/// The ranges cover every cell exactly once, in order. An empty line yields
/// one empty range (it still occupies a printed line); a non-empty line never
/// yields a trailing empty range.
pub fn wrap(line: &ExpandedLine, config: &Config) -> SubLines {
    let width = usize::from(config.width);
    let min_len = usize::from(config.min_line_length);
    let mut ranges = SubLines::new();

    if line.is_empty() {
        ranges.push(0..0);
        return ranges;
    }

    let mut start = 0;
    while start < line.len() {
        // Whole remainder fits: emit it and stop.
        if line.width() - line.column(start) <= width {
            ranges.push(start..line.len());
            break;
        }

        // Furthest cut keeping the span within budget, always taking at
        // least one cell so a single over-wide cell cannot stall the loop.
        let mut hard_end = start + 1;
        while hard_end < line.len() && line.span_width(start, hard_end + 1) <= width {
            hard_end += 1;
        }

        let mut end = hard_end;
        if config.clever_wrap {
            // Nearest break boundary at or before the hard cut; accepted
            // only if the head piece stays at or above the minimum.
            for candidate in (start + 1..=hard_end).rev() {
                if is_break_char(line.cells()[candidate - 1].ch) {
                    if line.span_width(start, candidate) >= min_len {
                        end = candidate;
                    }
                    break;
                }
            }
        }

        ranges.push(start..end);
        start = end;
    }

    ranges
}
