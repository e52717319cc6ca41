//! Tab expansion into fixed-width column slots.
//!
//! Expansion is a pure function of the input line and the tab size: each tab
//! is replaced by space cells (inheriting the tab's style and diff status) up
//! to the next tab stop, and every cell's starting display column is recorded
//! for the wrapper. Column advance is Unicode-width aware so wide characters
//! occupy two slots.

use crate::cell::CharCell;
use unicode_width::UnicodeWidthChar;

/// A line with tabs expanded and per-cell column positions computed.
#[derive(Debug, Clone, Default)]
pub struct ExpandedLine {
    cells: Vec<CharCell>,
    columns: Vec<usize>,
    width: usize,
}

impl ExpandedLine {
    /// The expanded cells (tab-free), in order.
    #[inline]
    pub fn cells(&self) -> &[CharCell] {
        &self.cells
    }

    /// Starting display column of each cell.
    #[inline]
    pub fn columns(&self) -> &[usize] {
        &self.columns
    }

    /// Starting display column of cell `i`.
    #[inline]
    pub fn column(&self, i: usize) -> usize {
        self.columns[i]
    }

    /// Total display width of the line in columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of cells after expansion.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True if the line expanded to nothing.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Display width of the half-open cell range `[start, end)`.
    #[inline]
    pub fn span_width(&self, start: usize, end: usize) -> usize {
        let from = self.columns.get(start).copied().unwrap_or(self.width);
        let to = self.columns.get(end).copied().unwrap_or(self.width);
        to - from
    }
}

/// Display width of one cell. Control characters are emitted as single
/// escaped glyphs downstream, so they advance one column.
#[inline]
pub(crate) fn cell_width(ch: char) -> usize {
    UnicodeWidthChar::width(ch).unwrap_or(1).max(1)
}

/// Expand tabs in `cells` against tab stops every `tab_size` columns.
///
/// Inserted space cells inherit the tab's style and diff status, so a tab
/// inside an inserted region stays part of that region's segment. Tab-free
/// input passes through unchanged.
pub fn expand(cells: &[CharCell], tab_size: u16) -> ExpandedLine {
    let tab = usize::from(tab_size);
    let mut out = ExpandedLine {
        cells: Vec::with_capacity(cells.len()),
        columns: Vec::with_capacity(cells.len()),
        width: 0,
    };

    for cell in cells {
        if cell.ch == '\t' {
            let next_stop = (out.width / tab + 1) * tab;
            while out.width < next_stop {
                out.columns.push(out.width);
                out.cells.push(CharCell { ch: ' ', ..*cell });
                out.width += 1;
            }
        } else {
            out.columns.push(out.width);
            out.cells.push(*cell);
            out.width += cell_width(cell.ch);
        }
    }

    out
}
