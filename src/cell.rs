//! Classified character cells: one source character plus its font style and
//! diff status.
//!
//! Cells are produced by an external classifier (language analysis plus diff
//! computation) and consumed immutably by the formatting pipeline. A
//! [`LineBuffer`] carries one logical source line of cells together with its
//! termination kind.

/// Font style assigned to a character by the language classifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Style {
    /// Plain code text.
    #[default]
    Normal,
    /// Comment text.
    Italic,
    /// Keyword or emphasized text.
    Bold,
    /// Function-name or heading text.
    Underline,
}

impl Style {
    /// Number of style variants; row count of the trailer table.
    pub(crate) const COUNT: usize = 4;

    /// Row index into the segment trailer table.
    #[inline]
    pub(crate) fn index(self) -> usize {
        match self {
            Self::Normal => 0,
            Self::Italic => 1,
            Self::Bold => 2,
            Self::Underline => 3,
        }
    }
}

/// Diff classification of a character relative to a prior revision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DiffStatus {
    /// Character was inserted.
    Insert,
    /// Character was deleted (printed struck through).
    Delete,
    /// Character is unchanged.
    #[default]
    Normal,
}

impl DiffStatus {
    /// Number of status variants; column count of the trailer table.
    pub(crate) const COUNT: usize = 3;

    /// Column index into the segment trailer table.
    #[inline]
    pub(crate) fn index(self) -> usize {
        match self {
            Self::Insert => 0,
            Self::Delete => 1,
            Self::Normal => 2,
        }
    }
}

/// How a logical source line terminates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineEnd {
    /// Ordinary newline.
    #[default]
    Newline,
    /// Line ended at a form feed; triggers a page break unless form-feed
    /// expansion is disabled.
    FormFeed,
    /// Line ended at end of input.
    EndOfInput,
}

/// One source character with its classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharCell {
    /// The source character.
    pub ch: char,
    /// Font style from the language classifier.
    pub style: Style,
    /// Diff status from the diff classifier.
    pub status: DiffStatus,
}

impl CharCell {
    /// Create an unclassified (normal style, unchanged) cell.
    #[inline]
    pub fn new(ch: char) -> Self {
        Self {
            ch,
            style: Style::Normal,
            status: DiffStatus::Normal,
        }
    }

    /// Set the font style (builder pattern).
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Set the diff status (builder pattern).
    pub fn with_status(mut self, status: DiffStatus) -> Self {
        self.status = status;
        self
    }
}

/// One logical (pre-wrap) source line as delivered by the classifier.
#[derive(Debug, Clone, Default)]
pub struct LineBuffer {
    cells: Vec<CharCell>,
    end: LineEnd,
}

impl LineBuffer {
    /// Build a line from classified cells.
    pub fn new(cells: Vec<CharCell>, end: LineEnd) -> Self {
        Self { cells, end }
    }

    /// Build an unclassified line from plain text (no style, no diff).
    ///
    /// Convenience for callers and tests that have no classifier in the loop.
    pub fn from_plain(text: &str) -> Self {
        Self {
            cells: text.chars().map(CharCell::new).collect(),
            end: LineEnd::Newline,
        }
    }

    /// The classified cells, in source order.
    #[inline]
    pub fn cells(&self) -> &[CharCell] {
        &self.cells
    }

    /// How the line terminates.
    #[inline]
    pub fn end(&self) -> LineEnd {
        self.end
    }

    /// True if the line has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
