//! Formatting configuration with setup-time validation.
//!
//! All knobs are validated once, before any line is rendered; the pipeline
//! itself never re-checks them. Defaults match the classic printer behavior:
//! tab size 8, minimum intelligent-wrap length 10, page breaks after
//! functions, a fresh sheet per file, intelligent wrapping and form-feed
//! expansion all on.

use thiserror::Error;

/// Smallest accepted tab size.
pub const MIN_TAB_SIZE: u16 = 1;
/// Largest accepted tab size.
pub const MAX_TAB_SIZE: u16 = 20;
/// Smallest accepted minimum-line-length for intelligent wrapping.
pub const MIN_LINE_LENGTH_LOW: u16 = 5;
/// Largest accepted minimum-line-length for intelligent wrapping.
pub const MIN_LINE_LENGTH_HIGH: u16 = 4096;

/// Configuration rejected at setup time.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Tab size outside the accepted range.
    #[error("tab size {0} out of range ({MIN_TAB_SIZE}..={MAX_TAB_SIZE})")]
    TabSize(u16),
    /// Minimum intelligent-wrap length outside the accepted range.
    #[error("minimum line length {0} out of range ({MIN_LINE_LENGTH_LOW}..={MIN_LINE_LENGTH_HIGH})")]
    MinLineLength(u16),
    /// Line-wrap column budget must fit at least one column.
    #[error("line width {0} must be greater than zero")]
    Width(u16),
    /// Lines-per-page capacity must fit at least one line.
    #[error("page length {0} must be greater than zero")]
    PageLength(u16),
}

/// Validated formatting configuration.
///
/// `width` (printable columns per output line) and `page_length` (printable
/// lines per page) are computed by the surrounding page-layout component and
/// handed in here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Tab stops every this many columns (1–20, default 8).
    pub tab_size: u16,
    /// Shortest head piece an intelligent wrap may produce (5–4096, default 10).
    pub min_line_length: u16,
    /// Printable columns per output line (default 80).
    pub width: u16,
    /// Printable lines per page (default 60).
    pub page_length: u16,
    /// Wrap at natural boundaries instead of a hard column cut (default on).
    pub clever_wrap: bool,
    /// Force a page break at the end of each function (default on).
    pub function_page_breaks: bool,
    /// Start each file on a fresh sheet (default on).
    pub new_sheet_after_file: bool,
    /// Expand form feeds into page breaks; when off, a form feed passes
    /// through to the output literally (default on).
    pub expand_form_feeds: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tab_size: 8,
            min_line_length: 10,
            width: 80,
            page_length: 60,
            clever_wrap: true,
            function_page_breaks: true,
            new_sheet_after_file: true,
            expand_form_feeds: true,
        }
    }
}

impl Config {
    /// Check all bounds. Called once by the renderer at construction;
    /// rendering assumes a validated config from then on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_TAB_SIZE..=MAX_TAB_SIZE).contains(&self.tab_size) {
            return Err(ConfigError::TabSize(self.tab_size));
        }
        if !(MIN_LINE_LENGTH_LOW..=MIN_LINE_LENGTH_HIGH).contains(&self.min_line_length) {
            return Err(ConfigError::MinLineLength(self.min_line_length));
        }
        if self.width == 0 {
            return Err(ConfigError::Width(self.width));
        }
        if self.page_length == 0 {
            return Err(ConfigError::PageLength(self.page_length));
        }
        Ok(())
    }
}
