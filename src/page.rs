//! Page and line bookkeeping with the forced-break policy.
//!
//! One [`PageTracker`] is owned by the rendering session (not ambient global
//! state) and mutated only by it. Counters follow the printer convention:
//! `page_number` is the 1-based number of the page currently being filled,
//! `file_page_number` restarts per file when each file gets its own sheet,
//! and `line_number` counts printed sub-lines on the open page.

use tracing::trace;

/// Why a page break is being forced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakReason {
    /// The page reached its line capacity.
    PageFull,
    /// The classifier signaled the end of a function.
    FunctionEnd,
    /// A form feed in the source.
    FormFeed,
    /// A new file starts on a fresh sheet.
    NewFile,
    /// The input stream ended.
    EndOfInput,
}

/// Break-policy state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PageState {
    /// Accepting lines on the current page (which may not be open yet).
    #[default]
    InPage,
    /// A break is pending; the page must close before further content.
    PageFull,
    /// A new file is pending; the next content starts a fresh sheet.
    NewFilePending,
}

/// Line, page and file-page counters plus the break-policy state machine.
#[derive(Debug, Default)]
pub struct PageTracker {
    state: PageState,
    line_number: u32,
    page_number: u32,
    file_page_number: u32,
    open: bool,
}

impl PageTracker {
    /// Fresh tracker with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset every counter to zero, as at process start.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Current break-policy state.
    #[inline]
    pub fn state(&self) -> PageState {
        self.state
    }

    /// Printed sub-lines on the open page.
    #[inline]
    pub fn line_number(&self) -> u32 {
        self.line_number
    }

    /// 1-based number of the page being filled (0 before the first page).
    #[inline]
    pub fn page_number(&self) -> u32 {
        self.page_number
    }

    /// 1-based page number within the current file.
    #[inline]
    pub fn file_page_number(&self) -> u32 {
        self.file_page_number
    }

    /// True while a page is open for content.
    #[inline]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Open the next page: bump both page counters, zero the line counter.
    pub fn open_page(&mut self) {
        debug_assert!(!self.open);
        self.page_number += 1;
        self.file_page_number += 1;
        self.line_number = 0;
        self.open = true;
        self.state = PageState::InPage;
    }

    /// Account for one emitted sub-line; returns true when the page is full
    /// and must break before any further content.
    pub fn record_line(&mut self, capacity: u16) -> bool {
        self.line_number += 1;
        if self.line_number >= u32::from(capacity) {
            self.state = PageState::PageFull;
        }
        self.state == PageState::PageFull
    }

    /// Force a break regardless of how full the page is.
    pub fn force_break(&mut self, reason: BreakReason) {
        trace!(?reason, page = self.page_number, line = self.line_number, "forced page break");
        self.state = PageState::PageFull;
    }

    /// A new file begins. With `new_sheet` the file-relative page counter
    /// restarts and the next content is forced onto a fresh sheet.
    pub fn start_file(&mut self, new_sheet: bool) {
        if new_sheet {
            self.file_page_number = 0;
            self.state = PageState::NewFilePending;
        }
    }

    /// Close the open page.
    pub fn close_page(&mut self) {
        self.open = false;
        if self.state == PageState::PageFull {
            self.state = PageState::InPage;
        }
    }
}
