//! The per-line rendering session.
//!
//! [`Renderer`] owns the output sink, the validated [`Config`] and the page
//! state, and drives one logical line at a time through the full pipeline:
//! expand → wrap → coalesce → emit. Page furniture (headers, banners, the
//! `showpage` machinery) belongs to the surrounding printer and plugs in
//! through [`PageHooks`]; [`DscHooks`] provides a minimal standalone default.
//!
//! Processing is strictly sequential: a line is fully emitted, and the page
//! state updated, before the next line is accepted. Output ordering is exact
//! append order — segments within a sub-line, sub-lines within a line, lines
//! within a page, pages within the stream.

use crate::cell::{CharCell, LineBuffer, LineEnd};
use crate::config::{Config, ConfigError};
use crate::emit::write_segment;
use crate::expand::expand;
use crate::page::{BreakReason, PageTracker};
use crate::segment::coalesce;
use crate::wrap::wrap;
use std::io::{self, Write};
use tracing::{debug, trace};

/// Rendering error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Output sink failure. Fatal: no partial-line recovery is attempted;
    /// write granularity is one segment.
    #[error("output error: {0}")]
    Io(#[from] io::Error),
    /// Configuration rejected before any line was processed.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Page furniture supplied by the surrounding header printer.
///
/// The renderer calls `begin_page` when a page opens (before any content)
/// and `end_page` when it closes. A blank page is a `begin_page` followed
/// immediately by `end_page`.
pub trait PageHooks {
    /// Open a page. `page_number` is global, `file_page_number` restarts per
    /// file when each file gets its own sheet.
    fn begin_page(
        &mut self,
        w: &mut dyn Write,
        page_number: u32,
        file_page_number: u32,
    ) -> io::Result<()>;

    /// Close the page.
    fn end_page(&mut self, w: &mut dyn Write, page_number: u32) -> io::Result<()>;
}

/// Minimal document-structuring furniture: `%%Page` comments on open,
/// `showpage` on close. Enough for standalone output and tests; the real
/// header printer replaces it.
#[derive(Debug, Clone, Copy, Default)]
pub struct DscHooks;

impl PageHooks for DscHooks {
    fn begin_page(
        &mut self,
        w: &mut dyn Write,
        page_number: u32,
        _file_page_number: u32,
    ) -> io::Result<()> {
        writeln!(w, "%%Page: {page_number} {page_number}")
    }

    fn end_page(&mut self, w: &mut dyn Write, _page_number: u32) -> io::Result<()> {
        writeln!(w, "showpage")
    }
}

/// Streaming renderer for classified source lines.
pub struct Renderer<W: Write, H: PageHooks = DscHooks> {
    out: W,
    hooks: H,
    config: Config,
    page: PageTracker,
}

impl<W: Write> Renderer<W, DscHooks> {
    /// Build a renderer with the default DSC furniture.
    ///
    /// Validates `config` up front; no line is ever processed against a
    /// malformed configuration.
    pub fn new(out: W, config: Config) -> Result<Self, Error> {
        Self::with_hooks(out, config, DscHooks)
    }
}

impl<W: Write, H: PageHooks> Renderer<W, H> {
    /// Build a renderer with caller-supplied page furniture.
    pub fn with_hooks(out: W, config: Config, hooks: H) -> Result<Self, Error> {
        config.validate()?;
        Ok(Self {
            out,
            hooks,
            config,
            page: PageTracker::new(),
        })
    }

    /// Reset line and page counters to zero, as at process start.
    ///
    /// Call between documents to reuse one renderer; any open page is closed
    /// first so the stream stays well-formed.
    pub fn reset(&mut self) -> Result<(), Error> {
        self.close_page()?;
        self.page.reset();
        Ok(())
    }

    /// The active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The page furniture.
    pub fn hooks(&self) -> &H {
        &self.hooks
    }

    /// Printed sub-lines on the open page.
    pub fn line_number(&self) -> u32 {
        self.page.line_number()
    }

    /// Global page counter.
    pub fn page_number(&self) -> u32 {
        self.page.page_number()
    }

    /// Page counter within the current file.
    pub fn file_page_number(&self) -> u32 {
        self.page.file_page_number()
    }

    /// Render one classified line: expand tabs, wrap to the column budget,
    /// coalesce runs, emit every sub-line, and update page state. Returns
    /// after the line is fully on the stream.
    pub fn print_line(&mut self, line: &LineBuffer) -> Result<(), Error> {
        let pass_through_feed =
            line.end() == LineEnd::FormFeed && !self.config.expand_form_feeds;

        let expanded = if pass_through_feed {
            // Form feed stays in the text when expansion is disabled.
            let mut cells = line.cells().to_vec();
            cells.push(CharCell::new('\u{000c}'));
            expand(&cells, self.config.tab_size)
        } else {
            expand(line.cells(), self.config.tab_size)
        };

        let sub_lines = wrap(&expanded, &self.config);
        trace!(
            cells = expanded.len(),
            sub_lines = sub_lines.len(),
            "rendering line"
        );

        for range in &sub_lines {
            self.open_page_if_needed()?;
            let cells = &expanded.cells()[range.clone()];
            for segment in coalesce(cells) {
                write_segment(&mut self.out, cells, &segment)?;
            }
            self.out.write_all(b"\n")?;
            if self.page.record_line(self.config.page_length) {
                self.close_page()?;
            }
        }

        if line.end() == LineEnd::FormFeed && self.config.expand_form_feeds {
            // A feed line always emitted at least one (possibly empty)
            // sub-line above, so consecutive form feeds each leave a visible
            // page behind. If the capacity break already closed the page,
            // the form feed is satisfied.
            if self.page.is_open() {
                self.page.force_break(BreakReason::FormFeed);
                self.close_page()?;
            }
        }

        Ok(())
    }

    /// Function boundary signal from the classifier. Forces a page break
    /// unless function page breaks are disabled or nothing is on the page.
    pub fn end_function(&mut self) -> Result<(), Error> {
        if self.config.function_page_breaks && self.page.is_open() {
            self.page.force_break(BreakReason::FunctionEnd);
            self.close_page()?;
        }
        Ok(())
    }

    /// New-file signal. With `new_sheet_after_file` the open page closes,
    /// the file-relative page counter restarts, and the next line starts a
    /// fresh sheet.
    pub fn begin_file(&mut self) -> Result<(), Error> {
        if self.config.new_sheet_after_file {
            debug!(page = self.page.page_number(), "new file starts a fresh sheet");
            if self.page.is_open() {
                self.page.force_break(BreakReason::NewFile);
                self.close_page()?;
            }
            self.page.start_file(true);
        } else {
            self.page.start_file(false);
        }
        Ok(())
    }

    /// Emit a page with boilerplate only and no content.
    ///
    /// Closes any open page first, then opens and immediately closes a fresh
    /// one, so a forced empty sheet is visible rather than silently skipped.
    pub fn blank_page(&mut self) -> Result<(), Error> {
        self.close_page()?;
        self.open_page_if_needed()?;
        self.close_page()?;
        Ok(())
    }

    /// Close the final page and hand back the sink.
    pub fn finish(mut self) -> Result<W, Error> {
        if self.page.is_open() {
            self.page.force_break(BreakReason::EndOfInput);
            self.close_page()?;
        }
        Ok(self.out)
    }

    fn open_page_if_needed(&mut self) -> Result<(), Error> {
        if !self.page.is_open() {
            self.page.open_page();
            self.hooks.begin_page(
                &mut self.out,
                self.page.page_number(),
                self.page.file_page_number(),
            )?;
        }
        Ok(())
    }

    fn close_page(&mut self) -> Result<(), Error> {
        if self.page.is_open() {
            self.hooks.end_page(&mut self.out, self.page.page_number())?;
            self.page.close_page();
        }
        Ok(())
    }
}
