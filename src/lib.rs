//! Line-formatting engine for annotated source-to-PostScript printing.
//!
//! `psline` turns classified source lines — each character carrying a font
//! style (normal/italic/bold/underline) and a diff status
//! (insert/delete/normal) — into a PostScript fragment stream, handling tab
//! expansion, column-budget line wrapping, run coalescing and page-break
//! management. Diff computation, language tokenization, option parsing and
//! header printing are the surrounding printer's job; this crate consumes
//! their results.
//!
//! # Pipeline
//!
//! ```text
//! ┌────────────┐    ┌──────────┐    ┌───────────┐    ┌──────────┐
//! │ LineBuffer │ -> │  Expand  │ -> │   Wrap    │ -> │ Coalesce │
//! │ (classified│    │  (tabs → │    │ (column   │    │ (style + │
//! │   cells)   │    │  columns)│    │  budget)  │    │  status  │
//! └────────────┘    └──────────┘    └───────────┘    │   runs)  │
//!                                                    └────┬─────┘
//!                                                         v
//!                                              ┌─────────────────────┐
//!                                              │ Emit + page breaks  │
//!                                              │ (PostScript stream) │
//!                                              └─────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use psline::{Config, LineBuffer, Renderer};
//!
//! let mut renderer = Renderer::new(Vec::new(), Config::default())?;
//! renderer.begin_file()?;
//! renderer.print_line(&LineBuffer::from_plain("int main(void)"))?;
//! let ps = renderer.finish()?;
//! assert!(ps.starts_with(b"%%Page: 1 1\n"));
//! # Ok::<(), psline::Error>(())
//! ```
//!
//! Each emitted segment follows the fixed wire grammar
//! `(<escaped-text><trailer>`, where the trailer selects the font and any
//! strike/underline marks; see [`emit`].

pub mod cell;
pub mod config;
pub mod emit;
pub mod expand;
pub mod page;
pub mod render;
pub mod segment;
pub mod wrap;

pub use cell::{CharCell, DiffStatus, LineBuffer, LineEnd, Style};
pub use config::{Config, ConfigError};
pub use expand::ExpandedLine;
pub use page::{BreakReason, PageState, PageTracker};
pub use render::{DscHooks, Error, PageHooks, Renderer};
pub use segment::{Segment, SegmentVec};
