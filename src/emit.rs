//! PostScript segment emission.
//!
//! Each segment becomes one output directive:
//! `(<escaped-characters><trailer>` — an opening literal-string marker, the
//! segment text with string-reserved characters escaped, and a trailer that
//! closes the string, selects the font, applies strike/underline marks and
//! shows the text. The trailer is a fixed 4×3 lookup keyed by
//! (style, diff status).

use crate::cell::{CharCell, DiffStatus, Style};
use crate::segment::Segment;
use std::io::{self, Write};

/// Trailer appended after each segment's characters, indexed by
/// `[style][status]`. Reproduced byte-for-byte, including the missing
/// trailing space in the underline/insert entry: downstream renderers parse
/// these fragments verbatim.
#[rustfmt::skip]
const SEGMENT_TRAILERS: [[&str; DiffStatus::COUNT]; Style::COUNT] = [
    //                 INSERT                   DELETE                        NORMAL
    /* NORMAL */    [") BF setfont show ",   ") CF setfont So show ",    ") CF setfont show "],
    /* ITALIC */    [") IF setfont Bs ",     ") IF setfont So show ",    ") IF setfont show "],
    /* BOLD */      [") BF setfont show ",   ") BF setfont So show ",    ") BF setfont show "],
    /* UNDERLINE */ [") BF setfont Ul show", ") CF setfont So Ul show ", ") CF setfont Ul show "],
];

/// The trailer for a (style, status) pair.
#[inline]
pub fn trailer(style: Style, status: DiffStatus) -> &'static str {
    SEGMENT_TRAILERS[style.index()][status.index()]
}

/// Append `ch` to `out` in PostScript literal-string form.
///
/// Parentheses and backslashes get a backslash escape; anything outside
/// printable ASCII is written as three-digit octal escapes, one per UTF-8
/// byte, so the stream stays 7-bit clean.
fn push_escaped(out: &mut Vec<u8>, ch: char) {
    match ch {
        '(' | ')' | '\\' => {
            out.push(b'\\');
            out.push(ch as u8);
        }
        ' '..='~' => out.push(ch as u8),
        _ => {
            let mut buf = [0u8; 4];
            for &byte in ch.encode_utf8(&mut buf).as_bytes() {
                out.extend_from_slice(format!("\\{byte:03o}").as_bytes());
            }
        }
    }
}

/// Write one segment of `cells` to the sink.
///
/// The segment is built in memory and written with a single call, so a sink
/// failure never leaves a half-written segment behind.
pub fn write_segment<W: Write>(w: &mut W, cells: &[CharCell], segment: &Segment) -> io::Result<()> {
    let run = &cells[segment.start..segment.end()];
    let mut out = Vec::with_capacity(run.len() + 24);
    out.push(b'(');
    for cell in run {
        push_escaped(&mut out, cell.ch);
    }
    out.extend_from_slice(trailer(segment.style, segment.status).as_bytes());
    w.write_all(&out)
}
