//! Sheet-level handling on top of the transposer.
//!
//! A transposed sheet starts with a header such as `Transpose -2`, naming the
//! shift that brings it back to the original pitch, followed by a blank line.
//! Any line mentioning "transp" (`Transpose -2`, `+5 Transposition`, ...) is
//! an annotation: it is never transposed and never scored.

use crate::transposer::{lines, Transposer};

const HEADER_PREFIX: &str = "Transpose ";
const ANNOTATION_MARKER: &str = "transp";

pub fn is_annotation(line: &str) -> bool {
    line.to_ascii_lowercase().contains(ANNOTATION_MARKER)
}

/// Header for a sheet transposed by `offset`, or None at pitch.
pub fn header(offset: i64) -> Option<String> {
    if offset == 0 {
        return None;
    }
    offset
        .checked_neg()
        .map(|undo| format!("{}{:+}", HEADER_PREFIX, undo))
}

/// Splits off a leading header written by `render`, returning the shift it
/// records (the sheet's offset from original pitch) and the remaining body.
/// A number outside `i32` is not a header; the line stays an annotation.
pub fn split_header(text: &str) -> (i64, &str) {
    let (first, rest) = match text.split_once('\n') {
        Some(parts) => parts,
        None => return (0, text),
    };
    let first = first.strip_suffix('\r').unwrap_or(first);
    let undo = match first
        .strip_prefix(HEADER_PREFIX)
        .and_then(|n| n.trim().parse::<i32>().ok())
    {
        Some(n) => n,
        None => return (0, text),
    };
    let rest = rest
        .strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))
        .unwrap_or(rest);
    (-(undo as i64), rest)
}

/// Sheet text without annotation lines.
pub fn body(text: &str) -> String {
    lines(text)
        .filter(|line| !is_annotation(line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Transposes every line except annotations, which are copied verbatim.
pub fn transpose_sheet(text: &str, offset: i32, transposer: &Transposer) -> String {
    let mut out = String::with_capacity(text.len());
    for (i, line) in lines(text).enumerate() {
        if i > 0 {
            out.push('\n');
        }
        if is_annotation(line) {
            out.push_str(line);
        } else {
            transposer.transpose_line_into(line, offset, &mut out);
        }
    }
    out
}

/// Transposes a sheet and rewrites its header. A header from an earlier
/// run is replaced by one covering the combined shift.
pub fn render(text: &str, offset: i32, transposer: &Transposer, with_header: bool) -> String {
    let (previous, rest) = split_header(text);
    let source = if with_header { rest } else { text };
    let transposed = transpose_sheet(source, offset, transposer);

    // Both shifts come from i32, so the sum fits.
    match header(previous + offset as i64).filter(|_| with_header) {
        Some(h) => format!("{}\n\n{}", h, transposed),
        None => transposed,
    }
}
