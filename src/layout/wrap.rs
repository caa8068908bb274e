//! Paragraph splitting and greedy word wrapping.
//!
//! All widths are terminal columns as reported by `unicode-width`.
//!
//! # Wrapping policy
//!
//! Lines break at the last whitespace at or before the width limit. The
//! whitespace at a break is dropped. A token wider than the whole width is
//! broken mid-token, so every visual line fits the width (the only exception
//! is a single character wider than the width itself, e.g. a CJK character at
//! width 1). Leading indentation is kept.

use std::ops::Range;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const VERTICAL_TAB: char = '\u{0B}';
const FORM_FEED: char = '\u{0C}';

/// Display width of `text` in terminal columns.
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

fn char_width(ch: char) -> usize {
    UnicodeWidthChar::width(ch).unwrap_or(0)
}

/// Split raw text into displayable paragraphs.
///
/// - `\n`, `\v` and `\f` end a paragraph; `\r` is dropped (so `\r\n` is one break)
/// - a single trailing break does not produce an extra empty paragraph
/// - tabs expand to the next multiple of `tab_width` columns
/// - any other control character is dropped
///
/// Empty text yields no paragraphs.
pub fn split_paragraphs(text: &str, tab_width: usize) -> Vec<String> {
    let tab_width = tab_width.max(1);
    let mut paragraphs = Vec::new();
    let mut current = String::new();
    let mut column = 0usize;
    let mut pending = false;

    for ch in text.chars() {
        match ch {
            '\n' | VERTICAL_TAB | FORM_FEED => {
                paragraphs.push(std::mem::take(&mut current));
                column = 0;
                pending = false;
            }
            '\t' => {
                let spaces = tab_width - column % tab_width;
                current.extend(std::iter::repeat(' ').take(spaces));
                column += spaces;
                pending = true;
            }
            c if c.is_control() => {}
            c => {
                current.push(c);
                column += char_width(c);
                pending = true;
            }
        }
    }

    if pending || !current.is_empty() {
        paragraphs.push(current);
    }

    paragraphs
}

#[derive(Debug, Clone, Copy)]
struct BreakPoint {
    /// Byte index where the whitespace run starts (end of the line if broken here).
    ws_start: usize,
    /// Byte index of the first character after the run (start of the next line).
    ws_end: usize,
    /// Line width measured up to `ws_end`.
    width_at_end: usize,
}

/// Wrap one paragraph into byte ranges, each at most `width` columns wide.
///
/// A `width` of zero disables wrapping. An empty paragraph yields a single
/// empty range.
pub fn wrap_paragraph(paragraph: &str, width: usize) -> Vec<Range<usize>> {
    if width == 0 || paragraph.is_empty() {
        return vec![0..paragraph.len()];
    }

    let mut lines = Vec::new();
    let mut line_start = 0usize;
    let mut line_width = 0usize;
    let mut ws_start = 0usize;
    let mut prev_ws = false;
    let mut last_break: Option<BreakPoint> = None;

    for (idx, ch) in paragraph.char_indices() {
        let w = char_width(ch);

        if ch.is_whitespace() {
            if !prev_ws {
                ws_start = idx;
            }
            // Indentation never serves as a break point; split it by width instead
            let leading = ws_start == line_start;
            if leading && line_width > 0 && line_width + w > width {
                lines.push(line_start..idx);
                line_start = idx;
                line_width = 0;
                ws_start = idx;
            }
            line_width += w;
            prev_ws = true;
            continue;
        }

        if prev_ws && ws_start > line_start {
            last_break = Some(BreakPoint {
                ws_start,
                ws_end: idx,
                width_at_end: line_width,
            });
        }
        prev_ws = false;

        if line_width > 0 && line_width + w > width {
            if let Some(point) = last_break.take() {
                lines.push(line_start..point.ws_start);
                line_start = point.ws_end;
                line_width -= point.width_at_end;
            }
            if line_width > 0 && line_width + w > width {
                lines.push(line_start..idx);
                line_start = idx;
                line_width = 0;
            }
        }

        line_width += w;
    }

    let mut end = paragraph.len();
    if line_width > width && prev_ws && ws_start > line_start {
        end = ws_start;
    }
    lines.push(line_start..end);

    lines
}
