//! Memoized visual-line layout of a document.
//!
//! Two levels of caching:
//! - paragraphs (sanitized text) are rebuilt only when the document version changes
//! - visual lines are rebuilt when paragraphs change or the wrap width changes
//!
//! Each rebuild is linear in the document size.

use super::wrap::{display_width, split_paragraphs, wrap_paragraph};
use crate::model::{Document, DocumentVersion};
use std::ops::Range;
use tracing::debug;

/// How lines are laid out horizontally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WrapWidth {
    /// One visual line per paragraph; the view scrolls horizontally.
    Unbounded,
    /// Wrap to this many columns.
    Columns(usize),
}

/// One row of laid-out text.
#[derive(Debug, Clone, PartialEq, Eq)]
struct VisualLine {
    paragraph: usize,
    range: Range<usize>,
}

/// Cached visual lines for one document at one wrap width.
#[derive(Debug, Clone)]
pub struct LayoutCache {
    tab_width: usize,
    source: Option<DocumentVersion>,
    paragraphs: Vec<String>,
    wrap: Option<WrapWidth>,
    lines: Vec<VisualLine>,
    max_line_width: usize,
    relayouts: u64,
}

impl LayoutCache {
    /// Create an empty, invalid cache.
    pub fn new(tab_width: usize) -> Self {
        Self {
            tab_width: tab_width.max(1),
            source: None,
            paragraphs: Vec::new(),
            wrap: None,
            lines: Vec::new(),
            max_line_width: 0,
            relayouts: 0,
        }
    }

    /// Make the cache match `document` at `wrap`, recomputing only what is stale.
    ///
    /// Returns `true` if the visual lines were rebuilt.
    pub fn ensure(&mut self, document: &Document, wrap: WrapWidth) -> bool {
        let version = document.version();
        let paragraphs_stale = self.source != Some(version);
        if paragraphs_stale {
            self.paragraphs = split_paragraphs(document.text(), self.tab_width);
            self.source = Some(version);
        }

        if !paragraphs_stale && self.wrap == Some(wrap) {
            return false;
        }

        self.rebuild_lines(wrap);
        debug!(
            version = version.get(),
            ?wrap,
            lines = self.lines.len(),
            "Relayout"
        );
        true
    }

    /// Whether the cached lines were laid out from this document version.
    pub fn describes(&self, version: DocumentVersion) -> bool {
        self.source == Some(version) && self.wrap.is_some()
    }

    /// Number of visual lines (the content height).
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Width in columns of the widest visual line.
    pub fn max_line_width(&self) -> usize {
        self.max_line_width
    }

    /// Index of the first visual line of `paragraph`.
    ///
    /// Paragraphs past the end map to the line count.
    pub fn first_line_of(&self, paragraph: usize) -> usize {
        self.lines.partition_point(|line| line.paragraph < paragraph)
    }

    /// Text of the visual lines in `range`, clipped to the content.
    pub fn lines_in(&self, range: Range<usize>) -> impl Iterator<Item = &str> + '_ {
        let end = range.end.min(self.lines.len());
        let start = range.start.min(end);
        self.lines[start..end]
            .iter()
            .map(move |line| &self.paragraphs[line.paragraph][line.range.clone()])
    }

    /// How many times the visual lines have been rebuilt.
    pub fn relayout_count(&self) -> u64 {
        self.relayouts
    }

    fn rebuild_lines(&mut self, wrap: WrapWidth) {
        let width = match wrap {
            WrapWidth::Unbounded => 0,
            WrapWidth::Columns(columns) => columns,
        };

        let mut lines = Vec::with_capacity(self.paragraphs.len());
        let mut max_line_width = 0;
        for (index, paragraph) in self.paragraphs.iter().enumerate() {
            for range in wrap_paragraph(paragraph, width) {
                max_line_width = max_line_width.max(display_width(&paragraph[range.clone()]));
                lines.push(VisualLine {
                    paragraph: index,
                    range,
                });
            }
        }

        self.lines = lines;
        self.max_line_width = max_line_width;
        self.wrap = Some(wrap);
        self.relayouts += 1;
    }
}
