//! Scroll position bounded by content and viewport size.

use crate::model::ViewerAction;
use std::ops::Range;

/// Content and viewport extents used to clamp scrolling.
///
/// Heights are in visual lines, widths in columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollBounds {
    /// Total number of visual lines.
    pub content_height: usize,
    /// Rows available for text.
    pub viewport_height: usize,
    /// Width of the widest visual line.
    pub content_width: usize,
    /// Columns available for text.
    pub viewport_width: usize,
}

impl ScrollBounds {
    /// Largest valid vertical offset: `max(0, content_height - viewport_height)`.
    pub fn max_vertical(&self) -> usize {
        self.content_height.saturating_sub(self.viewport_height)
    }

    /// Largest valid horizontal offset: `max(0, content_width - viewport_width)`.
    pub fn max_horizontal(&self) -> usize {
        self.content_width.saturating_sub(self.viewport_width)
    }

    fn page(&self) -> usize {
        self.viewport_height.max(1)
    }
}

/// Vertical and horizontal scroll offsets.
///
/// # Invariant
/// After every mutating call the offsets lie within
/// `[0, bounds.max_vertical()]` and `[0, bounds.max_horizontal()]` for the
/// bounds passed to that call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollState {
    vertical: usize,
    horizontal: usize,
}

impl ScrollState {
    /// First visible visual line.
    pub fn vertical(&self) -> usize {
        self.vertical
    }

    /// First visible column (always 0 while wrapping).
    pub fn horizontal(&self) -> usize {
        self.horizontal
    }

    /// Pull both offsets back into `bounds`.
    pub fn clamp(&mut self, bounds: ScrollBounds) {
        self.vertical = self.vertical.min(bounds.max_vertical());
        self.horizontal = self.horizontal.min(bounds.max_horizontal());
    }

    /// Apply a scroll action, moving `step` lines or columns for single steps.
    ///
    /// Non-scroll actions are ignored. Returns `true` if an offset changed.
    pub fn apply(&mut self, action: ViewerAction, step: usize, bounds: ScrollBounds) -> bool {
        let before = *self;
        let step = step.max(1);

        match action {
            ViewerAction::ScrollUp => self.vertical = self.vertical.saturating_sub(step),
            ViewerAction::ScrollDown => self.vertical = self.vertical.saturating_add(step),
            ViewerAction::PageUp => self.vertical = self.vertical.saturating_sub(bounds.page()),
            ViewerAction::PageDown => {
                self.vertical = self.vertical.saturating_add(bounds.page())
            }
            ViewerAction::ScrollToTop => self.vertical = 0,
            ViewerAction::ScrollToBottom => self.vertical = bounds.max_vertical(),
            ViewerAction::ScrollLeft => self.horizontal = self.horizontal.saturating_sub(step),
            ViewerAction::ScrollRight => {
                self.horizontal = self.horizontal.saturating_add(step)
            }
            _ => {}
        }

        self.clamp(bounds);
        *self != before
    }

    /// Whether the last line is visible.
    pub fn is_at_bottom(&self, bounds: ScrollBounds) -> bool {
        self.vertical >= bounds.max_vertical()
    }

    /// Range of visual lines intersecting the viewport.
    pub fn visible_range(&self, bounds: ScrollBounds) -> Range<usize> {
        let start = self.vertical.min(bounds.content_height);
        let end = self
            .vertical
            .saturating_add(bounds.viewport_height)
            .min(bounds.content_height);
        start..end
    }
}
