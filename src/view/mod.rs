//! TUI rendering (impure shell)
//!
//! Draws one viewer frame from already laid-out lines: the bordered title
//! block, the visible text, the scrollbar and the button bar. Deciding what is
//! visible is the viewer's job; this module only paints it.

pub mod constants;
pub mod layout;
pub mod live_indicator;
pub mod styles;

pub use layout::{button_areas, ViewerLayout};
pub use live_indicator::{LiveIndicator, LiveState};
pub use styles::{ColorConfig, ViewerStyles};

use crate::input::{Button, ButtonArea};
use ratatui::{
    text::{Line, Span},
    widgets::{Block, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Scroll position as shown by the scrollbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollIndicator {
    /// First visible line.
    pub position: usize,
    /// Largest valid offset; no scrollbar is drawn when zero.
    pub max: usize,
    /// Rows of text visible at once.
    pub viewport: usize,
}

/// Everything needed to paint one frame.
#[derive(Debug, Clone)]
pub struct FrameContent<'a> {
    /// Title shown in the top border.
    pub title: &'a str,
    /// LIVE marker state.
    pub live: LiveState,
    /// Visible visual lines, top to bottom.
    pub lines: Vec<&'a str>,
    /// Columns scrolled off to the left (unwrapped text only).
    pub horizontal_offset: usize,
    /// Vertical scroll position.
    pub scroll: ScrollIndicator,
    /// Button placement for this frame.
    pub buttons: &'a [ButtonArea],
    /// Button drawn as focused.
    pub focused: Option<Button>,
}

/// Render a full viewer frame.
pub fn render_viewer(
    frame: &mut Frame,
    layout: &ViewerLayout,
    content: &FrameContent<'_>,
    styles: &ViewerStyles,
) {
    render_title_block(frame, layout, content, styles);
    render_text(frame, layout, content, styles);
    render_scrollbar(frame, layout, content.scroll, styles);
    render_buttons(frame, content, styles);
}

fn render_title_block(
    frame: &mut Frame,
    layout: &ViewerLayout,
    content: &FrameContent<'_>,
    styles: &ViewerStyles,
) {
    let title = format!(" {} ", printable(content.title));
    let mut block = Block::bordered()
        .border_style(styles.border)
        .style(styles.base)
        .title_top(Line::from(Span::styled(title, styles.title)));

    if content.live != LiveState::Off {
        let marker = LiveIndicator::new(content.live, styles.live).render();
        block = block.title_top(Line::from(marker).right_aligned());
    }

    frame.render_widget(block, layout.outer);
}

fn render_text(
    frame: &mut Frame,
    layout: &ViewerLayout,
    content: &FrameContent<'_>,
    styles: &ViewerStyles,
) {
    let lines: Vec<Line> = content.lines.iter().map(|line| Line::raw(*line)).collect();
    let offset = u16::try_from(content.horizontal_offset).unwrap_or(u16::MAX);
    let paragraph = Paragraph::new(lines).style(styles.base).scroll((0, offset));
    frame.render_widget(paragraph, layout.text);
}

fn render_scrollbar(
    frame: &mut Frame,
    layout: &ViewerLayout,
    scroll: ScrollIndicator,
    styles: &ViewerStyles,
) {
    if scroll.max == 0 {
        return;
    }
    let mut state = ScrollbarState::new(scroll.max)
        .position(scroll.position)
        .viewport_content_length(scroll.viewport);
    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight).style(styles.scrollbar);
    frame.render_stateful_widget(scrollbar, layout.scrollbar, &mut state);
}

fn render_buttons(frame: &mut Frame, content: &FrameContent<'_>, styles: &ViewerStyles) {
    for hit in content.buttons {
        let style = if content.focused == Some(hit.button) {
            styles.focused_button
        } else {
            styles.button
        };
        frame.render_widget(Paragraph::new(hit.button.label()).style(style), hit.area);
    }
}

/// Replace control characters so a title stays on one row.
fn printable(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

// ===== Tests =====
