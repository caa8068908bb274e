//! Frame geometry.
//!
//! Pure layout logic: splits the terminal area into the bordered title block,
//! the text area, the scrollbar column and the button bar, and places the
//! buttons inside the bar.

use super::constants::{BUTTON_BAR_HEIGHT, BUTTON_GAP, SCROLLBAR_WIDTH};
use crate::input::{Button, ButtonArea};
use crate::layout::display_width;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Block,
};

/// Areas of one viewer frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewerLayout {
    /// Whole frame, including the border.
    pub outer: Rect,
    /// Text pane inside the border.
    pub text: Rect,
    /// One-column scrollbar to the right of the text.
    pub scrollbar: Rect,
    /// Row of buttons at the bottom of the block.
    pub button_bar: Rect,
}

impl ViewerLayout {
    /// Split `area` into the viewer's regions.
    pub fn compute(area: Rect) -> Self {
        let inner = Block::bordered().inner(area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),                    // Text + scrollbar
                Constraint::Length(BUTTON_BAR_HEIGHT), // Buttons
            ])
            .split(inner);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(0),                  // Text
                Constraint::Length(SCROLLBAR_WIDTH), // Scrollbar
            ])
            .split(rows[0]);

        Self {
            outer: area,
            text: columns[0],
            scrollbar: columns[1],
            button_bar: rows[1],
        }
    }

    /// Columns available to wrapped text.
    pub fn wrap_width(&self) -> usize {
        usize::from(self.text.width)
    }

    /// Rows available to text.
    pub fn viewport_height(&self) -> usize {
        usize::from(self.text.height)
    }
}

/// Place `buttons` centred in `bar`, separated by a fixed gap.
///
/// Buttons that do not fit are clipped at the right edge or left out.
pub fn button_areas(bar: Rect, buttons: &[Button]) -> Vec<ButtonArea> {
    if bar.height == 0 || bar.width == 0 || buttons.is_empty() {
        return Vec::new();
    }

    let widths: Vec<u16> = buttons
        .iter()
        .map(|button| u16::try_from(display_width(button.label())).unwrap_or(u16::MAX))
        .collect();
    let gaps = BUTTON_GAP.saturating_mul(u16::try_from(buttons.len() - 1).unwrap_or(u16::MAX));
    let total = widths
        .iter()
        .fold(gaps, |sum, width| sum.saturating_add(*width));

    let mut x = bar.x + bar.width.saturating_sub(total) / 2;
    let right = bar.right();
    let mut areas = Vec::with_capacity(buttons.len());

    for (button, width) in buttons.iter().zip(widths) {
        if x >= right {
            break;
        }
        areas.push(ButtonArea {
            button: *button,
            area: Rect::new(x, bar.y, width.min(right - x), bar.height),
        });
        x = x.saturating_add(width).saturating_add(BUTTON_GAP);
    }

    areas
}

// ===== Tests =====

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
