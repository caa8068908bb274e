//! LIVE marker for the title bar.
//!
//! Shown only while the viewer re-reads a script output file. It turns gray
//! while reloads are failing, so stale content is recognisable.

use super::constants::LIVE_MARKER;
use ratatui::{
    style::{Color, Style},
    text::Span,
};

/// State of the live-reload source as far as the marker is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiveState {
    /// Static content: no marker.
    Off,
    /// Reloads succeed.
    Healthy,
    /// The last reload failed; the previous content is still shown.
    Stale,
}

/// LIVE marker widget.
///
/// Pure and stateless: the caller decides the [`LiveState`] and supplies the
/// style used for a healthy source.
#[derive(Debug, Clone)]
pub struct LiveIndicator {
    state: LiveState,
    style: Style,
}

impl LiveIndicator {
    /// Create a marker for `state`, drawn in `style` while healthy.
    pub fn new(state: LiveState, style: Style) -> Self {
        Self { state, style }
    }

    /// Render the marker as a span.
    ///
    /// - `Off` → empty span
    /// - `Healthy` → marker in the supplied style
    /// - `Stale` → gray marker
    pub fn render(&self) -> Span<'static> {
        match self.state {
            LiveState::Off => Span::raw(""),
            LiveState::Healthy => Span::styled(LIVE_MARKER, self.style),
            LiveState::Stale => Span::styled(LIVE_MARKER, self.style.fg(Color::Gray)),
        }
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "live_indicator_tests.rs"]
mod tests;
