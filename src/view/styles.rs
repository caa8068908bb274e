//! Viewer styling.
//!
//! Provides the palette for the normal and error themes.

use crate::model::Theme;
use ratatui::style::{Color, Modifier, Style};

/// Background tint of the error display.
pub const ERROR_BACKGROUND: Color = Color::Rgb(94, 11, 22);

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Colors are disabled when the `NO_COLOR` environment variable is set to
/// any value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Read `NO_COLOR` from the environment.
    pub fn from_env() -> Self {
        Self {
            enabled: std::env::var_os("NO_COLOR").is_none(),
        }
    }

    /// Explicitly enabled or disabled colors.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

// ===== ViewerStyles =====

/// Styles for every part of the viewer frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewerStyles {
    /// Whole frame background and default text.
    pub base: Style,
    /// Border lines.
    pub border: Style,
    /// Title text in the top border.
    pub title: Style,
    /// LIVE marker.
    pub live: Style,
    /// Unfocused button.
    pub button: Style,
    /// Focused button.
    pub focused_button: Style,
    /// Scrollbar thumb and track.
    pub scrollbar: Style,
}

impl ViewerStyles {
    /// Styles for a theme.
    ///
    /// Without colors, the error theme looks like the normal one; focus stays
    /// visible through reversed video.
    pub fn new(theme: Theme, colors: ColorConfig) -> Self {
        let focused_button = Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD);
        if !colors.colors_enabled() {
            return Self {
                base: Style::default(),
                border: Style::default(),
                title: Style::default().add_modifier(Modifier::BOLD),
                live: Style::default().add_modifier(Modifier::BOLD),
                button: Style::default(),
                focused_button,
                scrollbar: Style::default(),
            };
        }

        match theme {
            Theme::Normal => Self {
                base: Style::default(),
                border: Style::default().fg(Color::Gray),
                title: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                live: Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                button: Style::default().fg(Color::White),
                focused_button: focused_button.fg(Color::Cyan),
                scrollbar: Style::default().fg(Color::DarkGray),
            },
            Theme::Error => Self {
                base: Style::default().bg(ERROR_BACKGROUND).fg(Color::White),
                border: Style::default().bg(ERROR_BACKGROUND).fg(Color::LightRed),
                title: Style::default()
                    .bg(ERROR_BACKGROUND)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
                live: Style::default()
                    .bg(ERROR_BACKGROUND)
                    .fg(Color::LightGreen)
                    .add_modifier(Modifier::BOLD),
                button: Style::default().bg(ERROR_BACKGROUND).fg(Color::White),
                focused_button: focused_button.fg(Color::White),
                scrollbar: Style::default().bg(ERROR_BACKGROUND).fg(Color::Gray),
            },
        }
    }
}

impl Default for ViewerStyles {
    fn default() -> Self {
        Self::new(Theme::Normal, ColorConfig::from_env())
    }
}

// ===== Tests =====
