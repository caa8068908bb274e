//! Immutable display configuration captured when the viewer is built.

/// Colour scheme of the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Regular dark background.
    #[default]
    Normal,
    /// Red-tinted background used for error reports (`--error_display`).
    Error,
}

/// Everything that shapes how the viewer looks and behaves, fixed for its lifetime.
///
/// Built once from the resolved CLI arguments and configuration; the render
/// path reads these fields instead of re-checking flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Text shown in the title bar.
    pub title: String,
    /// Whether the "Yes" button (exit code 1) is offered.
    pub confirm_button: bool,
    /// Whether long lines wrap to the viewport width.
    ///
    /// When `false`, long lines extend past the right edge and the view
    /// scrolls horizontally instead.
    pub wrap_lines: bool,
    /// Whether the document is re-read from a script output file every frame.
    pub live_reload: bool,
    /// Colour scheme.
    pub theme: Theme,
    /// Requested font size in pixels.
    ///
    /// A terminal cannot change its font, so this is only a hint carried
    /// for logging and for frontends that can honour it.
    pub font_size: Option<u16>,
}

impl DisplayConfig {
    /// Create a configuration with the given title and every option off.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            confirm_button: false,
            wrap_lines: false,
            live_reload: false,
            theme: Theme::Normal,
            font_size: None,
        }
    }

    /// Enable or disable the confirm button.
    pub fn with_confirm_button(mut self, enabled: bool) -> Self {
        self.confirm_button = enabled;
        self
    }

    /// Enable or disable line wrapping.
    pub fn with_wrap_lines(mut self, enabled: bool) -> Self {
        self.wrap_lines = enabled;
        self
    }

    /// Enable or disable live reload.
    pub fn with_live_reload(mut self, enabled: bool) -> Self {
        self.live_reload = enabled;
        self
    }

    /// Set the colour scheme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Set the font size hint. Zero is treated as "not set".
    pub fn with_font_size(mut self, font_size: Option<u16>) -> Self {
        self.font_size = font_size.filter(|size| *size > 0);
        self
    }
}
