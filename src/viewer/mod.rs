//! The viewer core.
//!
//! Owns the document, its layout, the scroll position and the button focus,
//! and turns one frame's worth of input into either "keep going" or an exit
//! status.
//!
//! # Frame order
//!
//! Each [`Viewer::draw`] call:
//! 1. re-reads the script output file (live mode); when the file outgrew the
//!    read bound and lines fell off the head, the scroll offset moves up by
//!    as many visual lines
//! 2. relayouts if the document version or the wrap width changed
//! 3. clamps the scroll position to the new bounds
//! 4. applies the input events in arrival order; the first event that ends
//!    the session wins and the rest are dropped
//! 5. paints the frame
//!
//! # State machine
//!
//! `Running` → `Confirmed` | `Cancelled`. Both are terminal: the exit outcome
//! is returned exactly once.

use crate::config::{KeyBindings, ResolvedConfig};
use crate::input::{self, Button, ButtonArea, Command, InputEvent};
use crate::layout::{LayoutCache, ScrollBounds, ScrollState, WrapWidth};
use crate::model::{DisplayConfig, Document, ExitStatus, FrameOutcome, ViewerAction};
use crate::source::{ScriptOutput, ScriptTailer, ViewerContent};
use crate::view::{
    self, ColorConfig, FrameContent, LiveState, ScrollIndicator, ViewerLayout, ViewerStyles,
};
use ratatui::Frame;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Lifecycle of a viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerStatus {
    /// Accepting input.
    Running,
    /// Ended with "Yes" (exit code 1).
    Confirmed,
    /// Ended with close, cancel or quit (exit code 0).
    Cancelled,
}

impl ViewerStatus {
    /// Whether the session is over.
    pub fn is_terminal(self) -> bool {
        self != ViewerStatus::Running
    }
}

impl From<ExitStatus> for ViewerStatus {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Confirmed => ViewerStatus::Confirmed,
            ExitStatus::Cancelled => ViewerStatus::Cancelled,
        }
    }
}

/// Tunables taken from the resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerSettings {
    /// Lines (or columns) per single scroll step.
    pub scroll_step: usize,
    /// Tab stop width.
    pub tab_width: usize,
    /// Minimum time between two reads of the script output file.
    pub reload_interval: Duration,
    /// Upper bound on one read of the script output file.
    pub max_reload_bytes: u64,
    /// Keep the view pinned to the bottom when new output arrives.
    pub follow_tail: bool,
}

impl ViewerSettings {
    /// Take the viewer's settings from a resolved configuration.
    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self {
            scroll_step: config.scroll_step.max(1),
            tab_width: config.tab_width.max(1),
            reload_interval: config.reload_interval(),
            max_reload_bytes: config.max_reload_bytes,
            follow_tail: config.follow_tail,
        }
    }
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self::from_config(&ResolvedConfig::default())
    }
}

/// Full-screen text viewer.
#[derive(Debug)]
pub struct Viewer {
    config: DisplayConfig,
    settings: ViewerSettings,
    bindings: KeyBindings,
    styles: ViewerStyles,
    document: Document,
    tailer: Option<ScriptTailer>,
    window_offset: u64,
    reload_failing: bool,
    cache: LayoutCache,
    scroll: ScrollState,
    bounds: ScrollBounds,
    buttons: Vec<Button>,
    focus: usize,
    button_areas: Vec<ButtonArea>,
    status: ViewerStatus,
}

impl Viewer {
    /// Build a viewer.
    ///
    /// Live content is read on the first frame. If `config.live_reload` is
    /// off, a script file is read once and never again.
    pub fn new(config: DisplayConfig, content: ViewerContent, settings: ViewerSettings) -> Self {
        let (document, tailer) = match content {
            ViewerContent::Static(document) => (document, None),
            ViewerContent::Live(path) => {
                let tailer =
                    ScriptTailer::new(path, settings.reload_interval, settings.max_reload_bytes);
                info!(
                    path = %tailer.path().display(),
                    interval_ms = settings.reload_interval.as_millis() as u64,
                    "Following script output"
                );
                (Document::default(), Some(tailer))
            }
        };

        let buttons = if config.confirm_button {
            vec![Button::Yes, Button::Close]
        } else {
            vec![Button::Close]
        };
        // Focus starts on Close.
        let focus = buttons.len() - 1;

        if let Some(font_size) = config.font_size {
            debug!(font_size, "Font size requested; terminals keep their own font");
        }
        info!(
            title = %config.title,
            confirm_button = config.confirm_button,
            wrap_lines = config.wrap_lines,
            live_reload = config.live_reload,
            theme = ?config.theme,
            empty = document.is_empty(),
            "Viewer created"
        );

        Self {
            styles: ViewerStyles::new(config.theme, ColorConfig::from_env()),
            cache: LayoutCache::new(settings.tab_width),
            config,
            settings,
            bindings: KeyBindings::default(),
            document,
            tailer,
            window_offset: 0,
            reload_failing: false,
            scroll: ScrollState::default(),
            bounds: ScrollBounds::default(),
            buttons,
            focus,
            button_areas: Vec::new(),
            status: ViewerStatus::Running,
        }
    }

    /// Replace the styles (the default follows the theme and `NO_COLOR`).
    pub fn with_styles(mut self, styles: ViewerStyles) -> Self {
        self.styles = styles;
        self
    }

    /// Current lifecycle state.
    pub fn status(&self) -> ViewerStatus {
        self.status
    }

    /// The display configuration.
    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// The document currently shown.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Current scroll position.
    pub fn scroll(&self) -> ScrollState {
        self.scroll
    }

    /// Scroll bounds of the last frame.
    pub fn bounds(&self) -> ScrollBounds {
        self.bounds
    }

    /// Button that Enter or controller A would press.
    pub fn focused_button(&self) -> Option<Button> {
        self.buttons.get(self.focus).copied()
    }

    /// Where the buttons were placed in the last frame.
    pub fn button_areas(&self) -> &[ButtonArea] {
        &self.button_areas
    }

    /// Number of times the text has been laid out.
    pub fn relayout_count(&self) -> u64 {
        self.cache.relayout_count()
    }

    /// Draw one frame and process this frame's input.
    ///
    /// Returns [`FrameOutcome::Exit`] on the frame where the session ends.
    /// Called after that, it draws nothing, logs a warning and returns
    /// [`FrameOutcome::Continue`].
    pub fn draw(&mut self, frame: &mut Frame, input: &[InputEvent]) -> FrameOutcome {
        if self.status.is_terminal() {
            warn!(status = ?self.status, "draw called after the session ended; ignoring");
            return FrameOutcome::Continue;
        }

        let was_at_bottom = self.scroll.is_at_bottom(self.bounds);
        let reloaded = self.reload();

        let layout = ViewerLayout::compute(frame.area());
        self.relayout(&layout);
        if reloaded && self.settings.follow_tail && was_at_bottom {
            self.scroll.apply(ViewerAction::ScrollToBottom, 1, self.bounds);
        }
        self.button_areas = view::button_areas(layout.button_bar, &self.buttons);

        let outcome = self.apply_input(input);

        self.render(frame, &layout);
        outcome
    }

    /// Re-read the script output file. Returns `true` if the document changed.
    fn reload(&mut self) -> bool {
        let result = match self.tailer.as_mut().and_then(ScriptTailer::poll) {
            Some(result) => result,
            None => return false,
        };
        if !self.config.live_reload {
            self.tailer = None;
        }

        match result {
            Ok(ScriptOutput { text, offset }) => {
                if self.reload_failing {
                    info!("Script output readable again");
                    self.reload_failing = false;
                }
                let dropped = self.lines_dropped_before(offset);
                self.window_offset = offset;
                let changed = self.document.replace(text);
                if changed {
                    if dropped > 0 {
                        self.scroll
                            .apply(ViewerAction::ScrollUp, dropped, self.bounds);
                    }
                    debug!(
                        version = self.document.version().get(),
                        bytes = self.document.text().len(),
                        dropped,
                        "Document reloaded"
                    );
                }
                changed
            }
            Err(error) => {
                if self.reload_failing {
                    debug!(%error, "Reload still failing");
                } else {
                    warn!(%error, "Reload failed, keeping last good content");
                    self.reload_failing = true;
                }
                false
            }
        }
    }

    /// Visual lines of the current document that a read window starting at
    /// `offset` no longer contains.
    fn lines_dropped_before(&self, offset: u64) -> usize {
        let text = self.document.text().as_bytes();
        let advance = offset
            .checked_sub(self.window_offset)
            .and_then(|advance| usize::try_from(advance).ok())
            .unwrap_or(0);
        if advance == 0 || advance > text.len() || !self.cache.describes(self.document.version()) {
            return 0;
        }

        let paragraphs = text[..advance]
            .iter()
            .filter(|b| matches!(**b, b'\n' | 0x0B | 0x0C))
            .count();
        self.cache.first_line_of(paragraphs)
    }

    fn relayout(&mut self, layout: &ViewerLayout) {
        let wrap = if self.config.wrap_lines {
            WrapWidth::Columns(layout.wrap_width().max(1))
        } else {
            WrapWidth::Unbounded
        };
        self.cache.ensure(&self.document, wrap);

        self.bounds = ScrollBounds {
            content_height: self.cache.line_count(),
            viewport_height: layout.viewport_height(),
            content_width: match wrap {
                WrapWidth::Unbounded => self.cache.max_line_width(),
                WrapWidth::Columns(_) => 0,
            },
            viewport_width: layout.wrap_width(),
        };
        self.scroll.clamp(self.bounds);
    }

    fn apply_input(&mut self, input: &[InputEvent]) -> FrameOutcome {
        for event in input {
            let Some(command) = input::translate(event, &self.bindings, &self.button_areas) else {
                continue;
            };
            let action = match command {
                Command::Action(action) => action,
                Command::Press(button) => {
                    if let Some(index) = self.buttons.iter().position(|b| *b == button) {
                        self.focus = index;
                    }
                    button.action()
                }
            };

            if let Some(status) = self.apply_action(action) {
                self.status = status.into();
                info!(?status, code = status.code(), ?action, "Session ended");
                return FrameOutcome::Exit(status);
            }
        }
        FrameOutcome::Continue
    }

    fn apply_action(&mut self, action: ViewerAction) -> Option<ExitStatus> {
        match action {
            ViewerAction::FocusNext => {
                self.focus = (self.focus + 1) % self.buttons.len();
                None
            }
            ViewerAction::FocusPrev => {
                self.focus = (self.focus + self.buttons.len() - 1) % self.buttons.len();
                None
            }
            ViewerAction::Activate => {
                let button = self.focused_button()?;
                self.apply_action(button.action())
            }
            ViewerAction::Confirm => {
                if self.config.confirm_button {
                    Some(ExitStatus::Confirmed)
                } else {
                    debug!("Confirm ignored without the yes button");
                    None
                }
            }
            ViewerAction::Cancel | ViewerAction::Quit => Some(ExitStatus::Cancelled),
            scroll if scroll.is_scroll() => {
                self.scroll
                    .apply(scroll, self.settings.scroll_step, self.bounds);
                None
            }
            _ => None,
        }
    }

    fn render(&self, frame: &mut Frame, layout: &ViewerLayout) {
        let live = if !self.config.live_reload {
            LiveState::Off
        } else if self.reload_failing {
            LiveState::Stale
        } else {
            LiveState::Healthy
        };

        let content = FrameContent {
            title: &self.config.title,
            live,
            lines: self
                .cache
                .lines_in(self.scroll.visible_range(self.bounds))
                .collect(),
            horizontal_offset: self.scroll.horizontal(),
            scroll: ScrollIndicator {
                position: self.scroll.vertical(),
                max: self.bounds.max_vertical(),
                viewport: self.bounds.viewport_height,
            },
            buttons: &self.button_areas,
            focused: self.focused_button(),
        };

        view::render_viewer(frame, layout, &content, &self.styles);
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "viewer_tests.rs"]
mod tests;
