//! Test harness for viewer tests
//!
//! Wraps a [`Viewer`] and a `Terminal<TestBackend>` so tests can feed input
//! frame by frame and inspect what was drawn.

use crate::input::InputEvent;
use crate::model::{ControllerButton, DisplayConfig, Document, FrameOutcome};
use crate::source::ViewerContent;
use crate::view::{ColorConfig, ViewerStyles};
use crate::viewer::{Viewer, ViewerSettings};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;

/// Convert a ratatui buffer to a string representation for snapshot testing.
///
/// Captures the visual output character by character, preserving layout.
/// Empty lines are removed to keep snapshots clean.
pub(crate) fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buffer[(x, y)].symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

/// Static content from a string.
pub(crate) fn text(content: &str) -> ViewerContent {
    ViewerContent::Static(Document::new(content))
}

/// Viewer driven frame by frame against an in-memory terminal.
pub(crate) struct ViewerHarness {
    terminal: Terminal<TestBackend>,
    viewer: Viewer,
}

impl ViewerHarness {
    /// 80x24 terminal with default settings.
    pub(crate) fn new(config: DisplayConfig, content: ViewerContent) -> Self {
        Self::with_size(config, content, ViewerSettings::default(), 80, 24)
    }

    /// Custom settings and terminal size.
    pub(crate) fn with_size(
        config: DisplayConfig,
        content: ViewerContent,
        settings: ViewerSettings,
        width: u16,
        height: u16,
    ) -> Self {
        let styles = ViewerStyles::new(config.theme, ColorConfig::new(true));
        let viewer = Viewer::new(config, content, settings).with_styles(styles);
        let terminal = Terminal::new(TestBackend::new(width, height)).expect("test terminal");
        Self { terminal, viewer }
    }

    /// Draw one frame with the given input.
    pub(crate) fn frame(&mut self, input: &[InputEvent]) -> FrameOutcome {
        let mut outcome = FrameOutcome::Continue;
        let viewer = &mut self.viewer;
        self.terminal
            .draw(|frame| outcome = viewer.draw(frame, input))
            .expect("draw frame");
        outcome
    }

    /// Draw one frame without input.
    pub(crate) fn idle(&mut self) -> FrameOutcome {
        self.frame(&[])
    }

    /// Draw one frame with a single key press.
    pub(crate) fn press(&mut self, code: KeyCode) -> FrameOutcome {
        self.press_with(code, KeyModifiers::NONE)
    }

    /// Draw one frame with a single key press and modifiers.
    pub(crate) fn press_with(&mut self, code: KeyCode, modifiers: KeyModifiers) -> FrameOutcome {
        self.frame(&[InputEvent::Key(KeyEvent::new(code, modifiers))])
    }

    /// Draw one frame with a single controller button press.
    pub(crate) fn controller(&mut self, button: ControllerButton) -> FrameOutcome {
        self.frame(&[InputEvent::Controller(button)])
    }

    /// Draw one frame with a left click at the given cell.
    pub(crate) fn click(&mut self, column: u16, row: u16) -> FrameOutcome {
        self.frame(&[InputEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })])
    }

    /// Change the terminal size; takes effect on the next frame.
    pub(crate) fn resize(&mut self, width: u16, height: u16) {
        self.terminal.backend_mut().resize(width, height);
    }

    /// What the terminal currently shows.
    pub(crate) fn screen(&self) -> String {
        buffer_to_string(self.terminal.backend().buffer())
    }

    /// The viewer under test.
    pub(crate) fn viewer(&self) -> &Viewer {
        &self.viewer
    }
}
