//! Frame driver (impure shell)
//!
//! Owns the terminal: raw mode, alternate screen and mouse capture. Each
//! iteration waits up to one tick for events, hands everything that arrived to
//! the viewer and draws one frame. The terminal is restored on every way out.

use crate::input::InputEvent;
use crate::model::{AppError, ExitStatus, FrameOutcome};
use crate::viewer::Viewer;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{debug, info};

/// Longest wait for input before a frame is drawn anyway.
///
/// Bounds how stale live-reloaded content can look.
pub const TICK: Duration = Duration::from_millis(50);

/// Viewer bound to a terminal.
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    viewer: Viewer,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Take over the real terminal.
    ///
    /// Sets up raw mode, the alternate screen and mouse capture. On failure
    /// the caller must still call [`restore_terminal`].
    pub fn new(viewer: Viewer) -> Result<Self, AppError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(EnableMouseCapture)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self::with_terminal(terminal, viewer))
    }

    /// Run until the viewer reports an exit status.
    pub fn run(&mut self) -> Result<ExitStatus, AppError> {
        loop {
            let events = collect_events(TICK)?;
            if let Some(status) = self.frame(&events)?.exit_status() {
                return Ok(status);
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Bind a viewer to an existing terminal.
    pub fn with_terminal(terminal: Terminal<B>, viewer: Viewer) -> Self {
        Self { terminal, viewer }
    }

    /// Draw one frame with the given input.
    pub fn frame(&mut self, events: &[InputEvent]) -> Result<FrameOutcome, AppError> {
        let mut outcome = FrameOutcome::Continue;
        let viewer = &mut self.viewer;
        self.terminal
            .draw(|frame| outcome = viewer.draw(frame, events))?;
        Ok(outcome)
    }

    /// The viewer being driven.
    pub fn viewer(&self) -> &Viewer {
        &self.viewer
    }

    /// The terminal being drawn to.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

/// Wait up to `timeout` for input, then drain everything already queued.
fn collect_events(timeout: Duration) -> io::Result<Vec<InputEvent>> {
    let mut events = Vec::new();
    if !event::poll(timeout)? {
        return Ok(events);
    }

    loop {
        if let Some(input) = InputEvent::from_terminal(event::read()?) {
            events.push(input);
        }
        if !event::poll(Duration::ZERO)? {
            break;
        }
    }

    debug!(count = events.len(), "Input events collected");
    Ok(events)
}

/// Run a viewer full-screen and return how the session ended.
///
/// This is the main entry point for the TUI. It handles terminal setup, runs
/// the event loop, and restores the terminal whether or not the loop failed.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_viewer(viewer: Viewer) -> Result<ExitStatus, AppError> {
    let mut app = match TuiApp::new(viewer) {
        Ok(app) => app,
        Err(error) => {
            let _ = restore_terminal();
            return Err(error);
        }
    };

    let result = app.run();
    let restored = restore_terminal();

    let status = result?;
    restored?;
    info!(?status, code = status.code(), "Viewer finished");
    Ok(status)
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
pub fn restore_terminal() -> Result<(), AppError> {
    disable_raw_mode()?;
    io::stdout().execute(DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
