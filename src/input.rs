//! Input events and their translation into viewer commands.
//!
//! The frame driver converts terminal events (and, when a controller backend
//! is wired in, gamepad buttons) into [`InputEvent`]s. The viewer translates
//! each one into a [`Command`] using the key bindings and the button areas
//! placed for the frame being drawn.

use crate::config::KeyBindings;
use crate::model::{ControllerButton, ViewerAction};
use crossterm::event::{Event, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

/// A device-level input event delivered to the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Keyboard key.
    Key(KeyEvent),
    /// Mouse click or wheel.
    Mouse(MouseEvent),
    /// Game controller button press.
    Controller(ControllerButton),
    /// The window or session asked to close.
    CloseRequested,
}

impl InputEvent {
    /// Convert a crossterm event.
    ///
    /// Key releases, focus changes, pastes and resizes yield `None`; resizes
    /// are picked up from the frame size on the next draw.
    pub fn from_terminal(event: Event) -> Option<Self> {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => Some(InputEvent::Key(key)),
            Event::Mouse(mouse) => Some(InputEvent::Mouse(mouse)),
            _ => None,
        }
    }
}

/// On-screen buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    /// Confirms and exits with status 1. Only shown with the yes button enabled.
    Yes,
    /// Closes and exits with status 0.
    Close,
}

impl Button {
    /// Text drawn for the button.
    pub fn label(self) -> &'static str {
        match self {
            Button::Yes => "[ Yes ]",
            Button::Close => "[ Close ]",
        }
    }

    /// The action performed when the button is pressed.
    pub fn action(self) -> ViewerAction {
        match self {
            Button::Yes => ViewerAction::Confirm,
            Button::Close => ViewerAction::Cancel,
        }
    }
}

/// Where a button is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonArea {
    /// Which button.
    pub button: Button,
    /// Its screen area.
    pub area: Rect,
}

/// What an input event asks the viewer to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// A bound action.
    Action(ViewerAction),
    /// A button was clicked.
    Press(Button),
}

/// Find the button (if any) under a mouse position.
pub fn detect_button_click(column: u16, row: u16, buttons: &[ButtonArea]) -> Option<Button> {
    buttons
        .iter()
        .find(|hit| {
            let area = hit.area;
            column >= area.x
                && column < area.x.saturating_add(area.width)
                && row >= area.y
                && row < area.y.saturating_add(area.height)
        })
        .map(|hit| hit.button)
}

/// Translate one input event into a command.
///
/// Returns `None` for unbound keys, unbound controller buttons and mouse
/// events that hit nothing.
pub fn translate(
    event: &InputEvent,
    bindings: &KeyBindings,
    buttons: &[ButtonArea],
) -> Option<Command> {
    match event {
        InputEvent::Key(key) => {
            if key.kind == KeyEventKind::Release {
                return None;
            }
            bindings.get(*key).map(Command::Action)
        }
        InputEvent::Mouse(mouse) => match mouse.kind {
            MouseEventKind::ScrollUp => Some(Command::Action(ViewerAction::ScrollUp)),
            MouseEventKind::ScrollDown => Some(Command::Action(ViewerAction::ScrollDown)),
            MouseEventKind::ScrollLeft => Some(Command::Action(ViewerAction::ScrollLeft)),
            MouseEventKind::ScrollRight => Some(Command::Action(ViewerAction::ScrollRight)),
            MouseEventKind::Down(MouseButton::Left) => {
                detect_button_click(mouse.column, mouse.row, buttons).map(Command::Press)
            }
            _ => None,
        },
        InputEvent::Controller(button) => bindings.controller(*button).map(Command::Action),
        InputEvent::CloseRequested => Some(Command::Action(ViewerAction::Quit)),
    }
}
