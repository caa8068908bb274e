//! Keyboard and controller bindings.

use crate::model::{ControllerButton, ViewerAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events and controller buttons to domain actions.
///
/// Provides default vim-style and arrow-key bindings plus the usual
/// controller layout (D-pad scrolls, A activates, B backs out).
#[derive(Debug, Clone)]
pub struct KeyBindings {
    keys: HashMap<KeyEvent, ViewerAction>,
    buttons: HashMap<ControllerButton, ViewerAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    ///
    /// Only the key code and modifiers take part in the lookup; event kind and
    /// keyboard state flags reported by some terminals are ignored.
    pub fn get(&self, key: KeyEvent) -> Option<ViewerAction> {
        let normalized = KeyEvent::new(key.code, key.modifiers);
        self.keys.get(&normalized).copied()
    }

    /// Look up the action for a controller button.
    pub fn controller(&self, button: ControllerButton) -> Option<ViewerAction> {
        self.buttons.get(&button).copied()
    }

    /// Bind (or rebind) a key.
    pub fn bind_key(&mut self, code: KeyCode, modifiers: KeyModifiers, action: ViewerAction) {
        self.keys.insert(KeyEvent::new(code, modifiers), action);
    }

    /// Bind (or rebind) a controller button.
    pub fn bind_button(&mut self, button: ControllerButton, action: ViewerAction) {
        self.buttons.insert(button, action);
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = Self {
            keys: HashMap::new(),
            buttons: HashMap::new(),
        };

        // Vim-style scrolling
        bindings.bind_key(KeyCode::Char('j'), KeyModifiers::NONE, ViewerAction::ScrollDown);
        bindings.bind_key(KeyCode::Char('k'), KeyModifiers::NONE, ViewerAction::ScrollUp);
        bindings.bind_key(KeyCode::Char('h'), KeyModifiers::NONE, ViewerAction::ScrollLeft);
        bindings.bind_key(KeyCode::Char('l'), KeyModifiers::NONE, ViewerAction::ScrollRight);
        bindings.bind_key(KeyCode::Char('g'), KeyModifiers::NONE, ViewerAction::ScrollToTop);
        bindings.bind_key(KeyCode::Char('G'), KeyModifiers::SHIFT, ViewerAction::ScrollToBottom);
        bindings.bind_key(KeyCode::Char('G'), KeyModifiers::NONE, ViewerAction::ScrollToBottom);

        // Arrow key scrolling
        bindings.bind_key(KeyCode::Up, KeyModifiers::NONE, ViewerAction::ScrollUp);
        bindings.bind_key(KeyCode::Down, KeyModifiers::NONE, ViewerAction::ScrollDown);
        bindings.bind_key(KeyCode::Left, KeyModifiers::NONE, ViewerAction::ScrollLeft);
        bindings.bind_key(KeyCode::Right, KeyModifiers::NONE, ViewerAction::ScrollRight);
        bindings.bind_key(KeyCode::Home, KeyModifiers::NONE, ViewerAction::ScrollToTop);
        bindings.bind_key(KeyCode::End, KeyModifiers::NONE, ViewerAction::ScrollToBottom);

        // Page navigation
        bindings.bind_key(KeyCode::Char('d'), KeyModifiers::CONTROL, ViewerAction::PageDown);
        bindings.bind_key(KeyCode::Char('u'), KeyModifiers::CONTROL, ViewerAction::PageUp);
        bindings.bind_key(KeyCode::PageDown, KeyModifiers::NONE, ViewerAction::PageDown);
        bindings.bind_key(KeyCode::PageUp, KeyModifiers::NONE, ViewerAction::PageUp);
        bindings.bind_key(KeyCode::Char(' '), KeyModifiers::NONE, ViewerAction::PageDown);

        // Button focus
        bindings.bind_key(KeyCode::Tab, KeyModifiers::NONE, ViewerAction::FocusNext);
        bindings.bind_key(KeyCode::BackTab, KeyModifiers::SHIFT, ViewerAction::FocusPrev);
        bindings.bind_key(KeyCode::BackTab, KeyModifiers::NONE, ViewerAction::FocusPrev);
        bindings.bind_key(KeyCode::Enter, KeyModifiers::NONE, ViewerAction::Activate);

        // Exit
        bindings.bind_key(KeyCode::Char('y'), KeyModifiers::NONE, ViewerAction::Confirm);
        bindings.bind_key(KeyCode::Esc, KeyModifiers::NONE, ViewerAction::Cancel);
        bindings.bind_key(KeyCode::Char('q'), KeyModifiers::NONE, ViewerAction::Cancel);
        bindings.bind_key(KeyCode::Backspace, KeyModifiers::NONE, ViewerAction::Cancel);
        bindings.bind_key(KeyCode::Char('c'), KeyModifiers::CONTROL, ViewerAction::Quit);

        for button in [
            ControllerButton::South,
            ControllerButton::East,
            ControllerButton::West,
            ControllerButton::North,
            ControllerButton::DPadUp,
            ControllerButton::DPadDown,
            ControllerButton::DPadLeft,
            ControllerButton::DPadRight,
            ControllerButton::LeftShoulder,
            ControllerButton::RightShoulder,
            ControllerButton::LeftTrigger,
            ControllerButton::RightTrigger,
            ControllerButton::Start,
            ControllerButton::Back,
            ControllerButton::Guide,
        ] {
            if let Some(action) = button.default_action() {
                bindings.bind_button(button, action);
            }
        }

        bindings
    }
}
