//! Domain-level user actions, independent of the device that produced them.

/// What the user asked the viewer to do.
///
/// Keyboard keys, controller buttons and mouse gestures all map onto these.
/// The mapping lives in [`crate::config::KeyBindings`] and [`crate::input`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewerAction {
    // Scrolling
    /// Scroll up by one step. Default: ↑/k, D-pad up, wheel up
    ScrollUp,
    /// Scroll down by one step. Default: ↓/j, D-pad down, wheel down
    ScrollDown,
    /// Scroll left when wrapping is off. Default: ←/h, D-pad left
    ScrollLeft,
    /// Scroll right when wrapping is off. Default: →/l, D-pad right
    ScrollRight,
    /// Scroll up by one page. Default: Page Up/Ctrl+u, L1
    PageUp,
    /// Scroll down by one page. Default: Page Down/Ctrl+d/Space, R1
    PageDown,
    /// Jump to the first line. Default: Home/g, L2
    ScrollToTop,
    /// Jump to the last page. Default: End/G, R2
    ScrollToBottom,

    // Buttons
    /// Move button focus to the next button. Default: Tab
    FocusNext,
    /// Move button focus to the previous button. Default: Shift+Tab
    FocusPrev,
    /// Press the focused button. Default: Enter, controller A
    Activate,

    // Exit
    /// Answer "yes" (only honoured when the yes button is shown). Default: y, Start
    Confirm,
    /// Close the viewer. Default: Esc/q/Backspace, controller B
    Cancel,
    /// Quit unconditionally. Default: Ctrl+c, Back, Guide, window close
    Quit,
}

impl ViewerAction {
    /// Whether this action only moves the scroll position.
    pub fn is_scroll(self) -> bool {
        matches!(
            self,
            ViewerAction::ScrollUp
                | ViewerAction::ScrollDown
                | ViewerAction::ScrollLeft
                | ViewerAction::ScrollRight
                | ViewerAction::PageUp
                | ViewerAction::PageDown
                | ViewerAction::ScrollToTop
                | ViewerAction::ScrollToBottom
        )
    }
}

/// Game controller buttons, named by position (SDL/Xbox layout).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControllerButton {
    /// Bottom face button (A on Xbox layout).
    South,
    /// Right face button (B on Xbox layout).
    East,
    /// Left face button.
    West,
    /// Top face button.
    North,
    /// D-pad up.
    DPadUp,
    /// D-pad down.
    DPadDown,
    /// D-pad left.
    DPadLeft,
    /// D-pad right.
    DPadRight,
    /// L1.
    LeftShoulder,
    /// R1.
    RightShoulder,
    /// L2.
    LeftTrigger,
    /// R2.
    RightTrigger,
    /// Start button.
    Start,
    /// "Back"/"Select" button.
    Back,
    /// Vendor logo button.
    Guide,
}

impl ControllerButton {
    /// Default action for this button, if any.
    pub fn default_action(self) -> Option<ViewerAction> {
        let action = match self {
            ControllerButton::DPadUp => ViewerAction::ScrollUp,
            ControllerButton::DPadDown => ViewerAction::ScrollDown,
            ControllerButton::DPadLeft => ViewerAction::ScrollLeft,
            ControllerButton::DPadRight => ViewerAction::ScrollRight,
            ControllerButton::LeftShoulder => ViewerAction::PageUp,
            ControllerButton::RightShoulder => ViewerAction::PageDown,
            ControllerButton::LeftTrigger => ViewerAction::ScrollToTop,
            ControllerButton::RightTrigger => ViewerAction::ScrollToBottom,
            ControllerButton::South => ViewerAction::Activate,
            ControllerButton::East => ViewerAction::Cancel,
            ControllerButton::Start => ViewerAction::Confirm,
            ControllerButton::Back | ControllerButton::Guide => ViewerAction::Quit,
            ControllerButton::West | ControllerButton::North => return None,
        };
        Some(action)
    }
}
