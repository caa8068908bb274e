//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for all layout-related numeric values to enable
//! consistent tuning across the application.

/// Height of the button bar in lines.
pub const BUTTON_BAR_HEIGHT: u16 = 1;

/// Width of the vertical scrollbar column.
///
/// Always reserved, so the wrap width does not change when the scrollbar
/// appears or disappears.
pub const SCROLLBAR_WIDTH: u16 = 1;

/// Columns between two buttons.
pub const BUTTON_GAP: u16 = 2;

/// Text of the live-reload marker in the top border.
pub const LIVE_MARKER: &str = " LIVE ";
