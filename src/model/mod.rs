//! Domain model types (pure).
//!
//! All types in this module are plain data with no I/O.

pub mod action;
pub mod display;
pub mod document;
pub mod error;
pub mod exit;

// Re-export for convenience
pub use action::{ControllerButton, ViewerAction};
pub use display::{DisplayConfig, Theme};
pub use document::{Document, DocumentVersion};
pub use error::{AppError, ArgumentError, ContentError, ReloadError};
pub use exit::{ExitStatus, FrameOutcome};
