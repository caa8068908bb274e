//! Layout engine (pure): paragraph wrapping, the layout cache and scroll state.

pub mod cache;
pub mod scroll;
pub mod wrap;

pub use cache::{LayoutCache, WrapWidth};
pub use scroll::{ScrollBounds, ScrollState};
pub use wrap::{display_width, split_paragraphs, wrap_paragraph};
