//! Content sources.
//!
//! Decides what the viewer displays:
//! - a file read once at startup
//! - a literal message, with backslash escapes decoded
//! - a script output file, re-read periodically by the viewer
//!
//! Selection happens once at startup. Static content is loaded here; a script
//! path is handed to the viewer, which owns the [`ScriptTailer`].

use crate::escape;
use crate::model::error::{ArgumentError, ContentError};
use crate::model::Document;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub mod script;

pub use script::{ScriptOutput, ScriptTailer};

/// Where the displayed text comes from.
///
/// Sum type enforces exactly one source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    /// Static file contents.
    File(PathBuf),
    /// Literal message (escapes not yet decoded).
    Message(String),
    /// File holding the output of a running script.
    Script(PathBuf),
}

/// Content handed to the viewer at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewerContent {
    /// Text that never changes.
    Static(Document),
    /// Path re-read by the viewer while it runs.
    Live(PathBuf),
}

impl ViewerContent {
    /// Whether this content is re-read while the viewer runs.
    pub fn is_live(&self) -> bool {
        matches!(self, ViewerContent::Live(_))
    }
}

impl ContentSource {
    /// Pick the content source from the command line inputs.
    ///
    /// An input file wins over a script file, which wins over a message.
    ///
    /// # Errors
    ///
    /// - [`ArgumentError::NoInput`] if nothing was given
    /// - [`ArgumentError::ConflictingInputs`] if both a file and a message were given
    pub fn select(
        input_file: Option<PathBuf>,
        script_file: Option<PathBuf>,
        message: Option<String>,
    ) -> Result<Self, ArgumentError> {
        match (input_file, script_file, message) {
            (Some(_), _, Some(_)) => Err(ArgumentError::ConflictingInputs),
            (Some(path), _, None) => Ok(ContentSource::File(path)),
            (None, Some(path), _) => Ok(ContentSource::Script(path)),
            (None, None, Some(text)) => Ok(ContentSource::Message(text)),
            (None, None, None) => Err(ArgumentError::NoInput),
        }
    }

    /// Whether the viewer should re-read this source while running.
    pub fn is_live(&self) -> bool {
        matches!(self, ContentSource::Script(_))
    }

    /// Load the content.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Unavailable`] if an input file cannot be read.
    /// Messages and script paths never fail here.
    pub fn load(&self) -> Result<ViewerContent, ContentError> {
        match self {
            ContentSource::File(path) => read_file(path).map(ViewerContent::Static),
            ContentSource::Message(text) => {
                Ok(ViewerContent::Static(Document::new(escape::decode(text))))
            }
            ContentSource::Script(path) => Ok(ViewerContent::Live(path.clone())),
        }
    }

    /// Load the content, falling back to an empty document if the file is unreadable.
    pub fn resolve(&self) -> ViewerContent {
        match self.load() {
            Ok(content) => {
                info!(source = ?self, live = content.is_live(), "Content source resolved");
                content
            }
            Err(error) => {
                warn!(%error, "Content unavailable, showing an empty document");
                ViewerContent::Static(Document::default())
            }
        }
    }
}

fn read_file(path: &Path) -> Result<Document, ContentError> {
    let bytes = std::fs::read(path).map_err(|source| ContentError::Unavailable {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Document::new(String::from_utf8_lossy(&bytes).into_owned()))
}
