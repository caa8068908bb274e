//! The text being displayed.

/// Structural version of a [`Document`].
///
/// Bumped every time the document text is replaced. Layout caches key on it
/// so that a reloaded document is never laid out from stale text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct DocumentVersion(u64);

impl DocumentVersion {
    /// Get the raw version number.
    pub fn get(self) -> u64 {
        self.0
    }

    fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Raw text owned by the viewer.
///
/// Immutable once loaded, except in live-reload mode where [`Document::replace`]
/// swaps the whole text and bumps the version.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    text: String,
    version: DocumentVersion,
}

impl Document {
    /// Create a document at version 0.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            version: DocumentVersion::default(),
        }
    }

    /// The document text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Current structural version.
    pub fn version(&self) -> DocumentVersion {
        self.version
    }

    /// Whether the document has no text.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Replace the text if it differs from the current text.
    ///
    /// Returns `true` (and bumps the version) only when the text changed.
    pub fn replace(&mut self, text: String) -> bool {
        if text == self.text {
            return false;
        }
        self.text = text;
        self.version = self.version.next();
        true
    }
}
