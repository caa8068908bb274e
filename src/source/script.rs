//! Live re-reading of a script's output file.
//!
//! Each poll is a single bounded read of a regular file, rate limited by a
//! minimum interval. Nothing is watched or streamed, and no thread is spawned:
//! the viewer calls [`ScriptTailer::poll`] from its frame and gets either new
//! text, an error, or nothing when the interval has not elapsed yet.

use crate::model::error::ReloadError;
use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// One bounded read of the script output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptOutput {
    /// Decoded text of the read window.
    pub text: String,
    /// File offset of the first byte of `text`; nonzero once the file
    /// outgrows the byte bound.
    pub offset: u64,
}

/// Throttled, bounded reader of a script output file.
#[derive(Debug)]
pub struct ScriptTailer {
    path: PathBuf,
    interval: Duration,
    max_bytes: u64,
    last_poll: Option<Instant>,
}

impl ScriptTailer {
    /// Create a tailer. The first poll always reads.
    ///
    /// `max_bytes` of zero is treated as one byte.
    pub fn new(path: impl Into<PathBuf>, interval: Duration, max_bytes: u64) -> Self {
        Self {
            path: path.into(),
            interval,
            max_bytes: max_bytes.max(1),
            last_poll: None,
        }
    }

    /// The file being tailed.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a poll at `now` would read the file.
    pub fn is_due(&self, now: Instant) -> bool {
        match self.last_poll {
            None => true,
            Some(last) => now.saturating_duration_since(last) >= self.interval,
        }
    }

    /// Read the file if the interval has elapsed.
    ///
    /// Returns `None` when throttled.
    pub fn poll(&mut self) -> Option<Result<ScriptOutput, ReloadError>> {
        self.poll_at(Instant::now())
    }

    /// [`poll`](Self::poll) with an explicit clock.
    pub fn poll_at(&mut self, now: Instant) -> Option<Result<ScriptOutput, ReloadError>> {
        if !self.is_due(now) {
            return None;
        }
        self.last_poll = Some(now);
        Some(self.read())
    }

    /// Read the current contents, ignoring the interval.
    ///
    /// Files larger than the byte bound yield only their last bytes, starting
    /// at a character boundary. [`ScriptOutput::offset`] tells where that
    /// window starts in the file.
    ///
    /// # Errors
    ///
    /// - [`ReloadError::NotRegularFile`] for FIFOs, sockets, directories and devices,
    ///   since reading them could block
    /// - [`ReloadError::Io`] for any I/O failure
    pub fn read(&self) -> Result<ScriptOutput, ReloadError> {
        let metadata = std::fs::metadata(&self.path).map_err(|e| self.io_error(e))?;
        if !metadata.is_file() {
            return Err(ReloadError::NotRegularFile {
                path: self.path.clone(),
            });
        }

        let mut file = File::open(&self.path).map_err(|e| self.io_error(e))?;
        let len = metadata.len();
        let window = len.saturating_sub(self.max_bytes);
        if window > 0 {
            file.seek(SeekFrom::Start(window))
                .map_err(|e| self.io_error(e))?;
        }

        let mut bytes = Vec::with_capacity(len.min(self.max_bytes) as usize);
        file.take(self.max_bytes)
            .read_to_end(&mut bytes)
            .map_err(|e| self.io_error(e))?;

        let start = if window > 0 {
            bytes
                .iter()
                .position(|b| !is_utf8_continuation(*b))
                .unwrap_or(bytes.len())
        } else {
            0
        };

        Ok(ScriptOutput {
            text: String::from_utf8_lossy(&bytes[start..]).into_owned(),
            offset: window + start as u64,
        })
    }

    fn io_error(&self, source: std::io::Error) -> ReloadError {
        ReloadError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

fn is_utf8_continuation(byte: u8) -> bool {
    byte & 0b1100_0000 == 0b1000_0000
}
