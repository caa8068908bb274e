//! Error types for tvtext.
//!
//! This module defines the error taxonomy using `thiserror`. Errors compose via
//! `?` and `From` conversions.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Startup and terminal failures that end the process
//!   - [`ConfigError`](crate::config::ConfigError) - Config file read/parse failures
//!   - [`LoggingError`](crate::logging::LoggingError) - Log file setup failures
//!   - `std::io::Error` - Terminal setup/rendering failures
//! - [`ArgumentError`] - Invalid or conflicting command line options
//! - [`ContentError`] - The requested input file cannot be read
//! - [`ReloadError`] - A live-reload read failed
//!
//! # Error Recovery Strategy
//!
//! The viewer itself never returns an error from a frame. Content and reload
//! failures are turned into data before they reach it:
//!
//! - `ContentError` becomes an empty document (logged as a warning)
//! - `ReloadError` keeps the last good document (logged, retried next poll)
//!
//! `ArgumentError` and `AppError` are reported on stderr and end the process
//! with a non-zero code before or after the viewer runs.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error.
///
/// Returned from startup and from the frame driver. All variants are fatal:
/// the process restores the terminal, prints the error and exits with `-1`.
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to load the configuration file.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Failed to set up log output.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Terminal or TUI rendering error.
    ///
    /// This indicates failures in the crossterm/ratatui layer, such as failing
    /// to enter raw mode or broken pipes while drawing. Without a working
    /// terminal the viewer cannot function.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Invalid command line usage.
///
/// Detected before the viewer is constructed. The message is printed to stderr
/// together with the usage text and the process exits with `-2`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    /// None of input file, `--message` or `--script_file` was given.
    #[error("No input given")]
    NoInput,

    /// Both an input file and `--message` were given.
    #[error("Cannot use input_file and message at the same time")]
    ConflictingInputs,

    /// The argument parser rejected the command line.
    ///
    /// Carries the parser's rendered message.
    #[error("{0}")]
    Parse(String),
}

/// The requested input file could not be read.
///
/// The content resolver turns this into an empty document; the viewer then
/// shows an empty page under the file's title.
#[derive(Debug, Error)]
pub enum ContentError {
    /// Opening or reading the file failed.
    #[error("Cannot read {path}: {source}")]
    Unavailable {
        /// The file that was requested.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// A live-reload read of the script output file failed.
///
/// Always transient from the viewer's point of view: the last good document
/// stays on screen and the read is retried on a later frame.
#[derive(Debug, Error)]
pub enum ReloadError {
    /// Opening, inspecting or reading the file failed.
    #[error("Cannot reload {path}: {source}")]
    Io {
        /// The script output file.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The path is not a regular file (for example a FIFO), so reading it
    /// could block the frame loop.
    #[error("Not a regular file, skipping reload: {path}")]
    NotRegularFile {
        /// The script output path.
        path: PathBuf,
    },
}
