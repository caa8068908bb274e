//! Configuration file loading with precedence handling.

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "TVTEXT_CONFIG";

/// Environment variable forcing line wrapping on or off.
pub const WRAP_ENV_VAR: &str = "TVTEXT_WRAP_LINES";

/// Environment variable overriding the log file path.
pub const LOG_ENV_VAR: &str = "TVTEXT_LOG";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file, ...).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/tvtext/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Wrap long lines by default.
    #[serde(default)]
    pub wrap_lines: Option<bool>,

    /// Minimum milliseconds between two reads of a script output file.
    ///
    /// Defaults to 0: the file is re-read on every frame.
    #[serde(default)]
    pub reload_interval_ms: Option<u64>,

    /// Upper bound on bytes read by a single reload.
    #[serde(default)]
    pub max_reload_bytes: Option<u64>,

    /// Keep the view pinned to the bottom while a script appends output.
    #[serde(default)]
    pub follow_tail: Option<bool>,

    /// Lines (or columns) moved by a single scroll step.
    #[serde(default)]
    pub scroll_step: Option<usize>,

    /// Columns per tab stop.
    #[serde(default)]
    pub tab_width: Option<usize>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Line wrapping.
    pub wrap_lines: bool,
    /// Reload throttle in milliseconds; 0 re-reads on every frame.
    pub reload_interval_ms: u64,
    /// Reload read bound in bytes. Larger files show only their tail, and the
    /// view is shifted up by the lines that fall off the head.
    pub max_reload_bytes: u64,
    /// Stick to the bottom on reload.
    pub follow_tail: bool,
    /// Scroll step, at least 1.
    pub scroll_step: usize,
    /// Tab width, at least 1.
    pub tab_width: usize,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            wrap_lines: false,
            reload_interval_ms: 0,
            max_reload_bytes: 8 * 1024 * 1024,
            follow_tail: false,
            scroll_step: 1,
            tab_width: 4,
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// Reload throttle as a `Duration`.
    pub fn reload_interval(&self) -> Duration {
        Duration::from_millis(self.reload_interval_ms)
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/tvtext/tvtext.log` on Linux, the platform state
/// directory elsewhere, or `tvtext.log` in the current directory as fallback.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("tvtext").join("tvtext.log")
    } else {
        PathBuf::from("tvtext.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/tvtext/config.toml` on Linux, the platform config
/// directory elsewhere, or `None` if it cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tvtext").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `TVTEXT_CONFIG` environment variable
/// 3. Default path `~/.config/tvtext/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use
/// the default. Zero scroll steps and tab widths are raised to 1.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        wrap_lines: config.wrap_lines.unwrap_or(defaults.wrap_lines),
        reload_interval_ms: config
            .reload_interval_ms
            .unwrap_or(defaults.reload_interval_ms),
        max_reload_bytes: config
            .max_reload_bytes
            .unwrap_or(defaults.max_reload_bytes),
        follow_tail: config.follow_tail.unwrap_or(defaults.follow_tail),
        scroll_step: config.scroll_step.unwrap_or(defaults.scroll_step).max(1),
        tab_width: config.tab_width.unwrap_or(defaults.tab_width).max(1),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `TVTEXT_WRAP_LINES`: `1`/`true`/`yes` enables, `0`/`false`/`no` disables
/// - `TVTEXT_LOG`: log file path
///
/// Unrecognised wrap values are ignored.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(value) = std::env::var(WRAP_ENV_VAR) {
        if let Some(wrap) = parse_bool(&value) {
            config.wrap_lines = wrap;
        }
    }

    if let Ok(path) = std::env::var(LOG_ENV_VAR) {
        if !path.is_empty() {
            config.log_file_path = PathBuf::from(path);
        }
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// Only applies overrides for flags that were explicitly set by the user.
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(mut config: ResolvedConfig, wrap_override: Option<bool>) -> ResolvedConfig {
    if let Some(wrap) = wrap_override {
        config.wrap_lines = wrap;
    }

    config
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
