//! tvtext - Entry Point

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::path::PathBuf;
use tracing::info;
use tvtext::config::ResolvedConfig;
use tvtext::model::{AppError, ArgumentError, DisplayConfig, ExitStatus, Theme};
use tvtext::source::ContentSource;
use tvtext::viewer::{Viewer, ViewerSettings};

/// Exit code for invalid command lines.
const ARGUMENT_ERROR_EXIT: i32 = -2;

/// Exit code for configuration, logging and terminal failures.
const FATAL_ERROR_EXIT: i32 = -1;

/// Full-screen text viewer for keyboard, mouse and game controller
#[derive(Parser, Debug)]
#[command(name = "tvtext")]
#[command(version)]
#[command(about = "Full-screen text viewer for keyboard, mouse and game controller")]
#[command(
    after_help = "Exit status: 0 when closed, 1 when \"Yes\" was chosen, -2 for bad arguments, -1 for other errors."
)]
pub struct Args {
    /// File to display
    pub input_file: Option<PathBuf>,

    /// File holding the output of a running script; re-read while displayed
    #[arg(short = 's', long = "script_file", alias = "script-file", value_name = "PATH")]
    pub script_file: Option<PathBuf>,

    /// Text to display; \n, \t, \r, \f, \v and \\ escapes are decoded
    #[arg(short = 'm', long = "message", value_name = "TEXT")]
    pub message: Option<String>,

    /// Font size hint (terminals keep their own font)
    #[arg(short = 'f', long = "font_size", alias = "font-size", value_name = "N")]
    pub font_size: Option<u16>,

    /// Window title (default: the input file, "Error!!" or "Info")
    #[arg(short = 't', long = "title")]
    pub title: Option<String>,

    /// Offer a "Yes" button; choosing it exits with status 1
    #[arg(short = 'y', long = "yes_button", alias = "yes-button")]
    pub yes_button: bool,

    /// Show the text as an error (red background)
    #[arg(short = 'e', long = "error_display", alias = "error-display")]
    pub error_display: bool,

    /// Wrap long lines (slow on very large documents)
    #[arg(short = 'w', long = "wrap_lines", alias = "wrap-lines")]
    pub wrap_lines: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Title shown in the title bar.
    ///
    /// Explicit title, then the input file path, then "Error!!" for error
    /// displays, then "Info".
    fn resolved_title(&self) -> String {
        if let Some(title) = &self.title {
            return title.clone();
        }
        if let Some(path) = &self.input_file {
            return path.display().to_string();
        }
        if self.error_display {
            "Error!!".to_string()
        } else {
            "Info".to_string()
        }
    }

    fn display_config(&self, config: &ResolvedConfig, live_reload: bool) -> DisplayConfig {
        let theme = if self.error_display {
            Theme::Error
        } else {
            Theme::Normal
        };
        DisplayConfig::new(self.resolved_title())
            .with_confirm_button(self.yes_button)
            .with_wrap_lines(config.wrap_lines)
            .with_live_reload(live_reload)
            .with_theme(theme)
            .with_font_size(self.font_size)
    }

    fn content_source(&self) -> Result<ContentSource, ArgumentError> {
        ContentSource::select(
            self.input_file.clone(),
            self.script_file.clone(),
            self.message.clone(),
        )
    }
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(error) => {
            let code = match error.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => ARGUMENT_ERROR_EXIT,
            };
            let _ = error.print();
            std::process::exit(code);
        }
    };

    let source = match args.content_source() {
        Ok(source) => source,
        Err(error) => {
            eprintln!("error: {}\n\n{}", error, Args::command().render_usage());
            std::process::exit(ARGUMENT_ERROR_EXIT);
        }
    };

    match run(&args, source) {
        Ok(status) => std::process::exit(status.code()),
        Err(error) => {
            eprintln!("Error: {}", error);
            std::process::exit(FATAL_ERROR_EXIT);
        }
    }
}

fn run(args: &Args, source: ContentSource) -> Result<ExitStatus, AppError> {
    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = tvtext::config::load_config_with_precedence(args.config.clone())?;
        let merged = tvtext::config::merge_config(config_file);
        let with_env = tvtext::config::apply_env_overrides(merged);
        let wrap_override = if args.wrap_lines { Some(true) } else { None };
        tvtext::config::apply_cli_overrides(with_env, wrap_override)
    };

    tvtext::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let display = args.display_config(&config, source.is_live());
    let content = source.resolve();
    let viewer = Viewer::new(display, content, ViewerSettings::from_config(&config));

    tvtext::app::run_viewer(viewer)
}
