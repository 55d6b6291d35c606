//! Command-line configuration for the terminal view.
//!
//! # Responsibility
//! - Parse flags (with environment fallbacks) into one `Config` value.
//! - Resolve defaults that depend on the build mode.

use clap::Parser;

pub const DEFAULT_GREETING: &str = "Hello, Student";
pub const DEFAULT_DATE_LABEL: &str = "12 Dec 23";

/// Interactive task list in the terminal.
#[derive(Debug, Clone, Parser)]
#[command(name = "tasklist", version, about)]
pub struct Config {
    /// Absolute directory for rolling log files; logging is off when unset.
    #[arg(long, env = "TASKLIST_LOG_DIR")]
    pub log_dir: Option<String>,

    /// Log level: trace, debug, info, warn or error.
    #[arg(long, env = "TASKLIST_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Greeting shown in the header.
    #[arg(long, default_value = DEFAULT_GREETING)]
    pub greeting: String,

    /// Static label shown under the greeting; pass "" to hide it.
    #[arg(long, default_value = DEFAULT_DATE_LABEL)]
    pub date_label: String,

    /// Disable ANSI styling of completed tasks.
    #[arg(long)]
    pub plain: bool,
}

impl Config {
    /// Level to start logging with when none was given.
    pub fn effective_log_level(&self) -> &str {
        self.log_level
            .as_deref()
            .unwrap_or(tasklist_core::default_log_level())
    }

    /// Date label to draw, `None` when it was set to blank.
    pub fn header_label(&self) -> Option<&str> {
        Some(self.date_label.as_str()).filter(|label| !label.trim().is_empty())
    }
}
