//! `tasklist` binary: an interactive terminal view over `tasklist_core`.

mod app;
mod command;
mod config;
mod view;

use app::{App, AppError};
use clap::Parser;
use config::Config;
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = Config::parse();
    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> Result<(), AppError> {
    if let Some(log_dir) = config.log_dir.as_deref() {
        tasklist_core::init_logging(config.effective_log_level(), log_dir)
            .map_err(AppError::Logging)?;
    }

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    App::new(config).run(stdin.lock(), &mut stdout)
}
