//! Terminal view loop.
//!
//! # Responsibility
//! - Own the screen's `TaskListStore` for the lifetime of one run.
//! - Turn input lines into store calls.
//! - Redraw the list after the store reports a change.
//!
//! # Invariants
//! - The store is only mutated from inside `run`.
//! - Redraws are driven by store notifications, not by which command ran.

use crate::command::{parse_line, Command, CommandError, USAGE};
use crate::config::Config;
use crate::view::{render_entries, render_header, RowStyle};
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::{BufRead, Write};
use std::sync::mpsc::{self, Receiver};
use tasklist_core::{StoreChange, TaskId, TaskListStore};

const PROMPT: &str = "> ";

/// Fatal errors that end the loop.
#[derive(Debug)]
pub enum AppError {
    Io(std::io::Error),
    Logging(String),
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "terminal i/o failed: {err}"),
            Self::Logging(message) => write!(f, "logging init failed: {message}"),
        }
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Logging(_) => None,
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// One screen: store, change feed and static header content.
pub struct App {
    store: TaskListStore,
    changes: Receiver<StoreChange>,
    header: String,
    style: RowStyle,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let mut store = TaskListStore::new();
        let (tx, changes) = mpsc::channel();
        store.subscribe(move |change| {
            // Only fails once the App, and with it the receiver, is gone.
            let _ = tx.send(*change);
        });

        Self {
            store,
            changes,
            header: render_header(&config.greeting, config.header_label()),
            style: RowStyle::from_plain_flag(config.plain),
        }
    }

    #[cfg(test)]
    pub fn store(&self) -> &TaskListStore {
        &self.store
    }

    /// Reads commands until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        out: &mut W,
    ) -> Result<(), AppError> {
        info!("event=view_start module=app status=ok");
        write!(out, "{}", self.header)?;
        self.draw(out)?;

        let mut line = String::new();
        loop {
            write!(out, "{PROMPT}")?;
            out.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(out)?;
                break;
            }

            match parse_line(&line).and_then(|command| self.apply(command)) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Redraw) => self.draw(out)?,
                Ok(Flow::Help) => writeln!(out, "{USAGE}")?,
                Ok(Flow::Quit) => break,
                Err(err) => {
                    warn!(
                        "event=command module=app status=rejected error_code={}",
                        err.code()
                    );
                    writeln!(out, "error: {err}")?;
                }
            }

            if self.drain_changes() {
                self.draw(out)?;
            }
        }

        info!(
            "event=view_stop module=app status=ok tasks={} done={}",
            self.store.len(),
            self.store.selected_count()
        );
        Ok(())
    }

    fn apply(&mut self, command: Command) -> Result<Flow, CommandError> {
        debug!(
            "event=command module=app status=start kind={}",
            command_kind(&command)
        );
        match command {
            Command::Add(text) => {
                self.store.set_draft(text);
                self.store.submit_draft();
            }
            Command::Toggle(row) => {
                let id = self.row_id(row)?;
                self.store.toggle(id);
            }
            Command::Delete(row) => {
                let id = self.row_id(row)?;
                self.store.delete(id);
            }
            Command::List => return Ok(Flow::Redraw),
            Command::Help => return Ok(Flow::Help),
            Command::Quit => return Ok(Flow::Quit),
            Command::Empty => {}
        }
        Ok(Flow::Continue)
    }

    fn row_id(&self, row: usize) -> Result<TaskId, CommandError> {
        self.store.id_at(row - 1).ok_or(CommandError::RowOutOfRange {
            row,
            len: self.store.len(),
        })
    }

    /// Empties the change feed; true when the list needs a redraw.
    fn drain_changes(&self) -> bool {
        self.changes
            .try_iter()
            .fold(false, |dirty, change| dirty || change != StoreChange::DraftChanged)
    }

    fn draw<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        write!(out, "{}", render_entries(&self.store.list(), self.style))
    }
}

enum Flow {
    Continue,
    Redraw,
    Help,
    Quit,
}

fn command_kind(command: &Command) -> &'static str {
    match command {
        Command::Add(_) => "add",
        Command::Toggle(_) => "toggle",
        Command::Delete(_) => "delete",
        Command::List => "list",
        Command::Help => "help",
        Command::Quit => "quit",
        Command::Empty => "empty",
    }
}
