//! Parsing of one input line into a view command.
//!
//! Row numbers are 1-based positions in the list as last drawn.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// One user action typed at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Submit text as a new task.
    Add(String),
    /// Flip done state of a row.
    Toggle(usize),
    /// Remove a row.
    Delete(usize),
    List,
    Help,
    Quit,
    /// Blank line.
    Empty,
}

/// Input that cannot be turned into a store call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// A row command was given without its row number.
    MissingArgument(&'static str),
    /// The row argument is not a positive integer.
    InvalidRow(String),
    /// The row number is past the end of the list.
    RowOutOfRange { row: usize, len: usize },
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingArgument(command) => write!(f, "`{command}` needs a row number"),
            Self::InvalidRow(value) => write!(f, "`{value}` is not a row number"),
            Self::RowOutOfRange { row, len } => match len {
                0 => write!(f, "row {row} does not exist; the list is empty"),
                _ => write!(f, "row {row} does not exist; rows are 1..={len}"),
            },
        }
    }
}

impl Error for CommandError {}

impl CommandError {
    /// Stable code for log lines; never carries user input.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingArgument(_) => "missing_argument",
            Self::InvalidRow(_) => "invalid_row",
            Self::RowOutOfRange { .. } => "row_out_of_range",
        }
    }
}

pub const USAGE: &str = "\
commands:
  <text> | add <text>      add a task
  done <n> | toggle <n>    mark row n done / not done
  rm <n> | delete <n>      remove row n
  list                     redraw the list
  help                     show this help
  quit                     leave
a done/rm line followed by words, e.g. \"done laundry\", is added as a task";

/// Parses one line.
///
/// Lines without a known keyword are task text, and so are row commands
/// whose argument is not a number, e.g. `done laundry`.
pub fn parse_line(line: &str) -> Result<Command, CommandError> {
    let line = line.trim_end_matches(['\n', '\r']);
    if line.trim().is_empty() {
        return Ok(Command::Empty);
    }

    let leading = line.trim_start();
    let (keyword, rest) = match leading.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest),
        None => (leading, ""),
    };

    match keyword.to_ascii_lowercase().as_str() {
        "add" => Ok(Command::Add(rest.to_string())),
        "done" | "toggle" | "x" => Ok(match parse_row("done", rest)? {
            Some(row) => Command::Toggle(row),
            None => Command::Add(line.to_string()),
        }),
        "rm" | "delete" | "del" => Ok(match parse_row("rm", rest)? {
            Some(row) => Command::Delete(row),
            None => Command::Add(line.to_string()),
        }),
        "list" | "ls" => Ok(Command::List),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        _ => Ok(Command::Add(line.to_string())),
    }
}

/// `Ok(None)` when the argument is not a number at all.
fn parse_row(command: &'static str, raw: &str) -> Result<Option<usize>, CommandError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(CommandError::MissingArgument(command));
    }
    if !raw.chars().all(|c| c.is_ascii_digit()) {
        return Ok(None);
    }
    match raw.parse::<usize>() {
        Ok(row) if row > 0 => Ok(Some(row)),
        _ => Err(CommandError::InvalidRow(raw.to_string())),
    }
}
