//! Text rendering of the header and the task rows.
//!
//! Rendering is pure: it takes a snapshot from `TaskListStore::list` and
//! returns a string, so the app loop decides when to redraw.

use tasklist_core::TaskListEntry;

const STRIKE_DIM: &str = "\x1b[9;2m";
const RESET: &str = "\x1b[0m";

/// How completed rows are decorated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowStyle {
    Ansi,
    Plain,
}

impl RowStyle {
    pub fn from_plain_flag(plain: bool) -> Self {
        if plain {
            Self::Plain
        } else {
            Self::Ansi
        }
    }
}

/// Static header: greeting plus optional label.
pub fn render_header(greeting: &str, date_label: Option<&str>) -> String {
    let mut out = format!("== {greeting} ==\n");
    if let Some(label) = date_label {
        out.push_str(&format!("   {label}\n"));
    }
    out
}

/// Task section: title, one line per row, and a done counter.
pub fn render_entries(entries: &[TaskListEntry], style: RowStyle) -> String {
    let mut out = String::from("Tasks\n");
    if entries.is_empty() {
        out.push_str("  (no tasks yet)\n");
        return out;
    }

    let width = entries.len().to_string().len();
    for (index, entry) in entries.iter().enumerate() {
        let mark = if entry.selected { 'x' } else { ' ' };
        let text = entry.task.text();
        let line = match (entry.selected, style) {
            (true, RowStyle::Ansi) => format!("{STRIKE_DIM}{text}{RESET}"),
            _ => text.to_string(),
        };
        out.push_str(&format!("{:>width$}. [{mark}] {line}\n", index + 1));
    }

    let done = entries.iter().filter(|entry| entry.selected).count();
    out.push_str(&format!("  {done}/{} done\n", entries.len()));
    out
}
