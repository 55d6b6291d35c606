//! Task domain model.
//!
//! # Responsibility
//! - Define the immutable record behind one to-do row.
//! - Own identifier generation for new tasks.
//!
//! # Invariants
//! - `id` is assigned once at creation and never reused for another task.
//! - `text` is never changed after creation; there is no edit path.
//! - Completion is not a field here; it lives in the store's selection set.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Stable identifier for a task.
///
/// UUID v4 keeps collisions negligible without any coordination, so ids stay
/// unique across deletes and re-adds within one store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(Uuid);

impl TaskId {
    /// Generates a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wraps an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<Uuid> for TaskId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

/// One to-do item.
///
/// Fields are private so that a `Task` handed to a view cannot be edited in
/// place; callers read through accessors and clone when they need ownership.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    text: String,
}

impl Task {
    /// Creates a task with a generated id.
    ///
    /// The text is stored exactly as given. Emptiness checks belong to the
    /// store, which decides whether a task gets created at all.
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_id(TaskId::generate(), text)
    }

    /// Creates a task with a caller-provided id.
    pub fn with_id(id: TaskId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}
