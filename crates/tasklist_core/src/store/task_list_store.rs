//! Task list store: add / toggle / delete over an ordered task list.
//!
//! # Responsibility
//! - Keep tasks in insertion order and track which ones are done.
//! - Hold the draft input buffer bound to the view's text field.
//! - Notify subscribed listeners after every state change.
//!
//! # Invariants
//! - Every id in `selected` belongs to a task currently in `tasks`.
//! - Deleting a task never reorders the remaining tasks.
//! - Empty or whitespace-only input never creates a task.
//! - Listeners fire only for calls that changed state.
//!
//! # Concurrency
//! Mutations take `&mut self` and are not internally synchronized. The store
//! is `Send`; a multi-threaded host wraps it in a `Mutex`.

use crate::model::task::{Task, TaskId};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Owned snapshot row returned by [`TaskListStore::list`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskListEntry {
    pub task: Task,
    pub selected: bool,
}

/// Change notification delivered to subscribed listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreChange {
    /// A task was appended.
    Added { id: TaskId },
    /// A task and/or its selection was removed.
    Deleted { id: TaskId },
    /// Completion state flipped; `selected` is the new state.
    Toggled { id: TaskId, selected: bool },
    /// The draft buffer changed.
    DraftChanged,
}

/// Handle returned by [`TaskListStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&StoreChange) + Send>;

/// Owner of one screen's task list.
#[derive(Default)]
pub struct TaskListStore {
    tasks: Vec<Task>,
    selected: HashSet<TaskId>,
    draft: String,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl TaskListStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a task unless `text` trims to empty.
    ///
    /// The stored text is the original, untrimmed input. On success the
    /// draft buffer is cleared and a copy of the new task is returned; on
    /// rejection nothing changes and `None` is returned.
    pub fn add(&mut self, text: impl Into<String>) -> Option<Task> {
        let text = text.into();
        if text.trim().is_empty() {
            debug!("event=task_add module=store status=rejected reason=empty_text");
            return None;
        }

        let task = Task::new(text);
        let id = task.id();
        self.tasks.push(task.clone());
        debug!(
            "event=task_add module=store status=ok task_id={} count={}",
            id,
            self.tasks.len()
        );
        self.notify(StoreChange::Added { id });

        if !self.draft.is_empty() {
            self.draft.clear();
            self.notify(StoreChange::DraftChanged);
        }

        Some(task)
    }

    /// Removes the task with `id` and its selection.
    ///
    /// Unknown ids are ignored.
    pub fn delete(&mut self, id: TaskId) {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id() != id);
        let removed_task = self.tasks.len() != before;
        let removed_selection = self.selected.remove(&id);

        if !removed_task && !removed_selection {
            debug!("event=task_delete module=store status=noop task_id={id}");
            return;
        }

        debug!(
            "event=task_delete module=store status=ok task_id={} count={}",
            id,
            self.tasks.len()
        );
        self.notify(StoreChange::Deleted { id });
    }

    /// Flips the done state of a live task.
    ///
    /// Ids that do not name a live task are rejected so the selection never
    /// refers to a task the list does not contain.
    pub fn toggle(&mut self, id: TaskId) {
        if self.get(id).is_none() {
            debug!(
                "event=task_toggle module=store status=rejected reason=unknown_id task_id={id}"
            );
            return;
        }

        let selected = if self.selected.remove(&id) {
            false
        } else {
            self.selected.insert(id);
            true
        };
        debug!("event=task_toggle module=store status=ok task_id={id} selected={selected}");
        self.notify(StoreChange::Toggled { id, selected });
    }

    /// Returns whether `id` is marked done.
    pub fn is_selected(&self, id: TaskId) -> bool {
        self.selected.contains(&id)
    }

    /// Returns an owned, insertion-ordered snapshot for rendering.
    pub fn list(&self) -> Vec<TaskListEntry> {
        self.tasks
            .iter()
            .map(|task| TaskListEntry {
                task: task.clone(),
                selected: self.selected.contains(&task.id()),
            })
            .collect()
    }

    /// Looks up a live task by id.
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Maps a zero-based display position to the task id shown there.
    pub fn id_at(&self, index: usize) -> Option<TaskId> {
        self.tasks.get(index).map(Task::id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Current contents of the draft buffer.
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Replaces the draft buffer.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text == self.draft {
            return;
        }
        self.draft = text;
        self.notify(StoreChange::DraftChanged);
    }

    /// Adds the draft as a new task.
    ///
    /// A whitespace-only draft is rejected and left in place.
    pub fn submit_draft(&mut self) -> Option<Task> {
        let draft = self.draft.clone();
        self.add(draft)
    }

    /// Registers a listener called after every state change.
    ///
    /// Listeners run synchronously, in registration order, inside the
    /// mutating call.
    pub fn subscribe(
        &mut self,
        listener: impl FnMut(&StoreChange) + Send + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` when `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(registered, _)| *registered != id);
        self.listeners.len() != before
    }

    fn notify(&mut self, change: StoreChange) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(&change);
        }
    }
}

impl fmt::Debug for TaskListStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskListStore")
            .field("tasks", &self.tasks)
            .field("selected", &self.selected)
            .field("draft", &self.draft)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
