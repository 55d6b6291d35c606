//! Core state for a single-screen task list.
//! This crate owns every task-list invariant; views only read and forward.

pub mod logging;
pub mod model;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{Task, TaskId};
pub use store::task_list_store::{StoreChange, SubscriptionId, TaskListEntry, TaskListStore};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
