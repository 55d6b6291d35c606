//! In-memory task list state.
//!
//! # Responsibility
//! - Own the ordered task collection and the completion selection.
//! - Expose the mutation and query API a view drives.
//!
//! # Invariants
//! - The store is the only mutator of task-list state.
//! - No store operation fails; edge cases degrade to silent no-ops.

pub mod task_list_store;
