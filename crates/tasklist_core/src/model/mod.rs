//! Domain model for the task list.
//!
//! # Responsibility
//! - Define the record types shared by the store and its views.
//!
//! # Invariants
//! - Every task is identified by a `TaskId` that is never reused.

pub mod task;
