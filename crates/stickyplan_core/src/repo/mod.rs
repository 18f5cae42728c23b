//! Persistence adapters for the task list.
//!
//! # Responsibility
//! - Define the load/save contract the task store persists through.
//! - Keep serialization and storage details out of the store.
//!
//! # Invariants
//! - Adapters never mutate tasks; they only mirror the list they are given.
//! - `load()` returns an empty list (never an error) when nothing was saved.

pub mod task_storage;
