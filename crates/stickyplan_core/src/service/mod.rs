//! Core use-case services.
//!
//! # Responsibility
//! - Own the authoritative in-memory task list and its mutation rules.
//! - Keep UI shells decoupled from storage and notification details.

pub mod task_store;
