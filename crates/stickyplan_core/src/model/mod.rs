//! Domain model for the sticky-note planner.
//!
//! # Responsibility
//! - Define the canonical task record persisted and projected by core.
//! - Own field-level validation rules shared by every write path.
//!
//! # Invariants
//! - Every task is identified by a stable, non-empty `TaskId`.
//! - A task is scheduled on one calendar day and one working-hour slot.

pub mod task;
