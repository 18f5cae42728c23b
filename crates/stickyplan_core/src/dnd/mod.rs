//! Drag-and-drop rescheduling.
//!
//! # Responsibility
//! - Track the single in-flight drag of a task onto a calendar cell.
//! - Translate a drop into a task-store move.
//!
//! # Invariants
//! - At most one task is being dragged at a time.
//! - Nothing is mutated until the drop is committed.

pub mod controller;
