//! Calendar projection of the task list.
//!
//! # Responsibility
//! - Map `(tasks, view mode, anchor date)` to the grid of cells to render.
//! - Address every droppable cell with a stable `CellKey`.
//! - Step the anchor date according to the active view mode.
//!
//! # Invariants
//! - Projection is pure: no clock reads, no I/O, no task mutation.
//! - Cell keys are unique within one projected view.

mod cell;
mod grid;
mod navigation;
mod range;

pub use cell::{CellKey, CellKeyError};
pub use grid::{project, CalendarView, DayCell, DayGrid, HourRow, MonthGrid, SlotCell, WeekGrid};
pub use navigation::{header_label, hour_label, step, CalendarCursor, Direction};
pub use range::{
    month_range, shift_days, visible_range, week_range, DateRange, ViewMode, WeekStart,
};
