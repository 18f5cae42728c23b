//! Core domain logic for the sticky-note day planner.
//! This crate is the single source of truth for task invariants.

pub mod calendar;
pub mod clock;
pub mod config;
pub mod db;
pub mod dnd;
pub mod icon;
pub mod logging;
pub mod model;
pub mod notify;
pub mod planner;
pub mod repo;
pub mod service;

pub use calendar::{
    header_label, hour_label, project, step, visible_range, CalendarCursor, CalendarView,
    CellKey, CellKeyError, DateRange, Direction, ViewMode, WeekStart,
};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{ConfigError, PlannerConfig};
pub use dnd::controller::{DragController, DragError, DragState, DropOutcome};
pub use icon::{parse_icon_name, IconError, IconName};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{
    ColorCode, NewTask, Task, TaskId, TaskValidationError, DEFAULT_TIME_SLOT, FIRST_TIME_SLOT,
    LAST_TIME_SLOT,
};
pub use notify::{LogNotifier, Notification, NotificationLevel, NotificationQueue, Notifier};
pub use planner::Planner;
pub use repo::task_storage::{
    MemoryTaskStorage, SqliteTaskStorage, StorageError, StorageResult, TaskStorage,
    DEFAULT_STORAGE_KEY,
};
pub use service::task_store::{StoreError, StoreResult, TaskStore};

/// Minimal health-check API.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
