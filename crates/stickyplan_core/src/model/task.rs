//! Task domain model.
//!
//! # Responsibility
//! - Define the sticky-note task record and its palette/time-slot vocabulary.
//! - Validate task fields on construction, mutation and deserialization.
//!
//! # Invariants
//! - `id` is non-empty and never changes after creation.
//! - `title` is non-empty after trimming.
//! - `time_slot` is within `FIRST_TIME_SLOT..=LAST_TIME_SLOT`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// First bookable hour of the working day (7 AM).
pub const FIRST_TIME_SLOT: u8 = 7;
/// Last bookable hour of the working day (6 PM).
pub const LAST_TIME_SLOT: u8 = 18;
/// Hour assigned when the add flow does not specify one.
pub const DEFAULT_TIME_SLOT: u8 = 9;

/// Iterates all bookable hours in ascending order.
pub fn time_slots() -> impl Iterator<Item = u8> {
    FIRST_TIME_SLOT..=LAST_TIME_SLOT
}

/// Returns whether `hour` is inside the working-hours range.
pub fn is_valid_time_slot(hour: u8) -> bool {
    (FIRST_TIME_SLOT..=LAST_TIME_SLOT).contains(&hour)
}

/// Opaque task identifier generated client-side.
///
/// Stored as plain text so ids written by older planner builds (short
/// random tokens) keep loading.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Generates a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wraps an existing identifier without validation.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TaskId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Sticky-note palette.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorCode {
    #[default]
    #[serde(alias = "note-yellow")]
    Yellow,
    #[serde(alias = "note-blue")]
    Blue,
    #[serde(alias = "note-green")]
    Green,
    #[serde(alias = "note-pink")]
    Pink,
    #[serde(alias = "note-purple")]
    Purple,
}

impl ColorCode {
    /// Palette in picker order; the first entry is the default.
    pub const ALL: [ColorCode; 5] = [
        ColorCode::Yellow,
        ColorCode::Blue,
        ColorCode::Green,
        ColorCode::Pink,
        ColorCode::Purple,
    ];

    /// Stable palette name used on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Pink => "pink",
            Self::Purple => "purple",
        }
    }

    /// Background class used by the web shell stylesheet.
    pub fn css_class(self) -> String {
        format!("bg-note-{}", self.as_str())
    }
}

/// Field-level validation failures for tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    EmptyId,
    EmptyTitle,
    TimeSlotOutOfRange(u8),
    InvalidDate(String),
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "Task id cannot be empty"),
            Self::EmptyTitle => write!(f, "Title cannot be empty"),
            Self::TimeSlotOutOfRange(hour) => write!(
                f,
                "Time slot {hour} is outside working hours ({FIRST_TIME_SLOT}-{LAST_TIME_SLOT})"
            ),
            Self::InvalidDate(value) => write!(f, "Invalid task date `{value}`"),
        }
    }
}

impl Error for TaskValidationError {}

/// Persisted sticky-note task.
///
/// Serialized with camelCase keys (`colorCode`, `timeSlot`) and the date as an
/// ISO-8601 calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "TaskRecord")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: Option<String>,
    pub color_code: ColorCode,
    pub date: NaiveDate,
    pub time_slot: u8,
}

impl Task {
    /// Creates a task with a generated id, default color and default hour.
    pub fn new(title: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            id: TaskId::generate(),
            title: title.into(),
            description: None,
            color_code: ColorCode::default(),
            date,
            time_slot: DEFAULT_TIME_SLOT,
        }
    }

    /// Checks task invariants.
    ///
    /// # Errors
    /// - `EmptyId` when the id is blank.
    /// - `EmptyTitle` when the title is blank after trimming.
    /// - `TimeSlotOutOfRange` when the hour is outside working hours.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.id.is_empty() {
            return Err(TaskValidationError::EmptyId);
        }
        if self.title.trim().is_empty() {
            return Err(TaskValidationError::EmptyTitle);
        }
        if !is_valid_time_slot(self.time_slot) {
            return Err(TaskValidationError::TimeSlotOutOfRange(self.time_slot));
        }
        Ok(())
    }

    /// Returns whether the task is scheduled on `date`.
    pub fn is_on(&self, date: NaiveDate) -> bool {
        self.date == date
    }

    /// Returns whether the task occupies the `(date, hour)` slot.
    pub fn occupies(&self, date: NaiveDate, hour: u8) -> bool {
        self.date == date && self.time_slot == hour
    }
}

/// Input for the add-task flow.
///
/// Missing fields are filled in by the store: a generated id, the default
/// color, the current day and `DEFAULT_TIME_SLOT`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewTask {
    pub id: Option<TaskId>,
    pub title: String,
    pub description: Option<String>,
    pub color_code: Option<ColorCode>,
    pub date: Option<NaiveDate>,
    pub time_slot: Option<u8>,
}

impl NewTask {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn on(mut self, date: NaiveDate, time_slot: u8) -> Self {
        self.date = Some(date);
        self.time_slot = Some(time_slot);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_color(mut self, color_code: ColorCode) -> Self {
        self.color_code = Some(color_code);
        self
    }

    /// Materializes the draft into a task using `today` as the date fallback.
    ///
    /// The result is not validated; callers run `Task::validate()`.
    pub fn into_task(self, today: NaiveDate) -> Task {
        Task {
            id: self.id.unwrap_or_else(TaskId::generate),
            title: self.title,
            description: normalize_description(self.description),
            color_code: self.color_code.unwrap_or_default(),
            date: self.date.unwrap_or(today),
            time_slot: self.time_slot.unwrap_or(DEFAULT_TIME_SLOT),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TaskRecord {
    id: TaskId,
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    color_code: ColorCode,
    date: String,
    #[serde(default = "default_time_slot")]
    time_slot: u8,
}

fn default_time_slot() -> u8 {
    DEFAULT_TIME_SLOT
}

impl TryFrom<TaskRecord> for Task {
    type Error = TaskValidationError;

    fn try_from(record: TaskRecord) -> Result<Self, Self::Error> {
        let task = Task {
            id: record.id,
            title: record.title,
            description: normalize_description(record.description),
            color_code: record.color_code,
            date: parse_task_date(&record.date)?,
            time_slot: record.time_slot,
        };
        task.validate()?;
        Ok(task)
    }
}

/// Maps an empty description to `None`.
pub fn normalize_description(description: Option<String>) -> Option<String> {
    description.filter(|value| !value.is_empty())
}

/// Parses a persisted task date.
///
/// Accepts `YYYY-MM-DD` and full ISO-8601 timestamps, keeping only the
/// calendar day of the latter.
pub fn parse_task_date(value: &str) -> Result<NaiveDate, TaskValidationError> {
    let trimmed = value.trim();
    let day_part = match trimmed.get(..10) {
        Some(day) if trimmed.len() == 10 || trimmed[10..].starts_with('T') => day,
        _ => return Err(TaskValidationError::InvalidDate(value.to_string())),
    };
    NaiveDate::parse_from_str(day_part, "%Y-%m-%d")
        .map_err(|_| TaskValidationError::InvalidDate(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::{is_valid_time_slot, parse_task_date, time_slots, TaskValidationError};
    use chrono::NaiveDate;

    #[test]
    fn time_slots_cover_working_hours() {
        let hours: Vec<u8> = time_slots().collect();
        assert_eq!(hours.len(), 12);
        assert_eq!(hours.first(), Some(&7));
        assert_eq!(hours.last(), Some(&18));
        assert!(!is_valid_time_slot(6));
        assert!(!is_valid_time_slot(19));
    }

    #[test]
    fn parse_task_date_accepts_plain_and_timestamp_forms() {
        let expected = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        assert_eq!(parse_task_date("2026-10-18").unwrap(), expected);
        assert_eq!(
            parse_task_date("2026-10-18T09:30:00.000Z").unwrap(),
            expected
        );
    }

    #[test]
    fn parse_task_date_rejects_garbage() {
        assert_eq!(
            parse_task_date("2026-13-40").unwrap_err(),
            TaskValidationError::InvalidDate("2026-13-40".to_string())
        );
        assert!(parse_task_date("2026-10-18 garbage").is_err());
        assert!(parse_task_date("").is_err());
    }
}
