//! Task store: the single writer of planner state.
//!
//! # Responsibility
//! - Hold the authoritative task list for the session.
//! - Validate and apply add/update/remove/move mutations.
//! - Mirror every applied mutation to the persistence adapter.
//!
//! # Invariants
//! - Task ids are unique within the list.
//! - A rejected mutation leaves the list untouched.
//! - A failed save never rolls back the in-memory change.

use crate::clock::Clock;
use crate::model::task::{
    is_valid_time_slot, normalize_description, NewTask, Task, TaskId, TaskValidationError,
};
use crate::notify::Notifier;
use crate::repo::task_storage::{StorageError, TaskStorage};
use chrono::NaiveDate;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Rejected store mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    Validation(TaskValidationError),
    NotFound(TaskId),
    DuplicateId(TaskId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "Task not found: {id}"),
            Self::DuplicateId(id) => write!(f, "Task id already exists: {id}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) | Self::DuplicateId(_) => None,
        }
    }
}

impl From<TaskValidationError> for StoreError {
    fn from(value: TaskValidationError) -> Self {
        Self::Validation(value)
    }
}

/// In-memory task list with injected persistence and feedback channels.
pub struct TaskStore<S: TaskStorage, N: Notifier> {
    storage: S,
    notifier: N,
    clock: Box<dyn Clock>,
    tasks: Vec<Task>,
    last_persistence_error: Option<StorageError>,
}

impl<S: TaskStorage, N: Notifier> TaskStore<S, N> {
    /// Opens the store by loading the persisted list.
    ///
    /// A load failure is reported through the notifier and the session
    /// starts with an empty list.
    pub fn open(storage: S, notifier: N, clock: impl Clock + 'static) -> Self {
        let (tasks, last_persistence_error) = match storage.load() {
            Ok(tasks) => {
                info!(
                    "event=store_open module=store status=ok count={}",
                    tasks.len()
                );
                (tasks, None)
            }
            Err(err) => {
                warn!("event=store_open module=store status=error error={err}");
                notifier.error(&format!("Failed to load saved tasks: {err}"));
                (Vec::new(), Some(err))
            }
        };

        Self {
            storage,
            notifier,
            clock: Box::new(clock),
            tasks,
            last_persistence_error,
        }
    }

    /// Adds a task from the add-task flow and returns the stored record.
    ///
    /// # Errors
    /// - `Validation` for an empty title or out-of-range hour.
    /// - `DuplicateId` when an explicit id is already taken.
    pub fn add(&mut self, draft: NewTask) -> StoreResult<Task> {
        let task = draft.into_task(self.clock.today());
        if let Err(err) = task.validate() {
            return Err(self.reject("task_add", err.into()));
        }
        if self.position(&task.id).is_some() {
            return Err(self.reject("task_add", StoreError::DuplicateId(task.id)));
        }

        self.tasks.push(task.clone());
        info!(
            "event=task_add module=store status=ok task_id={} date={} time_slot={}",
            task.id, task.date, task.time_slot
        );
        self.persist("task_add");
        self.notifier.success("Task added successfully!");
        Ok(task)
    }

    /// Replaces every field of an existing task except its id.
    ///
    /// An empty description is stored as `None`, as in `add`.
    ///
    /// # Errors
    /// - `Validation` when the replacement is invalid.
    /// - `NotFound` when no task has `task.id`.
    pub fn update(&mut self, mut task: Task) -> StoreResult<Task> {
        task.description = normalize_description(task.description);
        if let Err(err) = task.validate() {
            return Err(self.reject("task_update", err.into()));
        }
        let Some(index) = self.position(&task.id) else {
            return Err(self.reject("task_update", StoreError::NotFound(task.id)));
        };

        self.tasks[index] = task.clone();
        info!(
            "event=task_update module=store status=ok task_id={}",
            task.id
        );
        self.persist("task_update");
        self.notifier.success("Task updated successfully!");
        Ok(task)
    }

    /// Removes a task; returns `false` when the id was not present.
    ///
    /// Removing a missing id is a silent no-op.
    pub fn remove(&mut self, id: &TaskId) -> bool {
        let Some(index) = self.position(id) else {
            info!("event=task_remove module=store status=noop task_id={id}");
            return false;
        };

        self.tasks.remove(index);
        info!("event=task_remove module=store status=ok task_id={id}");
        self.persist("task_remove");
        self.notifier.success("Task deleted successfully!");
        true
    }

    /// Reschedules a task, replacing only its date and hour.
    ///
    /// # Errors
    /// - `Validation` when `time_slot` is outside working hours.
    /// - `NotFound` when no task has `id`.
    pub fn move_task(
        &mut self,
        id: &TaskId,
        date: NaiveDate,
        time_slot: u8,
    ) -> StoreResult<Task> {
        if !is_valid_time_slot(time_slot) {
            let err = TaskValidationError::TimeSlotOutOfRange(time_slot);
            return Err(self.reject("task_move", err.into()));
        }
        let Some(index) = self.position(id) else {
            return Err(self.reject("task_move", StoreError::NotFound(id.clone())));
        };

        let task = &mut self.tasks[index];
        task.date = date;
        task.time_slot = time_slot;
        let moved = task.clone();
        info!(
            "event=task_move module=store status=ok task_id={} date={} time_slot={}",
            moved.id, moved.date, moved.time_slot
        );
        self.persist("task_move");
        self.notifier.success("Task moved successfully!");
        Ok(moved)
    }

    /// Read-only snapshot of the task list in insertion order.
    pub fn list(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| &task.id == id)
    }

    /// Tasks scheduled on `date`, in list order.
    pub fn tasks_on(&self, date: NaiveDate) -> Vec<&Task> {
        self.tasks.iter().filter(|task| task.is_on(date)).collect()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Current day according to the injected clock.
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Error from the most recent load/save, cleared by the next good save.
    pub fn last_persistence_error(&self) -> Option<&StorageError> {
        self.last_persistence_error.as_ref()
    }

    fn position(&self, id: &TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| &task.id == id)
    }

    fn reject(&self, event: &'static str, err: StoreError) -> StoreError {
        warn!("event={event} module=store status=rejected error={err}");
        self.notifier.error(&err.to_string());
        err
    }

    fn persist(&mut self, event: &'static str) {
        match self.storage.save(&self.tasks) {
            Ok(()) => self.last_persistence_error = None,
            Err(err) => {
                warn!(
                    "event={event} module=store status=persist_failed count={} error={err}",
                    self.tasks.len()
                );
                self.notifier.error(&format!("Failed to save tasks: {err}"));
                self.last_persistence_error = Some(err);
            }
        }
    }
}
