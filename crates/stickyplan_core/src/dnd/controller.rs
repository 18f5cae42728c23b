//! Drag state machine: `Idle -> Dragging -> Idle`.
//!
//! A second `begin_drag` while a drag is active is rejected and leaves the
//! active drag untouched.

use crate::calendar::CellKey;
use crate::model::task::{Task, TaskId};
use crate::notify::Notifier;
use crate::repo::task_storage::TaskStorage;
use crate::service::task_store::{StoreError, TaskStore};
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Drag lifecycle state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        task_id: TaskId,
        /// Cell the task occupied when the drag started.
        origin: CellKey,
        /// Cell currently under the pointer, for highlight only.
        hovered: Option<CellKey>,
    },
}

/// Result of a committed or discarded drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// The task was rescheduled.
    Moved(Task),
    /// Dropped onto the cell it already occupies.
    Unchanged,
    /// Dropped outside any cell; the task keeps its position.
    Cancelled,
}

/// Invalid drag transition or rejected drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragError {
    AlreadyDragging(TaskId),
    NotDragging,
    Store(StoreError),
}

impl Display for DragError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyDragging(id) => write!(f, "task {id} is already being dragged"),
            Self::NotDragging => write!(f, "no drag in progress"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for DragError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::AlreadyDragging(_) | Self::NotDragging => None,
        }
    }
}

impl From<StoreError> for DragError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Drag controller for one planner session.
#[derive(Debug, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Id of the task being dragged, if any.
    pub fn dragged_task(&self) -> Option<&TaskId> {
        match &self.state {
            DragState::Dragging { task_id, .. } => Some(task_id),
            DragState::Idle => None,
        }
    }

    /// Cell to highlight, if the pointer is over one.
    pub fn hovered(&self) -> Option<CellKey> {
        match &self.state {
            DragState::Dragging { hovered, .. } => *hovered,
            DragState::Idle => None,
        }
    }

    /// Starts dragging `task`.
    ///
    /// # Errors
    /// - `AlreadyDragging` when another drag is active.
    pub fn begin_drag(&mut self, task: &Task) -> Result<(), DragError> {
        if let DragState::Dragging { task_id, .. } = &self.state {
            return Err(DragError::AlreadyDragging(task_id.clone()));
        }
        debug!("event=drag_begin module=dnd status=ok task_id={}", task.id);
        self.state = DragState::Dragging {
            task_id: task.id.clone(),
            origin: CellKey::of_task(task),
            hovered: None,
        };
        Ok(())
    }

    /// Records the cell under the pointer. No task is mutated.
    pub fn update_drag(&mut self, target: Option<CellKey>) -> Result<(), DragError> {
        match &mut self.state {
            DragState::Dragging { hovered, .. } => {
                *hovered = target;
                Ok(())
            }
            DragState::Idle => Err(DragError::NotDragging),
        }
    }

    /// Ends the drag and commits the drop onto `target`.
    ///
    /// Hour cells reschedule to `(date, hour)`; month day cells change the
    /// date and keep the task's hour. The controller returns to `Idle` even
    /// when the store rejects the move.
    ///
    /// # Errors
    /// - `NotDragging` when no drag is active.
    /// - `Store` when the target hour is out of range or the task vanished.
    pub fn end_drag<S: TaskStorage, N: Notifier>(
        &mut self,
        store: &mut TaskStore<S, N>,
        target: Option<CellKey>,
    ) -> Result<DropOutcome, DragError> {
        let DragState::Dragging { task_id, .. } = std::mem::take(&mut self.state) else {
            return Err(DragError::NotDragging);
        };

        let Some(target) = target else {
            info!("event=drag_end module=dnd status=cancelled task_id={task_id}");
            return Ok(DropOutcome::Cancelled);
        };

        let Some(current) = store.get(&task_id).map(CellKey::of_task) else {
            warn!("event=drag_end module=dnd status=missing task_id={task_id}");
            return Err(DragError::Store(StoreError::NotFound(task_id)));
        };
        let hour = target.hour.or(current.hour).unwrap_or_default();
        if target.date == current.date && Some(hour) == current.hour {
            info!("event=drag_end module=dnd status=unchanged task_id={task_id}");
            return Ok(DropOutcome::Unchanged);
        }

        let moved = store.move_task(&task_id, target.date, hour)?;
        info!(
            "event=drag_end module=dnd status=moved task_id={} target={}",
            task_id, target
        );
        Ok(DropOutcome::Moved(moved))
    }

    /// Discards the active drag, if any.
    pub fn cancel_drag(&mut self) {
        if let DragState::Dragging { task_id, .. } = std::mem::take(&mut self.state) {
            debug!("event=drag_cancel module=dnd status=ok task_id={task_id}");
        }
    }
}
