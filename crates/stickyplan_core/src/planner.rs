//! Session controller for one planner screen.
//!
//! # Responsibility
//! - Own the task store, calendar cursor and drag controller for a session.
//! - Offer the UI-facing flow (add/edit/delete, drag, navigation, view).
//!
//! # Invariants
//! - All state changes go through the task store.
//! - A drag never outlives the task it refers to.

use crate::calendar::{CalendarCursor, CalendarView, CellKey, ViewMode, WeekStart};
use crate::dnd::controller::{DragController, DragError, DropOutcome};
use crate::model::task::{NewTask, Task, TaskId};
use crate::notify::Notifier;
use crate::repo::task_storage::TaskStorage;
use crate::service::task_store::{StoreError, StoreResult, TaskStore};
use chrono::NaiveDate;
use log::warn;

pub struct Planner<S: TaskStorage, N: Notifier> {
    store: TaskStore<S, N>,
    cursor: CalendarCursor,
    drag: DragController,
}

impl<S: TaskStorage, N: Notifier> Planner<S, N> {
    /// Starts a session anchored on the store clock's current day.
    pub fn new(store: TaskStore<S, N>, mode: ViewMode, week_start: WeekStart) -> Self {
        let cursor = CalendarCursor::new(mode, store.today(), week_start);
        Self {
            store,
            cursor,
            drag: DragController::new(),
        }
    }

    pub fn store(&self) -> &TaskStore<S, N> {
        &self.store
    }

    pub fn cursor(&self) -> &CalendarCursor {
        &self.cursor
    }

    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    pub fn add_task(&mut self, draft: NewTask) -> StoreResult<Task> {
        self.store.add(draft)
    }

    pub fn edit_task(&mut self, task: Task) -> StoreResult<Task> {
        self.store.update(task)
    }

    /// Deletes a task, dropping any drag that refers to it.
    pub fn delete_task(&mut self, id: &TaskId) -> bool {
        if self.drag.dragged_task() == Some(id) {
            self.drag.cancel_drag();
        }
        self.store.remove(id)
    }

    pub fn begin_drag(&mut self, id: &TaskId) -> Result<(), DragError> {
        let task = self
            .store
            .get(id)
            .ok_or_else(|| DragError::Store(StoreError::NotFound(id.clone())))?;
        self.drag.begin_drag(task)
    }

    pub fn hover(&mut self, target: Option<CellKey>) -> Result<(), DragError> {
        self.drag.update_drag(target)
    }

    pub fn drop_on(&mut self, target: Option<CellKey>) -> Result<DropOutcome, DragError> {
        self.drag.end_drag(&mut self.store, target)
    }

    /// Drops onto a raw cell identifier as reported by the UI layer.
    ///
    /// An unparseable identifier counts as a drop outside any cell.
    pub fn drop_on_cell_id(&mut self, cell_id: Option<&str>) -> Result<DropOutcome, DragError> {
        let target = match cell_id.map(str::parse::<CellKey>) {
            Some(Ok(key)) => Some(key),
            Some(Err(err)) => {
                warn!("event=drag_end module=planner status=invalid_target error={err}");
                None
            }
            None => None,
        };
        self.drop_on(target)
    }

    pub fn cancel_drag(&mut self) {
        self.drag.cancel_drag();
    }

    pub fn next(&mut self) -> NaiveDate {
        self.cursor.next()
    }

    pub fn previous(&mut self) -> NaiveDate {
        self.cursor.previous()
    }

    pub fn go_to_today(&mut self) -> NaiveDate {
        let today = self.store.today();
        self.cursor.go_to(today);
        today
    }

    pub fn go_to(&mut self, date: NaiveDate) {
        self.cursor.go_to(date);
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.cursor.set_mode(mode);
    }

    /// Projection of the current task list for the cursor's view.
    pub fn view(&self) -> CalendarView<'_> {
        self.cursor.project(self.store.list())
    }

    pub fn header_label(&self) -> String {
        self.cursor.header_label()
    }
}
