use chrono::NaiveDate;
use stickyplan_core::{
    CellKey, DragController, DragError, DragState, DropOutcome, FixedClock, MemoryTaskStorage,
    NewTask, NotificationQueue, StoreError, Task, TaskStore, TaskValidationError,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
}

struct Fixture {
    storage: MemoryTaskStorage,
    queue: NotificationQueue,
}

impl Fixture {
    fn new() -> Self {
        Self {
            storage: MemoryTaskStorage::new(),
            queue: NotificationQueue::new(),
        }
    }

    fn store(&self) -> TaskStore<&MemoryTaskStorage, &NotificationQueue> {
        TaskStore::open(&self.storage, &self.queue, FixedClock(today()))
    }
}

fn add(store: &mut TaskStore<&MemoryTaskStorage, &NotificationQueue>, title: &str) -> Task {
    store.add(NewTask::titled(title).on(today(), 9)).unwrap()
}

#[test]
fn begin_and_hover_do_not_mutate() {
    let fixture = Fixture::new();
    let mut store = fixture.store();
    let task = add(&mut store, "Standup");
    let saves = fixture.storage.save_count();

    let mut drag = DragController::new();
    drag.begin_drag(&task).unwrap();
    assert!(drag.is_dragging());
    assert_eq!(drag.dragged_task(), Some(&task.id));

    let hovered = CellKey::slot(today(), 14);
    drag.update_drag(Some(hovered)).unwrap();
    assert_eq!(drag.hovered(), Some(hovered));
    drag.update_drag(None).unwrap();
    assert_eq!(drag.hovered(), None);

    assert_eq!(store.get(&task.id), Some(&task));
    assert_eq!(fixture.storage.save_count(), saves);
}

#[test]
fn drop_on_slot_moves_task_and_returns_to_idle() {
    let fixture = Fixture::new();
    let mut store = fixture.store();
    let task = add(&mut store, "Standup");
    let target_day = today().succ_opt().unwrap();

    let mut drag = DragController::new();
    drag.begin_drag(&task).unwrap();
    let outcome = drag
        .end_drag(&mut store, Some(CellKey::slot(target_day, 14)))
        .unwrap();

    let DropOutcome::Moved(moved) = outcome else {
        panic!("expected a move");
    };
    assert_eq!(moved.date, target_day);
    assert_eq!(moved.time_slot, 14);
    assert_eq!(store.get(&task.id), Some(&moved));
    assert_eq!(drag.state(), &DragState::Idle);
}

#[test]
fn drop_outside_any_cell_keeps_position() {
    let fixture = Fixture::new();
    let mut store = fixture.store();
    let task = add(&mut store, "Standup");

    let mut drag = DragController::new();
    drag.begin_drag(&task).unwrap();
    drag.update_drag(Some(CellKey::slot(today(), 12))).unwrap();
    let outcome = drag.end_drag(&mut store, None).unwrap();

    assert_eq!(outcome, DropOutcome::Cancelled);
    assert_eq!(store.get(&task.id), Some(&task));
    assert!(!drag.is_dragging());
}

#[test]
fn drop_on_own_cell_is_a_no_op() {
    let fixture = Fixture::new();
    let mut store = fixture.store();
    let task = add(&mut store, "Standup");
    let saves = fixture.storage.save_count();

    let mut drag = DragController::new();
    drag.begin_drag(&task).unwrap();
    let outcome = drag
        .end_drag(&mut store, Some(CellKey::of_task(&task)))
        .unwrap();

    assert_eq!(outcome, DropOutcome::Unchanged);
    assert_eq!(fixture.storage.save_count(), saves);
}

#[test]
fn drop_on_month_day_keeps_hour() {
    let fixture = Fixture::new();
    let mut store = fixture.store();
    let task = store
        .add(NewTask::titled("Dentist").on(today(), 15))
        .unwrap();
    let target_day = NaiveDate::from_ymd_opt(2026, 10, 27).unwrap();

    let mut drag = DragController::new();
    drag.begin_drag(&task).unwrap();
    let outcome = drag
        .end_drag(&mut store, Some(CellKey::day(target_day)))
        .unwrap();

    let DropOutcome::Moved(moved) = outcome else {
        panic!("expected a move");
    };
    assert_eq!(moved.date, target_day);
    assert_eq!(moved.time_slot, 15);

    drag.begin_drag(&moved).unwrap();
    let again = drag
        .end_drag(&mut store, Some(CellKey::day(target_day)))
        .unwrap();
    assert_eq!(again, DropOutcome::Unchanged);
}

#[test]
fn drop_on_out_of_range_hour_is_rejected() {
    let fixture = Fixture::new();
    let mut store = fixture.store();
    let task = add(&mut store, "Standup");

    let mut drag = DragController::new();
    drag.begin_drag(&task).unwrap();
    let target: CellKey = "2026-10-18-22".parse().unwrap();
    let err = drag.end_drag(&mut store, Some(target)).unwrap_err();

    assert_eq!(
        err,
        DragError::Store(StoreError::Validation(
            TaskValidationError::TimeSlotOutOfRange(22)
        ))
    );
    assert_eq!(store.get(&task.id), Some(&task));
    assert!(!drag.is_dragging());
}

#[test]
fn second_begin_is_rejected_while_dragging() {
    let fixture = Fixture::new();
    let mut store = fixture.store();
    let first = add(&mut store, "First");
    let second = add(&mut store, "Second");

    let mut drag = DragController::new();
    drag.begin_drag(&first).unwrap();
    let err = drag.begin_drag(&second).unwrap_err();

    assert_eq!(err, DragError::AlreadyDragging(first.id.clone()));
    assert_eq!(drag.dragged_task(), Some(&first.id));
}

#[test]
fn transitions_require_an_active_drag() {
    let fixture = Fixture::new();
    let mut store = fixture.store();

    let mut drag = DragController::new();
    assert_eq!(drag.update_drag(None).unwrap_err(), DragError::NotDragging);
    assert_eq!(
        drag.end_drag(&mut store, None).unwrap_err(),
        DragError::NotDragging
    );

    let task = add(&mut store, "Cancel me");
    drag.begin_drag(&task).unwrap();
    drag.cancel_drag();
    assert_eq!(drag.state(), &DragState::Idle);
    drag.begin_drag(&task).unwrap();
}

#[test]
fn drop_after_task_was_deleted_reports_not_found() {
    let fixture = Fixture::new();
    let mut store = fixture.store();
    let task = add(&mut store, "Ephemeral");

    let mut drag = DragController::new();
    drag.begin_drag(&task).unwrap();
    store.remove(&task.id);

    let err = drag
        .end_drag(&mut store, Some(CellKey::slot(today(), 11)))
        .unwrap_err();
    assert_eq!(err, DragError::Store(StoreError::NotFound(task.id)));
}

#[test]
fn drop_on_old_cell_after_task_was_deleted_reports_not_found() {
    let fixture = Fixture::new();
    let mut store = fixture.store();
    let task = add(&mut store, "Ephemeral");
    let origin = CellKey::of_task(&task);

    let mut drag = DragController::new();
    drag.begin_drag(&task).unwrap();
    store.remove(&task.id);
    let saves = fixture.storage.save_count();

    let err = drag.end_drag(&mut store, Some(origin)).unwrap_err();
    assert_eq!(err, DragError::Store(StoreError::NotFound(task.id)));
    assert_eq!(drag.state(), &DragState::Idle);
    assert_eq!(fixture.storage.save_count(), saves);
}
