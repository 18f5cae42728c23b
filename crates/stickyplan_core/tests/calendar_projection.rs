use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::HashSet;
use stickyplan_core::calendar::week_range;
use stickyplan_core::{
    project, step, CalendarCursor, CalendarView, CellKey, Direction, Task, ViewMode, WeekStart,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn task_at(title: &str, on: NaiveDate, hour: u8) -> Task {
    let mut task = Task::new(title, on);
    task.time_slot = hour;
    task
}

#[test]
fn day_view_shows_only_tasks_on_the_anchor_day() {
    let d = date(2026, 10, 18);
    let a = task_at("A", d, 9);
    let b = task_at("B", d.succ_opt().unwrap(), 9);
    let tasks = vec![a.clone(), b.clone()];

    let view = project(&tasks, ViewMode::Daily, d, WeekStart::Sunday);
    let CalendarView::Day(grid) = &view else {
        panic!("expected day view");
    };
    assert_eq!(grid.slots.len(), 12);
    assert_eq!(grid.slots[0].hour(), 7);
    assert_eq!(grid.slots[11].hour(), 18);

    let at_nine = view.tasks_at(&CellKey::slot(d, 9));
    assert_eq!(at_nine.len(), 1);
    assert_eq!(at_nine[0].id, a.id);
    assert_eq!(view.task_count(), 1);
    assert!(view.cell_keys().iter().all(|key| key.date == d));
}

#[test]
fn day_view_reports_empty_state() {
    let tasks = vec![task_at("Elsewhere", date(2026, 10, 19), 10)];
    let CalendarView::Day(grid) = project(&tasks, ViewMode::Daily, date(2026, 10, 18), WeekStart::Sunday)
    else {
        panic!("expected day view");
    };
    assert!(grid.is_empty());
}

#[test]
fn week_view_places_tasks_by_day_and_hour() {
    let anchor = date(2026, 10, 21);
    let monday = date(2026, 10, 19);
    let saturday = date(2026, 10, 24);
    let tasks = vec![
        task_at("Mon 8", monday, 8),
        task_at("Sat 17", saturday, 17),
        task_at("Next week", date(2026, 10, 25), 8),
    ];

    let view = project(&tasks, ViewMode::Weekly, anchor, WeekStart::Sunday);
    let CalendarView::Week(grid) = &view else {
        panic!("expected week view");
    };
    assert_eq!(grid.days.len(), 7);
    assert_eq!(grid.days[0], date(2026, 10, 18));
    assert_eq!(grid.days[0].weekday(), Weekday::Sun);
    assert_eq!(grid.rows.len(), 12);
    assert!(grid.rows.iter().all(|row| row.cells.len() == 7));

    assert_eq!(view.tasks_at(&CellKey::slot(monday, 8))[0].title, "Mon 8");
    assert_eq!(view.tasks_at(&CellKey::slot(saturday, 17))[0].title, "Sat 17");
    assert!(view.tasks_at(&CellKey::slot(monday, 9)).is_empty());
    assert_eq!(view.task_count(), 2);
}

#[test]
fn week_view_supports_monday_start() {
    let tasks: Vec<Task> = Vec::new();
    let CalendarView::Week(grid) = project(&tasks, ViewMode::Weekly, date(2026, 10, 18), WeekStart::Monday)
    else {
        panic!("expected week view");
    };
    assert_eq!(grid.days[0], date(2026, 10, 12));
    assert_eq!(grid.days[6], date(2026, 10, 18));
}

#[test]
fn month_view_pads_to_full_weeks() {
    // October 2026 starts on a Thursday and ends on a Saturday.
    let tasks = vec![
        task_at("Late", date(2026, 10, 31), 15),
        task_at("Early", date(2026, 10, 31), 8),
        task_at("Padding day", date(2026, 9, 28), 10),
        task_at("Outside", date(2026, 11, 5), 10),
    ];

    let view = project(&tasks, ViewMode::Monthly, date(2026, 10, 18), WeekStart::Sunday);
    let CalendarView::Month(grid) = &view else {
        panic!("expected month view");
    };
    assert_eq!(grid.month.start, date(2026, 10, 1));
    assert_eq!(grid.month.end, date(2026, 10, 31));
    assert_eq!(grid.weeks.len(), 5);
    assert!(grid.weeks.iter().all(|week| week.len() == 7));
    assert_eq!(grid.weeks[0][0].key, CellKey::day(date(2026, 9, 27)));
    assert!(!grid.weeks[0][0].in_month);
    assert!(grid.weeks[4][6].in_month);

    let last_day = view.tasks_at(&CellKey::day(date(2026, 10, 31)));
    let titles: Vec<&str> = last_day.iter().map(|task| task.title.as_str()).collect();
    assert_eq!(titles, vec!["Early", "Late"]);
    assert_eq!(view.tasks_at(&CellKey::day(date(2026, 9, 28))).len(), 1);
    assert!(view.tasks_at(&CellKey::day(date(2026, 11, 5))).is_empty());
}

#[test]
fn cell_keys_are_unique_and_parse_back() {
    let tasks: Vec<Task> = Vec::new();
    for mode in ViewMode::ALL {
        let view = project(&tasks, mode, date(2026, 2, 14), WeekStart::Sunday);
        let keys = view.cell_keys();
        let unique: HashSet<CellKey> = keys.iter().copied().collect();
        assert_eq!(unique.len(), keys.len(), "duplicate keys in {mode:?}");

        let texts: HashSet<String> = keys.iter().map(CellKey::to_string).collect();
        assert_eq!(texts.len(), keys.len());
        for key in &keys {
            assert_eq!(key.to_string().parse::<CellKey>().unwrap(), *key);
        }
    }
}

#[test]
fn week_navigation_moves_week_start_by_seven_days() {
    let mut anchor = date(2026, 1, 1);
    for _ in 0..60 {
        let start = week_range(anchor, WeekStart::Sunday).start;
        let next = step(ViewMode::Weekly, anchor, Direction::Next);
        assert_eq!(
            (week_range(next, WeekStart::Sunday).start - start).num_days(),
            7
        );

        let back = step(ViewMode::Weekly, next, Direction::Previous);
        assert_eq!(week_range(back, WeekStart::Sunday).start, start);

        let prev_then_next = step(
            ViewMode::Weekly,
            step(ViewMode::Weekly, anchor, Direction::Previous),
            Direction::Next,
        );
        assert_eq!(week_range(prev_then_next, WeekStart::Sunday).start, start);

        anchor = anchor.succ_opt().unwrap();
    }
}

#[test]
fn cursor_navigation_follows_view_mode() {
    let mut cursor = CalendarCursor::new(ViewMode::Daily, date(2026, 10, 18), WeekStart::Sunday);
    assert_eq!(cursor.next(), date(2026, 10, 19));
    cursor.set_mode(ViewMode::Weekly);
    assert_eq!(cursor.previous(), date(2026, 10, 12));
    cursor.set_mode(ViewMode::Monthly);
    assert_eq!(cursor.next(), date(2026, 11, 12));
    assert_eq!(cursor.range().start, date(2026, 11, 1));
    assert_eq!(cursor.header_label(), "November 2026");
}
