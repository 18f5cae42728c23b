//! Grid projection for day, week and month views.

use super::cell::CellKey;
use super::range::{month_range, visible_range, week_range, DateRange, ViewMode, WeekStart};
use crate::model::task::{time_slots, Task};
use chrono::NaiveDate;

/// One hour cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotCell<'a> {
    pub key: CellKey,
    /// Occupants in task-list order.
    pub tasks: Vec<&'a Task>,
}

impl SlotCell<'_> {
    pub fn date(&self) -> NaiveDate {
        self.key.date
    }

    pub fn hour(&self) -> u8 {
        self.key.hour.unwrap_or_default()
    }
}

/// Day view: one row per working hour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayGrid<'a> {
    pub date: NaiveDate,
    pub slots: Vec<SlotCell<'a>>,
}

impl DayGrid<'_> {
    /// True when no task is scheduled on this day; drives the empty state.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|slot| slot.tasks.is_empty())
    }
}

/// One hour row across the days of a week.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HourRow<'a> {
    pub hour: u8,
    pub cells: Vec<SlotCell<'a>>,
}

/// Week view: day columns by hour rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekGrid<'a> {
    pub days: Vec<NaiveDate>,
    pub rows: Vec<HourRow<'a>>,
}

/// One day cell in the month view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell<'a> {
    pub key: CellKey,
    /// False for the leading/trailing days that pad out full weeks.
    pub in_month: bool,
    /// Occupants ordered by hour, then task-list order.
    pub tasks: Vec<&'a Task>,
}

/// Month view: full weeks covering the anchor month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid<'a> {
    pub month: DateRange,
    pub weeks: Vec<Vec<DayCell<'a>>>,
}

/// Projected calendar for one view mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarView<'a> {
    Day(DayGrid<'a>),
    Week(WeekGrid<'a>),
    Month(MonthGrid<'a>),
}

impl<'a> CalendarView<'a> {
    pub fn mode(&self) -> ViewMode {
        match self {
            Self::Day(_) => ViewMode::Daily,
            Self::Week(_) => ViewMode::Weekly,
            Self::Month(_) => ViewMode::Monthly,
        }
    }

    /// Keys of every droppable cell, in render order.
    pub fn cell_keys(&self) -> Vec<CellKey> {
        match self {
            Self::Day(grid) => grid.slots.iter().map(|slot| slot.key).collect(),
            Self::Week(grid) => grid
                .rows
                .iter()
                .flat_map(|row| row.cells.iter().map(|cell| cell.key))
                .collect(),
            Self::Month(grid) => grid
                .weeks
                .iter()
                .flat_map(|week| week.iter().map(|cell| cell.key))
                .collect(),
        }
    }

    /// Occupants of the cell addressed by `key`; empty when not visible.
    pub fn tasks_at(&self, key: &CellKey) -> &[&'a Task] {
        let found = match self {
            Self::Day(grid) => grid
                .slots
                .iter()
                .find(|slot| &slot.key == key)
                .map(|slot| slot.tasks.as_slice()),
            Self::Week(grid) => grid
                .rows
                .iter()
                .flat_map(|row| row.cells.iter())
                .find(|cell| &cell.key == key)
                .map(|cell| cell.tasks.as_slice()),
            Self::Month(grid) => grid
                .weeks
                .iter()
                .flat_map(|week| week.iter())
                .find(|cell| &cell.key == key)
                .map(|cell| cell.tasks.as_slice()),
        };
        found.unwrap_or(&[])
    }

    /// Number of task placements rendered by this view.
    pub fn task_count(&self) -> usize {
        match self {
            Self::Day(grid) => grid.slots.iter().map(|slot| slot.tasks.len()).sum(),
            Self::Week(grid) => grid
                .rows
                .iter()
                .flat_map(|row| row.cells.iter())
                .map(|cell| cell.tasks.len())
                .sum(),
            Self::Month(grid) => grid
                .weeks
                .iter()
                .flat_map(|week| week.iter())
                .map(|cell| cell.tasks.len())
                .sum(),
        }
    }
}

/// Projects `tasks` onto the grid for `mode` anchored at `anchor`.
pub fn project<'a>(
    tasks: &'a [Task],
    mode: ViewMode,
    anchor: NaiveDate,
    week_start: WeekStart,
) -> CalendarView<'a> {
    match mode {
        ViewMode::Daily => {
            let visible = visible_tasks(tasks, visible_range(mode, anchor, week_start));
            CalendarView::Day(DayGrid {
                date: anchor,
                slots: time_slots()
                    .map(|hour| slot_cell(&visible, anchor, hour))
                    .collect(),
            })
        }
        ViewMode::Weekly => {
            let range = visible_range(mode, anchor, week_start);
            let visible = visible_tasks(tasks, range);
            let days: Vec<NaiveDate> = range.days().collect();
            let rows = time_slots()
                .map(|hour| HourRow {
                    hour,
                    cells: days
                        .iter()
                        .map(|day| slot_cell(&visible, *day, hour))
                        .collect(),
                })
                .collect();
            CalendarView::Week(WeekGrid { days, rows })
        }
        ViewMode::Monthly => CalendarView::Month(month_grid(tasks, anchor, week_start)),
    }
}

fn visible_tasks(tasks: &[Task], range: DateRange) -> Vec<&Task> {
    tasks
        .iter()
        .filter(|task| range.contains(task.date))
        .collect()
}

fn slot_cell<'a>(visible: &[&'a Task], date: NaiveDate, hour: u8) -> SlotCell<'a> {
    let key = CellKey::slot(date, hour);
    SlotCell {
        key,
        tasks: visible
            .iter()
            .copied()
            .filter(|task| key.contains(task))
            .collect(),
    }
}

fn month_grid<'a>(tasks: &'a [Task], anchor: NaiveDate, week_start: WeekStart) -> MonthGrid<'a> {
    let month = month_range(anchor);
    let padded = DateRange::new(
        week_range(month.start, week_start).start,
        week_range(month.end, week_start).end,
    );
    let visible = visible_tasks(tasks, padded);

    let cells: Vec<DayCell<'a>> = padded
        .days()
        .map(|day| {
            let key = CellKey::day(day);
            let mut occupants: Vec<&'a Task> = visible
                .iter()
                .copied()
                .filter(|task| key.contains(task))
                .collect();
            occupants.sort_by_key(|task| task.time_slot);
            DayCell {
                key,
                in_month: month.contains(day),
                tasks: occupants,
            }
        })
        .collect();

    MonthGrid {
        month,
        weeks: cells.chunks(7).map(<[DayCell<'a>]>::to_vec).collect(),
    }
}
