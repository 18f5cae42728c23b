//! Anchor-date navigation and header labels.

use super::grid::{project, CalendarView};
use super::range::{shift_days, visible_range, week_range, DateRange, ViewMode, WeekStart};
use crate::clock::Clock;
use crate::model::task::Task;
use chrono::{Months, NaiveDate};

/// Navigation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// Advances `anchor` by one unit of `mode`.
///
/// Month steps keep the day of month when it exists in the target month and
/// clamp to its last day otherwise (Jan 31 -> Feb 28).
pub fn step(mode: ViewMode, anchor: NaiveDate, direction: Direction) -> NaiveDate {
    let sign: i64 = match direction {
        Direction::Previous => -1,
        Direction::Next => 1,
    };
    match mode {
        ViewMode::Daily => shift_days(anchor, sign),
        ViewMode::Weekly => shift_days(anchor, 7 * sign),
        ViewMode::Monthly => {
            let shifted = match direction {
                Direction::Next => anchor.checked_add_months(Months::new(1)),
                Direction::Previous => anchor.checked_sub_months(Months::new(1)),
            };
            shifted.unwrap_or(anchor)
        }
    }
}

/// Header text for the visible period.
///
/// - daily: `Sunday, October 18, 2026`
/// - weekly: `Oct 18 - Oct 24, 2026`
/// - monthly: `October 2026`
pub fn header_label(mode: ViewMode, anchor: NaiveDate, week_start: WeekStart) -> String {
    match mode {
        ViewMode::Daily => anchor.format("%A, %B %-d, %Y").to_string(),
        ViewMode::Weekly => {
            let week = week_range(anchor, week_start);
            format!(
                "{} - {}",
                week.start.format("%b %-d"),
                week.end.format("%b %-d, %Y")
            )
        }
        ViewMode::Monthly => anchor.format("%B %Y").to_string(),
    }
}

/// Twelve-hour label for a time-slot row (`7 AM`, `12 PM`, `1 PM`).
pub fn hour_label(hour: u8) -> String {
    match hour {
        0 => "12 AM".to_string(),
        1..=11 => format!("{hour} AM"),
        12 => "12 PM".to_string(),
        _ => format!("{} PM", hour - 12),
    }
}

/// Current view mode and anchor date of a planner session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarCursor {
    pub mode: ViewMode,
    pub anchor: NaiveDate,
    pub week_start: WeekStart,
}

impl CalendarCursor {
    pub fn new(mode: ViewMode, anchor: NaiveDate, week_start: WeekStart) -> Self {
        Self {
            mode,
            anchor,
            week_start,
        }
    }

    pub fn next(&mut self) -> NaiveDate {
        self.anchor = step(self.mode, self.anchor, Direction::Next);
        self.anchor
    }

    pub fn previous(&mut self) -> NaiveDate {
        self.anchor = step(self.mode, self.anchor, Direction::Previous);
        self.anchor
    }

    /// Resets the anchor to the clock's current day.
    pub fn today(&mut self, clock: &dyn Clock) -> NaiveDate {
        self.anchor = clock.today();
        self.anchor
    }

    pub fn go_to(&mut self, date: NaiveDate) {
        self.anchor = date;
    }

    /// Switches view mode; the anchor date is kept.
    pub fn set_mode(&mut self, mode: ViewMode) {
        self.mode = mode;
    }

    pub fn range(&self) -> DateRange {
        visible_range(self.mode, self.anchor, self.week_start)
    }

    pub fn header_label(&self) -> String {
        header_label(self.mode, self.anchor, self.week_start)
    }

    pub fn project<'a>(&self, tasks: &'a [Task]) -> CalendarView<'a> {
        project(tasks, self.mode, self.anchor, self.week_start)
    }
}

#[cfg(test)]
mod tests {
    use super::{header_label, hour_label, step, CalendarCursor, Direction};
    use crate::calendar::{ViewMode, WeekStart};
    use crate::clock::FixedClock;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn month_step_clamps_to_last_valid_day() {
        assert_eq!(
            step(ViewMode::Monthly, date(2026, 1, 31), Direction::Next),
            date(2026, 2, 28)
        );
        assert_eq!(
            step(ViewMode::Monthly, date(2026, 3, 31), Direction::Previous),
            date(2026, 2, 28)
        );
        assert_eq!(
            step(ViewMode::Monthly, date(2026, 5, 15), Direction::Next),
            date(2026, 6, 15)
        );
    }

    #[test]
    fn day_and_week_steps() {
        assert_eq!(
            step(ViewMode::Daily, date(2026, 12, 31), Direction::Next),
            date(2027, 1, 1)
        );
        assert_eq!(
            step(ViewMode::Weekly, date(2026, 10, 18), Direction::Previous),
            date(2026, 10, 11)
        );
    }

    #[test]
    fn labels_match_planner_header_format() {
        let anchor = date(2026, 10, 18);
        assert_eq!(
            header_label(ViewMode::Daily, anchor, WeekStart::Sunday),
            "Sunday, October 18, 2026"
        );
        assert_eq!(
            header_label(ViewMode::Weekly, date(2026, 10, 21), WeekStart::Sunday),
            "Oct 18 - Oct 24, 2026"
        );
        assert_eq!(
            header_label(ViewMode::Monthly, anchor, WeekStart::Sunday),
            "October 2026"
        );
        assert_eq!(hour_label(7), "7 AM");
        assert_eq!(hour_label(12), "12 PM");
        assert_eq!(hour_label(18), "6 PM");
    }

    #[test]
    fn cursor_today_resets_anchor() {
        let mut cursor = CalendarCursor::new(ViewMode::Weekly, date(2020, 1, 1), WeekStart::Sunday);
        cursor.next();
        assert_eq!(cursor.anchor, date(2020, 1, 8));
        cursor.set_mode(ViewMode::Monthly);
        assert_eq!(cursor.anchor, date(2020, 1, 8));

        let clock = FixedClock(date(2026, 10, 18));
        assert_eq!(cursor.today(&clock), date(2026, 10, 18));
    }
}
