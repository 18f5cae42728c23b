//! View modes and the date spans they cover.

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Grid shape and navigation unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Daily,
    Weekly,
    Monthly,
}

impl ViewMode {
    pub const ALL: [ViewMode; 3] = [ViewMode::Daily, ViewMode::Weekly, ViewMode::Monthly];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }

    /// Short label used by the view selector.
    pub fn label(self) -> &'static str {
        match self {
            Self::Daily => "Day",
            Self::Weekly => "Week",
            Self::Monthly => "Month",
        }
    }
}

/// First day of a calendar week.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    pub fn weekday(self) -> Weekday {
        match self {
            Self::Sunday => Weekday::Sun,
            Self::Monday => Weekday::Mon,
        }
    }

    fn offset_of(self, date: NaiveDate) -> u32 {
        match self {
            Self::Sunday => date.weekday().num_days_from_sunday(),
            Self::Monday => date.weekday().num_days_from_monday(),
        }
    }
}

/// Inclusive span of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn single(date: NaiveDate) -> Self {
        Self::new(date, date)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Every day from `start` to `end`, inclusive.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |day| *day <= end)
    }

    pub fn len_days(&self) -> usize {
        usize::try_from((self.end - self.start).num_days() + 1).unwrap_or(0)
    }
}

/// Moves `date` by `delta` days, saturating at the representable bounds.
pub fn shift_days(date: NaiveDate, delta: i64) -> NaiveDate {
    let magnitude = Days::new(delta.unsigned_abs());
    if delta >= 0 {
        date.checked_add_days(magnitude).unwrap_or(NaiveDate::MAX)
    } else {
        date.checked_sub_days(magnitude).unwrap_or(NaiveDate::MIN)
    }
}

/// The 7-day span containing `anchor`.
pub fn week_range(anchor: NaiveDate, week_start: WeekStart) -> DateRange {
    let start = shift_days(anchor, -i64::from(week_start.offset_of(anchor)));
    DateRange::new(start, shift_days(start, 6))
}

/// First through last day of the month containing `anchor`.
pub fn month_range(anchor: NaiveDate) -> DateRange {
    let start = anchor.with_day(1).unwrap_or(anchor);
    let end = start
        .checked_add_months(Months::new(1))
        .map_or(NaiveDate::MAX, |next| shift_days(next, -1));
    DateRange::new(start, end)
}

/// Days covered by `mode` around `anchor`.
pub fn visible_range(mode: ViewMode, anchor: NaiveDate, week_start: WeekStart) -> DateRange {
    match mode {
        ViewMode::Daily => DateRange::single(anchor),
        ViewMode::Weekly => week_range(anchor, week_start),
        ViewMode::Monthly => month_range(anchor),
    }
}

#[cfg(test)]
mod tests {
    use super::{month_range, shift_days, visible_range, week_range, ViewMode, WeekStart};
    use chrono::{Datelike, NaiveDate, Weekday};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn week_range_respects_week_start() {
        // 2026-10-18 is a Sunday.
        let sunday_week = week_range(date(2026, 10, 21), WeekStart::Sunday);
        assert_eq!(sunday_week.start, date(2026, 10, 18));
        assert_eq!(sunday_week.end, date(2026, 10, 24));
        assert_eq!(sunday_week.start.weekday(), Weekday::Sun);

        let monday_week = week_range(date(2026, 10, 18), WeekStart::Monday);
        assert_eq!(monday_week.start, date(2026, 10, 12));
        assert_eq!(monday_week.end, date(2026, 10, 18));
        assert_eq!(monday_week.len_days(), 7);
    }

    #[test]
    fn month_range_handles_leap_february() {
        let feb = month_range(date(2028, 2, 15));
        assert_eq!(feb.start, date(2028, 2, 1));
        assert_eq!(feb.end, date(2028, 2, 29));
        assert_eq!(feb.days().count(), 29);
    }

    #[test]
    fn daily_range_is_the_anchor() {
        let range = visible_range(ViewMode::Daily, date(2026, 1, 1), WeekStart::Sunday);
        assert_eq!(range.len_days(), 1);
        assert!(range.contains(date(2026, 1, 1)));
        assert!(!range.contains(date(2026, 1, 2)));
    }

    #[test]
    fn shift_days_saturates() {
        assert_eq!(shift_days(NaiveDate::MAX, 1), NaiveDate::MAX);
        assert_eq!(shift_days(NaiveDate::MIN, -1), NaiveDate::MIN);
        assert_eq!(shift_days(date(2026, 12, 31), 1), date(2027, 1, 1));
    }
}
