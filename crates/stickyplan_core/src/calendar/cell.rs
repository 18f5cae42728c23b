//! Droppable cell addressing.

use crate::model::task::Task;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

static CELL_KEY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{4}-\d{2}-\d{2})(?:-(\d{1,2}))?$").expect("valid cell key regex")
});

/// Address of one calendar cell.
///
/// Hour cells (day/week views) carry `Some(hour)`; month-view day cells
/// carry `None`. The text form is `YYYY-MM-DD-H` or `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellKey {
    pub date: NaiveDate,
    pub hour: Option<u8>,
}

impl CellKey {
    pub fn slot(date: NaiveDate, hour: u8) -> Self {
        Self {
            date,
            hour: Some(hour),
        }
    }

    pub fn day(date: NaiveDate) -> Self {
        Self { date, hour: None }
    }

    /// Hour cell the task currently occupies.
    pub fn of_task(task: &Task) -> Self {
        Self::slot(task.date, task.time_slot)
    }

    /// Returns whether `task` belongs in this cell.
    pub fn contains(&self, task: &Task) -> bool {
        match self.hour {
            Some(hour) => task.occupies(self.date, hour),
            None => task.is_on(self.date),
        }
    }
}

impl Display for CellKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.date.format("%Y-%m-%d"))?;
        if let Some(hour) = self.hour {
            write!(f, "-{hour}")?;
        }
        Ok(())
    }
}

/// Unparseable cell identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellKeyError {
    Malformed(String),
    InvalidDate(String),
}

impl Display for CellKeyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Malformed(value) => write!(f, "malformed cell identifier `{value}`"),
            Self::InvalidDate(value) => write!(f, "cell identifier has invalid date `{value}`"),
        }
    }
}

impl Error for CellKeyError {}

impl FromStr for CellKey {
    type Err = CellKeyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let caps = CELL_KEY_RE
            .captures(value.trim())
            .ok_or_else(|| CellKeyError::Malformed(value.to_string()))?;

        let date_text = caps.get(1).map_or("", |m| m.as_str());
        let date = NaiveDate::parse_from_str(date_text, "%Y-%m-%d")
            .map_err(|_| CellKeyError::InvalidDate(value.to_string()))?;

        let hour = match caps.get(2) {
            Some(m) => Some(
                m.as_str()
                    .parse::<u8>()
                    .map_err(|_| CellKeyError::Malformed(value.to_string()))?,
            ),
            None => None,
        };

        Ok(Self { date, hour })
    }
}

#[cfg(test)]
mod tests {
    use super::{CellKey, CellKeyError};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn text_form_matches_grid_identifiers() {
        assert_eq!(CellKey::slot(date(2026, 3, 5), 9).to_string(), "2026-03-05-9");
        assert_eq!(CellKey::slot(date(2026, 3, 5), 14).to_string(), "2026-03-05-14");
        assert_eq!(CellKey::day(date(2026, 3, 5)).to_string(), "2026-03-05");
    }

    #[test]
    fn parses_slot_and_day_identifiers() {
        assert_eq!(
            "2026-03-05-14".parse::<CellKey>().unwrap(),
            CellKey::slot(date(2026, 3, 5), 14)
        );
        assert_eq!(
            "2026-03-05".parse::<CellKey>().unwrap(),
            CellKey::day(date(2026, 3, 5))
        );
    }

    #[test]
    fn parse_keeps_out_of_range_hours_for_later_validation() {
        let key = "2026-03-05-23".parse::<CellKey>().unwrap();
        assert_eq!(key.hour, Some(23));
    }

    #[test]
    fn rejects_malformed_identifiers() {
        assert_eq!(
            "2026-03-05-".parse::<CellKey>().unwrap_err(),
            CellKeyError::Malformed("2026-03-05-".to_string())
        );
        assert!(matches!(
            "draggable-42".parse::<CellKey>(),
            Err(CellKeyError::Malformed(_))
        ));
        assert_eq!(
            "2026-02-30-9".parse::<CellKey>().unwrap_err(),
            CellKeyError::InvalidDate("2026-02-30-9".to_string())
        );
    }
}
