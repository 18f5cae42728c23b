//! Calendar clock abstraction.
//!
//! Core never reads the wall clock directly; "today" is injected so that
//! defaults and navigation stay deterministic under test.

use chrono::{Local, NaiveDate};

/// Source of the current calendar day.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Local wall-clock date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}
