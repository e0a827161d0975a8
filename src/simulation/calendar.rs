//! Simulation horizon and seasonality.

use chrono::{Datelike, Days, NaiveDate};

/// Inclusive range of simulated days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Horizon {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Horizon {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Every day from `start` through `end`.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }

    /// Every 7th day, beginning with `start`.
    pub fn weeks(&self) -> impl Iterator<Item = NaiveDate> {
        self.days().step_by(7)
    }

    pub fn len(&self) -> usize {
        if self.end < self.start {
            0
        } else {
            (self.end - self.start).num_days() as usize + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Demand multiplier for `date`: holiday and summer uplift for seasonal lines.
pub fn seasonal_factor(date: NaiveDate, is_seasonal: bool) -> f64 {
    if !is_seasonal {
        return 1.0;
    }
    match date.month() {
        11 | 12 => 1.5,
        6..=8 => 1.3,
        _ => 1.0,
    }
}

/// `date + days`, saturating at the maximum representable date.
pub fn add_days(date: NaiveDate, days: u32) -> NaiveDate {
    date.checked_add_days(Days::new(u64::from(days)))
        .unwrap_or(NaiveDate::MAX)
}
