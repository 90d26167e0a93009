//! Calendar month keys and backwards iteration.

use std::fmt;

use chrono::{Datelike, Local};

/// A calendar year-month, e.g. 2019-02.
///
/// Ordering is chronological (year first, then month), which makes the
/// inclusive floor check of the crawl loop a plain comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    /// Create a month key. The month must be in 1..=12.
    pub fn new(year: i32, month: u32) -> Self {
        debug_assert!((1..=12).contains(&month));
        Self { year, month }
    }

    /// The current calendar month in local time.
    pub fn current() -> Self {
        let now = Local::now();
        Self::new(now.year(), now.month())
    }

    /// Fixed-width `yyyymm` key used in calendar page URLs.
    pub fn key(&self) -> String {
        format!("{:04}{:02}", self.year, self.month)
    }

    /// The previous calendar month, with year rollover.
    pub fn pred(&self) -> Self {
        if self.month == 1 {
            Self::new(self.year - 1, 12)
        } else {
            Self::new(self.year, self.month - 1)
        }
    }

    /// Iterate from this month backwards down to `floor`, inclusive.
    pub fn descend_to(self, floor: MonthKey) -> MonthRange {
        MonthRange {
            current: self,
            floor,
        }
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Descending inclusive iterator over calendar months.
pub struct MonthRange {
    current: MonthKey,
    floor: MonthKey,
}

impl Iterator for MonthRange {
    type Item = MonthKey;

    fn next(&mut self) -> Option<MonthKey> {
        if self.current < self.floor {
            return None;
        }

        let month = self.current;
        self.current = self.current.pred();
        Some(month)
    }
}
