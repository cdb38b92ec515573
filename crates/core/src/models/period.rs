use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// A calendar month: the unit every analysis is computed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawMonthPeriod")]
pub struct MonthPeriod {
    // Field order matters for the derived Ord: year first.
    year: i32,
    month: u32,
}

#[derive(Deserialize)]
struct RawMonthPeriod {
    year: i32,
    month: u32,
}

impl TryFrom<RawMonthPeriod> for MonthPeriod {
    type Error = CoreError;

    fn try_from(raw: RawMonthPeriod) -> Result<Self, Self::Error> {
        Self::new(raw.month, raw.year)
    }
}

impl MonthPeriod {
    /// Build a period, rejecting months outside 1..=12.
    pub fn new(month: u32, year: i32) -> Result<Self, CoreError> {
        if !(1..=12).contains(&month) {
            return Err(CoreError::ValidationError(format!(
                "Month must be between 1 and 12, got {month}"
            )));
        }
        Ok(Self { year, month })
    }

    /// The month containing `date`.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The month containing today's UTC date.
    pub fn current() -> Self {
        Self::from_date(chrono::Utc::now().date_naive())
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Move by `delta` whole months, crossing year boundaries as needed.
    pub fn shift(&self, delta: i32) -> Self {
        let index = self.year as i64 * 12 + (self.month as i64 - 1) + delta as i64;
        Self {
            year: index.div_euclid(12) as i32,
            month: index.rem_euclid(12) as u32 + 1,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// First day of the month.
    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }
}

impl Default for MonthPeriod {
    fn default() -> Self {
        Self::current()
    }
}

impl std::fmt::Display for MonthPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
