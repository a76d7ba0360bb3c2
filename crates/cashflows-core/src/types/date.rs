//! Date type for calendar-convention ledgers.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CashflowError, CashflowResult};

/// A calendar date for cash flow timestamps.
///
/// This is a newtype wrapper around `chrono::NaiveDate` providing
/// the construction and day-arithmetic operations the ledger needs
/// and ensuring type safety.
///
/// # Example
///
/// ```rust
/// use cashflows_core::types::Date;
///
/// let start = Date::parse("2018-01-01").unwrap();
/// let end = Date::from_ymd(2020, 1, 1).unwrap();
/// assert_eq!(start.days_between(&end), 730);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `CashflowError::InvalidTime` if the date is invalid.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> CashflowResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| CashflowError::invalid_time(format!("{year}-{month:02}-{day:02}")))
    }

    /// Creates a date from an ISO 8601 string (YYYY-MM-DD).
    ///
    /// # Errors
    ///
    /// Returns `CashflowError::InvalidTime` if the string is not a valid date.
    pub fn parse(s: &str) -> CashflowResult<Self> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Date)
            .map_err(|_| CashflowError::invalid_time(format!("Cannot parse: {s}")))
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Calculates the number of calendar days between two dates.
    ///
    /// Positive when `other` is later than `self`.
    #[must_use]
    pub fn days_between(&self, other: &Date) -> i64 {
        (other.0 - self.0).num_days()
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}
