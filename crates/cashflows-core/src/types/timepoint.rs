//! Time point type spanning the two ledger time conventions.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CashflowError, CashflowResult};

use super::Date;

/// The time axis a ledger (and every flow in it) lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeConvention {
    /// Integer periods counted from an origin (month 0, 1, 2, ...).
    Ordinal,
    /// Calendar dates with irregular spacing.
    Calendar,
}

impl fmt::Display for TimeConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TimeConvention::Ordinal => "ordinal",
            TimeConvention::Calendar => "calendar",
        };
        write!(f, "{name}")
    }
}

/// Policy for ordinal time values that arrive as non-integral numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TruncationPolicy {
    /// Fail with `InvalidTime` on a non-integral value.
    #[default]
    Reject,
    /// Truncate toward zero and emit a warning-level log line.
    Truncate,
}

/// A single point on either the ordinal or the calendar time axis.
///
/// A time point's convention is fixed at construction. Points order and
/// compare by value; comparing across conventions through the checked
/// methods is an `IncompatibleTime` error.
///
/// The derived `Ord` orders all ordinal points before all calendar
/// points; it exists so that a (necessarily single-convention) ledger
/// can key its entries, and is never observable across conventions
/// through ledger operations.
///
/// # Example
///
/// ```rust
/// use cashflows_core::types::TimePoint;
///
/// let t0 = TimePoint::ordinal(0);
/// let t4 = TimePoint::ordinal(4);
/// assert!(t0.is_before(&t4).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TimePoint {
    /// An integer period on the ordinal axis.
    Ordinal(u32),
    /// A calendar date.
    Calendar(Date),
}

impl TimePoint {
    /// Creates an ordinal time point at the given period.
    #[must_use]
    pub fn ordinal(period: u32) -> Self {
        TimePoint::Ordinal(period)
    }

    /// Creates an ordinal time point from a possibly non-integral value.
    ///
    /// Negative values are rejected under either policy. A non-integral
    /// value is rejected under [`TruncationPolicy::Reject`] and truncated
    /// toward zero (with a warning logged) under
    /// [`TruncationPolicy::Truncate`].
    ///
    /// # Errors
    ///
    /// Returns `CashflowError::InvalidTime` on a negative, non-finite,
    /// or (under `Reject`) non-integral value.
    pub fn from_ordinal_value(value: f64, policy: TruncationPolicy) -> CashflowResult<Self> {
        if !value.is_finite() || value < 0.0 || value > f64::from(u32::MAX) {
            return Err(CashflowError::invalid_time(format!(
                "ordinal time must be a non-negative integer, got {value}"
            )));
        }
        if value.fract() != 0.0 {
            match policy {
                TruncationPolicy::Reject => {
                    return Err(CashflowError::invalid_time(format!(
                        "ordinal time must be an integer, got {value}"
                    )));
                }
                TruncationPolicy::Truncate => {
                    log::warn!("truncating non-integral ordinal time {value} to {}", value.trunc());
                }
            }
        }
        Ok(TimePoint::Ordinal(value.trunc() as u32))
    }

    /// Creates a calendar time point at the given date.
    #[must_use]
    pub fn calendar(date: Date) -> Self {
        TimePoint::Calendar(date)
    }

    /// Creates a calendar time point from an ISO 8601 string (YYYY-MM-DD).
    ///
    /// # Errors
    ///
    /// Returns `CashflowError::InvalidTime` if the string is not a valid date.
    pub fn parse_calendar(s: &str) -> CashflowResult<Self> {
        Date::parse(s).map(TimePoint::Calendar)
    }

    /// Returns the convention this time point lives on.
    #[must_use]
    pub fn convention(&self) -> TimeConvention {
        match self {
            TimePoint::Ordinal(_) => TimeConvention::Ordinal,
            TimePoint::Calendar(_) => TimeConvention::Calendar,
        }
    }

    /// Checked equality: true iff both points share a convention and a value.
    ///
    /// # Errors
    ///
    /// Returns `CashflowError::IncompatibleTime` when the conventions differ.
    pub fn same_moment(&self, other: &TimePoint) -> CashflowResult<bool> {
        self.check_convention(other)?;
        Ok(self == other)
    }

    /// Checked ordering: true iff `self` strictly precedes `other`.
    ///
    /// # Errors
    ///
    /// Returns `CashflowError::IncompatibleTime` when the conventions differ.
    pub fn is_before(&self, other: &TimePoint) -> CashflowResult<bool> {
        self.check_convention(other)?;
        Ok(self < other)
    }

    fn check_convention(&self, other: &TimePoint) -> CashflowResult<()> {
        if self.convention() != other.convention() {
            return Err(CashflowError::incompatible_time(format!(
                "cannot compare {} and {} time points",
                self.convention(),
                other.convention()
            )));
        }
        Ok(())
    }
}

impl From<Date> for TimePoint {
    fn from(date: Date) -> Self {
        TimePoint::Calendar(date)
    }
}

impl fmt::Display for TimePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimePoint::Ordinal(period) => write!(f, "{period}"),
            TimePoint::Calendar(date) => write!(f, "{date}"),
        }
    }
}
