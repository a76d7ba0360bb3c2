//! Day count conventions for calendar-convention discounting.
//!
//! A day count convention converts the elapsed days between two dates
//! into a fraction of a year, which is the exponent the calendar NPV
//! and XIRR paths discount by.
//!
//! # Supported Conventions
//!
//! - [`Act360`]: Actual/360 - Money market convention
//! - [`Act365Fixed`]: Actual/365 Fixed - the default for date-based flows
//!
//! # Usage
//!
//! ```rust
//! use cashflows_core::daycounts::{Act365Fixed, DayCount};
//! use cashflows_core::types::Date;
//!
//! let dc = Act365Fixed;
//! let start = Date::from_ymd(2018, 1, 1).unwrap();
//! let end = Date::from_ymd(2020, 1, 1).unwrap();
//!
//! assert_eq!(dc.day_count(start, end), 730);
//! ```

mod act360;
mod act365;

pub use act360::Act360;
pub use act365::Act365Fixed;

use rust_decimal::Decimal;

use crate::types::Date;

/// Trait for day count conventions.
///
/// Implementations provide the year fraction calculation between two
/// dates according to a fixed year basis.
pub trait DayCount: Send + Sync {
    /// Returns the name of the day count convention.
    fn name(&self) -> &'static str;

    /// Calculates the year fraction between two dates.
    ///
    /// Can be negative if `end` precedes `start`.
    fn year_fraction(&self, start: Date, end: Date) -> Decimal;

    /// Calculates the day count between two dates.
    fn day_count(&self, start: Date, end: Date) -> i64;
}

/// Enumeration of the supported day count conventions.
///
/// Provides a convenient way to select a convention at runtime and
/// convert it to a boxed trait object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DayCountConvention {
    /// Actual/360 - money market basis.
    Act360,
    /// Actual/365 Fixed - the default basis for date-based flows.
    #[default]
    Act365Fixed,
}

impl DayCountConvention {
    /// Creates a boxed day count implementation.
    #[must_use]
    pub fn to_day_count(&self) -> Box<dyn DayCount> {
        match self {
            DayCountConvention::Act360 => Box::new(Act360),
            DayCountConvention::Act365Fixed => Box::new(Act365Fixed),
        }
    }

    /// Returns the convention name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            DayCountConvention::Act360 => "ACT/360",
            DayCountConvention::Act365Fixed => "ACT/365F",
        }
    }

    /// Returns the year basis (denominator) in days.
    #[must_use]
    pub const fn basis(&self) -> u32 {
        match self {
            DayCountConvention::Act360 => 360,
            DayCountConvention::Act365Fixed => 365,
        }
    }
}

impl std::fmt::Display for DayCountConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for DayCountConvention {
    type Err = DayCountParseError;

    /// Parses a day count convention from a string.
    ///
    /// Accepts the convention names ("ACT/360", "ACT/365F") and common
    /// aliases, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_uppercase();
        match normalized.trim() {
            "ACT/360" | "ACTUAL/360" | "ACT360" | "360" => Ok(DayCountConvention::Act360),
            "ACT/365" | "ACT/365F" | "ACT/365 FIXED" | "ACTUAL/365" | "ACT365" | "365" => {
                Ok(DayCountConvention::Act365Fixed)
            }
            _ => Err(DayCountParseError(s.to_string())),
        }
    }
}

/// Error type for parsing day count conventions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCountParseError(pub String);

impl std::fmt::Display for DayCountParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown day count convention: '{}'", self.0)
    }
}

impl std::error::Error for DayCountParseError {}
