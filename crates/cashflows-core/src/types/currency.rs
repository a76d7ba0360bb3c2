//! Currency tag type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque currency tag.
///
/// The ledger compares currency tags for equality and nothing else;
/// no code-list validation is performed (that concern belongs to a
/// caller-side validator). Tags are compared exactly as given, so
/// `"usd"` and `"USD"` are distinct.
///
/// # Example
///
/// ```rust
/// use cashflows_core::types::Currency;
///
/// let mxn = Currency::new("MXN");
/// assert_eq!(mxn.code(), "MXN");
/// assert_ne!(mxn, Currency::new("USD"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Currency(String);

impl Currency {
    /// Creates a currency tag from any string-like value.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Currency(code.into())
    }

    /// Returns the tag as a string slice.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Currency {
    fn from(code: &str) -> Self {
        Currency::new(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_is_exact() {
        assert_eq!(Currency::new("MXN"), Currency::new("MXN"));
        assert_ne!(Currency::new("MXN"), Currency::new("mxn"));
    }

    #[test]
    fn test_display() {
        assert_eq!(Currency::new("USD").to_string(), "USD");
    }
}
