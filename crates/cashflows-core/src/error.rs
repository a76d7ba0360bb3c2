//! Error types for the Cashflows core library.
//!
//! This module defines the error types raised at the ledger boundary,
//! providing structured error handling with context.

use rust_decimal::Decimal;
use thiserror::Error;

/// A specialized Result type for Cashflows core operations.
pub type CashflowResult<T> = Result<T, CashflowError>;

/// The main error type for Cashflows core operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CashflowError {
    /// Unparseable or wrong-typed time value.
    #[error("Invalid time value: {message}")]
    InvalidTime {
        /// Description of the time error.
        message: String,
    },

    /// Ordinal and calendar time points mixed within one comparison.
    #[error("Incompatible time conventions: {reason}")]
    IncompatibleTime {
        /// Description of the convention clash.
        reason: String,
    },

    /// Flow merge attempted across differing time or currency.
    #[error("Incompatible flows: {reason}")]
    IncompatibleFlow {
        /// Description of what differs between the flows.
        reason: String,
    },

    /// A flow does not match the ledger's time convention or currency.
    #[error("Convention mismatch: {reason}")]
    ConventionMismatch {
        /// Description of the mismatch.
        reason: String,
    },

    /// Negative magnitude supplied to a directional insert.
    #[error("Invalid magnitude: {value} - magnitude must be non-negative")]
    InvalidMagnitude {
        /// The offending magnitude.
        value: Decimal,
    },

    /// Non-positive annualization factor supplied at ledger construction.
    #[error("Invalid annualization factor: {value} - factor must be positive")]
    InvalidAnnualization {
        /// The offending factor.
        value: Decimal,
    },
}

impl CashflowError {
    /// Creates an invalid time error.
    #[must_use]
    pub fn invalid_time(message: impl Into<String>) -> Self {
        Self::InvalidTime {
            message: message.into(),
        }
    }

    /// Creates an incompatible time error.
    #[must_use]
    pub fn incompatible_time(reason: impl Into<String>) -> Self {
        Self::IncompatibleTime {
            reason: reason.into(),
        }
    }

    /// Creates an incompatible flow error.
    #[must_use]
    pub fn incompatible_flow(reason: impl Into<String>) -> Self {
        Self::IncompatibleFlow {
            reason: reason.into(),
        }
    }

    /// Creates a convention mismatch error.
    #[must_use]
    pub fn convention_mismatch(reason: impl Into<String>) -> Self {
        Self::ConventionMismatch {
            reason: reason.into(),
        }
    }
}
