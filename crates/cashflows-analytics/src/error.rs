//! Error types for return-metric computations.

use thiserror::Error;

use cashflows_core::CashflowError;
use cashflows_math::MathError;

/// A specialized Result type for analytics operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

/// Errors that can occur while computing return metrics.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalyticsError {
    /// Metric requested on a ledger with no entries.
    #[error("No flows registered: cannot compute a metric on an empty ledger")]
    EmptyLedger,

    /// The root-finder exceeded its iteration budget or found no sign
    /// change in its bracket.
    #[error("Rate solve did not converge: {reason}")]
    NoConvergence {
        /// What the solver reported.
        reason: String,
    },

    /// A ledger-level failure surfaced through a metric call.
    #[error(transparent)]
    Core(#[from] CashflowError),
}

impl AnalyticsError {
    /// Creates a no-convergence error.
    #[must_use]
    pub fn no_convergence(reason: impl Into<String>) -> Self {
        Self::NoConvergence {
            reason: reason.into(),
        }
    }
}

/// Every math-layer failure surfaces as the NoConvergence taxon: from
/// the caller's view the rate solve failed, whether the cap tripped,
/// the bracket held no sign change, or an iterate degenerated.
impl From<MathError> for AnalyticsError {
    fn from(err: MathError) -> Self {
        AnalyticsError::no_convergence(err.to_string())
    }
}
