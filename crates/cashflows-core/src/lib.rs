//! # Cashflows Core
//!
//! Core types and the flow ledger for the Cashflows return-analytics
//! library.
//!
//! This crate provides the foundational building blocks used throughout
//! Cashflows:
//!
//! - **Types**: Domain-specific types like `Date`, `Currency`,
//!   `TimePoint`, and `Flow`
//! - **Ledger**: The time-indexed, merge-on-insert flow collection
//! - **Day Count Conventions**: Year-fraction calculations for
//!   date-based discounting
//!
//! ## Design Philosophy
//!
//! - **Type Safety**: The time convention is a sum type, so mixing
//!   ordinal and calendar axes is unrepresentable inside one ledger
//! - **Explicit Over Implicit**: Validation failures are typed errors
//!   raised at the boundary, never silent coercions
//!
//! ## Example
//!
//! ```rust
//! use cashflows_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let mut ledger = Ledger::new(TimeConvention::Ordinal, Currency::new("MXN"));
//! ledger.insert_outflow(dec!(100), TimePoint::ordinal(0)).unwrap();
//! ledger.insert_inflow(dec!(130), TimePoint::ordinal(4)).unwrap();
//! assert_eq!(ledger.len(), 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::uninlined_format_args)]

pub mod daycounts;
pub mod error;
pub mod ledger;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::daycounts::{DayCount, DayCountConvention};
    pub use crate::error::{CashflowError, CashflowResult};
    pub use crate::ledger::Ledger;
    pub use crate::types::{
        Currency, Date, Direction, Flow, TimeConvention, TimePoint, TruncationPolicy,
    };
}

// Re-export commonly used types at crate root
pub use error::{CashflowError, CashflowResult};
pub use ledger::Ledger;
pub use types::{Currency, Date, Direction, Flow, TimeConvention, TimePoint, TruncationPolicy};
