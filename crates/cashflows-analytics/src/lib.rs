//! # Cashflows Analytics
//!
//! Return metrics over cash flow ledgers.
//!
//! This crate derives the standard investment-performance figures from
//! a [`cashflows_core::Ledger`]:
//!
//! - **NPV**: Net present value at a given discount rate, under either
//!   time convention
//! - **IRR / XIRR**: Internal rate of return - uniform periods for
//!   ordinal ledgers, actual day-count discounting for calendar ledgers
//! - **Ratios**: Profitability ratio and cash-on-cash multiple from the
//!   type-summed totals
//!
//! ## Example
//!
//! ```rust
//! use cashflows_analytics::{profitability_ratio, IrrOptions, ReturnEngine};
//! use cashflows_core::{Currency, Ledger, TimeConvention, TimePoint};
//! use rust_decimal_macros::dec;
//!
//! let mut ledger = Ledger::new(TimeConvention::Ordinal, Currency::new("MXN"));
//! ledger.insert_outflow(dec!(100), TimePoint::ordinal(0)).unwrap();
//! ledger.insert_inflow(dec!(50), TimePoint::ordinal(2)).unwrap();
//! ledger.insert_inflow(dec!(80), TimePoint::ordinal(4)).unwrap();
//! ledger.insert_outflow(dec!(10), TimePoint::ordinal(4)).unwrap();
//!
//! let engine = ReturnEngine::new();
//! let irr = engine.irr(&ledger, &IrrOptions::default()).unwrap();
//! assert!((irr - 5.981718).abs() < 1e-9);
//!
//! let ratio = profitability_ratio(&ledger).unwrap();
//! assert!((ratio - 130.0 / 110.0).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod ratios;
pub mod returns;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{AnalyticsError, AnalyticsResult};
    pub use crate::ratios::{cash_on_cash_multiple, profitability_ratio};
    pub use crate::returns::{IrrOptions, ReturnEngine};
}

pub use error::{AnalyticsError, AnalyticsResult};
pub use ratios::{cash_on_cash_multiple, profitability_ratio};
pub use returns::{IrrOptions, ReturnEngine};
