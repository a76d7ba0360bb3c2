//! Undiscounted flow ratios: profitability and cash-on-cash.
//!
//! Both metrics divide the type-summed totals of a ledger. Magnitudes
//! are stored non-negative, so the outflow total and its absolute value
//! coincide; the two metrics differ only in the guard they inherit from
//! their reporting traditions and always agree in value.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use cashflows_core::{Direction, Ledger};

use crate::error::{AnalyticsError, AnalyticsResult};

/// Total inflow divided by total outflow, undiscounted.
///
/// Returns `NaN` - a defined sentinel, not an error - when the ledger
/// has no outflow basis to measure against.
///
/// # Errors
///
/// Returns `AnalyticsError::EmptyLedger` if the ledger has no entries.
///
/// # Example
///
/// ```rust
/// use cashflows_analytics::profitability_ratio;
/// use cashflows_core::{Currency, Ledger, TimeConvention, TimePoint};
/// use rust_decimal_macros::dec;
///
/// let mut ledger = Ledger::new(TimeConvention::Ordinal, Currency::new("MXN"));
/// ledger.insert_outflow(dec!(110), TimePoint::ordinal(0)).unwrap();
/// ledger.insert_inflow(dec!(130), TimePoint::ordinal(4)).unwrap();
///
/// let ratio = profitability_ratio(&ledger).unwrap();
/// assert!((ratio - 130.0 / 110.0).abs() < 1e-12);
/// ```
pub fn profitability_ratio(ledger: &Ledger) -> AnalyticsResult<f64> {
    if ledger.is_empty() {
        return Err(AnalyticsError::EmptyLedger);
    }
    let inflow = ledger.total(Direction::Inflow);
    let outflow = ledger.total(Direction::Outflow);
    if outflow > Decimal::ZERO {
        Ok((inflow / outflow).to_f64().unwrap_or(f64::NAN))
    } else {
        Ok(f64::NAN)
    }
}

/// Total inflow divided by the absolute total outflow, undiscounted.
///
/// Identical totals to [`profitability_ratio`]; the absolute value on
/// the denominator is inherited from the signed-series formulation and
/// is a no-op over non-negative magnitudes.
///
/// # Errors
///
/// Returns `AnalyticsError::EmptyLedger` if the ledger has no entries.
pub fn cash_on_cash_multiple(ledger: &Ledger) -> AnalyticsResult<f64> {
    if ledger.is_empty() {
        return Err(AnalyticsError::EmptyLedger);
    }
    let inflow = ledger.total(Direction::Inflow);
    let outflow = ledger.total(Direction::Outflow).abs();
    if outflow.is_zero() {
        return Ok(f64::NAN);
    }
    Ok((inflow / outflow).to_f64().unwrap_or(f64::NAN))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use cashflows_core::{Currency, TimeConvention, TimePoint};
    use rust_decimal_macros::dec;

    fn reference_ledger() -> Ledger {
        let mut ledger = Ledger::new(TimeConvention::Ordinal, Currency::new("MXN"));
        ledger.insert_outflow(dec!(100), TimePoint::ordinal(0)).unwrap();
        ledger.insert_inflow(dec!(50), TimePoint::ordinal(2)).unwrap();
        ledger.insert_inflow(dec!(80), TimePoint::ordinal(4)).unwrap();
        ledger.insert_outflow(dec!(10), TimePoint::ordinal(4)).unwrap();
        ledger
    }

    #[test]
    fn test_profitability_ratio() {
        let ratio = profitability_ratio(&reference_ledger()).unwrap();
        assert_relative_eq!(ratio, 130.0 / 110.0, epsilon = 1e-12);
    }

    #[test]
    fn test_cash_on_cash_multiple() {
        let multiple = cash_on_cash_multiple(&reference_ledger()).unwrap();
        assert_relative_eq!(multiple, 130.0 / 110.0, epsilon = 1e-12);
    }

    #[test]
    fn test_both_metrics_use_identical_totals() {
        let ledger = reference_ledger();
        let ratio = profitability_ratio(&ledger).unwrap();
        let multiple = cash_on_cash_multiple(&ledger).unwrap();
        assert_relative_eq!(ratio, multiple, epsilon = 0.0);
    }

    #[test]
    fn test_no_outflow_basis_is_nan() {
        let mut ledger = Ledger::new(TimeConvention::Ordinal, Currency::new("MXN"));
        ledger.insert_inflow(dec!(50), TimePoint::ordinal(2)).unwrap();

        assert!(profitability_ratio(&ledger).unwrap().is_nan());
        assert!(cash_on_cash_multiple(&ledger).unwrap().is_nan());
    }

    #[test]
    fn test_empty_ledger_rejected() {
        let empty = Ledger::new(TimeConvention::Ordinal, Currency::new("MXN"));
        assert_eq!(profitability_ratio(&empty), Err(AnalyticsError::EmptyLedger));
        assert_eq!(
            cash_on_cash_multiple(&empty),
            Err(AnalyticsError::EmptyLedger)
        );
    }
}
