//! Net present value and internal rate of return over a ledger.
//!
//! The engine projects a ledger into a discount series - (time, amount)
//! pairs in `f64` - and evaluates or inverts the present-value sum over
//! it. Under the ordinal convention time is the period index over the
//! dense zero-filled series; under the calendar convention it is the
//! day-count year fraction since the first flow.

use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use cashflows_core::daycounts::DayCountConvention;
use cashflows_core::{CashflowError, Date, Ledger, TimeConvention, TimePoint};
use cashflows_math::solvers::{brent, newton_raphson, SolverConfig};

use crate::error::{AnalyticsError, AnalyticsResult};

/// Lower end of the fallback bracket; the discount factor is singular
/// at exactly -1.
const BRACKET_LO: f64 = -1.0 + 1e-9;

/// Upper end of the fallback bracket (a 10000% rate).
const BRACKET_HI: f64 = 100.0;

/// Presentation options for an IRR figure.
///
/// Defaults match the conventional reporting form: annualized,
/// percentage, six decimals.
///
/// # Example
///
/// ```rust
/// use cashflows_analytics::IrrOptions;
///
/// let raw = IrrOptions::default().with_annualize(false).with_percentage(false);
/// assert!(!raw.percentage);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IrrOptions {
    /// Multiply the per-period rate by the ledger's annualization
    /// factor (ordinal convention only; calendar rates are already
    /// annual).
    pub annualize: bool,
    /// Scale the rate by 100 into percentage form.
    pub percentage: bool,
    /// Decimal places the result is rounded to.
    pub decimals: u32,
}

impl Default for IrrOptions {
    fn default() -> Self {
        Self {
            annualize: true,
            percentage: true,
            decimals: 6,
        }
    }
}

impl IrrOptions {
    /// Sets whether the rate is annualized.
    #[must_use]
    pub fn with_annualize(mut self, annualize: bool) -> Self {
        self.annualize = annualize;
        self
    }

    /// Sets whether the rate is reported as a percentage.
    #[must_use]
    pub fn with_percentage(mut self, percentage: bool) -> Self {
        self.percentage = percentage;
        self
    }

    /// Sets the number of decimal places.
    #[must_use]
    pub fn with_decimals(mut self, decimals: u32) -> Self {
        self.decimals = decimals;
        self
    }
}

/// Net present value and internal rate of return engine.
///
/// Holds the solver configuration and the day count convention used on
/// the calendar path. The IRR solve is two-stage: Newton-Raphson from
/// rate zero with the analytic NPV derivative, falling back to Brent's
/// method over `(-1, 100)` when the local search diverges.
///
/// # Example
///
/// ```rust
/// use cashflows_analytics::{IrrOptions, ReturnEngine};
/// use cashflows_core::{Currency, Ledger, TimeConvention, TimePoint};
/// use rust_decimal_macros::dec;
///
/// let mut ledger = Ledger::new(TimeConvention::Ordinal, Currency::new("MXN"));
/// ledger.insert_outflow(dec!(100), TimePoint::ordinal(0)).unwrap();
/// ledger.insert_inflow(dec!(110), TimePoint::ordinal(1)).unwrap();
///
/// let engine = ReturnEngine::new();
/// let irr = engine.irr(&ledger, &IrrOptions::default()).unwrap();
/// assert!((irr - 10.0).abs() < 1e-9); // 10%
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReturnEngine {
    /// Solver configuration shared by both stages.
    config: SolverConfig,
    /// Day count convention for the calendar path.
    day_count: DayCountConvention,
}

impl ReturnEngine {
    /// Creates an engine with default settings.
    ///
    /// Default tolerance: 1e-10. Default max iterations: 100.
    /// Default day count: ACT/365F.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the day count convention for the calendar path.
    #[must_use]
    pub fn with_day_count(mut self, day_count: DayCountConvention) -> Self {
        self.day_count = day_count;
        self
    }

    /// Sets the solver tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.config = self.config.with_tolerance(tolerance);
        self
    }

    /// Sets the solver iteration cap.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.config = self.config.with_max_iterations(max_iterations);
        self
    }

    /// Computes the net present value of the ledger at the given rate.
    ///
    /// Ordinal convention: the dense zero-filled series discounted by
    /// period index. Calendar convention: each flow discounted by its
    /// day-count year fraction since the first flow.
    ///
    /// # Errors
    ///
    /// Returns `AnalyticsError::EmptyLedger` if the ledger has no
    /// entries.
    pub fn npv(&self, ledger: &Ledger, rate: f64) -> AnalyticsResult<f64> {
        let series = self.discount_series(ledger)?;
        Ok(present_value(&series, rate))
    }

    /// Solves for the internal rate of return of the ledger.
    ///
    /// The raw per-period (ordinal) or annual (calendar) rate is
    /// post-processed per `options`: annualization (ordinal only),
    /// percentage scaling, rounding.
    ///
    /// # Errors
    ///
    /// Returns `AnalyticsError::EmptyLedger` if the ledger has no
    /// entries, or `AnalyticsError::NoConvergence` if neither solver
    /// stage finds a root - in particular when every flow lies on one
    /// side and the NPV never crosses zero.
    pub fn irr(&self, ledger: &Ledger, options: &IrrOptions) -> AnalyticsResult<f64> {
        let series = self.discount_series(ledger)?;
        let objective = |rate: f64| present_value(&series, rate);
        let derivative = |rate: f64| present_value_derivative(&series, rate);

        // A one-sided stream has an NPV that only approaches zero
        // asymptotically; Newton can meet the residual test on the
        // asymptote far outside any meaningful rate. Only a root inside
        // the bracket counts, everything else goes to the bracketed
        // stage, which reports the missing sign change.
        let solved = match newton_raphson(&objective, &derivative, 0.0, &self.config) {
            Ok(result) if result.root > BRACKET_LO && result.root < BRACKET_HI => result,
            stage_one => {
                log::debug!("local rate search unusable ({stage_one:?}); trying bracketed stage");
                brent(&objective, BRACKET_LO, BRACKET_HI, &self.config)?
            }
        };

        let mut rate = solved.root;
        if options.annualize && ledger.convention() == TimeConvention::Ordinal {
            rate *= ledger.annualization().to_f64().unwrap_or(1.0);
        }
        if options.percentage {
            rate *= 100.0;
        }
        Ok(round_to(rate, options.decimals))
    }

    /// Projects the ledger into (time, amount) pairs for discounting.
    fn discount_series(&self, ledger: &Ledger) -> AnalyticsResult<Vec<(f64, f64)>> {
        if ledger.is_empty() {
            return Err(AnalyticsError::EmptyLedger);
        }
        match ledger.convention() {
            TimeConvention::Ordinal => {
                let series = ledger.dense_series().map_err(AnalyticsError::from)?;
                Ok(series
                    .iter()
                    .enumerate()
                    .map(|(period, value)| (period as f64, value.to_f64().unwrap_or(0.0)))
                    .collect())
            }
            TimeConvention::Calendar => {
                let day_count = self.day_count.to_day_count();
                let flows = ledger.sorted_flows();
                let first = calendar_date(flows[0].time())?;
                let mut series = Vec::with_capacity(flows.len());
                for flow in flows {
                    let date = calendar_date(flow.time())?;
                    let years = day_count.year_fraction(first, date).to_f64().unwrap_or(0.0);
                    let amount = flow.signed_value().to_f64().unwrap_or(0.0);
                    series.push((years, amount));
                }
                Ok(series)
            }
        }
    }
}

/// Extracts the date from a calendar time point.
///
/// A calendar ledger only holds calendar points; an ordinal point here
/// means the ledger invariant was bypassed.
fn calendar_date(time: TimePoint) -> AnalyticsResult<Date> {
    match time {
        TimePoint::Calendar(date) => Ok(date),
        TimePoint::Ordinal(_) => Err(AnalyticsError::from(
            CashflowError::convention_mismatch("calendar ledger held an ordinal time point"),
        )),
    }
}

/// Present value of a discount series at the given rate.
fn present_value(series: &[(f64, f64)], rate: f64) -> f64 {
    series
        .iter()
        .map(|&(time, amount)| amount * (1.0 + rate).powf(-time))
        .sum()
}

/// Derivative of the present value with respect to the rate.
fn present_value_derivative(series: &[(f64, f64)], rate: f64) -> f64 {
    series
        .iter()
        .map(|&(time, amount)| -time * amount * (1.0 + rate).powf(-time - 1.0))
        .sum()
}

/// Rounds to the given number of decimal places.
fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
