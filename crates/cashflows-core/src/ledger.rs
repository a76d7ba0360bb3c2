//! The flow ledger: a keyed, merge-on-insert collection of cash flows.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt;

use rust_decimal::Decimal;

use crate::error::{CashflowError, CashflowResult};
use crate::types::{Currency, Direction, Flow, TimeConvention, TimePoint};

/// A time-indexed ledger of cash movements.
///
/// A ledger fixes one time convention and one currency at construction;
/// every flow it holds matches both. Flows landing on an occupied time
/// point merge (signed values sum), and a slot whose magnitude reaches
/// exactly zero is purged, so the ledger never holds more than one flow
/// per time point and never holds a zero flow.
///
/// Algebraic operations come in pure/mutating pairs: [`Ledger::scaled`]
/// returns a new ledger while [`Ledger::scale`] works in place, and
/// likewise for negation, combination, and difference.
///
/// # Example
///
/// ```rust
/// use cashflows_core::{Currency, Ledger, TimeConvention, TimePoint};
/// use rust_decimal_macros::dec;
///
/// let mut ledger = Ledger::new(TimeConvention::Ordinal, Currency::new("MXN"));
/// ledger.insert_outflow(dec!(100), TimePoint::ordinal(0)).unwrap();
/// ledger.insert_inflow(dec!(50), TimePoint::ordinal(2)).unwrap();
/// ledger.insert_inflow(dec!(80), TimePoint::ordinal(4)).unwrap();
/// ledger.insert_outflow(dec!(10), TimePoint::ordinal(4)).unwrap();
///
/// // the two period-4 flows merged into one net inflow of 70
/// assert_eq!(ledger.len(), 3);
/// assert_eq!(ledger.max_time(), Some(TimePoint::ordinal(4)));
/// ```
#[derive(Debug, Clone)]
pub struct Ledger {
    /// Time convention shared by every contained flow.
    convention: TimeConvention,
    /// Currency shared by every contained flow.
    currency: Currency,
    /// Periods per year; applied when annualizing ordinal rates.
    annualization: Decimal,
    /// One flow per distinct time point.
    entries: BTreeMap<TimePoint, Flow>,
}

impl Ledger {
    /// Creates an empty ledger with an annualization factor of 1.
    #[must_use]
    pub fn new(convention: TimeConvention, currency: Currency) -> Self {
        Self {
            convention,
            currency,
            annualization: Decimal::ONE,
            entries: BTreeMap::new(),
        }
    }

    /// Sets the annualization factor (periods per year).
    ///
    /// The factor converts a per-period ordinal rate into an annual
    /// rate, e.g. 12 when each ordinal period is a month. It has no
    /// effect under the calendar convention.
    ///
    /// # Errors
    ///
    /// Returns `CashflowError::InvalidAnnualization` if `factor` is not
    /// strictly positive.
    pub fn with_annualization(mut self, factor: Decimal) -> CashflowResult<Self> {
        if factor <= Decimal::ZERO {
            return Err(CashflowError::InvalidAnnualization { value: factor });
        }
        self.annualization = factor;
        Ok(self)
    }

    /// Returns the ledger's time convention.
    #[must_use]
    pub fn convention(&self) -> TimeConvention {
        self.convention
    }

    /// Returns the ledger's currency tag.
    ///
    /// Together with [`Ledger::sorted_points`] this is all a chart
    /// renderer needs; the ledger itself renders nothing.
    #[must_use]
    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Returns the annualization factor.
    #[must_use]
    pub fn annualization(&self) -> Decimal {
        self.annualization
    }

    /// Returns the number of distinct time points held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the ledger holds no flows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the greatest time point inserted, or `None` if empty.
    #[must_use]
    pub fn max_time(&self) -> Option<TimePoint> {
        self.entries.keys().next_back().copied()
    }

    /// Inserts a flow, merging on time collision.
    ///
    /// If a flow already occupies the time point, the two merge via
    /// [`Flow::combine`]; a slot whose magnitude reaches exactly zero is
    /// purged. Validation happens before any mutation, so a failed
    /// insert leaves the ledger untouched.
    ///
    /// # Errors
    ///
    /// Returns `CashflowError::ConventionMismatch` if the flow's time
    /// convention or currency differs from the ledger's.
    pub fn insert(&mut self, flow: Flow) -> CashflowResult<()> {
        if flow.time().convention() != self.convention {
            return Err(CashflowError::convention_mismatch(format!(
                "cannot insert a {} flow into a {} ledger",
                flow.time().convention(),
                self.convention
            )));
        }
        if flow.currency() != &self.currency {
            return Err(CashflowError::convention_mismatch(format!(
                "cannot insert a {} flow into a {} ledger",
                flow.currency(),
                self.currency
            )));
        }
        match self.entries.entry(flow.time()) {
            Entry::Occupied(mut slot) => {
                slot.get_mut().combine(&flow)?;
                if slot.get().is_zero() {
                    slot.remove();
                }
            }
            Entry::Vacant(slot) => {
                if !flow.is_zero() {
                    slot.insert(flow);
                }
            }
        }
        Ok(())
    }

    /// Inserts an inflow of the given magnitude at `time`.
    ///
    /// # Errors
    ///
    /// Returns `CashflowError::InvalidMagnitude` if `magnitude` is
    /// negative, or `CashflowError::ConventionMismatch` if `time` does
    /// not match the ledger's convention.
    pub fn insert_inflow(&mut self, magnitude: Decimal, time: TimePoint) -> CashflowResult<()> {
        let flow = Flow::inflow(magnitude, time, self.currency.clone())?;
        self.insert(flow)
    }

    /// Inserts an outflow of the given magnitude at `time`.
    ///
    /// # Errors
    ///
    /// Returns `CashflowError::InvalidMagnitude` if `magnitude` is
    /// negative, or `CashflowError::ConventionMismatch` if `time` does
    /// not match the ledger's convention.
    pub fn insert_outflow(&mut self, magnitude: Decimal, time: TimePoint) -> CashflowResult<()> {
        let flow = Flow::outflow(magnitude, time, self.currency.clone())?;
        self.insert(flow)
    }

    /// Inserts a signed value at `time`, inferring the direction from
    /// the sign (non-negative inflow, negative outflow).
    ///
    /// # Errors
    ///
    /// Returns `CashflowError::ConventionMismatch` if `time` does not
    /// match the ledger's convention.
    pub fn insert_signed(&mut self, value: Decimal, time: TimePoint) -> CashflowResult<()> {
        let flow = Flow::from_signed(value, time, self.currency.clone());
        self.insert(flow)
    }

    /// Returns a copy with every flow value-scaled by `factor`.
    ///
    /// Scaling by a negative factor flips every direction; scaling by
    /// zero empties the ledger (zero flows never persist).
    #[must_use]
    pub fn scaled(&self, factor: Decimal) -> Ledger {
        let mut scaled = self.clone();
        scaled.scale(factor);
        scaled
    }

    /// Value-scales every flow in place.
    pub fn scale(&mut self, factor: Decimal) {
        for flow in self.entries.values_mut() {
            flow.scale(factor);
        }
        self.entries.retain(|_, flow| !flow.is_zero());
    }

    /// Returns a direction-flipped copy; shorthand for scaling by -1.
    #[must_use]
    pub fn negated(&self) -> Ledger {
        self.scaled(Decimal::NEGATIVE_ONE)
    }

    /// Flips every direction in place; shorthand for scaling by -1.
    pub fn negate(&mut self) {
        self.scale(Decimal::NEGATIVE_ONE);
    }

    /// Returns a copy of `self` with every flow of `other` merged in.
    ///
    /// Both ledgers must share a time convention. A currency mismatch is
    /// permitted for compatibility with heterogeneous sources, but the
    /// amounts are netted without conversion under `self`'s currency tag
    /// and the event is logged at warning level.
    ///
    /// # Errors
    ///
    /// Returns `CashflowError::ConventionMismatch` if the time
    /// conventions differ.
    pub fn combined(&self, other: &Ledger) -> CashflowResult<Ledger> {
        if other.convention != self.convention {
            return Err(CashflowError::convention_mismatch(format!(
                "cannot combine a {} ledger with a {} ledger",
                self.convention, other.convention
            )));
        }
        if other.currency != self.currency {
            log::warn!(
                "combining ledgers tagged {} and {}: amounts netted without conversion",
                self.currency,
                other.currency
            );
        }
        let mut combined = self.clone();
        for flow in other.entries.values() {
            combined.insert(Flow::from_signed(
                flow.signed_value(),
                flow.time(),
                self.currency.clone(),
            ))?;
        }
        Ok(combined)
    }

    /// Merges every flow of `other` into `self`.
    ///
    /// The ledger is only modified if the whole combination succeeds.
    ///
    /// # Errors
    ///
    /// Returns `CashflowError::ConventionMismatch` if the time
    /// conventions differ.
    pub fn combine(&mut self, other: &Ledger) -> CashflowResult<()> {
        let combined = self.combined(other)?;
        *self = combined;
        Ok(())
    }

    /// Returns `self` minus `other`: a copy combined with the negation.
    ///
    /// # Errors
    ///
    /// Returns `CashflowError::ConventionMismatch` if the time
    /// conventions differ.
    pub fn difference(&self, other: &Ledger) -> CashflowResult<Ledger> {
        self.combined(&other.negated())
    }

    /// Subtracts every flow of `other` from `self` in place.
    ///
    /// # Errors
    ///
    /// Returns `CashflowError::ConventionMismatch` if the time
    /// conventions differ.
    pub fn subtract(&mut self, other: &Ledger) -> CashflowResult<()> {
        self.combine(&other.negated())
    }

    /// Returns the flows ordered by ascending time point.
    ///
    /// Empty for an empty ledger; metric calls reject emptiness
    /// themselves.
    #[must_use]
    pub fn sorted_flows(&self) -> Vec<&Flow> {
        self.entries.values().collect()
    }

    /// Returns ordered (time, signed value) pairs.
    ///
    /// This is the presentation projection: together with
    /// [`Ledger::currency`] it is sufficient for an external bar-chart
    /// renderer.
    #[must_use]
    pub fn sorted_points(&self) -> Vec<(TimePoint, Decimal)> {
        self.entries
            .iter()
            .map(|(time, flow)| (*time, flow.signed_value()))
            .collect()
    }

    /// Returns the dense zero-filled signed series indexed `0..=max_time`.
    ///
    /// Periods with no recorded flow are explicit zeros; this is the
    /// form the ordinal return metrics consume. Empty for an empty
    /// ledger.
    ///
    /// # Errors
    ///
    /// Returns `CashflowError::ConventionMismatch` under the calendar
    /// convention, where no dense form exists.
    pub fn dense_series(&self) -> CashflowResult<Vec<Decimal>> {
        if self.convention != TimeConvention::Ordinal {
            return Err(CashflowError::convention_mismatch(
                "dense series requires the ordinal convention",
            ));
        }
        let Some(TimePoint::Ordinal(max)) = self.max_time() else {
            return Ok(Vec::new());
        };
        let mut series = vec![Decimal::ZERO; max as usize + 1];
        for (time, flow) in &self.entries {
            if let TimePoint::Ordinal(period) = time {
                series[*period as usize] = flow.signed_value();
            }
        }
        Ok(series)
    }

    /// Sums the magnitudes of all flows with the given direction.
    #[must_use]
    pub fn total(&self, direction: Direction) -> Decimal {
        self.entries
            .values()
            .filter(|flow| flow.direction() == direction)
            .map(Flow::magnitude)
            .sum()
    }

    /// Returns an iterator over the flows in ascending time order.
    pub fn iter(&self) -> impl Iterator<Item = &Flow> {
        self.entries.values()
    }
}

/// Projection-wise equality: two ledgers are equal iff their sorted
/// flows are pairwise equal. The container's annualization factor and
/// currency label do not participate; the flows themselves carry
/// time and currency.
impl PartialEq for Ledger {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a Flow;
    type IntoIter = std::collections::btree_map::Values<'a, TimePoint, Flow>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}

impl fmt::Display for Ledger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{{")?;
        for flow in self.entries.values() {
            writeln!(f, "    {flow}")?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn mxn() -> Currency {
        Currency::new("MXN")
    }

    fn ordinal_ledger() -> Ledger {
        Ledger::new(TimeConvention::Ordinal, mxn())
    }

    /// The reference stream: -100@0, +50@2, +80@4, -10@4.
    fn reference_ledger() -> Ledger {
        let mut ledger = ordinal_ledger();
        ledger.insert_outflow(dec!(100), TimePoint::ordinal(0)).unwrap();
        ledger.insert_inflow(dec!(50), TimePoint::ordinal(2)).unwrap();
        ledger.insert_inflow(dec!(80), TimePoint::ordinal(4)).unwrap();
        ledger.insert_outflow(dec!(10), TimePoint::ordinal(4)).unwrap();
        ledger
    }

    #[test]
    fn test_insert_merges_collisions() {
        let ledger = reference_ledger();
        assert_eq!(ledger.len(), 3);
        let points = ledger.sorted_points();
        assert_eq!(points[2], (TimePoint::ordinal(4), dec!(70)));
    }

    #[test]
    fn test_max_time_tracks_entries() {
        let mut ledger = ordinal_ledger();
        assert_eq!(ledger.max_time(), None);
        ledger.insert_inflow(dec!(5), TimePoint::ordinal(7)).unwrap();
        assert_eq!(ledger.max_time(), Some(TimePoint::ordinal(7)));
        ledger.insert_inflow(dec!(5), TimePoint::ordinal(3)).unwrap();
        assert_eq!(ledger.max_time(), Some(TimePoint::ordinal(7)));
    }

    #[test]
    fn test_zero_merge_purges_slot() {
        let mut ledger = ordinal_ledger();
        ledger.insert_inflow(dec!(80), TimePoint::ordinal(4)).unwrap();
        ledger.insert_outflow(dec!(80), TimePoint::ordinal(4)).unwrap();
        assert!(ledger.is_empty());
        assert_eq!(ledger.max_time(), None);
    }

    #[test]
    fn test_zero_flow_never_stored() {
        let mut ledger = ordinal_ledger();
        ledger.insert_inflow(dec!(0), TimePoint::ordinal(1)).unwrap();
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_insert_rejects_wrong_convention() {
        let mut ledger = ordinal_ledger();
        let calendar = TimePoint::parse_calendar("2020-01-01").unwrap();
        let result = ledger.insert_inflow(dec!(5), calendar);
        assert!(matches!(
            result,
            Err(CashflowError::ConventionMismatch { .. })
        ));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_insert_rejects_wrong_currency() {
        let mut ledger = ordinal_ledger();
        let foreign = Flow::inflow(dec!(5), TimePoint::ordinal(0), Currency::new("USD")).unwrap();
        assert!(ledger.insert(foreign).is_err());
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_directional_inserts_reject_negative_magnitude() {
        let mut ledger = ordinal_ledger();
        assert!(matches!(
            ledger.insert_inflow(dec!(-1), TimePoint::ordinal(0)),
            Err(CashflowError::InvalidMagnitude { .. })
        ));
        assert!(matches!(
            ledger.insert_outflow(dec!(-1), TimePoint::ordinal(0)),
            Err(CashflowError::InvalidMagnitude { .. })
        ));
    }

    #[test]
    fn test_insert_signed_infers_direction() {
        let mut ledger = ordinal_ledger();
        ledger.insert_signed(dec!(-100), TimePoint::ordinal(0)).unwrap();
        ledger.insert_signed(dec!(50), TimePoint::ordinal(2)).unwrap();
        let flows = ledger.sorted_flows();
        assert_eq!(flows[0].direction(), Direction::Outflow);
        assert_eq!(flows[1].direction(), Direction::Inflow);
    }

    #[test]
    fn test_scaled_preserves_original() {
        let ledger = reference_ledger();
        let doubled = ledger.scaled(dec!(2));
        assert_eq!(ledger.total(Direction::Inflow), dec!(130));
        assert_eq!(doubled.total(Direction::Inflow), dec!(260));
    }

    #[test]
    fn test_scale_by_zero_empties() {
        let mut ledger = reference_ledger();
        ledger.scale(Decimal::ZERO);
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_negate_flips_totals() {
        let ledger = reference_ledger();
        let negated = ledger.negated();
        assert_eq!(negated.total(Direction::Inflow), dec!(110));
        assert_eq!(negated.total(Direction::Outflow), dec!(130));
    }

    #[test]
    fn test_combined_merges_collisions() {
        let mut a = ordinal_ledger();
        a.insert_inflow(dec!(50), TimePoint::ordinal(2)).unwrap();
        let mut b = ordinal_ledger();
        b.insert_outflow(dec!(20), TimePoint::ordinal(2)).unwrap();
        b.insert_inflow(dec!(5), TimePoint::ordinal(3)).unwrap();

        let combined = a.combined(&b).unwrap();
        assert_eq!(
            combined.sorted_points(),
            vec![
                (TimePoint::ordinal(2), dec!(30)),
                (TimePoint::ordinal(3), dec!(5)),
            ]
        );
    }

    #[test]
    fn test_combine_rejects_convention_mix() {
        let mut ordinal = ordinal_ledger();
        let calendar = Ledger::new(TimeConvention::Calendar, mxn());
        assert!(ordinal.combine(&calendar).is_err());
    }

    #[test]
    fn test_combine_cross_currency_nets_under_own_tag() {
        let mut a = ordinal_ledger();
        a.insert_inflow(dec!(50), TimePoint::ordinal(2)).unwrap();
        let mut b = Ledger::new(TimeConvention::Ordinal, Currency::new("USD"));
        b.insert_outflow(dec!(20), TimePoint::ordinal(2)).unwrap();

        let combined = a.combined(&b).unwrap();
        assert_eq!(combined.currency(), &mxn());
        assert_eq!(
            combined.sorted_points(),
            vec![(TimePoint::ordinal(2), dec!(30))]
        );
    }

    #[test]
    fn test_difference_with_self_is_empty() {
        let ledger = reference_ledger();
        let diff = ledger.difference(&ledger).unwrap();
        assert!(diff.is_empty());
        assert_eq!(diff, Ledger::new(TimeConvention::Ordinal, mxn()));
    }

    #[test]
    fn test_dense_series_fills_gaps() {
        let ledger = reference_ledger();
        let series = ledger.dense_series().unwrap();
        assert_eq!(
            series,
            vec![dec!(-100), dec!(0), dec!(50), dec!(0), dec!(70)]
        );
    }

    #[test]
    fn test_dense_series_empty_ledger() {
        let ledger = ordinal_ledger();
        assert_eq!(ledger.dense_series().unwrap(), Vec::<Decimal>::new());
    }

    #[test]
    fn test_dense_series_rejects_calendar() {
        let ledger = Ledger::new(TimeConvention::Calendar, mxn());
        assert!(ledger.dense_series().is_err());
    }

    #[test]
    fn test_totals_by_direction() {
        let ledger = reference_ledger();
        assert_eq!(ledger.total(Direction::Inflow), dec!(130));
        assert_eq!(ledger.total(Direction::Outflow), dec!(110));
    }

    #[test]
    fn test_equality_is_projection_wise() {
        let a = reference_ledger();
        let mut b = ordinal_ledger();
        // same projection, built in a different insertion order
        b.insert_inflow(dec!(80), TimePoint::ordinal(4)).unwrap();
        b.insert_outflow(dec!(100), TimePoint::ordinal(0)).unwrap();
        b.insert_outflow(dec!(10), TimePoint::ordinal(4)).unwrap();
        b.insert_inflow(dec!(50), TimePoint::ordinal(2)).unwrap();
        assert_eq!(a, b);

        // annualization does not participate in the oracle
        let c = reference_ledger().with_annualization(dec!(12)).unwrap();
        assert_eq!(a, c);
    }

    #[test]
    fn test_annualization_must_be_positive() {
        let result = ordinal_ledger().with_annualization(dec!(0));
        assert!(matches!(
            result,
            Err(CashflowError::InvalidAnnualization { .. })
        ));
    }

    #[test]
    fn test_iteration_is_time_ordered() {
        let ledger = reference_ledger();
        let times: Vec<_> = ledger.iter().map(Flow::time).collect();
        assert_eq!(
            times,
            vec![
                TimePoint::ordinal(0),
                TimePoint::ordinal(2),
                TimePoint::ordinal(4),
            ]
        );
        assert_eq!((&ledger).into_iter().count(), 3);
    }

    #[test]
    fn test_sorted_flows_round_trip() {
        let ledger = reference_ledger();
        let mut rebuilt = ordinal_ledger();
        for flow in ledger.sorted_flows() {
            rebuilt.insert(flow.clone()).unwrap();
        }
        assert_eq!(ledger, rebuilt);
    }
}
