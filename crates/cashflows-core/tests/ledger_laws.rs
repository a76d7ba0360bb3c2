//! Algebraic law suite for the ledger.
//!
//! Ledgers with a shared convention form a vector space under
//! combination and scaling; equality is projection-wise. These
//! properties are the primary oracle for the merge/purge machinery.

use proptest::prelude::*;
use rust_decimal::Decimal;

use cashflows_core::{Currency, Date, Ledger, TimeConvention, TimePoint};

fn mxn() -> Currency {
    Currency::new("MXN")
}

fn empty_ordinal() -> Ledger {
    Ledger::new(TimeConvention::Ordinal, mxn())
}

/// Random ordinal ledger: up to a dozen signed flows on periods 0..10.
fn arb_ordinal_ledger() -> impl Strategy<Value = Ledger> {
    prop::collection::vec((0u32..10, -100i64..=100), 0..12).prop_map(|entries| {
        let mut ledger = empty_ordinal();
        for (period, value) in entries {
            ledger
                .insert_signed(Decimal::from(value), TimePoint::ordinal(period))
                .unwrap();
        }
        ledger
    })
}

/// Random calendar ledger over dates inside 2020.
fn arb_calendar_ledger() -> impl Strategy<Value = Ledger> {
    prop::collection::vec(((1u32..=12, 1u32..=28), -100i64..=100), 0..12).prop_map(|entries| {
        let mut ledger = Ledger::new(TimeConvention::Calendar, mxn());
        for ((month, day), value) in entries {
            let date = Date::from_ymd(2020, month, day).unwrap();
            ledger
                .insert_signed(Decimal::from(value), TimePoint::calendar(date))
                .unwrap();
        }
        ledger
    })
}

/// Exact two-decimal scalars; Decimal arithmetic keeps the laws exact
/// even for fractional factors.
fn arb_scalar() -> impl Strategy<Value = Decimal> {
    (-800i64..=800).prop_map(|n| Decimal::new(n, 2))
}

proptest! {
    #[test]
    fn scaling_composes(a in arb_ordinal_ledger(), r in arb_scalar(), s in arb_scalar()) {
        prop_assert_eq!(a.scaled(s).scaled(r), a.scaled(r * s));
    }

    #[test]
    fn combination_commutes(a in arb_ordinal_ledger(), b in arb_ordinal_ledger()) {
        prop_assert_eq!(a.combined(&b).unwrap(), b.combined(&a).unwrap());
    }

    #[test]
    fn combination_associates(
        a in arb_ordinal_ledger(),
        b in arb_ordinal_ledger(),
        c in arb_ordinal_ledger(),
    ) {
        let left = a.combined(&b).unwrap().combined(&c).unwrap();
        let right = a.combined(&b.combined(&c).unwrap()).unwrap();
        prop_assert_eq!(left, right);
    }

    #[test]
    fn additive_inverse_yields_empty(a in arb_ordinal_ledger()) {
        prop_assert_eq!(a.combined(&a.negated()).unwrap(), empty_ordinal());
    }

    #[test]
    fn empty_is_identity(a in arb_ordinal_ledger()) {
        prop_assert_eq!(a.combined(&empty_ordinal()).unwrap(), a);
    }

    #[test]
    fn scalar_distributes_over_sum(
        a in arb_ordinal_ledger(),
        r in arb_scalar(),
        s in arb_scalar(),
    ) {
        let left = a.scaled(r + s);
        let right = a.scaled(r).combined(&a.scaled(s)).unwrap();
        prop_assert_eq!(left, right);
    }

    #[test]
    fn scaling_distributes_over_combination(
        a in arb_ordinal_ledger(),
        b in arb_ordinal_ledger(),
        r in arb_scalar(),
    ) {
        let left = a.combined(&b).unwrap().scaled(r);
        let right = a.scaled(r).combined(&b.scaled(r)).unwrap();
        prop_assert_eq!(left, right);
    }

    #[test]
    fn doubling_equals_self_combination(a in arb_ordinal_ledger()) {
        prop_assert_eq!(a.scaled(Decimal::TWO), a.combined(&a).unwrap());
    }

    #[test]
    fn difference_inverts_combination(a in arb_ordinal_ledger(), b in arb_ordinal_ledger()) {
        prop_assert_eq!(a.combined(&b).unwrap().difference(&b).unwrap(), a);
    }

    #[test]
    fn projection_round_trips(a in arb_ordinal_ledger()) {
        let mut rebuilt = empty_ordinal();
        for flow in a.sorted_flows() {
            rebuilt.insert(flow.clone()).unwrap();
        }
        prop_assert_eq!(a, rebuilt);
    }

    #[test]
    fn projection_is_sorted_and_zero_free(a in arb_ordinal_ledger()) {
        let points = a.sorted_points();
        for pair in points.windows(2) {
            prop_assert!(pair[0].0 < pair[1].0);
        }
        for (_, value) in &points {
            prop_assert!(!value.is_zero());
        }
    }

    #[test]
    fn calendar_laws_hold_too(
        a in arb_calendar_ledger(),
        b in arb_calendar_ledger(),
        r in arb_scalar(),
    ) {
        let empty = Ledger::new(TimeConvention::Calendar, mxn());
        prop_assert_eq!(a.combined(&b).unwrap(), b.combined(&a).unwrap());
        prop_assert_eq!(a.combined(&a.negated()).unwrap(), empty.clone());
        prop_assert_eq!(a.combined(&empty).unwrap(), a.clone());
        let left = a.combined(&b).unwrap().scaled(r);
        let right = a.scaled(r).combined(&b.scaled(r)).unwrap();
        prop_assert_eq!(left, right);
    }

    #[test]
    fn mutating_pairs_agree(a in arb_ordinal_ledger(), b in arb_ordinal_ledger(), r in arb_scalar()) {
        let mut scaled = a.clone();
        scaled.scale(r);
        prop_assert_eq!(scaled, a.scaled(r));

        let mut negated = a.clone();
        negated.negate();
        prop_assert_eq!(negated, a.negated());

        let mut combined = a.clone();
        combined.combine(&b).unwrap();
        prop_assert_eq!(combined, a.combined(&b).unwrap());

        let mut subtracted = a.clone();
        subtracted.subtract(&b).unwrap();
        prop_assert_eq!(subtracted, a.difference(&b).unwrap());
    }
}
