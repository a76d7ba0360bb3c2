//! Flow type: a single directed cash movement.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CashflowError, CashflowResult};

use super::{Currency, TimePoint};

/// Direction of a cash movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Cash received.
    Inflow,
    /// Cash paid out.
    Outflow,
}

impl Direction {
    /// Returns the sign this direction contributes to a signed value.
    #[must_use]
    pub fn sign(&self) -> Decimal {
        match self {
            Direction::Inflow => Decimal::ONE,
            Direction::Outflow => Decimal::NEGATIVE_ONE,
        }
    }

    /// Returns the opposite direction.
    #[must_use]
    pub fn flipped(&self) -> Self {
        match self {
            Direction::Inflow => Direction::Outflow,
            Direction::Outflow => Direction::Inflow,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Inflow => "inflow",
            Direction::Outflow => "outflow",
        };
        write!(f, "{name}")
    }
}

/// One cash movement: a direction, a non-negative magnitude, a time
/// point, and a currency tag.
///
/// Direction and magnitude together are equivalent to one signed value
/// (inflow positive, outflow negative); [`Flow::signed_value`] exposes
/// that view and [`Flow::from_signed`] constructs from it.
///
/// # Example
///
/// ```rust
/// use cashflows_core::types::{Currency, Direction, Flow, TimePoint};
/// use rust_decimal_macros::dec;
///
/// let flow = Flow::outflow(dec!(100), TimePoint::ordinal(0), Currency::new("MXN")).unwrap();
/// assert_eq!(flow.signed_value(), dec!(-100));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flow {
    /// Direction of the movement.
    direction: Direction,
    /// Non-negative magnitude.
    magnitude: Decimal,
    /// Time coordinate.
    time: TimePoint,
    /// Opaque currency tag.
    currency: Currency,
}

impl Flow {
    /// Creates a new flow.
    ///
    /// # Errors
    ///
    /// Returns `CashflowError::InvalidMagnitude` if `magnitude` is negative.
    pub fn new(
        direction: Direction,
        magnitude: Decimal,
        time: TimePoint,
        currency: Currency,
    ) -> CashflowResult<Self> {
        if magnitude < Decimal::ZERO {
            return Err(CashflowError::InvalidMagnitude { value: magnitude });
        }
        Ok(Self {
            direction,
            magnitude,
            time,
            currency,
        })
    }

    /// Creates an inflow.
    ///
    /// # Errors
    ///
    /// Returns `CashflowError::InvalidMagnitude` if `magnitude` is negative.
    pub fn inflow(magnitude: Decimal, time: TimePoint, currency: Currency) -> CashflowResult<Self> {
        Self::new(Direction::Inflow, magnitude, time, currency)
    }

    /// Creates an outflow.
    ///
    /// # Errors
    ///
    /// Returns `CashflowError::InvalidMagnitude` if `magnitude` is negative.
    pub fn outflow(
        magnitude: Decimal,
        time: TimePoint,
        currency: Currency,
    ) -> CashflowResult<Self> {
        Self::new(Direction::Outflow, magnitude, time, currency)
    }

    /// Creates a flow from a signed value, inferring the direction.
    ///
    /// A non-negative value is an inflow, a negative value an outflow.
    #[must_use]
    pub fn from_signed(value: Decimal, time: TimePoint, currency: Currency) -> Self {
        let direction = if value >= Decimal::ZERO {
            Direction::Inflow
        } else {
            Direction::Outflow
        };
        Self {
            direction,
            magnitude: value.abs(),
            time,
            currency,
        }
    }

    /// Returns the direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the non-negative magnitude.
    #[must_use]
    pub fn magnitude(&self) -> Decimal {
        self.magnitude
    }

    /// Returns the time coordinate.
    #[must_use]
    pub fn time(&self) -> TimePoint {
        self.time
    }

    /// Returns the currency tag.
    #[must_use]
    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Returns the signed value (inflow positive, outflow negative).
    #[must_use]
    pub fn signed_value(&self) -> Decimal {
        self.direction.sign() * self.magnitude
    }

    /// Returns true if the magnitude is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }

    /// Merges another flow into this one.
    ///
    /// The signed values sum; the direction follows the sign of the sum
    /// and the magnitude is its absolute value. A failed merge leaves
    /// `self` unmodified.
    ///
    /// # Errors
    ///
    /// Returns `CashflowError::IncompatibleFlow` if the flows differ in
    /// time or currency.
    pub fn combine(&mut self, other: &Flow) -> CashflowResult<()> {
        if self.time != other.time {
            return Err(CashflowError::incompatible_flow(format!(
                "flows at {} and {} cannot merge",
                self.time, other.time
            )));
        }
        if self.currency != other.currency {
            return Err(CashflowError::incompatible_flow(format!(
                "flows in {} and {} cannot merge",
                self.currency, other.currency
            )));
        }
        let sum = self.signed_value() + other.signed_value();
        self.direction = if sum >= Decimal::ZERO {
            Direction::Inflow
        } else {
            Direction::Outflow
        };
        self.magnitude = sum.abs();
        Ok(())
    }

    /// Returns a value-scaled copy.
    ///
    /// A negative factor flips the direction.
    #[must_use]
    pub fn scaled(&self, factor: Decimal) -> Flow {
        let mut scaled = self.clone();
        scaled.scale(factor);
        scaled
    }

    /// Scales the value in place.
    ///
    /// A negative factor flips the direction.
    pub fn scale(&mut self, factor: Decimal) {
        if factor < Decimal::ZERO {
            self.direction = self.direction.flipped();
        }
        self.magnitude *= factor.abs();
    }

    /// Returns a direction-flipped copy; shorthand for scaling by -1.
    #[must_use]
    pub fn negated(&self) -> Flow {
        self.scaled(Decimal::NEGATIVE_ONE)
    }

    /// Flips the direction in place; shorthand for scaling by -1.
    pub fn negate(&mut self) {
        self.scale(Decimal::NEGATIVE_ONE);
    }
}

impl fmt::Display for Flow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} {} ({})",
            self.time, self.magnitude, self.currency, self.direction
        )
    }
}
