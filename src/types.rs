// 1.0: all the primitives live here. nothing in the engine works without these types.
// money amounts, offer channels, finance percentages. each is a newtype so the
// compiler catches type mixups.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;

// 1.1: signed quote-currency amount. FMV, returns, prices, profits all use this.
// negative values are legal (losses, downward adjustments); the headline price
// formulas clamp with floor_zero, never here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money(Decimal);

impl Money {
    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn add(&self, other: Money) -> Self {
        Self(self.0 + other.0)
    }

    pub fn sub(&self, other: Money) -> Self {
        Self(self.0 - other.0)
    }

    pub fn mul(&self, factor: Decimal) -> Self {
        Self(self.0 * factor)
    }

    pub fn div(&self, divisor: Decimal) -> Self {
        Self(self.0 / divisor)
    }

    // floor-at-zero policy: negative intermediate results become $0, never
    // negative prices.
    pub fn floor_zero(&self) -> Self {
        if self.0 < Decimal::ZERO {
            Self(Decimal::ZERO)
        } else {
            *self
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Money {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.cmp(&other.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, m| acc.add(m))
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, m| acc.add(*m))
    }
}

// 1.2: offer channel. Purchase = buy-and-resell, Wholesale = assign for a flat
// margin. selects which return column a tier lookup reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OfferKind {
    Purchase,
    Wholesale,
}

// 1.3: seller-finance percentage of value. operator-selected, 80% to 95% in
// 5-point steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancePct(Decimal);

impl FinancePct {
    pub const MIN: Decimal = dec!(0.80);
    pub const MAX: Decimal = dec!(0.95);
    pub const STEP: Decimal = dec!(0.05);

    #[must_use]
    pub fn new(value: Decimal) -> Option<Self> {
        if value >= Self::MIN && value <= Self::MAX && (value % Self::STEP).is_zero() {
            Some(Self(value))
        } else {
            None
        }
    }

    // 85%, the usual opening position.
    pub fn standard() -> Self {
        Self(dec!(0.85))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    // all selectable percentages, lowest first.
    pub fn all() -> Vec<Self> {
        let mut out = Vec::new();
        let mut v = Self::MIN;
        while v <= Self::MAX {
            out.push(Self(v));
            v += Self::STEP;
        }
        out
    }
}

impl fmt::Display for FinancePct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", (self.0 * dec!(100)).normalize())
    }
}
