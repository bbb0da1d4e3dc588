//! Property inputs for a single calculation.
//!
//! Everything the operator knows about a parcel: its FMV estimate, acreage,
//! value adjustments, and subdivision potential. Built once per calculation
//! and passed by value into stateless engine calls; the adjusted FMV is
//! derived, never stored.

use crate::types::Money;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

// 4.0: a single signed value adjustment with its rationale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adjustment {
    pub description: String,
    pub amount: Money,
}

impl Adjustment {
    pub fn new(description: impl Into<String>, amount: Money) -> Self {
        Self {
            description: description.into(),
            amount,
        }
    }

    // standard uplift for an existing well
    pub fn well() -> Self {
        Self::new("Existing well", Money::new(dec!(5000)))
    }

    // standard uplift for an existing septic system
    pub fn septic() -> Self {
        Self::new("Existing septic", Money::new(dec!(5000)))
    }
}

// 4.1: subdivision potential flags. any of these also unlocks seller finance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubdivisionFlags {
    pub can_subdivide: bool,
    pub can_add_road: bool,
    pub can_admin_split: bool,
}

impl SubdivisionFlags {
    pub fn any(&self) -> bool {
        self.can_subdivide || self.can_add_road || self.can_admin_split
    }
}

// 4.2: the full input record for one parcel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyInputs {
    pub fmv: Money,
    pub acreage: Decimal,
    pub adjustments: Vec<Adjustment>,
    pub subdivision: SubdivisionFlags,
}

impl PropertyInputs {
    pub fn new(fmv: Money, acreage: Decimal) -> Self {
        Self {
            fmv,
            acreage,
            adjustments: Vec::new(),
            subdivision: SubdivisionFlags::default(),
        }
    }

    pub fn with_adjustment(mut self, adjustment: Adjustment) -> Self {
        self.adjustments.push(adjustment);
        self
    }

    pub fn with_subdivision(mut self, flags: SubdivisionFlags) -> Self {
        self.subdivision = flags;
        self
    }

    pub fn total_adjustments(&self) -> Money {
        self.adjustments.iter().map(|a| a.amount).sum()
    }

    /// FMV plus all adjustments. Deliberately unclamped: a stack of negative
    /// adjustments can push this below zero, and the price formulas clamp
    /// their own outputs instead.
    pub fn adjusted_fmv(&self) -> Money {
        self.fmv.add(self.total_adjustments())
    }

    /// Adjusted FMV per acre. `None` for a zero-acre record.
    pub fn price_per_acre(&self) -> Option<Money> {
        if self.acreage <= Decimal::ZERO {
            return None;
        }
        Some(self.adjusted_fmv().div(self.acreage))
    }
}
