// 9.0: comparable-sale valuation. a comp's price per acre, applied to the
// subject parcel's acreage, backs into an FMV estimate. the same record
// serves sold comps, active listings, and subdivided-lot comps.

use crate::types::Money;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompSale {
    pub price: Money,
    pub acres: Decimal,
}

impl CompSale {
    pub fn new(price: Money, acres: Decimal) -> Self {
        Self { price, acres }
    }

    /// Sale price per acre. `None` for a zero-acre comp.
    pub fn price_per_acre(&self) -> Option<Money> {
        if self.acres <= Decimal::ZERO {
            return None;
        }
        Some(self.price.div(self.acres))
    }

    /// What the subject parcel would be worth at this comp's price per acre.
    pub fn implied_value(&self, subject_acres: Decimal) -> Option<Money> {
        Some(self.price_per_acre()?.mul(subject_acres))
    }
}
