// 3.0 params.rs: all business constants in one place. haircuts, closing
// costs, markups, eligibility floors.
// 3.1 every formula takes these by reference; nothing is hardcoded in the math.

use crate::types::Money;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

// Complete cost model for offer pricing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfferParams {
    // Flat transaction-cost haircut applied to FMV before anything else
    pub sale_cost_factor: Decimal,
    // Fixed closing cost assumed for a direct purchase resale
    pub purchase_closing_cost: Money,
    // Fixed closing cost assumed for a wholesale assignment
    pub wholesale_closing_cost: Money,
    // Markup added on top of the eventual resale of a whole parcel
    pub purchase_markup: Decimal,
    // Flat overhead assumed for any subdivision play
    pub subdivision_cost: Money,
    // Markup for the subdivision channel. intentionally distinct from
    // purchase_markup
    pub subdivision_markup: Decimal,
    // FMV at or above which seller finance is offered regardless of
    // subdivision potential
    pub finance_fmv_floor: Money,
}

impl Default for OfferParams {
    fn default() -> Self {
        Self {
            sale_cost_factor: dec!(0.94),
            purchase_closing_cost: Money::new(dec!(3500)),
            wholesale_closing_cost: Money::new(dec!(2500)),
            purchase_markup: dec!(1.0525),
            subdivision_cost: Money::new(dec!(15000)),
            subdivision_markup: dec!(1.1),
            finance_fmv_floor: Money::new(dec!(400000)),
        }
    }
}

impl OfferParams {
    // Validate the parameter set for internal consistency
    pub fn validate(&self) -> Result<(), ParamsError> {
        // the haircut is a retention factor, not a discount rate
        if self.sale_cost_factor <= Decimal::ZERO || self.sale_cost_factor > Decimal::ONE {
            return Err(ParamsError::InvalidFactor {
                reason: "Sale cost factor must be in (0, 1]".to_string(),
            });
        }

        if self.purchase_markup < Decimal::ONE || self.subdivision_markup < Decimal::ONE {
            return Err(ParamsError::InvalidMarkup {
                reason: "Markup divisors must be at least 1".to_string(),
            });
        }

        if self.purchase_closing_cost.is_negative()
            || self.wholesale_closing_cost.is_negative()
            || self.subdivision_cost.is_negative()
        {
            return Err(ParamsError::InvalidCost {
                reason: "Closing and subdivision costs must be non-negative".to_string(),
            });
        }

        if self.finance_fmv_floor.is_negative() {
            return Err(ParamsError::InvalidCost {
                reason: "Finance eligibility floor must be non-negative".to_string(),
            });
        }

        Ok(())
    }
}

// Parameter validation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamsError {
    InvalidFactor { reason: String },
    InvalidMarkup { reason: String },
    InvalidCost { reason: String },
}
