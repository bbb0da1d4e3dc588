//! Purchase and wholesale offer math.
//!
//! Both channels start from a net sale price: adjusted FMV after the flat
//! transaction-cost haircut and a channel-specific closing cost. The purchase
//! channel then backs a markup out of the remainder so the target return is
//! realized after that markup is added back on resale; the wholesale channel
//! takes its return as a flat margin.
//!
//! Headline prices floor at zero. NSP values and expected returns stay
//! signed, so margin reporting can show losses.

use crate::params::OfferParams;
use crate::tiers::TierTable;
use crate::types::{Money, OfferKind};
use serde::{Deserialize, Serialize};

// 5.0: everything the presentation and CRM layers need from one calculation.
// plain serializable record, recomputed on every input change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferResult {
    pub purchase_price: Money,
    pub wholesale_price: Money,
    pub purchase_return: Money,
    pub wholesale_return: Money,
    pub nsp_purchase: Money,
    pub nsp_wholesale: Money,
}

/// Net sale price for the purchase channel: haircut, then purchase closing
/// cost. Signed, never clamped.
pub fn net_sale_purchase(adjusted_fmv: Money, params: &OfferParams) -> Money {
    adjusted_fmv
        .mul(params.sale_cost_factor)
        .sub(params.purchase_closing_cost)
}

/// Net sale price for the wholesale channel: haircut, then wholesale closing
/// cost. Signed, never clamped.
pub fn net_sale_wholesale(adjusted_fmv: Money, params: &OfferParams) -> Money {
    adjusted_fmv
        .mul(params.sale_cost_factor)
        .sub(params.wholesale_closing_cost)
}

/// Direct purchase offer. The markup divisor backs out the resale markup so
/// the tier's target return is realized at the target rate after the markup
/// is added back.
pub fn purchase_price(adjusted_fmv: Money, table: &TierTable, params: &OfferParams) -> Money {
    let expected = table.expected_return(adjusted_fmv, OfferKind::Purchase);
    net_sale_purchase(adjusted_fmv, params)
        .sub(expected)
        .div(params.purchase_markup)
        .floor_zero()
}

/// Wholesale offer. No markup division: the tier's return is a flat margin.
pub fn wholesale_price(adjusted_fmv: Money, table: &TierTable, params: &OfferParams) -> Money {
    let expected = table.expected_return(adjusted_fmv, OfferKind::Wholesale);
    net_sale_wholesale(adjusted_fmv, params)
        .sub(expected)
        .floor_zero()
}

/// Compute both channels and their intermediates in one call.
pub fn calculate_offers(adjusted_fmv: Money, table: &TierTable, params: &OfferParams) -> OfferResult {
    let purchase_return = table.expected_return(adjusted_fmv, OfferKind::Purchase);
    let wholesale_return = table.expected_return(adjusted_fmv, OfferKind::Wholesale);
    let nsp_purchase = net_sale_purchase(adjusted_fmv, params);
    let nsp_wholesale = net_sale_wholesale(adjusted_fmv, params);

    OfferResult {
        purchase_price: nsp_purchase
            .sub(purchase_return)
            .div(params.purchase_markup)
            .floor_zero(),
        wholesale_price: nsp_wholesale.sub(wholesale_return).floor_zero(),
        purchase_return,
        wholesale_return,
        nsp_purchase,
        nsp_wholesale,
    }
}
