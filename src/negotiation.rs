// 8.0: what-if price testing for negotiation. evaluates an arbitrary candidate
// price against the same cost model the offers come from.
//
// nothing here clamps. a loss is a valid, reportable outcome; that is the
// whole point of testing a price before agreeing to it.

use crate::params::OfferParams;
use crate::types::Money;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// 8.1: outcome of testing a candidate purchase price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseTest {
    // profit after the resale markup is paid back out of the net sale price
    pub profit: Money,
    // profit over candidate price. absent when the candidate is zero
    pub roi: Option<Decimal>,
    // how far the candidate sits from the engine's own offer
    pub delta_from_offer: Money,
}

// 8.2: outcome of testing a candidate wholesale price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WholesaleTest {
    pub margin: Money,
    pub margin_pct: Option<Decimal>,
    pub delta_from_offer: Money,
}

/// Evaluate a candidate purchase price. `nsp_purchase` and `engine_offer`
/// come from the engine's own calculation for the same parcel.
pub fn test_purchase(
    candidate: Money,
    nsp_purchase: Money,
    engine_offer: Money,
    params: &OfferParams,
) -> PurchaseTest {
    let profit = nsp_purchase.sub(candidate.mul(params.purchase_markup));
    let roi = if candidate > Money::zero() {
        Some(profit.value() / candidate.value())
    } else {
        None
    };
    PurchaseTest {
        profit,
        roi,
        delta_from_offer: candidate.sub(engine_offer),
    }
}

/// Evaluate a candidate wholesale price. The margin is a flat difference;
/// no markup applies on this channel.
pub fn test_wholesale(candidate: Money, nsp_wholesale: Money, engine_offer: Money) -> WholesaleTest {
    let margin = nsp_wholesale.sub(candidate);
    let margin_pct = if candidate > Money::zero() {
        Some(margin.value() / candidate.value())
    } else {
        None
    };
    WholesaleTest {
        margin,
        margin_pct,
        delta_from_offer: candidate.sub(engine_offer),
    }
}

/// Stateless percentage nudge on an offer, e.g. +0.05 for "up 5%".
pub fn quick_adjust(offer: Money, pct: Decimal) -> Money {
    offer.mul(Decimal::ONE + pct)
}

/// The standard quick-adjustment steps: down 10%, down 5%, up 5%, up 10%.
pub fn quick_steps() -> [Decimal; 4] {
    [
        Decimal::new(-10, 2),
        Decimal::new(-5, 2),
        Decimal::new(5, 2),
        Decimal::new(10, 2),
    ]
}
