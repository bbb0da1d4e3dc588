//! Lot yield and subdivision pricing.
//!
//! A parcel can sometimes be worth more cut into lots than whole. Each split
//! method yields a lot count; lots times acres-per-lot times a comp-derived
//! price per acre gives a candidate post-subdivision value, which prices
//! through its own formula: a flat subdivision overhead and a markup divisor
//! distinct from the whole-parcel one. Both constants are deliberate.
//!
//! Scenarios are independent; the caller keeps whichever has the highest
//! total value.

use crate::params::OfferParams;
use crate::tiers::TierTable;
use crate::types::{Money, OfferKind};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// 7.0: how the parcel gets cut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SplitMethod {
    RoadFrontage,
    AdministrativeSplit,
    MinorSplit,
}

// 7.1: lot count plus acreage per lot for one method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LotYield {
    pub method: SplitMethod,
    pub lots: u32,
    pub acres_per_lot: Decimal,
}

impl LotYield {
    /// Lots from available road frontage: whole lots only, each consuming the
    /// required frontage. `None` when the requirement is zero or nothing fits.
    pub fn from_road_frontage(
        frontage_ft: Decimal,
        frontage_required_ft: Decimal,
        acreage: Decimal,
    ) -> Option<Self> {
        if frontage_required_ft <= Decimal::ZERO {
            return None;
        }
        let lots = (frontage_ft / frontage_required_ft).floor().to_u32()?;
        Self::from_lot_count(SplitMethod::RoadFrontage, lots, acreage)
    }

    /// Direct lot count for administrative and minor splits, where the county
    /// process fixes how many lots are allowed.
    pub fn from_lot_count(method: SplitMethod, lots: u32, acreage: Decimal) -> Option<Self> {
        if lots == 0 || acreage <= Decimal::ZERO {
            return None;
        }
        Some(Self {
            method,
            lots,
            acres_per_lot: acreage / Decimal::from(lots),
        })
    }

    /// Candidate post-subdivision value at a comp-derived price per acre.
    pub fn total_value(&self, price_per_acre: Money) -> Money {
        price_per_acre
            .mul(Decimal::from(self.lots))
            .mul(self.acres_per_lot)
    }
}

// 7.2: one priced subdivision play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubdivisionScenario {
    pub method: SplitMethod,
    pub lots: u32,
    pub total_value: Money,
    pub purchase_price: Money,
    pub profit: Money,
}

/// Maximum price to pay for the whole parcel given a candidate
/// post-subdivision value. Floors at zero.
pub fn subdivision_purchase_price(
    total_value: Money,
    table: &TierTable,
    params: &OfferParams,
) -> Money {
    let expected = table.expected_return(total_value, OfferKind::Purchase);
    total_value
        .mul(params.sale_cost_factor)
        .sub(params.subdivision_cost)
        .sub(expected)
        .div(params.subdivision_markup)
        .floor_zero()
}

/// Profit at a chosen purchase price: the forward check of the price formula.
/// Substituting the engine's own price recovers the tier's expected return.
/// Signed, never clamped.
pub fn subdivision_profit(total_value: Money, purchase_price: Money, params: &OfferParams) -> Money {
    total_value
        .mul(params.sale_cost_factor)
        .sub(params.subdivision_cost)
        .sub(purchase_price.mul(params.subdivision_markup))
}

/// Price one lot yield at a comp-derived price per acre.
pub fn evaluate_scenario(
    yield_: LotYield,
    price_per_acre: Money,
    table: &TierTable,
    params: &OfferParams,
) -> SubdivisionScenario {
    let total_value = yield_.total_value(price_per_acre);
    let purchase_price = subdivision_purchase_price(total_value, table, params);
    SubdivisionScenario {
        method: yield_.method,
        lots: yield_.lots,
        total_value,
        purchase_price,
        profit: subdivision_profit(total_value, purchase_price, params),
    }
}

/// The scenario worth pursuing: highest total post-subdivision value.
pub fn best_scenario(scenarios: &[SubdivisionScenario]) -> Option<&SubdivisionScenario> {
    scenarios.iter().max_by_key(|s| s.total_value)
}
