// 6.0: seller-finance offers. the acquirer pays a percentage of value under
// deferred terms instead of cash at close.
//
// the formula reuses the purchase return tier and the purchase closing cost.
// that is the intended cost model, not a missing wholesale-style tier.

use crate::inputs::PropertyInputs;
use crate::params::OfferParams;
use crate::tiers::TierTable;
use crate::types::{FinancePct, Money, OfferKind};

/// Seller-finance offer for a given value and percentage. The percentage is
/// applied before the transaction-cost haircut; the result floors at zero
/// like every headline price.
pub fn seller_finance_price(
    value: Money,
    pct: FinancePct,
    table: &TierTable,
    params: &OfferParams,
) -> Money {
    let expected = table.expected_return(value, OfferKind::Purchase);
    value
        .mul(pct.value())
        .mul(params.sale_cost_factor)
        .sub(params.purchase_closing_cost)
        .sub(expected)
        .floor_zero()
}

/// Whether seller finance is on the table for this parcel: any subdivision
/// potential, or an FMV at or above the eligibility floor.
pub fn seller_finance_available(inputs: &PropertyInputs, params: &OfferParams) -> bool {
    inputs.subdivision.any() || inputs.fmv >= params.finance_fmv_floor
}
