// landoffer-core: land-acquisition offer pricing engine.
// tier-first architecture: every price backs out of an expected-return lookup.
// all computation is deterministic with no external I/O.
//
// file map (search X.0 for structs, X.1+ for logic):
//   1.x  types.rs: primitives: Money, OfferKind, FinancePct
//   2.x  tiers.rs: expected-return tier table, validation, floor lookup
//   2.1  source.rs: sheet-shaped record ingestion (parsing only, no I/O)
//   3.x  params.rs: cost model: haircut, closing costs, markups
//   4.x  inputs.rs: property inputs, adjustments, subdivision flags
//   5.x  offer.rs: purchase/wholesale offers and the result record
//   6.x  finance.rs: seller-finance pricing and eligibility
//   7.x  subdivision.rs: lot yield, subdivision pricing, scenario pick
//   8.x  negotiation.rs: what-if price testing, quick adjustments
//   9.x  comps.rs: comparable-sale valuation

// core pricing modules
pub mod offer;
pub mod params;
pub mod tiers;
pub mod types;

// input and configuration modules
pub mod inputs;
pub mod source;

// offer variants and negotiation modules
pub mod comps;
pub mod finance;
pub mod negotiation;
pub mod subdivision;

// re exports for convenience
pub use comps::*;
pub use finance::*;
pub use inputs::*;
pub use negotiation::*;
pub use offer::*;
pub use params::*;
pub use subdivision::*;
pub use tiers::*;
pub use types::*;
pub use source::tiers_from_records;
