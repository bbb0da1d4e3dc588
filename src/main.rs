//! Land Offer Pricing Simulation.
//!
//! Walks the full pricing engine through a set of representative deals:
//! offer calculation, value adjustments, seller finance, subdivision
//! analysis, negotiation what-ifs, and tier ingestion.

use landoffer_core::*;
use rust_decimal_macros::dec;

fn main() {
    println!("Land Offer Pricing Engine Simulation");
    println!("Tiered Expected Returns, Three Offer Channels\n");

    scenario_1_baseline_offers();
    scenario_2_value_adjustments();
    scenario_3_seller_finance();
    scenario_4_subdivision_analysis();
    scenario_5_negotiation();
    scenario_6_tier_ingestion();

    println!("\nAll simulations completed successfully.");
}

/// Straight purchase and wholesale offers on an unremarkable parcel.
fn scenario_1_baseline_offers() {
    println!("Scenario 1: Baseline Offers\n");

    let table = TierTable::builtin();
    let params = OfferParams::default();
    let inputs = PropertyInputs::new(Money::new(dec!(100000)), dec!(5.0));

    let adjusted = inputs.adjusted_fmv();
    let offers = calculate_offers(adjusted, &table, &params);

    println!("  FMV ${}, {} acres", inputs.fmv, inputs.acreage);
    println!("  Purchase expected return: ${}", offers.purchase_return);
    println!("  Wholesale expected return: ${}", offers.wholesale_return);
    println!("  Purchase offer: ${}", offers.purchase_price.value().round_dp(0));
    println!("  Wholesale offer: ${}", offers.wholesale_price.value().round_dp(0));
    println!(
        "  Price per acre: ${}\n",
        inputs.price_per_acre().unwrap().value().round_dp(0)
    );
}

/// Well and septic uplifts against a wetland markdown.
fn scenario_2_value_adjustments() {
    println!("Scenario 2: Value Adjustments\n");

    let table = TierTable::builtin();
    let params = OfferParams::default();
    let inputs = PropertyInputs::new(Money::new(dec!(85000)), dec!(8.0))
        .with_adjustment(Adjustment::well())
        .with_adjustment(Adjustment::septic())
        .with_adjustment(Adjustment::new("Wetland on back lot", Money::new(dec!(-12000))));

    for adj in &inputs.adjustments {
        println!("  {}: ${}", adj.description, adj.amount);
    }

    let adjusted = inputs.adjusted_fmv();
    let offers = calculate_offers(adjusted, &table, &params);

    println!("  Adjusted FMV: ${} (from ${})", adjusted, inputs.fmv);
    println!("  Purchase offer: ${}", offers.purchase_price.value().round_dp(0));
    println!("  Wholesale offer: ${}\n", offers.wholesale_price.value().round_dp(0));
}

/// Seller finance across the percentage range, plus an eligibility miss.
fn scenario_3_seller_finance() {
    println!("Scenario 3: Seller Finance\n");

    let table = TierTable::builtin();
    let params = OfferParams::default();

    let big_parcel = PropertyInputs::new(Money::new(dec!(500000)), dec!(40.0));
    println!(
        "  $500k parcel, eligible: {}",
        seller_finance_available(&big_parcel, &params)
    );

    for pct in FinancePct::all() {
        let price = seller_finance_price(big_parcel.adjusted_fmv(), pct, &table, &params);
        println!("    at {}: ${}", pct, price.value().round_dp(0));
    }

    let small_parcel = PropertyInputs::new(Money::new(dec!(90000)), dec!(10.0));
    println!(
        "  $90k parcel, no subdivision potential, eligible: {}\n",
        seller_finance_available(&small_parcel, &params)
    );
}

/// Three split methods priced off a subdivided-lot comp.
fn scenario_4_subdivision_analysis() {
    println!("Scenario 4: Subdivision Analysis\n");

    let table = TierTable::builtin();
    let params = OfferParams::default();
    let acreage = dec!(12.0);

    let comp = CompSale::new(Money::new(dec!(140000)), dec!(4.0));
    let ppa = comp.price_per_acre().unwrap();
    println!("  Subdivided comp: $140k for 4 acres (${}/acre)", ppa.value().round_dp(0));

    let yields = [
        LotYield::from_road_frontage(dec!(650), dec!(100), acreage),
        LotYield::from_lot_count(SplitMethod::AdministrativeSplit, 4, acreage),
        LotYield::from_lot_count(SplitMethod::MinorSplit, 3, acreage),
    ];

    let scenarios: Vec<SubdivisionScenario> = yields
        .into_iter()
        .flatten()
        .map(|y| evaluate_scenario(y, ppa, &table, &params))
        .collect();

    for s in &scenarios {
        println!(
            "    {:?}: {} lots, value ${}, pay up to ${}, profit ${}",
            s.method,
            s.lots,
            s.total_value.value().round_dp(0),
            s.purchase_price.value().round_dp(0),
            s.profit.value().round_dp(0)
        );
    }

    if let Some(best) = best_scenario(&scenarios) {
        println!("  Best play: {:?}\n", best.method);
    }
}

/// Testing candidate prices against the engine's own offers.
fn scenario_5_negotiation() {
    println!("Scenario 5: Negotiation What-Ifs\n");

    let table = TierTable::builtin();
    let params = OfferParams::default();
    let offers = calculate_offers(Money::new(dec!(150000)), &table, &params);

    println!("  Engine purchase offer: ${}", offers.purchase_price.value().round_dp(0));

    for candidate in [dec!(110000), dec!(125000), dec!(140000)] {
        let test = test_purchase(
            Money::new(candidate),
            offers.nsp_purchase,
            offers.purchase_price,
            &params,
        );
        let roi = test
            .roi
            .map(|r| format!("{}%", (r * dec!(100)).round_dp(1)))
            .unwrap_or_else(|| "n/a".to_string());
        println!(
            "    offer ${}: profit ${}, roi {}, delta ${}",
            candidate,
            test.profit.value().round_dp(0),
            roi,
            test.delta_from_offer.value().round_dp(0)
        );
    }

    println!("  Quick adjustments on the engine offer:");
    for step in quick_steps() {
        println!(
            "    {:>3}%: ${}",
            (step * dec!(100)).round_dp(0),
            quick_adjust(offers.purchase_price, step).value().round_dp(0)
        );
    }
    println!();
}

/// Sheet-shaped tier records, including a malformed set that falls back.
fn scenario_6_tier_ingestion() {
    println!("Scenario 6: Tier Ingestion\n");

    let records: Vec<Vec<String>> = vec![
        vec!["FMV", "Purchase Return", "Wholesale Return"],
        vec!["$0", "$0", "$0"],
        vec!["$25,000", "$3,000", "$6,000"],
        vec!["$50,000", "$7,000", "$10,000"],
        vec!["100", "$12,500", "$20,000"], // quoted in thousands
    ]
    .into_iter()
    .map(|r| r.into_iter().map(String::from).collect())
    .collect();

    let table = tiers_from_records(&records).unwrap();
    println!("  Ingested {} tiers from sheet records", table.len());

    let offers = calculate_offers(Money::new(dec!(120000)), &table, &OfferParams::default());
    println!("  Purchase offer at $120k FMV: ${}", offers.purchase_price.value().round_dp(0));

    // a sheet with no zero row is rejected and the builtin table takes over
    let bad: Vec<Vec<String>> = vec![vec!["$25,000".to_string(), "$3,000".to_string(), "$6,000".to_string()]];
    let fallback = tiers_from_records(&bad).unwrap_or_else(|err| {
        println!("  Rejected malformed sheet ({err}), using builtin table");
        TierTable::builtin()
    });
    println!("  Active table: {} tiers", fallback.len());
}
