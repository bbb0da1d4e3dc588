//! Tier ingestion from sheet-shaped records.
//!
//! The tier table is maintained by operators in a spreadsheet: three columns
//! of currency-formatted text (FMV threshold, purchase return, wholesale
//! return), sometimes with a header row, sometimes quoting thresholds in
//! thousands. This module turns such records into a validated `TierTable`.
//! Fetching the records is the caller's problem; nothing here does I/O.
//!
//! Cleaning rules:
//! - `$`, thousands separators, and surrounding whitespace are stripped
//! - a first row mentioning FMV/PURCHASE/WHOLESALE/THRESHOLD/RETURN is a header
//! - blank rows and rows whose threshold cell does not parse are skipped
//! - missing or blank return cells read as 0
//! - thresholds below 1000 are taken as quoted in thousands and scaled up

use crate::tiers::{TierRow, TierTable, TierTableError};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const HEADER_KEYWORDS: [&str; 5] = ["FMV", "PURCHASE", "WHOLESALE", "THRESHOLD", "RETURN"];

// thresholds under this are assumed to be in thousands
const THOUSANDS_CUTOFF: Decimal = dec!(1000);

/// Parse one currency-formatted cell. `None` when the cell is blank or not a
/// number after cleaning.
fn parse_money_cell(cell: &str) -> Option<Decimal> {
    let cleaned: String = cell
        .chars()
        .filter(|c| *c != '$' && *c != ',' && !c.is_whitespace())
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse().ok()
}

/// A return cell that is absent, blank, or unparseable reads as 0.
fn parse_return_cell(row: &[String], index: usize) -> Decimal {
    row.get(index)
        .and_then(|cell| parse_money_cell(cell))
        .unwrap_or(Decimal::ZERO)
}

/// Whether the first row looks like a column-header row rather than data.
fn looks_like_header(row: &[String]) -> bool {
    let joined = row
        .iter()
        .take(3)
        .map(|cell| cell.to_uppercase())
        .collect::<Vec<_>>()
        .join(" ");
    HEADER_KEYWORDS.iter().any(|kw| joined.contains(kw))
}

/// Build a validated tier table from raw sheet records. Unusable rows are
/// skipped; the surviving rows must still form a valid table (non-empty,
/// unique thresholds, zero-based) or construction fails.
pub fn tiers_from_records(rows: &[Vec<String>]) -> Result<TierTable, TierTableError> {
    let start = match rows.first() {
        Some(first) if looks_like_header(first) => 1,
        _ => 0,
    };

    let mut parsed = Vec::new();
    for row in &rows[start.min(rows.len())..] {
        let Some(threshold_cell) = row.first() else {
            continue;
        };
        let Some(raw_threshold) = parse_money_cell(threshold_cell) else {
            continue;
        };

        let threshold = if raw_threshold < THOUSANDS_CUTOFF {
            raw_threshold * dec!(1000)
        } else {
            raw_threshold
        };

        parsed.push(TierRow::new(
            threshold,
            parse_return_cell(row, 1),
            parse_return_cell(row, 2),
        ));
    }

    TierTable::from_unsorted(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Money, OfferKind};
    use rust_decimal_macros::dec;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn parses_currency_formatted_cells() {
        assert_eq!(parse_money_cell("$15,000"), Some(dec!(15000)));
        assert_eq!(parse_money_cell(" 2500 "), Some(dec!(2500)));
        assert_eq!(parse_money_cell(""), None);
        assert_eq!(parse_money_cell("n/a"), None);
    }

    #[test]
    fn ingests_clean_records() {
        let rows = vec![
            row(&["$0", "$0", "$0"]),
            row(&["$15,000", "$2,000", "$4,000"]),
            row(&["$20,000", "$2,500", "$5,000"]),
        ];
        let table = tiers_from_records(&rows).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(
            table.expected_return(Money::new(dec!(18000)), OfferKind::Wholesale),
            Money::new(dec!(4000))
        );
    }

    #[test]
    fn skips_header_row() {
        let rows = vec![
            row(&["FMV Threshold", "Purchase Return", "Wholesale Return"]),
            row(&["0", "0", "0"]),
            row(&["15000", "2000", "4000"]),
        ];
        let table = tiers_from_records(&rows).unwrap();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn skips_blank_and_junk_rows() {
        let rows = vec![
            row(&["0", "0", "0"]),
            row(&[]),
            row(&["", "", ""]),
            row(&["see note below", "", ""]),
            row(&["15000", "2000", "4000"]),
        ];
        let table = tiers_from_records(&rows).unwrap();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn blank_return_cells_read_zero() {
        let rows = vec![row(&["0"]), row(&["15000", "", "4000"])];
        let table = tiers_from_records(&rows).unwrap();
        assert_eq!(
            table.expected_return(Money::new(dec!(15000)), OfferKind::Purchase),
            Money::zero()
        );
        assert_eq!(
            table.expected_return(Money::new(dec!(15000)), OfferKind::Wholesale),
            Money::new(dec!(4000))
        );
    }

    #[test]
    fn thresholds_in_thousands_scale_up() {
        let rows = vec![
            row(&["0", "0", "0"]),
            row(&["15", "2000", "4000"]), // quoted in thousands
            row(&["20000", "2500", "5000"]),
        ];
        let table = tiers_from_records(&rows).unwrap();
        assert_eq!(table.rows()[1].threshold, Money::new(dec!(15000)));
    }

    #[test]
    fn unordered_records_are_sorted() {
        let rows = vec![
            row(&["20000", "2500", "5000"]),
            row(&["0", "0", "0"]),
            row(&["15000", "2000", "4000"]),
        ];
        let table = tiers_from_records(&rows).unwrap();
        assert_eq!(table.rows()[0].threshold, Money::zero());
        assert_eq!(table.rows()[2].threshold, Money::new(dec!(20000)));
    }

    #[test]
    fn rejects_records_without_zero_base() {
        let rows = vec![row(&["15000", "2000", "4000"])];
        assert!(matches!(
            tiers_from_records(&rows),
            Err(TierTableError::MissingZeroBase { .. })
        ));
    }

    #[test]
    fn rejects_all_junk_records() {
        let rows = vec![row(&["header only"]), row(&["still not a number"])];
        assert_eq!(tiers_from_records(&rows), Err(TierTableError::Empty));
    }

    #[test]
    fn rejects_duplicate_thresholds() {
        let rows = vec![
            row(&["0", "0", "0"]),
            row(&["15000", "2000", "4000"]),
            row(&["$15,000", "2500", "5000"]),
        ];
        assert!(matches!(
            tiers_from_records(&rows),
            Err(TierTableError::DuplicateThreshold { .. })
        ));
    }
}
