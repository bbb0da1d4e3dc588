//! Expected-return tier table and lookup.
//!
//! An ordered list of FMV breakpoints, each carrying the target dollar return
//! for the purchase and wholesale channels. A lookup resolves an FMV to the
//! highest row at or below it (a step/floor function over the threshold axis).
//!
//! Tables are validated eagerly at construction. A table that reaches a
//! lookup is always non-empty, strictly increasing, and zero-based, so every
//! FMV >= 0 resolves to a row.

use crate::types::{Money, OfferKind};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

// 2.0: one breakpoint. applies to every FMV from `threshold` up to the next row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierRow {
    pub threshold: Money,
    pub purchase_return: Money,
    pub wholesale_return: Money,
}

impl TierRow {
    pub fn new(threshold: Decimal, purchase_return: Decimal, wholesale_return: Decimal) -> Self {
        Self {
            threshold: Money::new(threshold),
            purchase_return: Money::new(purchase_return),
            wholesale_return: Money::new(wholesale_return),
        }
    }

    pub fn expected(&self, kind: OfferKind) -> Money {
        match kind {
            OfferKind::Purchase => self.purchase_return,
            OfferKind::Wholesale => self.wholesale_return,
        }
    }
}

// 2.1: the validated table. immutable once built; the engine borrows it per
// computation and never mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierTable {
    rows: Vec<TierRow>,
}

impl TierTable {
    /// Validate rows as given: non-empty, strictly increasing thresholds,
    /// first threshold at zero. Fails at load time, never at lookup time.
    pub fn new(rows: Vec<TierRow>) -> Result<Self, TierTableError> {
        if rows.is_empty() {
            return Err(TierTableError::Empty);
        }
        if !rows[0].threshold.is_zero() {
            return Err(TierTableError::MissingZeroBase {
                first: rows[0].threshold,
            });
        }
        for pair in rows.windows(2) {
            if pair[1].threshold == pair[0].threshold {
                return Err(TierTableError::DuplicateThreshold {
                    threshold: pair[0].threshold,
                });
            }
            if pair[1].threshold < pair[0].threshold {
                return Err(TierTableError::UnsortedThreshold {
                    threshold: pair[1].threshold,
                    after: pair[0].threshold,
                });
            }
        }
        Ok(Self { rows })
    }

    /// Sort rows by threshold first, then validate. This is the construction
    /// path for externally sourced tier lists, which arrive in no particular
    /// order.
    pub fn from_unsorted(mut rows: Vec<TierRow>) -> Result<Self, TierTableError> {
        rows.sort_by_key(|r| r.threshold);
        Self::new(rows)
    }

    /// The built-in default table, used when no external source is available.
    pub fn builtin() -> Self {
        let rows = vec![
            TierRow::new(dec!(0), dec!(0), dec!(0)),
            TierRow::new(dec!(15000), dec!(2000), dec!(4000)),
            TierRow::new(dec!(20000), dec!(2500), dec!(5000)),
            TierRow::new(dec!(25000), dec!(3000), dec!(6000)),
            TierRow::new(dec!(30000), dec!(4000), dec!(7000)),
            TierRow::new(dec!(35000), dec!(5000), dec!(7500)),
            TierRow::new(dec!(40000), dec!(5500), dec!(8500)),
            TierRow::new(dec!(50000), dec!(7000), dec!(10000)),
            TierRow::new(dec!(60000), dec!(8000), dec!(12000)),
            TierRow::new(dec!(80000), dec!(10000), dec!(15000)),
            TierRow::new(dec!(100000), dec!(12500), dec!(20000)),
            TierRow::new(dec!(150000), dec!(17500), dec!(25000)),
            TierRow::new(dec!(200000), dec!(20000), dec!(30000)),
            TierRow::new(dec!(250000), dec!(22500), dec!(35000)),
            TierRow::new(dec!(300000), dec!(25000), dec!(40000)),
            TierRow::new(dec!(400000), dec!(30000), dec!(50000)),
            TierRow::new(dec!(500000), dec!(35000), dec!(60000)),
        ];
        // the builtin rows satisfy every invariant
        Self { rows }
    }

    pub fn rows(&self) -> &[TierRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Target dollar return for `fmv` on the given channel: the return column
    /// of the highest row whose threshold is at or below `fmv`.
    ///
    /// Returns zero when no row matches, which for a valid (zero-based) table
    /// only happens for negative FMV. Tables are tens of rows at most, so the
    /// linear scan is fine.
    pub fn expected_return(&self, fmv: Money, kind: OfferKind) -> Money {
        for row in self.rows.iter().rev() {
            if fmv >= row.threshold {
                return row.expected(kind);
            }
        }
        Money::zero()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TierTableError {
    #[error("Tier table has no rows")]
    Empty,

    #[error("First threshold must be 0, got {first}")]
    MissingZeroBase { first: Money },

    #[error("Duplicate threshold {threshold}")]
    DuplicateThreshold { threshold: Money },

    #[error("Threshold {threshold} out of order after {after}")]
    UnsortedThreshold { threshold: Money, after: Money },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn money(v: Decimal) -> Money {
        Money::new(v)
    }

    #[test]
    fn builtin_table_is_valid() {
        let table = TierTable::builtin();
        assert_eq!(table.len(), 17);
        assert!(TierTable::new(table.rows().to_vec()).is_ok());
    }

    #[test]
    fn lookup_exact_threshold() {
        let table = TierTable::builtin();
        // landing exactly on a breakpoint takes that row
        assert_eq!(
            table.expected_return(money(dec!(100000)), OfferKind::Purchase),
            money(dec!(12500))
        );
        assert_eq!(
            table.expected_return(money(dec!(100000)), OfferKind::Wholesale),
            money(dec!(20000))
        );
    }

    #[test]
    fn lookup_between_thresholds_takes_floor() {
        let table = TierTable::builtin();
        // 120k sits between the 100k and 150k rows; the 100k row governs
        assert_eq!(
            table.expected_return(money(dec!(120000)), OfferKind::Purchase),
            money(dec!(12500))
        );
    }

    #[test]
    fn lookup_above_top_threshold() {
        let table = TierTable::builtin();
        // everything past the last row uses the last row
        assert_eq!(
            table.expected_return(money(dec!(2000000)), OfferKind::Wholesale),
            money(dec!(60000))
        );
    }

    #[test]
    fn lookup_at_zero_takes_first_row() {
        let table = TierTable::builtin();
        assert_eq!(
            table.expected_return(Money::zero(), OfferKind::Purchase),
            money(dec!(0))
        );
    }

    #[test]
    fn lookup_negative_fmv_returns_zero() {
        let table = TierTable::builtin();
        assert_eq!(
            table.expected_return(money(dec!(-50000)), OfferKind::Purchase),
            Money::zero()
        );
    }

    #[test]
    fn rejects_empty_table() {
        assert_eq!(TierTable::new(vec![]), Err(TierTableError::Empty));
    }

    #[test]
    fn rejects_nonzero_base() {
        let rows = vec![TierRow::new(dec!(15000), dec!(2000), dec!(4000))];
        assert!(matches!(
            TierTable::new(rows),
            Err(TierTableError::MissingZeroBase { .. })
        ));
    }

    #[test]
    fn rejects_duplicate_threshold() {
        let rows = vec![
            TierRow::new(dec!(0), dec!(0), dec!(0)),
            TierRow::new(dec!(15000), dec!(2000), dec!(4000)),
            TierRow::new(dec!(15000), dec!(2500), dec!(5000)),
        ];
        assert!(matches!(
            TierTable::new(rows),
            Err(TierTableError::DuplicateThreshold { .. })
        ));
    }

    #[test]
    fn rejects_unsorted_rows() {
        let rows = vec![
            TierRow::new(dec!(0), dec!(0), dec!(0)),
            TierRow::new(dec!(20000), dec!(2500), dec!(5000)),
            TierRow::new(dec!(15000), dec!(2000), dec!(4000)),
        ];
        assert!(matches!(
            TierTable::new(rows),
            Err(TierTableError::UnsortedThreshold { .. })
        ));
    }

    #[test]
    fn from_unsorted_sorts_then_validates() {
        let rows = vec![
            TierRow::new(dec!(20000), dec!(2500), dec!(5000)),
            TierRow::new(dec!(0), dec!(0), dec!(0)),
            TierRow::new(dec!(15000), dec!(2000), dec!(4000)),
        ];
        let table = TierTable::from_unsorted(rows).unwrap();
        assert_eq!(table.rows()[0].threshold, Money::zero());
        assert_eq!(
            table.expected_return(money(dec!(16000)), OfferKind::Purchase),
            money(dec!(2000))
        );
    }
}
