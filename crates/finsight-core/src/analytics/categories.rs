//! Category ranking
//!
//! Sorts category totals and annotates them with share-of-total
//! percentages and per-transaction averages. Ordering is deterministic:
//! descending by total, ties broken by category name ascending.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Transaction, TransactionKind};

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Accumulated total and count for one category
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CategoryTotal {
    pub total: Decimal,
    pub count: u64,
}

/// One ranked category in a summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub category: String,
    pub total_amount: Decimal,
    pub transaction_count: u64,
    pub percentage_of_total: Decimal,
    pub avg_amount: Decimal,
}

/// Collect per-category magnitudes and counts for one transaction kind.
///
/// Categories never enter the map with a zero count, which is what lets
/// `rank_categories` divide by the count without a guard.
pub fn collect_category_totals(
    transactions: &[Transaction],
    kind: TransactionKind,
) -> BTreeMap<String, CategoryTotal> {
    let mut totals: BTreeMap<String, CategoryTotal> = BTreeMap::new();

    for tx in transactions.iter().filter(|tx| tx.kind == kind) {
        let entry = totals.entry(tx.category.clone()).or_default();
        entry.total += tx.magnitude();
        entry.count += 1;
    }

    totals
}

/// Rank category totals descending, with percentages and averages.
///
/// Percentages are exact decimals; the last ranked entry absorbs the
/// division remainder so the percentages of one kind always total exactly
/// 100. A zero grand total yields all-zero percentages instead of a
/// division fault.
pub fn rank_categories(totals: &BTreeMap<String, CategoryTotal>) -> Vec<CategorySummary> {
    let grand_total: Decimal = totals.values().map(|t| t.total).sum();

    let mut ranked: Vec<(&String, &CategoryTotal)> = totals.iter().collect();
    // BTreeMap iteration is already name-ascending, so a stable sort by
    // total leaves ties alphabetical
    ranked.sort_by(|a, b| b.1.total.cmp(&a.1.total));

    let mut summaries = Vec::with_capacity(ranked.len());
    let mut assigned = Decimal::ZERO;

    for (i, (category, total)) in ranked.iter().enumerate() {
        let percentage = if grand_total.is_zero() {
            Decimal::ZERO
        } else if i == ranked.len() - 1 {
            HUNDRED - assigned
        } else {
            total.total / grand_total * HUNDRED
        };
        assigned += percentage;

        summaries.push(CategorySummary {
            category: (*category).clone(),
            total_amount: total.total,
            transaction_count: total.count,
            percentage_of_total: percentage,
            // count >= 1 for any category present in the map
            avg_amount: total.total / Decimal::from(total.count),
        });
    }

    summaries
}
