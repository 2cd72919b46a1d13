//! Transaction aggregation into period buckets
//!
//! Folds an unordered transaction list into per-period totals. All
//! accumulation is associative and commutative decimal addition, so the
//! input order never affects the result. When an explicit date range is
//! supplied, every period in the range is materialized even with zero
//! activity; the cash-flow propagator depends on that gapless sequence.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{Granularity, Transaction, TransactionKind};

use super::bucket::period_starts;

/// Per-period totals for one bucket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateBucket {
    /// First day of the period
    pub period_start: NaiveDate,
    /// Sum of income amounts in the period
    pub total_income: Decimal,
    /// Sum of expense magnitudes in the period (always >= 0)
    pub total_expenses: Decimal,
    /// total_income - total_expenses
    pub net_amount: Decimal,
    /// Number of transactions in the period, both kinds
    pub transaction_count: u64,
    /// Expense magnitude per category; sums exactly to total_expenses
    pub expense_categories: BTreeMap<String, Decimal>,
    /// Income amount per category; sums exactly to total_income
    pub income_categories: BTreeMap<String, Decimal>,
    /// Largest single expense magnitude, zero when there are none
    pub largest_expense: Decimal,
    /// Largest single income amount, zero when there are none
    pub largest_income: Decimal,
}

impl AggregateBucket {
    /// An empty bucket with all totals at zero
    pub fn empty(period_start: NaiveDate) -> Self {
        Self {
            period_start,
            total_income: Decimal::ZERO,
            total_expenses: Decimal::ZERO,
            net_amount: Decimal::ZERO,
            transaction_count: 0,
            expense_categories: BTreeMap::new(),
            income_categories: BTreeMap::new(),
            largest_expense: Decimal::ZERO,
            largest_income: Decimal::ZERO,
        }
    }

    fn add(&mut self, tx: &Transaction) {
        match tx.kind {
            TransactionKind::Income => {
                self.total_income += tx.amount;
                *self
                    .income_categories
                    .entry(tx.category.clone())
                    .or_insert(Decimal::ZERO) += tx.amount;
                self.largest_income = self.largest_income.max(tx.magnitude());
            }
            TransactionKind::Expense => {
                let magnitude = tx.magnitude();
                self.total_expenses += magnitude;
                *self
                    .expense_categories
                    .entry(tx.category.clone())
                    .or_insert(Decimal::ZERO) += magnitude;
                self.largest_expense = self.largest_expense.max(magnitude);
            }
        }
        self.transaction_count += 1;
        self.net_amount = self.total_income - self.total_expenses;
    }
}

/// Fold transactions into ordered per-period buckets.
///
/// Without a range, only periods that contain at least one transaction
/// appear (an empty input yields an empty list). With a range, every
/// period in `[start, end]` is present, zero-valued when inactive, and
/// transactions dated outside the range are skipped. Buckets are sorted
/// ascending by period start.
pub fn aggregate(
    transactions: &[Transaction],
    granularity: Granularity,
    range: Option<(NaiveDate, NaiveDate)>,
) -> Result<Vec<AggregateBucket>> {
    let mut buckets: BTreeMap<NaiveDate, AggregateBucket> = BTreeMap::new();

    if let Some((start, end)) = range {
        if end < start {
            return Err(Error::InvalidRange { start, end });
        }
        for period_start in period_starts(granularity, start, end) {
            buckets.insert(period_start, AggregateBucket::empty(period_start));
        }
    }

    let mut skipped = 0usize;
    for tx in transactions {
        if let Some((start, end)) = range {
            if tx.date < start || tx.date > end {
                skipped += 1;
                continue;
            }
        }
        let key = granularity.bucket_key(tx.date);
        buckets
            .entry(key)
            .or_insert_with(|| AggregateBucket::empty(key))
            .add(tx);
    }

    if skipped > 0 {
        debug!(skipped, "Skipped transactions outside the requested range");
    }
    debug!(
        granularity = granularity.as_str(),
        buckets = buckets.len(),
        transactions = transactions.len(),
        "Aggregation complete"
    );

    Ok(buckets.into_values().collect())
}
