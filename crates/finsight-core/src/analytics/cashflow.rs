//! Running cash-flow balances
//!
//! Walks period buckets chronologically and turns per-period net deltas
//! into opening/closing running balances. The fold is inherently
//! sequential; callers must supply the gapless, ordered bucket sequence
//! produced by aggregation with an explicit range, otherwise silently
//! missing periods would distort the running balance.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::aggregate::AggregateBucket;

/// One period's balance movement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashFlowPoint {
    pub period_start: NaiveDate,
    pub opening_balance: Decimal,
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub closing_balance: Decimal,
    pub net_change: Decimal,
}

/// Propagate a starting balance through ordered period buckets.
///
/// Each point opens at the previous point's closing balance; the first
/// opens at `starting_balance`. Zero-activity periods carry the balance
/// through unchanged.
pub fn propagate(buckets: &[AggregateBucket], starting_balance: Decimal) -> Vec<CashFlowPoint> {
    let mut points = Vec::with_capacity(buckets.len());
    let mut balance = starting_balance;

    for bucket in buckets {
        let net_change = bucket.total_income - bucket.total_expenses;
        let closing = balance + net_change;

        points.push(CashFlowPoint {
            period_start: bucket.period_start,
            opening_balance: balance,
            total_income: bucket.total_income,
            total_expenses: bucket.total_expenses,
            closing_balance: closing,
            net_change,
        });

        balance = closing;
    }

    points
}
