//! Statistical spending anomaly detection
//!
//! Flags expense transactions whose magnitude exceeds the population mean
//! plus two population standard deviations. Deliberately a simple,
//! explainable rule rather than a learned model; results are fully
//! reproducible for a given input.

use chrono::NaiveDate;
use rust_decimal::{Decimal, MathematicalOps};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{Transaction, TransactionKind};

/// Maximum number of anomalies reported per analysis
const MAX_ANOMALIES: usize = 10;

/// Number of standard deviations above the mean that flags an expense
const DEVIATION_MULTIPLIER: Decimal = Decimal::TWO;

/// A flagged statistically unusual expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnomalyRecord {
    pub transaction_id: i64,
    /// Signed amount as stored on the transaction
    pub amount: Decimal,
    pub category: String,
    pub date: NaiveDate,
    /// Ratio of the expense magnitude to the mean expense magnitude
    pub deviation_factor: Decimal,
    /// Threshold the magnitude exceeded: mean + 2 * stddev
    pub threshold: Decimal,
}

/// Detect unusually large expenses among the given transactions.
///
/// Population statistics (divisor n) are computed over the absolute
/// expense magnitudes; income transactions are ignored. Fewer than two
/// expenses leave the standard deviation undefined and yield no
/// anomalies. Results are capped at ten, ordered by magnitude descending
/// with ties broken by transaction id ascending.
pub fn detect_anomalies(transactions: &[Transaction]) -> Vec<AnomalyRecord> {
    let expenses: Vec<&Transaction> = transactions
        .iter()
        .filter(|tx| tx.kind == TransactionKind::Expense)
        .collect();

    if expenses.len() < 2 {
        return Vec::new();
    }

    let count = Decimal::from(expenses.len() as u64);
    let mean = expenses.iter().map(|tx| tx.magnitude()).sum::<Decimal>() / count;
    let variance = expenses
        .iter()
        .map(|tx| {
            let delta = tx.magnitude() - mean;
            delta * delta
        })
        .sum::<Decimal>()
        / count;
    // Variance is non-negative, so sqrt is always defined
    let std_dev = variance.sqrt().unwrap_or(Decimal::ZERO);
    let threshold = mean + DEVIATION_MULTIPLIER * std_dev;

    let mut anomalies: Vec<AnomalyRecord> = expenses
        .iter()
        .filter(|tx| tx.magnitude() > threshold)
        .map(|tx| AnomalyRecord {
            transaction_id: tx.id,
            amount: tx.amount,
            category: tx.category.clone(),
            date: tx.date,
            deviation_factor: if mean.is_zero() {
                Decimal::ZERO
            } else {
                tx.magnitude() / mean
            },
            threshold,
        })
        .collect();

    anomalies.sort_by(|a, b| {
        b.amount
            .abs()
            .cmp(&a.amount.abs())
            .then(a.transaction_id.cmp(&b.transaction_id))
    });
    anomalies.truncate(MAX_ANOMALIES);

    debug!(
        expenses = expenses.len(),
        flagged = anomalies.len(),
        %threshold,
        "Anomaly detection complete"
    );

    anomalies
}
