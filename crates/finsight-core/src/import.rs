//! Transaction fixture loading
//!
//! Parses the canonical CSV and JSON transaction formats used by the CLI
//! and by tests. The loader is also where the signed-amount convention is
//! enforced: income amounts must be non-negative, and expense rows that
//! arrive as positive magnitudes are normalized to negative so that the
//! rest of the engine sees one convention only.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{Transaction, TransactionKind};

/// Parse transactions from canonical CSV.
///
/// Expected header: `id,user_id,date,description,category,kind,amount`
/// with ISO dates (`YYYY-MM-DD`) and decimal amounts.
pub fn parse_csv<R: Read>(reader: R) -> Result<Vec<Transaction>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut transactions = Vec::new();
    for record in csv_reader.deserialize() {
        let tx: Transaction = record?;
        transactions.push(normalize_sign(tx)?);
    }

    debug!(count = transactions.len(), "Parsed CSV fixture");
    Ok(transactions)
}

/// Parse transactions from a JSON array
pub fn parse_json<R: Read>(reader: R) -> Result<Vec<Transaction>> {
    let raw: Vec<Transaction> = serde_json::from_reader(reader)?;
    let transactions = raw
        .into_iter()
        .map(normalize_sign)
        .collect::<Result<Vec<_>>>()?;

    debug!(count = transactions.len(), "Parsed JSON fixture");
    Ok(transactions)
}

/// Load a fixture file, dispatching on its extension (.csv or .json)
pub fn load_fixture(path: &Path) -> Result<Vec<Transaction>> {
    let file = File::open(path)?;
    match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => parse_csv(file),
        Some("json") => parse_json(file),
        other => Err(Error::InvalidData(format!(
            "Unsupported fixture format: {} (expected .csv or .json)",
            other.unwrap_or("none")
        ))),
    }
}

/// Enforce the signed-amount convention on one transaction.
///
/// Expense magnitudes (positive amounts on expense rows) are flipped to
/// negative. Negative income amounts are rejected rather than guessed at.
fn normalize_sign(mut tx: Transaction) -> Result<Transaction> {
    match tx.kind {
        TransactionKind::Income => {
            if tx.amount.is_sign_negative() && !tx.amount.is_zero() {
                return Err(Error::InvalidData(format!(
                    "Transaction {}: income amount {} is negative",
                    tx.id, tx.amount
                )));
            }
        }
        TransactionKind::Expense => {
            if tx.amount.is_sign_positive() && !tx.amount.is_zero() {
                debug!(id = tx.id, "Normalizing positive expense magnitude to signed amount");
                tx.amount = -tx.amount;
            }
        }
    }
    Ok(tx)
}
