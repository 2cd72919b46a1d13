//! Transaction source port
//!
//! The engine consumes exactly one external interface: something that
//! returns a user's transactions for a date range, optionally filtered.
//! Whether that is a database, a remote service, or a fixture file is
//! the implementor's concern; the engine never performs I/O itself.

use chrono::NaiveDate;

use crate::error::Result;
use crate::models::{Transaction, TransactionFilter};

/// Supplies ordered transactions for a user within a date range
pub trait TransactionSource {
    /// Fetch transactions for `user_id` with `start <= date <= end`,
    /// matching every set filter, ordered ascending by `(date, id)`.
    fn fetch_transactions(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
        filter: &TransactionFilter,
    ) -> Result<Vec<Transaction>>;
}

/// In-memory transaction source backed by a Vec.
///
/// Used by tests and by the CLI after loading a fixture file.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    transactions: Vec<Transaction>,
}

impl MemorySource {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

impl TransactionSource for MemorySource {
    fn fetch_transactions(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
        filter: &TransactionFilter,
    ) -> Result<Vec<Transaction>> {
        let mut matched: Vec<Transaction> = self
            .transactions
            .iter()
            .filter(|tx| {
                tx.user_id == user_id
                    && tx.date >= start
                    && tx.date <= end
                    && filter.matches(tx)
            })
            .cloned()
            .collect();

        matched.sort_by(|a, b| a.date.cmp(&b.date).then(a.id.cmp(&b.id)));
        Ok(matched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionKind;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn tx(id: i64, user: &str, date: NaiveDate, amount: Decimal, category: &str) -> Transaction {
        let kind = if amount >= Decimal::ZERO {
            TransactionKind::Income
        } else {
            TransactionKind::Expense
        };
        Transaction {
            id,
            user_id: user.to_string(),
            amount,
            category: category.to_string(),
            kind,
            date,
            description: "".to_string(),
        }
    }

    #[test]
    fn test_filters_by_user_and_range() {
        let source = MemorySource::new(vec![
            tx(1, "alice", date(2024, 1, 5), dec!(-30), "food"),
            tx(2, "bob", date(2024, 1, 5), dec!(-40), "food"),
            tx(3, "alice", date(2024, 2, 5), dec!(-50), "food"),
        ]);

        let result = source
            .fetch_transactions(
                "alice",
                date(2024, 1, 1),
                date(2024, 1, 31),
                &TransactionFilter::default(),
            )
            .unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 1);
    }

    #[test]
    fn test_returns_ordered_by_date_then_id() {
        let source = MemorySource::new(vec![
            tx(5, "alice", date(2024, 1, 9), dec!(-10), "food"),
            tx(2, "alice", date(2024, 1, 5), dec!(-10), "food"),
            tx(1, "alice", date(2024, 1, 9), dec!(-10), "food"),
        ]);

        let result = source
            .fetch_transactions(
                "alice",
                date(2024, 1, 1),
                date(2024, 1, 31),
                &TransactionFilter::default(),
            )
            .unwrap();

        let ids: Vec<i64> = result.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 1, 5]);
    }

    #[test]
    fn test_applies_filters() {
        let source = MemorySource::new(vec![
            tx(1, "alice", date(2024, 1, 5), dec!(-30), "food"),
            tx(2, "alice", date(2024, 1, 6), dec!(-500), "rent"),
            tx(3, "alice", date(2024, 1, 7), dec!(2000), "salary"),
        ]);

        let filter = TransactionFilter {
            kinds: Some(vec![TransactionKind::Expense]),
            max_amount: Some(dec!(100)),
            ..Default::default()
        };
        let result = source
            .fetch_transactions("alice", date(2024, 1, 1), date(2024, 1, 31), &filter)
            .unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].category, "food");
    }
}
