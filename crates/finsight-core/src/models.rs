//! Domain models for Finsight

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A dated monetary transaction.
///
/// Amounts are signed: income amounts are >= 0 and expense amounts are <= 0.
/// Absolute values are derived at presentation time only; reports never
/// change the stored sign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub user_id: String,
    pub amount: Decimal,
    pub category: String,
    pub kind: TransactionKind,
    pub date: NaiveDate,
    #[serde(default)]
    pub description: String,
}

impl Transaction {
    /// Magnitude of the amount, for presentation and statistics
    pub fn magnitude(&self) -> Decimal {
        self.amount.abs()
    }
}

/// Whether a transaction adds to or draws from the balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl std::str::FromStr for TransactionKind {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            _ => Err(Error::InvalidData(format!(
                "Unknown transaction kind: {} (valid: income, expense)",
                s
            ))),
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Period size used to bucket transactions for aggregation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Granularity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }
}

impl std::str::FromStr for Granularity {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            "yearly" => Ok(Self::Yearly),
            _ => Err(Error::InvalidGranularity(s.to_string())),
        }
    }
}

impl std::fmt::Display for Granularity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Optional filters applied when fetching transactions from a source
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionFilter {
    /// Restrict to these categories (exact match)
    pub categories: Option<Vec<String>>,
    /// Minimum absolute amount
    pub min_amount: Option<Decimal>,
    /// Maximum absolute amount
    pub max_amount: Option<Decimal>,
    /// Restrict to these kinds
    pub kinds: Option<Vec<TransactionKind>>,
}

impl TransactionFilter {
    /// Whether a transaction passes every set filter.
    ///
    /// Amount bounds compare against the magnitude so that the same filter
    /// works for signed expense amounts and income amounts alike.
    pub fn matches(&self, tx: &Transaction) -> bool {
        if let Some(categories) = &self.categories {
            if !categories.iter().any(|c| c == &tx.category) {
                return false;
            }
        }
        if let Some(min) = self.min_amount {
            if tx.magnitude() < min {
                return false;
            }
        }
        if let Some(max) = self.max_amount {
            if tx.magnitude() > max {
                return false;
            }
        }
        if let Some(kinds) = &self.kinds {
            if !kinds.contains(&tx.kind) {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn tx(amount: Decimal, category: &str, kind: TransactionKind) -> Transaction {
        Transaction {
            id: 1,
            user_id: "u1".to_string(),
            amount,
            category: category.to_string(),
            kind,
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            description: "".to_string(),
        }
    }

    #[test]
    fn test_granularity_round_trip() {
        for g in [
            Granularity::Daily,
            Granularity::Weekly,
            Granularity::Monthly,
            Granularity::Yearly,
        ] {
            let parsed: Granularity = g.as_str().parse().unwrap();
            assert_eq!(parsed, g);
        }
    }

    #[test]
    fn test_granularity_rejects_unknown() {
        let err = "fortnightly".parse::<Granularity>().unwrap_err();
        assert!(matches!(err, Error::InvalidGranularity(_)));
    }

    #[test]
    fn test_filter_amount_bounds_use_magnitude() {
        let filter = TransactionFilter {
            min_amount: Some(dec!(10)),
            max_amount: Some(dec!(100)),
            ..Default::default()
        };

        // -50 expense has magnitude 50, inside the bounds
        assert!(filter.matches(&tx(dec!(-50), "food", TransactionKind::Expense)));
        assert!(!filter.matches(&tx(dec!(-5), "food", TransactionKind::Expense)));
        assert!(!filter.matches(&tx(dec!(500), "salary", TransactionKind::Income)));
    }

    #[test]
    fn test_filter_categories_and_kinds() {
        let filter = TransactionFilter {
            categories: Some(vec!["food".to_string()]),
            kinds: Some(vec![TransactionKind::Expense]),
            ..Default::default()
        };

        assert!(filter.matches(&tx(dec!(-30), "food", TransactionKind::Expense)));
        assert!(!filter.matches(&tx(dec!(-30), "transport", TransactionKind::Expense)));
        assert!(!filter.matches(&tx(dec!(30), "food", TransactionKind::Income)));
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = TransactionFilter::default();
        assert!(filter.matches(&tx(dec!(-30), "food", TransactionKind::Expense)));
        assert!(filter.matches(&tx(dec!(1000), "salary", TransactionKind::Income)));
    }
}
