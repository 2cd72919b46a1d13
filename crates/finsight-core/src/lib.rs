//! Finsight Core Library
//!
//! Shared functionality for the Finsight transaction analytics tool:
//! - Period bucketing (daily/weekly/monthly/yearly) and aggregation
//! - Category ranking with exact-decimal percentages
//! - Running cash-flow balance propagation
//! - Spending velocity and trend classification
//! - Statistical spending anomaly detection
//! - Transaction source port with fixture-file loaders
//!
//! All monetary values are `rust_decimal::Decimal`; binary floating
//! point is never used in amount paths, so category sums reconcile
//! exactly against period totals.

pub mod analytics;
pub mod error;
pub mod import;
pub mod models;
pub mod source;

pub use analytics::{
    aggregate, collect_category_totals, detect_anomalies, period_starts, propagate,
    rank_categories, velocity, AggregateBucket, AnalyticsEngine, AnomalyRecord, CashFlow,
    CashFlowPoint, CategorySummary, CategoryTotal, ExpenseSummary, SummaryStats, Timeline, Trend,
    VelocityAndAnomalies, VelocityReport,
};
pub use error::{Error, Result};
pub use import::{load_fixture, parse_csv, parse_json};
pub use models::{Granularity, Transaction, TransactionFilter, TransactionKind};
pub use source::{MemorySource, TransactionSource};
