//! Transaction analytics engine
//!
//! Turns a raw, unordered list of dated transactions into:
//! - Period-bucketed aggregates (daily/weekly/monthly/yearly)
//! - Ranked category breakdowns with percentages and averages
//! - Running cash-flow balances across gapless period sequences
//! - Spending velocity and trend classification
//! - Statistical spending anomalies (mean + 2 stddev rule)
//!
//! Everything here is a pure function of its inputs: no I/O, no shared
//! mutable state, no locks. The only sequential dependency is the
//! cash-flow balance fold; independent users' reports can run on
//! separate threads with no coordination.

pub mod aggregate;
pub mod anomaly;
pub mod bucket;
pub mod cashflow;
pub mod categories;
pub mod engine;
pub mod types;
pub mod velocity;

pub use aggregate::{aggregate, AggregateBucket};
pub use anomaly::{detect_anomalies, AnomalyRecord};
pub use bucket::period_starts;
pub use cashflow::{propagate, CashFlowPoint};
pub use categories::{collect_category_totals, rank_categories, CategorySummary, CategoryTotal};
pub use engine::AnalyticsEngine;
pub use types::{CashFlow, ExpenseSummary, SummaryStats, Timeline, VelocityAndAnomalies};
pub use velocity::{velocity, Trend, VelocityReport};
