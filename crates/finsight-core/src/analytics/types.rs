//! Report types produced by the analytics engine
//!
//! These are the four output views consumed by whatever presentation
//! layer sits in front of the engine. All of them are computed per
//! request and never persisted.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::Granularity;

use super::aggregate::AggregateBucket;
use super::anomaly::AnomalyRecord;
use super::cashflow::CashFlowPoint;
use super::categories::CategorySummary;
use super::velocity::VelocityReport;

/// Expense summary with ranked category breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseSummary {
    pub granularity: Granularity,
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub net_amount: Decimal,
    pub category_breakdown: Vec<CategorySummary>,
    pub transaction_count: u64,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
}

/// Whole-range statistics accompanying a timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub net_amount: Decimal,
    pub avg_income_per_period: Decimal,
    pub avg_expenses_per_period: Decimal,
    pub total_transactions: u64,
}

/// Period-bucketed activity over a date range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    pub granularity: Granularity,
    pub buckets: Vec<AggregateBucket>,
    pub summary_stats: SummaryStats,
}

/// Running balances across a gapless period sequence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashFlow {
    pub granularity: Granularity,
    pub points: Vec<CashFlowPoint>,
    pub starting_balance: Decimal,
    pub ending_balance: Decimal,
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub net_cash_flow: Decimal,
}

/// Spending velocity report together with flagged anomalies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VelocityAndAnomalies {
    pub velocity: VelocityReport,
    pub anomalies: Vec<AnomalyRecord>,
}
