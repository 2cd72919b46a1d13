//! Summary assembler
//!
//! Composes bucketing, aggregation, ranking, balance propagation, and
//! anomaly detection into the four report views. Every method is a pure
//! function of the fetched transactions: no state survives a call, and
//! independent invocations never observe each other.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{Granularity, TransactionFilter, TransactionKind};
use crate::source::TransactionSource;

use super::aggregate::aggregate;
use super::anomaly::detect_anomalies;
use super::cashflow::propagate;
use super::categories::{collect_category_totals, rank_categories};
use super::types::{CashFlow, ExpenseSummary, SummaryStats, Timeline, VelocityAndAnomalies};
use super::velocity::velocity;

/// Analytics engine over a transaction source.
///
/// Borrows the source for its lifetime; every report method validates
/// the requested range, fetches through the port, and computes the view
/// from scratch.
pub struct AnalyticsEngine<'a, S: TransactionSource> {
    source: &'a S,
}

impl<'a, S: TransactionSource> AnalyticsEngine<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Expense summary with ranked category breakdown for a date range
    pub fn expense_summary(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
        granularity: Granularity,
        filter: &TransactionFilter,
    ) -> Result<ExpenseSummary> {
        check_range(start, end)?;
        let transactions = self.source.fetch_transactions(user_id, start, end, filter)?;

        let total_income: Decimal = transactions
            .iter()
            .filter(|tx| tx.kind == TransactionKind::Income)
            .map(|tx| tx.amount)
            .sum();
        let total_expenses: Decimal = transactions
            .iter()
            .filter(|tx| tx.kind == TransactionKind::Expense)
            .map(|tx| tx.magnitude())
            .sum();

        let expense_totals = collect_category_totals(&transactions, TransactionKind::Expense);
        let category_breakdown = rank_categories(&expense_totals);

        debug!(
            user_id,
            transactions = transactions.len(),
            categories = category_breakdown.len(),
            "Expense summary assembled"
        );

        Ok(ExpenseSummary {
            granularity,
            total_income,
            total_expenses,
            net_amount: total_income - total_expenses,
            category_breakdown,
            transaction_count: transactions.len() as u64,
            period_start: start,
            period_end: end,
        })
    }

    /// Period-bucketed timeline with whole-range summary statistics
    pub fn timeline(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
        granularity: Granularity,
        filter: &TransactionFilter,
    ) -> Result<Timeline> {
        check_range(start, end)?;
        let transactions = self.source.fetch_transactions(user_id, start, end, filter)?;
        let buckets = aggregate(&transactions, granularity, Some((start, end)))?;

        let total_income: Decimal = buckets.iter().map(|b| b.total_income).sum();
        let total_expenses: Decimal = buckets.iter().map(|b| b.total_expenses).sum();
        let total_transactions: u64 = buckets.iter().map(|b| b.transaction_count).sum();
        let periods = Decimal::from(buckets.len() as u64);

        // A valid range always materializes at least one bucket, but the
        // zero-denominator policy holds regardless
        let (avg_income, avg_expenses) = if buckets.is_empty() {
            (Decimal::ZERO, Decimal::ZERO)
        } else {
            (total_income / periods, total_expenses / periods)
        };

        Ok(Timeline {
            granularity,
            buckets,
            summary_stats: SummaryStats {
                total_income,
                total_expenses,
                net_amount: total_income - total_expenses,
                avg_income_per_period: avg_income,
                avg_expenses_per_period: avg_expenses,
                total_transactions,
            },
        })
    }

    /// Running cash-flow balances over a gapless period sequence
    pub fn cash_flow(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
        granularity: Granularity,
        starting_balance: Decimal,
    ) -> Result<CashFlow> {
        check_range(start, end)?;
        let transactions = self.source.fetch_transactions(
            user_id,
            start,
            end,
            &TransactionFilter::default(),
        )?;

        // The explicit range materializes zero-activity periods, which the
        // balance fold depends on
        let buckets = aggregate(&transactions, granularity, Some((start, end)))?;
        let points = propagate(&buckets, starting_balance);

        let total_income: Decimal = points.iter().map(|p| p.total_income).sum();
        let total_expenses: Decimal = points.iter().map(|p| p.total_expenses).sum();
        let ending_balance = points
            .last()
            .map_or(starting_balance, |p| p.closing_balance);

        Ok(CashFlow {
            granularity,
            points,
            starting_balance,
            ending_balance,
            total_income,
            total_expenses,
            net_cash_flow: total_income - total_expenses,
        })
    }

    /// Spending velocity classification plus statistical anomalies
    pub fn velocity_and_anomalies(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<VelocityAndAnomalies> {
        check_range(start, end)?;
        let transactions = self.source.fetch_transactions(
            user_id,
            start,
            end,
            &TransactionFilter::default(),
        )?;

        // Valid ranges span at least one day, so the window is never zero
        let window_days = (end - start).num_days() as u32 + 1;
        let daily_buckets = aggregate(&transactions, Granularity::Daily, Some((start, end)))?;

        Ok(VelocityAndAnomalies {
            velocity: velocity(&daily_buckets, window_days),
            anomalies: detect_anomalies(&transactions),
        })
    }
}

fn check_range(start: NaiveDate, end: NaiveDate) -> Result<()> {
    if end < start {
        return Err(Error::InvalidRange { start, end });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::velocity::Trend;
    use crate::models::Transaction;
    use crate::source::MemorySource;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn tx(id: i64, date: NaiveDate, amount: Decimal, category: &str) -> Transaction {
        let kind = if amount >= Decimal::ZERO {
            TransactionKind::Income
        } else {
            TransactionKind::Expense
        };
        Transaction {
            id,
            user_id: "alice".to_string(),
            amount,
            category: category.to_string(),
            kind,
            date,
            description: "".to_string(),
        }
    }

    fn sample_source() -> MemorySource {
        MemorySource::new(vec![
            tx(1, date(2024, 1, 2), dec!(-30), "food"),
            tx(2, date(2024, 1, 5), dec!(1000), "salary"),
            tx(3, date(2024, 1, 9), dec!(-20), "food"),
            tx(4, date(2024, 2, 14), dec!(-120), "transport"),
            tx(5, date(2024, 3, 1), dec!(1000), "salary"),
        ])
    }

    #[test]
    fn test_expense_summary() {
        let source = sample_source();
        let engine = AnalyticsEngine::new(&source);

        let summary = engine
            .expense_summary(
                "alice",
                date(2024, 1, 1),
                date(2024, 3, 31),
                Granularity::Monthly,
                &TransactionFilter::default(),
            )
            .unwrap();

        assert_eq!(summary.total_income, dec!(2000));
        assert_eq!(summary.total_expenses, dec!(170));
        assert_eq!(summary.net_amount, dec!(1830));
        assert_eq!(summary.transaction_count, 5);
        assert_eq!(summary.category_breakdown[0].category, "transport");
        assert_eq!(summary.category_breakdown[1].category, "food");
        let pct_sum: Decimal = summary
            .category_breakdown
            .iter()
            .map(|c| c.percentage_of_total)
            .sum();
        assert_eq!(pct_sum, dec!(100));
    }

    #[test]
    fn test_timeline_materializes_quiet_months() {
        let source = sample_source();
        let engine = AnalyticsEngine::new(&source);

        let timeline = engine
            .timeline(
                "alice",
                date(2024, 1, 1),
                date(2024, 4, 30),
                Granularity::Monthly,
                &TransactionFilter::default(),
            )
            .unwrap();

        assert_eq!(timeline.buckets.len(), 4);
        assert_eq!(timeline.buckets[3].transaction_count, 0);
        assert_eq!(timeline.summary_stats.total_transactions, 5);
        assert_eq!(timeline.summary_stats.net_amount, dec!(1830));
        assert_eq!(timeline.summary_stats.avg_income_per_period, dec!(500));
    }

    #[test]
    fn test_cash_flow_chains_balances() {
        let source = sample_source();
        let engine = AnalyticsEngine::new(&source);

        let cash_flow = engine
            .cash_flow(
                "alice",
                date(2024, 1, 1),
                date(2024, 3, 31),
                Granularity::Monthly,
                dec!(500),
            )
            .unwrap();

        assert_eq!(cash_flow.points.len(), 3);
        assert_eq!(cash_flow.points[0].opening_balance, dec!(500));
        assert_eq!(cash_flow.points[0].closing_balance, dec!(1450));
        assert_eq!(cash_flow.points[1].closing_balance, dec!(1330));
        assert_eq!(cash_flow.ending_balance, dec!(2330));
        assert_eq!(cash_flow.net_cash_flow, dec!(1830));
    }

    #[test]
    fn test_velocity_and_anomalies() {
        let mut txs: Vec<Transaction> = (0..10)
            .map(|i| {
                let spent = if i < 5 { dec!(-10) } else { dec!(-15) };
                tx(i + 1, date(2024, 1, 1) + chrono::Duration::days(i), spent, "food")
            })
            .collect();
        txs.push(tx(99, date(2024, 1, 10), dec!(-2000), "electronics"));
        let source = MemorySource::new(txs);
        let engine = AnalyticsEngine::new(&source);

        let report = engine
            .velocity_and_anomalies("alice", date(2024, 1, 1), date(2024, 1, 10))
            .unwrap();

        assert_eq!(report.velocity.window_days, 10);
        assert_eq!(report.velocity.trend, Trend::Increasing);
        assert_eq!(report.anomalies.len(), 1);
        assert_eq!(report.anomalies[0].transaction_id, 99);
    }

    #[test]
    fn test_invalid_range_rejected_everywhere() {
        let source = sample_source();
        let engine = AnalyticsEngine::new(&source);
        let (start, end) = (date(2024, 2, 1), date(2024, 1, 1));
        let filter = TransactionFilter::default();

        assert!(matches!(
            engine.expense_summary("alice", start, end, Granularity::Monthly, &filter),
            Err(Error::InvalidRange { .. })
        ));
        assert!(matches!(
            engine.timeline("alice", start, end, Granularity::Monthly, &filter),
            Err(Error::InvalidRange { .. })
        ));
        assert!(matches!(
            engine.cash_flow("alice", start, end, Granularity::Monthly, Decimal::ZERO),
            Err(Error::InvalidRange { .. })
        ));
        assert!(matches!(
            engine.velocity_and_anomalies("alice", start, end),
            Err(Error::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_no_data_produces_zero_valued_views() {
        let source = MemorySource::default();
        let engine = AnalyticsEngine::new(&source);
        let (start, end) = (date(2024, 1, 1), date(2024, 1, 31));

        let summary = engine
            .expense_summary(
                "nobody",
                start,
                end,
                Granularity::Monthly,
                &TransactionFilter::default(),
            )
            .unwrap();
        assert_eq!(summary.total_expenses, Decimal::ZERO);
        assert!(summary.category_breakdown.is_empty());

        let cash_flow = engine
            .cash_flow("nobody", start, end, Granularity::Monthly, dec!(100))
            .unwrap();
        assert_eq!(cash_flow.points.len(), 1);
        assert_eq!(cash_flow.ending_balance, dec!(100));

        let report = engine.velocity_and_anomalies("nobody", start, end).unwrap();
        assert_eq!(report.velocity.trend, Trend::Stable);
        assert!(report.anomalies.is_empty());
    }
}
