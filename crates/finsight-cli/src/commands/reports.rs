//! Report command implementations

use std::path::Path;

use anyhow::Result;
use finsight_core::{AnalyticsEngine, Granularity, TransactionFilter};
use rust_decimal::Decimal;

use super::{open_source, resolve_period};

#[allow(clippy::too_many_arguments)]
pub fn cmd_summary(
    file: &Path,
    user: &str,
    granularity: Granularity,
    period: &str,
    from: Option<&str>,
    to: Option<&str>,
    categories: &[String],
    min_amount: Option<Decimal>,
    max_amount: Option<Decimal>,
    json: bool,
) -> Result<()> {
    let (from, to) = resolve_period(period, from, to)?;
    let source = open_source(file)?;
    let engine = AnalyticsEngine::new(&source);

    let filter = TransactionFilter {
        categories: if categories.is_empty() {
            None
        } else {
            Some(categories.to_vec())
        },
        min_amount,
        max_amount,
        kinds: None,
    };
    let summary = engine.expense_summary(user, from, to, granularity, &filter)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!();
    println!("📊 Expense Summary ({})", summary.granularity);
    println!(
        "   Period: {} to {}",
        summary.period_start, summary.period_end
    );
    println!("   ─────────────────────────────────────────────────────────────");

    if summary.transaction_count == 0 {
        println!("   No transactions found in this period.");
        return Ok(());
    }

    println!("   Income:   ${:.2}", summary.total_income);
    println!("   Expenses: ${:.2}", summary.total_expenses);
    println!("   Net:      ${:.2}", summary.net_amount);
    println!("   Transactions: {}", summary.transaction_count);
    println!();
    println!(
        "   {:20} │ {:>10} │ {:>6} │ {:>5} │ {:>10}",
        "Category", "Amount", "%", "Count", "Avg"
    );
    println!("   ─────────────────────┼────────────┼────────┼───────┼────────────");

    for cat in &summary.category_breakdown {
        println!(
            "   {:20} │ {:>10.2} │ {:>5.1}% │ {:>5} │ {:>10.2}",
            cat.category,
            cat.total_amount,
            cat.percentage_of_total,
            cat.transaction_count,
            cat.avg_amount
        );
    }

    Ok(())
}

pub fn cmd_timeline(
    file: &Path,
    user: &str,
    granularity: Granularity,
    period: &str,
    from: Option<&str>,
    to: Option<&str>,
    json: bool,
) -> Result<()> {
    let (from, to) = resolve_period(period, from, to)?;
    let source = open_source(file)?;
    let engine = AnalyticsEngine::new(&source);

    let timeline = engine.timeline(user, from, to, granularity, &TransactionFilter::default())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&timeline)?);
        return Ok(());
    }

    println!();
    println!("📈 Timeline ({})", timeline.granularity);
    println!("   Period: {} to {}", from, to);
    println!("   ─────────────────────────────────────────────────────────────");
    println!(
        "   {:12} │ {:>10} │ {:>10} │ {:>10} │ {:>5}",
        "Period", "Income", "Expenses", "Net", "Count"
    );
    println!("   ─────────────┼────────────┼────────────┼────────────┼───────");

    for bucket in &timeline.buckets {
        println!(
            "   {:12} │ {:>10.2} │ {:>10.2} │ {:>10.2} │ {:>5}",
            bucket.period_start.to_string(),
            bucket.total_income,
            bucket.total_expenses,
            bucket.net_amount,
            bucket.transaction_count
        );
    }

    let stats = &timeline.summary_stats;
    println!();
    println!(
        "   Totals: income ${:.2}, expenses ${:.2}, net ${:.2} over {} transactions",
        stats.total_income, stats.total_expenses, stats.net_amount, stats.total_transactions
    );
    println!(
        "   Per period: income ${:.2}, expenses ${:.2}",
        stats.avg_income_per_period, stats.avg_expenses_per_period
    );

    Ok(())
}

pub fn cmd_cashflow(
    file: &Path,
    user: &str,
    granularity: Granularity,
    period: &str,
    from: Option<&str>,
    to: Option<&str>,
    starting_balance: Decimal,
    json: bool,
) -> Result<()> {
    let (from, to) = resolve_period(period, from, to)?;
    let source = open_source(file)?;
    let engine = AnalyticsEngine::new(&source);

    let cash_flow = engine.cash_flow(user, from, to, granularity, starting_balance)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&cash_flow)?);
        return Ok(());
    }

    println!();
    println!("💰 Cash Flow ({})", cash_flow.granularity);
    println!("   Period: {} to {}", from, to);
    println!("   ─────────────────────────────────────────────────────────────");
    println!(
        "   {:12} │ {:>10} │ {:>10} │ {:>10} │ {:>10}",
        "Period", "Opening", "Income", "Expenses", "Closing"
    );
    println!("   ─────────────┼────────────┼────────────┼────────────┼────────────");

    for point in &cash_flow.points {
        println!(
            "   {:12} │ {:>10.2} │ {:>10.2} │ {:>10.2} │ {:>10.2}",
            point.period_start.to_string(),
            point.opening_balance,
            point.total_income,
            point.total_expenses,
            point.closing_balance
        );
    }

    println!();
    println!(
        "   Balance: ${:.2} -> ${:.2} (net ${:.2})",
        cash_flow.starting_balance, cash_flow.ending_balance, cash_flow.net_cash_flow
    );

    Ok(())
}

pub fn cmd_velocity(
    file: &Path,
    user: &str,
    period: &str,
    from: Option<&str>,
    to: Option<&str>,
    json: bool,
) -> Result<()> {
    let (from, to) = resolve_period(period, from, to)?;
    let source = open_source(file)?;
    let engine = AnalyticsEngine::new(&source);

    let report = engine.velocity_and_anomalies(user, from, to)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!();
    println!("🚀 Spending Velocity");
    println!("   Period: {} to {}", from, to);
    println!("   ─────────────────────────────────────────────────────────────");
    println!("   Daily average: ${:.2}", report.velocity.daily_average);
    println!("   Total spent:   ${:.2}", report.velocity.total_spent);
    println!("   Window:        {} days", report.velocity.window_days);
    println!("   Trend:         {}", report.velocity.trend);

    if report.anomalies.is_empty() {
        println!();
        println!("   No spending anomalies detected.");
        return Ok(());
    }

    println!();
    println!("   ⚠️  Anomalies (over mean + 2 stddev):");
    println!(
        "   {:12} │ {:>10} │ {:20} │ {:>8}",
        "Date", "Amount", "Category", "Factor"
    );
    println!("   ─────────────┼────────────┼──────────────────────┼──────────");

    for anomaly in &report.anomalies {
        println!(
            "   {:12} │ {:>10.2} │ {:20} │ {:>7.1}x",
            anomaly.date.to_string(),
            anomaly.amount.abs(),
            anomaly.category,
            anomaly.deviation_factor
        );
    }

    Ok(())
}
