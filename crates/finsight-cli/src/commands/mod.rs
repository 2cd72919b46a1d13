//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `reports` - Report generation commands (summary, timeline, cashflow,
//!   velocity) and period resolution

pub mod reports;

// Re-export command functions for main.rs
pub use reports::*;

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate, Utc};
use finsight_core::{load_fixture, MemorySource};

/// Load a fixture file into an in-memory transaction source
pub fn open_source(file: &Path) -> Result<MemorySource> {
    let transactions = load_fixture(file)
        .with_context(|| format!("Failed to load fixture {}", file.display()))?;
    tracing::debug!(
        count = transactions.len(),
        file = %file.display(),
        "Loaded transaction fixture"
    );
    Ok(MemorySource::new(transactions))
}

/// Resolve a period string to (from_date, to_date)
pub fn resolve_period(
    period: &str,
    custom_from: Option<&str>,
    custom_to: Option<&str>,
) -> Result<(NaiveDate, NaiveDate)> {
    // If custom dates provided, use those
    if let (Some(from), Some(to)) = (custom_from, custom_to) {
        let from_date = NaiveDate::parse_from_str(from, "%Y-%m-%d")
            .context("Invalid --from date format (use YYYY-MM-DD)")?;
        let to_date = NaiveDate::parse_from_str(to, "%Y-%m-%d")
            .context("Invalid --to date format (use YYYY-MM-DD)")?;
        return Ok((from_date, to_date));
    }

    let today = Utc::now().date_naive();

    match period.to_lowercase().as_str() {
        "this-month" => {
            let from = NaiveDate::from_ymd_opt(today.year(), today.month(), 1).unwrap();
            Ok((from, today))
        }
        "last-month" => {
            let last_month = if today.month() == 1 {
                NaiveDate::from_ymd_opt(today.year() - 1, 12, 1).unwrap()
            } else {
                NaiveDate::from_ymd_opt(today.year(), today.month() - 1, 1).unwrap()
            };
            let last_day = NaiveDate::from_ymd_opt(today.year(), today.month(), 1)
                .unwrap()
                .pred_opt()
                .unwrap();
            Ok((last_month, last_day))
        }
        "this-year" => {
            let from = NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap();
            Ok((from, today))
        }
        "last-30-days" => {
            let from = today - chrono::Duration::days(30);
            Ok((from, today))
        }
        "last-90-days" => {
            let from = today - chrono::Duration::days(90);
            Ok((from, today))
        }
        "last-12-months" => {
            let from = if today.month() == 1 {
                NaiveDate::from_ymd_opt(today.year() - 1, 1, 1).unwrap()
            } else {
                NaiveDate::from_ymd_opt(today.year() - 1, today.month(), 1).unwrap()
            };
            Ok((from, today))
        }
        "all" => {
            let from = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
            Ok((from, today))
        }
        _ => anyhow::bail!("Unknown period: {}. Available: this-month, last-month, this-year, last-30-days, last-90-days, last-12-months, all", period),
    }
}
