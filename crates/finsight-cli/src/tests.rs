//! CLI tests: period resolution, fixture loading, and command plumbing

use std::io::Write;

use chrono::{Datelike, Utc};
use finsight_core::{Granularity, TransactionSource};
use rust_decimal_macros::dec;
use tempfile::Builder;

use crate::commands::{self, open_source, resolve_period};

const FIXTURE_CSV: &str = "\
id,user_id,date,description,category,kind,amount
1,alice,2024-01-02,Groceries,food,expense,-30.50
2,alice,2024-01-05,Paycheck,salary,income,1000
3,alice,2024-01-09,Bus pass,transport,expense,-20
";

fn write_fixture(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
    let mut file = Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("Failed to create temp fixture");
    file.write_all(contents.as_bytes())
        .expect("Failed to write fixture");
    file
}

#[test]
fn test_resolve_period_custom_dates() {
    let (from, to) = resolve_period("ignored", Some("2024-01-01"), Some("2024-03-31")).unwrap();
    assert_eq!(from.to_string(), "2024-01-01");
    assert_eq!(to.to_string(), "2024-03-31");
}

#[test]
fn test_resolve_period_rejects_bad_dates() {
    assert!(resolve_period("all", Some("01/01/2024"), Some("2024-03-31")).is_err());
}

#[test]
fn test_resolve_period_this_month() {
    let (from, to) = resolve_period("this-month", None, None).unwrap();
    let today = Utc::now().date_naive();
    assert_eq!(from.day(), 1);
    assert_eq!(from.month(), today.month());
    assert_eq!(to, today);
}

#[test]
fn test_resolve_period_last_30_days() {
    let (from, to) = resolve_period("last-30-days", None, None).unwrap();
    assert_eq!((to - from).num_days(), 30);
}

#[test]
fn test_resolve_period_rejects_unknown_preset() {
    assert!(resolve_period("fortnight", None, None).is_err());
}

#[test]
fn test_open_source_csv() {
    let file = write_fixture(".csv", FIXTURE_CSV);
    let source = open_source(file.path()).unwrap();
    assert_eq!(source.len(), 3);

    let txs = source
        .fetch_transactions(
            "alice",
            chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            chrono::NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
            &Default::default(),
        )
        .unwrap();
    assert_eq!(txs.len(), 3);
    assert_eq!(txs[0].amount, dec!(-30.50));
}

#[test]
fn test_open_source_rejects_unknown_extension() {
    let file = write_fixture(".txt", FIXTURE_CSV);
    assert!(open_source(file.path()).is_err());
}

#[test]
fn test_cmd_summary_runs_end_to_end() {
    let file = write_fixture(".csv", FIXTURE_CSV);
    let result = commands::cmd_summary(
        file.path(),
        "alice",
        Granularity::Monthly,
        "all",
        Some("2024-01-01"),
        Some("2024-01-31"),
        &[],
        None,
        None,
        false,
    );
    assert!(result.is_ok());
}

#[test]
fn test_cmd_cashflow_runs_with_json_output() {
    let file = write_fixture(".csv", FIXTURE_CSV);
    let result = commands::cmd_cashflow(
        file.path(),
        "alice",
        Granularity::Monthly,
        "all",
        Some("2024-01-01"),
        Some("2024-02-29"),
        dec!(500),
        true,
    );
    assert!(result.is_ok());
}

#[test]
fn test_cmd_velocity_runs_end_to_end() {
    let file = write_fixture(".csv", FIXTURE_CSV);
    let result = commands::cmd_velocity(
        file.path(),
        "alice",
        "all",
        Some("2024-01-01"),
        Some("2024-01-31"),
        false,
    );
    assert!(result.is_ok());
}
