//! Error types for Finsight

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid date range: end {end} is before start {start}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("Unknown granularity: {0} (valid: daily, weekly, monthly, yearly)")]
    InvalidGranularity(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
