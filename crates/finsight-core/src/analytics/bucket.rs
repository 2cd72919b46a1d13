//! Period bucketing
//!
//! Maps a transaction date to the canonical start of its period under a
//! chosen granularity, and materializes gapless period sequences for a
//! date range. Bucketing is pure and total: every valid date has exactly
//! one bucket key.

use chrono::{Datelike, Duration, NaiveDate};

use crate::models::Granularity;

impl Granularity {
    /// Canonical bucket key for a date: the first day of its period.
    ///
    /// Weekly periods start on Monday, monthly periods on day 1, yearly
    /// periods on January 1. Daily is the identity.
    pub fn bucket_key(self, date: NaiveDate) -> NaiveDate {
        match self {
            Self::Daily => date,
            Self::Weekly => {
                let offset = date.weekday().num_days_from_monday();
                date - Duration::days(i64::from(offset))
            }
            // Day 1 and Jan 1 always exist, so with_* cannot fail here
            Self::Monthly => date.with_day(1).unwrap(),
            Self::Yearly => date.with_month(1).unwrap().with_day(1).unwrap(),
        }
    }

    /// Start of the period following `period_start`
    pub fn advance(self, period_start: NaiveDate) -> NaiveDate {
        match self {
            Self::Daily => period_start + Duration::days(1),
            Self::Weekly => period_start + Duration::days(7),
            Self::Monthly => {
                if period_start.month() == 12 {
                    NaiveDate::from_ymd_opt(period_start.year() + 1, 1, 1).unwrap()
                } else {
                    NaiveDate::from_ymd_opt(period_start.year(), period_start.month() + 1, 1)
                        .unwrap()
                }
            }
            Self::Yearly => NaiveDate::from_ymd_opt(period_start.year() + 1, 1, 1).unwrap(),
        }
    }
}

/// Start dates of every period intersecting `[start, end]`, ascending.
///
/// The first key is the bucket containing `start`, which may fall before
/// `start` itself (e.g. mid-month start under monthly grouping).
/// Returns an empty list when `end < start`; callers reject that range
/// before aggregation.
pub fn period_starts(granularity: Granularity, start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut starts = Vec::new();
    let mut key = granularity.bucket_key(start);
    while key <= end {
        starts.push(key);
        key = granularity.advance(key);
    }
    starts
}
