//! Spending velocity and trend classification
//!
//! Computes the daily spending average over a window and classifies the
//! direction of spending by comparing the mean expense of the first and
//! second halves of the ordered daily buckets.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::aggregate::AggregateBucket;

/// Direction of spending over the analyzed window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Increasing,
    Decreasing,
    Stable,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Increasing => "increasing",
            Self::Decreasing => "decreasing",
            Self::Stable => "stable",
        }
    }
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Spending velocity over a daily window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VelocityReport {
    pub daily_average: Decimal,
    pub trend: Trend,
    pub total_spent: Decimal,
    pub window_days: u32,
}

/// Compute spending velocity from ordered daily buckets.
///
/// The trend compares mean expenses of the two halves of the window; an
/// odd bucket count leaves the extra bucket in the first half. A second
/// half more than 10% above the first classifies as increasing, more than
/// 10% below as decreasing, anything between as stable. Fewer than two
/// buckets cannot establish a direction and classify as stable. A zero
/// window yields a zero average rather than a division fault; the engine
/// rejects zero windows before this point.
pub fn velocity(daily_buckets: &[AggregateBucket], window_days: u32) -> VelocityReport {
    let total_spent: Decimal = daily_buckets.iter().map(|b| b.total_expenses).sum();
    let daily_average = if window_days == 0 {
        Decimal::ZERO
    } else {
        total_spent / Decimal::from(window_days)
    };

    let trend = classify_trend(daily_buckets);

    debug!(
        window_days,
        buckets = daily_buckets.len(),
        trend = trend.as_str(),
        "Velocity analysis complete"
    );

    VelocityReport {
        daily_average,
        trend,
        total_spent,
        window_days,
    }
}

fn classify_trend(daily_buckets: &[AggregateBucket]) -> Trend {
    if daily_buckets.len() < 2 {
        return Trend::Stable;
    }

    // Odd counts put the extra bucket in the first half
    let split = (daily_buckets.len() + 1) / 2;
    let (first, second) = daily_buckets.split_at(split);

    let first_mean = half_mean(first);
    let second_mean = half_mean(second);

    let increase_factor = Decimal::new(110, 2); // 1.10
    let decrease_factor = Decimal::new(90, 2); // 0.90

    if second_mean > first_mean * increase_factor {
        Trend::Increasing
    } else if second_mean < first_mean * decrease_factor {
        Trend::Decreasing
    } else {
        Trend::Stable
    }
}

fn half_mean(buckets: &[AggregateBucket]) -> Decimal {
    // Both halves are non-empty whenever the caller has >= 2 buckets
    if buckets.is_empty() {
        return Decimal::ZERO;
    }
    let sum: Decimal = buckets.iter().map(|b| b.total_expenses).sum();
    sum / Decimal::from(buckets.len() as u64)
}
