//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands`
//! module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use finsight_core::Granularity;
use rust_decimal::Decimal;

/// Finsight - Transaction analytics reports from a fixture file
#[derive(Parser)]
#[command(name = "finsight")]
#[command(about = "Period summaries, cash flow, and anomaly reports for transactions", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Transaction fixture file (.csv or .json)
    #[arg(long, default_value = "transactions.csv", global = true)]
    pub file: PathBuf,

    /// User whose transactions to analyze
    #[arg(long, default_value = "default", global = true)]
    pub user: String,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Expense summary with ranked category breakdown
    Summary {
        /// Grouping: daily, weekly, monthly, yearly
        #[arg(short, long, default_value = "monthly")]
        granularity: Granularity,

        /// Period preset (this-month, last-month, this-year, last-30-days,
        /// last-90-days, last-12-months, all)
        #[arg(short, long, default_value = "last-90-days")]
        period: String,

        /// Custom start date (YYYY-MM-DD, overrides --period with --to)
        #[arg(long)]
        from: Option<String>,

        /// Custom end date (YYYY-MM-DD, overrides --period with --from)
        #[arg(long)]
        to: Option<String>,

        /// Only include these categories (repeatable)
        #[arg(long = "category")]
        categories: Vec<String>,

        /// Minimum absolute amount
        #[arg(long)]
        min_amount: Option<Decimal>,

        /// Maximum absolute amount
        #[arg(long)]
        max_amount: Option<Decimal>,

        /// Output as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Period-bucketed activity timeline
    Timeline {
        /// Grouping: daily, weekly, monthly, yearly
        #[arg(short, long, default_value = "monthly")]
        granularity: Granularity,

        /// Period preset
        #[arg(short, long, default_value = "last-12-months")]
        period: String,

        /// Custom start date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// Custom end date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,

        /// Output as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Running cash-flow balances
    Cashflow {
        /// Grouping: daily, weekly, monthly, yearly
        #[arg(short, long, default_value = "monthly")]
        granularity: Granularity,

        /// Period preset
        #[arg(short, long, default_value = "last-12-months")]
        period: String,

        /// Custom start date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// Custom end date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,

        /// Balance carried into the first period
        #[arg(long, default_value = "0")]
        starting_balance: Decimal,

        /// Output as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Spending velocity, trend, and anomaly report
    Velocity {
        /// Period preset
        #[arg(short, long, default_value = "last-30-days")]
        period: String,

        /// Custom start date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// Custom end date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,

        /// Output as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}
