//! Finsight CLI - Transaction analytics reports
//!
//! Usage:
//!   finsight summary --file tx.csv --user alice     Expense summary
//!   finsight timeline --granularity weekly          Activity timeline
//!   finsight cashflow --starting-balance 1000       Running balances
//!   finsight velocity --period last-30-days         Velocity + anomalies

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Summary {
            granularity,
            period,
            from,
            to,
            categories,
            min_amount,
            max_amount,
            json,
        } => commands::cmd_summary(
            &cli.file,
            &cli.user,
            granularity,
            &period,
            from.as_deref(),
            to.as_deref(),
            &categories,
            min_amount,
            max_amount,
            json,
        ),
        Commands::Timeline {
            granularity,
            period,
            from,
            to,
            json,
        } => commands::cmd_timeline(
            &cli.file,
            &cli.user,
            granularity,
            &period,
            from.as_deref(),
            to.as_deref(),
            json,
        ),
        Commands::Cashflow {
            granularity,
            period,
            from,
            to,
            starting_balance,
            json,
        } => commands::cmd_cashflow(
            &cli.file,
            &cli.user,
            granularity,
            &period,
            from.as_deref(),
            to.as_deref(),
            starting_balance,
            json,
        ),
        Commands::Velocity {
            period,
            from,
            to,
            json,
        } => commands::cmd_velocity(
            &cli.file,
            &cli.user,
            &period,
            from.as_deref(),
            to.as_deref(),
            json,
        ),
    }
}
