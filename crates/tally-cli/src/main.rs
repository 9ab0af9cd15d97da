//! Tally CLI - Personal finance metrics
//!
//! Usage:
//!   tally --data tx.csv summary                       Monthly and category totals
//!   tally debt --amount 15000 --payment 500 --rate 0.18
//!   tally --data tx.csv trends --category Shopping    Monthly spend in one category
//!   tally --data tx.csv analyze                       Run every analysis
//!   tally --data tx.csv --json subscriptions          Machine-readable output

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tally_core::ReportParams;
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
        .with(fmt::layer().with_target(false).compact().with_writer(std::io::stderr))
        .init();

    let config = commands::load_config(cli.config.as_deref())?;

    let open_ledger =
        || commands::open_ledger(&cli.data, cli.from.as_deref(), cli.to.as_deref());

    match cli.command {
        Commands::Debt {
            amount,
            payment,
            rate,
        } => commands::cmd_debt(&config, amount, payment, rate, cli.json),
        Commands::EmergencyFund { months } => {
            commands::cmd_emergency_fund(&open_ledger()?, &config, months, cli.json)
        }
        Commands::Elasticity {
            ref category,
            change,
        } => commands::cmd_elasticity(&open_ledger()?, &config, category, change, cli.json),
        Commands::Weekend => commands::cmd_weekend(&open_ledger()?, &config, cli.json),
        Commands::Subscriptions => commands::cmd_subscriptions(&open_ledger()?, &config, cli.json),
        Commands::Summary => commands::cmd_summary(&open_ledger()?, cli.json),
        Commands::Trends { ref category } => {
            commands::cmd_trends(&open_ledger()?, category.as_deref(), cli.json)
        }
        Commands::Merchants { limit } => commands::cmd_merchants(&open_ledger()?, limit, cli.json),
        Commands::Analyze {
            amount,
            payment,
            rate,
            months,
            ref category,
            change,
        } => {
            let params = ReportParams {
                debt_amount: amount,
                monthly_payment: payment,
                annual_interest_rate: rate,
                emergency_target_months: months,
                elasticity_category: category.clone(),
                elasticity_change: change,
            };
            commands::cmd_analyze(&open_ledger()?, &config, &params, cli.json)
        }
        Commands::Config => commands::cmd_config(&config, cli.config.as_deref(), cli.json),
    }
}
