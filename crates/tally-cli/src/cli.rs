//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Tally - Turn a transaction history into financial decisions
#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "Personal finance metrics from a transaction CSV", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Transaction CSV with date, merchant, category and amount columns
    #[arg(long, default_value = "transactions.csv", global = true)]
    pub data: PathBuf,

    /// Analysis config file (defaults to the data-dir override, then built-in values)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Only include transactions on or after this date (YYYY-MM-DD)
    #[arg(long, global = true)]
    pub from: Option<String>,

    /// Only include transactions on or before this date (YYYY-MM-DD)
    #[arg(long, global = true)]
    pub to: Option<String>,

    /// Print results as JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Simulate paying off a debt at a fixed monthly payment
    Debt {
        /// Outstanding balance
        #[arg(short, long)]
        amount: f64,

        /// Fixed monthly payment
        #[arg(short, long)]
        payment: f64,

        /// Annual interest rate as a fraction (0.18 = 18%)
        #[arg(short, long)]
        rate: f64,
    },

    /// Check how long savings take to build an emergency fund
    EmergencyFund {
        /// Months of expenses the fund should cover
        #[arg(short, long, default_value = "6")]
        months: f64,
    },

    /// Project the effect of changing spending in one category
    Elasticity {
        /// Category name (case-insensitive)
        #[arg(short, long)]
        category: String,

        /// Fractional change (-0.2 = cut by 20%)
        #[arg(long, allow_negative_numbers = true)]
        change: f64,
    },

    /// Compare weekend and weekday daily spending per category
    Weekend,

    /// Estimate cost per hour of each subscription
    Subscriptions,

    /// Monthly cash flow and category totals
    Summary,

    /// Monthly spending per category
    Trends {
        /// Only show this category (case-insensitive)
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Top merchants by spending
    Merchants {
        /// Number of merchants to show
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// Run every analysis
    Analyze {
        /// Debt balance for the payoff simulation
        #[arg(long, default_value = "15000")]
        amount: f64,

        /// Monthly debt payment
        #[arg(long, default_value = "500")]
        payment: f64,

        /// Annual interest rate as a fraction
        #[arg(long, default_value = "0.18")]
        rate: f64,

        /// Emergency fund target in months of expenses
        #[arg(long, default_value = "6")]
        months: f64,

        /// Category for the elasticity projection
        #[arg(long, default_value = "Food & Dining")]
        category: String,

        /// Fractional spending change for the elasticity projection
        #[arg(long, default_value = "-0.2", allow_negative_numbers = true)]
        change: f64,
    },

    /// Show the effective analysis config
    Config,
}
