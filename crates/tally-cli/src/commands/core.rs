//! Core command implementations and shared utilities
//!
//! This module contains:
//! - `load_config` - Resolve the analysis config
//! - `open_ledger` - Load the transaction CSV into a ledger
//! - `cmd_config` - Show the effective config

use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tally_core::config::default_config_path;
use tally_core::import::load_file;
use tally_core::{AnalysisConfig, Ledger};
use tracing::{info, warn};

use super::print_json;

/// Load the config from an explicit path, the data-dir override, or built-in defaults
pub fn load_config(path: Option<&Path>) -> Result<AnalysisConfig> {
    AnalysisConfig::load(path).context("Failed to load analysis config")
}

/// Parse a YYYY-MM-DD argument
pub fn parse_date_arg(value: &str, flag: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .with_context(|| format!("Invalid --{} date format (use YYYY-MM-DD)", flag))
}

/// Load the transaction CSV, optionally restricted to a date range
pub fn open_ledger(data: &Path, from: Option<&str>, to: Option<&str>) -> Result<Ledger> {
    let transactions = load_file(data)
        .with_context(|| format!("Failed to load transactions from {}", data.display()))?;
    let ledger = Ledger::new(transactions);

    if from.is_none() && to.is_none() {
        info!("Loaded {} transactions", ledger.len());
        return Ok(ledger);
    }

    let from = match from {
        Some(s) => parse_date_arg(s, "from")?,
        None => NaiveDate::MIN,
    };
    let to = match to {
        Some(s) => parse_date_arg(s, "to")?,
        None => NaiveDate::MAX,
    };
    if from > to {
        anyhow::bail!("--from {} is after --to {}", from, to);
    }

    let filtered = ledger.between(from, to);
    info!(
        "Loaded {} of {} transactions in range",
        filtered.len(),
        ledger.len()
    );
    if filtered.is_empty() {
        warn!("No transactions between {} and {}", from, to);
    }
    Ok(filtered)
}

pub fn cmd_config(config: &AnalysisConfig, explicit: Option<&Path>, json: bool) -> Result<()> {
    if json {
        return print_json(config);
    }

    let override_path = default_config_path();
    let source = match (explicit, &override_path) {
        (Some(path), _) => path.display().to_string(),
        (None, Some(path)) if path.exists() => path.display().to_string(),
        _ => "built-in defaults".to_string(),
    };

    println!();
    println!("⚙️  Analysis Config");
    println!("   Source: {}", source);
    if let Some(path) = &override_path {
        println!("   Override path: {}", path.display());
    }
    println!("   ─────────────────────────────────────────────");
    println!("   Debt payoff cap:          {} months", config.debt_max_months);
    println!(
        "   Emergency fund horizon:   {} months",
        config.emergency_horizon_months
    );
    println!(
        "   Annual return rate:       {:.1}%",
        config.annual_return_rate * 100.0
    );
    println!(
        "   Weekend top categories:   {}",
        config.weekend_top_categories
    );
    println!(
        "   Value thresholds:         high < ${:.2}/h, medium < ${:.2}/h",
        config.high_value_below, config.medium_value_below
    );
    println!();
    println!("   Assumed usage (hours/month):");
    let hours = &config.usage_hours;
    for (name, value) in [
        ("streaming", hours.streaming),
        ("gym", hours.gym),
        ("software", hours.software),
        ("cloud", hours.cloud),
        ("other", hours.other),
    ] {
        println!("     {:10} {:>6}", name, value);
    }

    Ok(())
}
