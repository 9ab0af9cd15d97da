//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `core` - Shared utilities (open_ledger, load_config) and the config command
//! - `metrics` - Financial metric commands (debt, emergency fund, elasticity, weekend, subscriptions, analyze)
//! - `reports` - Ledger report commands (summary, merchants)

pub mod core;
pub mod metrics;
pub mod reports;

// Re-export command functions for main.rs
pub use core::*;
pub use metrics::*;
pub use reports::*;

use anyhow::{Context, Result};
use serde::Serialize;

/// Truncate a string to a maximum length, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Print any result as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output to JSON")?;
    println!("{}", json);
    Ok(())
}

/// Format a month count for display, e.g. "41 months (3.4 years)"
pub fn format_months(months: f64) -> String {
    if months.is_finite() {
        format!("{:.1} months ({:.1} years)", months, months / 12.0)
    } else {
        "never (savings are not positive)".to_string()
    }
}
