//! Financial metrics engine
//!
//! Calculations that turn a ledger into decisions:
//!
//! - **Debt payoff** - months and interest to clear a balance at a fixed payment
//! - **Emergency fund** - whether savings build a cushion within the horizon
//! - **Spending elasticity** - what a change in one category is worth over time
//! - **Weekend premium** - how much more is spent per day on weekends
//! - **Subscription ROI** - estimated cost per hour of each subscription
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tally_core::{Ledger, MetricsEngine};
//!
//! let engine = MetricsEngine::new(&ledger);
//! let payoff = engine.debt_payoff_simulation(15000.0, 500.0, 0.18)?;
//! ```
//!
//! Each calculation is also exposed as a free function over precomputed
//! aggregates, so it can run without a ledger.

pub mod debt;
pub mod elasticity;
pub mod emergency_fund;
pub mod engine;
pub mod subscription_roi;
pub mod types;
pub mod weekend;

pub use debt::simulate_debt_payoff;
pub use elasticity::{compound_savings, spending_elasticity};
pub use emergency_fund::emergency_fund_adequacy;
pub use engine::{FullReport, MetricsEngine, ReportParams, SectionError};
pub use subscription_roi::{classify_service, rate_value, subscription_roi};
pub use types::{
    CategoryPremium, DebtPayoff, ElasticityReport, EmergencyFundReport, ServiceType,
    SubscriptionRoiReport, SubscriptionValue, Suggestion, ValueRating, WeekendReport,
};
pub use weekend::weekend_vs_weekday_premium;

/// Arithmetic mean, `None` when empty
pub(crate) fn mean(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean() {
        assert_eq!(mean(Vec::<f64>::new()), None);
        assert_eq!(mean([2.0, 4.0, 9.0]), Some(5.0));
        assert_eq!(mean([-1585.0; 3]), Some(-1585.0));
    }
}
