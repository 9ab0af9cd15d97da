//! Tally Core Library
//!
//! Shared functionality for the Tally personal finance tool:
//! - Transaction models and the in-memory ledger with its group-by reports
//! - CSV import of transaction tables
//! - Financial metrics (debt payoff, emergency fund, elasticity, weekend
//!   premium, subscription ROI)
//! - Tunable analysis config with embedded defaults

pub mod analysis;
pub mod config;
pub mod error;
pub mod import;
pub mod ledger;
pub mod models;

pub use analysis::{
    DebtPayoff, ElasticityReport, EmergencyFundReport, FullReport, MetricsEngine, ReportParams,
    SubscriptionRoiReport, WeekendReport,
};
pub use config::AnalysisConfig;
pub use error::{Error, Result};
pub use ledger::Ledger;
pub use models::*;
