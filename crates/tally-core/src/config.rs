//! Analysis configuration
//!
//! The heuristics behind the metrics (usage hours per service type, the
//! return rate used for compounding, the emergency-fund horizon) are
//! tunable. Config is loaded with a two-layer resolution:
//! 1. An explicit `--config` file, or the override in the data dir
//!    (~/.local/share/tally/config/analysis.toml)
//! 2. Embedded defaults (compiled into binary)
//!
//! Keys missing from an override keep their default values.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::debt::DEFAULT_MAX_MONTHS;
use crate::analysis::elasticity::DEFAULT_ANNUAL_RETURN;
use crate::analysis::emergency_fund::DEFAULT_HORIZON_MONTHS;
use crate::analysis::weekend::DEFAULT_TOP_CATEGORIES;
use crate::analysis::ServiceType;
use crate::error::{Error, Result};

/// Embedded default config (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../../../config/analysis.toml");

/// Assumed monthly usage hours per subscription service type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageHours {
    pub streaming: f64,
    pub gym: f64,
    pub software: f64,
    pub cloud: f64,
    pub other: f64,
}

impl UsageHours {
    pub fn for_service(&self, service: ServiceType) -> f64 {
        match service {
            ServiceType::Streaming => self.streaming,
            ServiceType::Gym => self.gym,
            ServiceType::Software => self.software,
            ServiceType::Cloud => self.cloud,
            ServiceType::Other => self.other,
        }
    }
}

impl Default for UsageHours {
    fn default() -> Self {
        Self {
            streaming: 20.0,
            gym: 8.0,
            software: 40.0,
            cloud: 24.0 * 30.0,
            other: 10.0,
        }
    }
}

/// Parameters for the metrics engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Safety cap on simulated debt payoff months
    pub debt_max_months: u32,
    /// Months within which an emergency fund must be reachable to count as adequate
    pub emergency_horizon_months: f64,
    /// Nominal annual return for compounding redirected savings
    pub annual_return_rate: f64,
    /// How many categories the weekend report lists as biggest spenders
    pub weekend_top_categories: usize,
    pub usage_hours: UsageHours,
    /// Cost per hour below which a subscription is rated high value
    pub high_value_below: f64,
    /// Cost per hour below which a subscription is rated medium value
    pub medium_value_below: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            debt_max_months: DEFAULT_MAX_MONTHS,
            emergency_horizon_months: DEFAULT_HORIZON_MONTHS,
            annual_return_rate: DEFAULT_ANNUAL_RETURN,
            weekend_top_categories: DEFAULT_TOP_CATEGORIES,
            usage_hours: UsageHours::default(),
            high_value_below: 2.0,
            medium_value_below: 5.0,
        }
    }
}

impl AnalysisConfig {
    /// Load the effective config.
    ///
    /// An explicit path must exist. Without one, the data-dir override is used
    /// when present, otherwise the embedded defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(Error::Config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            return Self::from_file(path);
        }

        match default_config_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => parse_config(DEFAULT_CONFIG),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read {}: {}", path.display(), e)))?;
        debug!("Loading analysis config from {}", path.display());
        parse_config(&content)
    }

    fn validate(&self) -> Result<()> {
        let hours = &self.usage_hours;
        for (name, value) in [
            ("streaming", hours.streaming),
            ("gym", hours.gym),
            ("software", hours.software),
            ("cloud", hours.cloud),
            ("other", hours.other),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(Error::Config(format!(
                    "usage_hours.{} must be positive, got {}",
                    name, value
                )));
            }
        }
        if !self.annual_return_rate.is_finite() || self.annual_return_rate <= -1.0 {
            return Err(Error::Config(format!(
                "annual_return_rate out of range: {}",
                self.annual_return_rate
            )));
        }
        if !self.emergency_horizon_months.is_finite() || self.emergency_horizon_months < 0.0 {
            return Err(Error::Config(format!(
                "emergency_fund.adequacy_horizon_months must be a non-negative number, got {}",
                self.emergency_horizon_months
            )));
        }
        if self.debt_max_months == 0 {
            return Err(Error::Config("debt.max_months must be at least 1".into()));
        }
        if self.high_value_below > self.medium_value_below {
            return Err(Error::Config(format!(
                "high_value_below ({}) exceeds medium_value_below ({})",
                self.high_value_below, self.medium_value_below
            )));
        }
        Ok(())
    }
}

/// Default config override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("tally").join("config").join("analysis.toml"))
}

/// Raw config structure for TOML parsing
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    debt: Option<RawDebt>,
    emergency_fund: Option<RawEmergencyFund>,
    elasticity: Option<RawElasticity>,
    weekend: Option<RawWeekend>,
    subscriptions: Option<RawSubscriptions>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawDebt {
    max_months: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawEmergencyFund {
    adequacy_horizon_months: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawElasticity {
    annual_return_rate: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawWeekend {
    top_categories: Option<usize>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSubscriptions {
    high_value_below: Option<f64>,
    medium_value_below: Option<f64>,
    usage_hours: Option<RawUsageHours>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawUsageHours {
    streaming: Option<f64>,
    gym: Option<f64>,
    software: Option<f64>,
    cloud: Option<f64>,
    other: Option<f64>,
}

/// Parse config from TOML content
pub fn parse_config(content: &str) -> Result<AnalysisConfig> {
    let raw: RawConfig = toml::from_str(content)
        .map_err(|e| Error::Config(format!("Invalid config TOML: {}", e)))?;

    let mut config = AnalysisConfig::default();

    if let Some(debt) = raw.debt {
        if let Some(max_months) = debt.max_months {
            config.debt_max_months = max_months;
        }
    }

    if let Some(fund) = raw.emergency_fund {
        if let Some(horizon) = fund.adequacy_horizon_months {
            config.emergency_horizon_months = horizon;
        }
    }

    if let Some(elasticity) = raw.elasticity {
        if let Some(rate) = elasticity.annual_return_rate {
            config.annual_return_rate = rate;
        }
    }

    if let Some(weekend) = raw.weekend {
        if let Some(top) = weekend.top_categories {
            config.weekend_top_categories = top;
        }
    }

    if let Some(subs) = raw.subscriptions {
        if let Some(high) = subs.high_value_below {
            config.high_value_below = high;
        }
        if let Some(medium) = subs.medium_value_below {
            config.medium_value_below = medium;
        }
        if let Some(hours) = subs.usage_hours {
            let target = &mut config.usage_hours;
            if let Some(v) = hours.streaming {
                target.streaming = v;
            }
            if let Some(v) = hours.gym {
                target.gym = v;
            }
            if let Some(v) = hours.software {
                target.software = v;
            }
            if let Some(v) = hours.cloud {
                target.cloud = v;
            }
            if let Some(v) = hours.other {
                target.other = v;
            }
        }
    }

    config.validate()?;
    Ok(config)
}
