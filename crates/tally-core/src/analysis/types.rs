//! Result types for the financial metrics

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Outcome of amortizing a debt at a fixed monthly payment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtPayoff {
    pub debt_amount: f64,
    pub monthly_payment: f64,
    pub annual_interest_rate: f64,
    pub months_to_payoff: u32,
    pub years_to_payoff: f64,
    pub total_interest_paid: f64,
    pub total_amount_paid: f64,
    /// The simulation hit its month cap before the balance reached zero
    pub capped: bool,
}

/// Whether current savings can build an emergency fund in reasonable time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmergencyFundReport {
    pub target_months: f64,
    pub average_monthly_expenses: f64,
    pub target_emergency_fund: f64,
    pub average_monthly_savings: f64,
    /// Infinite when average savings are not positive; `null` in JSON
    #[serde(with = "unbounded")]
    pub months_to_target: f64,
    #[serde(with = "unbounded")]
    pub years_to_target: f64,
    pub adequate: bool,
}

/// Serde for durations that may be infinite: JSON has no infinity, so an
/// unreachable target is written as `null` and read back as infinity.
mod unbounded {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_some(value)
        } else {
            serializer.serialize_none()
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::INFINITY))
    }
}

impl EmergencyFundReport {
    pub fn is_reachable(&self) -> bool {
        self.months_to_target.is_finite()
    }
}

/// Projected effect of changing spending in one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElasticityReport {
    pub category: String,
    /// Fractional change, e.g. -0.2 for a 20% cut
    pub percent_change: f64,
    pub current_monthly_spending: f64,
    /// Positive when spending grows
    pub monthly_spending_change: f64,
    pub annual_spending_change: f64,
    pub current_monthly_savings: f64,
    pub new_monthly_savings: f64,
    pub compound_savings_1_year: f64,
    pub compound_savings_5_years: f64,
    pub compound_savings_10_years: f64,
}

/// Weekday vs weekend daily spending for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryPremium {
    pub category: String,
    pub weekday_daily_avg: f64,
    pub weekend_daily_avg: f64,
    /// Weekend minus weekday daily average
    pub premium: f64,
    /// Weekend over weekday daily average (weekday 0 counts as 1)
    pub multiplier: f64,
}

/// Weekend vs weekday spending comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekendReport {
    pub total_weekday_spending: f64,
    pub total_weekend_spending: f64,
    /// Distinct dates with any transaction, per partition
    pub weekday_days: usize,
    pub weekend_days: usize,
    pub weekday_daily_average: f64,
    pub weekend_daily_average: f64,
    pub weekend_premium_total: f64,
    /// Sorted by premium, largest first
    pub categories: Vec<CategoryPremium>,
    pub biggest_weekend_categories: Vec<String>,
}

/// Subscription service type, inferred from the merchant name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceType {
    Streaming,
    Gym,
    Software,
    Cloud,
    Other,
}

impl ServiceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Streaming => "streaming",
            Self::Gym => "gym",
            Self::Software => "software",
            Self::Cloud => "cloud",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ServiceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "streaming" => Ok(Self::Streaming),
            "gym" => Ok(Self::Gym),
            "software" => Ok(Self::Software),
            "cloud" => Ok(Self::Cloud),
            "other" => Ok(Self::Other),
            _ => Err(format!("Unknown service type: {}", s)),
        }
    }
}

/// Value for money of a subscription, by cost per hour of use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueRating {
    High,
    Medium,
    Low,
}

impl ValueRating {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for ValueRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Estimated return on one subscription
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionValue {
    pub merchant: String,
    pub monthly_cost: f64,
    pub service_type: ServiceType,
    pub estimated_usage_hours: f64,
    pub cost_per_hour: f64,
    pub annual_cost: f64,
    pub value_rating: ValueRating,
}

/// An actionable subscription suggestion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Suggestion {
    /// Low value for money
    Cancel { merchant: String, cost_per_hour: f64 },
    /// Not rated low but still expensive per hour
    ReviewUsage { merchant: String, cost_per_hour: f64 },
    /// More than one streaming service
    ConsolidateStreaming { merchants: Vec<String> },
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancel {
                merchant,
                cost_per_hour,
            } => write!(f, "Consider canceling {} (${:.2}/hour)", merchant, cost_per_hour),
            Self::ReviewUsage { merchant, .. } => {
                write!(f, "Review usage of {} - high cost per hour", merchant)
            }
            Self::ConsolidateStreaming { merchants } => write!(
                f,
                "Multiple streaming services: {} - consider consolidating",
                merchants.join(", ")
            ),
        }
    }
}

/// Subscription ROI analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionRoiReport {
    pub total_monthly: f64,
    pub total_annual: f64,
    pub subscription_count: usize,
    pub subscriptions: Vec<SubscriptionValue>,
    pub suggestions: Vec<Suggestion>,
}
