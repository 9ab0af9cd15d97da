//! Metrics engine - runs the financial calculations over a ledger

use serde::Serialize;
use tracing::{debug, info, warn};

use super::types::{
    DebtPayoff, ElasticityReport, EmergencyFundReport, SubscriptionRoiReport, WeekendReport,
};
use super::{debt, elasticity, emergency_fund, subscription_roi, weekend};
use crate::config::AnalysisConfig;
use crate::ledger::Ledger;
use crate::models::{category, ReportPeriod};
use crate::Result;

/// Inputs for a full report run
#[derive(Debug, Clone, PartialEq)]
pub struct ReportParams {
    pub debt_amount: f64,
    pub monthly_payment: f64,
    pub annual_interest_rate: f64,
    pub emergency_target_months: f64,
    pub elasticity_category: String,
    pub elasticity_change: f64,
}

impl Default for ReportParams {
    /// A credit card balance, a six month fund and a 20% dining cut
    fn default() -> Self {
        Self {
            debt_amount: 15000.0,
            monthly_payment: 500.0,
            annual_interest_rate: 0.18,
            emergency_target_months: 6.0,
            elasticity_category: category::FOOD_AND_DINING.to_string(),
            elasticity_change: -0.2,
        }
    }
}

/// A section of a full report that could not be computed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionError {
    pub section: &'static str,
    pub message: String,
}

/// Every analysis over one ledger; failed sections are `None` and listed in `errors`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FullReport {
    pub period: Option<ReportPeriod>,
    pub transaction_count: usize,
    pub debt_payoff: Option<DebtPayoff>,
    pub emergency_fund: Option<EmergencyFundReport>,
    pub elasticity: Option<ElasticityReport>,
    pub weekend: Option<WeekendReport>,
    pub subscriptions: Option<SubscriptionRoiReport>,
    pub errors: Vec<SectionError>,
}

/// Financial metrics over a ledger
pub struct MetricsEngine<'a> {
    ledger: &'a Ledger,
    config: AnalysisConfig,
}

impl<'a> MetricsEngine<'a> {
    /// Create an engine with the default config
    pub fn new(ledger: &'a Ledger) -> Self {
        Self::with_config(ledger, AnalysisConfig::default())
    }

    pub fn with_config(ledger: &'a Ledger, config: AnalysisConfig) -> Self {
        Self { ledger, config }
    }

    /// Amortize a debt; independent of the ledger contents
    pub fn debt_payoff_simulation(
        &self,
        debt_amount: f64,
        monthly_payment: f64,
        annual_interest_rate: f64,
    ) -> Result<DebtPayoff> {
        debt::simulate_debt_payoff(
            debt_amount,
            monthly_payment,
            annual_interest_rate,
            self.config.debt_max_months,
        )
    }

    pub fn emergency_fund_adequacy(&self, target_months: f64) -> Result<EmergencyFundReport> {
        let monthly = self.ledger.monthly_analysis();
        emergency_fund::emergency_fund_adequacy(
            &monthly,
            target_months,
            self.config.emergency_horizon_months,
        )
    }

    pub fn spending_elasticity(
        &self,
        category: &str,
        percent_change: f64,
    ) -> Result<ElasticityReport> {
        let categories = self.ledger.category_analysis();
        let monthly = self.ledger.monthly_analysis();
        elasticity::spending_elasticity(
            &categories,
            &monthly,
            category,
            percent_change,
            self.config.annual_return_rate,
        )
    }

    pub fn weekend_vs_weekday_premium(&self) -> Result<WeekendReport> {
        weekend::weekend_vs_weekday_premium(
            self.ledger.transactions(),
            self.config.weekend_top_categories,
        )
    }

    pub fn subscription_roi(&self) -> Result<SubscriptionRoiReport> {
        let subscriptions = self.ledger.subscriptions();
        debug!("Found {} subscription merchants", subscriptions.len());
        subscription_roi::subscription_roi(&subscriptions, &self.config)
    }

    /// Run every analysis, keeping going when a section fails
    pub fn full_report(&self, params: &ReportParams) -> FullReport {
        info!(
            "Running full analysis over {} transactions",
            self.ledger.len()
        );

        let mut errors = Vec::new();

        let debt_payoff = collect(
            "debt_payoff",
            self.debt_payoff_simulation(
                params.debt_amount,
                params.monthly_payment,
                params.annual_interest_rate,
            ),
            &mut errors,
        );
        let emergency_fund = collect(
            "emergency_fund",
            self.emergency_fund_adequacy(params.emergency_target_months),
            &mut errors,
        );
        let elasticity = collect(
            "elasticity",
            self.spending_elasticity(&params.elasticity_category, params.elasticity_change),
            &mut errors,
        );
        let weekend = collect("weekend", self.weekend_vs_weekday_premium(), &mut errors);
        let subscriptions = collect("subscriptions", self.subscription_roi(), &mut errors);

        info!("Analysis complete ({} sections failed)", errors.len());

        FullReport {
            period: self.ledger.period(),
            transaction_count: self.ledger.len(),
            debt_payoff,
            emergency_fund,
            elasticity,
            weekend,
            subscriptions,
            errors,
        }
    }
}

fn collect<T>(
    section: &'static str,
    result: Result<T>,
    errors: &mut Vec<SectionError>,
) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(section, error = %e, "Analysis section failed");
            errors.push(SectionError {
                section,
                message: e.to_string(),
            });
            None
        }
    }
}
