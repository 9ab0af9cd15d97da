//! Emergency fund adequacy

use super::types::EmergencyFundReport;
use super::mean;
use crate::error::{Error, Result};
use crate::models::MonthlyAggregate;

/// Default horizon within which the fund must be reachable
pub const DEFAULT_HORIZON_MONTHS: f64 = 24.0;

/// Check whether average monthly savings can build a fund covering
/// `target_months` of average expenses within `horizon_months`.
///
/// Non-positive average savings make the target unreachable: months to target
/// is infinite and the result is never adequate.
pub fn emergency_fund_adequacy(
    monthly: &[MonthlyAggregate],
    target_months: f64,
    horizon_months: f64,
) -> Result<EmergencyFundReport> {
    if !target_months.is_finite() || target_months < 0.0 {
        return Err(Error::InvalidInput(format!(
            "target months must be a non-negative number, got {}",
            target_months
        )));
    }

    let avg_expenses = mean(monthly.iter().map(|m| m.total_expenses))
        .ok_or_else(|| Error::NoData("No monthly data available".into()))?
        .abs();
    let avg_savings = mean(monthly.iter().map(|m| m.net_amount))
        .ok_or_else(|| Error::NoData("No monthly data available".into()))?;

    let target_fund = avg_expenses * target_months;
    let months_to_target = if avg_savings <= 0.0 {
        f64::INFINITY
    } else {
        target_fund / avg_savings
    };

    Ok(EmergencyFundReport {
        target_months,
        average_monthly_expenses: avg_expenses,
        target_emergency_fund: target_fund,
        average_monthly_savings: avg_savings,
        months_to_target,
        years_to_target: months_to_target / 12.0,
        adequate: avg_savings > 0.0 && months_to_target <= horizon_months,
    })
}
