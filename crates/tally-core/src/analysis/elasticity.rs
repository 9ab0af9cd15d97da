//! Spending elasticity: what a change in one category does to savings

use super::mean;
use super::types::ElasticityReport;
use crate::error::{Error, Result};
use crate::models::{CategoryAggregate, MonthlyAggregate};

/// Default nominal annual return for compounding redirected savings
pub const DEFAULT_ANNUAL_RETURN: f64 = 0.07;

/// Future value of depositing `monthly_amount` every month for `months`
/// months at `annual_return / 12` per month.
pub fn compound_savings(monthly_amount: f64, months: u32, annual_return: f64) -> f64 {
    let monthly_return = annual_return / 12.0;
    if monthly_return == 0.0 {
        return monthly_amount * f64::from(months);
    }
    monthly_amount * (((1.0 + monthly_return).powi(months as i32) - 1.0) / monthly_return)
}

/// Project changing `category` spending by `percent_change` (e.g. -0.2 for a
/// 20% cut) onto monthly savings and compound the monthly difference.
///
/// The category's total over the observed period is spread evenly across the
/// observed months. Every output is linear in `percent_change`.
pub fn spending_elasticity(
    categories: &[CategoryAggregate],
    monthly: &[MonthlyAggregate],
    category: &str,
    percent_change: f64,
    annual_return: f64,
) -> Result<ElasticityReport> {
    if !percent_change.is_finite() {
        return Err(Error::InvalidInput(format!(
            "percent change must be a finite number, got {}",
            percent_change
        )));
    }

    let aggregate = categories
        .iter()
        .find(|c| c.category == category)
        .or_else(|| {
            categories
                .iter()
                .find(|c| c.category.eq_ignore_ascii_case(category))
        })
        .ok_or_else(|| Error::CategoryNotFound(category.to_string()))?;

    let avg_monthly_savings = mean(monthly.iter().map(|m| m.net_amount))
        .ok_or_else(|| Error::NoData("No monthly data available".into()))?;
    let month_count = monthly.len() as f64;

    let current_spending = aggregate.expense_amount.abs();
    let spending_change = current_spending * percent_change;
    let monthly_change = spending_change / month_count;

    // Less spending means more to save
    let redirected = -monthly_change;

    Ok(ElasticityReport {
        category: aggregate.category.clone(),
        percent_change,
        current_monthly_spending: current_spending / month_count,
        monthly_spending_change: monthly_change,
        annual_spending_change: monthly_change * 12.0,
        current_monthly_savings: avg_monthly_savings,
        new_monthly_savings: avg_monthly_savings - monthly_change,
        compound_savings_1_year: compound_savings(redirected, 12, annual_return),
        compound_savings_5_years: compound_savings(redirected, 60, annual_return),
        compound_savings_10_years: compound_savings(redirected, 120, annual_return),
    })
}
