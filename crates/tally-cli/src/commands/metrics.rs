//! Financial metric commands

use anyhow::{Context, Result};
use tally_core::analysis::{DebtPayoff, SubscriptionRoiReport, ValueRating, WeekendReport};
use tally_core::{
    AnalysisConfig, ElasticityReport, EmergencyFundReport, FullReport, Ledger, MetricsEngine,
    ReportParams,
};

use super::{format_months, print_json, truncate};

pub fn cmd_debt(
    config: &AnalysisConfig,
    amount: f64,
    payment: f64,
    rate: f64,
    json: bool,
) -> Result<()> {
    let ledger = Ledger::default();
    let engine = MetricsEngine::with_config(&ledger, config.clone());
    let payoff = engine
        .debt_payoff_simulation(amount, payment, rate)
        .context("Debt payoff simulation failed")?;

    if json {
        return print_json(&payoff);
    }
    print_debt(&payoff);
    Ok(())
}

pub fn cmd_emergency_fund(
    ledger: &Ledger,
    config: &AnalysisConfig,
    months: f64,
    json: bool,
) -> Result<()> {
    let engine = MetricsEngine::with_config(ledger, config.clone());
    let report = engine
        .emergency_fund_adequacy(months)
        .context("Emergency fund analysis failed")?;

    if json {
        return print_json(&report);
    }
    print_emergency_fund(&report);
    Ok(())
}

pub fn cmd_elasticity(
    ledger: &Ledger,
    config: &AnalysisConfig,
    category: &str,
    change: f64,
    json: bool,
) -> Result<()> {
    let engine = MetricsEngine::with_config(ledger, config.clone());
    let report = engine
        .spending_elasticity(category, change)
        .context("Elasticity analysis failed")?;

    if json {
        return print_json(&report);
    }
    print_elasticity(&report);
    Ok(())
}

pub fn cmd_weekend(ledger: &Ledger, config: &AnalysisConfig, json: bool) -> Result<()> {
    let engine = MetricsEngine::with_config(ledger, config.clone());
    let report = engine
        .weekend_vs_weekday_premium()
        .context("Weekend analysis failed")?;

    if json {
        return print_json(&report);
    }
    print_weekend(&report);
    Ok(())
}

pub fn cmd_subscriptions(ledger: &Ledger, config: &AnalysisConfig, json: bool) -> Result<()> {
    let engine = MetricsEngine::with_config(ledger, config.clone());
    let report = engine
        .subscription_roi()
        .context("Subscription analysis failed")?;

    if json {
        return print_json(&report);
    }
    print_subscriptions(&report);
    Ok(())
}

pub fn cmd_analyze(
    ledger: &Ledger,
    config: &AnalysisConfig,
    params: &ReportParams,
    json: bool,
) -> Result<()> {
    let engine = MetricsEngine::with_config(ledger, config.clone());
    let report = engine.full_report(params);

    if json {
        return print_json(&report);
    }
    print_full_report(&report);
    Ok(())
}

fn print_full_report(report: &FullReport) {
    println!();
    println!("🧮 Financial Analysis");
    if let Some(period) = &report.period {
        println!("   Period: {} to {}", period.from, period.to);
    }
    println!("   Transactions: {}", report.transaction_count);

    if let Some(payoff) = &report.debt_payoff {
        print_debt(payoff);
    }
    if let Some(fund) = &report.emergency_fund {
        print_emergency_fund(fund);
    }
    if let Some(elasticity) = &report.elasticity {
        print_elasticity(elasticity);
    }
    if let Some(weekend) = &report.weekend {
        print_weekend(weekend);
    }
    if let Some(subs) = &report.subscriptions {
        print_subscriptions(subs);
    }

    if !report.errors.is_empty() {
        println!();
        println!("⚠️  Skipped sections:");
        for error in &report.errors {
            println!("   {}: {}", error.section, error.message);
        }
    }
}

fn print_debt(payoff: &DebtPayoff) {
    println!();
    println!("💳 Debt Payoff");
    println!("   ─────────────────────────────────────────────");
    println!("   Balance:          ${:>12.2}", payoff.debt_amount);
    println!("   Monthly payment:  ${:>12.2}", payoff.monthly_payment);
    println!(
        "   Interest rate:     {:>12.1}%",
        payoff.annual_interest_rate * 100.0
    );
    println!(
        "   Time to payoff:    {}",
        format_months(f64::from(payoff.months_to_payoff))
    );
    println!("   Interest paid:    ${:>12.2}", payoff.total_interest_paid);
    println!("   Total paid:       ${:>12.2}", payoff.total_amount_paid);
    if payoff.capped {
        println!(
            "   ⚠️  Stopped after {} months with a balance remaining",
            payoff.months_to_payoff
        );
    }
}

fn print_emergency_fund(report: &EmergencyFundReport) {
    println!();
    println!("🛟 Emergency Fund ({} months of expenses)", report.target_months);
    println!("   ─────────────────────────────────────────────");
    println!(
        "   Avg monthly expenses: ${:>10.2}",
        report.average_monthly_expenses
    );
    println!(
        "   Avg monthly savings:  ${:>10.2}",
        report.average_monthly_savings
    );
    println!(
        "   Target fund:          ${:>10.2}",
        report.target_emergency_fund
    );
    println!(
        "   Time to target:        {}",
        format_months(report.months_to_target)
    );
    if report.adequate {
        println!("   ✅ Reachable within a reasonable horizon");
    } else {
        println!("   ❌ Not reachable at the current savings rate");
    }
}

fn print_elasticity(report: &ElasticityReport) {
    println!();
    println!(
        "📉 Spending Elasticity: {} {:+.0}%",
        report.category,
        report.percent_change * 100.0
    );
    println!("   ─────────────────────────────────────────────");
    println!(
        "   Current monthly spending: ${:>10.2}",
        report.current_monthly_spending
    );
    println!(
        "   Monthly change:           ${:>10.2}",
        report.monthly_spending_change
    );
    println!(
        "   Annual change:            ${:>10.2}",
        report.annual_spending_change
    );
    println!(
        "   Monthly savings:          ${:>10.2} → ${:.2}",
        report.current_monthly_savings, report.new_monthly_savings
    );
    println!("   Invested difference:");
    println!("     1 year:   ${:>12.2}", report.compound_savings_1_year);
    println!("     5 years:  ${:>12.2}", report.compound_savings_5_years);
    println!("     10 years: ${:>12.2}", report.compound_savings_10_years);
}

fn print_weekend(report: &WeekendReport) {
    println!();
    println!("📅 Weekend vs Weekday Spending");
    println!(
        "   {} weekday days, {} weekend days",
        report.weekday_days, report.weekend_days
    );
    println!("   ─────────────────────────────────────────────────────────────");
    println!(
        "   {:22} │ {:>9} │ {:>9} │ {:>9} │ {:>6}",
        "Category", "Weekday/d", "Weekend/d", "Premium", "×"
    );
    println!("   ───────────────────────┼───────────┼───────────┼───────────┼───────");

    for category in &report.categories {
        println!(
            "   {:22} │ {:>9.2} │ {:>9.2} │ {:>+9.2} │ {:>6.2}",
            truncate(&category.category, 22),
            category.weekday_daily_avg,
            category.weekend_daily_avg,
            category.premium,
            category.multiplier
        );
    }

    println!();
    println!(
        "   Daily total: ${:.2} weekday, ${:.2} weekend ({:+.2})",
        report.weekday_daily_average, report.weekend_daily_average, report.weekend_premium_total
    );
    if !report.biggest_weekend_categories.is_empty() {
        println!(
            "   Biggest weekend categories: {}",
            report.biggest_weekend_categories.join(", ")
        );
    }
}

fn print_subscriptions(report: &SubscriptionRoiReport) {
    println!();
    println!("🔁 Subscription Value");
    println!(
        "   {} subscriptions, ${:.2}/month, ${:.2}/year",
        report.subscription_count, report.total_monthly, report.total_annual
    );
    println!("   ─────────────────────────────────────────────────────────────");
    println!(
        "   {:22} │ {:9} │ {:>8} │ {:>7} │ {}",
        "Merchant", "Type", "Monthly", "$/hour", "Value"
    );
    println!("   ───────────────────────┼───────────┼──────────┼─────────┼───────");

    for sub in &report.subscriptions {
        let value = match sub.value_rating {
            ValueRating::High => "✅ high",
            ValueRating::Medium => "➖ medium",
            ValueRating::Low => "❌ low",
        };
        println!(
            "   {:22} │ {:9} │ {:>8.2} │ {:>7.2} │ {}",
            truncate(&sub.merchant, 22),
            sub.service_type.as_str(),
            sub.monthly_cost,
            sub.cost_per_hour,
            value
        );
    }

    if !report.suggestions.is_empty() {
        println!();
        println!("   💡 Suggestions:");
        for suggestion in &report.suggestions {
            println!("      • {}", suggestion);
        }
    }
}
