//! Report command implementations

use anyhow::Result;
use serde::Serialize;
use tally_core::{CategoryAggregate, DailyPatterns, Ledger, MonthlyAggregate, ReportPeriod};

use super::{print_json, truncate};

/// Combined output of the summary command
#[derive(Serialize)]
struct Summary {
    period: Option<ReportPeriod>,
    transaction_count: usize,
    months: Vec<MonthlyAggregate>,
    categories: Vec<CategoryAggregate>,
    days: DailyPatterns,
}

pub fn cmd_summary(ledger: &Ledger, json: bool) -> Result<()> {
    let summary = Summary {
        period: ledger.period(),
        transaction_count: ledger.len(),
        months: ledger.monthly_analysis(),
        categories: ledger.category_analysis(),
        days: ledger.day_of_week_spending(),
    };

    if json {
        return print_json(&summary);
    }

    println!();
    println!("📊 Summary");
    let Some(period) = &summary.period else {
        println!("   No transactions found.");
        return Ok(());
    };
    println!("   Period: {} to {}", period.from, period.to);
    println!("   Transactions: {}", summary.transaction_count);
    println!("   ─────────────────────────────────────────────────────────────");

    println!(
        "   {:8} │ {:>11} │ {:>11} │ {:>11} │ {:>5}",
        "Month", "Income", "Expenses", "Net", "Count"
    );
    println!("   ─────────┼─────────────┼─────────────┼─────────────┼───────");
    for month in &summary.months {
        println!(
            "   {:8} │ {:>11.2} │ {:>11.2} │ {:>11.2} │ {:>5}",
            month.month.to_string(),
            month.total_income,
            month.total_expenses,
            month.net_amount,
            month.transaction_count
        );
    }

    let total_expenses: f64 = summary.categories.iter().map(|c| c.expense_amount).sum();

    println!();
    println!(
        "   {:25} │ {:>10} │ {:>6} │ {:>5}",
        "Category", "Spent", "%", "Count"
    );
    println!("   ──────────────────────────┼────────────┼────────┼───────");
    for category in summary.categories.iter().filter(|c| c.expense_amount > 0.0) {
        let percentage = if total_expenses > 0.0 {
            category.expense_amount / total_expenses * 100.0
        } else {
            0.0
        };
        println!(
            "   {:25} │ {:>10.2} │ {:>5.1}% │ {:>5}",
            truncate(&category.category, 25),
            category.expense_amount,
            percentage,
            category.transaction_count
        );
    }
    println!("   Total spent: ${:.2}", total_expenses);

    println!();
    println!("   {:9} │ {:>10} │ {:>5}", "Day", "Spent", "Count");
    println!("   ──────────┼────────────┼───────");
    for day in &summary.days.days {
        println!(
            "   {:9} │ {:>10.2} │ {:>5}",
            day.day.to_string(),
            day.amount,
            day.transaction_count
        );
    }
    println!(
        "   Weekend share of spending: {:.1}%",
        summary.days.weekend_share() * 100.0
    );

    Ok(())
}

pub fn cmd_trends(ledger: &Ledger, category: Option<&str>, json: bool) -> Result<()> {
    let points = ledger.category_trends(category);

    if json {
        return print_json(&points);
    }

    println!();
    match category {
        Some(name) => println!("📈 Spending Trends: {}", name),
        None => println!("📈 Spending Trends"),
    }
    println!("   ─────────────────────────────────────────────────────────────");

    if points.is_empty() {
        println!("   No spending found.");
        return Ok(());
    }

    println!(
        "   {:8} │ {:25} │ {:>10} │ {:>5}",
        "Month", "Category", "Spent", "Count"
    );
    println!("   ─────────┼───────────────────────────┼────────────┼───────");
    for point in &points {
        println!(
            "   {:8} │ {:25} │ {:>10.2} │ {:>5}",
            point.month.to_string(),
            truncate(&point.category, 25),
            point.amount,
            point.transaction_count
        );
    }

    Ok(())
}

pub fn cmd_merchants(ledger: &Ledger, limit: usize, json: bool) -> Result<()> {
    let merchants = ledger.top_merchants(limit);

    if json {
        return print_json(&merchants);
    }

    println!();
    println!("🏪 Top Merchants");
    println!("   ─────────────────────────────────────────────────────────────");

    if merchants.is_empty() {
        println!("   No spending found.");
        return Ok(());
    }

    println!(
        "   {:>3} │ {:30} │ {:>10} │ {:>5} │ {:>9}",
        "#", "Merchant", "Total", "Count", "Average"
    );
    println!("   ────┼────────────────────────────────┼────────────┼───────┼───────────");
    for (i, merchant) in merchants.iter().enumerate() {
        println!(
            "   {:>3} │ {:30} │ {:>10.2} │ {:>5} │ {:>9.2}",
            i + 1,
            truncate(&merchant.merchant, 30),
            merchant.amount,
            merchant.transaction_count,
            merchant.avg_amount
        );
    }

    let sources = ledger.income_sources();
    if !sources.is_empty() {
        println!();
        println!("   💰 Income sources:");
        for source in &sources {
            println!(
                "      {:30} ${:>10.2} ({} payments)",
                truncate(&source.merchant, 30),
                source.amount,
                source.transaction_count
            );
        }
    }

    Ok(())
}
