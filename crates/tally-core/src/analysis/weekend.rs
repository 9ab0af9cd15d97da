//! Weekend vs weekday spending comparison

use chrono::NaiveDate;
use std::collections::{BTreeSet, HashMap, HashSet};

use super::types::{CategoryPremium, WeekendReport};
use crate::error::{Error, Result};
use crate::models::Transaction;

/// Default number of categories reported as the biggest weekend spenders
pub const DEFAULT_TOP_CATEGORIES: usize = 5;

/// Expense totals per category and the distinct dates seen in one partition
#[derive(Default)]
struct Partition<'a> {
    spending: HashMap<&'a str, f64>,
    days: HashSet<NaiveDate>,
}

impl<'a> Partition<'a> {
    fn add(&mut self, tx: &'a Transaction) {
        self.days.insert(tx.date);
        if tx.is_expense() {
            *self.spending.entry(tx.category.as_str()).or_insert(0.0) += tx.amount.abs();
        }
    }

    fn total(&self) -> f64 {
        self.spending.values().sum()
    }

    /// Category total per distinct day; an empty partition divides by 1
    fn daily_avg(&self, category: &str) -> f64 {
        let days = self.days.len().max(1) as f64;
        self.spending.get(category).copied().unwrap_or(0.0) / days
    }
}

/// Compare daily category spending on weekends (Saturday, Sunday) against
/// weekdays.
///
/// Only expenses count toward category totals, while every transaction
/// contributes to the distinct-day count of its partition. Categories are
/// returned with the largest weekend premium first.
pub fn weekend_vs_weekday_premium(
    transactions: &[Transaction],
    top_categories: usize,
) -> Result<WeekendReport> {
    if transactions.is_empty() {
        return Err(Error::NoData("No transactions available".into()));
    }

    let mut weekday = Partition::default();
    let mut weekend = Partition::default();
    for tx in transactions {
        if tx.is_weekend() {
            weekend.add(tx);
        } else {
            weekday.add(tx);
        }
    }

    let names: BTreeSet<&str> = weekday
        .spending
        .keys()
        .chain(weekend.spending.keys())
        .copied()
        .collect();

    let mut categories: Vec<CategoryPremium> = names
        .into_iter()
        .map(|category| {
            let weekday_avg = weekday.daily_avg(category);
            let weekend_avg = weekend.daily_avg(category);
            let divisor = if weekday_avg == 0.0 { 1.0 } else { weekday_avg };
            CategoryPremium {
                category: category.to_string(),
                weekday_daily_avg: weekday_avg,
                weekend_daily_avg: weekend_avg,
                premium: weekend_avg - weekday_avg,
                multiplier: weekend_avg / divisor,
            }
        })
        .collect();

    // Stable sort keeps alphabetical order among equal premiums
    categories.sort_by(|a, b| b.premium.total_cmp(&a.premium));

    let biggest_weekend_categories = categories
        .iter()
        .take(top_categories)
        .map(|c| c.category.clone())
        .collect();

    Ok(WeekendReport {
        total_weekday_spending: weekday.total(),
        total_weekend_spending: weekend.total(),
        weekday_days: weekday.days.len(),
        weekend_days: weekend.days.len(),
        weekday_daily_average: categories.iter().map(|c| c.weekday_daily_avg).sum(),
        weekend_daily_average: categories.iter().map(|c| c.weekend_daily_avg).sum(),
        weekend_premium_total: categories.iter().map(|c| c.premium).sum(),
        categories,
        biggest_weekend_categories,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(day: u32, category: &str, amount: f64) -> Transaction {
        // June 2024: the 1st is a Saturday, the 3rd a Monday
        let date = NaiveDate::from_ymd_opt(2024, 6, day).unwrap();
        Transaction::new(date, format!("Merchant {}", day), category, amount)
    }

    #[test]
    fn test_premium_and_multiplier() {
        let transactions = vec![
            // Weekdays: Mon 3rd, Tue 4th
            tx(3, "Food & Dining", -20.0),
            tx(4, "Food & Dining", -20.0),
            tx(4, "Transportation", -10.0),
            // Weekend: Sat 1st, Sun 2nd
            tx(1, "Food & Dining", -60.0),
            tx(2, "Food & Dining", -40.0),
            tx(2, "Entertainment", -30.0),
        ];

        let report = weekend_vs_weekday_premium(&transactions, DEFAULT_TOP_CATEGORIES).unwrap();
        assert_eq!(report.weekday_days, 2);
        assert_eq!(report.weekend_days, 2);
        assert_eq!(report.total_weekday_spending, 50.0);
        assert_eq!(report.total_weekend_spending, 130.0);

        let food = report
            .categories
            .iter()
            .find(|c| c.category == "Food & Dining")
            .unwrap();
        assert_eq!(food.weekday_daily_avg, 20.0);
        assert_eq!(food.weekend_daily_avg, 50.0);
        assert_eq!(food.premium, 30.0);
        assert_eq!(food.multiplier, 2.5);

        // No weekday spending: divisor treated as 1
        let fun = report
            .categories
            .iter()
            .find(|c| c.category == "Entertainment")
            .unwrap();
        assert_eq!(fun.weekday_daily_avg, 0.0);
        assert_eq!(fun.multiplier, 15.0);

        assert_eq!(
            report.biggest_weekend_categories,
            vec!["Food & Dining", "Entertainment", "Transportation"]
        );
        assert_eq!(report.weekend_premium_total, 30.0 + 15.0 - 5.0);
    }

    #[test]
    fn test_no_weekend_transactions() {
        let transactions = vec![
            tx(3, "Food & Dining", -20.0),
            tx(5, "Shopping", -80.0),
            tx(6, "Income", 3000.0),
        ];

        let report = weekend_vs_weekday_premium(&transactions, DEFAULT_TOP_CATEGORIES).unwrap();
        assert_eq!(report.weekend_days, 0);
        assert!(!report.categories.is_empty());
        for category in &report.categories {
            assert_eq!(category.weekend_daily_avg, 0.0);
            assert_eq!(category.multiplier, 0.0);
        }
        // Income day counts toward distinct weekdays
        assert_eq!(report.weekday_days, 3);
        let shopping = report
            .categories
            .iter()
            .find(|c| c.category == "Shopping")
            .unwrap();
        assert!((shopping.weekday_daily_avg - 80.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_income_is_not_spending() {
        let transactions = vec![tx(1, "Income", 500.0), tx(3, "Food & Dining", -10.0)];
        let report = weekend_vs_weekday_premium(&transactions, DEFAULT_TOP_CATEGORIES).unwrap();
        assert!(report.categories.iter().all(|c| c.category != "Income"));
        assert_eq!(report.total_weekend_spending, 0.0);
        assert_eq!(report.weekend_days, 1);
    }

    #[test]
    fn test_top_categories_limit() {
        let transactions: Vec<Transaction> = (0..8)
            .map(|i| tx(1, &format!("Category {}", i), -(i as f64 + 1.0)))
            .collect();
        let report = weekend_vs_weekday_premium(&transactions, 3).unwrap();
        assert_eq!(report.categories.len(), 8);
        assert_eq!(
            report.biggest_weekend_categories,
            vec!["Category 7", "Category 6", "Category 5"]
        );
    }

    #[test]
    fn test_empty() {
        let err = weekend_vs_weekday_premium(&[], DEFAULT_TOP_CATEGORIES).unwrap_err();
        assert!(matches!(err, Error::NoData(_)));
    }
}
