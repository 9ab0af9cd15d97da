//! In-memory transaction table and its group-by reports
//!
//! Every report is recomputed from the current transactions on each call.

use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

use crate::models::*;

/// Week order used by day-of-week reports
const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// An immutable set of transactions
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn new(mut transactions: Vec<Transaction>) -> Self {
        transactions.sort_by_key(|t| t.date);
        Self { transactions }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// First and last transaction dates
    pub fn period(&self) -> Option<ReportPeriod> {
        let from = self.transactions.first()?.date;
        let to = self.transactions.last()?.date;
        Some(ReportPeriod { from, to })
    }

    /// A new ledger restricted to `from..=to`
    pub fn between(&self, from: NaiveDate, to: NaiveDate) -> Ledger {
        let transactions = self
            .transactions
            .iter()
            .filter(|t| t.date >= from && t.date <= to)
            .cloned()
            .collect();
        Ledger { transactions }
    }

    /// Income, expenses and net per calendar month, oldest first
    pub fn monthly_analysis(&self) -> Vec<MonthlyAggregate> {
        let mut months: BTreeMap<MonthKey, MonthlyAggregate> = BTreeMap::new();

        for tx in &self.transactions {
            let key = tx.month_key();
            let entry = months.entry(key).or_insert_with(|| MonthlyAggregate {
                month: key,
                total_income: 0.0,
                total_expenses: 0.0,
                net_amount: 0.0,
                transaction_count: 0,
            });

            if tx.is_income() {
                entry.total_income += tx.amount;
            } else if tx.is_expense() {
                entry.total_expenses += tx.amount;
            }
            entry.transaction_count += 1;
        }

        let aggregates: Vec<MonthlyAggregate> = months
            .into_values()
            .map(|mut m| {
                m.net_amount = m.total_income + m.total_expenses;
                m
            })
            .collect();

        debug!("Monthly analysis: {} months", aggregates.len());
        aggregates
    }

    /// Expense totals per category, largest first
    pub fn category_analysis(&self) -> Vec<CategoryAggregate> {
        // (expense total, count, signed sum)
        let mut categories: HashMap<&str, (f64, i64, f64)> = HashMap::new();

        for tx in &self.transactions {
            let entry = categories.entry(tx.category.as_str()).or_default();
            if tx.is_expense() {
                entry.0 += tx.amount.abs();
            }
            entry.1 += 1;
            entry.2 += tx.amount;
        }

        let mut aggregates: Vec<CategoryAggregate> = categories
            .into_iter()
            .map(|(category, (expense_amount, count, sum))| CategoryAggregate {
                category: category.to_string(),
                expense_amount,
                transaction_count: count,
                mean_amount: sum / count as f64,
            })
            .collect();

        aggregates.sort_by(|a, b| {
            b.expense_amount
                .total_cmp(&a.expense_amount)
                .then_with(|| a.category.cmp(&b.category))
        });
        aggregates
    }

    /// Charges in the subscriptions category, one entry per merchant
    pub fn subscriptions(&self) -> Vec<SubscriptionCharge> {
        let mut merchants: BTreeMap<&str, Vec<&Transaction>> = BTreeMap::new();

        for tx in self.transactions.iter().filter(|t| {
            t.is_expense() && t.category.eq_ignore_ascii_case(category::SUBSCRIPTIONS)
        }) {
            merchants.entry(tx.merchant.as_str()).or_default().push(tx);
        }

        merchants
            .into_iter()
            .filter_map(|(merchant, charges)| {
                let first_seen = charges.first()?.date;
                let last_seen = charges.last()?.date;
                let total: f64 = charges.iter().map(|t| t.amount.abs()).sum();
                Some(SubscriptionCharge {
                    merchant: merchant.to_string(),
                    avg_amount: total / charges.len() as f64,
                    charge_count: charges.len() as i64,
                    first_seen,
                    last_seen,
                })
            })
            .collect()
    }

    /// Merchants ranked by total expense
    pub fn top_merchants(&self, limit: usize) -> Vec<MerchantSummary> {
        let mut merchants =
            summarize_by_merchant(self.transactions.iter().filter(|t| t.is_expense()));
        merchants.truncate(limit);
        merchants
    }

    /// Income grouped by source, largest first
    pub fn income_sources(&self) -> Vec<MerchantSummary> {
        summarize_by_merchant(self.transactions.iter().filter(|t| t.is_income()))
    }

    /// Expense totals by day of week
    pub fn day_of_week_spending(&self) -> DailyPatterns {
        let mut totals: HashMap<Weekday, (f64, i64)> = HashMap::new();
        for tx in self.transactions.iter().filter(|t| t.is_expense()) {
            let entry = totals.entry(tx.date.weekday()).or_default();
            entry.0 += tx.amount.abs();
            entry.1 += 1;
        }

        let days: Vec<DaySpending> = WEEK
            .iter()
            .map(|day| {
                let (amount, transaction_count) = totals.get(day).copied().unwrap_or_default();
                DaySpending {
                    day: *day,
                    amount,
                    transaction_count,
                }
            })
            .collect();

        let weekend_total = days
            .iter()
            .filter(|d| matches!(d.day, Weekday::Sat | Weekday::Sun))
            .map(|d| d.amount)
            .sum();
        let weekday_total = days
            .iter()
            .filter(|d| !matches!(d.day, Weekday::Sat | Weekday::Sun))
            .map(|d| d.amount)
            .sum();

        DailyPatterns {
            days,
            weekday_total,
            weekend_total,
        }
    }

    /// Monthly expense totals per category, optionally for one category
    pub fn category_trends(&self, category: Option<&str>) -> Vec<TrendDataPoint> {
        let mut points: BTreeMap<(MonthKey, &str), (f64, i64)> = BTreeMap::new();

        for tx in self.transactions.iter().filter(|t| t.is_expense()) {
            if let Some(wanted) = category {
                if !tx.category.eq_ignore_ascii_case(wanted) {
                    continue;
                }
            }
            let entry = points
                .entry((tx.month_key(), tx.category.as_str()))
                .or_default();
            entry.0 += tx.amount.abs();
            entry.1 += 1;
        }

        points
            .into_iter()
            .map(|((month, category), (amount, transaction_count))| TrendDataPoint {
                month,
                category: category.to_string(),
                amount,
                transaction_count,
            })
            .collect()
    }
}

impl From<Vec<Transaction>> for Ledger {
    fn from(transactions: Vec<Transaction>) -> Self {
        Self::new(transactions)
    }
}

/// Group by merchant on absolute amounts, sorted by total descending
fn summarize_by_merchant<'a>(
    transactions: impl Iterator<Item = &'a Transaction>,
) -> Vec<MerchantSummary> {
    let mut merchants: HashMap<&str, (f64, i64)> = HashMap::new();
    for tx in transactions {
        let entry = merchants.entry(tx.merchant.as_str()).or_default();
        entry.0 += tx.amount.abs();
        entry.1 += 1;
    }

    let mut summaries: Vec<MerchantSummary> = merchants
        .into_iter()
        .map(|(merchant, (amount, count))| MerchantSummary {
            merchant: merchant.to_string(),
            amount,
            transaction_count: count,
            avg_amount: amount / count as f64,
        })
        .collect();

    summaries.sort_by(|a, b| {
        b.amount
            .total_cmp(&a.amount)
            .then_with(|| a.merchant.cmp(&b.merchant))
    });
    summaries
}
