//! Domain models for Tally

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Category names the analyses look for. Categories are otherwise free-form.
pub mod category {
    pub const FOOD_AND_DINING: &str = "Food & Dining";
    pub const SUBSCRIPTIONS: &str = "Subscriptions";
}

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: NaiveDate,
    pub merchant: String,
    pub category: String,
    /// Negative = expense, positive = income
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Transaction {
    pub fn new(
        date: NaiveDate,
        merchant: impl Into<String>,
        category: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self {
            date,
            merchant: merchant.into(),
            category: category.into(),
            amount,
            description: None,
        }
    }

    pub fn is_expense(&self) -> bool {
        self.amount < 0.0
    }

    pub fn is_income(&self) -> bool {
        self.amount > 0.0
    }

    /// Saturday or Sunday
    pub fn is_weekend(&self) -> bool {
        matches!(self.date.weekday(), Weekday::Sat | Weekday::Sun)
    }

    pub fn month_key(&self) -> MonthKey {
        MonthKey::from_date(self.date)
    }
}

/// A calendar month used as a group-by key
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl std::fmt::Display for MonthKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl std::str::FromStr for MonthKey {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| format!("Invalid month: {} (expected YYYY-MM)", s))?;
        let year: i32 = year
            .parse()
            .map_err(|_| format!("Invalid year in month: {}", s))?;
        let month: u32 = month
            .parse()
            .map_err(|_| format!("Invalid month: {}", s))?;
        if !(1..=12).contains(&month) {
            return Err(format!("Month out of range: {}", s));
        }
        Ok(Self { year, month })
    }
}

// ========== Aggregate Models ==========

/// Income, expense and net for one calendar month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyAggregate {
    pub month: MonthKey,
    pub total_income: f64,
    /// Sum of expenses (negative)
    pub total_expenses: f64,
    /// Income plus expenses
    pub net_amount: f64,
    pub transaction_count: i64,
}

/// Expense totals for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryAggregate {
    pub category: String,
    /// Absolute sum of expenses in this category
    pub expense_amount: f64,
    pub transaction_count: i64,
    /// Mean signed amount across the category's transactions
    pub mean_amount: f64,
}

/// A recurring charge from the subscriptions category, summarised per merchant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionCharge {
    pub merchant: String,
    /// Average absolute charge
    pub avg_amount: f64,
    pub charge_count: i64,
    pub first_seen: NaiveDate,
    pub last_seen: NaiveDate,
}

// ========== Report Models ==========

/// Report period info
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportPeriod {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

/// Merchant spending (or income) summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MerchantSummary {
    pub merchant: String,
    pub amount: f64,
    pub transaction_count: i64,
    pub avg_amount: f64,
}

/// Expense total for one day of the week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySpending {
    pub day: Weekday,
    pub amount: f64,
    pub transaction_count: i64,
}

/// Spending by day of week, Monday first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyPatterns {
    pub days: Vec<DaySpending>,
    pub weekday_total: f64,
    pub weekend_total: f64,
}

impl DailyPatterns {
    /// Share of spending that falls on the weekend (0.0 when there is none)
    pub fn weekend_share(&self) -> f64 {
        let total = self.weekday_total + self.weekend_total;
        if total > 0.0 {
            self.weekend_total / total
        } else {
            0.0
        }
    }
}

/// A single data point in a category trend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendDataPoint {
    pub month: MonthKey,
    pub category: String,
    pub amount: f64,
    pub transaction_count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_transaction_kind() {
        let expense = Transaction::new(date(2024, 1, 6), "Corner Cafe", "Food & Dining", -12.5);
        assert!(expense.is_expense());
        assert!(!expense.is_income());
        // 2024-01-06 is a Saturday
        assert!(expense.is_weekend());

        let income = Transaction::new(date(2024, 1, 8), "Tech Company Salary", "Income", 4200.0);
        assert!(income.is_income());
        assert!(!income.is_weekend());
    }

    #[test]
    fn test_month_key_roundtrip_and_order() {
        let key: MonthKey = "2024-03".parse().unwrap();
        assert_eq!(key, MonthKey { year: 2024, month: 3 });
        assert_eq!(key.to_string(), "2024-03");
        assert!(MonthKey { year: 2023, month: 12 } < key);
        assert!("2024-13".parse::<MonthKey>().is_err());
        assert!("March".parse::<MonthKey>().is_err());
    }

    #[test]
    fn test_weekend_share() {
        let patterns = DailyPatterns {
            days: Vec::new(),
            weekday_total: 300.0,
            weekend_total: 100.0,
        };
        assert_eq!(patterns.weekend_share(), 0.25);

        let empty = DailyPatterns {
            days: Vec::new(),
            weekday_total: 0.0,
            weekend_total: 0.0,
        };
        assert_eq!(empty.weekend_share(), 0.0);
    }
}
