//! CSV loader for the transaction table
//!
//! Expects a header row with `date`, `merchant`, `category` and `amount`
//! columns (any order, case-insensitive) and an optional `description`.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::Transaction;

/// Column positions resolved from the header row
#[derive(Debug, Clone, Copy)]
struct Columns {
    date: usize,
    merchant: usize,
    category: usize,
    amount: usize,
    description: Option<usize>,
}

impl Columns {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let find = |names: &[&str]| {
            headers.iter().position(|h| {
                let h = h.trim().to_lowercase();
                names.iter().any(|n| h == *n)
            })
        };
        let require = |names: &[&str]| {
            find(names)
                .ok_or_else(|| Error::Import(format!("Missing '{}' column in header", names[0])))
        };

        Ok(Self {
            date: require(&["date", "transaction date"])?,
            merchant: require(&["merchant", "payee"])?,
            category: require(&["category"])?,
            amount: require(&["amount"])?,
            description: find(&["description", "memo"]),
        })
    }
}

/// Parse a transaction table from CSV
pub fn parse_csv<R: Read>(reader: R) -> Result<Vec<Transaction>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let columns = Columns::from_headers(&headers)?;
    let mut transactions = Vec::new();

    for (index, result) in rdr.records().enumerate() {
        let record = result?;
        // Header is line 1
        let line = index + 2;

        if record.iter().all(|field| field.is_empty()) {
            continue;
        }

        let field = |col: usize, name: &str| {
            record
                .get(col)
                .ok_or_else(|| Error::Import(format!("Line {}: missing {}", line, name)))
        };

        let date = parse_date(field(columns.date, "date")?)
            .map_err(|e| Error::Import(format!("Line {}: {}", line, e)))?;
        let merchant = field(columns.merchant, "merchant")?.to_string();
        let category = field(columns.category, "category")?.to_string();
        let amount = parse_amount(field(columns.amount, "amount")?)
            .map_err(|e| Error::Import(format!("Line {}: {}", line, e)))?;
        let description = columns
            .description
            .and_then(|col| record.get(col))
            .map(|s| s.to_string())
            .filter(|s| !s.is_empty());

        transactions.push(Transaction {
            date,
            merchant,
            category,
            amount,
            description,
        });
    }

    debug!("Parsed {} transactions", transactions.len());
    Ok(transactions)
}

/// Load a transaction table from a CSV file
pub fn load_file(path: &Path) -> Result<Vec<Transaction>> {
    let file = File::open(path)?;
    let transactions = parse_csv(file)?;
    debug!(
        "Loaded {} transactions from {}",
        transactions.len(),
        path.display()
    );
    Ok(transactions)
}

/// Parse a date string in various common formats
fn parse_date(s: &str) -> std::result::Result<NaiveDate, String> {
    let s = s.trim();

    // %y before %Y: chrono's %Y also accepts "24" and would yield year 24
    let formats = [
        "%Y-%m-%d", // 2024-01-15
        "%m/%d/%y", // 01/15/24
        "%m/%d/%Y", // 01/15/2024
        "%m-%d-%Y", // 01-15-2024
    ];

    for fmt in formats {
        match NaiveDate::parse_from_str(s, fmt) {
            Ok(date) if date.year() >= 1000 => return Ok(date),
            _ => {}
        }
    }

    // Timestamps written by dataframe exports, e.g. "2024-01-15 00:00:00"
    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(dt.date());
        }
    }

    Err(format!("Unable to parse date: {}", s))
}

/// Parse an amount string, handling currency symbols and commas
fn parse_amount(s: &str) -> std::result::Result<f64, String> {
    let cleaned: String = s
        .trim()
        .replace(['$', ',', ' '], "")
        .replace('(', "-")
        .replace(')', "");

    match cleaned.parse::<f64>() {
        Ok(amount) if amount.is_finite() => Ok(amount),
        _ => Err(format!("Unable to parse amount: {}", s)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_date() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(parse_date("01/15/2024").unwrap(), expected);
        assert_eq!(parse_date("2024-01-15").unwrap(), expected);
        assert_eq!(parse_date("01/15/24").unwrap(), expected);
        assert_eq!(parse_date("2024-01-15 00:00:00").unwrap(), expected);
        assert!(parse_date("15 January").is_err());
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("$1,234.56").unwrap(), 1234.56);
        assert_eq!(parse_amount("-123.45").unwrap(), -123.45);
        assert_eq!(parse_amount("(100.00)").unwrap(), -100.00);
        assert!(parse_amount("abc").is_err());
        assert!(parse_amount("NaN").is_err());
    }

    #[test]
    fn test_parse_csv() {
        let csv = r#"date,merchant,category,amount,description
2024-01-01,Corner Cafe,Food & Dining,-12.50,Corner Cafe Purchase
2024-01-02,Tech Company Salary,Income,4200.00,
2024-01-03,Streaming A,Subscriptions,-15.99,Streaming A Purchase"#;

        let transactions = parse_csv(csv.as_bytes()).unwrap();
        assert_eq!(transactions.len(), 3);
        assert_eq!(transactions[0].merchant, "Corner Cafe");
        assert_eq!(transactions[0].category, "Food & Dining");
        assert_eq!(transactions[0].amount, -12.50);
        assert_eq!(
            transactions[0].description.as_deref(),
            Some("Corner Cafe Purchase")
        );
        assert_eq!(transactions[1].amount, 4200.0);
        assert_eq!(transactions[1].description, None);
    }

    #[test]
    fn test_parse_csv_two_digit_year() {
        let csv = "date,merchant,category,amount\n01/15/24,A,Shopping,-10\n";
        let transactions = parse_csv(csv.as_bytes()).unwrap();
        assert_eq!(transactions[0].date.year(), 2024);
        assert_eq!(transactions[0].month_key().to_string(), "2024-01");
    }

    #[test]
    fn test_parse_date_rejects_short_year_with_dashes() {
        assert!(parse_date("01-15-24").is_err());
    }

    #[test]
    fn test_parse_csv_any_column_order() {
        let csv = "Amount,Category,Date,Merchant\n-5.00,Transportation,01/02/2024,Metro Transit\n";
        let transactions = parse_csv(csv.as_bytes()).unwrap();
        assert_eq!(transactions.len(), 1);
        assert_eq!(transactions[0].merchant, "Metro Transit");
        assert_eq!(
            transactions[0].date,
            NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()
        );
    }

    #[test]
    fn test_parse_csv_skips_blank_rows() {
        let csv = "date,merchant,category,amount\n2024-01-01,A,Shopping,-1.00\n,,,\n";
        let transactions = parse_csv(csv.as_bytes()).unwrap();
        assert_eq!(transactions.len(), 1);
    }

    #[test]
    fn test_parse_csv_missing_column() {
        let csv = "date,merchant,amount\n2024-01-01,A,-1.00\n";
        let err = parse_csv(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("category"));
    }

    #[test]
    fn test_parse_csv_bad_row_names_line() {
        let csv = "date,merchant,category,amount\n2024-01-01,A,Shopping,-1.00\nnot-a-date,B,Shopping,-2.00\n";
        let err = parse_csv(csv.as_bytes()).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Line 3"), "unexpected error: {}", msg);
        assert!(msg.contains("not-a-date"));
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "date,merchant,category,amount").unwrap();
        writeln!(file, "2024-02-10,Gas Station A,Transportation,-40.00").unwrap();
        file.flush().unwrap();

        let transactions = load_file(file.path()).unwrap();
        assert_eq!(transactions.len(), 1);
        assert_eq!(transactions[0].category, "Transportation");
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_file(Path::new("/definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
