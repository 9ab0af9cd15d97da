//! Error types for Tally

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("No data available: {0}")]
    NoData(String),

    #[error("Category '{0}' not found")]
    CategoryNotFound(String),

    #[error(
        "Payment too small - debt will never be paid off (payment {payment:.2} <= first month's interest {interest:.2})"
    )]
    PaymentTooSmall { payment: f64, interest: f64 },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Import error: {0}")]
    Import(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
