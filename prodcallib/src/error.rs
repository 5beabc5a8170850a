//! Единый тип ошибок публичного API.

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProdcalError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Malformed row: expected {expected} fields, found {found}")]
    MalformedRow { expected: usize, found: usize },

    #[error("Invalid number in field `{field}`: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("Invalid day token {token:?} for month {}", .month.format("%Y-%m"))]
    InvalidDayToken { token: String, month: NaiveDate },

    #[error("Invalid month number: {month}")]
    InvalidMonth { month: u32 },

    #[error("line {line}: {source}")]
    AtLine {
        line: u64,
        #[source]
        source: Box<ProdcalError>,
    },
}

impl ProdcalError {
    /// Ошибка без обёрток `AtLine`.
    pub fn root(&self) -> &ProdcalError {
        match self {
            ProdcalError::AtLine { source, .. } => source.root(),
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, ProdcalError>;
