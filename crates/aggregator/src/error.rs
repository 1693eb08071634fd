//! Aggregation error types

use thiserror::Error;

/// Errors that abort an aggregation run
///
/// Every validation variant carries the 1-based line number and the raw
/// fields of the offending row so the input can be located without a rerun.
#[derive(Error, Debug)]
pub enum AggregatorError {
    /// Header row does not match the expected column set/order
    #[error("schema mismatch: expected header {expected:?}, got {raw:?} (normalized: {normalized:?})")]
    Schema {
        raw: Vec<String>,
        normalized: Vec<String>,
        expected: Vec<String>,
    },

    /// Data row with the wrong number of fields
    #[error("malformed row at line {line}: expected 5 fields, got {fields:?}")]
    MalformedRow { line: u64, fields: Vec<String> },

    /// Field that does not parse as its expected type
    #[error("malformed value at line {line}: invalid {field} {value:?} in row {fields:?}")]
    MalformedValue {
        line: u64,
        field: &'static str,
        value: String,
        fields: Vec<String>,
    },

    /// Quantity that is zero or negative
    #[error("invalid quantity at line {line}: {quantity} must be positive in row {fields:?}")]
    InvalidQuantity {
        line: u64,
        quantity: i64,
        fields: Vec<String>,
    },

    /// Price below zero
    #[error("invalid price at line {line}: {price} must not be negative in row {fields:?}")]
    InvalidPrice {
        line: u64,
        price: f64,
        fields: Vec<String>,
    },

    /// Timestamp regressed for a symbol (strict ordering only)
    #[error("out-of-order event at line {line}: {symbol} timestamp {timestamp} is before {last_ts}")]
    OutOfOrder {
        line: u64,
        symbol: String,
        timestamp: i64,
        last_ts: i64,
    },

    /// Tokenizer failure while reading input
    #[error("failed to read input: {0}")]
    Input(#[source] csv::Error),

    /// Failure while serializing the report
    #[error("failed to write report: {0}")]
    Output(#[source] csv::Error),

    /// Failure flushing the report to its destination
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

impl AggregatorError {
    /// Short machine-friendly label, used for metrics and log fields
    pub fn reason(&self) -> &'static str {
        match self {
            Self::Schema { .. } => "schema",
            Self::MalformedRow { .. } => "malformed_row",
            Self::MalformedValue { .. } => "malformed_value",
            Self::InvalidQuantity { .. } => "invalid_quantity",
            Self::InvalidPrice { .. } => "invalid_price",
            Self::OutOfOrder { .. } => "out_of_order",
            Self::Input(_) => "input",
            Self::Output(_) | Self::Io(_) => "output",
        }
    }

    /// Line number of the offending row, when the error is tied to one
    pub fn line(&self) -> Option<u64> {
        match self {
            Self::MalformedRow { line, .. }
            | Self::MalformedValue { line, .. }
            | Self::InvalidQuantity { line, .. }
            | Self::InvalidPrice { line, .. }
            | Self::OutOfOrder { line, .. } => Some(*line),
            _ => None,
        }
    }
}
