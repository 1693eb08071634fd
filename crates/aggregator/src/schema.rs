//! Header and row validation
//!
//! Turns raw field sequences into [`TradeEvent`]s. Any violation is fatal
//! for the run, so every function here returns on the first problem found.

use crate::error::AggregatorError;
use crate::types::{TradeEvent, INPUT_COLUMNS};
use crate::Result;

const BOM: char = '\u{feff}';

/// Normalize a header row for comparison
///
/// Strips a byte-order mark from the first cell only, then trims and
/// lowercases every cell. Case folding is ASCII-only; the expected column
/// names are ASCII, so non-ASCII letters are left as they are.
pub fn normalize_header(raw: &[String]) -> Vec<String> {
    raw.iter()
        .enumerate()
        .map(|(i, cell)| {
            let cell = if i == 0 {
                cell.strip_prefix(BOM).unwrap_or(cell)
            } else {
                cell.as_str()
            };
            cell.trim().to_ascii_lowercase()
        })
        .collect()
}

/// Check that a header row names the expected columns in order
pub fn validate_header(raw: &[String]) -> Result<()> {
    let normalized = normalize_header(raw);

    if normalized.iter().map(String::as_str).eq(INPUT_COLUMNS) {
        return Ok(());
    }

    Err(AggregatorError::Schema {
        raw: raw.to_vec(),
        normalized,
        expected: INPUT_COLUMNS.iter().map(|c| c.to_string()).collect(),
    })
}

/// Validate one data row and build the trade event it describes
pub fn parse_row(line: u64, fields: &[String]) -> Result<TradeEvent> {
    let [symbol, venue, price, quantity, timestamp] = fields else {
        return Err(AggregatorError::MalformedRow {
            line,
            fields: fields.to_vec(),
        });
    };

    let malformed = |field: &'static str, value: &str| AggregatorError::MalformedValue {
        line,
        field,
        value: value.to_string(),
        fields: fields.to_vec(),
    };

    if symbol.trim().is_empty() {
        return Err(malformed("symbol", symbol));
    }

    let price = match price.trim().parse::<f64>() {
        Ok(p) if p.is_finite() => p,
        _ => return Err(malformed("price", price)),
    };
    if price < 0.0 {
        return Err(AggregatorError::InvalidPrice {
            line,
            price,
            fields: fields.to_vec(),
        });
    }
    // -0.0 would otherwise print as "-0.000"
    let price = if price == 0.0 { 0.0 } else { price };

    // Any positive u64 is accepted; zero and negatives that fit in i64 are
    // reported as InvalidQuantity, anything else as malformed.
    let raw_quantity = quantity.trim();
    let quantity = match raw_quantity.parse::<u64>() {
        Ok(q) if q > 0 => q,
        Ok(_) => {
            return Err(AggregatorError::InvalidQuantity {
                line,
                quantity: 0,
                fields: fields.to_vec(),
            })
        }
        Err(_) => {
            return Err(match raw_quantity.parse::<i64>() {
                Ok(q) => AggregatorError::InvalidQuantity {
                    line,
                    quantity: q,
                    fields: fields.to_vec(),
                },
                Err(_) => malformed("quantity", quantity),
            })
        }
    };

    let timestamp = timestamp
        .trim()
        .parse::<i64>()
        .map_err(|_| malformed("timestamp", timestamp))?;

    Ok(TradeEvent {
        symbol: symbol.clone(),
        venue: venue.clone(),
        price,
        quantity,
        timestamp,
    })
}
