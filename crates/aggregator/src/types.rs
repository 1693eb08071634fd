//! Shared types for trade aggregation

use serde::{Deserialize, Serialize};

/// Input columns, in the order the header must list them
pub const INPUT_COLUMNS: [&str; 5] = ["symbol", "venue", "price", "quantity", "timestamp"];

/// Report columns, in output order
pub const OUTPUT_COLUMNS: [&str; 9] = [
    "symbol", "first_ts", "last_ts", "open", "close", "high", "low", "avg_px", "vwap",
];

/// A single validated trade update
#[derive(Debug, Clone, PartialEq)]
pub struct TradeEvent {
    pub symbol: String,
    /// Part of the input schema; not used by aggregation
    pub venue: String,
    pub price: f64,
    pub quantity: u64,
    pub timestamp: i64,
}

/// How a timestamp lower than a symbol's last seen timestamp is treated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimestampOrder {
    /// Accept it; open/close then mean first/last applied
    #[default]
    Permissive,
    /// Reject it and abort the run
    Strict,
}

impl TimestampOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimestampOrder::Permissive => "permissive",
            TimestampOrder::Strict => "strict",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "permissive" => Some(TimestampOrder::Permissive),
            "strict" => Some(TimestampOrder::Strict),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_order_str() {
        assert_eq!(TimestampOrder::Strict.as_str(), "strict");
        assert_eq!(TimestampOrder::parse("STRICT"), Some(TimestampOrder::Strict));
        assert_eq!(TimestampOrder::parse("loose"), None);
        assert_eq!(TimestampOrder::default(), TimestampOrder::Permissive);
    }
}
