//! Aggregation Engine
//!
//! Folds an unbounded stream of validated trade events into one
//! [`SymbolStats`] per symbol and produces a report ordered by symbol.
//!
//! PROPERTIES:
//! 1. O(1) work per event
//! 2. O(S) memory for S distinct symbols, independent of stream length
//! 3. Deterministic output order (byte-lexicographic by symbol)

use crate::error::AggregatorError;
use crate::stats::SymbolStats;
use crate::types::{TimestampOrder, TradeEvent};
use crate::Result;
use std::collections::HashMap;
use tracing::trace;

/// Per-symbol running aggregates for a single run
#[derive(Debug, Default)]
pub struct AggregationEngine {
    /// Running statistics per symbol
    symbols: HashMap<String, SymbolStats>,
    /// Events applied so far
    events: u64,
    /// Policy for timestamps that move backwards within a symbol
    order: TimestampOrder,
}

impl AggregationEngine {
    /// Create an engine that accepts out-of-order timestamps
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with an explicit ordering policy
    pub fn with_order(order: TimestampOrder) -> Self {
        Self {
            symbols: HashMap::new(),
            events: 0,
            order,
        }
    }

    /// Check an event against the ordering policy before it is applied
    ///
    /// Always passes under [`TimestampOrder::Permissive`].
    pub fn check_order(&self, event: &TradeEvent, line: u64) -> Result<()> {
        if self.order == TimestampOrder::Permissive {
            return Ok(());
        }

        match self.get(&event.symbol) {
            Some(stats) if event.timestamp < stats.last_ts() => Err(AggregatorError::OutOfOrder {
                line,
                symbol: event.symbol.clone(),
                timestamp: event.timestamp,
                last_ts: stats.last_ts(),
            }),
            _ => Ok(()),
        }
    }

    /// Fold one trade event into its symbol's statistics
    ///
    /// Every call counts as a distinct trade; nothing is de-duplicated.
    pub fn apply(&mut self, event: TradeEvent) {
        self.events += 1;

        match self.symbols.get_mut(&event.symbol) {
            Some(stats) => stats.update(event.price, event.quantity, event.timestamp),
            None => {
                trace!(symbol = %event.symbol, "Tracking new symbol");
                let stats = SymbolStats::create(
                    event.symbol.clone(),
                    event.price,
                    event.quantity,
                    event.timestamp,
                );
                self.symbols.insert(event.symbol, stats);
            }
        }
    }

    /// All statistics sorted ascending by symbol
    ///
    /// Does not mutate the engine; calling it twice yields the same report.
    pub fn finalize(&self) -> Vec<&SymbolStats> {
        let mut report: Vec<&SymbolStats> = self.symbols.values().collect();
        report.sort_unstable_by(|a, b| a.symbol().cmp(b.symbol()));
        report
    }

    pub fn get(&self, symbol: &str) -> Option<&SymbolStats> {
        self.symbols.get(symbol)
    }

    /// Number of distinct symbols seen
    pub fn symbol_count(&self) -> usize {
        self.symbols.len()
    }

    /// Number of events applied
    pub fn event_count(&self) -> u64 {
        self.events
    }
}
