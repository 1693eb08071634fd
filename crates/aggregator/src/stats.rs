use serde::Serialize;

/// Running statistics for one symbol
///
/// Holds only accumulators, never the events themselves, so memory stays
/// constant per symbol however many trades are folded in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SymbolStats {
    symbol: String,
    first_ts: i64,
    last_ts: i64,
    open: f64,
    close: f64,
    high: f64,
    low: f64,
    sum_price: f64,
    event_count: u64,
    sum_price_times_qty: f64,
    // Each quantity is a full u64, so the total needs the wider type
    sum_qty: u128,
}

impl SymbolStats {
    /// Start the statistics from a symbol's first trade
    pub fn create(symbol: impl Into<String>, price: f64, quantity: u64, timestamp: i64) -> Self {
        Self {
            symbol: symbol.into(),
            first_ts: timestamp,
            last_ts: timestamp,
            open: price,
            close: price,
            high: price,
            low: price,
            sum_price: price,
            event_count: 1,
            sum_price_times_qty: price * quantity as f64,
            sum_qty: u128::from(quantity),
        }
    }

    /// Fold another trade into the statistics. O(1).
    pub fn update(&mut self, price: f64, quantity: u64, timestamp: i64) {
        self.last_ts = timestamp;
        self.close = price;
        self.high = self.high.max(price);
        self.low = self.low.min(price);
        self.sum_price += price;
        self.event_count += 1;
        self.sum_price_times_qty += price * quantity as f64;
        self.sum_qty += u128::from(quantity);
    }

    /// Arithmetic mean of all prices seen
    pub fn avg_price(&self) -> f64 {
        if self.event_count == 0 {
            return 0.0;
        }
        self.sum_price / self.event_count as f64
    }

    /// Volume-weighted average price
    pub fn vwap(&self) -> f64 {
        if self.sum_qty == 0 {
            return 0.0;
        }
        self.sum_price_times_qty / self.sum_qty as f64
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn first_ts(&self) -> i64 {
        self.first_ts
    }

    pub fn last_ts(&self) -> i64 {
        self.last_ts
    }

    pub fn open(&self) -> f64 {
        self.open
    }

    pub fn close(&self) -> f64 {
        self.close
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn event_count(&self) -> u64 {
        self.event_count
    }
}
