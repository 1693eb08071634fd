//! Aggregation run metrics
//!
//! Recorded through the `metrics` facade; without an installed recorder
//! every call is a no-op.

use crate::error::AggregatorError;
use metrics::{counter, gauge, histogram, Counter, Gauge, Histogram};
use std::time::Duration;

/// Metrics for one aggregation run
///
/// # Metrics
///
/// * `tradeagg_rows_total` - Data rows read
/// * `tradeagg_events_applied_total` - Events folded into the engine
/// * `tradeagg_symbols` - Distinct symbols in the report
/// * `tradeagg_rejected_total` - Runs aborted, labelled by reason
/// * `tradeagg_run_duration_seconds` - Wall time of the run
#[derive(Clone)]
pub struct AggregationMetrics {
    rows_total: Counter,
    events_applied: Counter,
    symbols: Gauge,
    run_duration: Histogram,
}

impl AggregationMetrics {
    pub fn new() -> Self {
        Self {
            rows_total: counter!("tradeagg_rows_total"),
            events_applied: counter!("tradeagg_events_applied_total"),
            symbols: gauge!("tradeagg_symbols"),
            run_duration: histogram!("tradeagg_run_duration_seconds"),
        }
    }

    pub fn row_read(&self) {
        self.rows_total.increment(1);
    }

    pub fn event_applied(&self) {
        self.events_applied.increment(1);
    }

    pub fn set_symbols(&self, count: usize) {
        self.symbols.set(count as f64);
    }

    pub fn record_duration(&self, duration: Duration) {
        self.run_duration.record(duration.as_secs_f64());
    }

    pub fn record_rejection(&self, error: &AggregatorError) {
        counter!("tradeagg_rejected_total", "reason" => error.reason()).increment(1);
    }
}

impl Default for AggregationMetrics {
    fn default() -> Self {
        Self::new()
    }
}
