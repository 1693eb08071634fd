//! Trade Aggregation for tradeagg
//!
//! This crate folds a stream of trade updates into one summary per symbol
//! in a single pass.
//!
//! # Core Components
//!
//! - [`stats`] - Per-symbol running statistics (OHLC, average price, VWAP)
//! - [`engine`] - Symbol table and the fold over trade events
//! - [`schema`] - Header and row validation
//! - [`reader`] - Record sources over delimited text
//! - [`report`] - Report serialization
//! - [`pipeline`] - End-to-end run from input stream to report
//!
//! # Key Invariants
//!
//! - Memory grows with distinct symbols, never with input length
//! - No output is produced before the whole input has been validated
//! - Report rows are sorted by symbol, byte-lexicographically
//! - Average price and VWAP are derived on read, never stored

pub mod engine;
pub mod error;
pub mod metrics;
pub mod pipeline;
pub mod reader;
pub mod report;
pub mod schema;
pub mod stats;
pub mod types;

pub use engine::AggregationEngine;
pub use error::AggregatorError;
pub use metrics::AggregationMetrics;
pub use pipeline::{aggregate, process_stream, PipelineOptions, RunSummary};
pub use reader::{CsvRecordSource, RawRecord, RecordSource};
pub use report::ReportWriter;
pub use stats::SymbolStats;
pub use types::{TimestampOrder, TradeEvent, INPUT_COLUMNS, OUTPUT_COLUMNS};

pub type Result<T> = std::result::Result<T, AggregatorError>;
