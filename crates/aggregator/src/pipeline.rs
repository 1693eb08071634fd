//! End-to-end aggregation run
//!
//! Reads the header, validates and folds every data row, and only once the
//! input is exhausted writes the report. A failure anywhere leaves the
//! output untouched.

use crate::engine::AggregationEngine;
use crate::metrics::AggregationMetrics;
use crate::reader::{CsvRecordSource, RecordSource};
use crate::report::ReportWriter;
use crate::schema::{parse_row, validate_header};
use crate::types::TimestampOrder;
use crate::Result;
use std::io::{Read, Write};
use std::time::Instant;
use tracing::{debug, info, instrument};

/// Options for a single run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineOptions {
    /// Input field delimiter
    pub delimiter: u8,
    pub order: TimestampOrder,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            order: TimestampOrder::Permissive,
        }
    }
}

/// What a successful run processed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Data rows read, excluding the header
    pub rows: u64,
    /// Rows written to the report
    pub symbols: usize,
}

/// Fold every row of `source` into a new engine
///
/// A source with no rows at all yields an empty engine.
pub fn aggregate<S: RecordSource>(
    source: &mut S,
    order: TimestampOrder,
    metrics: &AggregationMetrics,
) -> Result<AggregationEngine> {
    let mut engine = AggregationEngine::with_order(order);

    let Some(header) = source.next_record()? else {
        debug!("Empty input, no header row");
        return Ok(engine);
    };
    validate_header(&header.fields)?;

    while let Some(record) = source.next_record()? {
        metrics.row_read();

        let event = parse_row(record.line, &record.fields)?;
        engine.check_order(&event, record.line)?;
        engine.apply(event);

        metrics.event_applied();
    }

    debug!(
        symbols = engine.symbol_count(),
        events = engine.event_count(),
        "Input consumed"
    );
    Ok(engine)
}

/// Aggregate delimited trade rows from `input` and write the report to `output`
#[instrument(skip_all, fields(order = options.order.as_str()))]
pub fn process_stream<R: Read, W: Write>(
    input: R,
    output: W,
    options: &PipelineOptions,
) -> Result<RunSummary> {
    let metrics = AggregationMetrics::new();
    let started = Instant::now();

    let mut source = CsvRecordSource::with_delimiter(input, options.delimiter);
    let engine = match aggregate(&mut source, options.order, &metrics) {
        Ok(engine) => engine,
        Err(e) => {
            metrics.record_rejection(&e);
            debug!(reason = e.reason(), line = ?e.line(), error = %e, "Aggregation aborted");
            return Err(e);
        }
    };

    let rows = engine.event_count();
    let mut writer = ReportWriter::new(output);
    let symbols = writer.write_report(engine.finalize())?;
    writer.finish()?;

    metrics.set_symbols(symbols);
    metrics.record_duration(started.elapsed());
    info!(rows, symbols, elapsed_ms = started.elapsed().as_millis() as u64, "Report written");

    Ok(RunSummary { rows, symbols })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AggregatorError;
    use crate::reader::RawRecord;
    use assert_matches::assert_matches;
    use std::collections::VecDeque;

    struct Rows(VecDeque<RawRecord>);

    impl Rows {
        fn new(rows: &[&[&str]]) -> Self {
            Self(
                rows.iter()
                    .enumerate()
                    .map(|(i, cells)| RawRecord {
                        line: i as u64 + 1,
                        fields: cells.iter().map(|c| c.to_string()).collect(),
                    })
                    .collect(),
            )
        }
    }

    impl RecordSource for Rows {
        fn next_record(&mut self) -> Result<Option<RawRecord>> {
            Ok(self.0.pop_front())
        }
    }

    const HEADER: &[&str] = &["symbol", "venue", "price", "quantity", "timestamp"];

    #[test]
    fn test_aggregate_from_record_source() {
        let mut rows = Rows::new(&[
            HEADER,
            &["MSFT", "XNAS", "300", "1", "1"],
            &["AAPL", "XNAS", "100", "2", "2"],
            &["MSFT", "ARCX", "310", "1", "3"],
        ]);

        let engine = aggregate(&mut rows, TimestampOrder::Permissive, &AggregationMetrics::new()).unwrap();

        assert_eq!(engine.symbol_count(), 2);
        assert_eq!(engine.event_count(), 3);
        assert_eq!(engine.get("MSFT").unwrap().close(), 310.0);
    }

    #[test]
    fn test_aggregate_empty_source() {
        let mut rows = Rows::new(&[]);

        let engine = aggregate(&mut rows, TimestampOrder::Permissive, &AggregationMetrics::new()).unwrap();

        assert_eq!(engine.symbol_count(), 0);
    }

    #[test]
    fn test_aggregate_stops_at_first_error() {
        let mut rows = Rows::new(&[
            HEADER,
            &["A", "V", "1", "0", "1"],
            &["B", "V", "x", "1", "1"],
        ]);

        let result = aggregate(&mut rows, TimestampOrder::Permissive, &AggregationMetrics::new());

        assert_matches!(result, Err(AggregatorError::InvalidQuantity { line: 2, .. }));
        assert_eq!(rows.0.len(), 1);
    }

    #[test]
    fn test_process_stream_writes_nothing_on_error() {
        let input = "symbol,venue,price,quantity,timestamp\nA,V,1,1,1\nB,V,1,1\n";
        let mut output = Vec::new();

        let result = process_stream(input.as_bytes(), &mut output, &PipelineOptions::default());

        assert_matches!(result, Err(AggregatorError::MalformedRow { line: 3, .. }));
        assert!(output.is_empty());
    }

    #[test]
    fn test_process_stream_summary() {
        let input = "symbol,venue,price,quantity,timestamp\nA,V,1,1,1\nB,V,2,1,1\nA,V,3,1,2\n";
        let mut output = Vec::new();

        let summary = process_stream(input.as_bytes(), &mut output, &PipelineOptions::default()).unwrap();

        assert_eq!(summary, RunSummary { rows: 3, symbols: 2 });
        assert_eq!(String::from_utf8(output).unwrap().lines().count(), 3);
    }
}
