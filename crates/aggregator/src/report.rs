//! Report serialization

use crate::error::AggregatorError;
use crate::stats::SymbolStats;
use crate::types::OUTPUT_COLUMNS;
use crate::Result;
use csv::{Terminator, WriterBuilder};
use std::io::Write;

/// Decimal places for every price-derived column
pub const PRICE_DECIMALS: usize = 3;

/// Format a price-derived value for the report
pub fn format_price(value: f64) -> String {
    format!("{:.*}", PRICE_DECIMALS, value)
}

/// Writes the fixed report header followed by one row per symbol
pub struct ReportWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(output: W) -> Self {
        let writer = WriterBuilder::new()
            .has_headers(false)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(output);

        Self { writer }
    }

    pub fn write_header(&mut self) -> Result<()> {
        self.writer
            .write_record(OUTPUT_COLUMNS)
            .map_err(AggregatorError::Output)
    }

    pub fn write_row(&mut self, stats: &SymbolStats) -> Result<()> {
        let row = [
            stats.symbol().to_string(),
            stats.first_ts().to_string(),
            stats.last_ts().to_string(),
            format_price(stats.open()),
            format_price(stats.close()),
            format_price(stats.high()),
            format_price(stats.low()),
            format_price(stats.avg_price()),
            format_price(stats.vwap()),
        ];
        self.writer.write_record(&row).map_err(AggregatorError::Output)
    }

    /// Write the header and every row, returning the number of rows written
    pub fn write_report<'a, I>(&mut self, rows: I) -> Result<usize>
    where
        I: IntoIterator<Item = &'a SymbolStats>,
    {
        self.write_header()?;

        let mut written = 0;
        for stats in rows {
            self.write_row(stats)?;
            written += 1;
        }
        Ok(written)
    }

    /// Flush buffered output and hand back the destination
    pub fn finish(mut self) -> Result<W> {
        self.writer.flush()?;
        self.writer
            .into_inner()
            .map_err(|e| AggregatorError::Io(e.into_error()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(rows: &[SymbolStats]) -> String {
        let mut writer = ReportWriter::new(Vec::new());
        writer.write_report(rows).unwrap();
        String::from_utf8(writer.finish().unwrap()).unwrap()
    }

    #[test]
    fn test_header_only() {
        assert_eq!(render(&[]), "symbol,first_ts,last_ts,open,close,high,low,avg_px,vwap\n");
    }

    #[test]
    fn test_row_formatting() {
        let out = render(&[SymbolStats::create("AAPL", 100.0, 10, 1)]);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "AAPL,1,1,100.000,100.000,100.000,100.000,100.000,100.000");
        assert!(out.ends_with("100.000\n"));
    }

    #[test]
    fn test_rounding() {
        let mut stats = SymbolStats::create("Y", 10.0, 100, 1);
        stats.update(20.0, 1, 2);

        let out = render(&[stats]);

        assert!(out.contains("Y,1,2,10.000,20.000,20.000,10.000,15.000,10.099\n"));
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(0.0), "0.000");
        assert_eq!(format_price(10.75), "10.750");
        assert_eq!(format_price(1.23456), "1.235");
    }
}
