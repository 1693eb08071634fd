//! Record sources
//!
//! A [`RecordSource`] yields one row at a time as raw field strings; it does
//! no validation of its own. Field counts and value parsing are checked by
//! [`crate::schema`].

use crate::error::AggregatorError;
use crate::Result;
use csv::{ReaderBuilder, StringRecord};
use std::io::Read;

/// One tokenized input row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    /// 1-based line on which the row starts
    pub line: u64,
    pub fields: Vec<String>,
}

/// Supplies a header row followed by data rows, then `None`
pub trait RecordSource {
    /// Read the next row, or `None` at end of input
    fn next_record(&mut self) -> Result<Option<RawRecord>>;
}

/// [`RecordSource`] over delimited text
///
/// Rows of any width are passed through so that field-count errors carry
/// the row's line number. Blank lines are skipped.
pub struct CsvRecordSource<R: Read> {
    reader: csv::Reader<R>,
    record: StringRecord,
}

impl<R: Read> CsvRecordSource<R> {
    pub fn new(input: R) -> Self {
        Self::with_delimiter(input, b',')
    }

    pub fn with_delimiter(input: R, delimiter: u8) -> Self {
        let reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(delimiter)
            .from_reader(input);

        Self {
            reader,
            record: StringRecord::new(),
        }
    }
}

impl<R: Read> RecordSource for CsvRecordSource<R> {
    fn next_record(&mut self) -> Result<Option<RawRecord>> {
        let more = self
            .reader
            .read_record(&mut self.record)
            .map_err(AggregatorError::Input)?;
        if !more {
            return Ok(None);
        }

        let line = self.record.position().map(|p| p.line()).unwrap_or(0);
        Ok(Some(RawRecord {
            line,
            fields: self.record.iter().map(str::to_string).collect(),
        }))
    }
}
