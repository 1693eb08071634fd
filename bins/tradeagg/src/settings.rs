//! Effective run settings: configuration file values with CLI overrides applied

use aggregator::{PipelineOptions, TimestampOrder};
use anyhow::{bail, Result};
use cli::Cli;
use config::AppConfig;
use observability::LogFormat;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub log_format: LogFormat,
    pub log_level: String,
    pub pipeline: PipelineOptions,
    pub metrics_file: Option<PathBuf>,
}

impl Settings {
    /// Merge a validated configuration with command-line overrides
    pub fn resolve(cli: &Cli, config: &AppConfig) -> Result<Self> {
        let logging = config.logging();
        let format_name = cli.log_format.map(|f| f.as_str()).unwrap_or(logging.format.as_str());
        let Some(log_format) = LogFormat::parse(format_name) else {
            bail!("unknown log format: {}", format_name);
        };

        let delimiter = match cli.delimiter {
            Some(c) => parse_delimiter(c)?,
            None => match config.input().delimiter_byte() {
                Some(b) => b,
                None => bail!("invalid delimiter: {:?}", config.input().delimiter),
            },
        };

        let order = if cli.strict_order {
            TimestampOrder::Strict
        } else {
            let name = config.aggregation().timestamp_order;
            match TimestampOrder::parse(&name) {
                Some(order) => order,
                None => bail!("invalid timestamp order: {}", name),
            }
        };

        let metrics = config.metrics();
        let metrics_file = match &cli.metrics_file {
            Some(path) => Some(path.clone()),
            None if metrics.enabled => metrics.file.map(PathBuf::from),
            None => None,
        };

        Ok(Self {
            log_format,
            log_level: logging.level,
            pipeline: PipelineOptions { delimiter, order },
            metrics_file,
        })
    }
}

fn parse_delimiter(c: char) -> Result<u8> {
    if !c.is_ascii() || matches!(c, '"' | '\n' | '\r') {
        bail!("invalid delimiter {:?}: must be a single ASCII character other than '\"', CR or LF", c);
    }
    Ok(c as u8)
}
