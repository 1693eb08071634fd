use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tradeagg")]
#[command(about = "Aggregate per-symbol trade statistics from a delimited price update stream")]
#[command(version)]
pub struct Cli {
    /// Path to input file. If omitted or '-', read from standard input
    pub input: Option<PathBuf>,

    /// Path to an optional YAML configuration file
    #[arg(short, long, env = "TRADEAGG_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log output format (overrides the configuration file)
    #[arg(long, value_enum, env = "TRADEAGG_LOG_FORMAT")]
    pub log_format: Option<LogFormatArg>,

    /// Reject events whose timestamp is earlier than the symbol's last one
    #[arg(long)]
    pub strict_order: bool,

    /// Input field delimiter (single ASCII character)
    #[arg(short, long, env = "TRADEAGG_DELIMITER")]
    pub delimiter: Option<char>,

    /// Write a Prometheus metrics snapshot to this file after the run
    #[arg(long, env = "TRADEAGG_METRICS_FILE")]
    pub metrics_file: Option<PathBuf>,

    /// Print a configuration file with all defaults and exit
    #[arg(long)]
    pub print_default_config: bool,

    /// Write a configuration file with all defaults to PATH and exit
    #[arg(long, value_name = "PATH", conflicts_with = "print_default_config")]
    pub write_default_config: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormatArg {
    /// Human-readable with colors
    Pretty,

    /// One JSON object per line
    Json,

    /// Single-line, less verbose
    Compact,
}

impl LogFormatArg {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormatArg::Pretty => "pretty",
            LogFormatArg::Json => "json",
            LogFormatArg::Compact => "compact",
        }
    }
}

/// Where trade rows are read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Resolve the positional input argument; `-` means stdin
    pub fn input_source(&self) -> InputSource {
        match &self.input {
            Some(path) if path.as_os_str() != "-" => InputSource::File(path.clone()),
            _ => InputSource::Stdin,
        }
    }
}
