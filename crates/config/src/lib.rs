use serde::{Deserialize, Serialize};

pub mod defaults;
pub mod parser;
pub mod substitution;
pub mod validator;

pub use defaults::*;
pub use parser::*;
pub use substitution::*;
pub use validator::*;

/// Top-level configuration file
///
/// Every section is optional; a missing section takes its defaults and is
/// reported as such by [`validate_config`].
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: Option<LoggingConfig>,
    #[serde(default)]
    pub input: Option<InputConfig>,
    #[serde(default)]
    pub aggregation: Option<AggregationConfig>,
    #[serde(default)]
    pub metrics: Option<MetricsConfig>,
}

impl AppConfig {
    pub fn logging(&self) -> LoggingConfig {
        self.logging.clone().unwrap_or_default()
    }

    pub fn input(&self) -> InputConfig {
        self.input.clone().unwrap_or_default()
    }

    pub fn aggregation(&self) -> AggregationConfig {
        self.aggregation.clone().unwrap_or_default()
    }

    pub fn metrics(&self) -> MetricsConfig {
        self.metrics.clone().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub level: String,
    /// One of: pretty, json, compact
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InputConfig {
    /// Single ASCII field delimiter
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
}

impl InputConfig {
    /// The delimiter as a byte, if it is a single ASCII character
    pub fn delimiter_byte(&self) -> Option<u8> {
        match self.delimiter.as_bytes() {
            [b] if b.is_ascii() => Some(*b),
            _ => None,
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AggregationConfig {
    /// One of: permissive, strict
    #[serde(rename = "timestamp_order")]
    #[serde(default = "default_timestamp_order")]
    pub timestamp_order: String,
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            timestamp_order: default_timestamp_order(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MetricsConfig {
    #[serde(default = "default_metrics_enabled")]
    pub enabled: bool,
    /// Where the Prometheus text snapshot is written after a run
    #[serde(default)]
    pub file: Option<String>,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: default_metrics_enabled(),
            file: None,
        }
    }
}
