use crate::*;
use thiserror::Error;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const LOG_FORMATS: [&str; 3] = ["pretty", "json", "compact"];
const TIMESTAMP_ORDERS: [&str; 2] = ["permissive", "strict"];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: pretty, json, compact")]
    InvalidLogFormat(String),

    #[error("Invalid delimiter {0:?}: must be a single ASCII character other than '\"', CR or LF")]
    InvalidDelimiter(String),

    #[error("Invalid timestamp order: {0}. Must be one of: permissive, strict")]
    InvalidTimestampOrder(String),
}

#[derive(Debug, Clone)]
pub struct ValidationWarning {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct DefaultApplied {
    pub field: String,
    pub value: String,
}

#[derive(Debug, Clone)]
pub struct ValidationReport {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
    pub defaults_applied: Vec<DefaultApplied>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
            defaults_applied: Vec::new(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, field: &str, message: &str) {
        self.warnings.push(ValidationWarning {
            field: field.to_string(),
            message: message.to_string(),
        });
    }

    pub fn add_default(&mut self, field: &str, value: &str) {
        self.defaults_applied.push(DefaultApplied {
            field: field.to_string(),
            value: value.to_string(),
        });
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

pub fn validate_config(config: &AppConfig) -> ValidationReport {
    let mut report = ValidationReport::new();

    match &config.logging {
        Some(logging) => validate_logging(logging, &mut report),
        None => {
            report.add_default("logging.level", &default_log_level());
            report.add_default("logging.format", &default_log_format());
        }
    }

    match &config.input {
        Some(input) => validate_input(input, &mut report),
        None => report.add_default("input.delimiter", &default_delimiter()),
    }

    match &config.aggregation {
        Some(aggregation) => validate_aggregation(aggregation, &mut report),
        None => report.add_default("aggregation.timestamp_order", &default_timestamp_order()),
    }

    match &config.metrics {
        Some(metrics) => validate_metrics(metrics, &mut report),
        None => report.add_default("metrics.enabled", &default_metrics_enabled().to_string()),
    }

    report
}

fn validate_logging(logging: &LoggingConfig, report: &mut ValidationReport) {
    if has_unresolved_env_vars(&logging.level) {
        report.add_warning("logging.level", "Unresolved environment variable placeholder");
    }
    if !LOG_LEVELS.contains(&logging.level.to_lowercase().as_str()) {
        report.add_error(ValidationError::InvalidLogLevel(logging.level.clone()));
    }

    if !LOG_FORMATS.contains(&logging.format.to_lowercase().as_str()) {
        report.add_error(ValidationError::InvalidLogFormat(logging.format.clone()));
    }
}

fn validate_input(input: &InputConfig, report: &mut ValidationReport) {
    let valid = matches!(input.delimiter_byte(), Some(b) if !matches!(b, b'"' | b'\n' | b'\r'));
    if !valid {
        report.add_error(ValidationError::InvalidDelimiter(input.delimiter.clone()));
    }
}

fn validate_aggregation(aggregation: &AggregationConfig, report: &mut ValidationReport) {
    let order = aggregation.timestamp_order.to_lowercase();
    if !TIMESTAMP_ORDERS.contains(&order.as_str()) {
        report.add_error(ValidationError::InvalidTimestampOrder(
            aggregation.timestamp_order.clone(),
        ));
    }
}

fn validate_metrics(metrics: &MetricsConfig, report: &mut ValidationReport) {
    match &metrics.file {
        None if metrics.enabled => {
            report.add_warning(
                "metrics.file",
                "Metrics are enabled but no file is set; the snapshot will be discarded",
            );
        }
        Some(file) if has_unresolved_env_vars(file) => {
            report.add_warning("metrics.file", "Unresolved environment variable placeholder");
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_sections_report_defaults() {
        let report = validate_config(&AppConfig::default());

        assert!(report.is_valid());
        assert!(report.warnings.is_empty());
        assert_eq!(report.defaults_applied.len(), 5);
        assert!(report
            .defaults_applied
            .iter()
            .any(|d| d.field == "input.delimiter" && d.value == ","));
    }

    #[test]
    fn test_invalid_values() {
        let config = AppConfig {
            logging: Some(LoggingConfig {
                level: "loud".to_string(),
                format: "xml".to_string(),
            }),
            input: Some(InputConfig {
                delimiter: "\"".to_string(),
            }),
            aggregation: Some(AggregationConfig {
                timestamp_order: "sorted".to_string(),
            }),
            metrics: None,
        };

        let report = validate_config(&config);

        assert!(!report.is_valid());
        assert_eq!(
            report.errors,
            vec![
                ValidationError::InvalidLogLevel("loud".to_string()),
                ValidationError::InvalidLogFormat("xml".to_string()),
                ValidationError::InvalidDelimiter("\"".to_string()),
                ValidationError::InvalidTimestampOrder("sorted".to_string()),
            ]
        );
    }

    #[test]
    fn test_multi_char_delimiter_rejected() {
        let config = AppConfig {
            input: Some(InputConfig {
                delimiter: "::".to_string(),
            }),
            ..AppConfig::default()
        };

        let report = validate_config(&config);

        assert_eq!(report.errors, vec![ValidationError::InvalidDelimiter("::".to_string())]);
    }

    #[test]
    fn test_case_insensitive_values() {
        let config = AppConfig {
            logging: Some(LoggingConfig {
                level: "INFO".to_string(),
                format: "Json".to_string(),
            }),
            aggregation: Some(AggregationConfig {
                timestamp_order: "Strict".to_string(),
            }),
            ..AppConfig::default()
        };

        assert!(validate_config(&config).is_valid());
    }

    #[test]
    fn test_metrics_without_file_warns() {
        let config = AppConfig {
            metrics: Some(MetricsConfig {
                enabled: true,
                file: None,
            }),
            ..AppConfig::default()
        };

        let report = validate_config(&config);

        assert!(report.is_valid());
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.warnings[0].field, "metrics.file");
    }

    #[test]
    fn test_unresolved_placeholder_warns() {
        let config = AppConfig {
            metrics: Some(MetricsConfig {
                enabled: true,
                file: Some("${TRADEAGG_TEST_VALIDATOR_UNSET}/out.prom".to_string()),
            }),
            ..AppConfig::default()
        };

        let report = validate_config(&config);

        assert_eq!(report.warnings.len(), 1);
    }
}
