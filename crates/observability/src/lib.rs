//! Observability infrastructure for tradeagg
//!
//! This crate provides:
//! - Structured logging via tracing, written to stderr
//! - A Prometheus recorder whose snapshot can be written to a file
//!
//! # Quick Start
//!
//! ```ignore
//! use observability::{init_logging, LogFormat};
//!
//! // Initialize logging
//! init_logging("tradeagg", LogFormat::Pretty, "warn")?;
//!
//! // Initialize metrics (optional)
//! let handle = observability::metrics::init_metrics()?;
//! ```

pub mod logging;
pub mod metrics;

pub use logging::{init_logging, LogFormat};
pub use metrics::{init_metrics, write_snapshot};
