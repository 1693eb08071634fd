//! Prometheus metrics infrastructure
//!
//! A batch run has no long-lived endpoint to scrape, so the recorder is
//! installed without an HTTP listener and its rendered snapshot is written
//! to a file after the run (node-exporter textfile collector style).

use anyhow::Context;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::fs;
use std::path::Path;

/// Install the global Prometheus recorder
///
/// Returns a handle used to render the collected metrics.
///
/// # Example
///
/// ```ignore
/// let handle = observability::metrics::init_metrics()?;
/// // ... run ...
/// observability::metrics::write_snapshot(&handle, "/var/lib/node_exporter/tradeagg.prom")?;
/// ```
pub fn init_metrics() -> anyhow::Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .context("Failed to install Prometheus recorder")?;

    tracing::debug!("Metrics recorder installed");
    Ok(handle)
}

/// Render the current metrics and write them to `path`
pub fn write_snapshot<P: AsRef<Path>>(handle: &PrometheusHandle, path: P) -> anyhow::Result<()> {
    let path = path.as_ref();

    fs::write(path, handle.render())
        .with_context(|| format!("Failed to write metrics file: {:?}", path))?;

    tracing::info!(?path, "Metrics snapshot written");
    Ok(())
}
