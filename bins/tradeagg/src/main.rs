//! tradeagg binary
//!
//! Reads trade updates from a file or stdin, writes the per-symbol report
//! to stdout. Any failure prints a single `error: <message>` line to stderr
//! and exits non-zero without writing a report.

mod settings;

use aggregator::{process_stream, RunSummary};
use anyhow::{bail, Context, Result};
use cli::{Cli, InputSource};
use config::{
    generate_default_config, load_config, render_config, save_config, validate_config, AppConfig,
};
use observability::{init_logging, init_metrics, write_snapshot};
use settings::Settings;
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::process::ExitCode;
use tracing::{debug, info, warn};

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    if cli.print_default_config {
        let yaml = render_config(&generate_default_config())?;
        io::stdout().write_all(yaml.as_bytes())?;
        return Ok(());
    }

    if let Some(path) = &cli.write_default_config {
        save_config(&generate_default_config(), path)?;
        eprintln!("Configuration written to {}", path.display());
        return Ok(());
    }

    let app_config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };

    let report = validate_config(&app_config);
    if !report.is_valid() {
        let messages: Vec<String> = report.errors.iter().map(|e| e.to_string()).collect();
        bail!("invalid configuration: {}", messages.join("; "));
    }

    let settings = Settings::resolve(&cli, &app_config)?;
    init_logging("tradeagg", settings.log_format, &settings.log_level)?;
    debug!(?cli, "CLI arguments parsed");

    for warning in &report.warnings {
        warn!(field = %warning.field, message = %warning.message, "Configuration warning");
    }
    for default in &report.defaults_applied {
        debug!(field = %default.field, value = %default.value, "Configuration default applied");
    }

    let metrics = match &settings.metrics_file {
        Some(_) => Some(init_metrics()?),
        None => None,
    };

    let outcome = aggregate_input(&cli.input_source(), &settings);

    // The snapshot is worth having for failed runs too
    if let (Some(handle), Some(path)) = (&metrics, &settings.metrics_file) {
        if let Err(e) = write_snapshot(handle, path) {
            warn!(error = %e, "Failed to write metrics snapshot");
        }
    }

    let summary = outcome?;
    info!(rows = summary.rows, symbols = summary.symbols, "Aggregation complete");
    Ok(())
}

fn aggregate_input(source: &InputSource, settings: &Settings) -> Result<RunSummary> {
    let stdout = io::stdout().lock();

    let summary = match source {
        InputSource::Stdin => {
            info!("Reading trades from stdin");
            process_stream(io::stdin().lock(), stdout, &settings.pipeline)?
        }
        InputSource::File(path) => {
            info!(?path, "Reading trades from file");
            let file = File::open(path)
                .with_context(|| format!("Failed to open input file: {:?}", path))?;
            process_stream(BufReader::new(file), stdout, &settings.pipeline)?
        }
    };

    Ok(summary)
}
