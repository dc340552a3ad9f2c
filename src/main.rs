//! # CNN Headlines
//!
//! Visits CNN category pages and reports their headlines as JSON.
//!
//! ## Usage
//!
//! ```sh
//! cnn_headlines                    # style, entertainment, business to stdout
//! cnn_headlines -C world -o out.json
//! ```
//!
//! ## Exit Status
//!
//! The report is always written for the categories that succeeded. The exit
//! code is 1 when any category failed to download or parse, or yielded zero
//! headlines (a hint that CNN changed its markup); 0 otherwise.
//!
//! Logs go to stderr so stdout carries only the report. Set `RUST_LOG` to
//! adjust verbosity.

use clap::Parser;
use cnn_headlines::config::{FileConfig, Settings};
use cnn_headlines::outputs::json;
use cnn_headlines::scrapers;
use std::error::Error;
use std::process::ExitCode;
use tracing::{debug, error, info, instrument, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;

use cli::Cli;

#[tokio::main]
#[instrument]
async fn main() -> Result<ExitCode, Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("cnn_headlines starting up");

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    // ---- Resolve settings ----
    let file_config = match &args.config {
        Some(path) => FileConfig::load(path).await?,
        None => FileConfig::default(),
    };
    let settings = Settings::resolve(file_config, args.overrides())?;
    info!(
        base_url = %settings.base_url,
        categories = ?settings.categories,
        concurrency = settings.concurrency,
        "Resolved settings"
    );

    // ---- Fetch and extract ----
    let client = scrapers::cnn::build_client(&settings)?;
    let summary = scrapers::cnn::scrape_categories(&client, &settings).await;

    // ---- Output ----
    if let Err(e) = json::write_report(&summary.report, args.output.as_deref()).await {
        error!(error = %e, "Failed to write JSON report");
        return Err(e);
    }

    let status = summary.status();
    if status != 0 {
        warn!(
            failed = ?summary.failures.iter().map(|(c, _)| c).collect::<Vec<_>>(),
            empty = ?summary.empty,
            "Some categories need attention"
        );
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        status,
        "Execution complete"
    );

    Ok(ExitCode::from(status))
}
