//! # Article Metrics
//!
//! A batch tool that downloads web articles listed in a CSV file, stores
//! their title and body text, and scores each one for sentiment and
//! readability into a CSV report.
//!
//! ## Usage
//!
//! ```sh
//! article_metrics                      # Input.csv -> Articles/ -> Textual_Analysis_Output.csv
//! article_metrics --stage analyze -o report.csv --json-output report.json
//! ```
//!
//! ## Architecture
//!
//! Two sequential passes over the same input rows:
//! 1. **Fetch**: GET each URL, extract `<h1>` and `<p>` text, write `Articles/{URL_ID}.txt`
//! 2. **Analyze**: read each text file, compute the metrics, write the report with
//!    columns in the order given by the output schema file
//!
//! Each row fails independently; a bad URL or missing file never stops the batch.

use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod analysis;
mod cli;
mod config;
mod models;
mod outputs;
mod pipeline;
mod scrapers;
mod utils;

use analysis::Lexicon;
use cli::Cli;
use config::RunConfig;
use outputs::table;
use scrapers::article::build_client;
use utils::ensure_writable_dir;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("article_metrics starting up");

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let config = RunConfig::resolve(&args)?;
    debug!(?config, "Resolved configuration");

    let rows = table::read_input_rows(&config.input)?;

    // ---- Fetch pass ----
    let fetch_summary = if args.stage.fetches() {
        if let Err(e) = ensure_writable_dir(&config.articles_dir).await {
            error!(
                path = %config.articles_dir.display(),
                error = %e,
                "Articles directory is not writable (fix perms or choose a different path)"
            );
            return Err(e);
        }
        let client = build_client(config.timeout(), &config.user_agent)?;
        Some(pipeline::run_fetch(&client, &rows, &config.articles_dir).await)
    } else {
        None
    };

    // ---- Analyze pass ----
    let analyze_summary = if args.stage.analyzes() {
        let lexicon = Lexicon::from_files(
            config.positive_words.as_deref(),
            config.negative_words.as_deref(),
        )?;
        Some(pipeline::run_analyze(&rows, &lexicon, &config).await?)
    } else {
        None
    };

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        fetched = fetch_summary.map(|s| s.saved),
        fetch_failed = fetch_summary.map(|s| s.failed),
        analyzed = analyze_summary.map(|s| s.analyzed),
        analyze_failed = analyze_summary.map(|s| s.failed),
        "Execution complete"
    );

    Ok(())
}
