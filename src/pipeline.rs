//! The fetch and analyze passes.
//!
//! Both passes walk the input rows sequentially and in file order. Every
//! record is handled inside its own error boundary: a failure is logged with
//! the record's `URL_ID` and the pass moves on to the next row.

use crate::analysis::{Lexicon, analyze_text};
use crate::config::RunConfig;
use crate::models::{InputRow, MetricRow};
use crate::outputs::{articles, json, table};
use crate::scrapers::article::fetch_article;
use crate::utils::truncate_for_log;
use futures::stream::{self, StreamExt};
use reqwest::Client;
use std::error::Error;
use std::path::Path;
use tracing::{debug, error, info, instrument, warn};

/// Counts reported at the end of the fetch pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FetchSummary {
    pub saved: usize,
    pub failed: usize,
}

/// Counts reported at the end of the analyze pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AnalyzeSummary {
    pub analyzed: usize,
    pub failed: usize,
}

enum FetchOutcome {
    Saved,
    Failed,
}

/// Fetch every row and write one text file per extracted article.
///
/// Non-200 responses, pages with an empty title or body, transport errors
/// and write errors all count as failures for that row only.
#[instrument(level = "info", skip_all, fields(rows = rows.len(), dir = %articles_dir.display()))]
pub async fn run_fetch(client: &Client, rows: &[InputRow], articles_dir: &Path) -> FetchSummary {
    let outcomes: Vec<FetchOutcome> = stream::iter(rows)
        .then(|row| async move {
            match fetch_article(client, &row.url_id, &row.url).await {
                Ok(Some(record)) if record.title.is_empty() || record.body.is_empty() => {
                    warn!(url_id = %row.url_id, url = %row.url, "Failed to extract article: empty title or body");
                    FetchOutcome::Failed
                }
                Ok(Some(record)) => match articles::write_article(articles_dir, &record).await {
                    Ok(path) => {
                        info!(url_id = %row.url_id, path = %path.display(), "Article saved successfully");
                        FetchOutcome::Saved
                    }
                    Err(e) => {
                        error!(url_id = %row.url_id, error = %e, "Failed to write article");
                        FetchOutcome::Failed
                    }
                },
                Ok(None) => {
                    warn!(url_id = %row.url_id, url = %row.url, "Failed to extract article");
                    FetchOutcome::Failed
                }
                Err(e) => {
                    error!(url_id = %row.url_id, url = %row.url, error = %e, "Fetch failed; skipping article");
                    FetchOutcome::Failed
                }
            }
        })
        .collect()
        .await;

    let saved = outcomes
        .iter()
        .filter(|o| matches!(o, FetchOutcome::Saved))
        .count();
    let summary = FetchSummary {
        saved,
        failed: outcomes.len() - saved,
    };
    info!(saved = summary.saved, failed = summary.failed, "All articles processed");
    summary
}

/// Score the stored article for every row that has one.
///
/// Rows whose file is missing or unreadable are logged and left out; the
/// returned rows keep input order.
#[instrument(level = "info", skip_all, fields(rows = rows.len(), dir = %articles_dir.display()))]
pub async fn analyze_articles(
    rows: &[InputRow],
    articles_dir: &Path,
    lexicon: &Lexicon,
) -> Vec<MetricRow> {
    let mut results = Vec::with_capacity(rows.len());
    for row in rows {
        match articles::read_article_text(articles_dir, &row.url_id).await {
            Ok(text) => {
                debug!(url_id = %row.url_id, preview = %truncate_for_log(&text, 80), "Analyzing article");
                let metrics = analyze_text(&text, lexicon);
                info!(
                    url_id = %row.url_id,
                    words = metrics.word_count,
                    sentences = metrics.sentence_count,
                    "Analysis completed"
                );
                results.push(MetricRow {
                    url_id: row.url_id.clone(),
                    url: row.url.clone(),
                    metrics,
                });
            }
            Err(e) => {
                warn!(url_id = %row.url_id, error = %e, "Failed to process article");
            }
        }
    }
    results
}

/// Run the analyze pass and write the report.
///
/// The output schema is read before any article so that an unusable schema
/// fails fast. A computed row lacking a schema column aborts the write.
#[instrument(level = "info", skip_all)]
pub async fn run_analyze(
    rows: &[InputRow],
    lexicon: &Lexicon,
    config: &RunConfig,
) -> Result<AnalyzeSummary, Box<dyn Error>> {
    let columns = table::read_schema_columns(&config.output_schema)?;

    let metric_rows = analyze_articles(rows, &config.articles_dir, lexicon).await;
    let field_maps: Vec<_> = metric_rows.iter().map(MetricRow::fields).collect();
    let ordered = table::order_rows(&columns, &field_maps)?;

    table::write_table_file(&config.output, &columns, &ordered)?;
    if let Some(json_path) = &config.json_output {
        json::write_rows(json_path, &columns, &ordered).await?;
    }

    let summary = AnalyzeSummary {
        analyzed: metric_rows.len(),
        failed: rows.len() - metric_rows.len(),
    };
    info!(
        analyzed = summary.analyzed,
        failed = summary.failed,
        output = %config.output.display(),
        "Textual analysis saved"
    );
    Ok(summary)
}
