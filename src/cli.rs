//! Command-line interface definitions for Article Metrics.
//!
//! Every option is optional: with no arguments the tool runs both passes
//! over the default file layout. Values given here override the YAML config.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Which passes to run.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Stage {
    /// Download articles and write their text files.
    Fetch,
    /// Score existing text files and write the report.
    Analyze,
    /// Fetch, then analyze.
    #[default]
    All,
}

impl Stage {
    pub fn fetches(self) -> bool {
        matches!(self, Stage::Fetch | Stage::All)
    }

    pub fn analyzes(self) -> bool {
        matches!(self, Stage::Analyze | Stage::All)
    }
}

/// Command-line arguments for the Article Metrics application.
///
/// # Examples
///
/// ```sh
/// # Both passes with the default file names
/// article_metrics
///
/// # Re-score already fetched articles with custom word lists
/// article_metrics --stage analyze --positive-words positive-words.txt --negative-words negative-words.txt
///
/// # Everything from a config file, overriding the output path
/// article_metrics -c metrics.yaml -o report.csv
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Optional path to a YAML config file
    #[arg(short, long, env = "ARTICLE_METRICS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Passes to run
    #[arg(long, value_enum, default_value_t = Stage::All)]
    pub stage: Stage,

    /// Input CSV with URL_ID and URL columns
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// CSV whose header row defines the output columns and their order
    #[arg(short = 's', long)]
    pub output_schema: Option<PathBuf>,

    /// Directory holding one text file per article
    #[arg(short, long)]
    pub articles_dir: Option<PathBuf>,

    /// Output CSV report
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also write the report as JSON to this path
    #[arg(long)]
    pub json_output: Option<PathBuf>,

    /// Positive word list (one word per line, `;` comments)
    #[arg(long, env = "ARTICLE_METRICS_POSITIVE_WORDS")]
    pub positive_words: Option<PathBuf>,

    /// Negative word list (one word per line, `;` comments)
    #[arg(long, env = "ARTICLE_METRICS_NEGATIVE_WORDS")]
    pub negative_words: Option<PathBuf>,

    /// HTTP request timeout in seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// User-Agent header for article requests
    #[arg(long)]
    pub user_agent: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_no_arguments() {
        let cli = Cli::parse_from(["article_metrics"]);
        assert_eq!(cli.stage, Stage::All);
        assert!(cli.input.is_none());
        assert!(cli.output.is_none());
    }

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from([
            "article_metrics",
            "--stage",
            "analyze",
            "--input",
            "in.csv",
            "--output-schema",
            "schema.csv",
            "--timeout-secs",
            "5",
        ]);
        assert_eq!(cli.stage, Stage::Analyze);
        assert_eq!(cli.input, Some(PathBuf::from("in.csv")));
        assert_eq!(cli.output_schema, Some(PathBuf::from("schema.csv")));
        assert_eq!(cli.timeout_secs, Some(5));
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from([
            "article_metrics",
            "-i",
            "/tmp/in.csv",
            "-s",
            "/tmp/schema.csv",
            "-a",
            "/tmp/articles",
            "-o",
            "/tmp/out.csv",
        ]);
        assert_eq!(cli.articles_dir, Some(PathBuf::from("/tmp/articles")));
        assert_eq!(cli.output, Some(PathBuf::from("/tmp/out.csv")));
    }

    #[test]
    fn test_stage_passes() {
        assert!(Stage::All.fetches() && Stage::All.analyzes());
        assert!(Stage::Fetch.fetches() && !Stage::Fetch.analyzes());
        assert!(!Stage::Analyze.fetches() && Stage::Analyze.analyzes());
    }
}
