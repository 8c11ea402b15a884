//! Run configuration.
//!
//! Settings come from three layers, later ones winning:
//!
//! 1. built-in defaults reproducing the classic batch layout
//! 2. an optional YAML file (`--config`)
//! 3. command-line flags
//!
//! ```yaml
//! input: Input.csv
//! output_schema: Output Data Structure.csv
//! articles_dir: Articles
//! output: Textual_Analysis_Output.csv
//! json_output: report.json
//! positive_words: MasterDictionary/positive-words.txt
//! negative_words: MasterDictionary/negative-words.txt
//! timeout_secs: 30
//! user_agent: article_metrics/0.1
//! ```

use crate::cli::Cli;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::{info, instrument};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub input: PathBuf,
    pub output_schema: PathBuf,
    pub articles_dir: PathBuf,
    pub output: PathBuf,
    pub json_output: Option<PathBuf>,
    pub positive_words: Option<PathBuf>,
    pub negative_words: Option<PathBuf>,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("Input.csv"),
            output_schema: PathBuf::from("Output Data Structure.csv"),
            articles_dir: PathBuf::from("Articles"),
            output: PathBuf::from("Textual_Analysis_Output.csv"),
            json_output: None,
            positive_words: None,
            negative_words: None,
            timeout_secs: 30,
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl RunConfig {
    /// Load the config file named by `cli` (if any) and apply CLI overrides.
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let base = match &cli.config {
            Some(path) => load_config(path)?,
            None => Self::default(),
        };
        Ok(base.with_overrides(cli))
    }

    /// Replace every field that `cli` sets explicitly.
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(v) = &cli.input {
            self.input = v.clone();
        }
        if let Some(v) = &cli.output_schema {
            self.output_schema = v.clone();
        }
        if let Some(v) = &cli.articles_dir {
            self.articles_dir = v.clone();
        }
        if let Some(v) = &cli.output {
            self.output = v.clone();
        }
        if cli.json_output.is_some() {
            self.json_output = cli.json_output.clone();
        }
        if cli.positive_words.is_some() {
            self.positive_words = cli.positive_words.clone();
        }
        if cli.negative_words.is_some() {
            self.negative_words = cli.negative_words.clone();
        }
        if let Some(v) = cli.timeout_secs {
            self.timeout_secs = v;
        }
        if let Some(v) = &cli.user_agent {
            self.user_agent = v.clone();
        }
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Parse a YAML config file. Missing keys take their defaults.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub fn load_config(path: &Path) -> Result<RunConfig, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config: RunConfig = serde_yaml::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Loaded configuration");
    Ok(config)
}
