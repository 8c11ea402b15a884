//! Per-article text artifacts.
//!
//! Each fetched article is stored as `{articles_dir}/{URL_ID}.txt`, UTF-8,
//! holding the title, a blank line, and the body. The analyze pass reads the
//! whole file back, title included.

use crate::models::ArticleRecord;
use std::error::Error;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, instrument};

/// Location of the artifact for `url_id`.
pub fn article_path(articles_dir: &Path, url_id: &str) -> PathBuf {
    articles_dir.join(format!("{url_id}.txt"))
}

/// Persist `record`, replacing any earlier artifact for the same id.
#[instrument(level = "debug", skip_all, fields(url_id = %record.url_id))]
pub async fn write_article(
    articles_dir: &Path,
    record: &ArticleRecord,
) -> Result<PathBuf, Box<dyn Error>> {
    let path = article_path(articles_dir, &record.url_id);
    fs::write(&path, record.to_text()).await?;
    debug!(path = %path.display(), "Wrote article text");
    Ok(path)
}

/// Read the artifact for `url_id`. Missing files and invalid UTF-8 are errors.
pub async fn read_article_text(
    articles_dir: &Path,
    url_id: &str,
) -> Result<String, Box<dyn Error>> {
    let path = article_path(articles_dir, url_id);
    fs::read_to_string(&path)
        .await
        .map_err(|e| format!("{}: {e}", path.display()).into())
}
