//! Generic article scraper.
//!
//! Pages are fetched with a single GET and reduced to a title (the first
//! `<h1>`) and a body (the text of every `<p>`, joined with newlines). Only a
//! `200 OK` response counts as a page; anything else yields no article.

use crate::models::{ArticleRecord, NO_TITLE};
use itertools::Itertools;
use once_cell::sync::Lazy;
use reqwest::{Client, StatusCode};
use scraper::{Html, Selector};
use std::error::Error;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};
use url::Url;

static TITLE_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("h1").expect("h1 selector"));
static PARAGRAPH_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("p").expect("p selector"));

/// Build the shared HTTP client with a request timeout and User-Agent.
pub fn build_client(timeout: Duration, user_agent: &str) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(timeout)
        .user_agent(user_agent)
        .build()
}

/// Extract the title and paragraph text from an HTML document.
pub fn extract_article(html: &str) -> (String, String) {
    let document = Html::parse_document(html);

    let title = document
        .select(&TITLE_SELECTOR)
        .next()
        .map(|h1| h1.text().collect::<String>().trim().to_string())
        .unwrap_or_else(|| NO_TITLE.to_string());

    let body = document
        .select(&PARAGRAPH_SELECTOR)
        .map(|p| p.text().collect::<String>())
        .join("\n");

    (title, body)
}

/// Fetch a single article.
///
/// Returns `Ok(None)` for any status other than 200. Transport failures
/// (DNS, connect, timeout, body decoding) and unparsable URLs are errors.
#[instrument(level = "info", skip_all, fields(%url_id, %url))]
pub async fn fetch_article(
    client: &Client,
    url_id: &str,
    url: &str,
) -> Result<Option<ArticleRecord>, Box<dyn Error>> {
    let parsed = Url::parse(url)?;
    let response = client.get(parsed).send().await?;

    let status = response.status();
    if status != StatusCode::OK {
        warn!(%status, "Non-200 response");
        return Ok(None);
    }

    let html = response.text().await?;
    debug!(bytes = html.len(), "Downloaded page");

    let (title, body) = extract_article(&html);
    info!(title = %title, body_bytes = body.len(), "Parsed article");

    Ok(Some(ArticleRecord {
        url_id: url_id.to_string(),
        url: url.to_string(),
        title,
        body,
    }))
}
