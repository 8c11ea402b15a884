//! Data models for input rows, fetched articles and computed metric rows.
//!
//! - [`InputRow`]: one `(URL_ID, URL)` pair read from the input table
//! - [`ArticleRecord`]: the title and body extracted from one page
//! - [`MetricRow`]: the metrics for one article, keyed by output column name
//! - [`Cell`]: a single output table value

use crate::analysis::TextMetrics;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// Title recorded when a page has no `<h1>`.
pub const NO_TITLE: &str = "No Title Found";

pub const COL_URL_ID: &str = "URL_ID";
pub const COL_URL: &str = "URL";
pub const COL_POSITIVE_SCORE: &str = "POSITIVE SCORE";
pub const COL_NEGATIVE_SCORE: &str = "NEGATIVE SCORE";
pub const COL_POLARITY_SCORE: &str = "POLARITY SCORE";
pub const COL_SUBJECTIVITY_SCORE: &str = "SUBJECTIVITY SCORE";
pub const COL_AVG_SENTENCE_LENGTH: &str = "AVG SENTENCE LENGTH";
pub const COL_PERCENTAGE_COMPLEX_WORDS: &str = "PERCENTAGE OF COMPLEX WORDS";
pub const COL_FOG_INDEX: &str = "FOG INDEX";
pub const COL_AVG_WORDS_PER_SENTENCE: &str = "AVG NUMBER OF WORDS PER SENTENCE";
pub const COL_COMPLEX_WORD_COUNT: &str = "COMPLEX WORD COUNT";
pub const COL_WORD_COUNT: &str = "WORD COUNT";
pub const COL_SYLLABLE_PER_WORD: &str = "SYLLABLE PER WORD";
pub const COL_PERSONAL_PRONOUNS: &str = "PERSONAL PRONOUNS";
pub const COL_AVG_WORD_LENGTH: &str = "AVG WORD LENGTH";

/// One article to process, as listed in the input table.
///
/// Columns other than `URL_ID` and `URL` are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InputRow {
    #[serde(rename = "URL_ID")]
    pub url_id: String,
    #[serde(rename = "URL")]
    pub url: String,
}

/// Title and body text extracted from a fetched page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleRecord {
    pub url_id: String,
    pub url: String,
    /// First `<h1>`, trimmed, or [`NO_TITLE`].
    pub title: String,
    /// Text of every `<p>`, joined with newlines.
    pub body: String,
}

impl ArticleRecord {
    /// The persisted form: title, a blank line, then the body.
    pub fn to_text(&self) -> String {
        format!("{}\n\n{}", self.title, self.body)
    }
}

/// A single value in the output table.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Count(usize),
    Ratio(f64),
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(s) => f.write_str(s),
            Cell::Count(n) => write!(f, "{n}"),
            Cell::Ratio(x) => write!(f, "{x}"),
        }
    }
}

impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Cell::Text(s) => serializer.serialize_str(s),
            Cell::Count(n) => serializer.serialize_u64(*n as u64),
            Cell::Ratio(x) => serializer.serialize_f64(*x),
        }
    }
}

/// Metrics for one article together with its identifying input columns.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricRow {
    pub url_id: String,
    pub url: String,
    pub metrics: TextMetrics,
}

impl MetricRow {
    /// Every computed field keyed by its output column name. The map carries
    /// no column order; the output schema supplies that.
    pub fn fields(&self) -> HashMap<&'static str, Cell> {
        let m = &self.metrics;
        HashMap::from([
            (COL_URL_ID, Cell::Text(self.url_id.clone())),
            (COL_URL, Cell::Text(self.url.clone())),
            (COL_POSITIVE_SCORE, Cell::Count(m.positive_score)),
            (COL_NEGATIVE_SCORE, Cell::Count(m.negative_score)),
            (COL_POLARITY_SCORE, Cell::Ratio(m.polarity_score)),
            (COL_SUBJECTIVITY_SCORE, Cell::Ratio(m.subjectivity_score)),
            (COL_AVG_SENTENCE_LENGTH, Cell::Ratio(m.avg_sentence_length)),
            (
                COL_PERCENTAGE_COMPLEX_WORDS,
                Cell::Ratio(m.percentage_complex_words),
            ),
            (COL_FOG_INDEX, Cell::Ratio(m.fog_index)),
            (
                COL_AVG_WORDS_PER_SENTENCE,
                Cell::Ratio(m.avg_words_per_sentence),
            ),
            (COL_COMPLEX_WORD_COUNT, Cell::Count(m.complex_word_count)),
            (COL_WORD_COUNT, Cell::Count(m.word_count)),
            (COL_SYLLABLE_PER_WORD, Cell::Ratio(m.syllable_per_word)),
            (COL_PERSONAL_PRONOUNS, Cell::Count(m.personal_pronouns)),
            (COL_AVG_WORD_LENGTH, Cell::Ratio(m.avg_word_length)),
        ])
    }
}
