//! Positive and negative sentiment word lists.
//!
//! A [`Lexicon`] is built once at startup and handed to the metric engine by
//! reference. Words are stored lower-cased; lookups are case-insensitive.

use std::collections::HashSet;
use std::error::Error;
use std::path::Path;
use tracing::{info, instrument};

const DEFAULT_POSITIVE: &[&str] = &[
    "good",
    "great",
    "excellent",
    "positive",
    "fortunate",
    "correct",
    "superior",
];

const DEFAULT_NEGATIVE: &[&str] = &[
    "bad",
    "poor",
    "wrong",
    "negative",
    "inferior",
    "unfortunate",
    "sad",
];

/// Immutable pair of sentiment word sets.
#[derive(Debug, Clone)]
pub struct Lexicon {
    positive: HashSet<String>,
    negative: HashSet<String>,
}

impl Lexicon {
    /// Build a lexicon from arbitrary word iterators.
    pub fn new<P, N, S, T>(positive: P, negative: N) -> Self
    where
        P: IntoIterator<Item = S>,
        N: IntoIterator<Item = T>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        Self {
            positive: normalize(positive),
            negative: normalize(negative),
        }
    }

    /// The built-in sample word lists.
    pub fn builtin() -> Self {
        Self::new(DEFAULT_POSITIVE, DEFAULT_NEGATIVE)
    }

    /// Load either list from a word-list file, falling back to the built-in
    /// list for the side that has no path.
    #[instrument(level = "info", skip_all)]
    pub fn from_files(
        positive: Option<&Path>,
        negative: Option<&Path>,
    ) -> Result<Self, Box<dyn Error>> {
        let mut lexicon = Self::builtin();
        if let Some(path) = positive {
            lexicon.positive = load_word_list(path)?;
        }
        if let Some(path) = negative {
            lexicon.negative = load_word_list(path)?;
        }
        info!(
            positive = lexicon.positive_len(),
            negative = lexicon.negative_len(),
            "Lexicon loaded"
        );
        Ok(lexicon)
    }

    pub fn is_positive(&self, word: &str) -> bool {
        self.positive.contains(&word.to_lowercase())
    }

    pub fn is_negative(&self, word: &str) -> bool {
        self.negative.contains(&word.to_lowercase())
    }

    pub fn positive_len(&self) -> usize {
        self.positive.len()
    }

    pub fn negative_len(&self) -> usize {
        self.negative.len()
    }
}

fn normalize<I, S>(words: I) -> HashSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words
        .into_iter()
        .map(|w| w.as_ref().trim().to_lowercase())
        .filter(|w| !w.is_empty())
        .collect()
}

/// Read a word list: one entry per line, blank lines and `;` comments
/// skipped. Bytes that are not valid UTF-8 are replaced rather than rejected,
/// since many published lists are Latin-1.
#[instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub fn load_word_list(path: &Path) -> Result<HashSet<String>, Box<dyn Error>> {
    let bytes = std::fs::read(path)?;
    let text = String::from_utf8_lossy(&bytes);
    Ok(normalize(
        text.lines().filter(|line| !line.trim_start().starts_with(';')),
    ))
}
