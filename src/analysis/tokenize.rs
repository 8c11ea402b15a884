//! Word and sentence tokenization.
//!
//! Word tokens follow Treebank-style conventions closely enough for counting:
//! whitespace separates chunks, bracket/quote/clause punctuation is split off,
//! the period ending a sentence is peeled, and English contractions are
//! divided with either apostrophe (`don't` -> `do` + `n't`, `it’s` -> `it` +
//! `’s`). Hyphenated and dotted tokens (`well-known`, `U.S.`, a mid-sentence
//! `Mr.`) stay whole, so they never count as words.
//!
//! Sentences end only at `.`, `!` or `?`. Unicode sentence boundaries
//! (UAX #29) are merged back together when the segment before them has no
//! terminal mark (titles, captions, line breaks) or ends in a common
//! abbreviation such as `Mr.`.

use once_cell::sync::Lazy;
use std::collections::HashSet;
use unicode_segmentation::UnicodeSegmentation;

/// Characters that always form a token of their own.
const SPLIT_CHARS: &[char] = &[
    ',', ';', ':', '!', '?', '"', '(', ')', '[', ']', '{', '}', '<', '>', '“', '”', '«', '»', '…', '—',
    '–',
];

const QUOTES: &[char] = &['\'', '‘', '’'];

/// Closing marks allowed after a sentence's terminal punctuation.
const CLOSERS: &[char] = &['"', '\'', ')', ']', '}', '”', '’', '»'];

/// Contraction suffixes split from the preceding stem, longest first.
const CONTRACTIONS: &[&str] = &[
    "n't", "n’t", "'ll", "’ll", "'re", "’re", "'ve", "’ve", "'s", "’s", "'m", "’m", "'d", "’d",
];

static ABBREVIATIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "mt", "inc", "ltd", "co",
        "corp", "gen", "gov", "sen", "rep", "fig", "approx", "dept", "e.g", "i.e",
    ]
    .into_iter()
    .collect()
});

/// Split one sentence into word tokens, punctuation included.
///
/// Only periods in the last whitespace-separated chunk are split off.
pub fn word_tokens(sentence: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let chunks: Vec<&str> = sentence.split_whitespace().collect();
    for (i, chunk) in chunks.iter().enumerate() {
        let last = i + 1 == chunks.len();
        let mut rest = *chunk;
        while let Some(pos) = rest.find(SPLIT_CHARS) {
            push_piece(&rest[..pos], last, &mut tokens);
            let ch_len = rest[pos..].chars().next().map_or(1, char::len_utf8);
            tokens.push(&rest[pos..pos + ch_len]);
            rest = &rest[pos + ch_len..];
        }
        push_piece(rest, last, &mut tokens);
    }
    tokens
}

fn push_piece<'a>(piece: &'a str, sentence_end: bool, tokens: &mut Vec<&'a str>) {
    let mut core = piece;
    while let Some(quote) = core.chars().next().filter(|c| QUOTES.contains(c)) {
        if core.len() == quote.len_utf8() {
            break;
        }
        tokens.push(&core[..quote.len_utf8()]);
        core = &core[quote.len_utf8()..];
    }

    let mut trailing = Vec::new();
    while let Some(last) = core
        .chars()
        .next_back()
        .filter(|&c| QUOTES.contains(&c) || (sentence_end && c == '.'))
    {
        let split = core.len() - last.len_utf8();
        if split == 0 {
            break;
        }
        trailing.push(&core[split..]);
        core = &core[..split];
    }

    if core.is_empty() {
        return;
    }
    match split_contraction(core) {
        Some((stem, suffix)) => {
            tokens.push(stem);
            tokens.push(suffix);
        }
        None => tokens.push(core),
    }
    tokens.extend(trailing.into_iter().rev());
}

fn split_contraction(token: &str) -> Option<(&str, &str)> {
    let lower = token.to_lowercase();
    if lower.len() != token.len() {
        return None;
    }
    CONTRACTIONS.iter().find_map(|suffix| {
        let stem_len = token.len().checked_sub(suffix.len())?;
        (stem_len > 0 && lower.ends_with(suffix) && token.is_char_boundary(stem_len))
            .then(|| token.split_at(stem_len))
    })
}

/// True when `token` is non-empty and made only of alphabetic characters.
pub fn is_word(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphabetic)
}

/// The alphabetic word tokens of `text`, sentence by sentence; every count
/// in the metric engine is taken over this list.
pub fn words(text: &str) -> Vec<&str> {
    sentences(text)
        .into_iter()
        .flat_map(word_tokens)
        .filter(|t| is_word(t))
        .collect()
}

/// Split `text` into sentences.
///
/// Segments with no alphanumeric content (blank lines, stray punctuation)
/// are not sentences. A segment without a terminal `.`, `!` or `?`, or one
/// ending in a known abbreviation, is joined to the next one.
pub fn sentences(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start: Option<usize> = None;

    for (idx, segment) in text.split_sentence_bound_indices() {
        if !segment.chars().any(char::is_alphanumeric) {
            continue;
        }
        let begin = *start.get_or_insert(idx);
        let end = idx + segment.len();
        if !ends_with_terminal(segment) || ends_with_abbreviation(segment) {
            continue;
        }
        out.push(text[begin..end].trim());
        start = None;
    }
    if let Some(begin) = start {
        out.push(text[begin..].trim());
    }
    out
}

fn ends_with_terminal(segment: &str) -> bool {
    segment
        .trim_end()
        .trim_end_matches(CLOSERS)
        .ends_with(['.', '!', '?'])
}

fn ends_with_abbreviation(segment: &str) -> bool {
    let trimmed = segment.trim_end();
    let Some(body) = trimmed.strip_suffix('.') else {
        return false;
    };
    let last = body
        .rsplit(|c: char| c.is_whitespace() || c == '(' || c == '"')
        .next()
        .unwrap_or_default()
        .to_lowercase();
    ABBREVIATIONS.contains(last.as_str())
}
