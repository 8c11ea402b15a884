//! Sentiment and readability scores for a single article.

use super::lexicon::Lexicon;
use super::syllables::count_syllables;
use super::tokenize::{sentences, words};
use once_cell::sync::Lazy;
use regex::Regex;

/// Added to denominators that may be zero.
pub const SCORE_EPSILON: f64 = 0.000001;

static PERSONAL_PRONOUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(I|we|my|ours|us)\b").expect("static pronoun pattern"));

/// The metric record computed from one article's text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextMetrics {
    pub positive_score: usize,
    pub negative_score: usize,
    pub polarity_score: f64,
    pub subjectivity_score: f64,
    pub avg_sentence_length: f64,
    pub percentage_complex_words: f64,
    pub fog_index: f64,
    /// Always equal to `avg_sentence_length`; reported under its own column.
    pub avg_words_per_sentence: f64,
    pub complex_word_count: usize,
    pub word_count: usize,
    pub sentence_count: usize,
    pub syllable_per_word: f64,
    pub personal_pronouns: usize,
    pub avg_word_length: f64,
}

/// `numerator / denominator`, or 0 when the denominator is 0.
fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator > 0 {
        numerator as f64 / denominator as f64
    } else {
        0.0
    }
}

/// Count case-insensitive whole-word occurrences of I, we, my, ours and us
/// in the raw text. "US" the country is counted too.
pub fn count_personal_pronouns(text: &str) -> usize {
    PERSONAL_PRONOUNS.find_iter(text).count()
}

/// Compute every metric for `text` against `lexicon`.
pub fn analyze_text(text: &str, lexicon: &Lexicon) -> TextMetrics {
    let words = words(text);
    let word_count = words.len();
    let sentence_count = sentences(text).len();

    let positive_score = words.iter().filter(|w| lexicon.is_positive(w)).count();
    let negative_score = words.iter().filter(|w| lexicon.is_negative(w)).count();

    let polarity_score = (positive_score as f64 - negative_score as f64)
        / (positive_score as f64 + negative_score as f64 + SCORE_EPSILON);
    let subjectivity_score =
        (positive_score + negative_score) as f64 / (word_count as f64 + SCORE_EPSILON);

    let avg_sentence_length = ratio(word_count, sentence_count);

    let syllables: Vec<usize> = words.iter().map(|w| count_syllables(w)).collect();
    let complex_word_count = syllables.iter().filter(|&&s| s > 2).count();
    let percentage_complex_words = ratio(complex_word_count, word_count);
    let fog_index = 0.4 * (avg_sentence_length + percentage_complex_words);
    let syllable_per_word = ratio(syllables.iter().sum(), word_count);

    let letters: usize = words.iter().map(|w| w.chars().count()).sum();
    let avg_word_length = ratio(letters, word_count);

    TextMetrics {
        positive_score,
        negative_score,
        polarity_score,
        subjectivity_score,
        avg_sentence_length,
        percentage_complex_words,
        fog_index,
        avg_words_per_sentence: avg_sentence_length,
        complex_word_count,
        word_count,
        sentence_count,
        syllable_per_word,
        personal_pronouns: count_personal_pronouns(text),
        avg_word_length,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn test_no_words_yields_zero_ratios() {
        let m = analyze_text("123 456 !!! 7.5%", &Lexicon::builtin());
        assert_eq!(m.word_count, 0);
        assert_eq!(m.avg_sentence_length, 0.0);
        assert_eq!(m.percentage_complex_words, 0.0);
        assert_eq!(m.syllable_per_word, 0.0);
        assert_eq!(m.avg_word_length, 0.0);
        assert_eq!(m.polarity_score, 0.0);
        assert_eq!(m.subjectivity_score, 0.0);
    }

    #[test]
    fn test_empty_text() {
        let m = analyze_text("", &Lexicon::builtin());
        assert_eq!(m.word_count, 0);
        assert_eq!(m.sentence_count, 0);
        assert_eq!(m.fog_index, 0.0);
        assert_eq!(m.personal_pronouns, 0);
    }

    #[test]
    fn test_two_sentences_ten_simple_words() {
        let m = analyze_text(
            "The cat sat on the mat. The dog ran off.",
            &Lexicon::builtin(),
        );
        assert_eq!(m.word_count, 10);
        assert_eq!(m.sentence_count, 2);
        assert!(approx(m.avg_sentence_length, 5.0));
        assert_eq!(m.complex_word_count, 0);
        assert!(approx(m.percentage_complex_words, 0.0));
        assert!(approx(m.fog_index, 2.0));
        assert_eq!(m.positive_score, 0);
        assert_eq!(m.negative_score, 0);
        assert!(approx(m.polarity_score, 0.0));
        assert!(approx(m.subjectivity_score, 0.0));
        assert!(approx(m.syllable_per_word, 1.0));
        assert!(approx(m.avg_word_length, 2.9));
    }

    #[test]
    fn test_balanced_sentiment() {
        let lex = Lexicon::new(["great"], ["sad"]);
        let m = analyze_text("This is great and wonderful, but sad.", &lex);
        assert_eq!(m.word_count, 7);
        assert_eq!(m.positive_score, 1);
        assert_eq!(m.negative_score, 1);
        assert!(approx(m.polarity_score, 0.0));
        assert_eq!(m.subjectivity_score, 2.0 / (7.0 + SCORE_EPSILON));
    }

    #[test]
    fn test_polarity_sign_and_bounds() {
        let lex = Lexicon::builtin();
        let pos = analyze_text("Good, great and excellent.", &lex);
        assert!(pos.polarity_score > 0.99 && pos.polarity_score < 1.0);
        let neg = analyze_text("Bad and sad.", &lex);
        assert!(neg.polarity_score < -0.99 && neg.polarity_score > -1.0);
    }

    #[test]
    fn test_sentiment_ignores_case() {
        let m = analyze_text("GREAT news. Sad ending.", &Lexicon::builtin());
        assert_eq!(m.positive_score, 1);
        assert_eq!(m.negative_score, 1);
    }

    #[test]
    fn test_avg_sentence_length_reported_twice() {
        let m = analyze_text(
            "One sentence here. Another one follows it. And a third.",
            &Lexicon::builtin(),
        );
        assert_eq!(m.avg_sentence_length, m.avg_words_per_sentence);
    }

    #[test]
    fn test_complex_words() {
        let m = analyze_text(
            "Education is wonderful. Cats nap.",
            &Lexicon::builtin(),
        );
        assert_eq!(m.word_count, 5);
        assert_eq!(m.complex_word_count, 2);
        assert!(approx(m.percentage_complex_words, 0.4));
        assert!(approx(m.fog_index, 0.4 * (2.5 + 0.4)));
        assert!(m.complex_word_count <= m.word_count);
    }

    #[test]
    fn test_pronouns_whole_word_case_insensitive() {
        assert_eq!(count_personal_pronouns("I said we should help us"), 3);
        assert_eq!(count_personal_pronouns("My house is OURS. We know."), 3);
        assert_eq!(count_personal_pronouns("Using music, mystery, usual"), 0);
        assert_eq!(count_personal_pronouns("The US economy"), 1);
    }

    #[test]
    fn test_pronouns_counted_on_raw_text() {
        let m = analyze_text("I'm sure we'll see us there.", &Lexicon::builtin());
        assert_eq!(m.personal_pronouns, 3);
    }
}
