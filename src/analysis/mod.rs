//! Text metric engine.
//!
//! Pure functions from article text to a [`TextMetrics`] record:
//!
//! - [`tokenize`]: word tokens, the alphabetic word filter, sentence splitting
//! - [`syllables`]: vowel-group syllable estimate used for complex words
//! - [`lexicon`]: positive/negative word sets, injected by the caller
//! - [`metrics`]: the scoring formulas
//!
//! Nothing here performs I/O except [`Lexicon::from_files`].

pub mod lexicon;
pub mod metrics;
pub mod syllables;
pub mod tokenize;

pub use lexicon::Lexicon;
pub use metrics::{TextMetrics, analyze_text};
