//! Article scraping.
//!
//! Unlike a per-outlet scraper, input URLs here come from an arbitrary list,
//! so a single generic extractor is used for every page:
//!
//! | Field | Source |
//! |-------|--------|
//! | title | first `<h1>`, trimmed; `"No Title Found"` if absent |
//! | body  | text of every `<p>`, joined with `\n` |
//!
//! See [`article`] for the HTTP contract.

pub mod article;
