//! Persistent outputs of both passes.
//!
//! # Submodules
//!
//! - [`articles`]: per-article text files written by the fetch pass
//! - [`table`]: CSV input/schema reading and the final report
//! - [`json`]: optional JSON copy of the report
//!
//! # Output Structure
//!
//! ```text
//! Articles/
//! ├── 123.txt                     # title, blank line, body
//! └── 124.txt
//! Textual_Analysis_Output.csv     # one row per analyzed article
//! ```

pub mod articles;
pub mod json;
pub mod table;
