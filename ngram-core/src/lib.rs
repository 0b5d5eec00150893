//! Word n-gram frequency counting library.
//!
//! This crate extracts every contiguous word sequence of length `1..=N`
//! from a document and counts how often each distinct sequence occurs,
//! case-insensitively and with punctuation removed.
//!
//! ```
//! use ngram_core::model::process_document;
//!
//! let analysis = process_document("a good puzzle is a fun puzzle", 2);
//! let unigrams = analysis.segment(1).unwrap();
//! assert_eq!(unigrams.get("puzzle").unwrap().frequency(), 2);
//! ```

/// N-gram models, the counting engine, and its result type.
pub mod model;

/// Engine settings (match and split modes) and config file loading.
pub mod config;

/// Boundary errors and non-fatal diagnostics.
pub mod error;

/// File helpers shared by the front ends.
pub mod io;

pub use config::{EngineConfig, MatchMode, SplitMode};
pub use error::{Diagnostic, NGramError, NGramResult};
