//! N-gram extraction and frequency counting.
//!
//! This module provides:
//! - Text normalization and tokenization (`normalizer`)
//! - Per-length aggregation of distinct n-grams (`NGramSegment`)
//! - Sliding-window extraction over a whole document (`NGramEngine`)
//! - The per-run result and its query helper (`Analysis`)

/// Single counted n-gram (word + frequency).
pub mod ngram;

/// All distinct n-grams of one fixed length.
///
/// Supports lookup-or-insert counting and alphabetical views.
pub mod segment;

/// Punctuation stripping, lowercasing, and splitting into tokens.
pub mod normalizer;

/// Drives the sliding windows for every length up to the maximum.
pub mod engine;

/// Result set of one run, grouped by n-gram length.
pub mod analysis;

pub use analysis::{Analysis, GroupedNGrams};
pub use engine::{process_document, NGramEngine};
pub use ngram::NGram;
pub use segment::NGramSegment;
