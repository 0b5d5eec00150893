use std::collections::BTreeMap;

use tracing::{debug, warn};

use super::analysis::Analysis;
use super::normalizer::{tokenize, BASE_DELIMITER};
use super::segment::NGramSegment;
use crate::config::EngineConfig;
use crate::error::Diagnostic;

/// Sliding-window n-gram counter.
///
/// The engine holds only its configuration. Every call to
/// [`NGramEngine::process_document`] builds and returns a fresh
/// [`Analysis`], so a single engine can be shared between threads.
#[derive(Clone, Copy, Debug, Default)]
pub struct NGramEngine {
	config: EngineConfig,
}

impl NGramEngine {
	pub fn new(config: EngineConfig) -> Self {
		Self { config }
	}

	pub fn config(&self) -> &EngineConfig {
		&self.config
	}

	/// Counts every n-gram of length `1..=max_length` in `text`.
	///
	/// # Behavior
	/// - Blank text or a `max_length` of 0 is reported as a diagnostic but
	///   never aborts the run.
	/// - A segment is created for every length, even when the document has
	///   fewer tokens than that length.
	/// - For length `L`, windows start at every index `i` with
	///   `i + L <= token_count`; their tokens are joined with single spaces.
	pub fn process_document(&self, text: &str, max_length: usize) -> Analysis {
		let mut diagnostics = Vec::new();
		if text.trim().is_empty() {
			warn!("{}", Diagnostic::EmptyText);
			diagnostics.push(Diagnostic::EmptyText);
		}
		if max_length == 0 {
			warn!("{}", Diagnostic::InvalidMaxLength);
			diagnostics.push(Diagnostic::InvalidMaxLength);
		}

		let words = tokenize(text, self.config.split_mode);

		let mut segments = BTreeMap::new();
		for length in 1..=max_length {
			let mut segment = NGramSegment::new(length, self.config.match_mode);
			for window in words.windows(length) {
				segment.add_word(&window.join(BASE_DELIMITER));
			}
			segments.insert(length, segment);
		}

		debug!(
			tokens = words.len(),
			segments = segments.len(),
			match_mode = %self.config.match_mode,
			split_mode = %self.config.split_mode,
			"Document processed"
		);

		Analysis::new(segments, words.len(), diagnostics)
	}
}

/// Runs [`NGramEngine::process_document`] with the default configuration.
pub fn process_document(text: &str, max_length: usize) -> Analysis {
	NGramEngine::default().process_document(text, max_length)
}
