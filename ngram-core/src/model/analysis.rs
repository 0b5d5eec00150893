use std::collections::BTreeMap;

use indexmap::IndexMap;
use tracing::warn;

use super::ngram::NGram;
use super::normalizer::normalize;
use super::segment::NGramSegment;
use crate::error::Diagnostic;

/// Entries of every segment keyed by length, then by n-gram text.
pub type GroupedNGrams = BTreeMap<usize, IndexMap<String, NGram>>;

/// Result of one [`NGramEngine::process_document`](super::NGramEngine::process_document) run.
///
/// Holds one segment per length `1..=max_length` (present even when the
/// document is too short to fill a window of that length), the number of
/// tokens the document produced, and any input diagnostics.
#[derive(Clone, Debug)]
pub struct Analysis {
	segments: BTreeMap<usize, NGramSegment>,
	token_count: usize,
	diagnostics: Vec<Diagnostic>,
}

impl Analysis {
	pub(crate) fn new(
		segments: BTreeMap<usize, NGramSegment>,
		token_count: usize,
		diagnostics: Vec<Diagnostic>,
	) -> Self {
		Self { segments, token_count, diagnostics }
	}

	pub fn segment(&self, length: usize) -> Option<&NGramSegment> {
		self.segments.get(&length)
	}

	/// Segment lengths in ascending order.
	pub fn lengths(&self) -> impl Iterator<Item = usize> + '_ {
		self.segments.keys().copied()
	}

	pub fn token_count(&self) -> usize {
		self.token_count
	}

	pub fn diagnostics(&self) -> &[Diagnostic] {
		&self.diagnostics
	}

	/// Groups every segment's entries by length: length → text → n-gram.
	pub fn grouped(&self, sorted: bool) -> GroupedNGrams {
		self.segments
			.iter()
			.map(|(length, segment)| (*length, segment.ngrams(sorted).into_owned()))
			.collect()
	}

	/// Counts the stored entries of segment `length` whose text contains
	/// `word`.
	///
	/// `word` goes through the same normalization as documents, so
	/// `"Puzzle,"` looks up `"puzzle"`.
	///
	/// This counts distinct entries, not occurrences: in a segment holding
	/// `"a good"` (x3) and `"a fun"` (x1), the word `"a"` yields 2.
	///
	/// # Errors
	/// Returns a [`Diagnostic`] when `word` is empty after normalization or
	/// the segment does not exist. Callers that only want a number use
	/// `.unwrap_or(0)`.
	pub fn occurrences_of_word(&self, length: usize, word: &str) -> Result<usize, Diagnostic> {
		let word = normalize(word);
		if word.is_empty() {
			warn!(length, "Occurrence lookup skipped: {}", Diagnostic::EmptyWord);
			return Err(Diagnostic::EmptyWord);
		}

		match self.segments.get(&length) {
			Some(segment) => Ok(segment.count_matching(&word)),
			None => {
				let diagnostic = Diagnostic::MissingSegment(length);
				warn!(length, word = %word, "Occurrence lookup skipped: {}", diagnostic);
				Err(diagnostic)
			}
		}
	}
}
