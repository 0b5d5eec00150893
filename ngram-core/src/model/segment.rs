use std::borrow::Cow;

use indexmap::IndexMap;

use super::ngram::NGram;
use crate::config::MatchMode;

/// All distinct n-grams of one fixed length.
///
/// Entries are kept in first-seen order; [`NGramSegment::ngrams`] can hand
/// out an alphabetical copy on demand.
///
/// ## Responsibilities:
/// - Count occurrences of window texts (`add_word`)
/// - Look up entries according to the configured [`MatchMode`]
///
/// ## Invariants
/// - Keys are unique and equal to the stored `NGram::word`
/// - Every frequency is at least 1
#[derive(Clone, Debug)]
pub struct NGramSegment {
	/// Number of tokens in every n-gram of this segment.
	ngram_length: usize,
	match_mode: MatchMode,
	/// Example: { "a good" => NGram { word: "a good", frequency: 1 } }
	ngrams: IndexMap<String, NGram>,
}

impl NGramSegment {
	pub fn new(ngram_length: usize, match_mode: MatchMode) -> Self {
		Self {
			ngram_length,
			match_mode,
			ngrams: IndexMap::new(),
		}
	}

	pub fn ngram_length(&self) -> usize {
		self.ngram_length
	}

	pub fn len(&self) -> usize {
		self.ngrams.len()
	}

	pub fn is_empty(&self) -> bool {
		self.ngrams.is_empty()
	}

	/// Records an occurrence of `word`.
	///
	/// - If a matching entry exists, its frequency is increased.
	/// - Otherwise a new entry is inserted with a frequency of 1.
	pub fn add_word(&mut self, word: &str) {
		match self.position_of(word) {
			Some(index) => {
				if let Some((_, existing)) = self.ngrams.get_index_mut(index) {
					existing.add_occurrence();
				}
			}
			None => {
				self.ngrams.insert(word.to_owned(), NGram::new(word));
			}
		}
	}

	/// Returns the entry `candidate` resolves to under this segment's
	/// match mode, if any.
	///
	/// With [`MatchMode::Substring`] the scan follows insertion order and the
	/// first entry whose word contains `candidate` wins.
	pub fn contains_word(&self, candidate: &str) -> Option<&NGram> {
		let index = self.position_of(candidate)?;
		self.ngrams.get_index(index).map(|(_, ngram)| ngram)
	}

	/// Index of the entry `candidate` resolves to. Shared by lookup and
	/// counting so both follow the same match rules.
	fn position_of(&self, candidate: &str) -> Option<usize> {
		match self.match_mode {
			MatchMode::Exact => self.ngrams.get_index_of(candidate),
			MatchMode::Substring => self.ngrams.values().position(|ngram| ngram.matches(candidate)),
		}
	}

	/// Exact lookup by n-gram text, regardless of match mode.
	pub fn get(&self, word: &str) -> Option<&NGram> {
		self.ngrams.get(word)
	}

	/// Returns the entries, either borrowed in first-seen order or as a
	/// copy sorted alphabetically by n-gram text.
	pub fn ngrams(&self, sorted: bool) -> Cow<'_, IndexMap<String, NGram>> {
		if !sorted {
			return Cow::Borrowed(&self.ngrams);
		}
		let mut ngrams = self.ngrams.clone();
		ngrams.sort_keys();
		Cow::Owned(ngrams)
	}

	/// Iterates entries in first-seen order without cloning.
	pub fn iter(&self) -> impl Iterator<Item = &NGram> {
		self.ngrams.values()
	}

	/// Number of stored entries whose word contains `word`.
	pub fn count_matching(&self, word: &str) -> usize {
		self.ngrams.values().filter(|ngram| ngram.matches(word)).count()
	}

	/// Sum of all frequencies. Equals the window count in exact mode.
	pub fn total_frequency(&self) -> usize {
		self.ngrams.values().map(NGram::frequency).sum()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn exact_mode_keeps_overlapping_words_apart() {
		let mut segment = NGramSegment::new(1, MatchMode::Exact);
		for word in ["puzzle", "puzzles", "puzzle"] {
			segment.add_word(word);
		}
		assert_eq!(segment.len(), 2);
		assert_eq!(segment.get("puzzle").unwrap().frequency(), 2);
		assert_eq!(segment.get("puzzles").unwrap().frequency(), 1);
	}

	#[test]
	fn substring_mode_merges_into_first_containing_entry() {
		let mut segment = NGramSegment::new(1, MatchMode::Substring);
		for word in ["puzzles", "puzzle", "zz"] {
			segment.add_word(word);
		}
		assert_eq!(segment.len(), 1);
		assert_eq!(segment.get("puzzles").unwrap().frequency(), 3);
		assert!(segment.get("puzzle").is_none());
	}

	#[test]
	fn substring_mode_does_not_match_longer_candidates() {
		let mut segment = NGramSegment::new(1, MatchMode::Substring);
		segment.add_word("a");
		segment.add_word("good");
		assert_eq!(segment.len(), 2);
	}

	#[test]
	fn sorted_view_leaves_insertion_order_intact() {
		let mut segment = NGramSegment::new(1, MatchMode::Exact);
		for word in ["puzzle", "a", "good"] {
			segment.add_word(word);
		}
		let sorted: Vec<_> = segment.ngrams(true).keys().cloned().collect();
		let unsorted: Vec<_> = segment.ngrams(false).keys().cloned().collect();
		assert_eq!(sorted, vec!["a", "good", "puzzle"]);
		assert_eq!(unsorted, vec!["puzzle", "a", "good"]);
	}

	#[test]
	fn unsorted_view_is_borrowed() {
		let mut segment = NGramSegment::new(1, MatchMode::Exact);
		segment.add_word("b");
		assert!(matches!(segment.ngrams(false), Cow::Borrowed(_)));
		assert!(matches!(segment.ngrams(true), Cow::Owned(_)));
	}

	fn segment_of(match_mode: MatchMode, words: &[&str]) -> NGramSegment {
		let mut segment = NGramSegment::new(1, match_mode);
		for word in words {
			segment.add_word(word);
		}
		segment
	}

	#[test]
	fn exact_contains_word_hit_and_miss() {
		let segment = segment_of(MatchMode::Exact, &["puzzles", "good"]);
		assert_eq!(segment.contains_word("good").map(NGram::word), Some("good"));
		assert!(segment.contains_word("puzzle").is_none());
		assert!(segment.contains_word("zz").is_none());
	}

	#[test]
	fn substring_contains_word_hit_and_miss() {
		let segment = segment_of(MatchMode::Substring, &["puzzles", "good"]);
		assert_eq!(segment.contains_word("zz").map(NGram::word), Some("puzzles"));
		assert_eq!(segment.contains_word("oo").map(NGram::word), Some("good"));
		assert!(segment.contains_word("fun").is_none());
	}

	#[test]
	fn substring_contains_word_prefers_first_inserted() {
		let segment = segment_of(MatchMode::Substring, &["is a", "a fun", "fun"]);
		assert_eq!(segment.len(), 2);
		assert_eq!(segment.contains_word("a").map(NGram::word), Some("is a"));
		assert_eq!(segment.contains_word("fun").map(NGram::word), Some("a fun"));
	}

	#[test]
	fn add_word_increments_what_contains_word_returns() {
		let mut segment = segment_of(MatchMode::Substring, &["is a", "a fun"]);
		segment.add_word("a");
		assert_eq!(segment.contains_word("a").unwrap().frequency(), 2);
		assert_eq!(segment.get("a fun").unwrap().frequency(), 1);
	}
}
