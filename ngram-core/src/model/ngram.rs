use serde::Serialize;

/// One distinct n-gram and how many times it was seen.
///
/// `word` is the lowercase, space-joined window text and `frequency`
/// starts at 1 when the entry is created.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct NGram {
	word: String,
	frequency: usize,
}

impl NGram {
	pub fn new(word: &str) -> Self {
		Self {
			word: word.to_owned(),
			frequency: 1,
		}
	}

	pub fn word(&self) -> &str {
		&self.word
	}

	pub fn frequency(&self) -> usize {
		self.frequency
	}

	/// Records one more occurrence.
	pub fn add_occurrence(&mut self) {
		self.frequency += 1;
	}

	/// Legacy match test: does the stored word contain `candidate`?
	pub(crate) fn matches(&self, candidate: &str) -> bool {
		self.word.contains(candidate)
	}
}
