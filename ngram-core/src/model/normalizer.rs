use crate::config::SplitMode;

/// Delimiter used by [`SplitMode::LiteralSpace`] and to join window tokens.
pub const BASE_DELIMITER: &str = " ";

/// Returns `true` for characters that survive punctuation stripping:
/// ASCII letters, digits, underscore, and any whitespace.
fn is_kept(c: char) -> bool {
	c.is_ascii_alphanumeric() || c == '_' || c.is_whitespace()
}

/// Trims, strips punctuation, and lowercases raw text.
///
/// Punctuation is deleted, not replaced: `"don't"` becomes `"dont"`.
pub fn normalize(text: &str) -> String {
	text.trim()
		.chars()
		.filter(|c| is_kept(*c))
		.flat_map(char::to_lowercase)
		.collect()
}

/// Normalizes `text` and splits it into word tokens.
///
/// Text that is empty after normalization yields no tokens in either mode.
pub fn tokenize(text: &str, split_mode: SplitMode) -> Vec<String> {
	let document = normalize(text);
	if document.is_empty() {
		return Vec::new();
	}

	match split_mode {
		SplitMode::Whitespace => document.split_whitespace().map(str::to_owned).collect(),
		SplitMode::LiteralSpace => document.split(BASE_DELIMITER).map(str::to_owned).collect(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn strips_punctuation_inside_words() {
		assert_eq!(normalize("  Don't STOP, puzzle!  "), "dont stop puzzle");
	}

	#[test]
	fn keeps_underscores_and_digits() {
		assert_eq!(normalize("snake_case 42"), "snake_case 42");
	}

	#[test]
	fn drops_non_ascii_letters() {
		assert_eq!(normalize("café"), "caf");
	}

	#[test]
	fn whitespace_split_collapses_runs() {
		assert_eq!(tokenize("a \t good\n\npuzzle", SplitMode::Whitespace), vec!["a", "good", "puzzle"]);
	}

	#[test]
	fn literal_split_only_breaks_on_spaces() {
		assert_eq!(
			tokenize("a  good\tpuzzle", SplitMode::LiteralSpace),
			vec!["a", "", "good\tpuzzle"]
		);
	}

	#[test]
	fn punctuation_only_text_has_no_tokens() {
		assert!(tokenize(" ?! ", SplitMode::LiteralSpace).is_empty());
		assert!(tokenize("", SplitMode::Whitespace).is_empty());
	}
}
