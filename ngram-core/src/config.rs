use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{NGramError, NGramResult};
use crate::io::read_document;

/// How a segment decides that an n-gram has already been seen.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
	/// Literal equality of the normalized n-gram text.
	#[default]
	Exact,
	/// Legacy lookup: the first stored entry whose word *contains* the
	/// candidate absorbs the occurrence. Distinct n-grams may be merged.
	Substring,
}

/// How normalized text is cut into tokens.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SplitMode {
	/// Any run of whitespace separates two tokens.
	#[default]
	Whitespace,
	/// Only the plain space character separates tokens. Consecutive spaces
	/// yield empty tokens and tabs or newlines stay inside a token.
	#[serde(rename = "literal")]
	LiteralSpace,
}

impl FromStr for MatchMode {
	type Err = NGramError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_lowercase().as_str() {
			"exact" => Ok(MatchMode::Exact),
			"substring" => Ok(MatchMode::Substring),
			other => Err(NGramError::Config(format!(
				"Unknown match mode '{other}', expected 'exact' or 'substring'"
			))),
		}
	}
}

impl FromStr for SplitMode {
	type Err = NGramError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_lowercase().as_str() {
			"whitespace" => Ok(SplitMode::Whitespace),
			"literal" => Ok(SplitMode::LiteralSpace),
			other => Err(NGramError::Config(format!(
				"Unknown split mode '{other}', expected 'whitespace' or 'literal'"
			))),
		}
	}
}

impl fmt::Display for MatchMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			MatchMode::Exact => f.write_str("exact"),
			MatchMode::Substring => f.write_str("substring"),
		}
	}
}

impl fmt::Display for SplitMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			SplitMode::Whitespace => f.write_str("whitespace"),
			SplitMode::LiteralSpace => f.write_str("literal"),
		}
	}
}

/// Engine settings shared by every front end.
///
/// Missing fields in a config file fall back to their defaults, so
/// `{"match_mode": "substring"}` is a valid file.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct EngineConfig {
	pub match_mode: MatchMode,
	pub split_mode: SplitMode,
}

impl EngineConfig {
	/// Settings reproducing the historical behavior: substring lookup and
	/// single-space splitting.
	pub fn legacy() -> Self {
		Self {
			match_mode: MatchMode::Substring,
			split_mode: SplitMode::LiteralSpace,
		}
	}

	/// Loads a JSON config file.
	///
	/// # Errors
	/// Returns an error if the file cannot be read or is not valid JSON.
	pub fn load_from_file<P: AsRef<Path>>(path: P) -> NGramResult<Self> {
		let contents = read_document(path)?;
		let config = serde_json::from_str(&contents)?;
		Ok(config)
	}
}
