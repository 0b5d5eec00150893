use serde::Serialize;
use thiserror::Error;

/// Errors raised at the configuration and I/O boundary.
///
/// The counting engine itself never fails: invalid input is reported
/// through [`Diagnostic`] instead.
#[derive(Error, Debug)]
pub enum NGramError {
	#[error("IO Error: {0}")]
	Io(#[from] std::io::Error),

	#[error("JSON Parsing Error: {0}")]
	Json(#[from] serde_json::Error),

	#[error("Configuration Error: {0}")]
	Config(String),
}

pub type NGramResult<T> = Result<T, NGramError>;

/// Non-fatal conditions reported alongside a result.
///
/// - `EmptyText` and `InvalidMaxLength` are input-validation warnings
///   collected into an [`Analysis`](crate::model::Analysis).
/// - `MaxLengthTooLarge` is raised by front ends that cap `max_length`.
/// - `EmptyWord` and `MissingSegment` are lookup misses returned by
///   [`Analysis::occurrences_of_word`](crate::model::Analysis::occurrences_of_word).
#[derive(Error, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum Diagnostic {
	#[error("Unable to process document; text input is empty or blank")]
	EmptyText,

	#[error("Unable to process document; max length must be at least 1")]
	InvalidMaxLength,

	#[error("Max length {requested} exceeds the limit of {limit}")]
	MaxLengthTooLarge { requested: usize, limit: usize },

	#[error("Lookup word is empty")]
	EmptyWord,

	#[error("Segment for length {0} does not exist")]
	MissingSegment(usize),
}
