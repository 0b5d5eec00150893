use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::NGramResult;

/// Reads a whole text file into memory.
///
/// - A leading UTF-8 byte order mark is dropped
/// - Line endings are left untouched, the normalizer treats them as whitespace
pub fn read_document<P: AsRef<Path>>(filename: P) -> NGramResult<String> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	if let Some(stripped) = contents.strip_prefix('\u{feff}') {
		contents = stripped.to_owned();
	}
	Ok(contents)
}
