use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use encoding_rs::{Encoding, UTF_8};

use crate::decode::decode_text;
use crate::table::FrequencyTable;
use crate::tokenize::Tokenization;

/// Knobs for a single count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountOptions {
    pub tokenization: Tokenization,
    /// Used when the file carries no byte order mark.
    pub encoding: &'static Encoding,
}

impl Default for CountOptions {
    fn default() -> Self {
        CountOptions {
            tokenization: Tokenization::default(),
            encoding: UTF_8,
        }
    }
}

/// Tally every token of `text`.
pub fn count_text(text: &str, tokenization: Tokenization) -> FrequencyTable {
    tokenization.tokens(text).collect()
}

/// Read the file at `path` and tally its words.
///
/// The path is expected to exist already. Fails if the file can't be read or
/// isn't valid text in the chosen encoding. An empty file gives an empty table.
pub fn count_words(path: impl AsRef<Path>, options: &CountOptions) -> Result<FrequencyTable> {
    let path = path.as_ref();
    let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let text = decode_text(&bytes, options.encoding)
        .with_context(|| format!("failed to decode {}", path.display()))?;
    Ok(count_text(&text, options.tokenization))
}
