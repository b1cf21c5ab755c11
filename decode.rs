use std::borrow::Cow;

use anyhow::{Result, anyhow};
use encoding_rs::Encoding;

/// Look up an encoding by its WHATWG label ("utf-8", "latin1", "shift_jis", ...).
pub fn encoding_for_label(label: &str) -> Result<&'static Encoding, String> {
    Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| format!("unknown encoding label '{}'", label))
}

/// Decode `bytes` as text.
///
/// A byte order mark wins over `fallback` and is stripped. Malformed input is an
/// error rather than being replaced with U+FFFD.
pub fn decode_text<'a>(bytes: &'a [u8], fallback: &'static Encoding) -> Result<Cow<'a, str>> {
    let (encoding, body) = match Encoding::for_bom(bytes) {
        Some((encoding, bom_len)) => (encoding, &bytes[bom_len..]),
        None => (fallback, bytes),
    };
    encoding
        .decode_without_bom_handling_and_without_replacement(body)
        .ok_or_else(|| anyhow!("input is not valid {} text", encoding.name()))
}
