use std::io::{self, Write};

use crate::table::FrequencyTable;

pub const HEADER: &str = "--- Word Counts ---";

/// Write the header followed by one `word: count` line per word, alphabetically.
/// An empty table writes nothing, not even the header.
pub fn write_report<W: Write>(table: &FrequencyTable, out: &mut W) -> io::Result<()> {
    if table.is_empty() {
        return Ok(());
    }
    writeln!(out, "{}", HEADER)?;
    for (word, count) in table.sorted() {
        writeln!(out, "{}: {}", word, count)?;
    }
    Ok(())
}
