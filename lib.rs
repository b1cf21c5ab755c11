//! Word frequency counting for text files.

pub mod counter;
pub mod decode;
pub mod report;
pub mod table;
pub mod tokenize;

pub use counter::{CountOptions, count_text, count_words};
pub use report::write_report;
pub use table::FrequencyTable;
pub use tokenize::Tokenization;
