use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use encoding_rs::Encoding;
use wordfreq::decode::encoding_for_label;
use wordfreq::{CountOptions, Tokenization, count_words, write_report};

/// Count word frequencies in a text file.
#[derive(Parser)]
#[command(name = "wordfreq", version)]
struct Args {
    /// Text file to read
    #[arg(value_parser = existing_path)]
    filepath: PathBuf,
    /// How words are cut out of the text: `whitespace` keeps tokens verbatim,
    /// `words` lowercases and drops punctuation
    #[arg(long, default_value_t = Tokenization::Whitespace)]
    tokenize: Tokenization,
    /// Encoding assumed when the file has no byte order mark
    #[arg(long, value_parser = encoding_for_label, default_value = "utf-8")]
    encoding: &'static Encoding,
    /// Print progress and timings to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn existing_path(s: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(s);
    if path.exists() {
        Ok(path)
    } else {
        Err(format!("path does not exist: {}", s))
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let options = CountOptions {
        tokenization: args.tokenize,
        encoding: args.encoding,
    };

    if args.verbose {
        eprintln!("--- Counting {} ---", args.filepath.display());
        eprintln!(
            "Tokenization: {}, encoding: {}",
            options.tokenization,
            options.encoding.name()
        );
    }
    let start = Instant::now();
    let counts = count_words(&args.filepath, &options)?;
    if args.verbose {
        eprintln!(
            "Counted {} tokens, {} distinct words in {:.2?}",
            counts.total(),
            counts.len(),
            start.elapsed()
        );
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_report(&counts, &mut out)?;
    out.flush()?;
    Ok(())
}
