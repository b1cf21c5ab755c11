use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

// Letters, digits and combining marks, with apostrophes allowed between them.
static WORD_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\p{L}\p{N}\p{M}]+(?:['’][\p{L}\p{N}\p{M}]+)*").unwrap()
});

/// How raw text is cut into words.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tokenization {
    /// Split on Unicode whitespace, keep every token verbatim.
    #[default]
    Whitespace,
    /// Lowercased runs of letters and digits; surrounding punctuation is dropped.
    Words,
}

impl Tokenization {
    /// Iterate over the tokens of `text` under this policy.
    pub fn tokens<'a>(self, text: &'a str) -> Box<dyn Iterator<Item = String> + 'a> {
        match self {
            Tokenization::Whitespace => Box::new(text.split_whitespace().map(str::to_string)),
            Tokenization::Words => {
                Box::new(WORD_REGEX.find_iter(text).map(|m| m.as_str().to_lowercase()))
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Tokenization::Whitespace => "whitespace",
            Tokenization::Words => "words",
        }
    }
}

impl fmt::Display for Tokenization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tokenization {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "whitespace" => Ok(Tokenization::Whitespace),
            "words" => Ok(Tokenization::Words),
            other => Err(format!(
                "unknown tokenization '{}' (expected 'whitespace' or 'words')",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(policy: Tokenization, text: &str) -> Vec<String> {
        policy.tokens(text).collect()
    }

    #[test]
    fn whitespace_keeps_tokens_verbatim() {
        let tokens = collect(Tokenization::Whitespace, "The cat,  sat\ton\nthe MAT.");
        assert_eq!(tokens, vec!["The", "cat,", "sat", "on", "the", "MAT."]);
    }

    #[test]
    fn whitespace_only_input_has_no_tokens() {
        assert!(collect(Tokenization::Whitespace, " \t\r\n  ").is_empty());
        assert!(collect(Tokenization::Whitespace, "").is_empty());
    }

    #[test]
    fn words_strips_punctuation_and_folds_case() {
        let tokens = collect(Tokenization::Words, "\"Hello,\" she said -- HELLO!");
        assert_eq!(tokens, vec!["hello", "she", "said", "hello"]);
    }

    #[test]
    fn words_keeps_inner_apostrophes() {
        let tokens = collect(Tokenization::Words, "Don't stop 'til rock'n'roll");
        assert_eq!(tokens, vec!["don't", "stop", "til", "rock'n'roll"]);
    }

    #[test]
    fn words_handles_non_ascii_scripts() {
        let tokens = collect(Tokenization::Words, "Ñandú café 日本語 2024");
        assert_eq!(tokens, vec!["ñandú", "café", "日本語", "2024"]);
    }

    #[test]
    fn parses_policy_names() {
        assert_eq!("words".parse::<Tokenization>(), Ok(Tokenization::Words));
        assert_eq!("Whitespace".parse::<Tokenization>(), Ok(Tokenization::Whitespace));
        assert!("bigrams".parse::<Tokenization>().is_err());
        assert_eq!(Tokenization::default().to_string(), "whitespace");
    }
}
