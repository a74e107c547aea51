use super::tokens::{Token, WORD_PATTERN};

/// Splits `line` into lower-cased word tokens, left to right.
///
/// Anything that is not a word character only separates words.
pub fn tokenize(line: &str) -> Vec<Token> {
    WORD_PATTERN
        .find_iter(line)
        .map(|matched| Token {
            value: matched.as_str().to_lowercase(),
        })
        .collect()
}
