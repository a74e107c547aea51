use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Maximal runs of word characters: letters, digits and underscore.
    pub static ref WORD_PATTERN: Regex = Regex::new(r"\w+").unwrap();
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub value: String,
}
