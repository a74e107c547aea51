use std::collections::{hash_map, HashMap};

use crate::{
    errors::errors::Error,
    lexer::{lexer::tokenize, tokens::Token},
};

/// Occurrence count of every distinct word seen so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyMap {
    counts: HashMap<String, usize>,
}

impl FrequencyMap {
    pub fn new() -> Self {
        FrequencyMap::default()
    }

    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut counts = FrequencyMap::new();

        for line in lines {
            counts.observe_line(line.as_ref());
        }

        counts
    }

    pub fn observe(&mut self, token: Token) {
        *self.counts.entry(token.value).or_insert(0) += 1;
    }

    pub fn observe_line(&mut self, line: &str) {
        for token in tokenize(line) {
            self.observe(token);
        }
    }

    pub fn get(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the number of tokens observed.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Words with their counts in ascending byte order of the word.
    pub fn sorted(&self) -> Vec<(&str, usize)> {
        let mut pairs = self
            .counts
            .iter()
            .map(|(word, count)| (word.as_str(), *count))
            .collect::<Vec<_>>();

        pairs.sort_unstable_by(|a, b| a.0.cmp(b.0));
        pairs
    }

    pub fn iter(&self) -> hash_map::Iter<'_, String, usize> {
        self.counts.iter()
    }
}

/// Counts the words of every line, stopping at the first failed line.
///
/// On failure the partial counts are dropped along with the error.
pub fn count_words<I>(lines: I) -> Result<FrequencyMap, Error>
where
    I: IntoIterator<Item = Result<String, Error>>,
{
    let mut counts = FrequencyMap::new();

    for line in lines {
        counts.observe_line(&line?);
    }

    Ok(counts)
}
