use std::collections::HashMap;

use serde::{Deserialize, Serialize};

const MIN_WORD_LEN: usize = 3;
const MAX_PHRASES: usize = 10;

/// A two-word phrase and how often it occurred in one note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedPhrase {
    pub text: String,
    pub count: usize,
}

/// Ranks adjacent word pairs by frequency.
#[derive(Debug, Clone)]
pub struct PhraseRanker {
    min_word_len: usize,
    max_phrases: usize,
}

impl Default for PhraseRanker {
    fn default() -> Self {
        Self {
            min_word_len: MIN_WORD_LEN,
            max_phrases: MAX_PHRASES,
        }
    }
}

impl PhraseRanker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Words must be strictly longer than this to join a phrase.
    #[must_use]
    pub fn with_min_word_len(mut self, len: usize) -> Self {
        self.min_word_len = len;
        self
    }

    #[must_use]
    pub fn with_max_phrases(mut self, max: usize) -> Self {
        self.max_phrases = max;
        self
    }

    /// Rank the adjacent word pairs of already-normalized text.
    ///
    /// Pairs qualify only when both words exceed the minimum length.
    /// Ordering is by descending count; equal counts keep the order in
    /// which the phrases were first seen.
    #[must_use]
    pub fn rank(&self, cleaned: &str) -> Vec<RankedPhrase> {
        let tokens: Vec<&str> = cleaned.split_whitespace().collect();

        let mut index: HashMap<String, usize> = HashMap::new();
        let mut ranked: Vec<RankedPhrase> = Vec::new();

        for pair in tokens.windows(2) {
            let (first, second) = (pair[0], pair[1]);
            if first.len() <= self.min_word_len || second.len() <= self.min_word_len {
                continue;
            }

            let phrase = format!("{first} {second}");
            if let Some(&at) = index.get(phrase.as_str()) {
                ranked[at].count += 1;
            } else {
                index.insert(phrase.clone(), ranked.len());
                ranked.push(RankedPhrase {
                    text: phrase,
                    count: 1,
                });
            }
        }

        // sort_by is stable, so ties keep first-seen order
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked.truncate(self.max_phrases);
        ranked
    }
}

/// Ranked phrase texts under the default configuration.
#[must_use]
pub fn rank_phrases(cleaned: &str) -> Vec<String> {
    PhraseRanker::default()
        .rank(cleaned)
        .into_iter()
        .map(|phrase| phrase.text)
        .collect()
}
