use std::time::Instant;

use serde::{Deserialize, Serialize};

use super::normalizer::normalize;
use super::ranker::{PhraseRanker, RankedPhrase};
use super::topic::{TopicChoice, TopicSelector, TopicTier};
use crate::note::Note;

pub const DEFAULT_MAX_NODES: usize = 10;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractStats {
    pub tokens: usize,
    pub ranked_phrases: usize,
    pub kept_phrases: usize,
    pub duration_ms: u64,
}

/// Everything one pipeline run produces for a single note.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Extraction {
    pub cleaned: String,
    pub keywords: Vec<RankedPhrase>,
    pub main_topic: String,
    pub tier: TopicTier,
    pub stats: ExtractStats,
}

impl Extraction {
    #[must_use]
    pub fn keyword_labels(&self) -> Vec<String> {
        self.keywords.iter().map(|p| p.text.clone()).collect()
    }
}

/// Normalize, rank and label one note in a single pass.
///
/// Stateless: nothing carries over between runs, and the same input always
/// yields the same output.
pub struct ExtractionPipeline {
    ranker: PhraseRanker,
    selector: TopicSelector,
    max_nodes: usize,
}

impl ExtractionPipeline {
    #[must_use]
    pub fn new() -> Self {
        Self {
            ranker: PhraseRanker::default(),
            selector: TopicSelector::default(),
            max_nodes: DEFAULT_MAX_NODES,
        }
    }

    #[must_use]
    pub fn with_ranker(mut self, ranker: PhraseRanker) -> Self {
        self.ranker = ranker;
        self
    }

    #[must_use]
    pub fn with_selector(mut self, selector: TopicSelector) -> Self {
        self.selector = selector;
        self
    }

    /// Budget for leaf nodes. Any positive value is accepted; the keyword
    /// list is cut to `min(max_nodes, ranked)`.
    #[must_use]
    pub fn with_max_nodes(mut self, max_nodes: usize) -> Self {
        self.max_nodes = max_nodes;
        self
    }

    #[must_use]
    pub fn extract(&self, raw: &str) -> Extraction {
        let start = Instant::now();

        let cleaned = normalize(raw);
        let tokens = cleaned.split_whitespace().count();

        let mut keywords = self.ranker.rank(&cleaned);
        let ranked_phrases = keywords.len();
        keywords.truncate(self.max_nodes);

        let labels: Vec<String> = keywords.iter().map(|p| p.text.clone()).collect();
        let TopicChoice {
            label: main_topic,
            tier,
        } = self.selector.select(&cleaned, &labels);

        let stats = ExtractStats {
            tokens,
            ranked_phrases,
            kept_phrases: keywords.len(),
            duration_ms: start.elapsed().as_millis() as u64,
        };

        tracing::debug!(
            tokens,
            ranked = ranked_phrases,
            kept = stats.kept_phrases,
            tier = %tier,
            "extracted note"
        );

        Extraction {
            cleaned,
            keywords,
            main_topic,
            tier,
            stats,
        }
    }

    #[must_use]
    pub fn extract_note(&self, note: &Note) -> Extraction {
        self.extract(&note.body)
    }
}

impl Default for ExtractionPipeline {
    fn default() -> Self {
        Self::new()
    }
}
