use serde::{Deserialize, Serialize};

/// Anchor substrings that mark a phrase as heading-like.
const ANCHOR_TERMS: [&str; 5] = ["ethic", "justice", "behavior", "learning", "system"];

/// Known subject areas, checked against the cleaned text in this order.
const DOMAIN_TOPICS: [&str; 6] = [
    "ethics",
    "ethical behavior",
    "justice",
    "machine learning",
    "data science",
    "artificial intelligence",
];

pub const DEFAULT_TOPIC: &str = "Main Topic";

const HEADING_MAX_WORDS: usize = 2;

/// Which fallback tier produced the topic label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopicTier {
    Heading,
    DomainVocabulary,
    Frequency,
    Default,
}

impl TopicTier {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Heading => "heading",
            Self::DomainVocabulary => "domain_vocabulary",
            Self::Frequency => "frequency",
            Self::Default => "default",
        }
    }
}

impl std::fmt::Display for TopicTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicChoice {
    pub label: String,
    pub tier: TopicTier,
}

/// Picks one main-topic label for a note.
///
/// Tiers are tried in order, first match wins: a heading-like keyword, a
/// known subject area found in the cleaned text, the most frequent phrase,
/// then a constant placeholder.
#[derive(Debug, Clone)]
pub struct TopicSelector {
    anchors: Vec<String>,
    domain_topics: Vec<String>,
    fallback: String,
}

impl Default for TopicSelector {
    fn default() -> Self {
        Self {
            anchors: ANCHOR_TERMS.iter().map(|s| (*s).to_string()).collect(),
            domain_topics: DOMAIN_TOPICS.iter().map(|s| (*s).to_string()).collect(),
            fallback: DEFAULT_TOPIC.to_string(),
        }
    }
}

impl TopicSelector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_anchors(mut self, anchors: &[&str]) -> Self {
        self.anchors = anchors.iter().map(|s| (*s).to_string()).collect();
        self
    }

    #[must_use]
    pub fn with_domain_topics(mut self, topics: &[&str]) -> Self {
        self.domain_topics = topics.iter().map(|s| (*s).to_string()).collect();
        self
    }

    #[must_use]
    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = fallback.into();
        self
    }

    #[must_use]
    pub fn select(&self, cleaned: &str, keywords: &[String]) -> TopicChoice {
        if let Some(label) = self.heading_topic(keywords) {
            return TopicChoice {
                label,
                tier: TopicTier::Heading,
            };
        }

        if let Some(label) = self.domain_topic(cleaned) {
            return TopicChoice {
                label,
                tier: TopicTier::DomainVocabulary,
            };
        }

        if let Some(first) = keywords.first() {
            return TopicChoice {
                label: title_case(first),
                tier: TopicTier::Frequency,
            };
        }

        TopicChoice {
            label: self.fallback.clone(),
            tier: TopicTier::Default,
        }
    }

    /// First short keyword containing an anchor term, in keyword order.
    ///
    /// Plain substring containment: "system" also matches inside
    /// "ecosystem".
    fn heading_topic(&self, keywords: &[String]) -> Option<String> {
        keywords
            .iter()
            .find(|phrase| {
                phrase.split_whitespace().count() <= HEADING_MAX_WORDS
                    && self
                        .anchors
                        .iter()
                        .any(|anchor| phrase.contains(anchor.as_str()))
            })
            .map(|phrase| title_case(phrase))
    }

    /// First domain table entry appearing anywhere in the cleaned text.
    fn domain_topic(&self, cleaned: &str) -> Option<String> {
        self.domain_topics
            .iter()
            .find(|topic| cleaned.contains(topic.as_str()))
            .map(|topic| title_case(topic))
    }
}

/// Topic label under the default anchor and domain tables.
#[must_use]
pub fn select_topic(cleaned: &str, keywords: &[String]) -> String {
    TopicSelector::default().select(cleaned, keywords).label
}

fn title_case(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}
