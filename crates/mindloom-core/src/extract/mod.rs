mod normalizer;
mod pipeline;
mod ranker;
mod topic;

pub use normalizer::normalize;
pub use pipeline::{ExtractStats, Extraction, ExtractionPipeline, DEFAULT_MAX_NODES};
pub use ranker::{rank_phrases, PhraseRanker, RankedPhrase};
pub use topic::{select_topic, TopicChoice, TopicSelector, TopicTier, DEFAULT_TOPIC};
