pub mod error;
pub mod extract;
pub mod graph;
pub mod note;
pub mod render;

pub use error::{Error, Result};
pub use extract::{
    normalize, rank_phrases, select_topic, ExtractStats, Extraction, ExtractionPipeline,
    PhraseRanker, RankedPhrase, TopicChoice, TopicSelector, TopicTier,
};
pub use graph::{MindMap, MindNode, NodeKind};
pub use note::{Note, NoteSource};
pub use render::{RenderError, RenderResult};
