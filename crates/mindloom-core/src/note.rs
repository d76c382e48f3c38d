use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteSource {
    Typed,
    Ocr,
    File,
}

impl NoteSource {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Typed => "typed",
            Self::Ocr => "ocr",
            Self::File => "file",
        }
    }
}

impl std::fmt::Display for NoteSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for NoteSource {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "typed" => Ok(Self::Typed),
            "ocr" => Ok(Self::Ocr),
            "file" => Ok(Self::File),
            _ => Err(crate::Error::InvalidNoteSource(s.to_string())),
        }
    }
}

/// A single captured note: raw text plus provenance.
///
/// Construction rejects blank bodies so every frontend shares the same
/// "no text available" guard before the pipeline runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    pub id: Uuid,
    pub source: NoteSource,
    pub title: Option<String>,
    pub body: String,
    pub content_hash: String,
    pub created_at: DateTime<Utc>,
}

impl Note {
    pub fn new(source: NoteSource, body: impl Into<String>) -> crate::Result<Self> {
        let body = body.into();
        if body.trim().is_empty() {
            return Err(crate::Error::EmptyInput);
        }

        Ok(Self {
            id: Uuid::now_v7(),
            source,
            title: None,
            content_hash: content_hash(&body),
            body,
            created_at: Utc::now(),
        })
    }

    pub fn typed(body: impl Into<String>) -> crate::Result<Self> {
        Self::new(NoteSource::Typed, body)
    }

    pub fn ocr(body: impl Into<String>) -> crate::Result<Self> {
        Self::new(NoteSource::Ocr, body)
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

fn content_hash(content: &str) -> String {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    let mut hasher = DefaultHasher::new();
    content.hash(&mut hasher);
    format!("{:016x}", hasher.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_note() {
        let note = Note::typed("Machine learning notes").unwrap();

        assert_eq!(note.source, NoteSource::Typed);
        assert_eq!(note.body, "Machine learning notes");
        assert!(note.title.is_none());
    }

    #[test]
    fn test_blank_body_rejected() {
        let err = Note::typed("   \n\t ").unwrap_err();

        assert!(matches!(err, crate::Error::EmptyInput));
        assert_eq!(err.to_string(), "no text available");
    }

    #[test]
    fn test_with_title() {
        let note = Note::ocr("scanned page").unwrap().with_title("Lecture 3");

        assert_eq!(note.source, NoteSource::Ocr);
        assert_eq!(note.title.as_deref(), Some("Lecture 3"));
    }

    #[test]
    fn test_content_hash() {
        let hash1 = content_hash("hello");
        let hash2 = content_hash("hello");
        let hash3 = content_hash("world");

        assert_eq!(hash1, hash2);
        assert_ne!(hash1, hash3);
        assert_eq!(hash1.len(), 16);
    }

    #[test]
    fn test_source_round_trip() {
        for source in [NoteSource::Typed, NoteSource::Ocr, NoteSource::File] {
            assert_eq!(source.as_str().parse::<NoteSource>().unwrap(), source);
        }
        assert!("camera".parse::<NoteSource>().is_err());
    }
}
