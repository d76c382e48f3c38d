use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("no text available")]
    EmptyInput,

    #[error("invalid note source: {0}")]
    InvalidNoteSource(String),

    #[error("render error: {0}")]
    Render(#[from] crate::render::RenderError),
}

pub type Result<T> = std::result::Result<T, Error>;
