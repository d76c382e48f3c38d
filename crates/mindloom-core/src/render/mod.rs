mod dot;
mod html;

use thiserror::Error;

pub use dot::to_dot;
pub use html::to_html;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("serialize graph: {0}")]
    Json(#[from] serde_json::Error),
}

pub type RenderResult<T> = Result<T, RenderError>;
