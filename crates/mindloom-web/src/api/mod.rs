mod config;
mod mindmap;

use axum::Router;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .nest("/config", config::router())
        .nest("/mindmap", mindmap::router())
}
