use axum::{extract::State, routing::get, Json, Router};

use crate::config::ServerConfig;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(get_config))
}

async fn get_config(State(state): State<AppState>) -> Json<ServerConfig> {
    Json(state.config)
}
