use axum::{
    extract::State,
    http::StatusCode,
    response::Html,
    routing::post,
    Json, Router,
};
use mindloom_core::{
    render, ExtractStats, Extraction, ExtractionPipeline, MindMap, MindNode, RankedPhrase,
    TopicTier,
};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(generate))
        .route("/html", post(generate_html))
}

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub text: String,
    pub max_nodes: Option<usize>,
    /// Replaces the detected topic when present
    pub topic: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub main_topic: String,
    pub topic_tier: TopicTier,
    pub keywords: Vec<RankedPhrase>,
    pub nodes: Vec<MindNode>,
    pub edges: Vec<(usize, usize)>,
    pub stats: ExtractStats,
}

fn run_pipeline(
    state: &AppState,
    req: &GenerateRequest,
) -> Result<(Extraction, MindMap), (StatusCode, String)> {
    if req.text.trim().is_empty() {
        return Err((StatusCode::BAD_REQUEST, "no text available".to_string()));
    }

    let pipeline =
        ExtractionPipeline::new().with_max_nodes(state.config.clamp_nodes(req.max_nodes));
    let mut extraction = pipeline.extract(&req.text);

    if let Some(topic) = &req.topic {
        extraction.main_topic = topic.clone();
    }

    let map = MindMap::from_extraction(&extraction);
    Ok((extraction, map))
}

async fn generate(
    State(state): State<AppState>,
    Json(req): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, (StatusCode, String)> {
    let (extraction, map) = run_pipeline(&state, &req)?;

    Ok(Json(GenerateResponse {
        main_topic: extraction.main_topic,
        topic_tier: extraction.tier,
        keywords: extraction.keywords,
        nodes: map.nodes().into_iter().cloned().collect(),
        edges: map.edges(),
        stats: extraction.stats,
    }))
}

async fn generate_html(
    State(state): State<AppState>,
    Json(req): Json<GenerateRequest>,
) -> Result<Html<String>, (StatusCode, String)> {
    let (_, map) = run_pipeline(&state, &req)?;

    let page = render::to_html(&map)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(Html(page))
}
