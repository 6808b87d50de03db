use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use bp_core::GeneratedPost;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use crate::{ApiError, AppState};

pub const ROOT_MESSAGE: &str = "Server is running! Use POST requests to generate blog posts.";

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub topic: String,
}

pub async fn root() -> Json<Value> {
    Json(json!({ "message": ROOT_MESSAGE }))
}

/// Serves both `POST /` and `POST /generate-post`.
pub async fn generate_post(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GeneratedPost>, ApiError> {
    let Json(request) = payload?;
    tracing::info!(topic = %request.topic, "Generating post");

    let post = state.generator.generate_post(&request.topic).await?;
    Ok(Json(post))
}
