//! Handler for the `/generate-storyboard` endpoint.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use taleboard_core::story::validate_story;
use taleboard_core::storyboard::Storyboard;

use crate::error::AppResult;
use crate::state::AppState;

/// Request body: the raw story text.
#[derive(Debug, Deserialize)]
pub struct GenerateStoryboardRequest {
    /// Free-text children's story. Absent or blank is rejected with 400
    /// before any upstream call.
    #[serde(default)]
    pub story: Option<String>,
}

/// Response body: the assembled storyboard, possibly empty when every
/// scene's synthesis failed.
#[derive(Debug, Serialize)]
pub struct GenerateStoryboardResponse {
    pub storyboard: Storyboard,
}

/// POST /api/v1/generate-storyboard
///
/// Validates the story text, then runs the two-stage pipeline. Extraction
/// failures surface as 500; scenes whose synthesis failed are silently
/// absent from the returned storyboard.
pub async fn generate(
    State(state): State<AppState>,
    Json(input): Json<GenerateStoryboardRequest>,
) -> AppResult<Json<GenerateStoryboardResponse>> {
    let story = input.story.unwrap_or_default();
    validate_story(&story)?;

    let storyboard = state.pipeline.build(&story).await?;

    Ok(Json(GenerateStoryboardResponse { storyboard }))
}
