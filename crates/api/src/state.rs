use std::sync::Arc;

use taleboard_pipeline::StoryboardPipeline;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Storyboard generation pipeline (extraction + per-scene synthesis).
    pub pipeline: Arc<StoryboardPipeline>,
}
