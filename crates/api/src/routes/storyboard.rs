//! Route definitions for storyboard generation.

use axum::routing::post;
use axum::Router;

use crate::handlers::storyboard;
use crate::state::AppState;

/// Routes mounted at the API root.
///
/// ```text
/// POST /generate-storyboard    storyboard::generate
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/generate-storyboard", post(storyboard::generate))
}
