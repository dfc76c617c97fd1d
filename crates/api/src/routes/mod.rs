pub mod health;
pub mod storyboard;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// POST /generate-storyboard    generate a storyboard from story text
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(storyboard::router())
}
