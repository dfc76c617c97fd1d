use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use taleboard_api::config::ServerConfig;
use taleboard_api::router::build_app_router;
use taleboard_api::state::AppState;
use taleboard_core::storyboard::Scene;
use taleboard_gateway::{ExtractionError, SynthesisError};
use taleboard_pipeline::{ImageSynthesizer, SceneExtractor, StoryboardPipeline};

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses the wildcard CORS origin (matching the production default) and a
/// 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["*".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers, wiring the
/// pipeline to the given mock extractor and synthesizer.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses.
pub fn build_test_app(
    extractor: Arc<dyn SceneExtractor>,
    synthesizer: Arc<dyn ImageSynthesizer>,
) -> Router {
    let config = test_config();

    let state = AppState {
        config: Arc::new(config.clone()),
        pipeline: Arc::new(StoryboardPipeline::new(extractor, synthesizer)),
    };

    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Mock upstreams
// ---------------------------------------------------------------------------

/// Mock extractor returning a fixed outcome, counting calls.
pub struct MockExtractor {
    /// `Ok` scene list, or `None` to fail with an upstream API error.
    scenes: Option<Vec<Scene>>,
    /// Number of `extract` invocations, shared with the test body.
    pub calls: Arc<AtomicUsize>,
}

impl MockExtractor {
    pub fn returning(scenes: Vec<Scene>) -> Arc<Self> {
        Arc::new(Self {
            scenes: Some(scenes),
            calls: Arc::new(AtomicUsize::new(0)),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            scenes: None,
            calls: Arc::new(AtomicUsize::new(0)),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SceneExtractor for MockExtractor {
    async fn extract(&self, _story: &str) -> Result<Vec<Scene>, ExtractionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.scenes {
            Some(scenes) => Ok(scenes.clone()),
            None => Err(ExtractionError::Api {
                status: 502,
                body: "upstream unavailable".into(),
            }),
        }
    }
}

/// Mock synthesizer that fails for a configured set of descriptions and
/// otherwise returns a deterministic URL, counting calls.
pub struct MockSynthesizer {
    fail_for: HashSet<String>,
    pub calls: Arc<AtomicUsize>,
}

impl MockSynthesizer {
    pub fn succeeding() -> Arc<Self> {
        Self::failing_for(&[])
    }

    pub fn failing_for(descriptions: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            fail_for: descriptions.iter().map(|s| s.to_string()).collect(),
            calls: Arc::new(AtomicUsize::new(0)),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ImageSynthesizer for MockSynthesizer {
    async fn synthesize(&self, description: &str) -> Result<String, SynthesisError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_for.contains(description) {
            return Err(SynthesisError::MissingImage);
        }
        Ok(format!("https://cdn.example/{}.png", description.len()))
    }
}

/// Convenience: a scene literal.
pub fn scene(sequence: u32, description: &str) -> Scene {
    Scene {
        sequence,
        description: description.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Issue a GET request against the app.
pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Issue a POST request with a JSON body against the app.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
