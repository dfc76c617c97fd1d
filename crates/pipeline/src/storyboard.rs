//! Storyboard orchestration: extract scenes, fan out image synthesis,
//! collect the successes.
//!
//! The extractor and synthesizer sit behind trait objects so the pipeline
//! can be exercised against mocks; production wires in [`GatewayClient`]
//! for both seams.

use std::sync::Arc;

use async_trait::async_trait;
use taleboard_core::storyboard::{IllustratedScene, Scene, Storyboard};
use taleboard_gateway::{ExtractionError, GatewayClient, SynthesisError};

// ---------------------------------------------------------------------------
// Trait seams
// ---------------------------------------------------------------------------

/// Extracts an ordered scene list from raw story text.
#[async_trait]
pub trait SceneExtractor: Send + Sync {
    async fn extract(&self, story: &str) -> Result<Vec<Scene>, ExtractionError>;
}

/// Generates one illustration for a scene description, returning an image
/// reference.
#[async_trait]
pub trait ImageSynthesizer: Send + Sync {
    async fn synthesize(&self, description: &str) -> Result<String, SynthesisError>;
}

#[async_trait]
impl SceneExtractor for GatewayClient {
    async fn extract(&self, story: &str) -> Result<Vec<Scene>, ExtractionError> {
        self.extract_scenes(story).await
    }
}

#[async_trait]
impl ImageSynthesizer for GatewayClient {
    async fn synthesize(&self, description: &str) -> Result<String, SynthesisError> {
        self.generate_image(description).await
    }
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

/// Per-request storyboard builder.
///
/// Stateless between requests; each [`build`](Self::build) call runs one
/// linear pipeline with an internal per-scene fan-out. No retries, no
/// backoff, no cancellation once started.
pub struct StoryboardPipeline {
    extractor: Arc<dyn SceneExtractor>,
    synthesizer: Arc<dyn ImageSynthesizer>,
}

impl StoryboardPipeline {
    /// Build a pipeline from explicit extractor and synthesizer seams.
    pub fn new(extractor: Arc<dyn SceneExtractor>, synthesizer: Arc<dyn ImageSynthesizer>) -> Self {
        Self {
            extractor,
            synthesizer,
        }
    }

    /// Wire both seams to a single shared gateway client.
    pub fn from_gateway(client: Arc<GatewayClient>) -> Self {
        Self::new(Arc::clone(&client) as Arc<dyn SceneExtractor>, client)
    }

    /// Assemble a storyboard for the given story text.
    ///
    /// Fails only on extraction (including an empty scene list). Synthesis
    /// runs concurrently across scenes; a failed scene is logged and
    /// dropped, and an all-failed fan-out still returns an empty storyboard
    /// as success. The caller distinguishes "no scenes extracted" (error)
    /// from "scenes extracted but no images produced" (empty success).
    pub async fn build(&self, story: &str) -> Result<Storyboard, ExtractionError> {
        tracing::info!("Extracting key scenes from story");
        let scenes = self.extractor.extract(story).await?;

        // Guard at the seam as well: a storyboard needs scenes to exist.
        if scenes.is_empty() {
            return Err(ExtractionError::NoScenes);
        }

        tracing::info!(scene_count = scenes.len(), "Extracted scenes, generating images");

        let syntheses = scenes.into_iter().map(|scene| {
            let synthesizer = Arc::clone(&self.synthesizer);
            async move {
                let result = synthesizer.synthesize(&scene.description).await;
                (scene, result)
            }
        });

        // join_all preserves extraction order, so the storyboard stays
        // ordered by the model-assigned sequence numbers.
        let results = futures::future::join_all(syntheses).await;

        let mut storyboard = Storyboard::new();
        for (scene, result) in results {
            match result {
                Ok(image_url) => {
                    tracing::debug!(sequence = scene.sequence, "Generated image for scene");
                    storyboard.push(IllustratedScene::new(scene, image_url));
                }
                Err(error) => {
                    tracing::warn!(
                        sequence = scene.sequence,
                        %error,
                        "Image synthesis failed, dropping scene"
                    );
                }
            }
        }

        tracing::info!(illustrated = storyboard.len(), "Assembled storyboard");
        Ok(storyboard)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
