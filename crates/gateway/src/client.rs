//! REST client for the AI gateway chat-completions endpoint.
//!
//! One client serves both generation stages. Scene extraction forces a
//! function-style tool call so the response is structured; image synthesis
//! requests image output from the image-capable model. Both calls carry the
//! bearer credential from [`GatewayConfig`].

use taleboard_core::storyboard::Scene;

use crate::api;
use crate::config::GatewayConfig;
use crate::error::{ExtractionError, SynthesisError};

/// HTTP client for the AI gateway.
pub struct GatewayClient {
    client: reqwest::Client,
    config: GatewayConfig,
}

impl GatewayClient {
    /// Create a new client from explicit configuration.
    pub fn new(config: GatewayConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`]
    /// (useful for connection pooling).
    pub fn with_client(client: reqwest::Client, config: GatewayConfig) -> Self {
        Self { client, config }
    }

    /// Extract an ordered scene list from raw story text.
    ///
    /// Sends one `POST /v1/chat/completions` request with the extraction
    /// prompts and a forced `extract_scenes` tool choice, then decodes the
    /// structured payload. A response without the expected payload fails;
    /// free text is never recovered into scenes.
    pub async fn extract_scenes(&self, story: &str) -> Result<Vec<Scene>, ExtractionError> {
        let key = self
            .config
            .api_key
            .as_deref()
            .ok_or(ExtractionError::MissingCredential)?;

        let body = serde_json::json!({
            "model": self.config.text_model,
            "messages": [
                { "role": "system", "content": api::extraction_system_prompt() },
                { "role": "user", "content": api::extraction_user_prompt(story) },
            ],
            "tools": [api::extract_scenes_tool()],
            "tool_choice": { "type": "function", "function": { "name": "extract_scenes" } },
        });

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = read_body(response).await;
            tracing::error!(status = status.as_u16(), %body, "Scene extraction error");
            return Err(ExtractionError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: api::ChatCompletionResponse = response.json().await?;
        api::scenes_from_response(parsed)
    }

    /// Generate one illustration for a scene description.
    ///
    /// Sends one `POST /v1/chat/completions` request to the image model with
    /// the description embedded in the fixed style template, and returns the
    /// URL of the first generated image.
    pub async fn generate_image(&self, description: &str) -> Result<String, SynthesisError> {
        let key = self
            .config
            .api_key
            .as_deref()
            .ok_or(SynthesisError::MissingCredential)?;

        let body = serde_json::json!({
            "model": self.config.image_model,
            "messages": [
                { "role": "user", "content": api::illustration_prompt(description) },
            ],
            "modalities": ["image", "text"],
        });

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = read_body(response).await;
            tracing::error!(status = status.as_u16(), %body, "Image generation error");
            return Err(SynthesisError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: api::ChatCompletionResponse = response.json().await?;
        api::image_url_from_response(parsed)
    }

    fn completions_url(&self) -> String {
        format!("{}/v1/chat/completions", self.config.base_url)
    }
}

/// Read an error response body for diagnostics, tolerating read failures.
async fn read_body(response: reqwest::Response) -> String {
    response
        .text()
        .await
        .unwrap_or_else(|_| "<unreadable body>".to_string())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
