/// AI gateway configuration loaded from environment variables.
///
/// The API key is optional at startup so the server can come up without
/// one; every generation request then fails with a configuration error
/// until the key is provided.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Base URL of the gateway (no trailing slash).
    pub base_url: String,
    /// Bearer credential for the gateway. `None` when unset.
    pub api_key: Option<String>,
    /// Model used for structured scene extraction.
    pub text_model: String,
    /// Image-capable model used for per-scene illustration.
    pub image_model: String,
}

impl GatewayConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var              | Default                           |
    /// |----------------------|-----------------------------------|
    /// | `AI_GATEWAY_URL`     | `https://ai.gateway.lovable.dev`  |
    /// | `AI_GATEWAY_API_KEY` | unset                             |
    /// | `TEXT_MODEL`         | `google/gemini-2.5-flash`         |
    /// | `IMAGE_MODEL`        | `google/gemini-2.5-flash-image`   |
    pub fn from_env() -> Self {
        let base_url = std::env::var("AI_GATEWAY_URL")
            .unwrap_or_else(|_| "https://ai.gateway.lovable.dev".into())
            .trim_end_matches('/')
            .to_string();

        let api_key = std::env::var("AI_GATEWAY_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty());

        let text_model =
            std::env::var("TEXT_MODEL").unwrap_or_else(|_| "google/gemini-2.5-flash".into());

        let image_model = std::env::var("IMAGE_MODEL")
            .unwrap_or_else(|_| "google/gemini-2.5-flash-image".into());

        Self {
            base_url,
            api_key,
            text_model,
            image_model,
        }
    }
}
