//! Error types for the two gateway calls.
//!
//! Extraction failures abort the whole storyboard request; synthesis
//! failures are scoped to a single scene and absorbed by the pipeline.

/// Errors from the structured scene-extraction call.
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    /// No bearer credential is configured for the gateway.
    #[error("AI_GATEWAY_API_KEY is not configured")]
    MissingCredential,

    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("Scene extraction request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The gateway returned a non-2xx status code.
    #[error("Scene extraction failed ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The response carried no structured tool-call payload. Free-text
    /// content is never recovered into scenes.
    #[error("No scenes extracted from story")]
    MissingToolCall,

    /// The tool-call arguments did not parse, or the decoded scenes violate
    /// the domain invariants (sequence >= 1, unique, non-empty description).
    #[error("Malformed scene payload: {0}")]
    Malformed(String),

    /// The structured payload parsed but contained zero scenes.
    #[error("Extraction returned zero scenes")]
    NoScenes,
}

/// Errors from a single image-synthesis call.
#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    /// No bearer credential is configured for the gateway.
    #[error("AI_GATEWAY_API_KEY is not configured")]
    MissingCredential,

    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("Image generation request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The gateway returned a non-2xx status code.
    #[error("Image generation failed ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The response contained no image payload in its first choice.
    #[error("Response contained no generated image")]
    MissingImage,
}
