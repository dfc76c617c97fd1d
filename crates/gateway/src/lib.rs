//! HTTP client for the upstream AI gateway.
//!
//! Both generation stages talk to the same chat-completions endpoint: scene
//! extraction forces a structured function-call response from the text
//! model, image synthesis asks the image-capable model for a single
//! illustration. [`GatewayClient`] wraps the two calls over [`reqwest`].

pub mod api;
pub mod client;
pub mod config;
pub mod error;

pub use client::GatewayClient;
pub use config::GatewayConfig;
pub use error::{ExtractionError, SynthesisError};
