//! Wire types and payload decoding for the chat-completions endpoint.
//!
//! Request bodies are assembled with [`serde_json::json!`] in the client;
//! responses are deserialized into the typed structs here and then decoded
//! into domain values. Decoding is strict: a response that does not carry
//! the expected structured payload is rejected rather than patched up.

use serde::Deserialize;
use taleboard_core::storyboard::{validate_scenes, Scene, SCENE_COUNT_MAX, SCENE_COUNT_MIN};

use crate::error::{ExtractionError, SynthesisError};

// ---------------------------------------------------------------------------
// Prompts
// ---------------------------------------------------------------------------

/// Build the system prompt that fixes the extraction policy.
pub fn extraction_system_prompt() -> String {
    format!(
        "You are a storyboard expert for children's stories. Extract {SCENE_COUNT_MIN}-{SCENE_COUNT_MAX} \
         key visual scenes from the story that would make a great storyboard. For each scene, \
         provide a detailed visual description suitable for image generation."
    )
}

/// Build the user prompt wrapping the raw story text.
pub fn extraction_user_prompt(story: &str) -> String {
    format!("Extract key scenes from this children's story and describe them visually:\n\n{story}")
}

/// Embed a scene description into the fixed illustration style template.
///
/// The template keeps visual tone consistent across scenes that are
/// generated independently and out of order.
pub fn illustration_prompt(description: &str) -> String {
    format!(
        "Create a colorful, child-friendly illustration for a children's storybook: {description}. \
         Style: vibrant, warm, illustrated children's book art."
    )
}

/// JSON schema for the `extract_scenes` function tool, as a
/// [`serde_json::Value`] ready to embed in the request body.
pub fn extract_scenes_tool() -> serde_json::Value {
    serde_json::json!({
        "type": "function",
        "function": {
            "name": "extract_scenes",
            "description": "Extract key visual scenes from a children's story",
            "parameters": {
                "type": "object",
                "properties": {
                    "scenes": {
                        "type": "array",
                        "items": {
                            "type": "object",
                            "properties": {
                                "description": {
                                    "type": "string",
                                    "description": "Detailed visual description for image generation, including characters, setting, mood, and action"
                                },
                                "sequence": {
                                    "type": "number",
                                    "description": "Scene number in sequence"
                                }
                            },
                            "required": ["description", "sequence"]
                        }
                    }
                },
                "required": ["scenes"]
            }
        }
    })
}

// ---------------------------------------------------------------------------
// Response wire types
// ---------------------------------------------------------------------------

/// Top-level chat-completions response. Only the fields the decoders need.
#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

/// One completion choice.
#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

/// Message body of a choice. Tool calls are present on structured text
/// responses, images on image-model responses; both default to empty.
#[derive(Debug, Default, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub tool_calls: Vec<ToolCall>,
    #[serde(default)]
    pub images: Vec<GeneratedImage>,
}

/// A function-style tool call returned by the model.
#[derive(Debug, Deserialize)]
pub struct ToolCall {
    pub function: FunctionCall,
}

/// The function payload of a tool call. `arguments` is a JSON-encoded
/// string, per the chat-completions wire format.
#[derive(Debug, Deserialize)]
pub struct FunctionCall {
    pub arguments: String,
}

/// One generated image entry of an image-model response.
#[derive(Debug, Deserialize)]
pub struct GeneratedImage {
    pub image_url: ImageUrl,
}

/// URL wrapper around a generated image reference.
#[derive(Debug, Deserialize)]
pub struct ImageUrl {
    pub url: String,
}

/// Decoded `arguments` payload of the `extract_scenes` tool call.
#[derive(Debug, Deserialize)]
struct ScenePayload {
    scenes: Vec<Scene>,
}

// ---------------------------------------------------------------------------
// Decoders
// ---------------------------------------------------------------------------

/// Decode the scene list from an extraction response.
///
/// Takes the first tool call of the first choice, parses its `arguments`
/// string, and validates the scenes against the domain invariants. Rejects
/// responses with no tool call ([`ExtractionError::MissingToolCall`]) and
/// structurally valid but empty lists ([`ExtractionError::NoScenes`]).
pub fn scenes_from_response(
    response: ChatCompletionResponse,
) -> Result<Vec<Scene>, ExtractionError> {
    let tool_call = response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.tool_calls.into_iter().next())
        .ok_or(ExtractionError::MissingToolCall)?;

    let payload: ScenePayload = serde_json::from_str(&tool_call.function.arguments)
        .map_err(|e| ExtractionError::Malformed(e.to_string()))?;

    validate_scenes(&payload.scenes).map_err(|e| ExtractionError::Malformed(e.to_string()))?;

    if payload.scenes.is_empty() {
        return Err(ExtractionError::NoScenes);
    }

    Ok(payload.scenes)
}

/// Decode a single image reference from a synthesis response.
///
/// Exactly one reference is taken, from the first image of the first
/// choice; any other shape is a failure, not a partial success.
pub fn image_url_from_response(
    response: ChatCompletionResponse,
) -> Result<String, SynthesisError> {
    let url = response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.images.into_iter().next())
        .map(|image| image.image_url.url)
        .filter(|url| !url.is_empty())
        .ok_or(SynthesisError::MissingImage)?;

    Ok(url)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
