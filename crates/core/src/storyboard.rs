//! Storyboard scene types, policy constants, and validation.
//!
//! A storyboard is an ordered set of scenes extracted from a story, each
//! paired with a generated illustration. Scenes arrive from the language
//! model as a structured payload; [`validate_scenes`] is the gate that
//! turns that payload into trusted domain values.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Scene count policy
// ---------------------------------------------------------------------------

/// Minimum number of scenes the extraction prompt asks for.
pub const SCENE_COUNT_MIN: usize = 4;

/// Maximum number of scenes the extraction prompt asks for.
pub const SCENE_COUNT_MAX: usize = 6;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// One extracted narrative beat: a model-assigned sequence number plus a
/// visual description rich enough to drive standalone image generation.
///
/// Deserialized directly from the gateway's structured tool-call payload.
/// Immutable once created; sequence numbers are taken as supplied by the
/// model, never re-derived locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    /// 1-based scene number, unique within a storyboard.
    pub sequence: u32,
    /// Visual description (characters, setting, mood, action).
    pub description: String,
}

/// A scene that was successfully paired with a generated image.
///
/// Only created when synthesis succeeds; a scene whose synthesis fails is
/// dropped, never represented with an empty image reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IllustratedScene {
    /// Sequence number carried over from the extracted scene.
    pub sequence: u32,
    /// Visual description carried over from the extracted scene.
    pub description: String,
    /// Opaque URL/URI reference to the generated image.
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

impl IllustratedScene {
    /// Pair an extracted scene with its generated image reference.
    pub fn new(scene: Scene, image_url: String) -> Self {
        Self {
            sequence: scene.sequence,
            description: scene.description,
            image_url,
        }
    }
}

/// Ordered sequence of illustrated scenes, in extraction order.
///
/// Sequence values are not necessarily contiguous after failed scenes are
/// dropped. Constructed fresh per request, never persisted.
pub type Storyboard = Vec<IllustratedScene>;

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a scene list decoded from the upstream structured payload.
///
/// Rules:
/// - every sequence number is >= 1
/// - sequence numbers are unique within the list
/// - every description is non-empty after trimming
///
/// An empty list is accepted here; the extraction layer treats it as its own
/// failure mode so the two cases stay distinguishable.
pub fn validate_scenes(scenes: &[Scene]) -> Result<(), CoreError> {
    let mut seen = std::collections::HashSet::new();

    for scene in scenes {
        if scene.sequence < 1 {
            return Err(CoreError::Validation(format!(
                "scene sequence must be >= 1, got {}",
                scene.sequence
            )));
        }
        if !seen.insert(scene.sequence) {
            return Err(CoreError::Validation(format!(
                "duplicate scene sequence {}",
                scene.sequence
            )));
        }
        if scene.description.trim().is_empty() {
            return Err(CoreError::Validation(format!(
                "scene {} has an empty description",
                scene.sequence
            )));
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn scene(sequence: u32, description: &str) -> Scene {
        Scene {
            sequence,
            description: description.to_string(),
        }
    }

    // -- validate_scenes -----------------------------------------------------

    #[test]
    fn accepts_ordered_scenes() {
        let scenes = vec![scene(1, "rabbit meets fox"), scene(2, "sharing a meal")];
        assert!(validate_scenes(&scenes).is_ok());
    }

    #[test]
    fn accepts_non_contiguous_sequences() {
        let scenes = vec![scene(1, "opening"), scene(3, "finale")];
        assert!(validate_scenes(&scenes).is_ok());
    }

    #[test]
    fn accepts_empty_list() {
        assert!(validate_scenes(&[]).is_ok());
    }

    #[test]
    fn rejects_zero_sequence() {
        let scenes = vec![scene(0, "a scene")];
        assert!(validate_scenes(&scenes).is_err());
    }

    #[test]
    fn rejects_duplicate_sequence() {
        let scenes = vec![scene(1, "first"), scene(1, "second")];
        assert!(validate_scenes(&scenes).is_err());
    }

    #[test]
    fn rejects_blank_description() {
        let scenes = vec![scene(1, "   ")];
        assert!(validate_scenes(&scenes).is_err());
    }

    // -- serialization -------------------------------------------------------

    #[test]
    fn illustrated_scene_serializes_image_url_as_camel_case() {
        let illustrated = IllustratedScene::new(scene(2, "sunset meal"), "https://img/2".into());
        let json = serde_json::to_value(&illustrated).unwrap();

        assert_eq!(json["sequence"], 2);
        assert_eq!(json["description"], "sunset meal");
        assert_eq!(json["imageUrl"], "https://img/2");
    }

    #[test]
    fn scene_deserializes_from_tool_call_shape() {
        let scene: Scene =
            serde_json::from_str(r#"{"sequence": 1, "description": "forest clearing"}"#).unwrap();
        assert_eq!(scene.sequence, 1);
        assert_eq!(scene.description, "forest clearing");
    }
}
