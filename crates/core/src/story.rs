//! Story input validation.
//!
//! A story is free-form text supplied by the caller. The only hard rule is
//! that it must contain something other than whitespace; the check runs at
//! the request boundary, before any upstream call is made.

use crate::error::CoreError;

/// Validate raw story text.
///
/// Rejects missing or whitespace-only input. The message matches what the
/// API surfaces to the caller on a 400.
pub fn validate_story(story: &str) -> Result<(), CoreError> {
    if story.trim().is_empty() {
        return Err(CoreError::Validation("Story text is required".to_string()));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
