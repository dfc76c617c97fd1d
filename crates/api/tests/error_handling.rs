//! Tests for `AppError` → HTTP response mapping.
//!
//! These tests verify that each `AppError` variant produces the correct HTTP
//! status code, error code, and message. They do NOT need an HTTP server --
//! they call `IntoResponse` directly on `AppError` values.

use axum::response::IntoResponse;
use http_body_util::BodyExt;
use taleboard_api::error::AppError;
use taleboard_core::error::CoreError;
use taleboard_gateway::ExtractionError;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (axum::http::StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

// ---------------------------------------------------------------------------
// Test: CoreError::Validation maps to 400 with VALIDATION_ERROR code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn validation_error_returns_400() {
    let err = AppError::Core(CoreError::Validation("Story text is required".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "Story text is required");
}

// ---------------------------------------------------------------------------
// Test: missing gateway credential maps to 500 with CONFIGURATION_ERROR code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_credential_returns_500_configuration_error() {
    let err = AppError::Extraction(ExtractionError::MissingCredential);

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "CONFIGURATION_ERROR");
    assert_eq!(json["error"], "AI_GATEWAY_API_KEY is not configured");
}

// ---------------------------------------------------------------------------
// Test: upstream extraction failures map to 500 with EXTRACTION_FAILED code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn upstream_extraction_error_returns_500() {
    let err = AppError::Extraction(ExtractionError::Api {
        status: 429,
        body: "rate limited".into(),
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "EXTRACTION_FAILED");
    assert_eq!(json["error"], "Scene extraction failed (429): rate limited");
}

#[tokio::test]
async fn missing_tool_call_returns_500() {
    let err = AppError::Extraction(ExtractionError::MissingToolCall);

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "EXTRACTION_FAILED");
    assert_eq!(json["error"], "No scenes extracted from story");
}

#[tokio::test]
async fn zero_scenes_returns_500() {
    let err = AppError::Extraction(ExtractionError::NoScenes);

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "EXTRACTION_FAILED");
    assert_eq!(json["error"], "Extraction returned zero scenes");
}

// ---------------------------------------------------------------------------
// Test: CoreError::Internal maps to 500 and sanitizes the message
// ---------------------------------------------------------------------------

#[tokio::test]
async fn internal_error_returns_500_and_sanitizes_message() {
    let err = AppError::Core(CoreError::Internal("secret gateway token leaked".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");

    // The response body must NOT contain the original error details.
    let body_text = json.to_string();
    assert!(
        !body_text.contains("secret"),
        "Internal error response must not leak sensitive details"
    );
    assert_eq!(json["error"], "An internal error occurred");
}
