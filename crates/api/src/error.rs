use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use taleboard_core::error::CoreError;
use taleboard_gateway::ExtractionError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`ExtractionError`] for
/// pipeline failures. Implements [`IntoResponse`] to produce consistent
/// JSON error responses. Per-scene synthesis failures never appear here --
/// they are absorbed inside the pipeline.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `taleboard_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Scene extraction failed; the whole request is aborted.
    #[error(transparent)]
    Extraction(#[from] ExtractionError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            // --- Extraction errors ---
            AppError::Extraction(err) => classify_extraction_error(err),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify an extraction error into an HTTP status, error code, and message.
///
/// A missing gateway credential is a configuration problem of this
/// deployment, not of the upstream call, so it gets its own code; every
/// other extraction failure aborts the request as `EXTRACTION_FAILED`.
/// Both surface as 500 to the caller.
fn classify_extraction_error(err: &ExtractionError) -> (StatusCode, &'static str, String) {
    match err {
        ExtractionError::MissingCredential => {
            tracing::error!("Gateway credential missing, cannot serve generation requests");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "CONFIGURATION_ERROR",
                err.to_string(),
            )
        }
        other => {
            tracing::error!(error = %other, "Scene extraction failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "EXTRACTION_FAILED",
                other.to_string(),
            )
        }
    }
}
