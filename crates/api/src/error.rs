use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tpx_core::error::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for ingestion failures and adds HTTP-specific variants.
/// Implements [`IntoResponse`] so every failure still gets a JSON body that
/// cannot be mistaken for an acknowledgment.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// An ingestion failure from the engine.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::UnknownInstrument(_) => {
                    (StatusCode::BAD_REQUEST, "UNKNOWN_INSTRUMENT", core.to_string())
                }
                CoreError::UnknownCategory(_) => {
                    (StatusCode::BAD_REQUEST, "UNKNOWN_CATEGORY", core.to_string())
                }
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::UpdateFailed(msg) => {
                    tracing::error!(error = %msg, "Status update failed");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "UPDATE_FAILED",
                        "The status update could not be recorded".to_string(),
                    )
                }
            },

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
