use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
/// Request input is never rejected by the listing, so the only failure a
/// handler reports is the data store.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The database could not be reached or a query against it failed.
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(#[from] sqlx::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::StorageUnavailable(err) => {
                tracing::error!(error = %err, "Storage unavailable");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "STORAGE_UNAVAILABLE",
                    "The data store is unavailable",
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
