use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::error::AppError;

/// API-specific error wrapper that converts AppError into HTTP responses.
///
/// All failures surface as structured JSON bodies; nothing propagates to the
/// HTTP layer as an unhandled fault.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(message) => {
                let body = serde_json::json!({
                    "success": false,
                    "message": message,
                });
                (StatusCode::NOT_FOUND, axum::Json(body)).into_response()
            }
            AppError::Store(detail) | AppError::Internal(detail) => {
                tracing::error!("Error deleting blog post: {detail}");
                let body = serde_json::json!({
                    "success": false,
                    "message": "Internal server error while deleting blog post",
                    "error": detail,
                });
                (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
            }
        }
    }
}
