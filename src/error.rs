//! Error types and HTTP error response handling.
//!
//! `AppError` is shared by repositories, services and handlers. Services never
//! swallow it; handlers turn it into a status code and a JSON body.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application-wide error type.
///
/// # Error Categories
///
/// - **Missing records**: an id that does not resolve to a stored entity
/// - **Rejected input**: payloads refused by the HTTP layer
/// - **Storage faults**: anything the persistence collaborator reports
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// An update, approval or delete targeted an id that is not stored.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    /// Request body or parameters are invalid.
    ///
    /// Returns HTTP 400 Bad Request.
    /// The String contains details about what was invalid.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// PostgreSQL operation failed (connection error, query error, ...).
    ///
    /// Returns HTTP 500 Internal Server Error without leaking details.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A non-SQL storage backend could not serve the request.
    ///
    /// Returns HTTP 503 Service Unavailable.
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

impl AppError {
    pub fn not_found(entity: &'static str, id: i64) -> Self {
        AppError::NotFound { entity, id }
    }
}

/// Bodies that are not valid JSON, lack the JSON content type, or miss
/// required fields never reach a service.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidRequest(rejection.body_text())
    }
}

/// Convert AppError into an HTTP response.
///
/// All errors return JSON in this format:
/// ```json
/// {
///   "error": {
///     "code": "error_type",
///     "message": "Human-readable error message"
///   }
/// }
/// ```
///
/// # Status Code Mapping
///
/// - `NotFound` → 404 Not Found
/// - `InvalidRequest` → 400 Bad Request
/// - `Database` → 500 Internal Server Error (hides details from client)
/// - `Unavailable` → 503 Service Unavailable
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::NotFound { .. } => (StatusCode::NOT_FOUND, "not_found", self.to_string()),
            AppError::InvalidRequest(ref msg) => {
                (StatusCode::BAD_REQUEST, "invalid_request", msg.clone())
            }
            AppError::Database(ref err) => {
                tracing::error!("Database error while serving request: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                )
            }
            AppError::Unavailable(_) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "storage_unavailable",
                self.to_string(),
            ),
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
