//! Health check endpoint for service monitoring.

use crate::{error::AppError, state::AppState};
use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall service status
    pub status: String,

    /// Storage status: "connected" for PostgreSQL, "in-memory" otherwise
    pub storage: String,

    /// Current server timestamp
    pub timestamp: DateTime<Utc>,
}

/// Health check handler.
///
/// # Response (200 OK)
///
/// ```json
/// {
///   "status": "healthy",
///   "storage": "connected",
///   "timestamp": "2025-12-21T19:00:00Z"
/// }
/// ```
///
/// # Response (500 Internal Server Error)
///
/// If the database is unreachable, returns standard error response.
pub async fn health_check(State(state): State<AppState>) -> Result<Json<HealthResponse>, AppError> {
    let storage = match &state.pool {
        Some(pool) => {
            sqlx::query("SELECT 1").execute(pool).await?;
            "connected"
        }
        None => "in-memory",
    };

    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        storage: storage.to_string(),
        timestamp: Utc::now(),
    }))
}
