//! Client management HTTP handlers.
//!
//! This module implements the client-related API endpoints:
//! - POST /api/v1/clients - Create new client
//! - GET /api/v1/clients - List all clients
//! - GET /api/v1/clients/{id} - Get client by ID
//! - PUT /api/v1/clients/{id} - Replace name and email
//! - DELETE /api/v1/clients/{id} - Delete client

use crate::{
    error::AppError,
    handlers::require_name,
    models::{Client, ClientDetails},
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};

/// Create a new client.
///
/// # Request Body
///
/// ```json
/// {
///   "name": "John Doe",
///   "email": "john.doe@example.com"
/// }
/// ```
///
/// # Response
///
/// - **Success (201 Created)**: Returns the created client with its id
/// - **Error (400)**: Blank name
pub async fn create_client(
    State(state): State<AppState>,
    payload: Result<Json<ClientDetails>, JsonRejection>,
) -> Result<(StatusCode, Json<Client>), AppError> {
    let Json(request) = payload?;
    tracing::info!("Received request to create client");
    require_name(&request.name)?;

    let client = state.clients.create(request).await?;
    tracing::info!("Client {} created", client.id);

    Ok((StatusCode::CREATED, Json(client)))
}

/// List all clients, in storage order.
pub async fn list_clients(State(state): State<AppState>) -> Result<Json<Vec<Client>>, AppError> {
    let clients = state.clients.get_all().await?;
    Ok(Json(clients))
}

/// Get a specific client by ID.
///
/// # Response
///
/// - **Success (200 OK)**: Returns client details
/// - **Error (404)**: No client with this id
pub async fn get_client(
    State(state): State<AppState>,
    Path(client_id): Path<i64>,
) -> Result<Json<Client>, AppError> {
    let client = state.clients.get_by_id(client_id).await?.ok_or_else(|| {
        tracing::warn!("Client with id {} not found", client_id);
        AppError::not_found("Client", client_id)
    })?;

    Ok(Json(client))
}

/// Replace a client's name and email.
///
/// # Response
///
/// - **Success (200 OK)**: Returns the updated client
/// - **Error (400)**: Blank name
/// - **Error (404)**: No client with this id
pub async fn update_client(
    State(state): State<AppState>,
    Path(client_id): Path<i64>,
    payload: Result<Json<ClientDetails>, JsonRejection>,
) -> Result<Json<Client>, AppError> {
    let Json(request) = payload?;
    tracing::info!("Received request to update client with id: {}", client_id);
    require_name(&request.name)?;

    let client = state.clients.update(client_id, request).await?;
    Ok(Json(client))
}

/// Delete a client.
///
/// Returns 204 No Content on success, 404 if the id is unknown.
pub async fn delete_client(
    State(state): State<AppState>,
    Path(client_id): Path<i64>,
) -> Result<StatusCode, AppError> {
    tracing::info!("Received request to delete client with id: {}", client_id);
    state.clients.delete(client_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
