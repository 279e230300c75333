//! Transaction HTTP handlers.
//!
//! This module implements transaction-related API endpoints:
//! - POST /api/v1/transactions - Record a transaction
//! - GET /api/v1/transactions - List transactions
//! - GET /api/v1/transactions/{id} - Get transaction details
//! - POST /api/v1/transactions/{id}/approve - Approve a transaction
//!
//! Transactions cannot be edited or deleted through the API.

use crate::{
    error::AppError,
    models::{TransactionDetails, TransactionResponse},
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};

/// Record a transaction.
///
/// # Request Body
///
/// ```json
/// {
///   "client_id": 1,
///   "product_id": 1,
///   "seller_id": 1,
///   "quantity": 1,
///   "date": "2024-06-11T12:00:00",
///   "approved": false
/// }
/// ```
///
/// # Response (201)
///
/// ```json
/// {
///   "id": 1,
///   "client_id": 1,
///   "product_id": 1,
///   "seller_id": 1,
///   "quantity": 1,
///   "date": "2024-06-11T12:00:00",
///   "approved": false,
///   "status": "pending"
/// }
/// ```
///
/// `date` and `approved` may be omitted. The referenced client, product and
/// seller are not looked up.
pub async fn create_transaction(
    State(state): State<AppState>,
    payload: Result<Json<TransactionDetails>, JsonRejection>,
) -> Result<(StatusCode, Json<TransactionResponse>), AppError> {
    let Json(request) = payload?;
    tracing::info!("Received request to create transaction");

    let transaction = state.transactions.create(request).await?;
    tracing::info!("Transaction {} created", transaction.id);

    Ok((StatusCode::CREATED, Json(transaction.into())))
}

pub async fn list_transactions(
    State(state): State<AppState>,
) -> Result<Json<Vec<TransactionResponse>>, AppError> {
    let transactions = state.transactions.get_all().await?;

    Ok(Json(transactions.into_iter().map(Into::into).collect()))
}

/// Get transaction by ID.
pub async fn get_transaction(
    State(state): State<AppState>,
    Path(transaction_id): Path<i64>,
) -> Result<Json<TransactionResponse>, AppError> {
    let transaction = state
        .transactions
        .get_by_id(transaction_id)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Transaction with id {} not found", transaction_id);
            AppError::not_found("Transaction", transaction_id)
        })?;

    Ok(Json(transaction.into()))
}

/// Approve a transaction.
///
/// # Endpoint
///
/// `POST /api/v1/transactions/{id}/approve`
///
/// Approving an already-approved transaction succeeds and changes nothing.
///
/// # Response
///
/// - **Success (200 OK)**: Returns the transaction with `"approved": true`
/// - **Error (404)**: No transaction with this id
pub async fn approve_transaction(
    State(state): State<AppState>,
    Path(transaction_id): Path<i64>,
) -> Result<Json<TransactionResponse>, AppError> {
    tracing::info!(
        "Received request to approve transaction with id: {}",
        transaction_id
    );

    let transaction = state.transactions.approve(transaction_id).await?;
    tracing::info!("Transaction {} approved", transaction.id);

    Ok(Json(transaction.into()))
}
