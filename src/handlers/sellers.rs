//! Seller HTTP handlers, mirroring the client endpoints under /api/v1/sellers.

use crate::{
    error::AppError,
    handlers::require_name,
    models::{Seller, SellerDetails},
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};

pub async fn create_seller(
    State(state): State<AppState>,
    payload: Result<Json<SellerDetails>, JsonRejection>,
) -> Result<(StatusCode, Json<Seller>), AppError> {
    let Json(request) = payload?;
    tracing::info!("Received request to create seller");
    require_name(&request.name)?;

    let seller = state.sellers.create(request).await?;
    tracing::info!("Seller {} created", seller.id);

    Ok((StatusCode::CREATED, Json(seller)))
}

pub async fn list_sellers(State(state): State<AppState>) -> Result<Json<Vec<Seller>>, AppError> {
    Ok(Json(state.sellers.get_all().await?))
}

pub async fn get_seller(
    State(state): State<AppState>,
    Path(seller_id): Path<i64>,
) -> Result<Json<Seller>, AppError> {
    let seller = state.sellers.get_by_id(seller_id).await?.ok_or_else(|| {
        tracing::warn!("Seller with id {} not found", seller_id);
        AppError::not_found("Seller", seller_id)
    })?;

    Ok(Json(seller))
}

pub async fn update_seller(
    State(state): State<AppState>,
    Path(seller_id): Path<i64>,
    payload: Result<Json<SellerDetails>, JsonRejection>,
) -> Result<Json<Seller>, AppError> {
    let Json(request) = payload?;
    tracing::info!("Received request to update seller with id: {}", seller_id);
    require_name(&request.name)?;

    Ok(Json(state.sellers.update(seller_id, request).await?))
}

pub async fn delete_seller(
    State(state): State<AppState>,
    Path(seller_id): Path<i64>,
) -> Result<StatusCode, AppError> {
    tracing::info!("Received request to delete seller with id: {}", seller_id);
    state.sellers.delete(seller_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
