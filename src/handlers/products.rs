//! Product HTTP handlers.
//!
//! - POST /api/v1/products
//! - GET /api/v1/products
//! - GET /api/v1/products/{id}
//! - PUT /api/v1/products/{id}
//! - DELETE /api/v1/products/{id}

use crate::{
    error::AppError,
    handlers::require_name,
    models::{Product, ProductDetails},
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};

/// Create a new product.
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Product 1",
///   "price": 10.0,
///   "stock": 100
/// }
/// ```
///
/// Only the name is checked. Price and stock are stored as sent.
pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<ProductDetails>, JsonRejection>,
) -> Result<(StatusCode, Json<Product>), AppError> {
    let Json(request) = payload?;
    tracing::info!("Received request to create product");
    require_name(&request.name)?;

    let product = state.products.create(request).await?;
    tracing::info!("Product {} created", product.id);

    Ok((StatusCode::CREATED, Json(product)))
}

pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<Product>>, AppError> {
    Ok(Json(state.products.get_all().await?))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(product_id): Path<i64>,
) -> Result<Json<Product>, AppError> {
    let product = state.products.get_by_id(product_id).await?.ok_or_else(|| {
        tracing::warn!("Product with id {} not found", product_id);
        AppError::not_found("Product", product_id)
    })?;

    Ok(Json(product))
}

/// Replace a product's name, price and stock.
///
/// # Response
///
/// - **Success (200 OK)**: Returns the updated product
/// - **Error (400)**: Blank name
/// - **Error (404)**: No product with this id
pub async fn update_product(
    State(state): State<AppState>,
    Path(product_id): Path<i64>,
    payload: Result<Json<ProductDetails>, JsonRejection>,
) -> Result<Json<Product>, AppError> {
    let Json(request) = payload?;
    tracing::info!("Received request to update product with id: {}", product_id);
    require_name(&request.name)?;

    let product = state.products.update(product_id, request).await?;
    Ok(Json(product))
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(product_id): Path<i64>,
) -> Result<StatusCode, AppError> {
    tracing::info!("Received request to delete product with id: {}", product_id);
    state.products.delete(product_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
