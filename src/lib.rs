//! Storefront service library.
//!
//! Clients, products, sellers and transactions behind a JSON REST API. The
//! binary in `main.rs` only loads configuration, picks a storage backend and
//! serves the router built here.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod services;
pub mod state;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

pub use error::AppError;
pub use state::AppState;

/// Build the HTTP router with every route and the tracing layer.
pub fn app(state: AppState) -> Router {
    let api_routes = Router::new()
        .route(
            "/clients",
            post(handlers::clients::create_client).get(handlers::clients::list_clients),
        )
        .route(
            "/clients/{id}",
            get(handlers::clients::get_client)
                .put(handlers::clients::update_client)
                .delete(handlers::clients::delete_client),
        )
        .route(
            "/products",
            post(handlers::products::create_product).get(handlers::products::list_products),
        )
        .route(
            "/products/{id}",
            get(handlers::products::get_product)
                .put(handlers::products::update_product)
                .delete(handlers::products::delete_product),
        )
        .route(
            "/sellers",
            post(handlers::sellers::create_seller).get(handlers::sellers::list_sellers),
        )
        .route(
            "/sellers/{id}",
            get(handlers::sellers::get_seller)
                .put(handlers::sellers::update_seller)
                .delete(handlers::sellers::delete_seller),
        )
        .route(
            "/transactions",
            post(handlers::transactions::create_transaction)
                .get(handlers::transactions::list_transactions),
        )
        .route(
            "/transactions/{id}",
            get(handlers::transactions::get_transaction),
        )
        .route(
            "/transactions/{id}/approve",
            post(handlers::transactions::approve_transaction),
        );

    Router::new()
        .route("/health", get(handlers::health::health_check))
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
