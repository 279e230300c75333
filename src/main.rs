//! Storefront Service - Main Application Entry Point
//!
//! REST API server for clients, products, sellers and the transactions
//! between them, with a single approval step for transactions.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Storage**: PostgreSQL with sqlx, or in-memory maps
//! - **Format**: JSON requests/responses
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Create database connection pool and run migrations (postgres backend)
//! 3. Hand the repositories to the services
//! 4. Build HTTP router with routes and middleware
//! 5. Start server on configured port

use storefront_server::{
    AppState, app,
    config::{Config, StorageBackend},
    db,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Reads RUST_LOG, defaulting to "info"
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env()?;
    tracing::info!("Configuration loaded ({:?} storage)", config.storage_backend);

    let state = match (config.storage_backend, config.database_url.as_deref()) {
        (StorageBackend::Postgres, Some(database_url)) => {
            let pool = db::create_pool(database_url, config.database_max_connections).await?;
            tracing::info!("Database pool created");

            db::run_migrations(&pool).await?;
            tracing::info!("Database migrations complete");

            AppState::postgres(pool)
        }
        (StorageBackend::Postgres, None) => {
            // Config::from_env already rejects this combination
            anyhow::bail!("DATABASE_URL is required for the postgres backend")
        }
        (StorageBackend::Memory, _) => {
            tracing::warn!("Using in-memory storage; records are lost on shutdown");
            AppState::in_memory()
        }
    };

    let router = app(state);

    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
