//! # Stagebook API
//!
//! HTTP surface of the venue/artist/show directory.
//!
//! - **Routes**: endpoint paths per entity
//! - **Handlers**: open a store scope, call into `stagebook_core`, return JSON
//! - **Middleware**: error-to-response mapping
//! - **Config**: environment configuration
//!
//! Reads borrow a pooled connection; writes run in a transaction that is
//! committed only when the command succeeds. An error returned with `?` drops
//! the transaction, which rolls it back.

/// Configuration module for API settings
pub mod config;
/// Request handlers
pub mod handlers;
/// Error mapping for handlers
pub mod middleware;
/// Route definitions
pub mod routes;

use std::{sync::Arc, time::Duration};

use axum::{
    error_handling::HandleErrorLayer,
    http::{header, HeaderValue, Method, StatusCode},
    BoxError, Router,
};
use eyre::Result;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers
pub struct ApiState {
    /// PostgreSQL connection pool for database operations
    pub db_pool: PgPool,
}

/// Builds the router with every endpoint and the shared state attached.
pub fn router(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        .merge(routes::venue::routes())
        .merge(routes::artist::routes())
        .merge(routes::show::routes())
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allow_origin(allowed)
        .allow_credentials(true)
}

/// Starts the API server with the provided configuration and database pool
pub async fn start_server(config: config::ApiConfig, db_pool: PgPool) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let state = Arc::new(ApiState { db_pool });
    let app = router(state).layer(TraceLayer::new_for_http());

    // Apply CORS configuration if origins are specified
    let app = match &config.cors_origins {
        Some(origins) => app.layer(cors_layer(origins)),
        None => app,
    };

    // Add request timeout middleware
    let app = app.layer(
        ServiceBuilder::new()
            .layer(HandleErrorLayer::new(|_: BoxError| async {
                StatusCode::REQUEST_TIMEOUT
            }))
            .timeout(Duration::from_secs(config.request_timeout)),
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
