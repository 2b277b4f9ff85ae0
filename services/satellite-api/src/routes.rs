//! Router construction.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Extension, Router,
};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::handlers;
use crate::state::AppState;

/// Build the application router with all routes and middleware.
///
/// CORS is fully open; this service is only run in development setups.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::root::root_handler))
        // Data endpoints
        .route("/api/ndvi", post(handlers::ndvi::ndvi_handler))
        .route(
            "/api/historical-ndvi",
            get(handlers::historical::historical_ndvi_handler),
        )
        .route(
            "/api/satellite-imagery",
            get(handlers::imagery::satellite_imagery_handler),
        )
        // Health and metrics
        .route("/health", get(handlers::health::health_handler))
        .route("/metrics", get(handlers::health::metrics_handler))
        // Middleware
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
}
