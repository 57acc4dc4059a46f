//! Site Routes
//!
//! Configures the Axum router with the page routes, static assets and the
//! JSON maintenance endpoints.

use axum::{
    routing::{delete, get},
    Router,
};
use tower_http::{services::ServeDir, trace::TraceLayer};

use super::handlers::{
    clear_cache_handler, detail_handler, health_handler, home_handler, listing_handler,
    not_found_handler, stats_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /` - Home page with featured carousels
/// - `GET /propiedades` - All published properties
/// - `GET /propiedades/:categoria` - Sale, rent or opportunity listing
/// - `GET /propiedad/:slug` - Property detail page
/// - `GET /assets/*` - Static files
/// - `GET /health` - Health check
/// - `GET /stats` - Fetch cache statistics
/// - `DELETE /cache` - Clear the fetch cache
///
/// # Middleware
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    let assets = ServeDir::new(&state.config.assets_dir);

    Router::new()
        .route("/", get(home_handler))
        .route("/propiedades", get(listing_handler))
        .route("/propiedades/:categoria", get(listing_handler))
        .route("/propiedad/:slug", get(detail_handler))
        .route("/health", get(health_handler))
        .route("/stats", get(stats_handler))
        .route("/cache", delete(clear_cache_handler))
        .nest_service("/assets", assets)
        .fallback(not_found_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
