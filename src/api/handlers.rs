//! Page and API Handlers
//!
//! Each page handler fetches what it needs through the clients in
//! [`AppState`], then hands plain data to the renderer. Upstream failures
//! have already been degraded by the clients, so list pages always render.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::Uri,
    response::Html,
    Json,
};
use tokio::sync::RwLock;

use crate::cache::FetchCache;
use crate::client::{ContentClient, Fetcher, RateClient};
use crate::config::Config;
use crate::error::{Result, SiteError};
use crate::listing::Category;
use crate::models::{ClearCacheResponse, DetailQuery, HealthResponse, HomeQuery, StatsResponse};
use crate::render::{detail_page, home_page, listing_page, render};

/// Application state shared across all handlers.
///
/// Both clients share one fetcher, and so one cache.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub content: ContentClient,
    pub rates: RateClient,
    /// Same cache the fetcher uses, for stats and the sweep task
    pub cache: Arc<RwLock<FetchCache>>,
}

impl AppState {
    /// Builds the clients around an existing fetcher.
    pub fn new(config: Config, fetcher: Fetcher) -> Self {
        let content = ContentClient::from_config(&config, fetcher.clone());
        let rates = RateClient::from_config(&config, fetcher.clone());
        Self {
            cache: fetcher.cache().clone(),
            config: Arc::new(config),
            content,
            rates,
        }
    }

    /// Creates the cache, the HTTP client and both API clients.
    pub fn from_config(config: Config) -> Result<Self> {
        let cache = Arc::new(RwLock::new(FetchCache::new(config.cache_ttl())));
        let fetcher = Fetcher::from_config(&config, cache)?;
        Ok(Self::new(config, fetcher))
    }
}

// == Pages ==

/// Handler for GET /
///
/// Featured carousels for sale and rent. Positions and viewport width come
/// from the query string.
pub async fn home_handler(
    State(state): State<AppState>,
    Query(query): Query<HomeQuery>,
) -> Result<Html<String>> {
    let (featured, quote) = tokio::join!(state.content.all_featured(), state.rates.uf_rate());

    let page = home_page(featured, &query, &quote, state.config.carousel_interval_ms);
    render(&page)
}

/// Handler for GET /propiedades and GET /propiedades/:categoria
///
/// The category is taken from the request path; an unknown category is a 404.
pub async fn listing_handler(State(state): State<AppState>, uri: Uri) -> Result<Html<String>> {
    let category = Category::from_path(uri.path())
        .ok_or_else(|| SiteError::NotFound(uri.path().to_string()))?;

    let (listing, quote) = tokio::join!(state.content.properties(), state.rates.uf_rate());

    let page = listing_page(category, &listing, &quote);
    render(&page)
}

/// Handler for GET /propiedad/:slug
///
/// Looks the property up first; the related picks need the full listing,
/// fetched alongside the exchange rate.
pub async fn detail_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<DetailQuery>,
) -> Result<Html<String>> {
    let property = state
        .content
        .property_by_slug(&slug)
        .await
        .ok_or_else(|| SiteError::NotFound(format!("property '{}'", slug)))?;

    let (listing, quote) = tokio::join!(state.content.properties(), state.rates.uf_rate());

    let page = detail_page(
        &property,
        &listing,
        &query,
        &quote,
        &state.config.whatsapp_number,
    );
    render(&page)
}

/// Fallback for any route the site does not serve.
pub async fn not_found_handler(uri: Uri) -> SiteError {
    SiteError::NotFound(uri.path().to_string())
}

// == JSON Endpoints ==

/// Handler for GET /stats
///
/// Returns fetch-cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.cache.read().await.stats();
    Json(StatsResponse::from(stats))
}

/// Handler for DELETE /cache
///
/// Drops every memoized upstream response.
pub async fn clear_cache_handler(State(state): State<AppState>) -> Json<ClearCacheResponse> {
    let removed = state.content.clear_cache().await;
    tracing::info!("Fetch cache cleared ({} responses)", removed);
    Json(ClearCacheResponse::new(removed))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
