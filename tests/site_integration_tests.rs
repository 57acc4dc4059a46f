//! Integration Tests for the Site
//!
//! Runs the router against a stub content API served on a loopback port and
//! checks rendered pages, caching and failure degradation end to end.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    extract::{Path, Query, State},
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use propinvest::{create_router, AppState, Config};
use serde_json::{json, Value};
use tower::ServiceExt;

// == Stub Content API ==

#[derive(Clone, Default)]
struct Upstream {
    /// Requests received by the property endpoint
    hits: Arc<AtomicUsize>,
    /// When set, every endpoint answers 500
    failing: Arc<AtomicBool>,
}

fn records() -> Vec<Value> {
    vec![
        json!({
            "id": 1, "Titulo": "Casa Vitacura", "Slug": "casa-vitacura",
            "Objetivo": "Venta", "Tipo": "Casa", "Precio": 25000,
            "Ubicacion": "Vitacura", "Dormitorios": 4, "Banos": 3, "Superficie": 320,
            "Destacado": true, "Publicado": true,
            "Imagenes": [{"url": "/uploads/casa_1.jpg"}, {"url": "/uploads/casa_2.jpg"}]
        }),
        json!({
            "id": 2, "Titulo": "Casa La Dehesa", "Slug": "casa-la-dehesa",
            "Objetivo": "Venta", "Tipo": "Casa", "Precio": 31000,
            "Destacado": false, "Publicado": true
        }),
        json!({
            "id": 3, "Titulo": "Depto Providencia", "Slug": "depto-providencia",
            "Objetivo": "Arriendo", "Tipo": "Departamento", "Precio": 35,
            "Destacado": true, "Publicado": true, "Oportunidades": true
        }),
        json!({"id": 4, "Titulo": "Registro sin slug", "Objetivo": "Venta"}),
    ]
}

async fn propiedads(
    State(upstream): State<Upstream>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    upstream.hits.fetch_add(1, Ordering::SeqCst);
    if upstream.failing.load(Ordering::SeqCst) {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }

    let slug = params.get("filters[Slug][$eq]");
    let featured_only = params.contains_key("filters[Destacado][$eq]");

    let data: Vec<Value> = records()
        .into_iter()
        .filter(|r| slug.map_or(true, |s| r["Slug"] == json!(s)))
        .filter(|r| !featured_only || r["Destacado"] == json!(true))
        .collect();

    Json(json!({ "data": data, "meta": {} })).into_response()
}

async fn propiedad(Path(id): Path<u64>) -> Response {
    let data = records()
        .into_iter()
        .find(|r| r["id"] == json!(id))
        .unwrap_or(Value::Null);
    Json(json!({ "data": data, "meta": {} })).into_response()
}

async fn uf(State(upstream): State<Upstream>) -> Response {
    if upstream.failing.load(Ordering::SeqCst) {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    Json(json!({
        "serie": [{"fecha": "2026-10-19T03:00:00.000Z", "valor": 40000.0}]
    }))
    .into_response()
}

async fn spawn_upstream(upstream: Upstream) -> String {
    let app = Router::new()
        .route("/api/propiedads", get(propiedads))
        .route("/api/propiedads/:id", get(propiedad))
        .route("/uf", get(uf))
        .with_state(upstream);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

// == Helper Functions ==

async fn create_test_app(cache_ttl: u64) -> (Router, AppState, Upstream) {
    let upstream = Upstream::default();
    let base = spawn_upstream(upstream.clone()).await;

    let config = Config {
        api_base_url: format!("{}/api", base),
        image_base_url: base.clone(),
        rate_api_url: format!("{}/uf", base),
        cache_ttl,
        ..Config::default()
    };
    let state = AppState::from_config(config).unwrap();
    (create_router(state.clone()), state, upstream)
}

async fn get_page(app: &Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn get_json(app: &Router, method: &str, uri: &str) -> Value {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// == Listing Pages ==

#[tokio::test]
async fn test_listing_page_renders_valid_records() {
    let (app, _, _) = create_test_app(300).await;

    let (status, body) = get_page(&app, "/propiedades").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Casa Vitacura"));
    assert!(body.contains("Depto Providencia"));
    assert!(body.contains("UF 25.000"));
    assert!(!body.contains("Registro sin slug"));
}

#[tokio::test]
async fn test_category_pages_filter() {
    let (app, _, _) = create_test_app(300).await;

    let (_, body) = get_page(&app, "/propiedades/en-arriendo").await;
    assert!(body.contains("Depto Providencia"));
    assert!(!body.contains("Casa Vitacura"));

    let (_, body) = get_page(&app, "/propiedades/oportunidades").await;
    assert!(body.contains("Depto Providencia"));
    assert!(!body.contains("Casa La Dehesa"));
}

#[tokio::test]
async fn test_unknown_category_is_not_found() {
    let (app, _, upstream) = create_test_app(300).await;

    for uri in ["/propiedades/en-ventana", "/propiedades/remates"] {
        let (status, _) = get_page(&app, uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{}", uri);
    }
    assert_eq!(upstream.hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_repeated_requests_hit_the_cache() {
    let (app, _, upstream) = create_test_app(300).await;

    get_page(&app, "/propiedades").await;
    get_page(&app, "/propiedades/en-venta").await;
    get_page(&app, "/propiedades").await;

    assert_eq!(upstream.hits.load(Ordering::SeqCst), 1);

    let stats = get_json(&app, "GET", "/stats").await;
    assert_eq!(stats["api_calls"], 2, "one listing call and one rate call");
    assert!(stats["hits"].as_u64().unwrap() >= 4);
}

#[tokio::test]
async fn test_expired_entries_are_refetched() {
    let (app, _, upstream) = create_test_app(1).await;

    get_page(&app, "/propiedades").await;
    tokio::time::sleep(Duration::from_millis(1100)).await;
    get_page(&app, "/propiedades").await;

    assert_eq!(upstream.hits.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_upstream_failure_degrades_and_is_not_cached() {
    let (app, state, upstream) = create_test_app(300).await;
    upstream.failing.store(true, Ordering::SeqCst);

    let (status, body) = get_page(&app, "/propiedades").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("No hay propiedades disponibles en este momento."));
    // Ticker falls back to the default rate
    assert!(body.contains("$35.000"));
    assert!(state.cache.read().await.is_empty());

    upstream.failing.store(false, Ordering::SeqCst);
    let (_, body) = get_page(&app, "/propiedades").await;
    assert!(body.contains("Casa Vitacura"));
    assert_eq!(upstream.hits.load(Ordering::SeqCst), 2);
}

// == Home Page ==

#[tokio::test]
async fn test_home_page_featured_carousels() {
    let (app, _, upstream) = create_test_app(300).await;

    let (status, body) = get_page(&app, "/?ancho=800").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Destacadas en Venta"));
    assert!(body.contains("Casa Vitacura"));
    assert!(body.contains("Depto Providencia"));
    assert!(!body.contains("Casa La Dehesa"));
    assert!(body.contains("data-autoplay=\"5000\""));
    assert!(body.contains("casa_1.jpg?format=medium"));
    assert!(body.contains("$40.000"));
    assert_eq!(upstream.hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_home_page_without_featured() {
    let (app, _, upstream) = create_test_app(300).await;
    upstream.failing.store(true, Ordering::SeqCst);

    let (status, body) = get_page(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("No hay propiedades destacadas disponibles en este momento."));
}

// == Detail Page ==

#[tokio::test]
async fn test_detail_page() {
    let (app, _, _) = create_test_app(300).await;

    let (status, body) = get_page(&app, "/propiedad/casa-vitacura?imagen=1&zoom=true").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Casa Vitacura | PropInvest"));
    assert!(body.contains("UF 25.000"));
    assert!(body.contains("CLP $1.000.000.000"));
    assert!(body.contains("casa_2.jpg?format=large"));
    assert!(body.contains("lightbox-modal"));
    assert!(body.contains("Propiedades Similares"));
    assert!(body.contains("casa-la-dehesa"));
    assert!(body.contains("56912345678"));
}

#[tokio::test]
async fn test_unknown_slug_is_not_found() {
    let (app, _, _) = create_test_app(300).await;

    let (status, body) = get_page(&app, "/propiedad/no-existe").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("404"));
}

// == Content Client ==

#[tokio::test]
async fn test_content_client_lookups() {
    let (_, state, _) = create_test_app(300).await;

    let casa = state.content.property_by_id(1).await.unwrap();
    assert_eq!(casa.slug, "casa-vitacura");
    assert!(casa.images[0].ends_with("/uploads/casa_1.jpg?format=large"));
    assert!(casa.first_image().ends_with("/uploads/casa_1.jpg?format=medium"));
    assert!(state.content.property_by_id(99).await.is_none());

    let rent = state.content.featured(propinvest::models::Purpose::Rent).await;
    let slugs: Vec<&str> = rent.iter().map(|p| p.slug.as_str()).collect();
    assert_eq!(slugs, vec!["depto-providencia"]);
}

// == JSON Endpoints ==

#[tokio::test]
async fn test_clear_cache_forces_refetch() {
    let (app, _, upstream) = create_test_app(300).await;

    get_page(&app, "/propiedades").await;
    let cleared = get_json(&app, "DELETE", "/cache").await;
    assert_eq!(cleared["removed"], 2);

    get_page(&app, "/propiedades").await;
    assert_eq!(upstream.hits.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_health_endpoint() {
    let (app, _, _) = create_test_app(300).await;

    let json = get_json(&app, "GET", "/health").await;
    assert_eq!(json["status"], "healthy");
}
