//! API Module
//!
//! HTTP handlers and routing for the rendered site.
//!
//! # Endpoints
//! - `GET /` - Home page
//! - `GET /propiedades[/:categoria]` - Listing pages
//! - `GET /propiedad/:slug` - Detail page
//! - `GET /assets/*` - Static files
//! - `GET /stats` - Fetch cache statistics
//! - `DELETE /cache` - Clear the fetch cache
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
