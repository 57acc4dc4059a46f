//! PropInvest - presentation layer for a real-estate listing site
//!
//! Fetches properties from a headless CMS through a TTL-cached client,
//! filters them locally and renders the home, listing and detail pages.

pub mod api;
pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod listing;
pub mod models;
pub mod render;
pub mod tasks;
pub mod ui;

pub use api::{create_router, AppState};
pub use config::Config;
pub use error::{Result, SiteError};
pub use tasks::spawn_cleanup_task;
