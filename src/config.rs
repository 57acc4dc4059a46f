//! Configuration Module
//!
//! Handles loading and managing site configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::cache::DEFAULT_TTL_SECS;

/// Site configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the content API, including the `/api` prefix
    pub api_base_url: String,
    /// Origin that relative image URLs are resolved against
    pub image_base_url: String,
    /// UF exchange-rate endpoint
    pub rate_api_url: String,
    /// CLP per UF used when the rate service is unreachable
    pub default_uf_rate: f64,
    /// Fetch cache TTL in seconds
    pub cache_ttl: u64,
    /// Background cache sweep interval in seconds
    pub cleanup_interval: u64,
    /// Upstream request timeout in seconds
    pub request_timeout: u64,
    /// HTTP server port
    pub server_port: u16,
    /// Directory served under `/assets`
    pub assets_dir: String,
    /// WhatsApp number used for the contact link
    pub whatsapp_number: String,
    /// Carousel auto-advance interval in milliseconds
    pub carousel_interval_ms: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CONTENT_API_URL` - Content API base URL
    /// - `CONTENT_IMAGE_URL` - Image origin for relative URLs
    /// - `UF_RATE_URL` - Exchange-rate endpoint
    /// - `DEFAULT_UF_RATE` - Fallback rate (default: 35000)
    /// - `CACHE_TTL` - Fetch cache TTL in seconds (default: 300)
    /// - `CLEANUP_INTERVAL` - Cache sweep frequency in seconds (default: 60)
    /// - `REQUEST_TIMEOUT` - Upstream timeout in seconds (default: 10)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `ASSETS_DIR` - Static assets directory (default: public/assets)
    /// - `WHATSAPP_NUMBER` - Contact number (default: 56912345678)
    /// - `CAROUSEL_INTERVAL_MS` - Autoplay interval (default: 5000)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: env_string("CONTENT_API_URL", defaults.api_base_url),
            image_base_url: env_string("CONTENT_IMAGE_URL", defaults.image_base_url),
            rate_api_url: env_string("UF_RATE_URL", defaults.rate_api_url),
            default_uf_rate: env_parse("DEFAULT_UF_RATE", defaults.default_uf_rate),
            cache_ttl: env_parse("CACHE_TTL", defaults.cache_ttl),
            cleanup_interval: env_parse("CLEANUP_INTERVAL", defaults.cleanup_interval),
            request_timeout: env_parse("REQUEST_TIMEOUT", defaults.request_timeout),
            server_port: env_parse("SERVER_PORT", defaults.server_port),
            assets_dir: env_string("ASSETS_DIR", defaults.assets_dir),
            whatsapp_number: env_string("WHATSAPP_NUMBER", defaults.whatsapp_number),
            carousel_interval_ms: env_parse("CAROUSEL_INTERVAL_MS", defaults.carousel_interval_ms),
        }
    }

    /// Fetch cache TTL as a Duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl)
    }

    /// Upstream request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "https://truthful-rhythm-e8bcafa766.strapiapp.com/api".to_string(),
            image_base_url: "https://truthful-rhythm-e8bcafa766.strapiapp.com".to_string(),
            rate_api_url: "https://mindicador.cl/api/uf".to_string(),
            default_uf_rate: 35_000.0,
            cache_ttl: DEFAULT_TTL_SECS,
            cleanup_interval: 60,
            request_timeout: 10,
            server_port: 3000,
            assets_dir: "public/assets".to_string(),
            whatsapp_number: "56912345678".to_string(),
            carousel_interval_ms: 5000,
        }
    }
}

fn env_string(name: &str, default: String) -> String {
    env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or(default)
}

fn env_parse<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
