//! Cached Fetcher
//!
//! Every upstream GET goes through here: look the request signature up in the
//! shared [`FetchCache`], otherwise call the network and memoize a successful
//! JSON body. Failures leave the cache untouched.

use std::collections::BTreeMap;
use std::sync::Arc;

use reqwest::header::ACCEPT;
use serde::Serialize;
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::cache::{request_key, FetchCache};
use crate::config::Config;
use crate::error::{Result, SiteError};

/// Per-request options. They are part of the cache signature.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RequestOptions {
    pub headers: BTreeMap<String, String>,
}

impl RequestOptions {
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

/// HTTP client plus the shared response cache.
#[derive(Debug, Clone)]
pub struct Fetcher {
    http: reqwest::Client,
    cache: Arc<RwLock<FetchCache>>,
}

impl Fetcher {
    pub fn new(http: reqwest::Client, cache: Arc<RwLock<FetchCache>>) -> Self {
        Self { http, cache }
    }

    /// Builds the HTTP client with the configured timeout.
    pub fn from_config(config: &Config, cache: Arc<RwLock<FetchCache>>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;
        Ok(Self::new(http, cache))
    }

    /// The cache shared by every client built on this fetcher.
    pub fn cache(&self) -> &Arc<RwLock<FetchCache>> {
        &self.cache
    }

    /// GETs `url` as JSON, answering from the cache when possible.
    pub async fn get_json(&self, url: &str, options: &RequestOptions) -> Result<Value> {
        let key = request_key(url, options);

        {
            let mut cache = self.cache.write().await;
            if let Some(value) = cache.get(&key) {
                debug!("Cache hit for {}", url);
                return Ok(value);
            }
            cache.record_api_call();
        }

        info!("Calling API: {}", url);
        let mut request = self.http.get(url).header(ACCEPT, "application/json");
        for (name, value) in &options.headers {
            request = request.header(name.as_str(), value.as_str());
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SiteError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let value: Value = serde_json::from_slice(&body)?;

        self.cache.write().await.put(key, value.clone());
        debug!("Stored response for {}", url);
        Ok(value)
    }
}
