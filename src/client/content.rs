//! Content API Client
//!
//! Typed access to the property collection of the headless CMS. List
//! operations degrade to empty results and lookups to `None`; failures are
//! logged, never propagated to the page.

use serde::Serialize;
use serde_json::Value;
use tracing::{error, warn};

use crate::client::{Fetcher, RequestOptions};
use crate::config::Config;
use crate::error::Result;
use crate::listing;
use crate::models::{Property, PropertyRecord, Purpose};

// == Endpoints ==
pub const PROPERTIES_ENDPOINT: &str = "/propiedads";
pub const PUBLISHED_ENDPOINT: &str = "/propiedads?filters[Publicado][$eq]=true";
pub const FEATURED_ENDPOINT: &str =
    "/propiedads?filters[Destacado][$eq]=true&filters[Publicado][$eq]=true";
pub const BY_SLUG_ENDPOINT: &str = "/propiedads?filters[Slug][$eq]=";

/// Featured properties split by purpose.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FeaturedSet {
    pub sale: Vec<Property>,
    pub rent: Vec<Property>,
}

/// Client for the property collection.
#[derive(Debug, Clone)]
pub struct ContentClient {
    fetcher: Fetcher,
    base_url: String,
    image_base_url: String,
}

impl ContentClient {
    pub fn new(
        fetcher: Fetcher,
        base_url: impl Into<String>,
        image_base_url: impl Into<String>,
    ) -> Self {
        Self {
            fetcher,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            image_base_url: image_base_url.into(),
        }
    }

    pub fn from_config(config: &Config, fetcher: Fetcher) -> Self {
        Self::new(fetcher, &config.api_base_url, &config.image_base_url)
    }

    pub fn fetcher(&self) -> &Fetcher {
        &self.fetcher
    }

    // == Raw Fetch ==
    /// GETs `endpoint` relative to the API base, through the cache.
    pub async fn fetch_api(&self, endpoint: &str, options: &RequestOptions) -> Result<Value> {
        let url = format!("{}{}", self.base_url, endpoint);
        self.fetcher.get_json(&url, options).await
    }

    async fn fetch_list(&self, endpoint: &str) -> Result<Vec<Property>> {
        let body = self.fetch_api(endpoint, &RequestOptions::default()).await?;
        Ok(decode_list(body, &self.image_base_url))
    }

    // == Listings ==
    /// All published properties.
    pub async fn properties(&self) -> Vec<Property> {
        self.fetch_list(PUBLISHED_ENDPOINT)
            .await
            .unwrap_or_else(|e| {
                error!("Failed to load properties: {}", e);
                Vec::new()
            })
    }

    /// Featured properties offered for `purpose`.
    pub async fn featured(&self, purpose: Purpose) -> Vec<Property> {
        match self.fetch_list(FEATURED_ENDPOINT).await {
            Ok(found) => listing::featured(&found, purpose)
                .into_iter()
                .cloned()
                .collect(),
            Err(e) => {
                error!("Failed to load featured {} properties: {}", purpose, e);
                Vec::new()
            }
        }
    }

    /// Featured properties for sale and for rent from a single request.
    pub async fn all_featured(&self) -> FeaturedSet {
        match self.fetch_list(FEATURED_ENDPOINT).await {
            Ok(found) => FeaturedSet {
                sale: listing::featured(&found, Purpose::Sale)
                    .into_iter()
                    .cloned()
                    .collect(),
                rent: listing::featured(&found, Purpose::Rent)
                    .into_iter()
                    .cloned()
                    .collect(),
            },
            Err(e) => {
                error!("Failed to load featured properties: {}", e);
                FeaturedSet::default()
            }
        }
    }

    // == Lookups ==
    pub async fn property_by_slug(&self, slug: &str) -> Option<Property> {
        let endpoint = format!("{}{}", BY_SLUG_ENDPOINT, urlencoding::encode(slug));
        match self.fetch_list(&endpoint).await {
            Ok(found) => found.into_iter().next(),
            Err(e) => {
                error!("Failed to load property '{}': {}", slug, e);
                None
            }
        }
    }

    pub async fn property_by_id(&self, id: u64) -> Option<Property> {
        let endpoint = format!("{}/{}", PROPERTIES_ENDPOINT, id);
        let body = match self.fetch_api(&endpoint, &RequestOptions::default()).await {
            Ok(body) => body,
            Err(e) => {
                error!("Failed to load property {}: {}", id, e);
                return None;
            }
        };

        let data = body.get("data").cloned().unwrap_or(Value::Null);
        if data.is_null() {
            return None;
        }
        decode_record(data, &self.image_base_url)
    }

    // == Cache ==
    /// Drops every memoized response. Returns how many were dropped.
    pub async fn clear_cache(&self) -> usize {
        let mut cache = self.fetcher.cache().write().await;
        let removed = cache.len();
        cache.clear();
        removed
    }
}

/// Decodes the `data` array of a list response, skipping invalid records.
pub fn decode_list(body: Value, image_base_url: &str) -> Vec<Property> {
    match body {
        Value::Object(mut map) => match map.remove("data") {
            Some(Value::Array(items)) => items
                .into_iter()
                .filter_map(|item| decode_record(item, image_base_url))
                .collect(),
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}

fn decode_record(item: Value, image_base_url: &str) -> Option<Property> {
    let record: PropertyRecord = match serde_json::from_value(item) {
        Ok(record) => record,
        Err(e) => {
            warn!("Skipping undecodable property record: {}", e);
            return None;
        }
    };

    match Property::from_record(record, image_base_url) {
        Ok(property) => Some(property),
        Err(e) => {
            warn!("Skipping property: {}", e);
            None
        }
    }
}
