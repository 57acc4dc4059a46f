//! Exchange-Rate Client
//!
//! Looks up today's UF value in CLP for display-only conversion.

use tracing::error;

use crate::client::{Fetcher, RequestOptions};
use crate::config::Config;
use crate::error::{Result, SiteError};
use crate::models::{IndicatorResponse, RateQuote};

#[derive(Debug, Clone)]
pub struct RateClient {
    fetcher: Fetcher,
    url: String,
    default_rate: f64,
}

impl RateClient {
    pub fn new(fetcher: Fetcher, url: impl Into<String>, default_rate: f64) -> Self {
        Self {
            fetcher,
            url: url.into(),
            default_rate,
        }
    }

    pub fn from_config(config: &Config, fetcher: Fetcher) -> Self {
        Self::new(fetcher, &config.rate_api_url, config.default_uf_rate)
    }

    /// Current UF rate, or the configured default if the service fails.
    pub async fn uf_rate(&self) -> RateQuote {
        match self.fetch_rate().await {
            Ok(quote) => quote,
            Err(e) => {
                error!("Failed to load UF rate, using {}: {}", self.default_rate, e);
                RateQuote::fallback(self.default_rate)
            }
        }
    }

    async fn fetch_rate(&self) -> Result<RateQuote> {
        let body = self
            .fetcher
            .get_json(&self.url, &RequestOptions::default())
            .await?;
        let response: IndicatorResponse = serde_json::from_value(body)?;

        let latest = response
            .serie
            .into_iter()
            .next()
            .ok_or_else(|| SiteError::Internal("indicator series is empty".to_string()))?;

        if !latest.valor.is_finite() || latest.valor <= 0.0 {
            return Err(SiteError::Internal(format!(
                "indicator value {} is not a rate",
                latest.valor
            )));
        }

        Ok(RateQuote::live(latest.valor, latest.fecha))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{request_key, FetchCache};
    use serde_json::json;
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::sync::RwLock;

    const URL: &str = "http://127.0.0.1:9/api/uf";

    async fn client_with_cached(body: serde_json::Value) -> RateClient {
        let cache = Arc::new(RwLock::new(FetchCache::new(Duration::from_secs(300))));
        cache
            .write()
            .await
            .put(request_key(URL, &RequestOptions::default()), body);
        RateClient::new(Fetcher::new(reqwest::Client::new(), cache), URL, 35_000.0)
    }

    #[tokio::test]
    async fn test_reads_latest_value() {
        let client = client_with_cached(json!({
            "serie": [{"fecha": "2026-10-19T03:00:00.000Z", "valor": 39612.45}]
        }))
        .await;

        let quote = client.uf_rate().await;
        assert_eq!(quote.value, 39612.45);
        assert!(!quote.fallback);
        assert!(quote.date.is_some());
    }

    #[tokio::test]
    async fn test_empty_series_falls_back() {
        let client = client_with_cached(json!({"serie": []})).await;

        let quote = client.uf_rate().await;
        assert_eq!(quote, RateQuote::fallback(35_000.0));
    }

    #[tokio::test]
    async fn test_unreachable_service_falls_back() {
        let cache = Arc::new(RwLock::new(FetchCache::new(Duration::from_secs(300))));
        let client = RateClient::new(Fetcher::new(reqwest::Client::new(), cache), URL, 36_000.0);

        let quote = client.uf_rate().await;
        assert!(quote.fallback);
        assert_eq!(quote.value, 36_000.0);
    }
}
