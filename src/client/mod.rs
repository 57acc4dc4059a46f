//! Upstream Clients
//!
//! Outbound HTTP: the content API and the exchange-rate service, both going
//! through one cached fetcher.

pub mod content;
pub mod fetcher;
pub mod rates;

pub use content::{ContentClient, FeaturedSet};
pub use fetcher::{Fetcher, RequestOptions};
pub use rates::RateClient;
