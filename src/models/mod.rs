//! Data models
//!
//! Wire records from the upstream APIs, the validated `Property` snapshot,
//! and the DTOs used by the presentation host's own endpoints.

pub mod property;
pub mod rate;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use property::{
    resolve_image_url, ImageRecord, ImageSize, Property, PropertyRecord, Purpose, SpecRow,
    PLACEHOLDER_IMAGE,
};
pub use rate::{IndicatorPoint, IndicatorResponse, RateQuote};
pub use requests::{DetailQuery, HomeQuery};
pub use responses::{ClearCacheResponse, HealthResponse, StatsResponse};
