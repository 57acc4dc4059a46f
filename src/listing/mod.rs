//! Listing Module
//!
//! Local query logic over fetched listings: category filters, featured
//! selection and related properties.

mod filter;
mod related;

pub use filter::{featured, Category};
pub use related::{related, RELATED_LIMIT};
