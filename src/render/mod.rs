//! Rendering Module
//!
//! Turns fetched properties and UI state into HTML pages. Formatting lives in
//! `format`, view models in `views`, askama page structs in `pages`.

pub mod format;
pub mod pages;
pub mod views;

pub use format::{format_clp, format_uf, PRICE_ON_REQUEST};
pub use pages::{
    detail_page, home_page, listing_page, render, DetailPage, HomePage, ListingPage,
    EMPTY_FEATURED, EMPTY_LISTING,
};
pub use views::{CardView, CarouselView, GalleryView};
