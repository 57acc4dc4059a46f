//! Query-string DTOs for the page routes
//!
//! Page navigation state travels in the URL: carousel positions and viewport
//! width on the home page, the selected image and lightbox on detail pages.

use serde::Deserialize;

/// Query for `GET /`
///
/// # Fields
/// - `venta`: index of the featured-for-sale carousel
/// - `arriendo`: index of the featured-for-rent carousel
/// - `ancho`: viewport width in pixels, drives items per page
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HomeQuery {
    pub venta: Option<usize>,
    pub arriendo: Option<usize>,
    pub ancho: Option<u32>,
}

/// Query for `GET /propiedad/:slug`
///
/// # Fields
/// - `imagen`: selected gallery image
/// - `zoom`: whether the lightbox is open on the selected image
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DetailQuery {
    pub imagen: Option<usize>,
    #[serde(default)]
    pub zoom: bool,
}
