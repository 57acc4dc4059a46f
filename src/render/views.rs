//! View models
//!
//! Plain, pre-formatted values the templates print as-is. Everything here is
//! derived from a `Property`, a `RateQuote` or a UI state machine; templates
//! never format or branch on raw data.

use crate::models::{Property, Purpose, RateQuote, SpecRow};
use crate::render::format::{format_number, format_rate, format_rate_date, format_uf};
use crate::ui::{CarouselState, GalleryState};

pub const SITE_NAME: &str = "PropInvest";

// == Links ==

/// Detail page of a property.
pub fn property_href(slug: &str) -> String {
    format!("/propiedad/{}", urlencoding::encode(slug))
}

/// Prefilled WhatsApp chat about a property.
pub fn whatsapp_link(number: &str, title: &str) -> String {
    format!(
        "https://wa.me/{}?text=Hola,%20me%20interesa%20la%20propiedad%20{}%20que%20vi%20en%20su%20sitio%20web.",
        number,
        urlencoding::encode(title)
    )
}

/// Embeddable map centred on a free-text location.
pub fn map_embed_url(location: &str) -> String {
    format!(
        "https://www.google.com/maps?q={}&z=13&output=embed",
        urlencoding::encode(location)
    )
}

/// `"{title} | PropInvest"`
pub fn page_title(title: &str) -> String {
    format!("{} | {}", title, SITE_NAME)
}

/// Search-engine summary of a property.
pub fn meta_description(property: &Property) -> String {
    let place = property
        .location
        .as_deref()
        .or(property.region.as_deref())
        .unwrap_or_default();

    let mut features = Vec::new();
    if let Some(n) = property.bedrooms.filter(|n| *n > 0) {
        features.push(format!("{} dormitorios", n));
    }
    if let Some(n) = property.bathrooms.filter(|n| *n > 0) {
        features.push(format!("{} baños", n));
    }
    if let Some(area) = property.area.filter(|a| *a > 0.0) {
        features.push(format!("{} m²", area));
    }

    let mut out = format!("{} en {}.", property.title, place);
    if !features.is_empty() {
        out.push(' ');
        out.push_str(&features.join(" "));
        out.push('.');
    }
    out.push_str(" Vive la exclusividad con ");
    out.push_str(SITE_NAME);
    out.push('.');
    out
}

fn count_text(value: Option<u32>) -> String {
    value
        .filter(|n| *n > 0)
        .map(|n| n.to_string())
        .unwrap_or_default()
}

fn area_text(value: Option<f64>) -> String {
    value
        .filter(|a| *a > 0.0)
        .map(|a| format!("{} m²", format_number(a, 2)))
        .unwrap_or_default()
}

// == Card ==

/// One property card. Empty strings mean "don't show".
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub title: String,
    pub href: String,
    pub image: String,
    pub location: String,
    pub price: String,
    pub bedrooms: String,
    pub bathrooms: String,
    pub area: String,
    pub featured: bool,
    pub purpose: &'static str,
}

impl CardView {
    pub fn from_property(property: &Property) -> Self {
        Self {
            title: property.title.clone(),
            href: property_href(&property.slug),
            image: property.first_image().to_string(),
            location: property.location.clone().unwrap_or_default(),
            price: format_uf(property.price),
            bedrooms: count_text(property.bedrooms),
            bathrooms: count_text(property.bathrooms),
            area: area_text(property.area),
            featured: property.featured,
            purpose: property.purpose.label(),
        }
    }
}

// == Carousel ==

/// Carousel positions carried in the home page query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HomeLinks {
    pub sale: usize,
    pub rent: usize,
    pub width: Option<u32>,
}

impl HomeLinks {
    /// Home URL with the carousel for `purpose` moved to `index`.
    pub fn href(&self, purpose: Purpose, index: usize) -> String {
        let (sale, rent) = match purpose {
            Purpose::Sale => (index, self.rent),
            Purpose::Rent => (self.sale, index),
        };
        let mut href = format!("/?venta={}&arriendo={}", sale, rent);
        if let Some(width) = self.width {
            href.push_str(&format!("&ancho={}", width));
        }
        href
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorView {
    pub index: usize,
    pub active: bool,
    pub href: String,
}

/// Rendered snapshot of a featured carousel.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselView {
    /// DOM id and query parameter name
    pub id: &'static str,
    pub title: &'static str,
    pub cards: Vec<CardView>,
    pub indicators: Vec<IndicatorView>,
    pub can_prev: bool,
    pub can_next: bool,
    pub prev_href: String,
    pub next_href: String,
    /// 0 when autoplay is off
    pub autoplay_ms: u64,
    pub transition_ms: u64,
    pub per_page: usize,
    pub current: usize,
    pub total: usize,
}

impl CarouselView {
    pub fn build(purpose: Purpose, state: &CarouselState<Property>, links: &HomeLinks) -> Self {
        let (id, title) = match purpose {
            Purpose::Sale => ("venta", "Destacadas en Venta"),
            Purpose::Rent => ("arriendo", "Destacadas en Arriendo"),
        };

        let indicators = state
            .indicators()
            .into_iter()
            .enumerate()
            .map(|(index, active)| IndicatorView {
                index,
                active,
                href: links.href(purpose, index),
            })
            .collect();

        Self {
            id,
            title,
            cards: state.visible().iter().map(CardView::from_property).collect(),
            indicators,
            can_prev: state.can_go_prev(),
            can_next: state.can_go_next(),
            prev_href: links.href(purpose, state.prev_target()),
            next_href: links.href(purpose, state.next_target()),
            autoplay_ms: state.options().autoplay_interval_ms.unwrap_or(0),
            transition_ms: state.options().transition_ms,
            per_page: state.items_per_page(),
            current: state.current_index(),
            total: state.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

// == Gallery ==

#[derive(Debug, Clone, PartialEq)]
pub struct ThumbnailView {
    pub index: usize,
    pub image: String,
    pub active: bool,
    pub href: String,
}

/// Rendered snapshot of the detail page gallery and lightbox.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryView {
    pub main_image: String,
    pub current: usize,
    pub total: usize,
    pub prev_href: String,
    pub next_href: String,
    pub zoom_href: String,
    pub close_href: String,
    pub thumbnails: Vec<ThumbnailView>,
    pub lightbox_open: bool,
    pub lightbox_image: String,
}

impl GalleryView {
    pub fn build(slug: &str, state: &GalleryState) -> Self {
        let base = property_href(slug);
        let at = |index: usize| format!("{}?imagen={}", base, index);

        Self {
            main_image: state.current_image().to_string(),
            current: state.current_index(),
            total: state.len(),
            prev_href: at(state.prev_index()),
            next_href: at(state.next_index()),
            zoom_href: format!("{}&zoom=true", at(state.current_index())),
            close_href: at(state.current_index()),
            thumbnails: state
                .thumbnails()
                .map(|(index, image, active)| ThumbnailView {
                    index,
                    image: image.to_string(),
                    active,
                    href: at(index),
                })
                .collect(),
            lightbox_open: state.is_lightbox_open(),
            lightbox_image: state.lightbox_image().unwrap_or_default().to_string(),
        }
    }

    pub fn has_many(&self) -> bool {
        self.total > 1
    }
}

// == Page Chrome ==

/// Currency ticker in the page header.
#[derive(Debug, Clone, PartialEq)]
pub struct TickerView {
    pub value: String,
    pub date: String,
    pub fallback: bool,
}

impl TickerView {
    pub fn from_quote(quote: &RateQuote) -> Self {
        Self {
            value: format_rate(quote.value),
            date: format_rate_date(quote.date),
            fallback: quote.fallback,
        }
    }
}

/// Everything the shared layout needs.
#[derive(Debug, Clone, PartialEq)]
pub struct Chrome {
    pub title: String,
    pub description: String,
    pub ticker: TickerView,
}

impl Chrome {
    pub fn new(title: impl Into<String>, description: impl Into<String>, quote: &RateQuote) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            ticker: TickerView::from_quote(quote),
        }
    }
}

/// Spec sheet row as printed.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecView {
    pub key: &'static str,
    pub label: &'static str,
    pub value: String,
}

impl From<&SpecRow> for SpecView {
    fn from(row: &SpecRow) -> Self {
        Self {
            key: row.key,
            label: row.label,
            value: row.value.clone(),
        }
    }
}
