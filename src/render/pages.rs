//! Page templates
//!
//! askama page structs and the functions that assemble them from fetched
//! data and the request's UI state.

use askama::Template;
use axum::response::Html;

use crate::client::FeaturedSet;
use crate::error::Result;
use crate::listing::{related, Category, RELATED_LIMIT};
use crate::models::{DetailQuery, HomeQuery, Property, Purpose, RateQuote};
use crate::render::format::{format_clp, format_number, format_uf, uf_to_clp};
use crate::render::views::{
    map_embed_url, meta_description, page_title, whatsapp_link, CardView, CarouselView, Chrome,
    GalleryView, HomeLinks, SpecView,
};
use crate::ui::{
    items_per_page_for_width, CarouselOptions, CarouselState, GalleryState, DESKTOP_BREAKPOINT,
};

pub const EMPTY_LISTING: &str = "No hay propiedades disponibles en este momento.";
pub const EMPTY_FEATURED: &str = "No hay propiedades destacadas disponibles en este momento.";

/// Renders any page to an HTML response body.
pub fn render<T: Template>(page: &T) -> Result<Html<String>> {
    Ok(Html(page.render()?))
}

// == Home ==

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomePage {
    pub chrome: Chrome,
    pub carousels: Vec<CarouselView>,
    pub empty_message: &'static str,
}

/// Home page with one featured carousel per purpose.
///
/// # Arguments
/// * `featured` - Featured properties split by purpose
/// * `query` - Carousel positions and viewport width from the URL
/// * `quote` - UF rate for the ticker
/// * `autoplay_ms` - Auto-advance interval, 0 disables it
pub fn home_page(
    featured: FeaturedSet,
    query: &HomeQuery,
    quote: &RateQuote,
    autoplay_ms: u64,
) -> HomePage {
    let width = query.ancho.unwrap_or(DESKTOP_BREAKPOINT + 1);
    let per_page = items_per_page_for_width(width);
    let options = CarouselOptions {
        autoplay_interval_ms: (autoplay_ms > 0).then_some(autoplay_ms),
        ..CarouselOptions::default()
    };

    let mut sale = CarouselState::new(featured.sale, per_page, options.clone());
    let mut rent = CarouselState::new(featured.rent, per_page, options);
    sale.go_to(query.venta.unwrap_or(0), 0);
    rent.go_to(query.arriendo.unwrap_or(0), 0);

    let links = HomeLinks {
        sale: sale.current_index(),
        rent: rent.current_index(),
        width: query.ancho,
    };

    HomePage {
        chrome: Chrome::new(
            page_title("Propiedades Exclusivas"),
            "Residencias exclusivas en venta y arriendo en Chile.",
            quote,
        ),
        carousels: vec![
            CarouselView::build(Purpose::Sale, &sale, &links),
            CarouselView::build(Purpose::Rent, &rent, &links),
        ],
        empty_message: EMPTY_FEATURED,
    }
}

// == Listing ==

#[derive(Template)]
#[template(path = "listing.html")]
pub struct ListingPage {
    pub chrome: Chrome,
    pub heading: &'static str,
    pub subtitle: &'static str,
    pub cards: Vec<CardView>,
    pub empty_message: &'static str,
}

/// Grid of every property in `category`.
pub fn listing_page(category: Category, listing: &[Property], quote: &RateQuote) -> ListingPage {
    ListingPage {
        chrome: Chrome::new(page_title(category.title()), category.subtitle(), quote),
        heading: category.title(),
        subtitle: category.subtitle(),
        cards: category
            .apply(listing)
            .into_iter()
            .map(CardView::from_property)
            .collect(),
        empty_message: EMPTY_LISTING,
    }
}

// == Detail ==

#[derive(Template)]
#[template(path = "detail.html")]
pub struct DetailPage {
    pub chrome: Chrome,
    pub title: String,
    /// "Casa en Venta", empty without a type
    pub kind_line: String,
    pub location: String,
    pub region: String,
    pub price_uf: String,
    pub price_clp: String,
    pub bedrooms: String,
    pub bathrooms: String,
    pub area: String,
    pub useful_area: String,
    pub gallery: GalleryView,
    pub specs: Vec<SpecView>,
    pub map_url: String,
    pub description: String,
    pub common_expenses: String,
    pub property_tax: String,
    pub whatsapp_href: String,
    pub related: Vec<CardView>,
    pub featured: bool,
}

impl DetailPage {
    pub fn has_location(&self) -> bool {
        !self.map_url.is_empty()
    }

    pub fn has_expenses(&self) -> bool {
        !self.common_expenses.is_empty() || !self.property_tax.is_empty()
    }
}

fn positive_text(value: Option<f64>, f: impl Fn(f64) -> String) -> String {
    value.filter(|v| *v > 0.0).map(f).unwrap_or_default()
}

/// Detail page for `property`, with related picks from `listing`.
///
/// # Arguments
/// * `property` - The property being shown
/// * `listing` - Published properties to choose related ones from
/// * `query` - Gallery position and lightbox flag from the URL
/// * `quote` - UF rate for the CLP price and the ticker
/// * `whatsapp_number` - Contact number for the chat link
pub fn detail_page(
    property: &Property,
    listing: &[Property],
    query: &DetailQuery,
    quote: &RateQuote,
    whatsapp_number: &str,
) -> DetailPage {
    let mut gallery = GalleryState::new(property.images.clone());
    if let Some(index) = query.imagen {
        gallery.show_image(index);
    }
    if query.zoom {
        gallery.open_lightbox();
    }

    let place = property
        .location
        .as_deref()
        .or(property.region.as_deref())
        .unwrap_or_default();

    let kind_line = property
        .kind
        .as_deref()
        .map(|kind| format!("{} en {}", kind, property.purpose))
        .unwrap_or_default();

    DetailPage {
        chrome: Chrome::new(page_title(&property.title), meta_description(property), quote),
        title: property.title.clone(),
        kind_line,
        location: property.location.clone().unwrap_or_default(),
        region: property.region.clone().unwrap_or_default(),
        price_uf: format_uf(property.price),
        price_clp: uf_to_clp(property.price, quote.value).unwrap_or_default(),
        bedrooms: property
            .bedrooms
            .filter(|n| *n > 0)
            .map(|n| n.to_string())
            .unwrap_or_default(),
        bathrooms: property
            .bathrooms
            .filter(|n| *n > 0)
            .map(|n| n.to_string())
            .unwrap_or_default(),
        area: positive_text(property.area, |a| format!("{} m² totales", format_number(a, 2))),
        useful_area: positive_text(property.useful_area, |a| {
            format!("{} m² útiles", format_number(a, 2))
        }),
        gallery: GalleryView::build(&property.slug, &gallery),
        specs: property.specs.iter().map(SpecView::from).collect(),
        map_url: if place.is_empty() {
            String::new()
        } else {
            map_embed_url(place)
        },
        description: property.description.clone().unwrap_or_default(),
        common_expenses: positive_text(property.common_expenses, format_clp),
        property_tax: positive_text(property.property_tax, format_clp),
        whatsapp_href: whatsapp_link(whatsapp_number, &property.title),
        related: related(property, listing, RELATED_LIMIT)
            .into_iter()
            .map(CardView::from_property)
            .collect(),
        featured: property.featured,
    }
}
