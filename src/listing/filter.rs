//! Listing filters
//!
//! Pure predicates over an already-fetched listing. Filtering borrows from the
//! source slice and never reorders or mutates it.

use crate::models::{Property, Purpose};

// == Category ==
/// Listing pages of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    All,
    ForSale,
    ForRent,
    Opportunities,
}

impl Category {
    /// Picks the category for a listing page path. Only `/propiedades` and
    /// its three category segments are listing pages.
    pub fn from_path(path: &str) -> Option<Self> {
        let rest = path.trim_end_matches('/').strip_prefix("/propiedades")?;
        match rest {
            "" => Some(Category::All),
            "/en-venta" => Some(Category::ForSale),
            "/en-arriendo" => Some(Category::ForRent),
            "/oportunidades" => Some(Category::Opportunities),
            _ => None,
        }
    }

    pub fn matches(&self, property: &Property) -> bool {
        match self {
            Category::All => true,
            Category::ForSale => property.purpose == Purpose::Sale,
            Category::ForRent => property.purpose == Purpose::Rent,
            Category::Opportunities => property.opportunity,
        }
    }

    /// Properties of `listing` that belong to this category, in source order.
    pub fn apply<'a>(&self, listing: &'a [Property]) -> Vec<&'a Property> {
        listing.iter().filter(|p| self.matches(p)).collect()
    }

    pub fn title(&self) -> &'static str {
        match self {
            Category::All => "Todas las Propiedades",
            Category::ForSale => "Propiedades en Venta",
            Category::ForRent => "Propiedades en Arriendo",
            Category::Opportunities => "Oportunidades Inmobiliarias",
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            Category::All => "Explora nuestra selección de residencias exclusivas en Chile.",
            Category::ForSale => "Elige entre las mejores residencias de lujo en venta en Chile.",
            Category::ForRent => {
                "Elige entre las mejores residencias de lujo en arriendo en Chile."
            }
            Category::Opportunities => {
                "Descubre propiedades con gran potencial de inversión y revalorización."
            }
        }
    }
}

// == Featured ==
/// Featured properties offered for `purpose`, in source order.
pub fn featured(listing: &[Property], purpose: Purpose) -> Vec<&Property> {
    listing
        .iter()
        .filter(|p| p.featured && p.purpose == purpose)
        .collect()
}
