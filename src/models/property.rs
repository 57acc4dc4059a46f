//! Property models
//!
//! `PropertyRecord` mirrors what the content API sends, with every field
//! optional and numbers accepted as numbers or numeric strings.
//! `Property` is the validated snapshot the rest of the crate works with.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::{Result, SiteError};

/// Image shown when a property has no usable picture.
pub const PLACEHOLDER_IMAGE: &str = "/assets/images/propiedad-default.jpg";

/// Rendition requested from the CMS for uploaded images.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSize {
    /// Cards and carousels
    Medium,
    /// Gallery and lightbox
    Large,
}

impl ImageSize {
    pub fn format(&self) -> &'static str {
        match self {
            ImageSize::Medium => "medium",
            ImageSize::Large => "large",
        }
    }
}

// == Wire Records ==

/// Property as returned by the content API.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PropertyRecord {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(rename = "Titulo", default)]
    pub title: Option<String>,
    #[serde(rename = "Precio", default, deserialize_with = "lenient_number")]
    pub price: Option<f64>,
    #[serde(rename = "Ubicacion", default)]
    pub location: Option<String>,
    #[serde(rename = "Region", default)]
    pub region: Option<String>,
    #[serde(rename = "Dormitorios", default, deserialize_with = "lenient_count")]
    pub bedrooms: Option<u32>,
    #[serde(rename = "Banos", default, deserialize_with = "lenient_count")]
    pub bathrooms: Option<u32>,
    #[serde(rename = "Superficie", default, deserialize_with = "lenient_number")]
    pub area: Option<f64>,
    #[serde(rename = "M2utiles", default, deserialize_with = "lenient_number")]
    pub useful_area: Option<f64>,
    #[serde(rename = "Tipo", default)]
    pub kind: Option<String>,
    #[serde(rename = "Objetivo", default)]
    pub purpose: Option<String>,
    #[serde(rename = "Destacado", default, deserialize_with = "lenient_flag")]
    pub featured: Option<bool>,
    #[serde(rename = "Oportunidades", default, deserialize_with = "lenient_flag")]
    pub opportunity: Option<bool>,
    #[serde(rename = "Publicado", default, deserialize_with = "lenient_flag")]
    pub published: Option<bool>,
    #[serde(rename = "Slug", default)]
    pub slug: Option<String>,
    #[serde(rename = "Imagenes", default)]
    pub images: Option<Vec<ImageRecord>>,
    #[serde(rename = "Descripcion", default)]
    pub description: Option<String>,
    #[serde(rename = "Gastos_comunes", default, deserialize_with = "lenient_number")]
    pub common_expenses: Option<f64>,
    #[serde(rename = "Contribuciones", default, deserialize_with = "lenient_number")]
    pub property_tax: Option<f64>,
    /// Amenities and any other free-form attributes
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Media entry attached to a property.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImageRecord {
    #[serde(default)]
    pub url: Option<String>,
}

// == Purpose ==

/// What the listing is offered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Purpose {
    Sale,
    Rent,
}

impl Purpose {
    /// Parses the API's `Objetivo` value.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "venta" => Some(Purpose::Sale),
            "arriendo" => Some(Purpose::Rent),
            _ => None,
        }
    }

    /// Label as the site shows it.
    pub fn label(&self) -> &'static str {
        match self {
            Purpose::Sale => "Venta",
            Purpose::Rent => "Arriendo",
        }
    }
}

impl fmt::Display for Purpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// == Spec Sheet ==

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SpecKind {
    /// Shows its value, with an optional unit
    Value,
    /// Yes/no amenity, shown only when present
    Amenity,
}

struct SpecField {
    key: &'static str,
    label: &'static str,
    kind: SpecKind,
    unit: &'static str,
}

const fn spec(key: &'static str, label: &'static str, unit: &'static str) -> SpecField {
    SpecField {
        key,
        label,
        kind: SpecKind::Value,
        unit,
    }
}

const fn amenity(key: &'static str, label: &'static str) -> SpecField {
    SpecField {
        key,
        label,
        kind: SpecKind::Amenity,
        unit: "",
    }
}

/// Spec sheet rows in display order.
const SPEC_FIELDS: &[SpecField] = &[
    spec("Dormitorios", "Dormitorios", ""),
    spec("Banos", "Baños", ""),
    spec("Superficie", "Mt2 Totales", " m²"),
    spec("M2utiles", "Mt2 Útiles", " m²"),
    spec("suites", "Suites", ""),
    spec("Servicio", "Servicio", ""),
    spec("Estacionamientos", "Estacionamientos", ""),
    spec("Terrazas", "Terrazas", ""),
    spec("Bodega", "Bodega", ""),
    amenity("Piscina", "Piscina"),
    amenity("Quincho", "Quincho"),
    amenity("sala_multiuso", "Sala Multiuso"),
    amenity("Gimnasio", "Gimnasio"),
    amenity("Lavanderia", "Lavandería"),
    amenity("Walk_in_closet", "Walk-in Closet"),
    spec("ano_construccion", "Año de construcción", ""),
    spec("Piso", "Piso", ""),
    spec("Orientacion", "Orientación", ""),
];

/// One rendered row of the spec sheet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpecRow {
    /// API field the row comes from, used as a CSS hook
    pub key: &'static str,
    pub label: &'static str,
    pub value: String,
}

// == Property ==

/// Validated, read-only property snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Property {
    pub id: u64,
    pub title: String,
    pub slug: String,
    pub location: Option<String>,
    pub region: Option<String>,
    /// Asking price in UF
    pub price: Option<f64>,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<u32>,
    /// Total surface in m²
    pub area: Option<f64>,
    /// Usable surface in m²
    pub useful_area: Option<f64>,
    /// Property type (Casa, Departamento, ...)
    pub kind: Option<String>,
    pub purpose: Purpose,
    pub featured: bool,
    pub opportunity: bool,
    /// Absolute gallery image URLs; missing entries are replaced by the placeholder
    pub images: Vec<String>,
    /// Card-sized rendition of the first image
    pub cover: Option<String>,
    pub description: Option<String>,
    /// Monthly common expenses in CLP
    pub common_expenses: Option<f64>,
    /// Property tax in CLP
    pub property_tax: Option<f64>,
    pub specs: Vec<SpecRow>,
}

impl Property {
    /// Validates a wire record, resolving relative image URLs against
    /// `image_base_url`.
    pub fn from_record(record: PropertyRecord, image_base_url: &str) -> Result<Self> {
        let id = record
            .id
            .ok_or_else(|| SiteError::InvalidRecord("record without id".to_string()))?;

        let title = non_empty(record.title.as_deref())
            .ok_or_else(|| SiteError::InvalidRecord(format!("record {} has no title", id)))?;

        let slug = non_empty(record.slug.as_deref())
            .ok_or_else(|| SiteError::InvalidRecord(format!("record {} has no slug", id)))?;

        let purpose = record
            .purpose
            .as_deref()
            .and_then(Purpose::from_label)
            .ok_or_else(|| {
                SiteError::InvalidRecord(format!(
                    "record {} has unknown purpose {:?}",
                    id, record.purpose
                ))
            })?;

        let uploads = record.images.as_deref().unwrap_or_default();
        let resolve = |image: &ImageRecord, size| {
            resolve_image_url(image.url.as_deref(), image_base_url, size)
        };
        let images = uploads
            .iter()
            .map(|image| resolve(image, ImageSize::Large))
            .collect();
        let cover = uploads.first().map(|image| resolve(image, ImageSize::Medium));

        let specs = spec_sheet(&record);

        Ok(Self {
            id,
            title,
            slug,
            location: non_empty(record.location.as_deref()),
            region: non_empty(record.region.as_deref()),
            price: record.price,
            bedrooms: record.bedrooms,
            bathrooms: record.bathrooms,
            area: record.area,
            useful_area: record.useful_area,
            kind: non_empty(record.kind.as_deref()),
            purpose,
            featured: record.featured.unwrap_or(false),
            opportunity: record.opportunity.unwrap_or(false),
            images,
            cover,
            description: non_empty(record.description.as_deref()),
            common_expenses: record.common_expenses,
            property_tax: record.property_tax,
            specs,
        })
    }

    /// Cover image, or the placeholder when there is none.
    pub fn first_image(&self) -> &str {
        self.cover.as_deref().unwrap_or(PLACEHOLDER_IMAGE)
    }
}

/// Turns an API image path into an absolute URL.
///
/// Uploads served by the CMS are requested at `size`; absolute URLs are
/// left untouched.
pub fn resolve_image_url(
    url: Option<&str>,
    image_base_url: &str,
    size: ImageSize,
) -> String {
    match url.map(str::trim) {
        None | Some("") => PLACEHOLDER_IMAGE.to_string(),
        Some(url) if url.starts_with("http") => url.to_string(),
        Some(url) => {
            let base = image_base_url.trim_end_matches('/');
            let sep = if url.starts_with('/') { "" } else { "/" };
            format!("{}{}{}?format={}", base, sep, url, size.format())
        }
    }
}

fn spec_sheet(record: &PropertyRecord) -> Vec<SpecRow> {
    SPEC_FIELDS
        .iter()
        .filter_map(|field| {
            let value = match field.key {
                "Dormitorios" => record.bedrooms.map(Value::from),
                "Banos" => record.bathrooms.map(Value::from),
                "Superficie" => record.area.map(Value::from),
                "M2utiles" => record.useful_area.map(Value::from),
                key => record.extra.get(key).cloned(),
            }?;

            let display = match field.kind {
                SpecKind::Value => display_value(&value).map(|v| format!("{}{}", v, field.unit)),
                SpecKind::Amenity => is_affirmative(&value).then(|| "Sí".to_string()),
            }?;

            Some(SpecRow {
                key: field.key,
                label: field.label,
                value: display,
            })
        })
        .collect()
}

/// Display text for a spec value, `None` when the value is empty or falsy.
fn display_value(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::Bool(true) => Some("Sí".to_string()),
        Value::Number(n) => {
            let n = n.as_f64()?;
            if n == 0.0 {
                None
            } else if n.fract() == 0.0 {
                Some(format!("{}", n as i64))
            } else {
                Some(format!("{}", n))
            }
        }
        Value::String(s) => non_empty(Some(s.as_str())),
        Value::Array(_) | Value::Object(_) => None,
    }
}

fn is_affirmative(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::String(s) => matches!(s.trim(), "Sí" | "Si" | "sí" | "si"),
        _ => false,
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

// == Lenient Deserializers ==

fn lenient_number<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().replace(',', ".").parse().ok(),
        _ => None,
    })
}

fn lenient_count<'de, D>(deserializer: D) -> std::result::Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_number(deserializer)?
        .filter(|n| *n >= 0.0)
        .map(|n| n.round() as u32))
}

fn lenient_flag<'de, D>(deserializer: D) -> std::result::Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Bool(b)) => Some(b),
        Some(Value::String(s)) => Some(matches!(s.trim(), "true" | "Sí" | "Si")),
        _ => None,
    })
}
