//! Exchange-rate models
//!
//! Wire shape of the UF indicator service and the quote handed to renderers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of the indicator service (`{"serie": [{"valor": ..., "fecha": ...}]}`).
#[derive(Debug, Clone, Deserialize)]
pub struct IndicatorResponse {
    #[serde(default)]
    pub serie: Vec<IndicatorPoint>,
}

/// One dated value in the indicator series, most recent first.
#[derive(Debug, Clone, Deserialize)]
pub struct IndicatorPoint {
    pub valor: f64,
    #[serde(default)]
    pub fecha: Option<DateTime<Utc>>,
}

/// CLP value of one UF.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RateQuote {
    pub value: f64,
    pub date: Option<DateTime<Utc>>,
    /// True when the service failed and the configured default is in use
    pub fallback: bool,
}

impl RateQuote {
    pub fn live(value: f64, date: Option<DateTime<Utc>>) -> Self {
        Self {
            value,
            date,
            fallback: false,
        }
    }

    pub fn fallback(value: f64) -> Self {
        Self {
            value,
            date: None,
            fallback: true,
        }
    }
}
