//! Number and price formatting (es-CL)
//!
//! Thousands are grouped with `.`, decimals separated with `,`.

use chrono::{DateTime, Utc};

/// Shown instead of a price when there is none.
pub const PRICE_ON_REQUEST: &str = "Consultar";

/// Groups an unsigned digit string in threes with `.`.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

/// Formats `value` with at most `max_decimals` decimals, trailing zeros
/// dropped.
pub fn format_number(value: f64, max_decimals: usize) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }

    let fixed = format!("{:.*}", max_decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part.trim_end_matches('0')),
        None => (fixed.as_str(), ""),
    };

    let mut out = String::new();
    if value < 0.0 && (int_part != "0" || !frac_part.is_empty()) {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if !frac_part.is_empty() {
        out.push(',');
        out.push_str(frac_part);
    }
    out
}

/// `UF 25.000`, or "Consultar" when the price is missing or zero.
pub fn format_uf(price: Option<f64>) -> String {
    match price {
        Some(p) if p.is_finite() && p > 0.0 => format!("UF {}", format_number(p, 2)),
        _ => PRICE_ON_REQUEST.to_string(),
    }
}

/// `CLP $1.234.567`, rounded to whole pesos.
pub fn format_clp(amount: f64) -> String {
    format!("CLP ${}", format_number(amount.round(), 0))
}

/// Converts a UF price to pesos at `rate`. `None` when there is no price.
pub fn uf_to_clp(price: Option<f64>, rate: f64) -> Option<String> {
    match price {
        Some(p) if p.is_finite() && p > 0.0 => Some(format_clp(p * rate)),
        _ => None,
    }
}

/// Value shown in the currency ticker, e.g. `$39.612,45`.
pub fn format_rate(rate: f64) -> String {
    format!("${}", format_number(rate, 2))
}

/// Day the rate applies to, `dd-mm-yyyy`.
pub fn format_rate_date(date: Option<DateTime<Utc>>) -> String {
    date.map(|d| d.format("%d-%m-%Y").to_string())
        .unwrap_or_default()
}
