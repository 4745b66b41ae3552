//! Price cell parsing
//!
//! Price cells come in two shapes: `$31.464 USD ($3.933 USD)` for instance
//! rate plus per-accelerator rate, or `$12.50 USD` for an aggregate rate
//! only.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::html::clean_html;

/// Instance rate with a parenthesized per-accelerator rate (compiled once)
static DUAL_PRICE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$?([\d,]+\.?\d*)\s*USD\s*\(\$?([\d,]+\.?\d*)\s*USD\)")
        .expect("Hardcoded regex pattern should be valid")
});

/// Aggregate rate only (compiled once)
static SINGLE_PRICE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$?([\d,]+\.?\d*)\s*USD").expect("Hardcoded regex pattern should be valid")
});

/// Parse a price cell into `(hourly_rate, accelerator_rate)` in USD.
///
/// The cell is cleaned first, so raw markup from the page is fine. Strings
/// matching neither pattern yield `(0.0, 0.0)`; callers treat a zero hourly
/// rate as "no usable price" and drop the row.
pub fn parse_price_string(price_str: &str) -> (f64, f64) {
    let cleaned = clean_html(price_str);

    if let Some(caps) = DUAL_PRICE_RE.captures(&cleaned) {
        return (parse_amount(&caps[1]), parse_amount(&caps[2]));
    }

    if let Some(caps) = SINGLE_PRICE_RE.captures(&cleaned) {
        return (parse_amount(&caps[1]), 0.0);
    }

    (0.0, 0.0)
}

/// Strip thousands separators and convert; the captures are digit runs, so a
/// conversion failure collapses to the "no usable price" zero.
fn parse_amount(raw: &str) -> f64 {
    raw.replace(',', "").parse().unwrap_or(0.0)
}
