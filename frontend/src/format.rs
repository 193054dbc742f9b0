//! Price formatting for display.
//!
//! Prices render as Indonesian Rupiah with zero fractional digits and id-ID
//! digit grouping, e.g. `25000` becomes `"Rp 25.000"`. Anything that is not a
//! finite number renders as the fixed `"N/A"` sentinel. Both entry points are
//! pure and never panic.

/// Fixed sentinel shown when a price cannot be rendered as a number.
pub const PRICE_NOT_AVAILABLE: &str = "N/A";

/// Format a numeric price as Rupiah, e.g. `25000.0` into `"Rp 25.000"`.
///
/// Fractional digits round half away from zero; non-finite values render as
/// `"N/A"`; the sign goes ahead of the currency marker.
pub fn format_price(value: f64) -> String {
    if !value.is_finite() {
        return PRICE_NOT_AVAILABLE.to_string();
    }

    let rounded = value.abs().round() as u64;
    let grouped = group_thousands(rounded);
    if value < 0.0 && rounded > 0 {
        format!("-Rp {}", grouped)
    } else {
        format!("Rp {}", grouped)
    }
}

/// Format a price held as raw user text; unparsable input renders as `"N/A"`.
pub fn format_price_text(value: &str) -> String {
    match value.trim().parse::<f64>() {
        Ok(number) => format_price(number),
        Err(_) => PRICE_NOT_AVAILABLE.to_string(),
    }
}

/// Insert id-ID thousands separators: `1234567` into `"1.234.567"`.
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let offset = digits.len() % 3;
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - offset) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}
