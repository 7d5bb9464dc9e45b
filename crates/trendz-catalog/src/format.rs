//! Display formatting for catalog values.

/// Format a price as shown on product pages, e.g. `Rs 100/-`.
///
/// Whole prices print without a fractional part.
pub fn format_price(price: f64) -> String {
    format!("Rs {}/-", format_number(price))
}

/// Format a review count, e.g. `10 Reviews`.
pub fn format_review_count(total: u64) -> String {
    format!("{} Reviews", total)
}

/// Format a numeric value the way the API sent it: `4` stays `4`, `3.9` stays `3.9`.
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
