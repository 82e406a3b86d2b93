//! Defensive parsing of free-form numeric text.
//!
//! Measurement fields are stored as the text the user typed so partial
//! input survives; they are only interpreted here, at the point of use.

/// Parse a numeric field. Blank, partial (`"12."` is fine, `"12abc"` is not)
/// and non-finite text all resolve to `None`.
pub fn parse_numeric(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => {
            tracing::warn!(text = %text, "value must be a number");
            None
        }
    }
}

/// A numeric field counts as set only when it parses.
pub fn is_set(text: &str) -> bool {
    parse_numeric(text).is_some()
}
