//! Conversion of loosely-typed provider values into display strings.
//!
//! The quote endpoint mixes strings and numbers for the same logical field
//! depending on symbol and market session. Everything is reduced to a
//! display string here; strings pass through untouched and numbers go
//! through [`scale_magnitude`].

use std::collections::BTreeMap;

use serde_json::{Map, Value};

/// Provider key -> display string, for one result object.
pub type DisplayFields = BTreeMap<String, String>;

/// Magnitude buckets checked top-down. The `K` bucket triggers above one
/// hundred thousand but divides by one thousand; existing reports depend on
/// that, so it stays.
const MAGNITUDE_BUCKETS: [(f64, f64, &str); 4] = [
    (1.0e12, 1.0e12, "T"),
    (1.0e9, 1.0e9, "B"),
    (1.0e6, 1.0e6, "M"),
    (1.0e5, 1.0e3, "K"),
];

/// Format a number with three decimals and a unit suffix.
///
/// ```
/// use quotebar_core::normalize::scale_magnitude;
///
/// assert_eq!(scale_magnitude(2.5e9), "2.500B");
/// assert_eq!(scale_magnitude(250_000.0), "250.000K");
/// assert_eq!(scale_magnitude(12.3456), "12.346");
/// ```
pub fn scale_magnitude(value: f64) -> String {
    let (divisor, suffix) = MAGNITUDE_BUCKETS
        .iter()
        .find(|(threshold, _, _)| value > *threshold)
        .map(|(_, divisor, suffix)| (*divisor, *suffix))
        .unwrap_or((1.0, ""));

    format!("{:.3}{}", value / divisor, suffix)
}

/// Display form of a single JSON value.
///
/// Strings are verbatim, numbers are magnitude-scaled, booleans print as
/// `true`/`false`, `null` is empty, and nested values keep their compact
/// JSON text.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Number(number) => number
            .as_f64()
            .map(scale_magnitude)
            .unwrap_or_else(|| number.to_string()),
        Value::Bool(flag) => flag.to_string(),
        Value::Null => String::new(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Normalize every field of a provider result object.
pub fn display_fields(object: &Map<String, Value>) -> DisplayFields {
    object
        .iter()
        .map(|(key, value)| (key.clone(), display_value(value)))
        .collect()
}

/// Look up a field, yielding the empty string when the provider omitted it.
pub fn field(fields: &DisplayFields, key: &str) -> String {
    fields.get(key).cloned().unwrap_or_default()
}

/// Parse a display string back into a finite float.
///
/// Scaled values (`1.2B`) and padded strings (` 1.5`) do not parse; callers
/// treat that as "unknown".
pub fn parse_display_number(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|value| value.is_finite())
}
