//! Numeric validation functions
//!
//! A value counts as a number when the browser's `Number(value)` would not
//! produce `NaN`. The same check runs on the server and in WASM so both sides
//! agree on what the rating input accepts.

use once_cell::sync::Lazy;
use regex::Regex;

// Decimal literal: optional sign, integer and/or fraction part, optional exponent
static DECIMAL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$").unwrap()
});

// Unsigned integer literal with a radix prefix
static RADIX_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^0(?:[xX](?P<hex>[0-9a-fA-F]+)|[oO](?P<oct>[0-7]+)|[bB](?P<bin>[01]+))$").unwrap()
});

static INFINITY_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?P<sign>[+-]?)Infinity$").unwrap());

/// Whitespace stripped around a numeric string.
///
/// Unicode `White_Space` minus NEL, plus the byte order mark.
pub fn is_numeric_whitespace(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{0085}')
}

/// Parses a string the way the browser's `Number(...)` conversion does.
///
/// Returns `None` where the browser would produce `NaN`.
pub fn parse_number(value: &str) -> Option<f64> {
    let trimmed = value.trim_matches(is_numeric_whitespace);

    if trimmed.is_empty() {
        return Some(0.0);
    }

    if DECIMAL_REGEX.is_match(trimmed) {
        return trimmed.parse::<f64>().ok();
    }

    if let Some(caps) = RADIX_REGEX.captures(trimmed) {
        let (digits, radix) = if let Some(m) = caps.name("hex") {
            (m.as_str(), 16)
        } else if let Some(m) = caps.name("oct") {
            (m.as_str(), 8)
        } else {
            (caps.name("bin")?.as_str(), 2)
        };
        return digits.chars().try_fold(0.0_f64, |acc, c| {
            c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
        });
    }

    if let Some(caps) = INFINITY_REGEX.captures(trimmed) {
        return match caps.name("sign").map(|m| m.as_str()) {
            Some("-") => Some(f64::NEG_INFINITY),
            _ => Some(f64::INFINITY),
        };
    }

    None
}

/// Check if a string converts to a number
pub fn is_number(value: &str) -> bool {
    parse_number(value).is_some()
}

/// Validates that a value is a number, reporting it under `label`
pub fn validate_number(value: &str, label: &str) -> Result<(), String> {
    if is_number(value) {
        Ok(())
    } else {
        Err(format!("{} must be a number.", label))
    }
}
