use crate::input::patterns::{looks_like_number, FLOAT_PREFIX, NUMERIC_PREFIX};
use crate::unit::Unit;
use log::debug;

/// Repair raw draft text into a numeric string, or fall back to `last_valid`
///
/// Empty input reverts silently. Commas are read as decimal dots. Trailing
/// letters are dropped ("123a" -> "123", "12a3" -> "12"), while a leading
/// letter or a second dot rejects the whole edit.
pub fn sanitize(raw: &str, last_valid: &str) -> String {
    if raw.is_empty() {
        return last_valid.to_string();
    }

    let input = raw.trim().replace(',', ".");

    if !looks_like_number(&input) || input.matches('.').count() > 1 {
        debug!("rejected draft {:?}, reverting to {:?}", raw, last_valid);
        return last_valid.to_string();
    }

    let prefix = NUMERIC_PREFIX
        .find(&input)
        .map(|m| m.as_str())
        .unwrap_or("");

    if matches!(prefix, "" | "-" | ".") {
        debug!("no numeric prefix in {:?}, reverting to {:?}", raw, last_valid);
        return last_valid.to_string();
    }

    let mut result = prefix.to_string();

    if result.starts_with('.') {
        result.insert(0, '0');
    }
    if result.ends_with('.') {
        result.pop();
    }

    if result.is_empty() {
        return "0".to_string();
    }

    trim_leading_zeros(&result)
}

/// Apply unit bounds to a numeric string
///
/// Negative values become "0". A percent value above 100 is rejected in favour
/// of `last_valid` rather than clamped; steppers and unit switches clamp
/// forward instead.
pub fn clamp(numeric: &str, unit: Unit, last_valid: &str) -> String {
    let value = match parse_number(numeric) {
        Some(v) => v,
        None => {
            debug!("{:?} is not a number, reverting to {:?}", numeric, last_valid);
            return last_valid.to_string();
        }
    };

    if value < 0.0 {
        return "0".to_string();
    }

    if let Some(bound) = unit.upper_bound() {
        if value > bound {
            debug!(
                "{} exceeds {} for unit {}, reverting to {:?}",
                value, bound, unit, last_valid
            );
            return last_valid.to_string();
        }
    }

    format_number(value)
}

/// Parse the leading float literal of `text`, ignoring anything after it
/// Returns None when there is no literal or it does not fit in a finite f64
pub fn parse_number(text: &str) -> Option<f64> {
    let literal = FLOAT_PREFIX.find(text.trim())?;
    literal
        .as_str()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Canonical decimal form: no exponent, no trailing zeros, no negative zero
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}

// "012.3" -> "12.3", "-007" -> "-7", "00.5" -> "0.5"
fn trim_leading_zeros(number: &str) -> String {
    let (sign, digits) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };

    if digits.is_empty() {
        return number.to_string();
    }

    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() || trimmed.starts_with('.') {
        format!("{}0{}", sign, trimmed)
    } else {
        format!("{}{}", sign, trimmed)
    }
}
