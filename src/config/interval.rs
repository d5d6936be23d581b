use crate::error::{WatchError, WatchResult};

/// Refresh interval used when no `-n` flag is given
pub const DEFAULT_INTERVAL: f64 = 2.0;

/// Parse a textual refresh interval into positive seconds.
///
/// Follows `strtod` conventions: the longest leading numeric prefix is
/// parsed and trailing garbage is ignored, so `"2.5s"` yields 2.5. A zero,
/// negative or overflowing value is rejected because the refresh loop
/// requires a strictly positive finite interval.
pub fn parse_interval(text: &str) -> WatchResult<f64> {
    let prefix = numeric_prefix(text);
    if prefix.is_empty() {
        return Err(WatchError::invalid_interval(text, "not all digits"));
    }

    let value: f64 = prefix
        .parse()
        .map_err(|_| WatchError::invalid_interval(text, "not all digits"))?;

    if !value.is_finite() {
        return Err(WatchError::invalid_interval(text, "overflow detected"));
    }
    if value <= 0.0 {
        return Err(WatchError::invalid_interval(text, "must be greater than zero"));
    }

    Ok(value)
}

/// Longest leading slice of `text` forming a decimal float, exponent included
fn numeric_prefix(text: &str) -> &str {
    let bytes = text.as_bytes();
    let mut end = 0;

    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }

    let mut digits = 0;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        digits += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
            digits += 1;
        }
    }
    if digits == 0 {
        return "";
    }

    // An exponent only counts if at least one digit follows it
    let mantissa_end = end;
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        end += 1;
        if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
            end += 1;
        }
        let mut exp_digits = 0;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
            exp_digits += 1;
        }
        if exp_digits == 0 {
            end = mantissa_end;
        }
    }

    &text[..end]
}
