//! Lenient field parsing.
//!
//! Form fields arrive as raw text. Parsing never fails: malformed or absent
//! values fall back to a default and the substitution is logged at `debug`.

/// Parse the integer prefix of `raw`, or return `default`.
///
/// Accepts optional leading whitespace, an optional sign, then digits.
/// Anything after the digits is ignored, so `"12 PO"` reads as 12.
pub fn parse_int_or(raw: &str, default: i64) -> i64 {
    match integer_prefix(raw) {
        Some(value) => value,
        None => {
            if !raw.trim().is_empty() {
                tracing::debug!(raw, default, "Non-numeric field value, using default");
            }
            default
        }
    }
}

/// Same as [`parse_int_or`], clamped into `min..=max`.
pub fn parse_int_clamped(raw: &str, default: i64, min: i64, max: i64) -> i64 {
    parse_int_or(raw, default).clamp(min, max)
}

/// Same as [`parse_int_or`] with a default of 0, clamped into `-limit..=limit`.
pub fn parse_int_within(raw: &str, limit: i64) -> i64 {
    parse_int_or(raw, 0).clamp(-limit, limit)
}

/// Parse a non-negative count (XP, coins received). Negative input reads as 0.
pub fn parse_count(raw: &str) -> u32 {
    let value = parse_int_or(raw, 0);
    u32::try_from(value).unwrap_or(if value < 0 { 0 } else { u32::MAX })
}

/// Trimmed value, or `None` when the field is blank.
pub fn non_blank(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

fn integer_prefix(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.chars().next() {
        Some('-') => (true, &trimmed[1..]),
        Some('+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = rest
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(rest.len(), |(index, _)| index);
    if end == 0 {
        return None;
    }

    let magnitude: i64 = rest[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_prefix_is_read() {
        assert_eq!(parse_int_or("12", 0), 12);
        assert_eq!(parse_int_or("  7 XP", 0), 7);
        assert_eq!(parse_int_or("-3", 0), -3);
        assert_eq!(parse_int_or("+4", 0), 4);
        assert_eq!(parse_int_or("2(ROBUSTE)", 0), 2);
    }

    #[test]
    fn missing_digits_use_default() {
        assert_eq!(parse_int_or("", 1), 1);
        assert_eq!(parse_int_or("abc", 1), 1);
        assert_eq!(parse_int_or("-", 5), 5);
        assert_eq!(parse_int_or("99999999999999999999999", 0), 0);
    }

    #[test]
    fn clamped_levels() {
        assert_eq!(parse_int_clamped("25", 1, 1, 20), 20);
        assert_eq!(parse_int_clamped("0", 1, 1, 20), 1);
        assert_eq!(parse_int_clamped("", 1, 1, 20), 1);
    }

    #[test]
    fn bounded_values_clamp_both_ways() {
        assert_eq!(parse_int_within("9223372036854775807", 1_000), 1_000);
        assert_eq!(parse_int_within("-9223372036854775807", 1_000), -1_000);
        assert_eq!(parse_int_within("12 PO", 1_000), 12);
        assert_eq!(parse_int_within("abc", 1_000), 0);
    }

    #[test]
    fn counts_are_never_negative() {
        assert_eq!(parse_count("-4"), 0);
        assert_eq!(parse_count("3"), 3);
        assert_eq!(parse_count(""), 0);
    }

    #[test]
    fn blank_detection() {
        assert_eq!(non_blank("  Kornélius "), Some("Kornélius"));
        assert_eq!(non_blank("   "), None);
    }
}
