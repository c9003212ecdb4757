//! Flat per-level hit point bonus as typed on a sheet, e.g. `2(ROBUSTE)`.

use serde::{Deserialize, Serialize};

/// A free-text per-level HP bonus.
///
/// Only the leading integer counts towards the total; the full annotated
/// text is kept so the breakdown can show where the bonus comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlatHpBonus {
    annotation: String,
    per_level: i32,
}

impl FlatHpBonus {
    /// Parse the raw field value. Never fails: text without a numeric prefix
    /// is kept as annotation with a per-level value of 0.
    pub fn parse(raw: &str) -> Self {
        Self {
            annotation: raw.to_string(),
            per_level: leading_integer(raw).unwrap_or(0),
        }
    }

    /// Numeric part of the bonus, applied once per level gained.
    pub fn per_level(&self) -> i32 {
        self.per_level
    }

    /// The text exactly as entered.
    pub fn annotation(&self) -> &str {
        &self.annotation
    }

    /// Whether the breakdown should mention this bonus at all.
    ///
    /// Blank fields and a bare `0` are treated as "no bonus".
    pub fn is_shown(&self) -> bool {
        let trimmed = self.annotation.trim();
        !trimmed.is_empty() && trimmed != "0"
    }
}

/// Numeric-prefix parsing: optional whitespace, optional sign, then digits.
fn leading_integer(raw: &str) -> Option<i32> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let value: i32 = rest[..digits_len].parse().ok()?;
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn annotated_bonus_keeps_text_and_number() {
        let bonus = FlatHpBonus::parse("2(ROBUSTE)");
        assert_eq!(bonus.per_level(), 2);
        assert_eq!(bonus.annotation(), "2(ROBUSTE)");
        assert!(bonus.is_shown());
    }

    #[test]
    fn sign_and_whitespace_are_accepted() {
        assert_eq!(FlatHpBonus::parse("  +3 (objet)").per_level(), 3);
        assert_eq!(FlatHpBonus::parse("-1 malédiction").per_level(), -1);
    }

    #[test]
    fn text_without_numeric_prefix_counts_as_zero() {
        let bonus = FlatHpBonus::parse("ROBUSTE");
        assert_eq!(bonus.per_level(), 0);
        assert!(bonus.is_shown());
    }

    #[test]
    fn blank_and_zero_are_hidden() {
        assert!(!FlatHpBonus::parse("").is_shown());
        assert!(!FlatHpBonus::parse("   ").is_shown());
        assert!(!FlatHpBonus::parse("0").is_shown());
        assert!(!FlatHpBonus::parse(" 0 ").is_shown());
        assert_eq!(FlatHpBonus::parse("0").per_level(), 0);
    }

    #[test]
    fn overflowing_digits_fall_back_to_zero() {
        assert_eq!(FlatHpBonus::parse("99999999999").per_level(), 0);
    }
}
