//! Discord length handling.

/// Longest message sent as a single part.
pub const DISCORD_SAFE_LENGTH: usize = 1800;
/// Hard Discord limit; only used for the length indicator.
pub const DISCORD_HARD_LIMIT: usize = 2000;

/// A rendered message ready to paste.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiscordMessage {
    Single(String),
    Split {
        first: String,
        second: String,
        /// Length of the original text, in characters.
        length: usize,
    },
}

impl DiscordMessage {
    pub fn parts(&self) -> Vec<&str> {
        match self {
            DiscordMessage::Single(text) => vec![text.as_str()],
            DiscordMessage::Split { first, second, .. } => vec![first.as_str(), second.as_str()],
        }
    }

    pub fn warning(&self) -> Option<String> {
        match self {
            DiscordMessage::Single(_) => None,
            DiscordMessage::Split { length, .. } => Some(format!(
                "⚠️ Message trop long ({} caractères) : divisé en 2 parties",
                length
            )),
        }
    }
}

/// Keep text of at most 1800 characters whole; split longer text in two at
/// the character-count midpoint.
pub fn split_for_discord(text: &str) -> DiscordMessage {
    let length = text.chars().count();
    if length <= DISCORD_SAFE_LENGTH {
        return DiscordMessage::Single(text.to_string());
    }

    let midpoint = length / 2;
    let byte_index = text
        .char_indices()
        .nth(midpoint)
        .map_or(text.len(), |(index, _)| index);
    let (first, second) = text.split_at(byte_index);

    tracing::warn!(length, midpoint, "Message exceeds Discord safe length, splitting");

    DiscordMessage::Split {
        first: first.to_string(),
        second: second.to_string(),
        length,
    }
}

/// Length indicator shown next to the character count.
pub fn length_status(text: &str) -> &'static str {
    let length = text.chars().count();
    if length > DISCORD_HARD_LIMIT {
        "⚠️ (sera divisé)"
    } else if length > DISCORD_SAFE_LENGTH {
        "🟡 (proche limite)"
    } else {
        "✅ (taille OK)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_stays_whole() {
        let text = "a".repeat(DISCORD_SAFE_LENGTH);
        let message = split_for_discord(&text);
        assert_eq!(message, DiscordMessage::Single(text));
        assert!(message.warning().is_none());
    }

    #[test]
    fn long_text_splits_at_midpoint() {
        let text = format!("{}{}", "a".repeat(1000), "b".repeat(1001));
        let message = split_for_discord(&text);
        let parts = message.parts();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].chars().count(), 1000);
        assert_eq!(parts[1].chars().count(), 1001);
        assert_eq!(parts.concat(), text);
        assert_eq!(
            message.warning().as_deref(),
            Some("⚠️ Message trop long (2001 caractères) : divisé en 2 parties")
        );
    }

    #[test]
    fn split_respects_multibyte_characters() {
        let text = "é".repeat(1801);
        let parts = split_for_discord(&text).parts().concat();
        assert_eq!(parts, text);
        match split_for_discord(&text) {
            DiscordMessage::Split { first, .. } => assert_eq!(first.chars().count(), 900),
            DiscordMessage::Single(_) => panic!("expected a split"),
        }
    }

    #[test]
    fn length_indicator() {
        assert_eq!(length_status("court"), "✅ (taille OK)");
        assert_eq!(length_status(&"x".repeat(1900)), "🟡 (proche limite)");
        assert_eq!(length_status(&"x".repeat(2100)), "⚠️ (sera divisé)");
    }
}
