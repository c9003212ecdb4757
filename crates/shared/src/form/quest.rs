//! One quest block of the sheet-update form.

use faerun_domain::{
    CurrencyTotal, Denomination, QuestInput, QuestLink, RewardEntry, RewardToggles,
};
use serde::{Deserialize, Serialize};

use super::parse::{non_blank, parse_int_or, parse_int_within};
use super::validation::MAX_COINS;

/// Raw quest fields, exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuestForm {
    pub title: String,
    pub dm: String,
    /// Multi-session quest: `sessions` replaces `reward_link`.
    pub multi_session: bool,
    pub reward_link: String,
    pub sessions: String,
    pub xp: String,
    pub refuse_xp: bool,
    pub include_currency: bool,
    pub include_items: bool,
    pub include_other: bool,
    pub copper: String,
    pub silver: String,
    pub gold: String,
    pub platinum: String,
    pub items: String,
    pub other: String,
}

impl Default for QuestForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            dm: String::new(),
            multi_session: false,
            reward_link: String::new(),
            sessions: String::new(),
            xp: String::new(),
            refuse_xp: false,
            include_currency: true,
            include_items: true,
            include_other: true,
            copper: String::new(),
            silver: String::new(),
            gold: String::new(),
            platinum: String::new(),
            items: String::new(),
            other: String::new(),
        }
    }
}

impl QuestForm {
    /// Coin fields, each clamped to [`MAX_COINS`] in either direction.
    pub fn currency(&self) -> CurrencyTotal {
        CurrencyTotal::new(
            parse_int_within(&self.copper, MAX_COINS),
            parse_int_within(&self.silver, MAX_COINS),
            parse_int_within(&self.gold, MAX_COINS),
            parse_int_within(&self.platinum, MAX_COINS),
        )
    }

    /// Coin fields paired with their denomination, in display order.
    pub fn coin_fields(&self) -> [(Denomination, &str); 4] {
        [
            (Denomination::Copper, self.copper.as_str()),
            (Denomination::Silver, self.silver.as_str()),
            (Denomination::Gold, self.gold.as_str()),
            (Denomination::Platinum, self.platinum.as_str()),
        ]
    }

    /// Build the calculator record. Empty reward fields produce no entry.
    pub fn to_input(&self) -> QuestInput {
        let link = if self.multi_session {
            QuestLink::MultiSession {
                sessions: non_blank(&self.sessions).map(str::to_string),
            }
        } else {
            QuestLink::Single {
                reward_link: non_blank(&self.reward_link).map(str::to_string),
            }
        };

        let mut rewards = Vec::new();
        let currency = self.currency();
        if !currency.is_zero() {
            rewards.push(RewardEntry::gain(currency));
        }
        if let Some(items) = non_blank(&self.items) {
            rewards.push(RewardEntry::item(items));
        }
        if let Some(other) = non_blank(&self.other) {
            rewards.push(RewardEntry::other(other));
        }

        QuestInput {
            title: non_blank(&self.title).map(str::to_string),
            dm: non_blank(&self.dm).map(str::to_string),
            link,
            xp: non_blank(&self.xp).map(|raw| {
                let xp = parse_int_or(raw, 0);
                u32::try_from(xp.max(0)).unwrap_or(u32::MAX)
            }),
            refuse_xp: self.refuse_xp,
            toggles: RewardToggles {
                currency: self.include_currency,
                items: self.include_items,
                other: self.include_other,
            },
            rewards,
        }
    }
}
