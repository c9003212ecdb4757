//! Quest entries of a sheet update.

use serde::{Deserialize, Serialize};

use crate::entities::reward::{RewardBatch, RewardKind};

/// How a quest points at its reward message(s).
///
/// This two-state flag is only consumed by the message renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum QuestLink {
    /// One link to the reward message.
    Single { reward_link: Option<String> },
    /// A free-text list of sessions, one reward line each.
    MultiSession { sessions: Option<String> },
}

impl Default for QuestLink {
    fn default() -> Self {
        QuestLink::Single { reward_link: None }
    }
}

/// Which reward kinds the player ticked for this quest.
///
/// Unticked kinds contribute nothing, even when their fields still hold values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RewardToggles {
    pub currency: bool,
    pub items: bool,
    pub other: bool,
}

impl RewardToggles {
    pub fn all() -> Self {
        Self {
            currency: true,
            items: true,
            other: true,
        }
    }

    pub fn allows(&self, kind: &RewardKind) -> bool {
        match kind {
            RewardKind::Currency(_) => self.currency,
            RewardKind::Item { .. } => self.items,
            RewardKind::Other { .. } => self.other,
        }
    }
}

/// One quest as supplied by the form layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuestInput {
    pub title: Option<String>,
    pub dm: Option<String>,
    pub link: QuestLink,
    /// `None` when the XP field was left empty.
    pub xp: Option<u32>,
    pub refuse_xp: bool,
    pub toggles: RewardToggles,
    pub rewards: RewardBatch,
}

impl QuestInput {
    /// XP this quest actually grants.
    pub fn awarded_xp(&self) -> u32 {
        if self.refuse_xp {
            0
        } else {
            self.xp.unwrap_or(0)
        }
    }

    /// True when no title, DM, XP or reward field is populated.
    ///
    /// Such quests are untouched form placeholders and are skipped.
    pub fn is_placeholder(&self) -> bool {
        let blank = |value: &Option<String>| value.as_deref().map_or(true, |v| v.trim().is_empty());
        blank(&self.title)
            && blank(&self.dm)
            && self.xp.is_none()
            && self.rewards.iter().all(|entry| entry.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::reward::RewardEntry;
    use crate::value_objects::CurrencyTotal;

    #[test]
    fn refused_xp_awards_nothing() {
        let quest = QuestInput {
            xp: Some(3),
            refuse_xp: true,
            ..QuestInput::default()
        };
        assert_eq!(quest.awarded_xp(), 0);
    }

    #[test]
    fn placeholder_detection() {
        assert!(QuestInput::default().is_placeholder());

        let blank_title = QuestInput {
            title: Some("   ".into()),
            rewards: vec![RewardEntry::gain(CurrencyTotal::default())],
            ..QuestInput::default()
        };
        assert!(blank_title.is_placeholder());

        let with_xp = QuestInput {
            xp: Some(0),
            ..QuestInput::default()
        };
        assert!(!with_xp.is_placeholder());

        let with_item = QuestInput {
            rewards: vec![RewardEntry::item("engrenage")],
            ..QuestInput::default()
        };
        assert!(!with_item.is_placeholder());
    }

    #[test]
    fn toggles_gate_reward_kinds() {
        let toggles = RewardToggles {
            currency: true,
            ..RewardToggles::default()
        };
        assert!(toggles.allows(&RewardKind::Currency(CurrencyTotal::gold(1))));
        assert!(!toggles.allows(&RewardKind::Item {
            description: "x".into()
        }));
        assert!(RewardToggles::all().allows(&RewardKind::Other {
            description: "x".into()
        }));
    }
}
