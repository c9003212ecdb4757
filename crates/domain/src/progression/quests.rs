//! Quest reward aggregation.

use serde::{Deserialize, Serialize};

use super::currency::normalize_currency;
use crate::entities::{QuestInput, QuestLink, RewardEntry, RewardKind};
use crate::value_objects::CurrencyTotal;

/// What one quest contributes once its toggles are applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestSummary {
    /// 1-based position of the quest in the input list.
    pub position: usize,
    pub title: Option<String>,
    pub dm: Option<String>,
    pub link: QuestLink,
    pub xp: u32,
    pub currency: CurrencyTotal,
    pub items: Vec<String>,
    pub others: Vec<String>,
}

/// Totals over every non-placeholder quest, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestAggregate {
    pub total_xp: u32,
    pub currency_totals: CurrencyTotal,
    pub item_descriptions: Vec<String>,
    pub other_descriptions: Vec<String>,
    pub per_quest: Vec<QuestSummary>,
}

impl QuestAggregate {
    pub fn is_empty(&self) -> bool {
        self.per_quest.is_empty()
    }
}

/// Aggregate XP and rewards of every quest.
///
/// Placeholder quests are skipped. Reward kinds whose toggle is off
/// contribute nothing, whatever their entries hold.
pub fn aggregate_quests(quests: &[QuestInput]) -> QuestAggregate {
    let mut aggregate = QuestAggregate::default();

    for (index, quest) in quests.iter().enumerate() {
        if quest.is_placeholder() {
            continue;
        }

        let summary = summarize(index + 1, quest);
        aggregate.total_xp = aggregate.total_xp.saturating_add(summary.xp);
        aggregate.currency_totals += summary.currency;
        aggregate.item_descriptions.extend(summary.items.iter().cloned());
        aggregate.other_descriptions.extend(summary.others.iter().cloned());
        aggregate.per_quest.push(summary);
    }

    aggregate
}

fn summarize(position: usize, quest: &QuestInput) -> QuestSummary {
    let allowed: Vec<RewardEntry> = quest
        .rewards
        .iter()
        .filter(|entry| quest.toggles.allows(&entry.kind))
        .cloned()
        .collect();

    let descriptions = |want_items: bool| -> Vec<String> {
        allowed
            .iter()
            .filter_map(|entry| match &entry.kind {
                RewardKind::Item { description } if want_items => Some(description.trim()),
                RewardKind::Other { description } if !want_items => Some(description.trim()),
                _ => None,
            })
            .filter(|description| !description.is_empty())
            .map(str::to_string)
            .collect()
    };

    QuestSummary {
        position,
        title: quest.title.clone(),
        dm: quest.dm.clone(),
        link: quest.link.clone(),
        xp: quest.awarded_xp(),
        currency: normalize_currency(&allowed).totals,
        items: descriptions(true),
        others: descriptions(false),
    }
}
