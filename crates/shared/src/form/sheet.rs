//! The sheet-update form ("mise à jour de fiche").

use faerun_domain::{CharacterProgressState, Level, QuestInput};
use serde::{Deserialize, Serialize};

use super::parse::{non_blank, parse_count, parse_int_clamped, parse_int_within};
use super::quest::QuestForm;
use super::validation::{MAX_COINS, MAX_CONSTITUTION_MODIFIER, MAX_HP};

/// Special activity reported above the main block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialActivity {
    PlayerTrade,
    SpellLearning,
    SpellbookCopy,
    ComponentPurchase,
    Crafting,
    Other,
}

impl SpecialActivity {
    /// Resolve a form key. Unknown keys fall back to [`SpecialActivity::Other`].
    pub fn from_key(key: &str) -> Self {
        match key.trim() {
            "echange-inter-pj" => SpecialActivity::PlayerTrade,
            "apprentissage-sorts" => SpecialActivity::SpellLearning,
            "copie-grimoire" => SpecialActivity::SpellbookCopy,
            "achat-composants" => SpecialActivity::ComponentPurchase,
            "craft" => SpecialActivity::Crafting,
            _ => SpecialActivity::Other,
        }
    }

    /// Banner title.
    pub fn title(&self) -> &'static str {
        match self {
            SpecialActivity::PlayerTrade => "ECHANGE INTER-PJ",
            SpecialActivity::SpellLearning => "APPRENTISSAGE SORTS",
            SpecialActivity::SpellbookCopy => "COPIE GRIMOIRE",
            SpecialActivity::ComponentPurchase => "ACHAT COMPOSANTS",
            SpecialActivity::Crafting => "ARTISANAT",
            SpecialActivity::Other => "ACTIVITÉ SPÉCIALE",
        }
    }
}

/// Every field of the sheet-update form as raw text and checkboxes.
///
/// All fields default, so any partial snapshot deserializes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SheetUpdateForm {
    pub character_name: String,
    pub multiclass: bool,
    pub class: String,
    /// Full multiclass label, used when `multiclass` is set.
    pub full_class: String,
    /// Class receiving the new level, when it differs from the label.
    pub level_up_class: String,

    pub quests: Vec<QuestForm>,

    pub current_xp: String,
    pub current_level: String,
    pub target_level: String,

    pub current_hp: String,
    pub constitution_modifier: String,
    pub hp_bonus: String,

    pub new_abilities: String,
    pub new_spells: String,
    pub replaced_spell: String,

    pub looted_items: String,
    pub looted_gold: String,
    pub purchases: String,
    pub previous_balance: String,
    pub gold_received: String,

    pub special_activity: String,
    pub special_description: String,
    pub include_merchant: bool,
}

impl SheetUpdateForm {
    /// Class label as displayed, or its placeholder.
    pub fn class_label(&self) -> String {
        if self.multiclass {
            non_blank(&self.full_class).unwrap_or("[CLASSE_COMPLETE]").to_string()
        } else {
            non_blank(&self.class).unwrap_or("[CLASSE]").to_string()
        }
    }

    /// Label driving the level-up lines: the leveling class if set, else the class label.
    pub fn leveling_class_label(&self) -> String {
        non_blank(&self.level_up_class)
            .map(str::to_string)
            .unwrap_or_else(|| self.class_label())
    }

    pub fn special_activity(&self) -> Option<(SpecialActivity, &str)> {
        let kind = non_blank(&self.special_activity)?;
        let description = non_blank(&self.special_description)?;
        Some((SpecialActivity::from_key(kind), description))
    }

    pub fn looted_gold(&self) -> i64 {
        parse_int_within(&self.looted_gold, MAX_COINS)
    }

    pub fn gold_received(&self) -> i64 {
        parse_int_within(&self.gold_received, MAX_COINS)
    }

    /// Build the progress state. Levels clamp into 1..=20, HP and the CON
    /// modifier into their sane ranges, other numbers default to 0.
    pub fn to_state(&self) -> CharacterProgressState {
        let level = |raw: &str| {
            Level::clamped(parse_int_clamped(
                raw,
                i64::from(Level::MIN.value()),
                i64::from(Level::MIN.value()),
                i64::from(Level::MAX.value()),
            ))
        };

        CharacterProgressState {
            current_level: level(&self.current_level),
            target_level: level(&self.target_level),
            current_xp: parse_count(&self.current_xp),
            constitution_modifier: bounded_i32(
                &self.constitution_modifier,
                MAX_CONSTITUTION_MODIFIER,
            ),
            current_hp: bounded_i32(&self.current_hp, MAX_HP),
            primary_class: self.leveling_class_label(),
        }
    }

    /// Calculator records for every quest block, in form order.
    pub fn to_quests(&self) -> Vec<QuestInput> {
        self.quests.iter().map(QuestForm::to_input).collect()
    }
}

fn bounded_i32(raw: &str, limit: i32) -> i32 {
    let value = parse_int_within(raw, i64::from(limit));
    i32::try_from(value).unwrap_or(if value < 0 { -limit } else { limit })
}
