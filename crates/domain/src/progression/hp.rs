//! Hit points gained when leveling up, using average rolls.

use serde::{Deserialize, Serialize};

use crate::entities::{
    primary_class, primary_class_name, CharacterClass, DEFAULT_AVERAGE_HP_PER_LEVEL,
};
use crate::value_objects::{FlatHpBonus, Level};

/// Every term of the HP projection, kept for the rendered breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HpBreakdown {
    /// Class name the average was looked up with.
    pub class_name: String,
    /// `None` when the name is not in the class table and the default average applied.
    pub class: Option<CharacterClass>,
    pub levels_gained: u8,
    pub average_hp_per_level: u8,
    pub hp_from_levels: i32,
    pub hp_from_constitution: i32,
    pub flat_bonus: FlatHpBonus,
    pub hp_from_flat_bonus: i32,
    pub previous_hp: i32,
}

impl HpBreakdown {
    pub fn total_gain(&self) -> i32 {
        self.hp_from_levels
            .saturating_add(self.hp_from_constitution)
            .saturating_add(self.hp_from_flat_bonus)
    }

    pub fn used_default_average(&self) -> bool {
        self.class.is_none()
    }
}

/// Result of [`compute_hp_gain`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HpGain {
    pub new_hp: i32,
    /// `None` when no level is gained.
    pub breakdown: Option<HpBreakdown>,
}

/// Project hit points after going from `current_level` to `target_level`.
///
/// Multiclass labels ("Magicien 3 / Guerrier 2") only use their first class
/// for the per-level average. Unknown classes use an average of 5. Every term
/// saturates at the `i32` bounds.
pub fn compute_hp_gain(
    class_label: &str,
    current_level: Level,
    target_level: Level,
    constitution_modifier: i32,
    flat_bonus: &str,
    current_hp: i32,
) -> HpGain {
    if target_level <= current_level {
        return HpGain {
            new_hp: current_hp,
            breakdown: None,
        };
    }

    let levels_gained = current_level.levels_until(target_level);
    let levels = i32::from(levels_gained);

    let class = primary_class(class_label);
    let average_hp_per_level = class
        .map(|c| c.average_hp_per_level())
        .unwrap_or(DEFAULT_AVERAGE_HP_PER_LEVEL);

    let flat_bonus = FlatHpBonus::parse(flat_bonus);
    let hp_from_flat_bonus = if flat_bonus.is_shown() {
        flat_bonus.per_level().saturating_mul(levels)
    } else {
        0
    };

    let breakdown = HpBreakdown {
        class_name: primary_class_name(class_label).to_string(),
        class,
        levels_gained,
        average_hp_per_level,
        hp_from_levels: i32::from(average_hp_per_level).saturating_mul(levels),
        hp_from_constitution: constitution_modifier.saturating_mul(levels),
        flat_bonus,
        hp_from_flat_bonus,
        previous_hp: current_hp,
    };

    HpGain {
        new_hp: current_hp.saturating_add(breakdown.total_gain()),
        breakdown: Some(breakdown),
    }
}
