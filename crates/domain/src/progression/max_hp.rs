//! Maximum hit points of a full build, class by class.

use serde::{Deserialize, Serialize};

use crate::entities::{CharacterBuild, CharacterClass};

/// Flat HP bonus of a Durable-style feat, granted from level 4.
const DURABLE_FEAT_BONUS: i32 = 4;
const DURABLE_FEAT_MIN_LEVEL: i32 = 4;
/// Fixed part of the Safeguard armour bonus.
const SAFEGUARD_ARMOR_BASE: i32 = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaxHpBreakdown {
    /// Full hit die of the first class row.
    pub base: i32,
    pub constitution: i32,
    /// Average rolls for every other level, plus the draconic sorcerer bonus.
    pub levels: i32,
    pub racial: i32,
    /// Feats and magic items.
    pub bonus: i32,
    pub total: i32,
    pub total_level: i32,
}

/// Compute maximum HP: full hit die at level 1, averages afterwards.
///
/// Unknown class rows still count towards the total level but add no hit
/// points. The total never drops below one HP per level, and every term
/// saturates at the `i32` bounds.
pub fn compute_max_hp(build: &CharacterBuild) -> MaxHpBreakdown {
    let total_level = i32::try_from(build.total_level()).unwrap_or(i32::MAX);

    let mut base = 0;
    let mut levels = 0;
    for (index, row) in build.classes.iter().enumerate() {
        let Some(class) = row.class else {
            continue;
        };
        let level = i32::from(row.level);
        let average = i32::from(class.average_hp_per_level());
        if index == 0 {
            base = i32::from(class.hit_die());
            levels = average.saturating_mul(level - 1).saturating_add(levels);
        } else {
            levels = average.saturating_mul(level).saturating_add(levels);
        }
    }

    let bonuses = build.bonuses;
    if bonuses.draconic_sorcerer {
        let sorcerer =
            i32::try_from(build.levels_in(CharacterClass::Sorcerer)).unwrap_or(i32::MAX);
        levels = levels.saturating_add(sorcerer);
    }

    let constitution = build.constitution_modifier().saturating_mul(total_level);
    let racial = if build.race.grants_hp_per_level() {
        total_level
    } else {
        0
    };

    let mut bonus: i32 = 0;
    if bonuses.tough_feat {
        bonus = bonus.saturating_add(total_level);
    }
    if bonuses.durable_feat && total_level >= DURABLE_FEAT_MIN_LEVEL {
        bonus = bonus.saturating_add(DURABLE_FEAT_BONUS);
    }
    if bonuses.safeguard_armor {
        bonus = bonus.saturating_add(SAFEGUARD_ARMOR_BASE.saturating_add(total_level));
    }
    if bonuses.berserker_axe {
        bonus = bonus.saturating_add(total_level);
    }

    let sum = [constitution, levels, racial, bonus]
        .into_iter()
        .fold(base, i32::saturating_add);

    MaxHpBreakdown {
        base,
        constitution,
        levels,
        racial,
        bonus,
        total: sum.max(total_level),
        total_level,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{ClassLevel, HpBonuses, Race};

    fn build(classes: Vec<ClassLevel>, constitution_score: i32) -> CharacterBuild {
        CharacterBuild {
            name: "Thorin".into(),
            constitution_score,
            classes,
            ..CharacterBuild::default()
        }
    }

    #[test]
    fn single_class_uses_full_die_then_averages() {
        let fighter = build(vec![ClassLevel::new(CharacterClass::Fighter, 5)], 14);
        let hp = compute_max_hp(&fighter);
        assert_eq!(hp.base, 10);
        assert_eq!(hp.levels, 24);
        assert_eq!(hp.constitution, 10);
        assert_eq!(hp.total, 44);
    }

    #[test]
    fn later_rows_use_average_for_every_level() {
        let multiclass = build(
            vec![
                ClassLevel::new(CharacterClass::Wizard, 3),
                ClassLevel::new(CharacterClass::Barbarian, 2),
            ],
            10,
        );
        let hp = compute_max_hp(&multiclass);
        assert_eq!(hp.base, 6);
        assert_eq!(hp.levels, 4 * 2 + 7 * 2);
        assert_eq!(hp.total, 28);
        assert_eq!(hp.total_level, 5);
    }

    #[test]
    fn race_and_bonuses_scale_with_total_level() {
        let mut dwarf = build(vec![ClassLevel::new(CharacterClass::Cleric, 4)], 12);
        dwarf.race = Race::HillDwarf;
        dwarf.bonuses = HpBonuses {
            tough_feat: true,
            durable_feat: true,
            safeguard_armor: true,
            berserker_axe: true,
            draconic_sorcerer: false,
        };
        let hp = compute_max_hp(&dwarf);
        assert_eq!(hp.racial, 4);
        assert_eq!(hp.bonus, 4 + 4 + 14 + 4);
        assert_eq!(hp.total, 8 + 15 + 4 + 4 + 26);
    }

    #[test]
    fn durable_feat_needs_level_four() {
        let mut low = build(vec![ClassLevel::new(CharacterClass::Rogue, 3)], 10);
        low.bonuses.durable_feat = true;
        assert_eq!(compute_max_hp(&low).bonus, 0);
    }

    #[test]
    fn draconic_bonus_counts_sorcerer_levels_only() {
        let mut sorcerer = build(
            vec![
                ClassLevel::new(CharacterClass::Sorcerer, 3),
                ClassLevel::new(CharacterClass::Warlock, 2),
            ],
            10,
        );
        sorcerer.bonuses.draconic_sorcerer = true;
        let hp = compute_max_hp(&sorcerer);
        assert_eq!(hp.levels, 4 * 2 + 5 * 2 + 3);
        assert_eq!(hp.bonus, 0);
    }

    #[test]
    fn total_is_at_least_one_per_level() {
        let frail = build(vec![ClassLevel::new(CharacterClass::Wizard, 10)], 1);
        let hp = compute_max_hp(&frail);
        assert_eq!(hp.constitution, -50);
        assert_eq!(hp.total, 10);
    }

    #[test]
    fn extreme_constitution_saturates() {
        let mut giant = build(vec![ClassLevel::new(CharacterClass::Barbarian, 20)], i32::MAX);
        giant.bonuses.tough_feat = true;
        let hp = compute_max_hp(&giant);
        assert_eq!(hp.constitution, i32::MAX);
        assert_eq!(hp.total, i32::MAX);

        let husk = build(vec![ClassLevel::new(CharacterClass::Barbarian, 20)], i32::MIN);
        assert_eq!(compute_max_hp(&husk).total, 20);
    }

    #[test]
    fn unknown_class_rows_count_levels_only() {
        let unknown = build(
            vec![ClassLevel {
                class: None,
                level: 3,
            }],
            10,
        );
        let hp = compute_max_hp(&unknown);
        assert_eq!(hp.base, 0);
        assert_eq!(hp.levels, 0);
        assert_eq!(hp.total, 3);
    }
}
