//! Character state as read from a form, rebuilt on every recalculation.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::entities::class_definition::CharacterClass;
use crate::error::DomainError;
use crate::value_objects::Level;

/// Progress-related fields of a character sheet update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterProgressState {
    pub current_level: Level,
    pub target_level: Level,
    pub current_xp: u32,
    pub constitution_modifier: i32,
    pub current_hp: i32,
    /// Class label as typed, possibly a multiclass label ("Magicien 3 / Guerrier 2").
    pub primary_class: String,
}

impl CharacterProgressState {
    /// Whether the update asks for at least one new level.
    pub fn is_leveling(&self) -> bool {
        self.target_level > self.current_level
    }
}

/// Race options that change hit points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Race {
    #[default]
    Other,
    HillDwarf,
    HalfOrc,
}

impl Race {
    pub fn key(&self) -> &'static str {
        match self {
            Race::Other => "autre",
            Race::HillDwarf => "nain-collines",
            Race::HalfOrc => "demi-orc",
        }
    }

    /// +1 HP per character level.
    pub fn grants_hp_per_level(&self) -> bool {
        matches!(self, Race::HillDwarf | Race::HalfOrc)
    }
}

impl FromStr for Race {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "autre" | "" => Ok(Race::Other),
            "nain-collines" => Ok(Race::HillDwarf),
            "demi-orc" => Ok(Race::HalfOrc),
            other => Err(DomainError::parse(format!("Unknown race: {}", other))),
        }
    }
}

/// One class row of a (possibly multiclass) build.
///
/// `class` is `None` when the row names a class missing from the table; its
/// levels still count towards the total character level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassLevel {
    pub class: Option<CharacterClass>,
    pub level: u8,
}

impl ClassLevel {
    pub fn new(class: CharacterClass, level: u8) -> Self {
        Self {
            class: Some(class),
            level,
        }
    }
}

/// Feats and magic items that add hit points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HpBonuses {
    /// +1 HP per character level.
    pub tough_feat: bool,
    /// +4 HP once the character reaches level 4.
    pub durable_feat: bool,
    /// +10 HP plus 1 per character level.
    pub safeguard_armor: bool,
    /// +1 HP per character level.
    pub berserker_axe: bool,
    /// +1 HP per sorcerer level.
    pub draconic_sorcerer: bool,
}

/// Everything the full hit-point calculator needs about one character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterBuild {
    pub name: String,
    pub constitution_score: i32,
    pub race: Race,
    pub classes: Vec<ClassLevel>,
    pub bonuses: HpBonuses,
}

impl Default for CharacterBuild {
    fn default() -> Self {
        Self {
            name: String::new(),
            constitution_score: 10,
            race: Race::Other,
            classes: vec![ClassLevel::new(CharacterClass::Barbarian, 1)],
            bonuses: HpBonuses::default(),
        }
    }
}

impl CharacterBuild {
    pub fn total_level(&self) -> u32 {
        self.classes.iter().map(|c| c.level as u32).sum()
    }

    /// `floor((CON - 10) / 2)`.
    pub fn constitution_modifier(&self) -> i32 {
        self.constitution_score.saturating_sub(10).div_euclid(2)
    }

    pub fn levels_in(&self, class: CharacterClass) -> u32 {
        self.classes
            .iter()
            .filter(|c| c.class == Some(class))
            .map(|c| c.level as u32)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constitution_modifier_rounds_down() {
        let mut build = CharacterBuild::default();
        for (score, modifier) in [(1, -5), (8, -1), (9, -1), (10, 0), (11, 0), (14, 2), (20, 5)] {
            build.constitution_score = score;
            assert_eq!(build.constitution_modifier(), modifier, "CON {}", score);
        }
    }

    #[test]
    fn levels_are_summed_across_classes() {
        let build = CharacterBuild {
            classes: vec![
                ClassLevel::new(CharacterClass::Sorcerer, 3),
                ClassLevel::new(CharacterClass::Warlock, 2),
                ClassLevel {
                    class: None,
                    level: 1,
                },
            ],
            ..CharacterBuild::default()
        };
        assert_eq!(build.total_level(), 6);
        assert_eq!(build.levels_in(CharacterClass::Sorcerer), 3);
        assert_eq!(build.levels_in(CharacterClass::Wizard), 0);
    }

    #[test]
    fn race_keys_parse() {
        assert_eq!("nain-collines".parse::<Race>().ok(), Some(Race::HillDwarf));
        assert_eq!("demi-orc".parse::<Race>().ok(), Some(Race::HalfOrc));
        assert_eq!("autre".parse::<Race>().ok(), Some(Race::Other));
        assert!("elfe".parse::<Race>().is_err());
        assert!(Race::HalfOrc.grants_hp_per_level());
        assert!(!Race::Other.grants_hp_per_level());
    }

    #[test]
    fn leveling_requires_higher_target() {
        let mut state = CharacterProgressState {
            current_level: Level::clamped(4),
            target_level: Level::clamped(5),
            ..CharacterProgressState::default()
        };
        assert!(state.is_leveling());
        state.target_level = Level::clamped(3);
        assert!(!state.is_leveling());
    }
}
