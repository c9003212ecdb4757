//! Character classes and their hit dice.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Average HP per level used when a class label cannot be resolved.
pub const DEFAULT_AVERAGE_HP_PER_LEVEL: u8 = 5;

/// A playable class on the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CharacterClass {
    Artificer,
    Barbarian,
    Bard,
    BloodHunter,
    Cleric,
    Druid,
    Fighter,
    Monk,
    Paladin,
    Ranger,
    Rogue,
    Sorcerer,
    Warlock,
    Wizard,
}

/// Static row of the class table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassDefinition {
    pub class: CharacterClass,
    pub name: &'static str,
    pub hit_die_size: u8,
    pub average_hp_per_level: u8,
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 14] = [
        CharacterClass::Barbarian,
        CharacterClass::Fighter,
        CharacterClass::Paladin,
        CharacterClass::Ranger,
        CharacterClass::BloodHunter,
        CharacterClass::Artificer,
        CharacterClass::Bard,
        CharacterClass::Cleric,
        CharacterClass::Druid,
        CharacterClass::Monk,
        CharacterClass::Warlock,
        CharacterClass::Rogue,
        CharacterClass::Sorcerer,
        CharacterClass::Wizard,
    ];

    /// Form key (lowercase, unaccented).
    pub fn key(&self) -> &'static str {
        match self {
            CharacterClass::Artificer => "artificier",
            CharacterClass::Barbarian => "barbare",
            CharacterClass::Bard => "barde",
            CharacterClass::BloodHunter => "sanguin",
            CharacterClass::Cleric => "clerc",
            CharacterClass::Druid => "druide",
            CharacterClass::Fighter => "guerrier",
            CharacterClass::Monk => "moine",
            CharacterClass::Paladin => "paladin",
            CharacterClass::Ranger => "rodeur",
            CharacterClass::Rogue => "roublard",
            CharacterClass::Sorcerer => "ensorceleur",
            CharacterClass::Warlock => "occultiste",
            CharacterClass::Wizard => "magicien",
        }
    }

    /// Name as displayed on sheets.
    pub fn display_name(&self) -> &'static str {
        match self {
            CharacterClass::Artificer => "Artificier",
            CharacterClass::Barbarian => "Barbare",
            CharacterClass::Bard => "Barde",
            CharacterClass::BloodHunter => "Sanguin",
            CharacterClass::Cleric => "Clerc",
            CharacterClass::Druid => "Druide",
            CharacterClass::Fighter => "Guerrier",
            CharacterClass::Monk => "Moine",
            CharacterClass::Paladin => "Paladin",
            CharacterClass::Ranger => "Rôdeur",
            CharacterClass::Rogue => "Roublard",
            CharacterClass::Sorcerer => "Ensorceleur",
            CharacterClass::Warlock => "Occultiste",
            CharacterClass::Wizard => "Magicien",
        }
    }

    pub fn hit_die(&self) -> u8 {
        match self {
            CharacterClass::Barbarian => 12,
            CharacterClass::Fighter
            | CharacterClass::Paladin
            | CharacterClass::Ranger
            | CharacterClass::BloodHunter => 10,
            CharacterClass::Artificer
            | CharacterClass::Bard
            | CharacterClass::Cleric
            | CharacterClass::Druid
            | CharacterClass::Monk
            | CharacterClass::Warlock
            | CharacterClass::Rogue => 8,
            CharacterClass::Sorcerer | CharacterClass::Wizard => 6,
        }
    }

    /// Average roll, rounded up: `floor(hitDie / 2) + 1`.
    pub fn average_hp_per_level(&self) -> u8 {
        self.hit_die() / 2 + 1
    }

    pub fn definition(&self) -> ClassDefinition {
        ClassDefinition {
            class: *self,
            name: self.display_name(),
            hit_die_size: self.hit_die(),
            average_hp_per_level: self.average_hp_per_level(),
        }
    }

    /// Resolve a class from a form key, French display name or English name.
    ///
    /// Matching ignores case, surrounding whitespace and French accents.
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized = fold_accents(name.trim());
        let class = match normalized.as_str() {
            "artificier" | "artificer" => CharacterClass::Artificer,
            "barbare" | "barbarian" => CharacterClass::Barbarian,
            "barde" | "bard" => CharacterClass::Bard,
            "sanguin" | "blood-hunter" | "bloodhunter" => CharacterClass::BloodHunter,
            "clerc" | "cleric" => CharacterClass::Cleric,
            "druide" | "druid" => CharacterClass::Druid,
            "guerrier" | "fighter" => CharacterClass::Fighter,
            "moine" | "monk" => CharacterClass::Monk,
            "paladin" => CharacterClass::Paladin,
            "rodeur" | "ranger" => CharacterClass::Ranger,
            "roublard" | "rogue" => CharacterClass::Rogue,
            "ensorceleur" | "sorcerer" => CharacterClass::Sorcerer,
            "occultiste" | "warlock" => CharacterClass::Warlock,
            "magicien" | "wizard" => CharacterClass::Wizard,
            _ => return None,
        };
        Some(class)
    }
}

impl FromStr for CharacterClass {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| DomainError::parse(format!("Unknown class: {}", s)))
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Full class table, one row per class.
pub fn class_table() -> Vec<ClassDefinition> {
    CharacterClass::ALL.iter().map(|c| c.definition()).collect()
}

/// The class name that drives per-level lookups in a sheet class label.
///
/// Multiclass labels are joined by `/` ("Magicien 3 / Guerrier 2"); only the
/// first listed class is used, and any trailing level number is dropped.
pub fn primary_class_name(label: &str) -> &str {
    let first = label.split('/').next().unwrap_or_default().trim();
    first.split_whitespace().next().unwrap_or_default()
}

/// Resolve the primary class of a sheet class label.
pub fn primary_class(label: &str) -> Option<CharacterClass> {
    CharacterClass::from_name(primary_class_name(label))
}

fn fold_accents(input: &str) -> String {
    input
        .chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'à' | 'â' | 'ä' => 'a',
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'î' | 'ï' => 'i',
            'ô' | 'ö' => 'o',
            'ù' | 'û' | 'ü' => 'u',
            'ç' => 'c',
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_die_by_class() {
        assert_eq!(CharacterClass::Barbarian.hit_die(), 12);
        assert_eq!(CharacterClass::Fighter.hit_die(), 10);
        assert_eq!(CharacterClass::BloodHunter.hit_die(), 10);
        assert_eq!(CharacterClass::Cleric.hit_die(), 8);
        assert_eq!(CharacterClass::Wizard.hit_die(), 6);
    }

    #[test]
    fn average_is_half_die_plus_one() {
        for definition in class_table() {
            assert_eq!(
                definition.average_hp_per_level,
                definition.hit_die_size / 2 + 1,
                "{}",
                definition.name
            );
        }
        assert_eq!(CharacterClass::Wizard.average_hp_per_level(), 4);
        assert_eq!(CharacterClass::Barbarian.average_hp_per_level(), 7);
    }

    #[test]
    fn from_name_accepts_keys_french_and_english_names() {
        assert_eq!(CharacterClass::from_name("magicien"), Some(CharacterClass::Wizard));
        assert_eq!(CharacterClass::from_name("Wizard"), Some(CharacterClass::Wizard));
        assert_eq!(CharacterClass::from_name(" Rôdeur "), Some(CharacterClass::Ranger));
        assert_eq!(CharacterClass::from_name("RODEUR"), Some(CharacterClass::Ranger));
        assert_eq!(CharacterClass::from_name("necromancien"), None);
    }

    #[test]
    fn from_str_reports_unknown_class() {
        let err = "necromancien"
            .parse::<CharacterClass>()
            .expect_err("unknown class");
        assert!(matches!(err, DomainError::Parse(_)));
    }

    #[test]
    fn keys_round_trip_through_from_name() {
        for class in CharacterClass::ALL {
            assert_eq!(CharacterClass::from_name(class.key()), Some(class));
            assert_eq!(CharacterClass::from_name(class.display_name()), Some(class));
        }
    }

    #[test]
    fn primary_class_uses_first_multiclass_entry() {
        assert_eq!(primary_class_name("Magicien 3 / Guerrier 2"), "Magicien");
        assert_eq!(primary_class_name("Clerc"), "Clerc");
        assert_eq!(primary_class_name(""), "");
        assert_eq!(
            primary_class("Guerrier 5/Magicien 1"),
            Some(CharacterClass::Fighter)
        );
        assert_eq!(primary_class("[CLASSE]"), None);
    }
}
