//! Character card of the hit-point calculator.

use faerun_domain::{CharacterBuild, CharacterClass, ClassLevel, HpBonuses, Race};
use serde::{Deserialize, Serialize};

use super::parse::{non_blank, parse_int_clamped, parse_int_or};

/// One class row: class key and level text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClassRowForm {
    pub class: String,
    pub level: String,
}

impl Default for ClassRowForm {
    fn default() -> Self {
        Self {
            class: CharacterClass::Barbarian.key().to_string(),
            level: "1".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CharacterBuildForm {
    pub name: String,
    pub constitution: String,
    pub race: String,
    pub classes: Vec<ClassRowForm>,
    pub tough_feat: bool,
    pub durable_feat: bool,
    pub safeguard_armor: bool,
    pub berserker_axe: bool,
    pub draconic_sorcerer: bool,
}

impl Default for CharacterBuildForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            constitution: "10".to_string(),
            race: Race::Other.key().to_string(),
            classes: vec![ClassRowForm::default()],
            tough_feat: false,
            durable_feat: false,
            safeguard_armor: false,
            berserker_axe: false,
            draconic_sorcerer: false,
        }
    }
}

impl CharacterBuildForm {
    /// Build the calculator record.
    ///
    /// CON defaults to 10, levels to 1 (clamped into 1..=20). Unknown races
    /// count as "other"; unknown classes keep their levels but no hit die.
    pub fn to_build(&self) -> CharacterBuild {
        let race = self.race.parse::<Race>().unwrap_or_else(|err| {
            tracing::debug!(race = %self.race, error = %err, "Unknown race, using default");
            Race::Other
        });

        let classes = self
            .classes
            .iter()
            .map(|row| ClassLevel {
                class: CharacterClass::from_name(&row.class),
                level: parse_int_clamped(&row.level, 1, 1, 20) as u8,
            })
            .collect();

        CharacterBuild {
            name: non_blank(&self.name).unwrap_or_default().to_string(),
            constitution_score: parse_int_or(&self.constitution, 10).clamp(1, 30) as i32,
            race,
            classes,
            bonuses: HpBonuses {
                tough_feat: self.tough_feat,
                durable_feat: self.durable_feat,
                safeguard_armor: self.safeguard_armor,
                berserker_axe: self.berserker_axe,
                draconic_sorcerer: self.draconic_sorcerer,
            },
        }
    }
}

/// The calculator page: one card per character, never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HpCalculatorForm {
    pub characters: Vec<CharacterBuildForm>,
}

impl Default for HpCalculatorForm {
    fn default() -> Self {
        Self {
            characters: vec![CharacterBuildForm::default()],
        }
    }
}

impl HpCalculatorForm {
    /// An empty list becomes the single default card.
    pub fn new(characters: Vec<CharacterBuildForm>) -> Self {
        if characters.is_empty() {
            Self::default()
        } else {
            Self { characters }
        }
    }

    pub fn to_builds(&self) -> Vec<CharacterBuild> {
        self.characters.iter().map(CharacterBuildForm::to_build).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_card_is_a_level_one_barbarian() {
        let build = CharacterBuildForm::default().to_build();
        assert_eq!(build, CharacterBuild::default());
    }

    #[test]
    fn rows_parse_leniently() {
        let form = CharacterBuildForm {
            name: " Thorin ".into(),
            constitution: "".into(),
            race: "nain-collines".into(),
            classes: vec![
                ClassRowForm {
                    class: "guerrier".into(),
                    level: "abc".into(),
                },
                ClassRowForm {
                    class: "necromancien".into(),
                    level: "3".into(),
                },
            ],
            ..CharacterBuildForm::default()
        };
        let build = form.to_build();
        assert_eq!(build.name, "Thorin");
        assert_eq!(build.constitution_score, 10);
        assert_eq!(build.race, Race::HillDwarf);
        assert_eq!(build.classes[0], ClassLevel::new(CharacterClass::Fighter, 1));
        assert_eq!(build.classes[1].class, None);
        assert_eq!(build.total_level(), 4);
    }

    #[test]
    fn unknown_race_falls_back_to_other() {
        let form = CharacterBuildForm {
            race: "elfe".into(),
            ..CharacterBuildForm::default()
        };
        assert_eq!(form.to_build().race, Race::Other);
    }

    #[test]
    fn calculator_form_is_never_empty() {
        assert_eq!(HpCalculatorForm::new(Vec::new()), HpCalculatorForm::default());
        assert_eq!(HpCalculatorForm::default().to_builds().len(), 1);

        let parsed: HpCalculatorForm = serde_json::from_str(r#"{"characters": []}"#).unwrap();
        assert!(parsed.characters.is_empty());
        assert_eq!(HpCalculatorForm::new(parsed.characters).characters.len(), 1);
    }
}
