//! Form warnings.
//!
//! Validation never blocks rendering: every warning is shown next to the
//! message and the calculator still runs on the defaulted values.

use std::fmt;

use faerun_domain::{primary_class, Level, DEFAULT_AVERAGE_HP_PER_LEVEL};

use super::parse::{non_blank, parse_int_or};
use super::sheet::SheetUpdateForm;

/// Largest coin count per field, in either direction.
pub const MAX_COINS: i64 = 1_000_000_000;
pub const MAX_CONSTITUTION_MODIFIER: i32 = 30;
pub const MAX_HP: i32 = 100_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormWarning {
    TargetNotAboveCurrent { current: i64, target: i64 },
    LevelOutOfRange { value: i64 },
    NegativeValue { field: &'static str, value: i64 },
    UnknownClass { label: String },
    /// The calculator used `clamped_to` instead of the typed value.
    ValueClamped { field: String, value: i64, clamped_to: i64 },
}

impl fmt::Display for FormWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormWarning::TargetNotAboveCurrent { .. } => {
                write!(f, "Le nouveau niveau doit être supérieur au niveau actuel")
            }
            FormWarning::LevelOutOfRange { .. } => {
                write!(f, "Les niveaux doivent être entre 1 et 20")
            }
            FormWarning::NegativeValue { field, value } => {
                write!(f, "{} ne peut pas être négatif ({})", field, value)
            }
            FormWarning::UnknownClass { label } => write!(
                f,
                "Classe inconnue « {} » : {} PV par niveau utilisés",
                label, DEFAULT_AVERAGE_HP_PER_LEVEL
            ),
            FormWarning::ValueClamped { field, clamped_to, .. } => {
                write!(f, "{} hors limites : {} utilisé", field, clamped_to)
            }
        }
    }
}

impl SheetUpdateForm {
    /// Check the raw fields and list what looks wrong, in field order.
    pub fn validate(&self) -> Vec<FormWarning> {
        let mut warnings = Vec::new();
        let min = i64::from(Level::MIN.value());
        let max = i64::from(Level::MAX.value());

        let current = parse_int_or(&self.current_level, min);
        let target = non_blank(&self.target_level).map(|raw| parse_int_or(raw, min));

        for value in std::iter::once(current).chain(target) {
            if !(min..=max).contains(&value) {
                warnings.push(FormWarning::LevelOutOfRange { value });
                break;
            }
        }

        if let Some(target) = target {
            if target <= current {
                warnings.push(FormWarning::TargetNotAboveCurrent { current, target });
            } else if primary_class(&self.leveling_class_label()).is_none() {
                warnings.push(FormWarning::UnknownClass {
                    label: self.leveling_class_label(),
                });
            }
        }

        for (field, raw) in [("XP actuels", &self.current_xp), ("PV actuels", &self.current_hp)] {
            let value = parse_int_or(raw, 0);
            if value < 0 {
                warnings.push(FormWarning::NegativeValue { field, value });
            }
        }

        let bounded = [
            ("PV actuels", &self.current_hp, i64::from(MAX_HP)),
            (
                "Modificateur de CON",
                &self.constitution_modifier,
                i64::from(MAX_CONSTITUTION_MODIFIER),
            ),
            ("Or looté", &self.looted_gold, MAX_COINS),
            ("Or reçu", &self.gold_received, MAX_COINS),
        ];
        for (field, raw, limit) in bounded {
            warnings.extend(clamp_warning(field.to_string(), raw, limit));
        }

        for (index, quest) in self.quests.iter().enumerate() {
            for (denomination, raw) in quest.coin_fields() {
                let field = format!("Quête {} ({})", index + 1, denomination.label());
                warnings.extend(clamp_warning(field, raw, MAX_COINS));
            }
        }

        warnings
    }
}

fn clamp_warning(field: String, raw: &str, limit: i64) -> Option<FormWarning> {
    let value = parse_int_or(raw, 0);
    let clamped_to = value.clamp(-limit, limit);
    (clamped_to != value).then_some(FormWarning::ValueClamped {
        field,
        value,
        clamped_to,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::QuestForm;

    fn form(current: &str, target: &str) -> SheetUpdateForm {
        SheetUpdateForm {
            class: "Magicien".into(),
            current_level: current.into(),
            target_level: target.into(),
            ..SheetUpdateForm::default()
        }
    }

    #[test]
    fn valid_level_up_has_no_warning() {
        assert!(form("3", "4").validate().is_empty());
        assert!(form("3", "").validate().is_empty());
    }

    #[test]
    fn target_must_be_above_current() {
        let warnings = form("5", "5").validate();
        assert_eq!(
            warnings,
            vec![FormWarning::TargetNotAboveCurrent {
                current: 5,
                target: 5
            }]
        );
        assert_eq!(
            warnings[0].to_string(),
            "Le nouveau niveau doit être supérieur au niveau actuel"
        );
    }

    #[test]
    fn out_of_range_levels_are_reported_once() {
        let warnings = form("0", "25").validate();
        assert_eq!(warnings[0], FormWarning::LevelOutOfRange { value: 0 });
        assert_eq!(
            warnings
                .iter()
                .filter(|w| matches!(w, FormWarning::LevelOutOfRange { .. }))
                .count(),
            1
        );
    }

    #[test]
    fn negative_xp_and_hp_are_flagged() {
        let mut negative = form("1", "");
        negative.current_xp = "-2".into();
        negative.current_hp = "-1".into();
        assert_eq!(negative.validate().len(), 2);
    }

    #[test]
    fn oversized_numbers_are_reported_with_the_value_used() {
        let mut hoard = form("1", "");
        hoard.constitution_modifier = "999999999".into();
        hoard.quests = vec![QuestForm {
            platinum: "9223372036854775807".into(),
            ..QuestForm::default()
        }];

        let warnings = hoard.validate();
        assert_eq!(
            warnings,
            vec![
                FormWarning::ValueClamped {
                    field: "Modificateur de CON".into(),
                    value: 999_999_999,
                    clamped_to: 30,
                },
                FormWarning::ValueClamped {
                    field: "Quête 1 (PP)".into(),
                    value: i64::MAX,
                    clamped_to: MAX_COINS,
                },
            ]
        );
        assert_eq!(
            warnings[0].to_string(),
            "Modificateur de CON hors limites : 30 utilisé"
        );
    }

    #[test]
    fn unknown_leveling_class_mentions_fallback() {
        let mut unknown = form("1", "2");
        unknown.class = "Necromancien".into();
        let warnings = unknown.validate();
        assert_eq!(
            warnings[0].to_string(),
            "Classe inconnue « Necromancien » : 5 PV par niveau utilisés"
        );
    }
}
