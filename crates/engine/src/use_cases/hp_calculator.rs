//! Maximum hit points for a list of character cards.

use std::sync::Arc;

use faerun_domain::{compute_max_hp, CharacterBuild, MaxHpBreakdown};
use faerun_shared::{render_hp_breakdown, HpCalculatorForm};

use crate::infrastructure::{Autosave, AutosaveOutcome, SaveMode};

#[derive(Debug, Clone)]
pub struct CharacterHp {
    pub build: CharacterBuild,
    pub breakdown: MaxHpBreakdown,
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct MaxHpReport {
    pub characters: Vec<CharacterHp>,
    pub autosave: AutosaveOutcome,
}

pub struct CalculateMaxHp {
    autosave: Arc<Autosave<HpCalculatorForm>>,
}

impl CalculateMaxHp {
    pub fn new(autosave: Arc<Autosave<HpCalculatorForm>>) -> Self {
        Self { autosave }
    }

    pub fn restore(&self) -> HpCalculatorForm {
        self.autosave.restore()
    }

    pub fn execute(&self, form: &HpCalculatorForm, save: SaveMode) -> MaxHpReport {
        let form = HpCalculatorForm::new(form.characters.clone());

        let characters = form
            .to_builds()
            .into_iter()
            .map(|build| {
                let breakdown = compute_max_hp(&build);
                let text = render_hp_breakdown(&build, &breakdown);
                CharacterHp {
                    build,
                    breakdown,
                    text,
                }
            })
            .collect::<Vec<_>>();

        tracing::info!(characters = characters.len(), "Maximum hit points computed");

        MaxHpReport {
            characters,
            autosave: self.autosave.save(&form, save),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::FixedClock;
    use crate::infrastructure::ports::MockSnapshotStore;
    use chrono::{TimeZone, Utc};
    use faerun_shared::{CharacterBuildForm, ClassRowForm};
    use std::time::Duration;

    fn use_case(store: MockSnapshotStore) -> CalculateMaxHp {
        let clock = FixedClock(Utc.with_ymd_and_hms(2025, 6, 15, 10, 30, 0).unwrap());
        CalculateMaxHp::new(Arc::new(Autosave::new(
            Arc::new(store),
            Arc::new(clock),
            "calculateur-pv.json",
            Duration::from_secs(30),
        )))
    }

    fn saving_store() -> MockSnapshotStore {
        let mut store = MockSnapshotStore::new();
        store.expect_load().returning(|_| Ok(None));
        store.expect_save().returning(|_, _| Ok(()));
        store
    }

    #[test]
    fn empty_list_computes_the_default_card() {
        let form = HpCalculatorForm {
            characters: Vec::new(),
        };
        let report = use_case(saving_store()).execute(&form, SaveMode::Now);

        assert_eq!(report.characters.len(), 1);
        // Level 1 barbarian, CON 10.
        assert_eq!(report.characters[0].breakdown.total, 12);
        assert_eq!(report.autosave, AutosaveOutcome::Saved);
    }

    #[test]
    fn each_card_gets_its_own_breakdown() {
        let form = HpCalculatorForm::new(vec![
            CharacterBuildForm {
                name: "Thorin".into(),
                constitution: "14".into(),
                classes: vec![ClassRowForm {
                    class: "guerrier".into(),
                    level: "3".into(),
                }],
                ..CharacterBuildForm::default()
            },
            CharacterBuildForm {
                name: "Elminster".into(),
                classes: vec![ClassRowForm {
                    class: "magicien".into(),
                    level: "1".into(),
                }],
                ..CharacterBuildForm::default()
            },
        ]);

        let report = use_case(saving_store()).execute(&form, SaveMode::IfDue);

        assert_eq!(report.characters.len(), 2);
        // 10 + 6 + 6 + CON 2 * 3
        assert_eq!(report.characters[0].breakdown.total, 28);
        assert!(report.characters[0].text.ends_with("Thorin - Niveau total: 3"));
        assert_eq!(report.characters[1].breakdown.total, 6);
    }
}
