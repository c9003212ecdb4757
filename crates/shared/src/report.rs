//! One recalculation pass over the sheet-update form.

use faerun_domain::{
    aggregate_quests, compute_hp_gain, compute_progression, normalize_currency,
    CharacterProgressState, CurrencyNormalization, CurrencyTotal, HpGain, ProgressionResult,
    QuestAggregate, RewardEntry,
};

use crate::form::{FormWarning, SheetUpdateForm};

/// Everything the renderer needs, computed fresh from the form.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetUpdateReport {
    pub state: CharacterProgressState,
    pub quests: QuestAggregate,
    pub progression: ProgressionResult,
    pub hp: HpGain,
    /// Quest currency plus gold looted outside quests.
    pub looted: CurrencyTotal,
    /// Looted currency plus gold received, in gold.
    pub balance_change: CurrencyNormalization,
    pub warnings: Vec<FormWarning>,
}

impl SheetUpdateReport {
    pub fn compute(form: &SheetUpdateForm) -> Self {
        let state = form.to_state();
        let quests = aggregate_quests(&form.to_quests());

        let progression = compute_progression(
            state.current_xp,
            quests.total_xp,
            state.current_level,
            state.target_level,
        );
        let hp = compute_hp_gain(
            &state.primary_class,
            state.current_level,
            state.target_level,
            state.constitution_modifier,
            &form.hp_bonus,
            state.current_hp,
        );

        let looted = quests.currency_totals + CurrencyTotal::gold(form.looted_gold());
        let balance_change = normalize_currency(&[
            RewardEntry::gain(looted),
            RewardEntry::gain(CurrencyTotal::gold(form.gold_received())),
        ]);

        let warnings = form.validate();

        tracing::debug!(
            quests = quests.per_quest.len(),
            total_xp = quests.total_xp,
            reachable_level = %progression.reachable_level,
            new_hp = hp.new_hp,
            warnings = warnings.len(),
            "Sheet update recalculated"
        );

        Self {
            state,
            quests,
            progression,
            hp,
            looted,
            balance_change,
            warnings,
        }
    }
}
