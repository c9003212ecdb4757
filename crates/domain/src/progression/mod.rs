//! The progression calculator.
//!
//! Every function here is a pure transformation over plain records: no
//! state survives between calls, and bad input never makes them fail.

mod currency;
mod hp;
mod max_hp;
mod quests;
mod xp;
mod xp_table;

pub use currency::{normalize_currency, CurrencyNormalization};
pub use hp::{compute_hp_gain, HpBreakdown, HpGain};
pub use max_hp::{compute_max_hp, MaxHpBreakdown};
pub use quests::{aggregate_quests, QuestAggregate, QuestSummary};
pub use xp::{compute_progression, ProgressionResult, XpOutlook};
pub use xp_table::{xp_for_next_level, xp_table_entry, xp_to_reach};
