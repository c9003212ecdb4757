//! Faerun Domain - progression calculator for sheet updates.
//!
//! Static tables (XP thresholds, class hit dice), value objects, and the pure
//! functions that turn a character state plus quest rewards into XP, level,
//! currency and hit point results. Nothing here performs I/O or logs.

pub mod entities;
pub mod error;
pub mod progression;
pub mod value_objects;

pub use entities::{
    class_table, primary_class, primary_class_name, CharacterBuild, CharacterClass,
    CharacterProgressState, ClassDefinition, ClassLevel, Flow, HpBonuses, QuestInput, QuestLink,
    Race, RewardBatch, RewardEntry, RewardKind, RewardToggles, DEFAULT_AVERAGE_HP_PER_LEVEL,
};

pub use error::DomainError;

pub use progression::{
    aggregate_quests, compute_hp_gain, compute_max_hp, compute_progression, normalize_currency,
    xp_for_next_level, xp_table_entry, xp_to_reach, CurrencyNormalization, HpBreakdown, HpGain,
    MaxHpBreakdown, ProgressionResult, QuestAggregate, QuestSummary, XpOutlook,
};

pub use value_objects::{
    format_gold_equivalent, format_signed, CurrencyTotal, Denomination, FlatHpBonus, Level,
};
