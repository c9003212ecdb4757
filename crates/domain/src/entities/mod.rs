//! Plain data the calculator consumes.
//!
//! Nothing here is persisted as an object: the form layer rebuilds these
//! records from field values on every recalculation.

mod character;
mod class_definition;
mod quest;
mod reward;

pub use character::{CharacterBuild, CharacterProgressState, ClassLevel, HpBonuses, Race};
pub use class_definition::{
    class_table, primary_class, primary_class_name, CharacterClass, ClassDefinition,
    DEFAULT_AVERAGE_HP_PER_LEVEL,
};
pub use quest::{QuestInput, QuestLink, RewardToggles};
pub use reward::{Flow, RewardBatch, RewardEntry, RewardKind};
