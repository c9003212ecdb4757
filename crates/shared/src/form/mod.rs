//! Typed form records and lenient field parsing.

mod build;
mod parse;
mod quest;
mod sheet;
mod validation;

pub use build::{CharacterBuildForm, ClassRowForm, HpCalculatorForm};
pub use parse::{non_blank, parse_count, parse_int_clamped, parse_int_or, parse_int_within};
pub use quest::QuestForm;
pub use sheet::{SheetUpdateForm, SpecialActivity};
pub use validation::{FormWarning, MAX_COINS, MAX_CONSTITUTION_MODIFIER, MAX_HP};
