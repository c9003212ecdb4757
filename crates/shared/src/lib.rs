//! Faerun Shared - form layer and message rendering
//!
//! Sits between raw form input and the calculator:
//! - Typed form records with lenient parsing (`form`)
//! - One full recalculation pass (`report`)
//! - Discord message rendering and the 1800-character split (`message`)
//!
//! # Design Principles
//!
//! 1. **Never fail on input** - bad fields default, problems become warnings
//! 2. **No I/O** - snapshots and the command line live in the engine

pub mod form;
pub mod message;
pub mod report;

pub use form::{
    CharacterBuildForm, ClassRowForm, FormWarning, HpCalculatorForm, QuestForm, SheetUpdateForm,
    SpecialActivity,
};
pub use message::{
    length_status, render_hp_breakdown, render_hp_gain, render_sheet_update, split_for_discord,
    unfilled_placeholders, DiscordMessage,
};
pub use report::SheetUpdateReport;
