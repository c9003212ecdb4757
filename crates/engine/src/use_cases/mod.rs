//! Use cases - form in, calculator, message out.
//!
//! Each use case recomputes everything from the form it is given and
//! snapshots that form on the way through, according to a [`SaveMode`].
//!
//! [`SaveMode`]: crate::infrastructure::SaveMode

pub mod hp_calculator;
pub mod sheet_update;

pub use hp_calculator::{CalculateMaxHp, CharacterHp, MaxHpReport};
pub use sheet_update::{RenderSheetUpdate, RenderedUpdate};
