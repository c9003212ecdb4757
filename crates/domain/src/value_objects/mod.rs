//! Value objects for the progression calculator

mod currency;
mod hp_bonus;
mod level;

pub use currency::{format_gold_equivalent, format_signed, CurrencyTotal, Denomination};
pub use hp_bonus::FlatHpBonus;
pub use level::Level;
