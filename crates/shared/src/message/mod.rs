//! Discord message rendering.

mod hp;
mod placeholders;
mod sheet_update;
mod split;

pub use hp::{render_hp_breakdown, render_hp_gain};
pub use placeholders::unfilled_placeholders;
pub use sheet_update::render_sheet_update;
pub use split::{
    length_status, split_for_discord, DiscordMessage, DISCORD_HARD_LIMIT, DISCORD_SAFE_LENGTH,
};
