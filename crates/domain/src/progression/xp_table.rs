//! Server XP table.
//!
//! Entry `L` is the XP a character must bank, starting from level `L - 1`,
//! to reach level `L`. XP is counted per level, not cumulatively: leveling
//! up consumes the threshold. The terminal entry is 0, meaning "no XP
//! threshold": level 20 is never reached through XP.

use crate::value_objects::Level;

const XP_TABLE: [u32; 20] = [
    1,  // Level 1
    2,  // Level 2
    2,  // Level 3
    3,  // Level 4
    3,  // Level 5
    4,  // Level 6
    4,  // Level 7
    4,  // Level 8
    4,  // Level 9
    4,  // Level 10
    5,  // Level 11
    5,  // Level 12
    5,  // Level 13
    6,  // Level 14
    6,  // Level 15
    7,  // Level 16
    8,  // Level 17
    9,  // Level 18
    10, // Level 19
    0,  // Level 20
];

/// Raw table entry for `level` (1..=20). `None` outside the table.
pub fn xp_table_entry(level: u8) -> Option<u32> {
    if level == 0 || level as usize > XP_TABLE.len() {
        return None;
    }
    Some(XP_TABLE[(level - 1) as usize])
}

/// XP needed to reach `level` from the level below, if a threshold exists.
pub fn xp_to_reach(level: Level) -> Option<u32> {
    xp_table_entry(level.value()).filter(|threshold| *threshold > 0)
}

/// XP needed to leave `current` for the next level; `None` at the cap.
pub fn xp_for_next_level(current: Level) -> Option<u32> {
    current.next().and_then(xp_to_reach)
}
