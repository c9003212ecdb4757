//! XP progression: how far a lump XP grant carries a character.

use serde::{Deserialize, Serialize};

use super::xp_table::{xp_for_next_level, xp_to_reach};
use crate::value_objects::Level;

/// What the XP total means for the requested level change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outlook", rename_all = "camelCase")]
pub enum XpOutlook {
    /// No level-up, and none was requested.
    Steady,
    /// No XP threshold exists for the next level.
    NoThreshold,
    /// The next level is not reached yet.
    MissingXp { missing: u32, next_level: Level },
    /// At least one level-up, no higher target requested.
    LevelUpAvailable,
    /// The requested next level is reached.
    TargetReached,
    /// A target several levels up is reached.
    MultiLevelReached,
    /// Leveled up, but the target is further than the XP allows.
    CouldReach { reachable: Level },
}

/// Result of [`compute_progression`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressionResult {
    pub current_level: Level,
    pub target_level: Level,
    pub current_xp: u32,
    pub xp_gained: u32,
    pub new_total_xp: u32,
    /// Highest level reached by consuming thresholds one after another.
    pub reachable_level: Level,
    pub meets_target: bool,
    /// XP still missing for the *next* level (not the target), when the
    /// target is not met and the next level is not reached.
    pub shortfall: Option<u32>,
    /// Threshold of the level right after `current_level`.
    pub next_level_requirement: Option<u32>,
}

impl ProgressionResult {
    pub fn leveled_up(&self) -> bool {
        self.reachable_level > self.current_level
    }

    pub fn outlook(&self) -> XpOutlook {
        let Some(requirement) = self.next_level_requirement else {
            return if self.target_level > self.current_level {
                XpOutlook::NoThreshold
            } else {
                XpOutlook::Steady
            };
        };

        if self.leveled_up() {
            let next = self.current_level.next();
            if Some(self.target_level) == next {
                XpOutlook::TargetReached
            } else if next.is_some_and(|n| self.target_level > n) {
                if self.meets_target {
                    XpOutlook::MultiLevelReached
                } else {
                    XpOutlook::CouldReach {
                        reachable: self.reachable_level,
                    }
                }
            } else {
                XpOutlook::LevelUpAvailable
            }
        } else if self.target_level > self.current_level {
            XpOutlook::MissingXp {
                missing: requirement.saturating_sub(self.new_total_xp),
                next_level: self.current_level.next().unwrap_or(Level::MAX),
            }
        } else {
            XpOutlook::Steady
        }
    }
}

/// Add `xp_gained` to `current_xp` and walk thresholds forward from `current_level`.
///
/// Each step consumes the threshold of the next level, so a large grant may
/// cross several levels. The walk never looks past level 20.
pub fn compute_progression(
    current_xp: u32,
    xp_gained: u32,
    current_level: Level,
    target_level: Level,
) -> ProgressionResult {
    let new_total_xp = current_xp.saturating_add(xp_gained);

    let mut reachable_level = current_level;
    let mut remaining = new_total_xp;
    while let Some(next) = reachable_level.next() {
        let Some(threshold) = xp_to_reach(next) else {
            break;
        };
        if remaining < threshold {
            break;
        }
        remaining -= threshold;
        reachable_level = next;
    }

    let meets_target = target_level <= reachable_level;
    let next_level_requirement = xp_for_next_level(current_level);
    let shortfall = if meets_target {
        None
    } else {
        next_level_requirement
            .filter(|requirement| *requirement > new_total_xp)
            .map(|requirement| requirement - new_total_xp)
    };

    ProgressionResult {
        current_level,
        target_level,
        current_xp,
        xp_gained,
        new_total_xp,
        reachable_level,
        meets_target,
        shortfall,
        next_level_requirement,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progression::xp_table::xp_table_entry;

    fn level(value: u8) -> Level {
        Level::new(value).expect("valid level")
    }

    fn threshold(value: u8) -> u32 {
        xp_table_entry(value).expect("table entry")
    }

    #[test]
    fn exact_threshold_reaches_next_level() {
        let result = compute_progression(0, threshold(2), level(1), level(2));
        assert_eq!(result.reachable_level, level(2));
        assert!(result.meets_target);
        assert_eq!(result.shortfall, None);
        assert_eq!(result.outlook(), XpOutlook::TargetReached);
    }

    #[test]
    fn one_short_reports_shortfall() {
        let result = compute_progression(0, threshold(2) - 1, level(1), level(2));
        assert!(!result.meets_target);
        assert_eq!(result.shortfall, Some(1));
        assert_eq!(
            result.outlook(),
            XpOutlook::MissingXp {
                missing: 1,
                next_level: level(2)
            }
        );
    }

    #[test]
    fn large_grant_crosses_several_levels() {
        // 2 (->2) + 2 (->3) + 3 (->4) = 7, one XP left over.
        let result = compute_progression(1, 7, level(1), level(4));
        assert_eq!(result.new_total_xp, 8);
        assert_eq!(result.reachable_level, level(4));
        assert!(result.meets_target);
        assert_eq!(result.outlook(), XpOutlook::MultiLevelReached);
    }

    #[test]
    fn target_beyond_reach_after_level_up() {
        let result = compute_progression(0, 5, level(1), level(5));
        assert_eq!(result.reachable_level, level(3));
        assert!(!result.meets_target);
        // The next level was reached, so nothing is "missing" for it.
        assert_eq!(result.shortfall, None);
        assert_eq!(
            result.outlook(),
            XpOutlook::CouldReach {
                reachable: level(3)
            }
        );
    }

    #[test]
    fn shortfall_targets_next_level_not_target() {
        let result = compute_progression(0, 1, level(3), level(6));
        assert!(!result.meets_target);
        assert_eq!(result.shortfall, Some(threshold(4) - 1));
    }

    #[test]
    fn level_cap_never_progresses() {
        let result = compute_progression(50, 100, Level::MAX, Level::MAX);
        assert_eq!(result.reachable_level, Level::MAX);
        assert!(result.meets_target);
        assert_eq!(result.next_level_requirement, None);
        assert_eq!(result.outlook(), XpOutlook::Steady);
    }

    #[test]
    fn level_twenty_has_no_xp_threshold() {
        let result = compute_progression(0, 1000, level(19), level(20));
        assert_eq!(result.reachable_level, level(19));
        assert!(!result.meets_target);
        assert_eq!(result.shortfall, None);
        assert_eq!(result.outlook(), XpOutlook::NoThreshold);
    }

    #[test]
    fn lower_target_is_a_no_op() {
        let result = compute_progression(0, 0, level(5), level(3));
        assert!(result.meets_target);
        assert_eq!(result.reachable_level, level(5));
        assert_eq!(result.outlook(), XpOutlook::Steady);
    }

    #[test]
    fn level_up_without_target_change() {
        let result = compute_progression(2, 0, level(1), level(1));
        assert!(result.leveled_up());
        assert_eq!(result.outlook(), XpOutlook::LevelUpAvailable);
    }

    #[test]
    fn identical_inputs_give_identical_results() {
        let first = compute_progression(3, 9, level(2), level(5));
        let second = compute_progression(3, 9, level(2), level(5));
        assert_eq!(first, second);
    }
}
