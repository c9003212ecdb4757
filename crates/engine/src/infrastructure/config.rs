//! Environment configuration.
//!
//! | Variable                | Default               |
//! |-------------------------|-----------------------|
//! | `FAERUN_DATA_DIR`       | `.faerun`             |
//! | `FAERUN_SHEET_SNAPSHOT` | `maj-fiche.json`      |
//! | `FAERUN_HP_SNAPSHOT`    | `calculateur-pv.json` |
//! | `FAERUN_AUTOSAVE_SECS`  | `30`                  |

use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_DATA_DIR: &str = ".faerun";
const DEFAULT_SHEET_SNAPSHOT: &str = "maj-fiche.json";
const DEFAULT_HP_SNAPSHOT: &str = "calculateur-pv.json";
const DEFAULT_AUTOSAVE_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub sheet_snapshot: String,
    pub hp_snapshot: String,
    /// Minimum age before an unchanged snapshot is rewritten.
    pub autosave_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            sheet_snapshot: DEFAULT_SHEET_SNAPSHOT.to_string(),
            hp_snapshot: DEFAULT_HP_SNAPSHOT.to_string(),
            autosave_interval: Duration::from_secs(DEFAULT_AUTOSAVE_SECS),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable source. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let defaults = Self::default();

        let autosave_interval = match var("FAERUN_AUTOSAVE_SECS") {
            None => defaults.autosave_interval,
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) => Duration::from_secs(secs),
                Err(_) => {
                    tracing::warn!(
                        value = %raw,
                        default = DEFAULT_AUTOSAVE_SECS,
                        "Invalid FAERUN_AUTOSAVE_SECS, using default"
                    );
                    defaults.autosave_interval
                }
            },
        };

        Self {
            data_dir: var("FAERUN_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            sheet_snapshot: var("FAERUN_SHEET_SNAPSHOT").unwrap_or(defaults.sheet_snapshot),
            hp_snapshot: var("FAERUN_HP_SNAPSHOT").unwrap_or(defaults.hp_snapshot),
            autosave_interval,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(Config::from_lookup(lookup(&[])), Config::default());
    }

    #[test]
    fn reads_every_variable() {
        let config = Config::from_lookup(lookup(&[
            ("FAERUN_DATA_DIR", "/tmp/faerun"),
            ("FAERUN_SHEET_SNAPSHOT", "fiche.json"),
            ("FAERUN_HP_SNAPSHOT", "pv.json"),
            ("FAERUN_AUTOSAVE_SECS", "10"),
        ]));
        assert_eq!(config.data_dir, PathBuf::from("/tmp/faerun"));
        assert_eq!(config.sheet_snapshot, "fiche.json");
        assert_eq!(config.hp_snapshot, "pv.json");
        assert_eq!(config.autosave_interval, Duration::from_secs(10));
    }

    #[test]
    fn malformed_or_blank_values_fall_back() {
        let config = Config::from_lookup(lookup(&[
            ("FAERUN_AUTOSAVE_SECS", "souvent"),
            ("FAERUN_DATA_DIR", "   "),
        ]));
        assert_eq!(config.autosave_interval, Duration::from_secs(30));
        assert_eq!(config.data_dir, PathBuf::from(".faerun"));
    }
}
