//! Currency normalization across a reward batch.

use serde::{Deserialize, Serialize};

use crate::entities::RewardEntry;
use crate::value_objects::{format_gold_equivalent, CurrencyTotal};

/// Summed denominations plus their value in gold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyNormalization {
    pub totals: CurrencyTotal,
    pub gold_equivalent: f64,
}

impl CurrencyNormalization {
    /// Gold-equivalent rounded to 2 decimals, `.00` stripped.
    pub fn display_gold_equivalent(&self) -> String {
        format_gold_equivalent(self.gold_equivalent)
    }
}

/// Sum every currency entry, gains adding and expenditures subtracting.
///
/// Item and other entries are ignored.
pub fn normalize_currency(entries: &[RewardEntry]) -> CurrencyNormalization {
    let totals = entries
        .iter()
        .filter_map(RewardEntry::signed_currency)
        .fold(CurrencyTotal::default(), |acc, amounts| acc + amounts);

    CurrencyNormalization {
        totals,
        gold_equivalent: totals.gold_equivalent(),
    }
}
