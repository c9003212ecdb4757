//! Reward entries attached to a quest or a transaction.

use serde::{Deserialize, Serialize};

use crate::value_objects::CurrencyTotal;

/// Whether an entry is gained or spent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Flow {
    #[default]
    Gain,
    Expenditure,
}

impl Flow {
    /// Factor applied to an entry's amounts: `1` for gains, `-1` for expenditures.
    pub fn sign(&self) -> i64 {
        match self {
            Flow::Gain => 1,
            Flow::Expenditure => -1,
        }
    }
}

/// What a reward entry carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum RewardKind {
    Currency(CurrencyTotal),
    Item { description: String },
    Other { description: String },
}

/// One entry of a reward batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardEntry {
    #[serde(default)]
    pub flow: Flow,
    #[serde(flatten)]
    pub kind: RewardKind,
}

/// Ordered entries of a single quest or transaction.
pub type RewardBatch = Vec<RewardEntry>;

impl RewardEntry {
    pub fn currency(flow: Flow, amounts: CurrencyTotal) -> Self {
        Self {
            flow,
            kind: RewardKind::Currency(amounts),
        }
    }

    pub fn gain(amounts: CurrencyTotal) -> Self {
        Self::currency(Flow::Gain, amounts)
    }

    pub fn expense(amounts: CurrencyTotal) -> Self {
        Self::currency(Flow::Expenditure, amounts)
    }

    pub fn item(description: impl Into<String>) -> Self {
        Self {
            flow: Flow::Gain,
            kind: RewardKind::Item {
                description: description.into(),
            },
        }
    }

    pub fn other(description: impl Into<String>) -> Self {
        Self {
            flow: Flow::Gain,
            kind: RewardKind::Other {
                description: description.into(),
            },
        }
    }

    /// Currency amounts with the entry's sign applied, if this is a currency entry.
    pub fn signed_currency(&self) -> Option<CurrencyTotal> {
        match &self.kind {
            RewardKind::Currency(amounts) => Some(amounts.scaled(self.flow.sign())),
            _ => None,
        }
    }

    /// Whether the entry holds anything worth reporting.
    pub fn is_empty(&self) -> bool {
        match &self.kind {
            RewardKind::Currency(amounts) => amounts.is_zero(),
            RewardKind::Item { description } | RewardKind::Other { description } => {
                description.trim().is_empty()
            }
        }
    }
}
