//! Currency value objects: the four denominations and signed totals.
//!
//! Conversion ratios are fixed: 1 gold = 10 silver = 100 copper, and one
//! platinum is worth 10 gold. Totals may be negative while bookkeeping
//! expenditures, so every amount is a signed integer.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub};

/// A coin denomination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Denomination {
    Copper,
    Silver,
    Gold,
    Platinum,
}

impl Denomination {
    /// Display order used in every rendered balance.
    pub const ALL: [Denomination; 4] = [
        Denomination::Copper,
        Denomination::Silver,
        Denomination::Gold,
        Denomination::Platinum,
    ];

    /// Short label as written on character sheets.
    pub fn label(&self) -> &'static str {
        match self {
            Denomination::Copper => "PC",
            Denomination::Silver => "PA",
            Denomination::Gold => "PO",
            Denomination::Platinum => "PP",
        }
    }

    /// Worth of one coin, in copper.
    pub fn copper_value(&self) -> i64 {
        match self {
            Denomination::Copper => 1,
            Denomination::Silver => 10,
            Denomination::Gold => 100,
            Denomination::Platinum => 1000,
        }
    }
}

impl fmt::Display for Denomination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Signed amounts held (or spent) in each denomination.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CurrencyTotal {
    pub copper: i64,
    pub silver: i64,
    pub gold: i64,
    pub platinum: i64,
}

impl CurrencyTotal {
    pub fn new(copper: i64, silver: i64, gold: i64, platinum: i64) -> Self {
        Self {
            copper,
            silver,
            gold,
            platinum,
        }
    }

    pub fn copper(amount: i64) -> Self {
        Self::single(Denomination::Copper, amount)
    }

    pub fn silver(amount: i64) -> Self {
        Self::single(Denomination::Silver, amount)
    }

    pub fn gold(amount: i64) -> Self {
        Self::single(Denomination::Gold, amount)
    }

    pub fn platinum(amount: i64) -> Self {
        Self::single(Denomination::Platinum, amount)
    }

    /// A total holding `amount` coins of a single denomination.
    pub fn single(denomination: Denomination, amount: i64) -> Self {
        let mut total = Self::default();
        *total.amount_mut(denomination) = amount;
        total
    }

    pub fn amount(&self, denomination: Denomination) -> i64 {
        match denomination {
            Denomination::Copper => self.copper,
            Denomination::Silver => self.silver,
            Denomination::Gold => self.gold,
            Denomination::Platinum => self.platinum,
        }
    }

    fn amount_mut(&mut self, denomination: Denomination) -> &mut i64 {
        match denomination {
            Denomination::Copper => &mut self.copper,
            Denomination::Silver => &mut self.silver,
            Denomination::Gold => &mut self.gold,
            Denomination::Platinum => &mut self.platinum,
        }
    }

    /// True when every denomination is exactly zero.
    pub fn is_zero(&self) -> bool {
        Denomination::ALL.iter().all(|d| self.amount(*d) == 0)
    }

    /// Whole value expressed in copper. Exact, unlike the gold-equivalent float,
    /// until it saturates at the `i64` bounds.
    pub fn total_copper(&self) -> i64 {
        Denomination::ALL.iter().fold(0i64, |total, d| {
            total.saturating_add(self.amount(*d).saturating_mul(d.copper_value()))
        })
    }

    /// `gold + silver/10 + copper/100 + platinum*10`.
    pub fn gold_equivalent(&self) -> f64 {
        self.total_copper() as f64 / Denomination::Gold.copper_value() as f64
    }

    /// Every denomination multiplied by `factor`, saturating.
    pub fn scaled(&self, factor: i64) -> Self {
        Self {
            copper: self.copper.saturating_mul(factor),
            silver: self.silver.saturating_mul(factor),
            gold: self.gold.saturating_mul(factor),
            platinum: self.platinum.saturating_mul(factor),
        }
    }

    /// Signed per-denomination deltas, zero denominations omitted.
    ///
    /// `CurrencyTotal::new(5, 0, -3, 0)` renders as `+5 PC -3 PO`.
    pub fn format_deltas(&self) -> String {
        Denomination::ALL
            .iter()
            .filter_map(|d| {
                let amount = self.amount(*d);
                (amount != 0).then(|| format!("{} {}", format_signed(amount), d.label()))
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Add for CurrencyTotal {
    type Output = CurrencyTotal;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            copper: self.copper.saturating_add(rhs.copper),
            silver: self.silver.saturating_add(rhs.silver),
            gold: self.gold.saturating_add(rhs.gold),
            platinum: self.platinum.saturating_add(rhs.platinum),
        }
    }
}

impl AddAssign for CurrencyTotal {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Neg for CurrencyTotal {
    type Output = CurrencyTotal;

    fn neg(self) -> Self::Output {
        Self {
            copper: self.copper.saturating_neg(),
            silver: self.silver.saturating_neg(),
            gold: self.gold.saturating_neg(),
            platinum: self.platinum.saturating_neg(),
        }
    }
}

impl Sub for CurrencyTotal {
    type Output = CurrencyTotal;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            copper: self.copper.saturating_sub(rhs.copper),
            silver: self.silver.saturating_sub(rhs.silver),
            gold: self.gold.saturating_sub(rhs.gold),
            platinum: self.platinum.saturating_sub(rhs.platinum),
        }
    }
}

/// Integer with an explicit sign: `+12`, `-3`, `0`.
pub fn format_signed(value: i64) -> String {
    if value > 0 {
        format!("+{}", value)
    } else {
        value.to_string()
    }
}

/// Gold-equivalent rounded to 2 decimals, with a trailing `.00` stripped.
pub fn format_gold_equivalent(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    // Avoid rendering "-0" for tiny negative remainders.
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    let text = format!("{:.2}", rounded);
    match text.strip_suffix(".00") {
        Some(whole) => whole.to_string(),
        None => text,
    }
}
