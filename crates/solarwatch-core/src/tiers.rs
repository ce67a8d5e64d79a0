//! Ordered threshold tables mapping a measured value to score points.
//!
//! A table is a list of `(at, points)` tiers sorted by strictly
//! descending threshold. A value earns the points of the first tier whose
//! threshold it meets or exceeds, and zero when it meets none. Keeping the
//! rules as data makes each contribution auditable and lets operators
//! retune them from configuration.

use serde::{Deserialize, Serialize};

/// One row of a [`TierTable`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tier<T> {
    /// Inclusive lower bound for this tier.
    pub at: T,
    /// Points awarded when the value reaches `at`.
    pub points: u8,
}

impl<T> Tier<T> {
    /// Create a tier.
    pub const fn new(at: T, points: u8) -> Self {
        Self { at, points }
    }
}

/// A threshold table evaluated top-down.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TierTable<T> {
    tiers: Vec<Tier<T>>,
}

impl<T: PartialOrd> TierTable<T> {
    /// Build a table from tiers listed highest threshold first.
    pub const fn new(tiers: Vec<Tier<T>>) -> Self {
        Self { tiers }
    }

    /// Points for `value`: the first tier it reaches, else zero.
    ///
    /// Values that compare with nothing (NaN) earn zero.
    pub fn points(&self, value: &T) -> u8 {
        self.tiers
            .iter()
            .find(|tier| *value >= tier.at)
            .map_or(0, |tier| tier.points)
    }

    /// The largest number of points any value can earn.
    pub fn max_points(&self) -> u8 {
        self.tiers.iter().map(|tier| tier.points).max().unwrap_or(0)
    }

    /// Whether thresholds strictly descend and points never increase
    /// down the table. Only such tables score monotonically.
    pub fn is_well_ordered(&self) -> bool {
        self.tiers.windows(2).all(|pair| match pair {
            [upper, lower] => upper.at > lower.at && upper.points >= lower.points,
            _ => true,
        })
    }

    /// The tiers, highest first.
    pub fn tiers(&self) -> &[Tier<T>] {
        &self.tiers
    }
}
