//! Payout data models.

use serde::{Deserialize, Serialize};

/// A named percentage table over ranked finishing positions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoutStructure {
    /// Number of paid positions
    pub positions: usize,
    /// Percentage of the net pool per position, first place first.
    /// Sums to 100 within a 0.01 tolerance.
    pub percentages: Vec<f64>,
    /// Display name
    pub name: String,
}

impl PayoutStructure {
    pub(crate) fn named(name: &str, percentages: Vec<f64>) -> Self {
        Self {
            positions: percentages.len(),
            percentages,
            name: name.to_string(),
        }
    }
}

/// A single position's share of the pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payout {
    /// Finishing position (1 = champion)
    pub position: u32,
    /// Share of the net pool
    pub percentage: f64,
    /// Cash amount, floored to a whole unit
    pub amount: i64,
}

/// The result of distributing a prize pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoutCalculation {
    /// Gross prize pool
    pub prize_pool: f64,
    /// House commission taken off the top
    pub rake: f64,
    /// Pool remaining after rake
    pub net_prize_pool: f64,
    /// Per-position payouts
    pub payouts: Vec<Payout>,
    /// The structure the distribution was computed from
    pub structure: PayoutStructure,
}

impl PayoutCalculation {
    /// Sum of all floored payout amounts.
    pub fn total_paid(&self) -> i64 {
        self.payouts.iter().map(|p| p.amount).sum()
    }

    /// Net pool left over by per-position flooring.
    ///
    /// Amounts are floored independently and never renormalized, so up to
    /// `positions - 1` whole units can remain. Callers wanting an exact-sum
    /// distribution reconcile this themselves.
    pub fn undistributed(&self) -> f64 {
        self.net_prize_pool - self.total_paid() as f64
    }
}
