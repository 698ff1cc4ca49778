//! Payout calculation over the fixed structure catalog.

use thiserror::Error;

use super::models::{Payout, PayoutCalculation, PayoutStructure};

/// Payout errors
#[derive(Debug, Error, PartialEq)]
pub enum PayoutError {
    #[error("unknown payout structure: {0}")]
    UnknownStructure(String),

    #[error("percentages must add up to 100, got {sum}")]
    InvalidPercentages { sum: f64 },
}

pub type PayoutResult<T> = Result<T, PayoutError>;

/// Catalog keys in presentation order
pub const STRUCTURE_KEYS: [&str; 14] = [
    "winner_all",
    "top2_70_30",
    "top2_65_35",
    "top3_50_30_20",
    "top3_60_25_15",
    "top4_40_30_20_10",
    "top4_50_25_15_10",
    "top5_40_25_18_12_5",
    "top5_45_25_15_10_5",
    "top6_35_23_17_12_8_5",
    "top7_33_21_15_11_9_7_4",
    "top8_30_20_14_11_9_7_5_4",
    "top9_28_18_13_10_9_7_6_5_4",
    "top10_27_17_12_10_8_7_6_5_4_4",
];

impl PayoutStructure {
    /// Look up a catalog structure by key.
    pub fn for_key(key: &str) -> Option<Self> {
        let structure = match key {
            "winner_all" => Self::named("Winner Takes All", vec![100.0]),
            "top2_70_30" => Self::named("Top 2 (70/30)", vec![70.0, 30.0]),
            "top2_65_35" => Self::named("Top 2 (65/35)", vec![65.0, 35.0]),
            "top3_50_30_20" => Self::named("Top 3 (50/30/20)", vec![50.0, 30.0, 20.0]),
            "top3_60_25_15" => Self::named("Top 3 (60/25/15)", vec![60.0, 25.0, 15.0]),
            "top4_40_30_20_10" => {
                Self::named("Top 4 (40/30/20/10)", vec![40.0, 30.0, 20.0, 10.0])
            }
            "top4_50_25_15_10" => {
                Self::named("Top 4 (50/25/15/10)", vec![50.0, 25.0, 15.0, 10.0])
            }
            "top5_40_25_18_12_5" => {
                Self::named("Top 5 (40/25/18/12/5)", vec![40.0, 25.0, 18.0, 12.0, 5.0])
            }
            "top5_45_25_15_10_5" => {
                Self::named("Top 5 (45/25/15/10/5)", vec![45.0, 25.0, 15.0, 10.0, 5.0])
            }
            "top6_35_23_17_12_8_5" => Self::named(
                "Top 6 (35/23/17/12/8/5)",
                vec![35.0, 23.0, 17.0, 12.0, 8.0, 5.0],
            ),
            "top7_33_21_15_11_9_7_4" => Self::named(
                "Top 7 (33/21/15/11/9/7/4)",
                vec![33.0, 21.0, 15.0, 11.0, 9.0, 7.0, 4.0],
            ),
            "top8_30_20_14_11_9_7_5_4" => Self::named(
                "Top 8 (30/20/14/11/9/7/5/4)",
                vec![30.0, 20.0, 14.0, 11.0, 9.0, 7.0, 5.0, 4.0],
            ),
            "top9_28_18_13_10_9_7_6_5_4" => Self::named(
                "Top 9 (28/18/13/10/9/7/6/5/4)",
                vec![28.0, 18.0, 13.0, 10.0, 9.0, 7.0, 6.0, 5.0, 4.0],
            ),
            "top10_27_17_12_10_8_7_6_5_4_4" => Self::named(
                "Top 10 (27/17/12/10/8/7/6/5/4/4)",
                vec![27.0, 17.0, 12.0, 10.0, 8.0, 7.0, 6.0, 5.0, 4.0, 4.0],
            ),
            _ => return None,
        };
        Some(structure)
    }

    /// Build a custom structure from raw percentages.
    pub fn custom(percentages: Vec<f64>) -> PayoutResult<Self> {
        let sum: f64 = percentages.iter().sum();
        if (sum - 100.0).abs() > 0.01 {
            return Err(PayoutError::InvalidPercentages { sum });
        }
        Ok(Self::named("Custom", percentages))
    }

    /// The full fixed catalog, keyed, in presentation order.
    pub fn catalog() -> Vec<(&'static str, Self)> {
        STRUCTURE_KEYS
            .iter()
            .filter_map(|key| Self::for_key(key).map(|s| (*key, s)))
            .collect()
    }
}

/// Distribute a prize pool across ranked positions.
///
/// The rake comes off the top, then each position receives its percentage of
/// the net pool, floored to a whole unit. Floored amounts are independent:
/// their sum can fall short of the net pool by up to `positions - 1` units,
/// which stays with the house.
pub fn calculate_payouts(
    prize_pool: f64,
    structure_key: &str,
    rake_percentage: f64,
) -> PayoutResult<PayoutCalculation> {
    let structure = PayoutStructure::for_key(structure_key)
        .ok_or_else(|| PayoutError::UnknownStructure(structure_key.to_string()))?;

    calculate_with_structure(prize_pool, structure, rake_percentage)
}

/// Distribute a prize pool using an already-built structure (e.g. a custom
/// one).
pub fn calculate_with_structure(
    prize_pool: f64,
    structure: PayoutStructure,
    rake_percentage: f64,
) -> PayoutResult<PayoutCalculation> {
    let rake = prize_pool * (rake_percentage / 100.0);
    let net_prize_pool = prize_pool - rake;

    let payouts = structure
        .percentages
        .iter()
        .enumerate()
        .map(|(i, &percentage)| Payout {
            position: i as u32 + 1,
            percentage,
            amount: (net_prize_pool * (percentage / 100.0)).floor() as i64,
        })
        .collect();

    Ok(PayoutCalculation {
        prize_pool,
        rake,
        net_prize_pool,
        payouts,
        structure,
    })
}

/// Suggest a catalog key for a field size.
///
/// Step thresholds follow common live-event convention: roughly one paid
/// position per four or five entrants, capped at ten.
pub fn suggest_structure_key(total_players: usize) -> &'static str {
    if total_players <= 5 {
        "winner_all"
    } else if total_players <= 8 {
        "top2_70_30"
    } else if total_players <= 12 {
        "top3_50_30_20"
    } else if total_players <= 16 {
        "top4_40_30_20_10"
    } else if total_players <= 20 {
        "top5_40_25_18_12_5"
    } else if total_players <= 25 {
        "top6_35_23_17_12_8_5"
    } else if total_players <= 30 {
        "top7_33_21_15_11_9_7_4"
    } else if total_players <= 35 {
        "top8_30_20_14_11_9_7_5_4"
    } else if total_players <= 40 {
        "top9_28_18_13_10_9_7_6_5_4"
    } else {
        "top10_27_17_12_10_8_7_6_5_4_4"
    }
}
