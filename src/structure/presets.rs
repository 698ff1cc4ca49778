//! Preset configurations and the default schedule.

use super::models::{BlindLevel, TournamentConfig};

impl TournamentConfig {
    /// Standard event: 30-minute levels, break every 4 levels
    pub fn standard() -> Self {
        Self {
            name: "Standard".to_string(),
            starting_small_blind: 100,
            starting_big_blind: 200,
            level_duration_mins: 30,
            include_breaks: true,
            break_duration_mins: 10,
            break_interval: 4,
        }
    }

    /// Turbo event: 15-minute levels, break every 6 levels
    pub fn turbo() -> Self {
        Self {
            name: "Turbo".to_string(),
            starting_small_blind: 100,
            starting_big_blind: 200,
            level_duration_mins: 15,
            include_breaks: true,
            break_duration_mins: 5,
            break_interval: 6,
        }
    }

    /// Deep stack event: small starting blinds, 40-minute levels
    pub fn deep_stack() -> Self {
        Self {
            name: "Deep Stack".to_string(),
            starting_small_blind: 25,
            starting_big_blind: 50,
            level_duration_mins: 40,
            include_breaks: true,
            break_duration_mins: 15,
            break_interval: 4,
        }
    }

    /// Hyper turbo event: 10-minute levels, no breaks
    pub fn hyper_turbo() -> Self {
        Self {
            name: "Hyper Turbo".to_string(),
            starting_small_blind: 500,
            starting_big_blind: 1000,
            level_duration_mins: 10,
            include_breaks: false,
            break_duration_mins: 5,
            break_interval: 6,
        }
    }
}

/// The built-in 20-level schedule used before any structure is generated.
///
/// Chip-practical values for a 100/500/1K/5K/25K chip set, 30-minute levels,
/// ante equal to the big blind throughout.
pub fn default_levels() -> Vec<BlindLevel> {
    [
        (100, 200),
        (100, 300),
        (200, 400),
        (300, 600),
        (400, 800),
        (500, 1000),
        (600, 1200),
        (800, 1600),
        (1000, 2000),
        (1500, 3000),
        (2000, 4000),
        (3000, 6000),
        (4000, 8000),
        (5000, 10_000),
        (6000, 12_000),
        (8000, 16_000),
        (10_000, 20_000),
        (15_000, 30_000),
        (20_000, 40_000),
        (25_000, 50_000),
    ]
    .iter()
    .enumerate()
    .map(|(i, &(sb, bb))| BlindLevel::new(i as u32 + 1, sb, bb, 1800))
    .collect()
}
