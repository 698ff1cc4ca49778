//! Progressive blind schedule synthesis.

use thiserror::Error;

use super::models::{BlindLevel, TournamentConfig};

/// Number of play levels every generated schedule contains
pub const PLAY_LEVELS: u32 = 20;

/// Structure generation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StructureError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type StructureResult<T> = Result<T, StructureError>;

/// Generate a complete blind schedule from a configuration.
///
/// Produces exactly [`PLAY_LEVELS`] play levels. When breaks are enabled, a
/// break level follows every `break_interval`-th play level except the last
/// one. Level numbers are contiguous across play levels and breaks.
pub fn generate(config: &TournamentConfig) -> StructureResult<Vec<BlindLevel>> {
    validate(config)?;

    let mut structure = Vec::new();
    let mut current_sb = config.starting_small_blind;
    let mut current_bb = config.starting_big_blind;
    let mut level_number = 1;

    for play_count in 1..=PLAY_LEVELS {
        structure.push(BlindLevel {
            level: level_number,
            small_blind: current_sb,
            big_blind: current_bb,
            ante: current_bb,
            duration_secs: config.level_duration_mins * 60,
        });
        level_number += 1;

        if config.include_breaks
            && play_count % config.break_interval == 0
            && play_count < PLAY_LEVELS
        {
            structure.push(BlindLevel::break_level(
                level_number,
                config.break_duration_mins * 60,
            ));
            level_number += 1;
        }

        let (next_sb, next_bb) = next_blinds(current_bb);
        current_sb = next_sb;
        current_bb = next_bb;
    }

    Ok(structure)
}

fn validate(config: &TournamentConfig) -> StructureResult<()> {
    if config.starting_small_blind <= 0 || config.starting_big_blind <= 0 {
        return Err(StructureError::InvalidConfig(
            "starting blinds must be positive".to_string(),
        ));
    }
    if config.starting_small_blind > config.starting_big_blind {
        return Err(StructureError::InvalidConfig(
            "small blind cannot exceed big blind".to_string(),
        ));
    }
    if config.level_duration_mins == 0 {
        return Err(StructureError::InvalidConfig(
            "level duration must be positive".to_string(),
        ));
    }
    if config.break_interval == 0 {
        return Err(StructureError::InvalidConfig(
            "break interval must be positive".to_string(),
        ));
    }
    if config.break_duration_mins == 0 {
        return Err(StructureError::InvalidConfig(
            "break duration must be positive".to_string(),
        ));
    }
    Ok(())
}

/// Compute the next level's blinds from the current big blind.
///
/// Growth slows as blinds rise: 1.5x below 500, 1.33x below 2000, 1.25x
/// beyond. The result is rounded to a chip-representable value and the small
/// blind is set to half the big blind, independently rounded. When the
/// rounded half drops below a third of the big blind it is recomputed as the
/// plain half instead.
fn next_blinds(current_bb: i64) -> (i64, i64) {
    let multiplier = if current_bb < 500 {
        1.5
    } else if current_bb < 2000 {
        1.33
    } else {
        1.25
    };

    let new_bb = round_to_chip_value((current_bb as f64 * multiplier).round() as i64);

    let mut new_sb = round_to_chip_value((new_bb as f64 / 2.0).round() as i64);
    if (new_sb as f64) < new_bb as f64 / 3.0 {
        new_sb = (new_bb as f64 / 2.0).round() as i64;
    }

    (new_sb, new_bb)
}

/// Round a blind amount to a value payable with standard chip denominations
/// (100, 500, 1000, 5000, 25000).
///
/// The granularity scales with magnitude; between 10K and 25K multiples of
/// 5K are preferred when within 30% of the raw value. Idempotent over its
/// own output.
pub fn round_to_chip_value(value: i64) -> i64 {
    // Below 1000 the 100 chip sets the grid
    if value < 1000 {
        return round_to(value, 100);
    }

    if value < 5000 {
        return round_to(value, 500);
    }

    if value < 25_000 {
        let rounded = round_to(value, 1000);

        // From 10K on, snap to a 5K multiple when it is close enough
        if rounded >= 10_000 {
            let to_5k = round_to(value, 5000);
            if (to_5k - value).abs() as f64 / (value as f64) < 0.3 {
                return to_5k;
            }
        }

        return rounded;
    }

    if value < 100_000 {
        return round_to(value, 5000);
    }

    round_to(value, 25_000)
}

/// Round to the nearest multiple of `step`, halves up
fn round_to(value: i64, step: i64) -> i64 {
    (value + step / 2) / step * step
}
