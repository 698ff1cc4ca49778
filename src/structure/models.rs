//! Blind schedule data models.

use serde::{Deserialize, Serialize};

/// A single stage of the tournament schedule.
///
/// A small blind of zero marks a break; break levels carry no big blind or
/// ante either.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlindLevel {
    /// Level number (1-indexed, contiguous across breaks)
    pub level: u32,
    /// Small blind amount (0 on breaks)
    pub small_blind: i64,
    /// Big blind amount (0 on breaks)
    pub big_blind: i64,
    /// Full ante for this level, equal to the big blind on play levels.
    /// Whether it applies is a clock-level toggle, not stored here.
    pub ante: i64,
    /// Duration of this level in seconds
    pub duration_secs: u32,
}

impl BlindLevel {
    /// Create a new play level with ante equal to the big blind
    pub fn new(level: u32, small_blind: i64, big_blind: i64, duration_secs: u32) -> Self {
        Self {
            level,
            small_blind,
            big_blind,
            ante: big_blind,
            duration_secs,
        }
    }

    /// Create a break level
    pub fn break_level(level: u32, duration_secs: u32) -> Self {
        Self {
            level,
            small_blind: 0,
            big_blind: 0,
            ante: 0,
            duration_secs,
        }
    }

    /// Whether this level is a break
    pub fn is_break(&self) -> bool {
        self.small_blind == 0
    }
}

/// Configuration fed to the blind structure generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentConfig {
    /// Configuration name (shown when saved or listed)
    pub name: String,
    /// Small blind of the first level
    pub starting_small_blind: i64,
    /// Big blind of the first level
    pub starting_big_blind: i64,
    /// Duration of each play level in minutes
    pub level_duration_mins: u32,
    /// Whether breaks are inserted into the schedule
    pub include_breaks: bool,
    /// Break duration in minutes
    pub break_duration_mins: u32,
    /// A break follows every this-many play levels
    pub break_interval: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_break_sentinel() {
        let level = BlindLevel::new(3, 200, 400, 1800);
        assert!(!level.is_break());
        assert_eq!(level.ante, 400);

        let pause = BlindLevel::break_level(4, 600);
        assert!(pause.is_break());
        assert_eq!(pause.big_blind, 0);
        assert_eq!(pause.ante, 0);
    }

    #[test]
    fn test_blind_level_roundtrips_through_json() {
        let level = BlindLevel::new(7, 600, 1200, 900);
        let json = serde_json::to_string(&level).unwrap();
        let back: BlindLevel = serde_json::from_str(&json).unwrap();
        assert_eq!(level, back);
    }
}
