//! Persisted record models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::clock::{CashGameConfig, GameMode, TournamentClock};
use crate::structure::{BlindLevel, TournamentConfig};

/// Version string written into every export document
pub const EXPORT_VERSION: &str = "1.0";

/// One finished (or abandoned) tournament in the history list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TournamentRecord {
    pub id: Uuid,
    pub name: String,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub structure: Vec<BlindLevel>,
    pub ante_enabled: bool,
    /// Level index the clock was on when the tournament ended
    pub final_level: u32,
    /// Total session time in seconds
    pub duration_secs: u64,
}

/// A named, reusable blind schedule with the configuration that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedStructure {
    pub id: Uuid,
    pub name: String,
    pub structure: Vec<BlindLevel>,
    pub config: TournamentConfig,
    pub created_at: DateTime<Utc>,
}

/// Mirror of the live clock state, written after mutations so an
/// interrupted session can resume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub game_mode: GameMode,
    pub current_level: usize,
    pub time_remaining: u32,
    pub is_running: bool,
    pub is_paused: bool,
    pub structure: Vec<BlindLevel>,
    pub ante_enabled: bool,
    pub started_at: Option<DateTime<Utc>>,
    pub tournament_name: String,
    pub cash_game_config: Option<CashGameConfig>,
}

impl SessionSnapshot {
    /// Capture the clock's current state.
    pub fn capture(clock: &TournamentClock, tournament_name: &str) -> Self {
        Self {
            game_mode: clock.game_mode(),
            current_level: clock.current_level(),
            time_remaining: clock.time_remaining(),
            is_running: clock.is_running,
            is_paused: clock.is_paused,
            structure: clock.structure().to_vec(),
            ante_enabled: clock.ante_enabled(),
            started_at: clock.started_at(),
            tournament_name: tournament_name.to_string(),
            cash_game_config: clock.cash_game_config().cloned(),
        }
    }

    /// Rebuild a clock from this snapshot. The level index is clamped into
    /// the stored structure in case the snapshot was hand-edited.
    pub fn restore(&self) -> TournamentClock {
        let mut clock = TournamentClock::new(self.structure.clone());
        clock.game_mode = self.game_mode;
        clock.current_level = self.current_level.min(clock.structure.len() - 1);
        clock.time_remaining = self.time_remaining;
        clock.is_running = self.is_running;
        clock.is_paused = self.is_paused;
        clock.ante_enabled = self.ante_enabled;
        clock.started_at = self.started_at;
        clock.cash_game_config = self.cash_game_config.clone();
        clock
    }
}

/// The single-document export format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportDocument {
    pub version: String,
    pub export_date: DateTime<Utc>,
    pub tournament_history: Vec<TournamentRecord>,
    pub saved_structures: Vec<SavedStructure>,
}

/// What an import actually brought in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSummary {
    pub tournaments_imported: usize,
    pub structures_imported: usize,
}
