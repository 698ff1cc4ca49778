//! Tournament clock state machine.
//!
//! The clock owns the current level index, the countdown, and the
//! running/paused flags. It holds no timer of its own: the presentation
//! layer drives it by calling [`TournamentClock::tick`] once per second,
//! which keeps every transition synchronous and testable without real time.
//!
//! Transitions that observers care about (level advanced, clock finished,
//! time-alert thresholds crossed) are returned as [`ClockEvent`]s from
//! `tick`; playing a sound or persisting a snapshot is the caller's job.

use chrono::{DateTime, Utc};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::structure::{BlindLevel, default_levels};

/// Fixed cash-game session length in seconds (two hours)
pub const CASH_SESSION_SECS: u32 = 7200;

/// Countdown value that triggers the soft time alert
pub const WARNING_SECS: u32 = 300;
/// Countdown value that triggers the urgent time alert
pub const CRITICAL_SECS: u32 = 60;

/// Operating mode of the clock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    Tournament,
    CashGame,
}

/// Table stakes for a timed cash-game session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashGameConfig {
    pub small_blind: i64,
    pub big_blind: i64,
    pub min_buy_in: i64,
    pub max_buy_in: i64,
}

/// Observable clock state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockStatus {
    /// Not started, or reset
    Ready,
    Running,
    Paused,
    /// Time reached zero on the last level
    Finished,
}

/// Time-alert severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeAlert {
    /// Five minutes remain in the level
    Warning,
    /// One minute remains in the level
    Critical,
}

/// Transitions reported back to the caller from `tick`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClockEvent {
    /// The countdown expired and the clock moved to this level index
    LevelAdvanced { level: usize },
    /// The countdown expired on the last level
    Finished,
    /// The countdown crossed an alert threshold
    TimeAlert(TimeAlert),
}

/// The level-driving countdown state machine.
#[derive(Debug, Clone)]
pub struct TournamentClock {
    pub(crate) game_mode: GameMode,
    pub(crate) current_level: usize,
    pub(crate) time_remaining: u32,
    pub(crate) is_running: bool,
    pub(crate) is_paused: bool,
    pub(crate) structure: Vec<BlindLevel>,
    pub(crate) started_at: Option<DateTime<Utc>>,
    pub(crate) ante_enabled: bool,
    pub(crate) cash_game_config: Option<CashGameConfig>,
}

impl Default for TournamentClock {
    fn default() -> Self {
        Self::new(default_levels())
    }
}

impl TournamentClock {
    /// Create a clock over a blind schedule.
    ///
    /// An empty schedule is replaced with the built-in default so the
    /// current level is always a valid index.
    pub fn new(structure: Vec<BlindLevel>) -> Self {
        let structure = if structure.is_empty() {
            warn!("empty blind structure, falling back to default levels");
            default_levels()
        } else {
            structure
        };

        let time_remaining = structure[0].duration_secs;
        Self {
            game_mode: GameMode::Tournament,
            current_level: 0,
            time_remaining,
            is_running: false,
            is_paused: false,
            structure,
            started_at: None,
            ante_enabled: false,
            cash_game_config: None,
        }
    }

    /// Start the countdown. No-op if already running.
    pub fn start(&mut self) {
        if !self.is_running {
            self.is_running = true;
            self.is_paused = false;
            self.started_at = Some(Utc::now());
        }
    }

    /// Pause a running countdown.
    pub fn pause(&mut self) {
        if self.is_running {
            self.is_paused = true;
        }
    }

    /// Resume a paused countdown.
    pub fn resume(&mut self) {
        if self.is_running {
            self.is_paused = false;
        }
    }

    /// Stop and rewind to the first level (or the full cash session).
    pub fn reset(&mut self) {
        self.current_level = 0;
        self.time_remaining = self.initial_time();
        self.is_running = false;
        self.is_paused = false;
        self.started_at = None;
    }

    /// Advance the countdown by one second.
    ///
    /// No-op unless running and not paused. When the countdown expires the
    /// clock rolls into the next level at its full duration (any negative
    /// remainder is discarded); expiring on the last level stops the clock
    /// with zero remaining.
    pub fn tick(&mut self) -> Vec<ClockEvent> {
        let mut events = Vec::new();
        if !self.is_running || self.is_paused {
            return events;
        }

        if self.time_remaining <= 1 {
            let next = self.current_level + 1;
            if next < self.structure.len() {
                self.current_level = next;
                self.time_remaining = self.structure[next].duration_secs;
                events.push(ClockEvent::LevelAdvanced { level: next });
            } else {
                self.time_remaining = 0;
                self.is_running = false;
                events.push(ClockEvent::Finished);
            }
            return events;
        }

        self.time_remaining -= 1;
        if self.time_remaining == WARNING_SECS {
            events.push(ClockEvent::TimeAlert(TimeAlert::Warning));
        } else if self.time_remaining == CRITICAL_SECS {
            events.push(ClockEvent::TimeAlert(TimeAlert::Critical));
        }
        events
    }

    /// Jump to the next level, clamped to the schedule end. The countdown
    /// restarts at the target level's full duration.
    pub fn next_level(&mut self) -> usize {
        self.current_level = (self.current_level + 1).min(self.structure.len() - 1);
        self.time_remaining = self.structure[self.current_level].duration_secs;
        self.current_level
    }

    /// Jump to the previous level, clamped to the schedule start. The
    /// countdown restarts at the target level's full duration.
    pub fn previous_level(&mut self) -> usize {
        self.current_level = self.current_level.saturating_sub(1);
        self.time_remaining = self.structure[self.current_level].duration_secs;
        self.current_level
    }

    /// Adjust the countdown by `delta` seconds (negative to remove time).
    /// Clamped at zero, never changes level.
    pub fn add_time(&mut self, delta: i64) {
        self.time_remaining = (self.time_remaining as i64 + delta).max(0) as u32;
    }

    /// Replace the schedule and rewind.
    pub fn set_structure(&mut self, structure: Vec<BlindLevel>) {
        if structure.is_empty() {
            warn!("ignoring empty blind structure");
            return;
        }
        self.structure = structure;
        self.current_level = 0;
        self.time_remaining = self.structure[0].duration_secs;
        self.is_running = false;
        self.is_paused = false;
    }

    /// Flip whether the ante is applied. The stored per-level ante values
    /// are untouched.
    pub fn toggle_ante(&mut self) {
        self.ante_enabled = !self.ante_enabled;
    }

    /// Switch between tournament and cash-game operation.
    pub fn set_game_mode(&mut self, mode: GameMode) {
        self.game_mode = mode;
    }

    /// Configure a cash-game session and rewind to the full session length.
    pub fn set_cash_game_config(&mut self, config: CashGameConfig) {
        self.cash_game_config = Some(config);
        self.current_level = 0;
        self.time_remaining = CASH_SESSION_SECS;
        self.is_running = false;
        self.is_paused = false;
    }

    fn initial_time(&self) -> u32 {
        match self.game_mode {
            GameMode::CashGame => CASH_SESSION_SECS,
            GameMode::Tournament => self.structure[0].duration_secs,
        }
    }

    /// Current observable state
    pub fn status(&self) -> ClockStatus {
        if self.is_running {
            if self.is_paused {
                ClockStatus::Paused
            } else {
                ClockStatus::Running
            }
        } else if self.time_remaining == 0 && self.current_level + 1 == self.structure.len() {
            ClockStatus::Finished
        } else {
            ClockStatus::Ready
        }
    }

    /// The level the clock is currently on
    pub fn current_blind_level(&self) -> &BlindLevel {
        &self.structure[self.current_level]
    }

    /// The ante actually in force: the level's ante when enabled, zero
    /// otherwise
    pub fn effective_ante(&self) -> i64 {
        if self.ante_enabled {
            self.current_blind_level().ante
        } else {
            0
        }
    }

    pub fn game_mode(&self) -> GameMode {
        self.game_mode
    }

    pub fn current_level(&self) -> usize {
        self.current_level
    }

    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    pub fn structure(&self) -> &[BlindLevel] {
        &self.structure
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    pub fn ante_enabled(&self) -> bool {
        self.ante_enabled
    }

    pub fn cash_game_config(&self) -> Option<&CashGameConfig> {
        self.cash_game_config.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_level_clock() -> TournamentClock {
        TournamentClock::new(vec![
            BlindLevel::new(1, 100, 200, 3),
            BlindLevel::new(2, 200, 400, 5),
        ])
    }

    #[test]
    fn test_starts_ready_at_first_level() {
        let clock = two_level_clock();
        assert_eq!(clock.status(), ClockStatus::Ready);
        assert_eq!(clock.current_level(), 0);
        assert_eq!(clock.time_remaining(), 3);
    }

    #[test]
    fn test_start_is_idempotent() {
        let mut clock = two_level_clock();
        clock.start();
        let first_start = clock.started_at();
        clock.pause();
        clock.start();

        // A second start while running must not restart or unpause
        assert_eq!(clock.status(), ClockStatus::Paused);
        assert_eq!(clock.started_at(), first_start);
    }

    #[test]
    fn test_tick_ignored_unless_running() {
        let mut clock = two_level_clock();
        assert!(clock.tick().is_empty());
        assert_eq!(clock.time_remaining(), 3);

        clock.start();
        clock.pause();
        assert!(clock.tick().is_empty());
        assert_eq!(clock.time_remaining(), 3);

        clock.resume();
        clock.tick();
        assert_eq!(clock.time_remaining(), 2);
    }

    #[test]
    fn test_level_rollover_uses_full_next_duration() {
        let mut clock = two_level_clock();
        clock.start();
        clock.tick();
        clock.tick();

        // Third tick expires level 0 and rolls into level 1
        let events = clock.tick();
        assert_eq!(events, vec![ClockEvent::LevelAdvanced { level: 1 }]);
        assert_eq!(clock.current_level(), 1);
        assert_eq!(clock.time_remaining(), 5);
        assert_eq!(clock.status(), ClockStatus::Running);
    }

    #[test]
    fn test_finishes_on_last_level() {
        let mut clock = two_level_clock();
        clock.start();
        clock.next_level();
        clock.add_time(-4); // down to 1 second

        let events = clock.tick();
        assert_eq!(events, vec![ClockEvent::Finished]);
        assert_eq!(clock.time_remaining(), 0);
        assert_eq!(clock.status(), ClockStatus::Finished);

        // Further ticks are no-ops
        assert!(clock.tick().is_empty());
    }

    #[test]
    fn test_manual_jumps_clamp_and_reset_time() {
        let mut clock = two_level_clock();
        clock.start();
        clock.tick();

        assert_eq!(clock.next_level(), 1);
        assert_eq!(clock.time_remaining(), 5);
        assert_eq!(clock.next_level(), 1, "clamped at last level");

        assert_eq!(clock.previous_level(), 0);
        assert_eq!(clock.time_remaining(), 3);
        assert_eq!(clock.previous_level(), 0, "clamped at first level");
    }

    #[test]
    fn test_add_time_clamps_at_zero() {
        let mut clock = two_level_clock();
        clock.add_time(-9999);
        assert_eq!(clock.time_remaining(), 0);
        assert_eq!(clock.current_level(), 0, "add_time never changes level");

        clock.add_time(60);
        assert_eq!(clock.time_remaining(), 60);
    }

    #[test]
    fn test_reset_rewinds_everything() {
        let mut clock = two_level_clock();
        clock.start();
        clock.tick();
        clock.next_level();
        clock.reset();

        assert_eq!(clock.status(), ClockStatus::Ready);
        assert_eq!(clock.current_level(), 0);
        assert_eq!(clock.time_remaining(), 3);
        assert_eq!(clock.started_at(), None);
    }

    #[test]
    fn test_time_alerts_fire_on_thresholds() {
        let mut clock = TournamentClock::new(vec![BlindLevel::new(1, 100, 200, 302)]);
        clock.start();

        assert!(clock.tick().is_empty()); // 301
        assert_eq!(
            clock.tick(),
            vec![ClockEvent::TimeAlert(TimeAlert::Warning)] // 300
        );
        assert!(clock.tick().is_empty()); // 299

        clock.add_time(-238); // down to 61
        assert_eq!(
            clock.tick(),
            vec![ClockEvent::TimeAlert(TimeAlert::Critical)] // 60
        );
    }

    #[test]
    fn test_toggle_ante_leaves_structure_alone() {
        let mut clock = two_level_clock();
        assert_eq!(clock.effective_ante(), 0);

        clock.toggle_ante();
        assert_eq!(clock.effective_ante(), 200);
        assert_eq!(clock.structure()[0].ante, 200);

        clock.toggle_ante();
        assert_eq!(clock.effective_ante(), 0);
    }

    #[test]
    fn test_cash_game_session_length() {
        let mut clock = two_level_clock();
        clock.set_game_mode(GameMode::CashGame);
        clock.set_cash_game_config(CashGameConfig {
            small_blind: 25,
            big_blind: 50,
            min_buy_in: 20,
            max_buy_in: 100,
        });

        assert_eq!(clock.time_remaining(), CASH_SESSION_SECS);
        assert_eq!(clock.status(), ClockStatus::Ready);

        clock.start();
        clock.tick();
        clock.reset();
        assert_eq!(clock.time_remaining(), CASH_SESSION_SECS);
    }

    #[test]
    fn test_set_structure_rewinds() {
        let mut clock = two_level_clock();
        clock.start();
        clock.tick();

        clock.set_structure(vec![BlindLevel::new(1, 50, 100, 10)]);
        assert_eq!(clock.current_level(), 0);
        assert_eq!(clock.time_remaining(), 10);
        assert_eq!(clock.status(), ClockStatus::Ready);
    }

    #[test]
    fn test_empty_structure_falls_back_to_default() {
        let clock = TournamentClock::new(Vec::new());
        assert_eq!(clock.structure().len(), 20);
        assert_eq!(clock.time_remaining(), 1800);
    }
}
