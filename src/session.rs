//! A complete event session: clock, roster, payouts, persistence.
//!
//! `Session` is the explicit state object a front end owns instead of a
//! process-wide store. It wires the clock and roster together with the
//! payout selection and an [`Archive`], persisting a snapshot after each
//! mutation so an interrupted session can resume. Persistence is
//! fire-and-forget: a failed write is logged inside the archive and never
//! interrupts the session.

use crate::clock::{CashGameConfig, ClockEvent, GameMode, TournamentClock};
use crate::payouts::{PayoutCalculation, calculate_payouts};
use crate::roster::{EntryConfig, PlayerId, Roster, RosterResult, TournamentStats};
use crate::storage::{Archive, SessionSnapshot, Store, TournamentRecord};
use crate::structure::BlindLevel;
use chrono::Utc;
use uuid::Uuid;

/// Payout structure selected until the operator picks another
pub const DEFAULT_PAYOUT_KEY: &str = "top3_50_30_20";

/// One live event, owned by the caller.
pub struct Session<S: Store> {
    clock: TournamentClock,
    roster: Roster,
    archive: Archive<S>,
    tournament_name: String,
    payout_structure_key: String,
    rake_percentage: f64,
}

impl<S: Store> Session<S> {
    /// Create a session over a blind schedule and a storage backend.
    pub fn new(name: &str, structure: Vec<BlindLevel>, store: S) -> Self {
        Self {
            clock: TournamentClock::new(structure),
            roster: Roster::default(),
            archive: Archive::new(store),
            tournament_name: name.to_string(),
            payout_structure_key: DEFAULT_PAYOUT_KEY.to_string(),
            rake_percentage: 0.0,
        }
    }

    // ---- clock ----

    pub fn start(&mut self) {
        self.clock.start();
        self.persist();
    }

    pub fn pause(&mut self) {
        self.clock.pause();
        self.persist();
    }

    pub fn resume(&mut self) {
        self.clock.resume();
        self.persist();
    }

    pub fn reset(&mut self) {
        self.clock.reset();
        self.persist();
    }

    /// Drive the countdown one second. Persists only when something beyond
    /// the countdown changed (level advance or finish), so the 1 Hz driver
    /// does not hammer the store.
    pub fn tick(&mut self) -> Vec<ClockEvent> {
        let events = self.clock.tick();
        if events
            .iter()
            .any(|e| matches!(e, ClockEvent::LevelAdvanced { .. } | ClockEvent::Finished))
        {
            self.persist();
        }
        events
    }

    pub fn next_level(&mut self) -> usize {
        let level = self.clock.next_level();
        self.persist();
        level
    }

    pub fn previous_level(&mut self) -> usize {
        let level = self.clock.previous_level();
        self.persist();
        level
    }

    pub fn add_time(&mut self, delta: i64) {
        self.clock.add_time(delta);
        self.persist();
    }

    pub fn toggle_ante(&mut self) {
        self.clock.toggle_ante();
        self.persist();
    }

    pub fn set_structure(&mut self, structure: Vec<BlindLevel>) {
        self.clock.set_structure(structure);
        self.persist();
    }

    pub fn set_game_mode(&mut self, mode: GameMode) {
        self.clock.set_game_mode(mode);
        self.persist();
    }

    pub fn set_cash_game_config(&mut self, config: CashGameConfig) {
        self.clock.set_cash_game_config(config);
        self.persist();
    }

    // ---- roster ----

    pub fn add_player(&mut self, name: &str) -> PlayerId {
        let id = self.roster.add_player(name);
        self.persist();
        id
    }

    pub fn remove_player(&mut self, id: PlayerId) -> RosterResult<()> {
        let result = self.roster.remove_player(id);
        self.persist();
        result
    }

    pub fn add_buy_in(&mut self, id: PlayerId) -> RosterResult<()> {
        let result = self.roster.add_buy_in(id);
        self.persist();
        result
    }

    pub fn add_rebuy(&mut self, id: PlayerId) -> RosterResult<()> {
        let result = self.roster.add_rebuy(id);
        self.persist();
        result
    }

    pub fn add_addon(&mut self, id: PlayerId) -> RosterResult<()> {
        let result = self.roster.add_addon(id);
        self.persist();
        result
    }

    pub fn eliminate_player(&mut self, id: PlayerId) -> RosterResult<u32> {
        let result = self.roster.eliminate_player(id);
        self.persist();
        result
    }

    pub fn reactivate_player(&mut self, id: PlayerId) -> RosterResult<()> {
        let result = self.roster.reactivate_player(id);
        self.persist();
        result
    }

    pub fn set_entry_config(&mut self, config: EntryConfig) {
        self.roster.set_config(config);
        self.persist();
    }

    // ---- payouts ----

    pub fn set_payout_structure(&mut self, key: &str) {
        self.payout_structure_key = key.to_string();
        self.persist();
    }

    pub fn set_rake_percentage(&mut self, percentage: f64) {
        self.rake_percentage = percentage;
        self.persist();
    }

    /// Current distribution of the roster's prize pool, or `None` when
    /// nothing has been collected yet (or the selected key is stale).
    pub fn payouts(&self) -> Option<PayoutCalculation> {
        let stats = self.roster.stats();
        if stats.prize_pool == 0.0 {
            return None;
        }
        calculate_payouts(
            stats.prize_pool,
            &self.payout_structure_key,
            self.rake_percentage,
        )
        .ok()
    }

    pub fn stats(&self) -> TournamentStats {
        self.roster.stats()
    }

    // ---- lifecycle ----

    /// Close out the event: append it to the stored history and drop the
    /// live snapshot. Returns the history record's id.
    pub fn finish(&mut self) -> Uuid {
        let now = Utc::now();
        let start_time = self.clock.started_at().unwrap_or(now);
        let record = TournamentRecord {
            id: Uuid::new_v4(),
            name: self.tournament_name.clone(),
            start_time,
            end_time: Some(now),
            structure: self.clock.structure().to_vec(),
            ante_enabled: self.clock.ante_enabled(),
            final_level: self.clock.current_level() as u32,
            duration_secs: (now - start_time).num_seconds().max(0) as u64,
        };
        let id = record.id;
        self.archive.record_tournament(record);
        self.archive.clear_snapshot();
        id
    }

    /// Restore the clock and name from a stored snapshot, if one exists.
    pub fn resume_from_snapshot(&mut self) -> bool {
        match self.archive.load_snapshot() {
            Some(snapshot) => {
                self.clock = snapshot.restore();
                self.tournament_name = snapshot.tournament_name;
                true
            }
            None => false,
        }
    }

    fn persist(&mut self) {
        let snapshot = SessionSnapshot::capture(&self.clock, &self.tournament_name);
        self.archive.save_snapshot(&snapshot);
    }

    // ---- accessors ----

    pub fn clock(&self) -> &TournamentClock {
        &self.clock
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn archive(&self) -> &Archive<S> {
        &self.archive
    }

    pub fn archive_mut(&mut self) -> &mut Archive<S> {
        &mut self.archive
    }

    pub fn tournament_name(&self) -> &str {
        &self.tournament_name
    }

    pub fn set_tournament_name(&mut self, name: &str) {
        self.tournament_name = name.to_string();
        self.persist();
    }

    pub fn payout_structure_key(&self) -> &str {
        &self.payout_structure_key
    }

    pub fn rake_percentage(&self) -> f64 {
        self.rake_percentage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use crate::structure::default_levels;

    fn session() -> Session<MemoryStore> {
        Session::new("Test Event", default_levels(), MemoryStore::new())
    }

    #[test]
    fn test_mutations_leave_a_snapshot() {
        let mut session = session();
        session.start();
        session.add_time(-100);

        let snapshot = session.archive().load_snapshot().unwrap();
        assert_eq!(snapshot.tournament_name, "Test Event");
        assert_eq!(snapshot.time_remaining, 1700);
        assert!(snapshot.is_running);
    }

    #[test]
    fn test_resume_restores_clock() {
        let mut session = session();
        session.start();
        session.next_level();
        session.add_time(-10);
        let level = session.clock().current_level();
        let remaining = session.clock().time_remaining();

        let store = session.archive().load_snapshot().unwrap();
        let mut other = Session::new("ignored", default_levels(), MemoryStore::new());
        other.archive_mut().save_snapshot(&store);

        assert!(other.resume_from_snapshot());
        assert_eq!(other.clock().current_level(), level);
        assert_eq!(other.clock().time_remaining(), remaining);
        assert_eq!(other.tournament_name(), "Test Event");
    }

    #[test]
    fn test_payouts_follow_roster_pool() {
        let mut session = session();
        assert!(session.payouts().is_none(), "empty pool pays nobody");

        for name in ["a", "b", "c", "d"] {
            session.add_player(name);
        }

        let calc = session.payouts().unwrap();
        assert_eq!(calc.prize_pool, 200.0);
        assert_eq!(calc.payouts.len(), 3);
        assert_eq!(calc.payouts[0].amount, 100);
    }

    #[test]
    fn test_stale_payout_key_yields_none() {
        let mut session = session();
        session.add_player("a");
        session.set_payout_structure("no_such_structure");
        assert!(session.payouts().is_none());
    }

    #[test]
    fn test_finish_records_history_and_clears_snapshot() {
        let mut session = session();
        session.start();
        session.next_level();
        session.finish();

        let history = session.archive().history();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].name, "Test Event");
        assert_eq!(history[0].final_level, 1);
        assert!(history[0].end_time.is_some());
        assert!(session.archive().load_snapshot().is_none());
    }
}
