//! Roster operations and aggregate statistics.

use chrono::Utc;
use thiserror::Error;

use super::models::{EntryConfig, Player, PlayerId, TournamentStats};

/// Roster errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RosterError {
    #[error("player not found: {0}")]
    PlayerNotFound(PlayerId),

    #[error("player already eliminated: {0}")]
    AlreadyEliminated(PlayerId),
}

pub type RosterResult<T> = Result<T, RosterError>;

/// The player ledger.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    players: Vec<Player>,
    config: EntryConfig,
}

impl Roster {
    pub fn new(config: EntryConfig) -> Self {
        Self {
            players: Vec::new(),
            config,
        }
    }

    /// Register a player. Every new player starts with one buy-in already
    /// invested.
    pub fn add_player(&mut self, name: &str) -> PlayerId {
        let player = Player::new(name, self.config.buy_in_value);
        let id = player.id;
        self.players.push(player);
        id
    }

    /// Remove a player entirely, along with their invested money.
    pub fn remove_player(&mut self, id: PlayerId) -> RosterResult<()> {
        let before = self.players.len();
        self.players.retain(|p| p.id != id);
        if self.players.len() == before {
            return Err(RosterError::PlayerNotFound(id));
        }
        Ok(())
    }

    /// Record another buy-in for a player.
    pub fn add_buy_in(&mut self, id: PlayerId) -> RosterResult<()> {
        let value = self.config.buy_in_value;
        let player = self.player_mut(id)?;
        player.buy_ins += 1;
        player.total_invested += value;
        Ok(())
    }

    /// Record a rebuy for a player.
    pub fn add_rebuy(&mut self, id: PlayerId) -> RosterResult<()> {
        let value = self.config.rebuy_value;
        let player = self.player_mut(id)?;
        player.rebuys += 1;
        player.total_invested += value;
        Ok(())
    }

    /// Record an add-on for a player.
    pub fn add_addon(&mut self, id: PlayerId) -> RosterResult<()> {
        let value = self.config.addon_value;
        let player = self.player_mut(id)?;
        player.addons += 1;
        player.total_invested += value;
        Ok(())
    }

    /// Eliminate a player, assigning their finishing position.
    ///
    /// The position is the number of players still active at this moment,
    /// the eliminated player included: busting with five left scores 5th,
    /// the next bust scores 4th, and so on. The last player standing is
    /// never eliminated and so never receives a position through this path.
    pub fn eliminate_player(&mut self, id: PlayerId) -> RosterResult<u32> {
        let position = self.players.iter().filter(|p| !p.is_eliminated).count() as u32;

        let player = self.player_mut(id)?;
        if player.is_eliminated {
            return Err(RosterError::AlreadyEliminated(id));
        }

        player.is_eliminated = true;
        player.eliminated_at = Some(Utc::now());
        player.position = Some(position);
        Ok(position)
    }

    /// Undo an elimination, clearing the recorded position.
    pub fn reactivate_player(&mut self, id: PlayerId) -> RosterResult<()> {
        let player = self.player_mut(id)?;
        player.is_eliminated = false;
        player.eliminated_at = None;
        player.position = None;
        Ok(())
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn config(&self) -> &EntryConfig {
        &self.config
    }

    /// Replace the entry pricing/stack configuration. Applies to future
    /// entries only; recorded investments keep their original values.
    pub fn set_config(&mut self, config: EntryConfig) {
        self.config = config;
    }

    /// Clear all players and restore the default configuration.
    pub fn reset(&mut self) {
        self.players.clear();
        self.config = EntryConfig::default();
    }

    /// Aggregate the roster into display statistics.
    pub fn stats(&self) -> TournamentStats {
        let active_players = self.players.iter().filter(|p| !p.is_eliminated).count();
        let eliminated_players = self.players.len() - active_players;

        let total_buy_ins: u32 = self.players.iter().map(|p| p.buy_ins).sum();
        let total_rebuys: u32 = self.players.iter().map(|p| p.rebuys).sum();
        let total_addons: u32 = self.players.iter().map(|p| p.addons).sum();

        let prize_pool: f64 = self.players.iter().map(|p| p.total_invested).sum();

        let total_chips_in_play = total_buy_ins as i64 * self.config.starting_stack
            + total_rebuys as i64 * self.config.rebuy_stack
            + total_addons as i64 * self.config.addon_stack;

        let average_stack = if active_players > 0 {
            total_chips_in_play / active_players as i64
        } else {
            0
        };

        TournamentStats {
            total_players: self.players.len(),
            active_players,
            eliminated_players,
            total_buy_ins,
            total_rebuys,
            total_addons,
            total_entries: total_buy_ins + total_rebuys,
            prize_pool,
            total_chips_in_play,
            average_stack,
        }
    }

    fn player_mut(&mut self, id: PlayerId) -> RosterResult<&mut Player> {
        self.players
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(RosterError::PlayerNotFound(id))
    }
}
