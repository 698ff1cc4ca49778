//! Roster data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Player ID type
pub type PlayerId = Uuid;

/// A tracked participant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Number of buy-ins (a new player always starts with one)
    pub buy_ins: u32,
    /// Number of rebuys
    pub rebuys: u32,
    /// Number of add-ons
    pub addons: u32,
    /// Total money put into the prize pool
    pub total_invested: f64,
    pub is_eliminated: bool,
    pub eliminated_at: Option<DateTime<Utc>>,
    /// Finishing position (1 = champion). Assigned at elimination time;
    /// the last player standing never receives one here.
    pub position: Option<u32>,
}

impl Player {
    pub(crate) fn new(name: &str, buy_in_value: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            buy_ins: 1,
            rebuys: 0,
            addons: 0,
            total_invested: buy_in_value,
            is_eliminated: false,
            eliminated_at: None,
            position: None,
        }
    }
}

/// Monetary and chip values attached to each entry type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryConfig {
    /// Buy-in price
    pub buy_in_value: f64,
    /// Rebuy price
    pub rebuy_value: f64,
    /// Add-on price
    pub addon_value: f64,
    /// Chips granted per buy-in
    pub starting_stack: i64,
    /// Chips granted per rebuy
    pub rebuy_stack: i64,
    /// Chips granted per add-on
    pub addon_stack: i64,
}

impl Default for EntryConfig {
    fn default() -> Self {
        Self {
            buy_in_value: 50.0,
            rebuy_value: 50.0,
            addon_value: 50.0,
            starting_stack: 10_000,
            rebuy_stack: 10_000,
            addon_stack: 20_000,
        }
    }
}

/// Aggregates over the whole roster, recomputed on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TournamentStats {
    pub total_players: usize,
    pub active_players: usize,
    pub eliminated_players: usize,
    pub total_buy_ins: u32,
    pub total_rebuys: u32,
    pub total_addons: u32,
    /// Buy-ins plus rebuys
    pub total_entries: u32,
    /// Sum of every player's invested total
    pub prize_pool: f64,
    pub total_chips_in_play: i64,
    /// Chips in play over active players, floored; zero when nobody is
    /// active
    pub average_stack: i64,
}
