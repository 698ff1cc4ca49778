//! Player roster and entry ledger.
//!
//! This module tracks the people in the event:
//! - Adding and removing players
//! - Buy-in, rebuy, and add-on counts with invested totals
//! - Elimination order and finishing positions
//! - Aggregate statistics (prize pool, chips in play, average stack)
//!
//! ## Example
//!
//! ```
//! use poker_director::roster::Roster;
//!
//! let mut roster = Roster::default();
//! let alice = roster.add_player("Alice");
//! let bob = roster.add_player("Bob");
//!
//! roster.eliminate_player(bob).unwrap();
//! assert_eq!(roster.stats().active_players, 1);
//! let _ = alice;
//! ```

pub mod manager;
pub mod models;

pub use manager::{Roster, RosterError, RosterResult};
pub use models::{EntryConfig, Player, PlayerId, TournamentStats};
