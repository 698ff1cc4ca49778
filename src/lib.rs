//! # Poker Director
//!
//! A tournament clock and event-management library for live poker games.
//!
//! This library provides the computational core behind a tournament
//! director's screen: blind schedule synthesis, prize pool distribution,
//! the level-driving clock, and the player ledger. It is fully synchronous
//! and holds no timers of its own — the presentation layer drives the clock
//! at 1 Hz through [`clock::TournamentClock::tick`], which keeps every
//! transition deterministic and testable.
//!
//! ## Core Modules
//!
//! - [`structure`]: Blind level models, the progressive schedule generator
//!   with chip-denomination rounding, and preset configurations
//! - [`payouts`]: The payout structure catalog and prize pool calculator
//! - [`clock`]: The tournament/cash-game countdown state machine
//! - [`roster`]: Players, entries, eliminations, and aggregate statistics
//! - [`storage`]: Persistence documents behind an opaque key-value seam
//! - [`session`]: A caller-owned object wiring the above together
//!
//! ## Example
//!
//! ```
//! use poker_director::session::Session;
//! use poker_director::storage::MemoryStore;
//! use poker_director::structure::{TournamentConfig, generate};
//!
//! let levels = generate(&TournamentConfig::turbo()).expect("valid preset");
//! let mut session = Session::new("Friday Night", levels, MemoryStore::new());
//!
//! session.add_player("Alice");
//! session.add_player("Bob");
//! session.start();
//! session.tick();
//! ```

/// Blind structure generation and presets.
pub mod structure;
pub use structure::{BlindLevel, TournamentConfig, generate};

/// Prize pool distribution.
pub mod payouts;
pub use payouts::{PayoutCalculation, PayoutStructure, calculate_payouts};

/// The countdown state machine.
pub mod clock;
pub use clock::{ClockEvent, ClockStatus, TournamentClock};

/// Players and entries.
pub mod roster;
pub use roster::{Player, Roster, TournamentStats};

/// Persistence documents and the key-value seam.
pub mod storage;
pub use storage::{Archive, MemoryStore, Store};

/// Session wiring.
pub mod session;
pub use session::Session;
