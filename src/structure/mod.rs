//! Blind structure generation for tournament play.
//!
//! This module provides:
//! - Blind level and tournament configuration models
//! - Progressive blind schedule synthesis with chip-aware rounding
//! - Preset configurations (standard, turbo, deep stack, hyper turbo)
//! - The default 20-level structure used when no schedule is generated
//!
//! ## Example
//!
//! ```
//! use poker_director::structure::{TournamentConfig, generate};
//!
//! let config = TournamentConfig::standard();
//! let levels = generate(&config).expect("valid preset");
//!
//! // 20 play levels plus a break after every 4th
//! assert_eq!(levels.iter().filter(|l| !l.is_break()).count(), 20);
//! ```

pub mod generator;
pub mod models;
pub mod presets;

pub use generator::{StructureError, StructureResult, generate, round_to_chip_value};
pub use models::{BlindLevel, TournamentConfig};
pub use presets::default_levels;
