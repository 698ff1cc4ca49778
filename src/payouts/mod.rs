//! Prize pool distribution.
//!
//! This module provides:
//! - A fixed catalog of named payout structures (winner-take-all through
//!   top 10)
//! - Rake deduction and per-position payout calculation
//! - A field-size based structure suggestion
//! - Custom structures validated to sum to 100%
//!
//! ## Example
//!
//! ```
//! use poker_director::payouts::calculate_payouts;
//!
//! let calc = calculate_payouts(1000.0, "top3_50_30_20", 10.0).unwrap();
//! assert_eq!(calc.rake, 100.0);
//! assert_eq!(calc.payouts[0].amount, 450);
//! ```

pub mod calculator;
pub mod models;

pub use calculator::{
    PayoutError, PayoutResult, STRUCTURE_KEYS, calculate_payouts, calculate_with_structure,
    suggest_structure_key,
};
pub use models::{Payout, PayoutCalculation, PayoutStructure};
