//! Volta FC Matchbook Library
//!
//! This library keeps the match records of a single team: it derives the
//! result of every match from its scores, validates incoming records as a
//! whole before they reach the store, and renders lists, summaries and
//! single-match views in a teletext-style format.
//!
//! # Examples
//!
//! ```rust
//! use volta_matchbook::record::{MatchCandidate, GoalscorerInput, validate_candidate};
//! use chrono::NaiveDate;
//!
//! let candidate = MatchCandidate {
//!     date: NaiveDate::from_ymd_opt(2024, 3, 15),
//!     opposition_team: "Berserker".to_string(),
//!     own_score: 2,
//!     opposition_score: 1,
//!     goalscorers: vec![GoalscorerInput::new("player-1", 2)],
//! };
//!
//! let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
//! let valid = validate_candidate(&candidate, today).expect("consistent record");
//! assert_eq!(valid.result().as_str(), "Win");
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod display;
pub mod error;
pub mod logging;
pub mod record;
pub mod store;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::AppError;
pub use record::{
    MatchCandidate, MatchFilters, MatchResult, ResultSummary, StoredMatch, ValidMatch, Violations,
    validate_candidate,
};
pub use store::StoreClient;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
