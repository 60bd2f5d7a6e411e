//! The match-record core: validation, derivation, formatting and filtering.
//!
//! Everything in this module is pure, synchronous and free of I/O. The flow
//! of a record is `MatchCandidate` (raw form input) through
//! [`validate_candidate`] into a [`ValidMatch`] carrying the derived
//! [`MatchResult`], which is the only shape the store client will persist.

pub mod candidate;
pub mod filters;
pub mod formatting;
pub mod result;
pub mod stored;
pub mod summary;
pub mod validation;

pub use candidate::{GoalscorerInput, MatchCandidate, ValidGoal, ValidMatch};
pub use filters::MatchFilters;
pub use formatting::{NO_SCORERS, format_goalscorers, format_match_date, format_score, years_present};
pub use result::MatchResult;
pub use stored::{Player, StoredGoal, StoredMatch};
pub use summary::ResultSummary;
pub use validation::{
    Field, FieldViolation, ViolationKind, Violations, validate_candidate, validate_player_name,
};
