//! Wire shapes of records as the hosted store returns them.
//!
//! A [`StoredMatch`] carries the goal rows joined with their players, the way
//! the store's list endpoint returns them. The stored `result` column is
//! deserialized for completeness but never used for display or filtering;
//! callers go through [`StoredMatch::derived_result`] instead.

use crate::record::MatchResult;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A player as known to the player directory.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: String,
    pub name: String,
}

/// One goal attribution row, joined with its player.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct StoredGoal {
    pub player_id: String,
    pub goals_count: u32,
    pub player: Player,
}

/// A persisted match with its goalscorer join.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct StoredMatch {
    pub id: String,
    pub match_date: NaiveDate,
    pub opposition_team: String,
    pub own_score: u32,
    pub opposition_score: u32,
    /// As persisted by the store. Kept only so round-tripping the row is
    /// lossless; consumers must use [`StoredMatch::derived_result`].
    pub result: MatchResult,
    #[serde(default)]
    pub goals: Vec<StoredGoal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl StoredMatch {
    /// The outcome derived from the scores, which is the only form of the
    /// result the rest of the application consumes. If the store's column
    /// ever disagrees with the scores, the scores win.
    pub fn derived_result(&self) -> MatchResult {
        MatchResult::from_scores(self.own_score, self.opposition_score)
    }

    /// Calendar year of the match date
    pub fn year(&self) -> i32 {
        use chrono::Datelike;
        self.match_date.year()
    }
}
