//! Write-side wire shapes for the record store.
//!
//! [`MatchPayload`] is only constructible from a [`ValidMatch`], so an
//! unvalidated record, or one whose `result` was not derived from its scores,
//! cannot reach the wire.

use crate::record::{MatchResult, ValidMatch};
use chrono::NaiveDate;
use serde::Serialize;

/// One goal attribution as sent to the store.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct GoalPayload {
    player_id: String,
    goals_count: u32,
}

/// The body of a match create/update request.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct MatchPayload {
    match_date: NaiveDate,
    opposition_team: String,
    own_score: u32,
    opposition_score: u32,
    result: MatchResult,
    goalscorers: Vec<GoalPayload>,
}

impl From<&ValidMatch> for MatchPayload {
    fn from(record: &ValidMatch) -> Self {
        MatchPayload {
            match_date: record.date(),
            opposition_team: record.opposition_team().to_string(),
            own_score: record.own_score(),
            opposition_score: record.opposition_score(),
            result: record.result(),
            goalscorers: record
                .goalscorers()
                .iter()
                .map(|goal| GoalPayload {
                    player_id: goal.player_id().to_string(),
                    goals_count: goal.goals_count(),
                })
                .collect(),
        }
    }
}

/// The body of a player create request.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct NewPlayer {
    pub name: String,
}
