//! Candidate and validated forms of a match record.
//!
//! A [`MatchCandidate`] is raw form input: loosely typed, possibly
//! inconsistent. A [`ValidMatch`] can only be obtained by running a candidate
//! through [`validate_candidate`](crate::record::validate_candidate); its
//! fields are private so no code path can construct one with a `result` that
//! disagrees with the scores.

use crate::record::MatchResult;
use chrono::NaiveDate;

/// One raw goalscorer form entry: who scored and how many.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalscorerInput {
    pub player_id: String,
    pub goals_count: i64,
}

impl GoalscorerInput {
    pub fn new(player_id: impl Into<String>, goals_count: i64) -> Self {
        GoalscorerInput {
            player_id: player_id.into(),
            goals_count,
        }
    }
}

/// Raw form input for a match, before any rule has been checked.
///
/// Scores are signed and the date is optional at this stage so that
/// missing/negative input surfaces as a violation from the validator rather
/// than being unrepresentable and silently clamped at the edge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchCandidate {
    pub date: Option<NaiveDate>,
    pub opposition_team: String,
    pub own_score: i64,
    pub opposition_score: i64,
    pub goalscorers: Vec<GoalscorerInput>,
}

/// A goal attribution that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidGoal {
    player_id: String,
    goals_count: u32,
}

impl ValidGoal {
    pub(crate) fn new(player_id: String, goals_count: u32) -> Self {
        ValidGoal {
            player_id,
            goals_count,
        }
    }

    pub fn player_id(&self) -> &str {
        &self.player_id
    }

    pub fn goals_count(&self) -> u32 {
        self.goals_count
    }
}

/// A fully validated match record with its derived result.
///
/// Constructed exclusively by the validator. There is no setter for `result`;
/// it is derived from the scores at construction time and can never be
/// supplied by a caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidMatch {
    date: NaiveDate,
    opposition_team: String,
    own_score: u32,
    opposition_score: u32,
    result: MatchResult,
    goalscorers: Vec<ValidGoal>,
}

impl ValidMatch {
    pub(crate) fn new(
        date: NaiveDate,
        opposition_team: String,
        own_score: u32,
        opposition_score: u32,
        goalscorers: Vec<ValidGoal>,
    ) -> Self {
        ValidMatch {
            date,
            opposition_team,
            own_score,
            opposition_score,
            result: MatchResult::from_scores(own_score, opposition_score),
            goalscorers,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn opposition_team(&self) -> &str {
        &self.opposition_team
    }

    pub fn own_score(&self) -> u32 {
        self.own_score
    }

    pub fn opposition_score(&self) -> u32 {
        self.opposition_score
    }

    /// The derived outcome. Always consistent with the scores by construction.
    pub fn result(&self) -> MatchResult {
        self.result
    }

    pub fn goalscorers(&self) -> &[ValidGoal] {
        &self.goalscorers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_match_derives_result_at_construction() {
        let m = ValidMatch::new(
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            "Berserker".to_string(),
            11,
            4,
            vec![ValidGoal::new("p1".to_string(), 11)],
        );
        assert_eq!(m.result(), MatchResult::Win);
        assert_eq!(m.own_score(), 11);
        assert_eq!(m.goalscorers().len(), 1);
        assert_eq!(m.goalscorers()[0].player_id(), "p1");
    }

    #[test]
    fn test_candidate_default_is_empty_form() {
        let candidate = MatchCandidate::default();
        assert!(candidate.date.is_none());
        assert!(candidate.opposition_team.is_empty());
        assert_eq!(candidate.own_score, 0);
        assert!(candidate.goalscorers.is_empty());
    }
}
