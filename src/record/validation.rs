//! The match-record validation engine.
//!
//! [`validate_candidate`] checks every rule and reports the complete set of
//! violations in one pass; no rule short-circuits another, so a bad date and a
//! goal-sum mismatch are reported together and the caller can surface every
//! problem at once. On success it hands back a [`ValidMatch`] carrying the
//! derived result.
//!
//! Violations are ordinary data, not errors: they describe local,
//! user-correctable conditions and are rendered inline next to the fields
//! they belong to. Store failures travel separately as
//! [`AppError`](crate::error::AppError).

use crate::constants::limits;
use crate::record::{GoalscorerInput, MatchCandidate, ValidGoal, ValidMatch};
use chrono::NaiveDate;
use std::collections::HashSet;
use std::fmt;

/// Which part of the candidate a violation is attached to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field {
    Date,
    OppositionTeam,
    OwnScore,
    OppositionScore,
    /// The goalscorer collection as a whole (duplicates, sum mismatch)
    Goalscorers,
    /// A single goalscorer entry, by zero-based position
    Goalscorer(usize),
    PlayerName,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Date => write!(f, "date"),
            Field::OppositionTeam => write!(f, "opposition team"),
            Field::OwnScore => write!(f, "own score"),
            Field::OppositionScore => write!(f, "opposition score"),
            Field::Goalscorers => write!(f, "goalscorers"),
            Field::Goalscorer(index) => write!(f, "goalscorer #{}", index + 1),
            Field::PlayerName => write!(f, "player name"),
        }
    }
}

/// Why a field failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationKind {
    Required,
    TooLong { max: usize },
    FutureDate,
    InvalidNumber,
    InvalidGoalCount { value: i64 },
    InvalidCharacters,
    DuplicatePlayer { player_id: String },
    /// Goal counts do not add up to the own score. `delta` is how many goals
    /// are still unaccounted for: positive means the entries fall short by
    /// `delta`, negative means they exceed the score by `-delta`.
    GoalSumMismatch { delta: i64 },
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViolationKind::Required => write!(f, "is required"),
            ViolationKind::TooLong { max } => {
                write!(f, "must be at most {max} characters")
            }
            ViolationKind::FutureDate => write!(f, "cannot be in the future"),
            ViolationKind::InvalidNumber => {
                write!(f, "must be a non-negative whole number")
            }
            ViolationKind::InvalidGoalCount { value } => write!(
                f,
                "goals must be between {} and {}, got {value}",
                limits::MIN_GOALS_PER_SCORER,
                limits::MAX_GOALS_PER_SCORER
            ),
            ViolationKind::InvalidCharacters => write!(
                f,
                "can only contain letters, spaces, hyphens and apostrophes"
            ),
            ViolationKind::DuplicatePlayer { player_id } => {
                write!(f, "player {player_id} is listed more than once")
            }
            ViolationKind::GoalSumMismatch { delta } => {
                if *delta > 0 {
                    write!(f, "need {delta} more goal(s) to match the own score")
                } else {
                    write!(f, "remove {} goal(s) to match the own score", -delta)
                }
            }
        }
    }
}

/// One structured reason a candidate fails a rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: Field,
    pub kind: ViolationKind,
}

impl FieldViolation {
    pub fn new(field: Field, kind: ViolationKind) -> Self {
        FieldViolation { field, kind }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.kind)
    }
}

/// The complete violation set for one candidate.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Violations(Vec<FieldViolation>);

impl Violations {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldViolation> {
        self.0.iter()
    }

    /// Whether any violation is attached to the given field
    pub fn has_field(&self, field: &Field) -> bool {
        self.0.iter().any(|v| &v.field == field)
    }

    /// Finds the first violation attached to the given field, if any
    pub fn for_field(&self, field: &Field) -> Option<&FieldViolation> {
        self.0.iter().find(|v| &v.field == field)
    }

    pub fn into_vec(self) -> Vec<FieldViolation> {
        self.0
    }
}

impl From<Vec<FieldViolation>> for Violations {
    fn from(violations: Vec<FieldViolation>) -> Self {
        Violations(violations)
    }
}

impl IntoIterator for Violations {
    type Item = FieldViolation;
    type IntoIter = std::vec::IntoIter<FieldViolation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "- {violation}")?;
        }
        Ok(())
    }
}

/// Validates a candidate match record as a whole and derives its result.
///
/// Every rule is checked independently and all violations are collected, so
/// the caller can render them simultaneously. `today` is passed in rather than
/// read from the clock to keep the function pure.
///
/// Rules, in attachment order:
/// - `date`: present and not after `today`
/// - `opposition_team`: non-empty, at most 100 characters
/// - `own_score` / `opposition_score`: non-negative integers
/// - each goalscorer entry: non-empty player id, goal count in `[1, 20]`
/// - no player id appears twice across entries
/// - goal counts sum to the own score; a score of zero requires no entries
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use volta_matchbook::record::{
///     GoalscorerInput, MatchCandidate, MatchResult, validate_candidate,
/// };
///
/// let candidate = MatchCandidate {
///     date: NaiveDate::from_ymd_opt(2024, 3, 15),
///     opposition_team: "Berserker".to_string(),
///     own_score: 11,
///     opposition_score: 4,
///     goalscorers: vec![
///         GoalscorerInput::new("p1", 4),
///         GoalscorerInput::new("p2", 7),
///     ],
/// };
/// let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
///
/// let valid = validate_candidate(&candidate, today).unwrap();
/// assert_eq!(valid.result(), MatchResult::Win);
/// ```
pub fn validate_candidate(
    candidate: &MatchCandidate,
    today: NaiveDate,
) -> Result<ValidMatch, Violations> {
    let mut violations: Vec<FieldViolation> = Vec::new();

    match candidate.date {
        None => violations.push(FieldViolation::new(Field::Date, ViolationKind::Required)),
        Some(date) if date > today => {
            violations.push(FieldViolation::new(Field::Date, ViolationKind::FutureDate));
        }
        Some(_) => {}
    }

    if candidate.opposition_team.is_empty() {
        violations.push(FieldViolation::new(
            Field::OppositionTeam,
            ViolationKind::Required,
        ));
    } else if candidate.opposition_team.chars().count() > limits::MAX_TEAM_NAME_CHARS {
        violations.push(FieldViolation::new(
            Field::OppositionTeam,
            ViolationKind::TooLong {
                max: limits::MAX_TEAM_NAME_CHARS,
            },
        ));
    }

    if candidate.own_score < 0 {
        violations.push(FieldViolation::new(
            Field::OwnScore,
            ViolationKind::InvalidNumber,
        ));
    }
    if candidate.opposition_score < 0 {
        violations.push(FieldViolation::new(
            Field::OppositionScore,
            ViolationKind::InvalidNumber,
        ));
    }

    validate_goalscorers(&candidate.goalscorers, &mut violations);

    // The cross-field sum rule needs a usable own score; a negative score has
    // already been reported above.
    if candidate.own_score >= 0 {
        let goal_sum: i64 = candidate.goalscorers.iter().map(|g| g.goals_count).sum();
        let delta = candidate.own_score - goal_sum;
        let zero_score_with_scorers = candidate.own_score == 0 && !candidate.goalscorers.is_empty();
        if delta != 0 || zero_score_with_scorers {
            violations.push(FieldViolation::new(
                Field::Goalscorers,
                ViolationKind::GoalSumMismatch { delta },
            ));
        }
    }

    if !violations.is_empty() {
        return Err(Violations(violations));
    }

    // No violations: every narrowing below is guaranteed to succeed.
    let date = candidate.date.unwrap_or(today);
    let goalscorers = candidate
        .goalscorers
        .iter()
        .map(|g| ValidGoal::new(g.player_id.clone(), g.goals_count as u32))
        .collect();

    Ok(ValidMatch::new(
        date,
        candidate.opposition_team.clone(),
        candidate.own_score as u32,
        candidate.opposition_score as u32,
        goalscorers,
    ))
}

/// Per-entry and whole-collection goalscorer rules.
fn validate_goalscorers(entries: &[GoalscorerInput], violations: &mut Vec<FieldViolation>) {
    for (index, entry) in entries.iter().enumerate() {
        if entry.player_id.is_empty() {
            violations.push(FieldViolation::new(
                Field::Goalscorer(index),
                ViolationKind::Required,
            ));
        }
        if entry.goals_count < limits::MIN_GOALS_PER_SCORER
            || entry.goals_count > limits::MAX_GOALS_PER_SCORER
        {
            violations.push(FieldViolation::new(
                Field::Goalscorer(index),
                ViolationKind::InvalidGoalCount {
                    value: entry.goals_count,
                },
            ));
        }
    }

    // One violation per distinct duplicated player, attached to the collection
    let mut seen: HashSet<&str> = HashSet::new();
    let mut reported: HashSet<&str> = HashSet::new();
    for entry in entries {
        if entry.player_id.is_empty() {
            continue;
        }
        if !seen.insert(entry.player_id.as_str()) && reported.insert(entry.player_id.as_str()) {
            violations.push(FieldViolation::new(
                Field::Goalscorers,
                ViolationKind::DuplicatePlayer {
                    player_id: entry.player_id.clone(),
                },
            ));
        }
    }
}

/// Validates a proposed player name for the player directory.
///
/// Name uniqueness is the store's job (case-insensitive, enforced server
/// side); this checks only the local shape rules: non-empty, at most 100
/// characters, letters/spaces/hyphens/apostrophes only.
pub fn validate_player_name(name: &str) -> Result<(), Violations> {
    let mut violations: Vec<FieldViolation> = Vec::new();

    if name.is_empty() {
        violations.push(FieldViolation::new(
            Field::PlayerName,
            ViolationKind::Required,
        ));
    } else {
        if name.chars().count() > limits::MAX_PLAYER_NAME_CHARS {
            violations.push(FieldViolation::new(
                Field::PlayerName,
                ViolationKind::TooLong {
                    max: limits::MAX_PLAYER_NAME_CHARS,
                },
            ));
        }
        if !name
            .chars()
            .all(|c| c.is_ascii_alphabetic() || c.is_whitespace() || c == '\'' || c == '-')
        {
            violations.push(FieldViolation::new(
                Field::PlayerName,
                ViolationKind::InvalidCharacters,
            ));
        }
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(Violations(violations))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::MatchResult;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn valid_candidate() -> MatchCandidate {
        MatchCandidate {
            date: NaiveDate::from_ymd_opt(2024, 3, 15),
            opposition_team: "Berserker".to_string(),
            own_score: 11,
            opposition_score: 4,
            goalscorers: vec![GoalscorerInput::new("p1", 4), GoalscorerInput::new("p2", 7)],
        }
    }

    #[test]
    fn test_valid_candidate_passes_and_derives_win() {
        let valid = validate_candidate(&valid_candidate(), today()).unwrap();
        assert_eq!(valid.result(), MatchResult::Win);
        assert_eq!(valid.own_score(), 11);
        assert_eq!(valid.goalscorers().len(), 2);
    }

    #[test]
    fn test_validation_is_idempotent_on_valid_input() {
        let candidate = valid_candidate();
        let first = validate_candidate(&candidate, today()).unwrap();
        let second = validate_candidate(&candidate, today()).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.result(), second.result());
    }

    #[test]
    fn test_missing_date_is_required() {
        let mut candidate = valid_candidate();
        candidate.date = None;
        let violations = validate_candidate(&candidate, today()).unwrap_err();
        assert_eq!(
            violations.for_field(&Field::Date).unwrap().kind,
            ViolationKind::Required
        );
    }

    #[test]
    fn test_future_date_rejected_today_allowed() {
        let mut candidate = valid_candidate();
        candidate.date = NaiveDate::from_ymd_opt(2024, 6, 2);
        let violations = validate_candidate(&candidate, today()).unwrap_err();
        assert_eq!(
            violations.for_field(&Field::Date).unwrap().kind,
            ViolationKind::FutureDate
        );

        // A match played today is fine
        candidate.date = Some(today());
        assert!(validate_candidate(&candidate, today()).is_ok());
    }

    #[test]
    fn test_empty_team_required() {
        let mut candidate = valid_candidate();
        candidate.opposition_team = String::new();
        let violations = validate_candidate(&candidate, today()).unwrap_err();
        assert_eq!(
            violations.for_field(&Field::OppositionTeam).unwrap().kind,
            ViolationKind::Required
        );
    }

    #[test]
    fn test_team_name_too_long() {
        let mut candidate = valid_candidate();
        candidate.opposition_team = "x".repeat(101);
        let violations = validate_candidate(&candidate, today()).unwrap_err();
        assert_eq!(
            violations.for_field(&Field::OppositionTeam).unwrap().kind,
            ViolationKind::TooLong { max: 100 }
        );

        // Exactly 100 characters is allowed
        candidate.opposition_team = "x".repeat(100);
        assert!(validate_candidate(&candidate, today()).is_ok());
    }

    #[test]
    fn test_team_name_length_counts_chars_not_bytes() {
        let mut candidate = valid_candidate();
        // 100 two-byte characters: 200 bytes, still 100 characters
        candidate.opposition_team = "ä".repeat(100);
        assert!(validate_candidate(&candidate, today()).is_ok());
    }

    #[test]
    fn test_negative_scores_flagged_per_field() {
        let mut candidate = valid_candidate();
        candidate.own_score = -1;
        candidate.opposition_score = -3;
        candidate.goalscorers.clear();
        let violations = validate_candidate(&candidate, today()).unwrap_err();
        assert_eq!(
            violations.for_field(&Field::OwnScore).unwrap().kind,
            ViolationKind::InvalidNumber
        );
        assert_eq!(
            violations.for_field(&Field::OppositionScore).unwrap().kind,
            ViolationKind::InvalidNumber
        );
        // No sum check against an unusable own score
        assert!(!violations.has_field(&Field::Goalscorers));
    }

    #[test]
    fn test_goal_count_bounds() {
        let mut candidate = valid_candidate();
        candidate.own_score = 21;
        candidate.goalscorers = vec![GoalscorerInput::new("p1", 21)];
        let violations = validate_candidate(&candidate, today()).unwrap_err();
        assert_eq!(
            violations.for_field(&Field::Goalscorer(0)).unwrap().kind,
            ViolationKind::InvalidGoalCount { value: 21 }
        );

        candidate.own_score = 0;
        candidate.goalscorers = vec![GoalscorerInput::new("p1", 0)];
        let violations = validate_candidate(&candidate, today()).unwrap_err();
        assert_eq!(
            violations.for_field(&Field::Goalscorer(0)).unwrap().kind,
            ViolationKind::InvalidGoalCount { value: 0 }
        );
    }

    #[test]
    fn test_empty_player_id_on_entry() {
        let mut candidate = valid_candidate();
        candidate.own_score = 4;
        candidate.goalscorers = vec![GoalscorerInput::new("", 4)];
        let violations = validate_candidate(&candidate, today()).unwrap_err();
        assert_eq!(
            violations.for_field(&Field::Goalscorer(0)).unwrap().kind,
            ViolationKind::Required
        );
    }

    #[test]
    fn test_duplicate_player_regardless_of_correct_sum() {
        // Scenario D: own=5, scorers p1:3 + p1:2 sum correctly but duplicate
        let candidate = MatchCandidate {
            date: NaiveDate::from_ymd_opt(2024, 3, 15),
            opposition_team: "Warriors FC".to_string(),
            own_score: 5,
            opposition_score: 2,
            goalscorers: vec![GoalscorerInput::new("p1", 3), GoalscorerInput::new("p1", 2)],
        };
        let violations = validate_candidate(&candidate, today()).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations.for_field(&Field::Goalscorers).unwrap().kind,
            ViolationKind::DuplicatePlayer {
                player_id: "p1".to_string()
            }
        );
    }

    #[test]
    fn test_duplicate_reported_once_per_player() {
        let mut candidate = valid_candidate();
        candidate.own_score = 4;
        candidate.goalscorers = vec![
            GoalscorerInput::new("p1", 1),
            GoalscorerInput::new("p1", 1),
            GoalscorerInput::new("p1", 1),
            GoalscorerInput::new("p2", 1),
        ];
        let violations = validate_candidate(&candidate, today()).unwrap_err();
        let duplicates = violations
            .iter()
            .filter(|v| matches!(v.kind, ViolationKind::DuplicatePlayer { .. }))
            .count();
        assert_eq!(duplicates, 1);
    }

    #[test]
    fn test_goal_sum_shortfall_carries_delta() {
        // Scenario B: own=8, opp=8, no scorers: invalid even though the
        // result would compute to Draw
        let candidate = MatchCandidate {
            date: NaiveDate::from_ymd_opt(2024, 3, 22),
            opposition_team: "Warriors FC".to_string(),
            own_score: 8,
            opposition_score: 8,
            goalscorers: vec![],
        };
        let violations = validate_candidate(&candidate, today()).unwrap_err();
        assert_eq!(
            violations.for_field(&Field::Goalscorers).unwrap().kind,
            ViolationKind::GoalSumMismatch { delta: 8 }
        );
    }

    #[test]
    fn test_goal_sum_excess_carries_negative_delta() {
        let mut candidate = valid_candidate();
        candidate.own_score = 5;
        // sum = 11, three in excess
        let violations = validate_candidate(&candidate, today()).unwrap_err();
        assert_eq!(
            violations.for_field(&Field::Goalscorers).unwrap().kind,
            ViolationKind::GoalSumMismatch { delta: -6 }
        );
    }

    #[test]
    fn test_zero_score_requires_empty_scorers() {
        // Scenario C: own=0, opp=3, no scorers: valid, Loss
        let candidate = MatchCandidate {
            date: NaiveDate::from_ymd_opt(2024, 3, 29),
            opposition_team: "Thunder United".to_string(),
            own_score: 0,
            opposition_score: 3,
            goalscorers: vec![],
        };
        let valid = validate_candidate(&candidate, today()).unwrap();
        assert_eq!(valid.result(), MatchResult::Loss);
        assert!(valid.goalscorers().is_empty());
    }

    #[test]
    fn test_all_violations_collected_together() {
        // Bad date AND bad sum AND missing team, all in one report
        let candidate = MatchCandidate {
            date: None,
            opposition_team: String::new(),
            own_score: 3,
            opposition_score: 1,
            goalscorers: vec![],
        };
        let violations = validate_candidate(&candidate, today()).unwrap_err();
        assert_eq!(violations.len(), 3);
        assert!(violations.has_field(&Field::Date));
        assert!(violations.has_field(&Field::OppositionTeam));
        assert!(violations.has_field(&Field::Goalscorers));
    }

    #[test]
    fn test_violations_display_lists_each_problem() {
        let candidate = MatchCandidate {
            date: None,
            opposition_team: String::new(),
            own_score: 0,
            opposition_score: 0,
            goalscorers: vec![],
        };
        let violations = validate_candidate(&candidate, today()).unwrap_err();
        let rendered = violations.to_string();
        assert!(rendered.contains("date: is required"));
        assert!(rendered.contains("opposition team: is required"));
        assert_eq!(rendered.lines().count(), 2);
    }

    #[test]
    fn test_remediation_messages() {
        let short = ViolationKind::GoalSumMismatch { delta: 2 };
        assert_eq!(short.to_string(), "need 2 more goal(s) to match the own score");
        let excess = ViolationKind::GoalSumMismatch { delta: -3 };
        assert_eq!(excess.to_string(), "remove 3 goal(s) to match the own score");
    }

    #[test]
    fn test_player_name_rules() {
        assert!(validate_player_name("Alex Carter").is_ok());
        assert!(validate_player_name("O'Neill-Smith").is_ok());

        let violations = validate_player_name("").unwrap_err();
        assert_eq!(
            violations.for_field(&Field::PlayerName).unwrap().kind,
            ViolationKind::Required
        );

        let violations = validate_player_name("R2-D2").unwrap_err();
        assert_eq!(
            violations.for_field(&Field::PlayerName).unwrap().kind,
            ViolationKind::InvalidCharacters
        );

        let violations = validate_player_name(&"a".repeat(101)).unwrap_err();
        assert_eq!(
            violations.for_field(&Field::PlayerName).unwrap().kind,
            ViolationKind::TooLong { max: 100 }
        );
    }
}
