use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Outcome of a match from Volta's point of view.
///
/// The only way to obtain a value from match data is [`MatchResult::from_scores`].
/// The stored `result` column is never trusted: every display and filter path
/// re-derives the outcome from the scores, and every create/update recomputes
/// it before the payload goes on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchResult {
    Win,
    Draw,
    Loss,
}

impl MatchResult {
    /// Derives the result from a pair of final scores.
    ///
    /// Pure and total: equal scores always yield `Draw`, there are no error
    /// cases. This is the single source of truth for the `result` field.
    ///
    /// # Example
    /// ```
    /// use volta_matchbook::record::MatchResult;
    ///
    /// assert_eq!(MatchResult::from_scores(11, 4), MatchResult::Win);
    /// assert_eq!(MatchResult::from_scores(8, 8), MatchResult::Draw);
    /// assert_eq!(MatchResult::from_scores(0, 3), MatchResult::Loss);
    /// ```
    pub fn from_scores(own_score: u32, opposition_score: u32) -> Self {
        if own_score > opposition_score {
            MatchResult::Win
        } else if own_score == opposition_score {
            MatchResult::Draw
        } else {
            MatchResult::Loss
        }
    }

    /// Full name as stored on the wire ("Win", "Draw", "Loss")
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchResult::Win => "Win",
            MatchResult::Draw => "Draw",
            MatchResult::Loss => "Loss",
        }
    }

    /// Single-letter code used in the table's result column
    pub fn code(&self) -> char {
        match self {
            MatchResult::Win => 'W',
            MatchResult::Draw => 'D',
            MatchResult::Loss => 'L',
        }
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchResult {
    type Err = String;

    /// Parses CLI filter input. Accepts the full name or the single-letter
    /// code, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "win" | "w" => Ok(MatchResult::Win),
            "draw" | "d" => Ok(MatchResult::Draw),
            "loss" | "l" => Ok(MatchResult::Loss),
            other => Err(format!(
                "unknown result '{other}', expected win, draw or loss"
            )),
        }
    }
}
