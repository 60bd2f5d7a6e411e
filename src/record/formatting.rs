//! Pure display-string derivations for match records.

use crate::record::{StoredGoal, StoredMatch};
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// Sentinel rendered for a match with no goalscorer entries
pub const NO_SCORERS: &str = "No scorers";

/// Formats a score pair as `own-opposition`, e.g. `11-4`.
pub fn format_score(own_score: u32, opposition_score: u32) -> String {
    format!("{own_score}-{opposition_score}")
}

/// Formats a match date as a short locale-style string, e.g. `Mar 15, 2024`.
///
/// The day is not zero-padded, matching the store front-end's short date
/// format.
pub fn format_match_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Formats a goal join as `Name (count), Name (count)` in input order.
///
/// Returns [`NO_SCORERS`] for an empty collection.
pub fn format_goalscorers(goals: &[StoredGoal]) -> String {
    if goals.is_empty() {
        return NO_SCORERS.to_string();
    }
    goals
        .iter()
        .map(|goal| format!("{} ({})", goal.player.name, goal.goals_count))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Distinct calendar years present in a collection of matches, most recent
/// first. Used to populate the year-filter choices.
pub fn years_present(matches: &[StoredMatch]) -> Vec<i32> {
    let years: BTreeSet<i32> = matches.iter().map(StoredMatch::year).collect();
    years.into_iter().rev().collect()
}
