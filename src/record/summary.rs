//! Win/draw/loss aggregation for the results summary view.

use crate::record::{MatchResult, StoredMatch};

/// Counts of matches per outcome, aggregated over derived results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResultSummary {
    pub wins: usize,
    pub draws: usize,
    pub losses: usize,
}

impl ResultSummary {
    /// Aggregates a collection of stored matches. Outcomes are derived from
    /// the scores of each record, not read from the stored column.
    pub fn from_matches(matches: &[StoredMatch]) -> Self {
        let mut summary = ResultSummary::default();
        for record in matches {
            match record.derived_result() {
                MatchResult::Win => summary.wins += 1,
                MatchResult::Draw => summary.draws += 1,
                MatchResult::Loss => summary.losses += 1,
            }
        }
        summary
    }

    pub fn total(&self) -> usize {
        self.wins + self.draws + self.losses
    }

    pub fn count(&self, result: MatchResult) -> usize {
        match result {
            MatchResult::Win => self.wins,
            MatchResult::Draw => self.draws,
            MatchResult::Loss => self.losses,
        }
    }

    /// Share of matches with the given outcome, in percent. Zero for an
    /// empty collection.
    pub fn percentage(&self, result: MatchResult) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.count(result) as f64 * 100.0 / total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(own: u32, opposition: u32) -> StoredMatch {
        StoredMatch {
            id: format!("m-{own}-{opposition}"),
            match_date: NaiveDate::from_ymd_opt(2024, 4, 5).unwrap(),
            opposition_team: "Berserker".to_string(),
            own_score: own,
            opposition_score: opposition,
            result: MatchResult::from_scores(own, opposition),
            goals: vec![],
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_aggregation_counts_each_bucket() {
        let matches = vec![
            record(3, 1),
            record(2, 2),
            record(0, 4),
            record(5, 0),
            record(1, 2),
        ];
        let summary = ResultSummary::from_matches(&matches);
        assert_eq!(summary.wins, 2);
        assert_eq!(summary.draws, 1);
        assert_eq!(summary.losses, 2);
        assert_eq!(summary.total(), 5);
    }

    #[test]
    fn test_percentages() {
        let matches = vec![record(1, 0), record(2, 0), record(0, 1), record(3, 3)];
        let summary = ResultSummary::from_matches(&matches);
        assert_eq!(summary.percentage(MatchResult::Win), 50.0);
        assert_eq!(summary.percentage(MatchResult::Draw), 25.0);
        assert_eq!(summary.percentage(MatchResult::Loss), 25.0);
    }

    #[test]
    fn test_empty_collection() {
        let summary = ResultSummary::from_matches(&[]);
        assert_eq!(summary.total(), 0);
        assert_eq!(summary.percentage(MatchResult::Win), 0.0);
    }

    #[test]
    fn test_uses_derived_results() {
        let mut poisoned = record(4, 0);
        poisoned.result = MatchResult::Loss;
        let summary = ResultSummary::from_matches(&[poisoned]);
        assert_eq!(summary.wins, 1);
        assert_eq!(summary.losses, 0);
    }
}
