//! The domain filter over match records.
//!
//! One filter spec serves two consumers: it projects onto the store's query
//! parameters for server-side narrowing, and it is a pure predicate for
//! filtering collections already in memory. Both encode the same semantics:
//! case-insensitive substring on the opposition name, exact year, exact
//! derived result, all present parts ANDed.

use crate::record::{MatchResult, StoredMatch};

/// Which matches to keep. Absent parts impose no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchFilters {
    pub opposition: Option<String>,
    pub year: Option<i32>,
    pub result: Option<MatchResult>,
}

impl MatchFilters {
    pub fn is_empty(&self) -> bool {
        self.opposition.is_none() && self.year.is_none() && self.result.is_none()
    }

    /// Whether a record satisfies every present part of the filter.
    ///
    /// The result part compares against the record's derived result, never
    /// the stored column.
    pub fn matches(&self, record: &StoredMatch) -> bool {
        if let Some(opposition) = &self.opposition {
            let needle = opposition.to_lowercase();
            if !record.opposition_team.to_lowercase().contains(&needle) {
                return false;
            }
        }

        if let Some(year) = self.year
            && record.year() != year
        {
            return false;
        }

        if let Some(result) = self.result
            && record.derived_result() != result
        {
            return false;
        }

        true
    }

    /// Keeps the matching records, preserving input order.
    pub fn apply(&self, records: Vec<StoredMatch>) -> Vec<StoredMatch> {
        if self.is_empty() {
            return records;
        }
        records.into_iter().filter(|r| self.matches(r)).collect()
    }

    /// Query-parameter projection for the store's list endpoint.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(opposition) = &self.opposition {
            pairs.push(("opposition", opposition.clone()));
        }
        if let Some(year) = self.year {
            pairs.push(("year", year.to_string()));
        }
        if let Some(result) = self.result {
            pairs.push(("result", result.as_str().to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(id: &str, year: i32, team: &str, own: u32, opposition: u32) -> StoredMatch {
        StoredMatch {
            id: id.to_string(),
            match_date: NaiveDate::from_ymd_opt(year, 4, 5).unwrap(),
            opposition_team: team.to_string(),
            own_score: own,
            opposition_score: opposition,
            result: MatchResult::from_scores(own, opposition),
            goals: vec![],
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filters = MatchFilters::default();
        assert!(filters.is_empty());
        assert!(filters.matches(&record("a", 2024, "Berserker", 2, 1)));
    }

    #[test]
    fn test_opposition_substring_is_case_insensitive() {
        let filters = MatchFilters {
            opposition: Some("storm".to_string()),
            ..Default::default()
        };
        assert!(filters.matches(&record("a", 2024, "Storm FC", 1, 0)));
        assert!(filters.matches(&record("b", 2024, "BIG STORM UNITED", 1, 0)));
        assert!(!filters.matches(&record("c", 2024, "Phoenix SC", 1, 0)));
    }

    #[test]
    fn test_year_filter_exact() {
        let filters = MatchFilters {
            year: Some(2023),
            ..Default::default()
        };
        assert!(filters.matches(&record("a", 2023, "Berserker", 1, 1)));
        assert!(!filters.matches(&record("b", 2024, "Berserker", 1, 1)));
    }

    #[test]
    fn test_result_filter_uses_derived_result() {
        let filters = MatchFilters {
            result: Some(MatchResult::Win),
            ..Default::default()
        };
        let mut winning = record("a", 2024, "Berserker", 3, 1);
        // Poison the stored column; the derived result must win
        winning.result = MatchResult::Loss;
        assert!(filters.matches(&winning));
        assert!(!filters.matches(&record("b", 2024, "Berserker", 1, 1)));
    }

    #[test]
    fn test_all_present_parts_are_anded_order_preserved() {
        let filters = MatchFilters {
            year: Some(2024),
            result: Some(MatchResult::Win),
            ..Default::default()
        };
        let records = vec![
            record("keep-1", 2024, "Berserker", 3, 1),
            record("drop-year", 2023, "Berserker", 3, 1),
            record("drop-result", 2024, "Berserker", 1, 1),
            record("keep-2", 2024, "Storm FC", 2, 0),
        ];
        let kept = filters.apply(records);
        let ids: Vec<&str> = kept.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["keep-1", "keep-2"]);
    }

    #[test]
    fn test_query_pairs_projection() {
        let filters = MatchFilters {
            opposition: Some("Storm".to_string()),
            year: Some(2024),
            result: Some(MatchResult::Draw),
        };
        assert_eq!(
            filters.to_query_pairs(),
            vec![
                ("opposition", "Storm".to_string()),
                ("year", "2024".to_string()),
                ("result", "Draw".to_string()),
            ]
        );
        assert!(MatchFilters::default().to_query_pairs().is_empty());
    }
}
