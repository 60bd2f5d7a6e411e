//! Match operations against the record store.

use reqwest::Method;
use tracing::{info, instrument};

use crate::error::AppError;
use crate::record::{MatchFilters, StoredMatch, ValidMatch};
use crate::store::StoreClient;
use crate::store::models::MatchPayload;
use crate::store::request::{send_json, send_no_content};
use crate::store::urls::{build_match_url, build_matches_url};

impl StoreClient {
    /// Lists matches, newest first, narrowed server-side by the filter's
    /// query-parameter projection.
    #[instrument(skip(self))]
    pub async fn list_matches(&self, filters: &MatchFilters) -> Result<Vec<StoredMatch>, AppError> {
        let url = build_matches_url(self.base_url());
        let query = filters.to_query_pairs();
        let matches: Vec<StoredMatch> =
            send_json(self.http(), Method::GET, &url, &query, None).await?;
        info!("Fetched {} match(es) from store", matches.len());
        Ok(matches)
    }

    /// Fetches a single match with its goalscorer join.
    #[instrument(skip(self))]
    pub async fn get_match(&self, id: &str) -> Result<StoredMatch, AppError> {
        let url = build_match_url(self.base_url(), id);
        send_json(self.http(), Method::GET, &url, &[], None).await
    }

    /// Persists a new match. Only a [`ValidMatch`] is accepted, so the
    /// payload's result is always the one derived from its scores.
    #[instrument(skip(self, record))]
    pub async fn create_match(&self, record: &ValidMatch) -> Result<StoredMatch, AppError> {
        let url = build_matches_url(self.base_url());
        let body = serde_json::to_value(MatchPayload::from(record))?;
        let stored: StoredMatch =
            send_json(self.http(), Method::POST, &url, &[], Some(body)).await?;
        info!(
            "Created match {} against {}",
            stored.id, stored.opposition_team
        );
        Ok(stored)
    }

    /// Replaces an existing match. The identity is preserved; every derived
    /// field is recomputed from the validated record, never patched.
    #[instrument(skip(self, record))]
    pub async fn update_match(
        &self,
        id: &str,
        record: &ValidMatch,
    ) -> Result<StoredMatch, AppError> {
        let url = build_match_url(self.base_url(), id);
        let body = serde_json::to_value(MatchPayload::from(record))?;
        let stored: StoredMatch = send_json(self.http(), Method::PUT, &url, &[], Some(body)).await?;
        info!("Updated match {}", stored.id);
        Ok(stored)
    }

    /// Deletes a match and its goal rows.
    #[instrument(skip(self))]
    pub async fn delete_match(&self, id: &str) -> Result<(), AppError> {
        let url = build_match_url(self.base_url(), id);
        send_no_content(self.http(), Method::DELETE, &url).await?;
        info!("Deleted match {id}");
        Ok(())
    }
}
