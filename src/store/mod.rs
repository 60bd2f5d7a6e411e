//! Client for the hosted record store.
//!
//! The store is trusted for identity assignment and durability only. Every
//! write goes through a [`ValidMatch`](crate::record::ValidMatch), so the
//! invariants the core enforces (result derived from scores, goal sum
//! consistency) hold for every payload this module ever sends.

pub mod http_client;
pub mod matches;
pub mod models;
pub mod players;
mod request;
pub mod urls;

use reqwest::Client;

use crate::config::Config;
use crate::error::AppError;
use http_client::create_http_client_with_timeout;
use urls::normalize_base_url;

/// Handle to the record store's REST API.
#[derive(Debug, Clone)]
pub struct StoreClient {
    client: Client,
    base_url: String,
}

impl StoreClient {
    /// Builds a client from the loaded configuration.
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
        Ok(StoreClient {
            client,
            base_url: normalize_base_url(&config.store_url),
        })
    }

    /// Builds a client from explicit parts. Used by tests to point at a mock
    /// server.
    pub fn from_parts(client: Client, base_url: impl Into<String>) -> Self {
        StoreClient {
            client,
            base_url: normalize_base_url(&base_url.into()),
        }
    }

    pub(crate) fn http(&self) -> &Client {
        &self.client
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }
}
