//! Generic request plumbing for the record store: retry with exponential
//! backoff for transient failures, status-code mapping into [`AppError`]
//! variants, and JSON parse diagnostics.

use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error, instrument, warn};

use crate::constants::retry;
use crate::error::AppError;

/// Sends a request and parses the JSON response body.
///
/// Transient failures (429, 5xx, timeouts, connection errors) are retried
/// with exponential backoff, honouring a `Retry-After` header when present.
/// Non-success statuses map to specific [`AppError`] variants.
#[instrument(skip(client, body))]
pub(super) async fn send_json<T: DeserializeOwned>(
    client: &Client,
    method: Method,
    url: &str,
    query: &[(&str, String)],
    body: Option<serde_json::Value>,
) -> Result<T, AppError> {
    let response_text = execute(client, method, url, query, body).await?;

    match serde_json::from_str::<T>(&response_text) {
        Ok(parsed) => Ok(parsed),
        Err(e) => {
            error!("Failed to parse store response: {} (URL: {})", e, url);
            let preview: String = response_text.chars().take(200).collect();
            debug!("Response text (first 200 chars): {preview}");

            if response_text.trim().is_empty() {
                Err(AppError::store_no_data("Response body is empty", url))
            } else if !response_text.trim_start().starts_with('{')
                && !response_text.trim_start().starts_with('[')
            {
                Err(AppError::store_malformed_json(
                    "Response is not valid JSON",
                    url,
                ))
            } else {
                Err(AppError::store_unexpected_structure(e.to_string(), url))
            }
        }
    }
}

/// Sends a request where no response body is expected (delete).
#[instrument(skip(client))]
pub(super) async fn send_no_content(
    client: &Client,
    method: Method,
    url: &str,
) -> Result<(), AppError> {
    execute(client, method, url, &[], None).await.map(|_| ())
}

/// Shared request execution: retry loop, status mapping, body read.
async fn execute(
    client: &Client,
    method: Method,
    url: &str,
    query: &[(&str, String)],
    body: Option<serde_json::Value>,
) -> Result<String, AppError> {
    let mut attempt = 0u32;
    let mut backoff = Duration::from_millis(retry::INITIAL_BACKOFF_MS);

    let response = loop {
        let mut request = client.request(method.clone(), url);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = &body {
            request = request.json(body);
        }

        match request.send().await {
            Ok(resp) => {
                let status = resp.status();
                if (status.as_u16() == 429 || status.is_server_error())
                    && attempt < retry::MAX_ATTEMPTS
                {
                    // Respect Retry-After if provided
                    let retry_after = resp
                        .headers()
                        .get(reqwest::header::RETRY_AFTER)
                        .and_then(|h| h.to_str().ok())
                        .and_then(|s| s.parse::<u64>().ok())
                        .map(Duration::from_secs);
                    let wait = retry_after.unwrap_or(backoff);
                    warn!(
                        "Transient {} from {}. Retrying in {:?} (attempt {}/{})",
                        status,
                        url,
                        wait,
                        attempt + 1,
                        retry::MAX_ATTEMPTS
                    );
                    tokio::time::sleep(wait).await;
                    attempt += 1;
                    backoff = backoff.saturating_mul(2);
                    continue;
                }
                break resp;
            }
            Err(e) => {
                if (e.is_timeout() || e.is_connect()) && attempt < retry::MAX_ATTEMPTS {
                    warn!(
                        "Request error {} for {}. Retrying in {:?} (attempt {}/{})",
                        e,
                        url,
                        backoff,
                        attempt + 1,
                        retry::MAX_ATTEMPTS
                    );
                    tokio::time::sleep(backoff).await;
                    attempt += 1;
                    backoff = backoff.saturating_mul(2);
                    continue;
                }
                error!("Request failed for URL {}: {}", url, e);
                return if e.is_timeout() {
                    Err(AppError::network_timeout(url))
                } else if e.is_connect() {
                    Err(AppError::network_connection(url, e.to_string()))
                } else {
                    Err(AppError::StoreFetch(e))
                };
            }
        }
    };

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");
        // The store puts a human-readable explanation in the body of 4xx
        // responses; prefer it over the bare status reason.
        let body_text = response.text().await.unwrap_or_default();
        let message = if body_text.trim().is_empty() {
            reason.to_string()
        } else {
            body_text.trim().to_string()
        };

        error!("HTTP {} - {} (URL: {})", status_code, message, url);

        return Err(match status {
            StatusCode::NOT_FOUND => AppError::store_not_found(url),
            StatusCode::CONFLICT => AppError::store_conflict(message, url),
            StatusCode::TOO_MANY_REQUESTS => AppError::store_rate_limit(message, url),
            StatusCode::BAD_GATEWAY | StatusCode::SERVICE_UNAVAILABLE => {
                AppError::store_unavailable(status_code, message, url)
            }
            s if s.is_client_error() => AppError::store_client_error(status_code, message, url),
            _ => AppError::store_server_error(status_code, message, url),
        });
    }

    match response.text().await {
        Ok(text) => {
            debug!("Response length: {} bytes", text.len());
            Ok(text)
        }
        Err(e) => {
            error!("Failed to read response text from URL {}: {}", url, e);
            Err(AppError::StoreFetch(e))
        }
    }
}
