use crate::record::Violations;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to reach record store: {0}")]
    StoreFetch(#[from] reqwest::Error),

    #[error("Failed to parse record store response: {0}")]
    StoreParse(#[from] serde_json::Error),

    // Specific HTTP status code errors
    #[error("Record not found (404): {url}")]
    StoreNotFound { url: String },

    #[error("Record store conflict (409): {message} (URL: {url})")]
    StoreConflict { message: String, url: String },

    #[error("Record store server error ({status}): {message} (URL: {url})")]
    StoreServerError {
        status: u16,
        message: String,
        url: String,
    },

    #[error("Record store client error ({status}): {message} (URL: {url})")]
    StoreClientError {
        status: u16,
        message: String,
        url: String,
    },

    #[error("Record store rate limit exceeded (429): {message} (URL: {url})")]
    StoreRateLimit { message: String, url: String },

    #[error("Record store unavailable ({status}): {message} (URL: {url})")]
    StoreUnavailable {
        status: u16,
        message: String,
        url: String,
    },

    // Network-specific errors
    #[error("Network timeout while contacting: {url}")]
    NetworkTimeout { url: String },

    #[error("Connection failed to: {url} - {message}")]
    NetworkConnection { url: String, message: String },

    // Response shape errors
    #[error("Record store returned malformed JSON: {message} (URL: {url})")]
    StoreMalformedJson { message: String, url: String },

    #[error("Record store returned unexpected data structure: {message} (URL: {url})")]
    StoreUnexpectedStructure { message: String, url: String },

    #[error("Record store returned empty or missing data: {message} (URL: {url})")]
    StoreNoData { message: String, url: String },

    /// Candidate record failed validation. The violations have already been
    /// shown to the user field by field; this variant only carries them out
    /// through the normal error path so the process exits non-zero.
    #[error("Match record failed validation ({} problem(s))", .0.len())]
    Validation(Violations),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Date parsing error: {0}")]
    DateParse(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a date parsing error with context
    pub fn date_parse_error(msg: impl Into<String>) -> Self {
        Self::DateParse(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create a store not found error
    pub fn store_not_found(url: impl Into<String>) -> Self {
        Self::StoreNotFound { url: url.into() }
    }

    /// Create a store conflict error (409, e.g. duplicate player name)
    pub fn store_conflict(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::StoreConflict {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a store server error (5xx status codes)
    pub fn store_server_error(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::StoreServerError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a store client error (4xx status codes except 404, 409 and 429)
    pub fn store_client_error(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::StoreClientError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a store rate limit error
    pub fn store_rate_limit(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::StoreRateLimit {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a store unavailable error (502/503)
    pub fn store_unavailable(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::StoreUnavailable {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a network timeout error
    pub fn network_timeout(url: impl Into<String>) -> Self {
        Self::NetworkTimeout { url: url.into() }
    }

    /// Create a network connection error
    pub fn network_connection(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NetworkConnection {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a malformed JSON error
    pub fn store_malformed_json(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::StoreMalformedJson {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an unexpected data structure error
    pub fn store_unexpected_structure(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::StoreUnexpectedStructure {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a no data error
    pub fn store_no_data(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::StoreNoData {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Check if error is retryable (network issues, server errors, rate limits)
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            AppError::NetworkTimeout { .. }
                | AppError::NetworkConnection { .. }
                | AppError::StoreServerError { .. }
                | AppError::StoreUnavailable { .. }
                | AppError::StoreRateLimit { .. }
        )
    }

    /// Check if error indicates data not found (business condition, not a fault)
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            AppError::StoreNotFound { .. } | AppError::StoreNoData { .. }
        )
    }

    /// Check if error is a local validation failure rather than a store fault
    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::Validation(_))
    }
}
