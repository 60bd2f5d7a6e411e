//! Application-wide constants and configuration values
//!
//! This module centralizes the domain limits and plumbing constants so the
//! rules the validator enforces and the values the HTTP layer uses live in
//! one place.

#![allow(dead_code)]

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 10;

/// Domain limits enforced by the record validator
pub mod limits {
    /// Maximum length of an opposition team name in characters
    pub const MAX_TEAM_NAME_CHARS: usize = 100;

    /// Maximum length of a player name in characters
    pub const MAX_PLAYER_NAME_CHARS: usize = 100;

    /// Minimum goals a single scorer entry may carry
    pub const MIN_GOALS_PER_SCORER: i64 = 1;

    /// Maximum goals a single scorer entry may carry
    pub const MAX_GOALS_PER_SCORER: i64 = 20;
}

/// Retry behaviour for transient store failures
pub mod retry {
    /// Maximum retry attempts for a single store request
    pub const MAX_ATTEMPTS: u32 = 3;

    /// Initial backoff before the first retry, in milliseconds
    pub const INITIAL_BACKOFF_MS: u64 = 250;
}

/// Display layout constants
pub mod display {
    /// Content margin from the terminal border
    pub const CONTENT_MARGIN: usize = 2;

    /// Default number of match rows per page
    pub const DEFAULT_PAGE_SIZE: usize = 15;

    /// Column width reserved for the formatted date
    pub const DATE_COLUMN_WIDTH: usize = 14;

    /// Column width reserved for the opposition team name
    pub const TEAM_COLUMN_WIDTH: usize = 24;

    /// Column width reserved for the formatted score
    pub const SCORE_COLUMN_WIDTH: usize = 7;

    /// Width of the win/draw/loss distribution bar
    pub const SUMMARY_BAR_WIDTH: usize = 40;
}
