//! URL building for the record store's REST endpoints.

/// Normalizes the configured base URL by dropping any trailing slash.
pub fn normalize_base_url(base_url: &str) -> String {
    base_url.trim_end_matches('/').to_string()
}

/// Builds the match collection URL.
///
/// # Example
/// ```
/// use volta_matchbook::store::urls::build_matches_url;
///
/// let url = build_matches_url("https://store.example.com");
/// assert_eq!(url, "https://store.example.com/matches");
/// ```
pub fn build_matches_url(base_url: &str) -> String {
    format!("{base_url}/matches")
}

/// Builds the URL of a single match by id.
///
/// # Example
/// ```
/// use volta_matchbook::store::urls::build_match_url;
///
/// let url = build_match_url("https://store.example.com", "a0e1");
/// assert_eq!(url, "https://store.example.com/matches/a0e1");
/// ```
pub fn build_match_url(base_url: &str, id: &str) -> String {
    format!("{base_url}/matches/{id}")
}

/// Builds the player directory URL.
///
/// # Example
/// ```
/// use volta_matchbook::store::urls::build_players_url;
///
/// let url = build_players_url("https://store.example.com");
/// assert_eq!(url, "https://store.example.com/players");
/// ```
pub fn build_players_url(base_url: &str) -> String {
    format!("{base_url}/players")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base_url_strips_trailing_slash() {
        assert_eq!(
            normalize_base_url("https://store.example.com/"),
            "https://store.example.com"
        );
        assert_eq!(
            normalize_base_url("https://store.example.com"),
            "https://store.example.com"
        );
    }

    #[test]
    fn test_url_builders() {
        let base = "https://store.example.com";
        assert_eq!(build_matches_url(base), "https://store.example.com/matches");
        assert_eq!(
            build_match_url(base, "42"),
            "https://store.example.com/matches/42"
        );
        assert_eq!(build_players_url(base), "https://store.example.com/players");
    }
}
