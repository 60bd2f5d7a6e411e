//! Player directory operations against the record store.

use reqwest::Method;
use tracing::{info, instrument};

use crate::error::AppError;
use crate::record::Player;
use crate::store::StoreClient;
use crate::store::models::NewPlayer;
use crate::store::request::send_json;
use crate::store::urls::build_players_url;

impl StoreClient {
    /// Lists all players, name-sorted by the store.
    #[instrument(skip(self))]
    pub async fn list_players(&self) -> Result<Vec<Player>, AppError> {
        let url = build_players_url(self.base_url());
        let players: Vec<Player> = send_json(self.http(), Method::GET, &url, &[], None).await?;
        info!("Fetched {} player(s) from store", players.len());
        Ok(players)
    }

    /// Creates a player. Case-insensitive name uniqueness is enforced by the
    /// store and surfaces as a conflict error; local shape rules are the
    /// caller's job via
    /// [`validate_player_name`](crate::record::validate_player_name).
    #[instrument(skip(self))]
    pub async fn create_player(&self, name: &str) -> Result<Player, AppError> {
        let url = build_players_url(self.base_url());
        let body = serde_json::to_value(NewPlayer {
            name: name.to_string(),
        })?;
        let player: Player = send_json(self.http(), Method::POST, &url, &[], Some(body)).await?;
        info!("Created player {} ({})", player.name, player.id);
        Ok(player)
    }
}
