use std::future::Future;

use anyhow::Context;

use crate::config::Config;
use crate::types::{GameCreationResult, GameListResult};

/// The two calls the view makes against the football API.
pub trait GameApi: Send + Sync + 'static {
    fn list_games(&self) -> impl Future<Output = anyhow::Result<GameListResult>> + Send;

    fn create_game(&self) -> impl Future<Output = anyhow::Result<GameCreationResult>> + Send;
}

pub struct HttpGameApi {
    client: reqwest::Client,
    games_url: String,
}

impl HttpGameApi {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = reqwest::ClientBuilder::new()
            .timeout(config.request_timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .context("building HTTP client")?;

        Ok(Self {
            client,
            games_url: config.games_url(),
        })
    }
}

impl GameApi for HttpGameApi {
    async fn list_games(&self) -> anyhow::Result<GameListResult> {
        tracing::debug!(url = %self.games_url, "listing games");
        let list = self
            .client
            .get(&self.games_url)
            .header("Accept", "application/json")
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .context("listing games")?
            .json::<GameListResult>()
            .await
            .context("decoding game list")?;

        tracing::debug!(count = list.games.len(), "game list received");
        Ok(list)
    }

    async fn create_game(&self) -> anyhow::Result<GameCreationResult> {
        tracing::debug!(url = %self.games_url, "creating game");
        let created = self
            .client
            .post(&self.games_url)
            .header("Accept", "application/json")
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .context("creating game")?
            .json::<GameCreationResult>()
            .await
            .context("decoding created game")?;

        tracing::debug!(game_id = %created.game_id, "game created");
        Ok(created)
    }
}
