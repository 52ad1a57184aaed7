use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier the football API hands out for a game, either a string or a
/// number. Numbers keep their literal form.
#[derive(Deserialize, Serialize, Debug, Hash, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum GameId {
    Text(String),
    Number(serde_json::Number),
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameId::Text(id) => f.write_str(id),
            GameId::Number(id) => write!(f, "{id}"),
        }
    }
}

/// One entry of the game listing. Only `id` is read; everything else the
/// server sends is kept as-is for display.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct GameSummary {
    pub id: GameId,
    #[serde(flatten)]
    pub fields: serde_json::Map<String, serde_json::Value>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct GameListResult {
    pub games: Vec<GameSummary>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct GameCreationResult {
    pub game_id: GameId,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    GamesListed { count: usize },
    ListFailed { kept_previous: bool },
    GameCreated(GameId),
    CreateFailed,
}

impl ViewEvent {
    pub fn notified_user(&self) -> bool {
        match self {
            ViewEvent::GamesListed { .. } => false,
            ViewEvent::ListFailed { kept_previous } => *kept_previous,
            ViewEvent::GameCreated(_) | ViewEvent::CreateFailed => true,
        }
    }
}
