pub mod config;
pub mod controller;
pub mod game_api;
pub mod notifier;
pub mod render;
pub mod types;
pub mod view_state;

pub use config::Config;
pub use controller::ViewController;
pub use game_api::{GameApi, HttpGameApi};
pub use notifier::{Notifier, TerminalNotifier};
pub use types::{GameCreationResult, GameId, GameListResult, GameSummary, ViewEvent};
pub use view_state::ViewState;
