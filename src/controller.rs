use std::sync::Arc;

use tokio::task::JoinSet;

use crate::game_api::GameApi;
use crate::notifier::Notifier;
use crate::types::{GameCreationResult, GameListResult, ViewEvent};
use crate::view_state::ViewState;

/// A finished API call, waiting to be applied to the view.
enum Completion {
    Listed(anyhow::Result<GameListResult>),
    Created(anyhow::Result<GameCreationResult>),
}

/// Bridges user intent and API results to the view. API calls run as tokio
/// tasks; their results are only applied through [`ViewController::handle_next`],
/// so the state has a single writer.
pub struct ViewController<A: GameApi, N: Notifier> {
    api: Arc<A>,
    notifier: N,
    state: ViewState,
    in_flight: JoinSet<Completion>,
}

impl<A: GameApi, N: Notifier> ViewController<A, N> {
    pub fn new(api: Arc<A>, notifier: N) -> Self {
        Self {
            api,
            notifier,
            state: ViewState::Unset,
            in_flight: JoinSet::new(),
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }

    /// Starts loading the game list. Returns immediately; calling it again
    /// issues another request.
    pub fn initialize(&mut self) {
        tracing::info!("requesting game list");
        let api = Arc::clone(&self.api);
        self.in_flight
            .spawn(async move { Completion::Listed(api.list_games().await) });
    }

    pub fn create_game(&mut self) {
        tracing::info!("requesting new game");
        let api = Arc::clone(&self.api);
        self.in_flight
            .spawn(async move { Completion::Created(api.create_game().await) });
    }

    /// Waits for the next API call to finish and applies it. Calls are
    /// applied in completion order. Returns `None` once nothing is in flight.
    pub async fn handle_next(&mut self) -> Option<ViewEvent> {
        while let Some(joined) = self.in_flight.join_next().await {
            match joined {
                Ok(completion) => return Some(self.apply(completion)),
                Err(err) => tracing::error!("API task did not finish: {err}"),
            }
        }
        None
    }

    pub async fn settle(&mut self) -> Vec<ViewEvent> {
        let mut events = Vec::new();
        while let Some(event) = self.handle_next().await {
            events.push(event);
        }
        events
    }

    fn apply(&mut self, completion: Completion) -> ViewEvent {
        match completion {
            Completion::Listed(Ok(list)) => {
                let count = list.games.len();
                self.state.apply_listing(Ok(list));
                tracing::info!(count, "game list loaded");
                ViewEvent::GamesListed { count }
            }
            Completion::Listed(Err(err)) => {
                tracing::warn!("game list failed: {err:#}");
                let message = format!("Could not refresh games: {err:#}");
                let kept_previous = self.state.apply_listing(Err(err));
                if kept_previous {
                    self.notifier.report_error(&message);
                }
                ViewEvent::ListFailed { kept_previous }
            }
            Completion::Created(Ok(created)) => {
                tracing::info!(game_id = %created.game_id, "game created");
                self.notifier.acknowledge(&created.game_id);
                ViewEvent::GameCreated(created.game_id)
            }
            Completion::Created(Err(err)) => {
                tracing::warn!("game creation failed: {err:#}");
                self.notifier
                    .report_error(&format!("Could not create game: {err:#}"));
                ViewEvent::CreateFailed
            }
        }
    }

    /// Tears the view down. Outstanding requests are cancelled and their
    /// results are never applied.
    pub async fn shutdown(mut self) -> ViewState {
        let pending = self.in_flight.len();
        if pending > 0 {
            tracing::info!(pending, "cancelling outstanding API calls");
        }
        self.in_flight.shutdown().await;
        self.state
    }
}
