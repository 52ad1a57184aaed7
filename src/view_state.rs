use crate::types::{GameListResult, GameSummary};

/// The game listing as the view currently sees it.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState {
    /// No listing has completed yet.
    #[default]
    Unset,
    Loaded(Vec<GameSummary>),
    /// The listing failed before any list was ever shown.
    Failed(String),
}

impl ViewState {
    pub fn is_unset(&self) -> bool {
        matches!(self, ViewState::Unset)
    }

    pub fn games(&self) -> Option<&[GameSummary]> {
        match self {
            ViewState::Loaded(games) => Some(games),
            _ => None,
        }
    }

    /// Applies the outcome of a list call. A successful listing replaces the
    /// state wholesale. A failed one never overwrites a loaded list; the
    /// return value is `true` when that happened.
    pub fn apply_listing(&mut self, result: anyhow::Result<GameListResult>) -> bool {
        match result {
            Ok(list) => {
                *self = ViewState::Loaded(list.games);
                false
            }
            Err(_) if matches!(self, ViewState::Loaded(_)) => true,
            Err(err) => {
                *self = ViewState::Failed(format!("{err:#}"));
                false
            }
        }
    }
}
