use std::io::{self, Write};

use crate::render::render_alert;
use crate::types::GameId;

/// Where the view surfaces things the user has to see. Calls are synchronous
/// and happen one at a time, in the order the API calls complete.
pub trait Notifier {
    fn acknowledge(&mut self, game_id: &GameId);

    fn report_error(&mut self, message: &str);
}

pub struct TerminalNotifier<W: Write = io::Stdout> {
    out: W,
}

impl TerminalNotifier {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> TerminalNotifier<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Notifier for TerminalNotifier<W> {
    fn acknowledge(&mut self, game_id: &GameId) {
        if let Err(err) = render_alert(&mut self.out, &game_id.to_string()) {
            tracing::warn!(%game_id, "failed to show created game: {err}");
        }
    }

    fn report_error(&mut self, message: &str) {
        if let Err(err) = render_alert(&mut self.out, &format!("Error: {message}")) {
            tracing::warn!("failed to show error {message:?}: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acknowledge_shows_the_bare_id() {
        let mut notifier = TerminalNotifier::new(Vec::new());
        notifier.acknowledge(&GameId::Number(17.into()));

        let text = String::from_utf8(notifier.into_inner()).unwrap();
        assert!(text.lines().any(|l| l.trim_matches(|c| c == '|' || c == ' ') == "17"));
    }

    #[test]
    fn errors_are_prefixed() {
        let mut notifier = TerminalNotifier::new(Vec::new());
        notifier.report_error("creating game: 500 Internal Server Error");

        let text = String::from_utf8(notifier.into_inner()).unwrap();
        assert!(text.contains("Error: creating game: 500 Internal Server Error"));
    }
}
