use std::io::{self, Write};

use crate::types::GameSummary;
use crate::view_state::ViewState;

const ALERT_WIDTH: usize = 40;

pub fn render_view<W: Write>(to: &mut W, state: &ViewState) -> io::Result<()> {
    match state {
        ViewState::Unset => writeln!(to, "Loading games...")?,
        ViewState::Loaded(games) if games.is_empty() => writeln!(to, "No games yet.")?,
        ViewState::Loaded(games) => {
            writeln!(to, "Games ({}):", games.len())?;
            for (n, game) in games.iter().enumerate() {
                render_summary(to, n + 1, game)?;
            }
        }
        ViewState::Failed(reason) => writeln!(to, "Could not load games: {reason}")?,
    }
    to.flush()
}

fn render_summary<W: Write>(to: &mut W, n: usize, game: &GameSummary) -> io::Result<()> {
    write!(to, "  #{n} {}", game.id)?;
    for (key, value) in &game.fields {
        match value {
            serde_json::Value::String(s) => write!(to, " {key}={s}")?,
            other => write!(to, " {key}={other}")?,
        }
    }
    writeln!(to)
}

/// Draws a modal-style box around `message`. The caller is responsible for
/// waiting on the dismissal.
pub fn render_alert<W: Write>(to: &mut W, message: &str) -> io::Result<()> {
    let width = message
        .split('\n')
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0)
        .max(ALERT_WIDTH);
    let border = "-".repeat(width + 2);

    writeln!(to, "+{border}+")?;
    for line in message.split('\n') {
        writeln!(to, "| {line:<width$} |")?;
    }
    writeln!(to, "+{border}+")?;
    writeln!(to, "(press Enter to dismiss)")?;
    to.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GameId;
    use serde_json::json;

    fn rendered(state: &ViewState) -> String {
        let mut out = Vec::new();
        render_view(&mut out, state).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn unset_and_empty_render_differently() {
        assert_eq!(rendered(&ViewState::Unset), "Loading games...\n");
        assert_eq!(rendered(&ViewState::Loaded(vec![])), "No games yet.\n");
    }

    #[test]
    fn games_render_in_order() {
        let games: Vec<GameSummary> = serde_json::from_value(json!([
            {"id": 1, "name": "A"},
            {"id": 2, "name": "B"}
        ]))
        .unwrap();

        assert_eq!(
            rendered(&ViewState::Loaded(games)),
            "Games (2):\n  #1 1 name=A\n  #2 2 name=B\n"
        );
    }

    #[test]
    fn non_string_fields_render_as_json() {
        let game = GameSummary {
            id: GameId::Text("x".to_string()),
            fields: serde_json::from_value(json!({"score": [1, 0]})).unwrap(),
        };
        assert_eq!(
            rendered(&ViewState::Loaded(vec![game])),
            "Games (1):\n  #1 x score=[1,0]\n"
        );
    }

    #[test]
    fn failure_renders_reason() {
        let state = ViewState::Failed("listing games: timed out".to_string());
        assert_eq!(rendered(&state), "Could not load games: listing games: timed out\n");
    }

    #[test]
    fn empty_alert_still_has_a_row() {
        let mut out = Vec::new();
        render_alert(&mut out, "").unwrap();
        let text = String::from_utf8(out).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1], format!("| {} |", " ".repeat(ALERT_WIDTH)));
    }

    #[test]
    fn alert_contains_literal_message() {
        let mut out = Vec::new();
        render_alert(&mut out, "g-42").unwrap();
        let text = String::from_utf8(out).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1].trim_matches(|c| c == '|' || c == ' '), "g-42");
        assert_eq!(lines[0].len(), ALERT_WIDTH + 4);
    }
}
