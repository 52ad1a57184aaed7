use std::io;
use std::sync::Arc;

use anyhow::Context;
use football_games_viewer::render::render_view;
use football_games_viewer::{
    Config, GameApi, HttpGameApi, Notifier, TerminalNotifier, ViewController, ViewEvent,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Create,
    Refresh,
    List,
    Quit,
}

impl Command {
    fn parse(line: &str) -> Option<Self> {
        match line.trim().to_ascii_lowercase().as_str() {
            "c" | "create" => Some(Command::Create),
            "r" | "refresh" => Some(Command::Refresh),
            "l" | "list" => Some(Command::List),
            "q" | "quit" | "exit" => Some(Command::Quit),
            _ => None,
        }
    }
}

fn print_help() {
    println!("Commands: [c]reate game, [r]efresh list, [l]ist, [q]uit");
}

fn render<A: GameApi, N: Notifier>(view: &ViewController<A, N>) -> anyhow::Result<()> {
    render_view(&mut io::stdout().lock(), view.state()).context("rendering games")
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env();
    tracing::info!("Using football API at {}", config.api_url);

    let api = Arc::new(HttpGameApi::new(&config)?);
    let mut view = ViewController::new(api, TerminalNotifier::stdout());
    view.initialize();

    print_help();
    render(&view)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    'run: loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("reading command")? else {
                    break 'run;
                };
                match Command::parse(&line) {
                    Some(Command::Create) => view.create_game(),
                    Some(Command::Refresh) => view.initialize(),
                    Some(Command::List) => render(&view)?,
                    Some(Command::Quit) => break 'run,
                    None => print_help(),
                }
            }
            Some(event) = view.handle_next(), if view.in_flight() > 0 => {
                if event.notified_user() {
                    // Modal: nothing else is handled until the user dismisses it.
                    if lines.next_line().await.context("reading dismissal")?.is_none() {
                        break 'run;
                    }
                }
                if matches!(
                    event,
                    ViewEvent::GamesListed { .. } | ViewEvent::ListFailed { kept_previous: false }
                ) {
                    render(&view)?;
                }
            }
        }
    }

    view.shutdown().await;
    tracing::info!("Shut down");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands() {
        assert_eq!(Command::parse("c"), Some(Command::Create));
        assert_eq!(Command::parse(" Create \n"), Some(Command::Create));
        assert_eq!(Command::parse("refresh"), Some(Command::Refresh));
        assert_eq!(Command::parse("l"), Some(Command::List));
        assert_eq!(Command::parse("QUIT"), Some(Command::Quit));
        assert_eq!(Command::parse("delete"), None);
        assert_eq!(Command::parse(""), None);
    }
}
