mod input;
mod settings;
mod terminal;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{Event, EventStream};
use futures_util::StreamExt;
use planet_walker_engine::game_loop::{run_game_loop, GameBroadcast};
use planet_walker_shared::protocol::Command;
use std::fs::File;
use std::sync::Mutex;
use tokio::sync::broadcast::error::RecvError;
use tokio::sync::{broadcast, mpsc};

use input::{action_for_key, Action};
use terminal::{Screen, TerminalGuard};

/// Walk around a small planet until you find the exit.
///
/// Left/Right walk (the first press in a new direction turns around),
/// Up/Down rotate the view, q or Esc quits.
#[derive(Parser, Debug)]
#[command(name = "planet-walker", version, about, long_about = None)]
struct Cli {}

#[tokio::main]
async fn main() -> Result<()> {
    let _cli = Cli::parse();
    init_logging()?;

    let config = settings::load_from_env()?;

    let (cmd_tx, cmd_rx) = mpsc::channel::<Command>(64);
    let (broadcast_tx, broadcast_rx) = broadcast::channel::<GameBroadcast>(8);
    let game = tokio::spawn(run_game_loop(cmd_rx, broadcast_tx, config));

    let guard = TerminalGuard::enter().context("failed to set up the terminal")?;
    let result = run_ui(cmd_tx, broadcast_rx).await;
    drop(guard);

    let summary = game.await.context("game loop task failed")?;
    tracing::info!(
        "Session over after {:?} (won: {})",
        summary.elapsed,
        summary.won
    );
    result
}

fn init_logging() -> Result<()> {
    let Ok(path) = std::env::var(settings::LOG_ENV) else {
        return Ok(());
    };
    let file =
        File::create(&path).with_context(|| format!("failed to open log file {}", path))?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Forward keys to the game and frames to the terminal until the session ends
/// or the player quits. Dropping `cmd_tx` on return stops the game loop.
async fn run_ui(
    cmd_tx: mpsc::Sender<Command>,
    mut frames: broadcast::Receiver<GameBroadcast>,
) -> Result<()> {
    let mut out = std::io::stdout();
    let mut screen = Screen::new();
    let mut events = EventStream::new();

    loop {
        tokio::select! {
            frame = frames.recv() => match frame {
                Ok(GameBroadcast::Frame(canvas)) => {
                    screen.draw(&mut out, &canvas).context("failed to draw frame")?;
                }
                Ok(GameBroadcast::Done) | Err(RecvError::Closed) => break,
                Err(RecvError::Lagged(n)) => tracing::debug!("Skipped {} frames", n),
            },

            event = events.next() => match event {
                Some(Ok(Event::Key(key))) => match action_for_key(&key) {
                    Some(Action::Quit) => {
                        tracing::info!("Quit requested");
                        break;
                    }
                    Some(Action::Game(cmd)) => {
                        if cmd_tx.send(cmd).await.is_err() {
                            break;
                        }
                    }
                    None => {}
                },
                Some(Ok(Event::Resize(_, _))) => screen.invalidate(),
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e).context("failed to read terminal input"),
                None => break,
            },
        }
    }
    Ok(())
}
