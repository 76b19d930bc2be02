use crate::canvas::Canvas;
use crate::render::draw_frame;
use crate::state::GameState;
use planet_walker_shared::config::GameConfig;
use planet_walker_shared::protocol::Command;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{broadcast, mpsc};
use tokio::time::Instant;

/// Broadcasts from the game loop to the front-end
#[derive(Debug, Clone)]
pub enum GameBroadcast {
    Frame(Arc<Canvas>),
    /// Sent once, after the victory banner has been shown long enough.
    Done,
}

/// What happened during one session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionSummary {
    pub won: bool,
    pub commands: u64,
    pub frames: u64,
    pub elapsed: Duration,
}

/// Run one game session. Owns all game state.
///
/// Wakes on every tick and every command; each wake applies the command (if
/// any), runs per-frame bookkeeping and broadcasts a freshly drawn canvas.
/// Returns when the session is done or the command channel closes.
pub async fn run_game_loop(
    mut cmd_rx: mpsc::Receiver<Command>,
    broadcast_tx: broadcast::Sender<GameBroadcast>,
    config: GameConfig,
) -> SessionSummary {
    let tick_duration = Duration::from_secs_f64(1.0 / config.tick_rate_hz as f64);
    let (width, height) = (config.canvas_width, config.canvas_height);
    let seed = config.rng_seed;
    let mut state = GameState::new(config);
    tracing::info!(
        "Session started (seed {:?}): {} objects, exit {:.1} away",
        seed,
        state.world().objects().len(),
        state.distance_to_exit()
    );

    let mut tick_interval = tokio::time::interval(tick_duration);
    tick_interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    let start = Instant::now();
    let mut commands: u64 = 0;
    let mut frames: u64 = 0;

    loop {
        tokio::select! {
            _ = tick_interval.tick() => {}

            cmd = cmd_rx.recv() => {
                let Some(cmd) = cmd else { break };
                state.update_time(start.elapsed());
                state.on_command(cmd);
                commands += 1;
                if cmd.is_movement() {
                    tracing::debug!(
                        "{:?} -> distance to exit {:.2}",
                        cmd,
                        state.distance_to_exit()
                    );
                }
            }
        }

        state.begin_frame(start.elapsed());
        let mut canvas = Canvas::new(width, height);
        draw_frame(&state, &mut canvas, None);
        let _ = broadcast_tx.send(GameBroadcast::Frame(Arc::new(canvas)));
        frames += 1;

        if state.is_done() {
            let _ = broadcast_tx.send(GameBroadcast::Done);
            break;
        }
    }

    let summary = SessionSummary {
        won: state.is_win(),
        commands,
        frames,
        elapsed: state.current_time(),
    };
    tracing::info!(
        "Game loop ended (won: {}, commands: {}, frames: {})",
        summary.won,
        summary.commands,
        summary.frames
    );
    summary
}
