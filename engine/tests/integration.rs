//! Integration tests for the planet walker engine.
//!
//! These tests run the real game loop on a paused tokio clock and observe it
//! through the frame broadcast, the same way the terminal client does.

use planet_walker_engine::bot::Autopilot;
use planet_walker_engine::canvas::Canvas;
use planet_walker_engine::game_loop::{run_game_loop, GameBroadcast, SessionSummary};
use planet_walker_engine::state::GameState;
use planet_walker_shared::config::GameConfig;
use planet_walker_shared::protocol::Command;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast::error::RecvError;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// Empty scenery keeps the player's cells free of foreground objects.
fn test_config() -> GameConfig {
    GameConfig {
        rng_seed: Some(12345),
        grass_count: 0,
        tree_count: 0,
        ..Default::default()
    }
}

fn start_game(
    config: GameConfig,
) -> (
    mpsc::Sender<Command>,
    broadcast::Receiver<GameBroadcast>,
    JoinHandle<SessionSummary>,
) {
    let (cmd_tx, cmd_rx) = mpsc::channel::<Command>(16);
    let (broadcast_tx, broadcast_rx) = broadcast::channel::<GameBroadcast>(256);
    let handle = tokio::spawn(run_game_loop(cmd_rx, broadcast_tx, config));
    (cmd_tx, broadcast_rx, handle)
}

/// Next broadcast, skipping over frames dropped for lagging.
async fn recv_broadcast(rx: &mut broadcast::Receiver<GameBroadcast>) -> GameBroadcast {
    loop {
        match rx.recv().await {
            Ok(msg) => return msg,
            Err(RecvError::Lagged(_)) => continue,
            Err(RecvError::Closed) => panic!("Game loop closed the broadcast unexpectedly"),
        }
    }
}

async fn next_frame(rx: &mut broadcast::Receiver<GameBroadcast>) -> Arc<Canvas> {
    match recv_broadcast(rx).await {
        GameBroadcast::Frame(canvas) => canvas,
        GameBroadcast::Done => panic!("Expected a frame, got Done"),
    }
}

/// Wait (in simulated time) for a frame whose player row starts with `expected`.
async fn wait_for_sprite_row(
    rx: &mut broadcast::Receiver<GameBroadcast>,
    row: usize,
    expected: &str,
) -> Instant {
    let search = async {
        loop {
            let frame = next_frame(rx).await;
            if sprite_row(&frame, row).starts_with(expected) {
                return Instant::now();
            }
        }
    };
    tokio::time::timeout(Duration::from_secs(5), search)
        .await
        .unwrap_or_else(|_| panic!("No frame with {:?} on row {}", expected, row))
}

fn sprite_row(canvas: &Canvas, row: usize) -> String {
    canvas.row_text(row).chars().skip(50).take(3).collect()
}

// ============================================================================
// Tests
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_frames_flow_without_input() {
    let (_cmd_tx, mut rx, _handle) = start_game(test_config());

    for _ in 0..3 {
        let frame = next_frame(&mut rx).await;
        assert_eq!(frame.cols(), 100);
        assert_eq!(frame.rows(), 25);
        assert_eq!(sprite_row(&frame, 16), " O>");
        assert_eq!(sprite_row(&frame, 18), "/ \\");
    }
}

#[tokio::test(start_paused = true)]
async fn test_frames_arrive_at_tick_rate() {
    let (_cmd_tx, mut rx, _handle) = start_game(test_config());

    let _ = next_frame(&mut rx).await;
    let start = Instant::now();
    for _ in 0..30 {
        let _ = next_frame(&mut rx).await;
    }
    let elapsed = start.elapsed();
    assert!(
        elapsed >= Duration::from_millis(900) && elapsed <= Duration::from_millis(1100),
        "30 idle frames took {:?}",
        elapsed
    );
}

#[tokio::test(start_paused = true)]
async fn test_turning_mirrors_the_sprite() {
    let (cmd_tx, mut rx, _handle) = start_game(test_config());

    cmd_tx.send(Command::MoveLeft).await.unwrap();
    wait_for_sprite_row(&mut rx, 16, "<O").await;
}

#[tokio::test(start_paused = true)]
async fn test_walk_animation_resets_after_idle() {
    let (cmd_tx, mut rx, _handle) = start_game(test_config());
    let _ = next_frame(&mut rx).await;

    let sent_at = Instant::now();
    cmd_tx.send(Command::MoveRight).await.unwrap();
    wait_for_sprite_row(&mut rx, 18, "/| ").await;

    let rested_at = wait_for_sprite_row(&mut rx, 18, "/ \\").await;
    assert!(
        rested_at - sent_at > Duration::from_millis(250),
        "Rest pose came back after only {:?}",
        rested_at - sent_at
    );
}

#[tokio::test(start_paused = true)]
async fn test_session_ends_after_victory_delay() {
    // Any pose change lands within the threshold.
    let config = GameConfig {
        win_threshold: 1000.0,
        ..test_config()
    };
    let (cmd_tx, mut rx, handle) = start_game(config);
    let _ = next_frame(&mut rx).await;

    let sent_at = Instant::now();
    cmd_tx.send(Command::RotateUp).await.unwrap();

    let mut last_frame = None;
    let done_at = loop {
        match recv_broadcast(&mut rx).await {
            GameBroadcast::Frame(frame) => last_frame = Some(frame),
            GameBroadcast::Done => break Instant::now(),
        }
    };
    assert!(done_at - sent_at > Duration::from_secs(2));

    let last_frame = last_frame.expect("at least one frame before Done");
    assert!(last_frame.row_text(5).contains("Victory!"));

    let summary = handle.await.unwrap();
    assert!(summary.won);
    assert_eq!(summary.commands, 1);
    assert!(summary.elapsed > Duration::from_secs(2));
}

#[tokio::test(start_paused = true)]
async fn test_loop_ends_when_commands_close() {
    let (cmd_tx, mut rx, handle) = start_game(test_config());
    let _ = next_frame(&mut rx).await;

    drop(cmd_tx);
    let summary = tokio::time::timeout(Duration::from_secs(1), handle)
        .await
        .expect("loop should stop once the command channel is closed")
        .unwrap();
    assert!(!summary.won);
    assert_eq!(summary.commands, 0);
}

#[tokio::test(start_paused = true)]
async fn test_commands_after_win_keep_the_banner() {
    let config = GameConfig {
        win_threshold: 1000.0,
        ..test_config()
    };
    let (cmd_tx, mut rx, _handle) = start_game(config);

    cmd_tx.send(Command::MoveRight).await.unwrap();
    cmd_tx.send(Command::MoveLeft).await.unwrap();
    cmd_tx.send(Command::MoveLeft).await.unwrap();

    wait_for_sprite_row(&mut rx, 16, "<O").await;
    let frame = next_frame(&mut rx).await;
    assert!(frame.row_text(5).contains("Victory!"));
}

#[test]
fn test_autopilot_reaches_exit_of_seeded_world() {
    for seed in [1_u64, 7, 12345] {
        let config = GameConfig {
            rng_seed: Some(seed),
            ..Default::default()
        };
        let frame_time = Duration::from_secs_f64(1.0 / config.tick_rate_hz as f64);
        let mut state = GameState::new(config);
        let mut bot = Autopilot::new();
        let mut now = Duration::ZERO;

        for _ in 0..50_000 {
            let Some(cmd) = bot.next_command(&state) else {
                break;
            };
            now += frame_time;
            state.update_time(now);
            state.on_command(cmd);
        }
        assert!(state.is_win(), "seed {} not won", seed);
        assert!(!state.is_done());

        let won_at = state.win_time().unwrap();
        state.begin_frame(won_at + Duration::from_secs(2));
        assert!(!state.is_done());
        state.begin_frame(won_at + Duration::from_millis(2001));
        assert!(state.is_done(), "seed {} not done", seed);
    }
}
