//! Headless run of the planet walker.
//!
//! Generates a seeded world, lets the autopilot walk to the exit with
//! simulated time, and prints a JSON summary on stdout.
//!
//! Usage: cargo run --bin autoplay -- [OPTIONS]
//!
//! Options:
//!   --seed N           World seed (default: 1)
//!   --max-commands N   Give up after this many commands (default: 100000)

use planet_walker_engine::bot::Autopilot;
use planet_walker_engine::canvas::Canvas;
use planet_walker_engine::objects::ObjectKind;
use planet_walker_engine::render::draw_frame;
use planet_walker_engine::state::GameState;
use planet_walker_shared::config::GameConfig;
use serde::Serialize;
use std::time::Duration;

#[derive(Serialize)]
struct Summary {
    seed: u64,
    grass: usize,
    trees: usize,
    exit_index: usize,
    commands: u64,
    rotations: u64,
    steps: u64,
    won: bool,
    done: bool,
    elapsed_ms: u128,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().collect();
    let mut seed: u64 = 1;
    let mut max_commands: u64 = 100_000;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                seed = args.get(i).and_then(|s| s.parse().ok()).unwrap_or(seed);
            }
            "--max-commands" => {
                i += 1;
                max_commands = args
                    .get(i)
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(max_commands);
            }
            other => eprintln!("Ignoring unknown argument: {}", other),
        }
        i += 1;
    }

    let config = GameConfig {
        rng_seed: Some(seed),
        ..Default::default()
    };
    if let Err(e) = config.validate() {
        eprintln!("Invalid game configuration: {}", e);
        std::process::exit(1);
    }

    let frame_time = Duration::from_secs_f64(1.0 / config.tick_rate_hz as f64);
    let (width, height) = (config.canvas_width, config.canvas_height);
    let mut state = GameState::new(config);
    let mut bot = Autopilot::new();
    let mut now = Duration::ZERO;
    let mut commands: u64 = 0;

    while commands < max_commands && !state.is_done() {
        now += frame_time;
        state.update_time(now);
        if let Some(cmd) = bot.next_command(&state) {
            state.on_command(cmd);
            commands += 1;
        }
        state.begin_frame(now);
    }

    let mut canvas = Canvas::new(width, height);
    draw_frame(&state, &mut canvas, None);
    let picture: Vec<String> = (0..canvas.rows()).map(|row| canvas.row_text(row)).collect();
    tracing::info!("Final frame:\n{}", picture.join("\n"));

    let world = state.world();
    let summary = Summary {
        seed,
        grass: world.count(|kind| matches!(kind, ObjectKind::Grass { .. })),
        trees: world.count(|kind| *kind == ObjectKind::Tree),
        exit_index: world.exit_index().get(),
        commands,
        rotations: bot.rotations,
        steps: bot.steps,
        won: state.is_win(),
        done: state.is_done(),
        elapsed_ms: state.current_time().as_millis(),
    };
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Failed to encode summary: {}", e);
            std::process::exit(1);
        }
    }
}
