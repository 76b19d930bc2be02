use crate::camera::{world_center_to_player, Camera};
use crate::player::Player;
use crate::world::World;
use planet_walker_shared::config::GameConfig;
use planet_walker_shared::protocol::Command;
use planet_walker_shared::vec3::{
    add, cross, distance, neg, normalize, rotate_in_plane, scale, sub, Vec3,
};
use rand_chacha::ChaCha8Rng;
use std::time::Duration;

/// Central game state: player pose, world, and session timing.
///
/// Times are offsets from the session start and only ever move forward.
pub struct GameState {
    pub config: GameConfig,
    player: Player,
    world: World,
    landmarks: [Vec3; 2],
    last_move_time: Duration,
    current_time: Duration,
    win_time: Option<Duration>,
}

impl GameState {
    /// Generate a world from the configured seed, or from OS entropy when unset.
    pub fn new(config: GameConfig) -> Self {
        use rand::SeedableRng;
        let mut rng = match config.rng_seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let world = World::generate(&config, &mut rng);
        Self::with_world(config, world)
    }

    pub fn with_world(config: GameConfig, world: World) -> Self {
        let player = Player::spawn(&config);
        let r = config.world_radius;
        let landmarks = [
            add(config.world_center, Vec3::new(r / 10.0, 0.0, r)),
            add(config.world_center, Vec3::new(-r / 5.0, 0.0, r)),
        ];
        Self {
            config,
            player,
            world,
            landmarks,
            last_move_time: Duration::ZERO,
            current_time: Duration::ZERO,
            win_time: None,
        }
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Fixed markers near the spawn point, outside the object list.
    pub fn landmarks(&self) -> [Vec3; 2] {
        self.landmarks
    }

    pub fn camera(&self) -> Camera {
        Camera::new(&self.player, &self.config)
    }

    pub fn current_time(&self) -> Duration {
        self.current_time
    }

    pub fn is_win(&self) -> bool {
        self.win_time.is_some()
    }

    pub fn win_time(&self) -> Option<Duration> {
        self.win_time
    }

    pub fn distance_to_exit(&self) -> f64 {
        distance(self.player.position, self.world.exit().position)
    }

    /// Session is over once the win has been on screen long enough.
    pub fn is_done(&self) -> bool {
        match self.win_time {
            Some(win_time) => {
                self.current_time.saturating_sub(win_time) > self.config.exit_threshold()
            }
            None => false,
        }
    }

    /// Move the clock forward; earlier timestamps are ignored.
    pub fn update_time(&mut self, now: Duration) {
        self.current_time = self.current_time.max(now);
    }

    /// Per-frame bookkeeping before drawing.
    pub fn begin_frame(&mut self, now: Duration) {
        self.update_time(now);
        self.process_before_frame();
    }

    pub fn on_command(&mut self, command: Command) {
        match command {
            Command::RotateUp => self.rotate(self.config.angle_step),
            Command::RotateDown => self.rotate(-self.config.angle_step),
            Command::MoveRight => self.step(true),
            Command::MoveLeft => self.step(false),
            Command::Tick => self.process_before_frame(),
        }
    }

    fn process_before_frame(&mut self) {
        if self.current_time.saturating_sub(self.last_move_time)
            > self.config.stop_move_animation_threshold()
        {
            self.player.step_frame = 0;
        }
    }

    fn rotate(&mut self, step: f64) {
        self.player.normal = rotated_normal(&self.player, &self.config, step);
        self.post_process_movement();
    }

    /// Walk when already facing `right`, otherwise just turn around.
    fn step(&mut self, right: bool) {
        if self.player.facing_right == right {
            self.player.position = add(self.player.position, self.player.direction);
            self.player.advance_step_frame();
        } else {
            self.player.facing_right = right;
        }
        self.post_process_movement();
    }

    fn post_process_movement(&mut self) {
        let direction = cross(
            world_center_to_player(&self.player, &self.config),
            self.player.normal,
        );
        self.player.direction = if self.player.facing_right {
            direction
        } else {
            neg(direction)
        };

        let center = self.config.world_center;
        let radial = normalize(sub(self.player.position, center));
        self.player.position = add(center, scale(radial, self.config.world_radius));

        self.last_move_time = self.current_time;
        self.check_win_condition();
    }

    fn check_win_condition(&mut self) {
        if self.win_time.is_none() && self.distance_to_exit() < self.config.win_threshold {
            self.win_time = Some(self.current_time);
            tracing::info!(
                "Exit reached at {:?} (distance {:.3})",
                self.current_time,
                self.distance_to_exit()
            );
        }
    }
}

/// Camera normal after rotating by `step` radians about the player's up axis.
pub fn rotated_normal(player: &Player, config: &GameConfig, step: f64) -> Vec3 {
    let other = cross(player.normal, world_center_to_player(player, config));
    rotate_in_plane(player.normal, other, step)
}
