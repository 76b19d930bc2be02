//! Autopilot that walks the player to the exit.
//!
//! The bot works in the player's tangent frame: `along` is the exit offset on
//! the walking axis, `across` the offset on the camera normal. Walking never
//! changes `across`, so the bot first turns until the exit lies as close to the
//! walking axis as the rotation step allows, then walks towards it.

use crate::camera::world_center_to_player;
use crate::state::{rotated_normal, GameState};
use planet_walker_shared::protocol::Command;
use planet_walker_shared::vec3::{cross, dot, sub, Vec3};

/// Misalignment below which an extra rotation is not worth issuing.
const ALIGN_EPSILON: f64 = 1e-12;

/// Exit offset measured against a candidate camera normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bearing {
    pub along: f64,
    pub across: f64,
}

impl Bearing {
    /// Angle between the exit direction and the walking axis (either way).
    pub fn misalignment(&self) -> f64 {
        self.across.abs().atan2(self.along.abs())
    }
}

pub fn bearing(state: &GameState, normal: Vec3) -> Bearing {
    let player = state.player();
    let x_axis = cross(world_center_to_player(player, &state.config), normal);
    let offset = sub(state.world().exit().position, player.position);
    Bearing {
        along: dot(offset, x_axis),
        across: dot(offset, normal),
    }
}

#[derive(Debug, Default)]
pub struct Autopilot {
    pub rotations: u64,
    pub steps: u64,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next command towards the exit, or `None` once the exit is reached.
    pub fn next_command(&mut self, state: &GameState) -> Option<Command> {
        if state.is_win() {
            return None;
        }

        let player = state.player();
        let current = bearing(state, player.normal);
        let step = state.config.angle_step;
        let up = bearing(state, rotated_normal(player, &state.config, step));
        let down = bearing(state, rotated_normal(player, &state.config, -step));

        let (best, command) = if up.misalignment() <= down.misalignment() {
            (up, Command::RotateUp)
        } else {
            (down, Command::RotateDown)
        };
        if best.misalignment() < current.misalignment() - ALIGN_EPSILON {
            self.rotations += 1;
            return Some(command);
        }

        self.steps += 1;
        if current.along >= 0.0 {
            Some(Command::MoveRight)
        } else {
            Some(Command::MoveLeft)
        }
    }
}
