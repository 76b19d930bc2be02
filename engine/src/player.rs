use planet_walker_shared::config::GameConfig;
use planet_walker_shared::vec3::{add, Vec3};

/// Number of frames in the walk cycle.
pub const STEP_FRAME_COUNT: u8 = 4;

/// Player pose on the planet surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub position: Vec3,
    /// Camera plane normal; orthogonal to the local up direction
    pub normal: Vec3,
    /// Unit step taken by a walk command
    pub direction: Vec3,
    pub facing_right: bool,
    pub step_frame: u8,
}

impl Player {
    /// Standing on top of the planet (+Z), looking along +Y, facing right.
    pub fn spawn(config: &GameConfig) -> Self {
        Self {
            position: add(config.world_center, Vec3::new(0.0, 0.0, config.world_radius)),
            normal: Vec3::new(0.0, 1.0, 0.0),
            direction: Vec3::new(1.0, 0.0, 0.0),
            facing_right: true,
            step_frame: 0,
        }
    }

    pub fn advance_step_frame(&mut self) {
        self.step_frame = (self.step_frame + 1) % STEP_FRAME_COUNT;
    }

    /// Three-line sprite: head, body, legs.
    pub fn sprite(&self) -> String {
        let head = if self.facing_right { " O>" } else { "<O" };
        format!("{}\n/|\\\n{}", head, self.legs())
    }

    /// Legs for the current walk frame, mirrored when facing right.
    pub fn legs(&self) -> String {
        let left = match self.step_frame {
            0 => "/ \\",
            1 => " |\\",
            2 => " | ",
            _ => "/| ",
        };
        if !self.facing_right {
            return left.to_string();
        }
        left.chars()
            .rev()
            .map(|c| match c {
                '/' => '\\',
                '\\' => '/',
                other => other,
            })
            .collect()
    }
}
