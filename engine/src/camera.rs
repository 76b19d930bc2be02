//! Tangent-plane camera.
//!
//! World points are projected onto the plane through the player whose normal
//! is the player's camera normal, then expressed in a screen basis:
//! screen X along `cross(down, normal)` and screen Y along `down`, the
//! direction from the player to the planet centre.

use crate::player::Player;
use planet_walker_shared::config::GameConfig;
use planet_walker_shared::geom::{project_on, Plane, Vec2, Vec2F};
use planet_walker_shared::vec3::{cross, dot, normalize, sub, Vec3};

/// Screen position of a world point and its signed depth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionInfo {
    pub screen_pos: Vec2F,
    /// Distance along the camera normal. Negative means in front of the
    /// tangent plane (foreground pass), non-negative means behind it.
    pub depth: f64,
}

impl ProjectionInfo {
    pub fn is_foreground(&self) -> bool {
        self.depth < 0.0
    }

    pub fn cell(&self) -> Vec2 {
        Vec2::from(self.screen_pos)
    }
}

/// Camera frame for one player pose.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    origin: Vec3,
    normal: Vec3,
    down: Vec3,
    x_axis: Vec3,
    screen_offset: Vec2F,
}

impl Camera {
    pub fn new(player: &Player, config: &GameConfig) -> Self {
        let down = world_center_to_player(player, config);
        Self {
            origin: player.position,
            normal: player.normal,
            down,
            x_axis: cross(down, player.normal),
            screen_offset: screen_offset(config),
        }
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    pub fn x_axis(&self) -> Vec3 {
        self.x_axis
    }

    pub fn project(&self, point: Vec3) -> Vec2F {
        let plane = Plane {
            normal: self.normal,
            origin: self.origin,
        };
        let projection = sub(project_on(point, plane), self.origin);
        Vec2F::new(dot(projection, self.x_axis), dot(projection, self.down)) + self.screen_offset
    }

    pub fn project_cell(&self, point: Vec3) -> Vec2 {
        Vec2::from(self.project(point))
    }

    pub fn project_with_depth(&self, point: Vec3) -> ProjectionInfo {
        ProjectionInfo {
            screen_pos: self.project(point),
            depth: dot(sub(point, self.origin), self.normal),
        }
    }
}

/// Unit vector from the player towards the planet centre.
pub fn world_center_to_player(player: &Player, config: &GameConfig) -> Vec3 {
    normalize(sub(config.world_center, player.position))
}

/// Canvas point the player projects to: centred horizontally, horizon at 3/4 height.
pub fn screen_offset(config: &GameConfig) -> Vec2F {
    Vec2F::new(
        config.canvas_width as f64 / 2.0,
        config.canvas_height as f64 * 3.0 / 4.0,
    )
}
