use crate::vec3::Vec3;
use std::time::Duration;

/// Largest canvas side, in points.
pub const MAX_CANVAS_SIZE: i32 = 4096;
/// Largest planet radius and centre offset.
pub const MAX_WORLD_EXTENT: f64 = 1e6;
/// Largest number of grass or tree objects.
pub const MAX_OBJECT_COUNT: usize = 100_000;

/// Game configuration
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameConfig {
    pub world_center: Vec3,
    pub world_radius: f64,
    /// Canvas size in points (a terminal cell is 2x4 points)
    pub canvas_width: i32,
    pub canvas_height: i32,
    /// Distance to the exit marker that counts as reaching it
    pub win_threshold: f64,
    /// Rotation per rotate command (radians)
    pub angle_step: f64,
    /// Idle time after which the walk animation falls back to the rest pose
    pub stop_move_animation_ms: u64,
    /// Time between winning and the end of the session
    pub exit_delay_ms: u64,
    pub grass_count: usize,
    pub tree_count: usize,
    /// Redraw cadence of the game loop
    pub tick_rate_hz: u32,
    /// Fixed world seed; `None` draws one from OS entropy
    pub rng_seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            world_center: Vec3::ZERO,
            world_radius: 250.0,
            canvas_width: 200,
            canvas_height: 100,
            win_threshold: 5.0,
            angle_step: std::f64::consts::PI / 80.0, // 2.25 degrees
            stop_move_animation_ms: 250,
            exit_delay_ms: 2000,
            grass_count: 300,
            tree_count: 75,
            tick_rate_hz: 30,
            rng_seed: None,
        }
    }
}

impl GameConfig {
    pub fn stop_move_animation_threshold(&self) -> Duration {
        Duration::from_millis(self.stop_move_animation_ms)
    }

    pub fn exit_threshold(&self) -> Duration {
        Duration::from_millis(self.exit_delay_ms)
    }

    /// Parse a JSON config; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("invalid config: {}", e))
    }

    pub fn validate(&self) -> Result<(), String> {
        let c = self.world_center;
        if ![c.x, c.y, c.z]
            .iter()
            .all(|v| v.is_finite() && v.abs() <= MAX_WORLD_EXTENT)
        {
            return Err(format!(
                "world_center must be finite and within {}",
                MAX_WORLD_EXTENT
            ));
        }
        if !self.world_radius.is_finite()
            || self.world_radius <= 0.0
            || self.world_radius > MAX_WORLD_EXTENT
        {
            return Err(format!("world_radius must be in (0, {}]", MAX_WORLD_EXTENT));
        }
        if self.canvas_width <= 0
            || self.canvas_height <= 0
            || self.canvas_width > MAX_CANVAS_SIZE
            || self.canvas_height > MAX_CANVAS_SIZE
        {
            return Err(format!("canvas size must be in 1..={}", MAX_CANVAS_SIZE));
        }
        if self.grass_count > MAX_OBJECT_COUNT || self.tree_count > MAX_OBJECT_COUNT {
            return Err(format!(
                "grass_count and tree_count must be <= {}",
                MAX_OBJECT_COUNT
            ));
        }
        if !self.win_threshold.is_finite() || self.win_threshold <= 0.0 {
            return Err("win_threshold must be finite and > 0".to_string());
        }
        if !self.angle_step.is_finite()
            || self.angle_step <= 0.0
            || self.angle_step >= std::f64::consts::PI
        {
            return Err("angle_step must be in (0, PI)".to_string());
        }
        if self.tick_rate_hz == 0 {
            return Err("tick_rate_hz must be > 0".to_string());
        }
        Ok(())
    }
}
