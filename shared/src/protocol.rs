use serde::{Deserialize, Serialize};

/// Input commands understood by the game state.
/// Hosts translate raw key events into these and deliver them one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    MoveLeft,
    MoveRight,
    RotateUp,
    RotateDown,
    /// Payload-free redraw trigger
    Tick,
}

impl Command {
    /// Commands that change the player pose.
    pub fn is_movement(&self) -> bool {
        !matches!(self, Command::Tick)
    }
}
