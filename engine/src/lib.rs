//! Planet walker engine library.
//!
//! This module exposes the game core (state, camera, rendering) and the async
//! game loop for use in tests and binaries.

pub mod bot;
pub mod camera;
pub mod canvas;
pub mod game_loop;
pub mod objects;
pub mod player;
pub mod render;
pub mod starfield;
pub mod state;
pub mod world;
