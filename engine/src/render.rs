//! Frame composition.
//!
//! Painter's algorithm over a shared surface, back to front: stars,
//! landmarks, objects behind the tangent plane, the planet disc, the player,
//! objects in front, overlays, and the victory banner.

use crate::camera::Camera;
use crate::canvas::{draw_chars, rgb, Colors, DrawSurface};
use crate::starfield::draw_starfield;
use crate::state::GameState;

const VICTORY_POS: (i32, i32) = (20, 20);
const LANDMARK_NEAR_RADIUS: f64 = 15.0;
const LANDMARK_FAR_RADIUS: f64 = 25.0;

/// Extra layer drawn after the scene and before the victory banner.
pub trait Overlay {
    fn draw(&self, surface: &mut dyn DrawSurface, state: &GameState);
}

pub fn draw_frame(state: &GameState, surface: &mut dyn DrawSurface, overlay: Option<&dyn Overlay>) {
    let camera = state.camera();

    draw_starfield(surface);
    draw_landmarks(state, &camera, surface);
    draw_objects_background(state, &camera, surface);
    draw_planet(state, &camera, surface);
    draw_player(state, &camera, surface);
    draw_objects_foreground(state, &camera, surface);

    if let Some(overlay) = overlay {
        overlay.draw(surface, state);
    }
    #[cfg(debug_assertions)]
    draw_debug(state, surface);

    if state.is_win() {
        surface.draw_text(VICTORY_POS.0, VICTORY_POS.1, "Victory!", Colors::WHITE);
    }
}

/// The two fixed markers beside the spawn point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Landmark {
    /// Green ring that shrinks quickly with depth
    Near,
    /// Red ring that shrinks slowly and fades to black
    Far,
}

impl Landmark {
    pub const ALL: [Landmark; 2] = [Landmark::Near, Landmark::Far];

    /// Outline radius and colour at `depth`, or `None` in front of the
    /// tangent plane.
    pub fn circle(&self, depth: f64) -> Option<(i32, u32)> {
        if depth < 0.0 {
            return None;
        }
        match self {
            Landmark::Near => {
                let radius = LANDMARK_NEAR_RADIUS * (1.0 / (1.0 + depth));
                Some((radius as i32, Colors::GREEN))
            }
            Landmark::Far => {
                let radius = LANDMARK_FAR_RADIUS * (1.0 / (1.0 + depth).powf(1.0 / 3.0));
                // 3 levels per unit of depth, clamped instead of wrapping.
                let red = 255_i64
                    .saturating_sub((depth as i64).saturating_mul(3))
                    .clamp(0, 255) as u8;
                Some((radius as i32, rgb(red, 0, 0)))
            }
        }
    }
}

fn draw_landmarks(state: &GameState, camera: &Camera, surface: &mut dyn DrawSurface) {
    for (landmark, position) in Landmark::ALL.into_iter().zip(state.landmarks()) {
        let info = camera.project_with_depth(position);
        if let Some((radius, color)) = landmark.circle(info.depth) {
            let p = info.cell();
            surface.draw_circle(p.x, p.y, radius, color);
        }
    }
}

fn draw_objects_background(state: &GameState, camera: &Camera, surface: &mut dyn DrawSurface) {
    for object in state.world().objects() {
        let info = camera.project_with_depth(object.position);
        if !info.is_foreground() {
            object.draw_background(surface, info.cell());
        }
    }
}

fn draw_objects_foreground(state: &GameState, camera: &Camera, surface: &mut dyn DrawSurface) {
    for object in state.world().objects() {
        let info = camera.project_with_depth(object.position);
        if info.is_foreground() {
            object.draw_foreground(surface, info.cell());
        }
    }
}

fn draw_planet(state: &GameState, camera: &Camera, surface: &mut dyn DrawSurface) {
    let center = camera.project_cell(state.config.world_center);
    surface.draw_circle_filled(
        center.x,
        center.y,
        state.config.world_radius as i32,
        Colors::ROSY_BROWN,
    );
}

fn draw_player(state: &GameState, camera: &Camera, surface: &mut dyn DrawSurface) {
    let player = state.player();
    let pos = camera.project_cell(player.position);
    draw_chars(surface, pos, Colors::WHITE, &player.sprite());
}

#[cfg(debug_assertions)]
fn draw_debug(state: &GameState, surface: &mut dyn DrawSurface) {
    let text = format!("Distance to exit: {}", state.distance_to_exit());
    surface.draw_text(0, 0, &text, Colors::WHITE);
}
