//! Objects scattered over the planet surface.
//!
//! Every object draws in two passes: a background pass for objects behind the
//! tangent plane (occluded by the planet disc) and a foreground pass for
//! objects in front of it.

use crate::canvas::{draw_chars, Colors, DrawSurface};
use planet_walker_shared::geom::Vec2;
use planet_walker_shared::vec3::Vec3;

const TREE_GLYPH: &str = "\n /\\\n/||\\\n/||\\\n ||";
const EXIT_GLYPH: &str = "/-\\\n| |\n| |\n\\-/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrassVariant {
    /// `///`
    Forward,
    /// `\\\`
    Back,
}

impl GrassVariant {
    pub fn glyph(&self) -> &'static str {
        match self {
            GrassVariant::Forward => "///",
            GrassVariant::Back => "\\\\\\",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    Grass { variant: GrassVariant },
    Tree,
    Exit,
}

/// How an object looks in one draw pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Appearance {
    Hidden,
    /// Single line drawn as-is at the projected point
    Line { text: &'static str, color: u32 },
    /// Multi-line glyph anchored on its last line
    Block { text: &'static str, color: u32 },
}

impl ObjectKind {
    pub fn foreground(&self) -> Appearance {
        match self {
            ObjectKind::Grass { variant } => Appearance::Line {
                text: variant.glyph(),
                color: Colors::GREEN,
            },
            ObjectKind::Tree => Appearance::Block {
                text: TREE_GLYPH,
                color: Colors::TREE_NEAR,
            },
            ObjectKind::Exit => Appearance::Block {
                text: EXIT_GLYPH,
                color: Colors::EXIT_NEAR,
            },
        }
    }

    pub fn background(&self) -> Appearance {
        match self {
            ObjectKind::Grass { .. } => Appearance::Hidden,
            ObjectKind::Tree => Appearance::Block {
                text: TREE_GLYPH,
                color: Colors::TREE_FAR,
            },
            ObjectKind::Exit => Appearance::Block {
                text: EXIT_GLYPH,
                color: Colors::EXIT_FAR,
            },
        }
    }
}

impl Appearance {
    pub fn draw(&self, surface: &mut dyn DrawSurface, point: Vec2) {
        match *self {
            Appearance::Hidden => {}
            Appearance::Line { text, color } => surface.draw_text(point.x, point.y, text, color),
            Appearance::Block { text, color } => draw_chars(surface, point, color, text),
        }
    }
}

/// An object fixed on the planet surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldObject {
    pub position: Vec3,
    pub kind: ObjectKind,
}

impl WorldObject {
    pub fn new(position: Vec3, kind: ObjectKind) -> Self {
        Self { position, kind }
    }

    pub fn is_exit(&self) -> bool {
        self.kind == ObjectKind::Exit
    }

    pub fn draw_foreground(&self, surface: &mut dyn DrawSurface, point: Vec2) {
        self.kind.foreground().draw(surface, point);
    }

    pub fn draw_background(&self, surface: &mut dyn DrawSurface, point: Vec2) {
        self.kind.background().draw(surface, point);
    }
}
