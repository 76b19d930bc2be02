//! Screen-space points and plane projection.

use crate::vec3::{dot, scale, sub, Vec3};

/// Integer canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Vec2 {
    pub x: i32,
    pub y: i32,
}

impl Vec2 {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<Vec2F> for Vec2 {
    /// Truncates toward zero, the same way `as i32` does.
    fn from(p: Vec2F) -> Self {
        Vec2::new(p.x as i32, p.y as i32)
    }
}

/// Floating point screen coordinates, before truncation to cells.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2F {
    pub x: f64,
    pub y: f64,
}

impl Vec2F {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl std::ops::Add for Vec2F {
    type Output = Vec2F;

    fn add(self, other: Vec2F) -> Vec2F {
        Vec2F::new(self.x + other.x, self.y + other.y)
    }
}

/// Plane through `origin` with unit `normal`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub normal: Vec3,
    pub origin: Vec3,
}

/// Orthogonal projection of `point` onto `plane`.
pub fn project_on(point: Vec3, plane: Plane) -> Vec3 {
    let dist = dot(sub(point, plane.origin), plane.normal);
    sub(point, scale(plane.normal, dist))
}
