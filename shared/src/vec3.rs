//! World-space vectors: planet centre, player pose, object positions.
//! Plain values; every operation returns a new vector.

#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize, PartialEq, Default)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

pub const fn vec3(x: f64, y: f64, z: f64) -> Vec3 {
    Vec3::new(x, y, z)
}

/// Signed length of `a` along `b`; gives depth and screen coordinates.
pub fn dot(a: Vec3, b: Vec3) -> f64 {
    a.x * b.x + a.y * b.y + a.z * b.z
}

/// Right-handed: `cross(down, normal)` is the walking axis.
pub fn cross(a: Vec3, b: Vec3) -> Vec3 {
    Vec3 {
        x: a.y * b.z - a.z * b.y,
        y: a.z * b.x - a.x * b.z,
        z: a.x * b.y - a.y * b.x,
    }
}

pub fn length(v: Vec3) -> f64 {
    (v.x * v.x + v.y * v.y + v.z * v.z).sqrt()
}

/// Unit vector in the direction of `v`.
///
/// Only a player standing exactly on the planet centre has a zero offset,
/// which a radius > 0 rules out; +X keeps even that case finite.
pub fn normalize(v: Vec3) -> Vec3 {
    match length(v) {
        len if len > 0.0 => scale(v, 1.0 / len),
        _ => Vec3::new(1.0, 0.0, 0.0),
    }
}

pub fn scale(v: Vec3, s: f64) -> Vec3 {
    Vec3::new(v.x * s, v.y * s, v.z * s)
}

pub fn add(a: Vec3, b: Vec3) -> Vec3 {
    Vec3::new(a.x + b.x, a.y + b.y, a.z + b.z)
}

/// `a - b`: the offset from `b` to `a`.
pub fn sub(a: Vec3, b: Vec3) -> Vec3 {
    Vec3::new(a.x - b.x, a.y - b.y, a.z - b.z)
}

/// Flips the walking direction when the player faces left.
pub fn neg(v: Vec3) -> Vec3 {
    Vec3::new(-v.x, -v.y, -v.z)
}

/// Straight-line (chord) distance, as used by the exit check.
pub fn distance(a: Vec3, b: Vec3) -> f64 {
    length(sub(a, b))
}

/// Rotate `v` towards `other` by `angle` inside the plane they span.
/// Both are expected to be orthogonal unit vectors; the result is then unit too.
pub fn rotate_in_plane(v: Vec3, other: Vec3, angle: f64) -> Vec3 {
    add(scale(v, angle.cos()), scale(other, angle.sin()))
}
