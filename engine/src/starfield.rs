use crate::canvas::{Colors, DrawSurface};

const X_START: u64 = 3;
const Y_START: u64 = 5;
const X_MULT: u64 = 48271;
const Y_MULT: u64 = 11141;
const MODULUS: u64 = 0x7fff_ffff;
pub const STAR_COUNT: usize = 200;

/// Fixed Lehmer sequence of raw star coordinates.
///
/// Always restarts from the same seed so the sky is identical every frame
/// and on every machine. 64-bit intermediates keep the products exact.
#[derive(Debug, Clone)]
pub struct StarSequence {
    x: u64,
    y: u64,
}

impl StarSequence {
    pub fn new() -> Self {
        Self {
            x: X_START,
            y: Y_START,
        }
    }
}

impl Default for StarSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for StarSequence {
    type Item = (u64, u64);

    fn next(&mut self) -> Option<Self::Item> {
        self.x = self.x * X_MULT % MODULUS;
        self.y = self.y * Y_MULT % MODULUS;
        Some((self.x, self.y))
    }
}

/// Plot the starfield across the whole surface.
pub fn draw_starfield(surface: &mut dyn DrawSurface) {
    let w = surface.width().max(1) as u64;
    let h = surface.height().max(1) as u64;
    for (x, y) in StarSequence::new().take(STAR_COUNT) {
        surface.draw_point((x % w) as i32, (y % h) as i32, Colors::WHITE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Canvas;

    #[test]
    fn first_pair_matches_seed_constants() {
        let mut stars = StarSequence::new();
        assert_eq!(stars.next(), Some((144813, 55705)));
        assert_eq!(stars.next(), Some((144813 * 48271 % 0x7fffffff, 55705 * 11141)));
    }

    #[test]
    fn values_stay_below_modulus() {
        assert!(StarSequence::new()
            .take(10_000)
            .all(|(x, y)| x < MODULUS && y < MODULUS && x > 0 && y > 0));
    }

    #[test]
    fn sequence_restarts_identically() {
        let a: Vec<_> = StarSequence::new().take(STAR_COUNT).collect();
        let b: Vec<_> = StarSequence::new().take(STAR_COUNT).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn every_frame_draws_the_same_sky() {
        let mut first = Canvas::new(200, 100);
        let mut second = Canvas::new(200, 100);
        draw_starfield(&mut first);
        draw_starfield(&mut second);
        assert_eq!(first, second);
        assert!(first.is_lit(13, 5));
    }
}
