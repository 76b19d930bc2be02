use crate::objects::{GrassVariant, ObjectKind, WorldObject};
use planet_walker_shared::config::GameConfig;
use planet_walker_shared::vec3::{add, scale, Vec3};
use rand::Rng;
use std::f64::consts::PI;

/// Index of the exit marker inside the world's object list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitIndex(usize);

impl ExitIndex {
    pub fn get(&self) -> usize {
        self.0
    }
}

/// Objects on the planet in generation order, plus the exit marker lookup.
#[derive(Debug, Clone)]
pub struct World {
    objects: Vec<WorldObject>,
    exit: ExitIndex,
}

impl World {
    /// Scatter grass, then trees, then a single exit over the sphere.
    pub fn generate(config: &GameConfig, rng: &mut impl Rng) -> Self {
        let mut objects = Vec::with_capacity(config.grass_count + config.tree_count + 1);

        for _ in 0..config.grass_count {
            let position = random_point_on_sphere(config, rng);
            let variant = if rng.gen_range(0..=1) == 0 {
                GrassVariant::Forward
            } else {
                GrassVariant::Back
            };
            objects.push(WorldObject::new(position, ObjectKind::Grass { variant }));
        }

        for _ in 0..config.tree_count {
            let position = random_point_on_sphere(config, rng);
            objects.push(WorldObject::new(position, ObjectKind::Tree));
        }

        let exit = ExitIndex(objects.len());
        objects.push(WorldObject::new(
            random_point_on_sphere(config, rng),
            ObjectKind::Exit,
        ));

        Self { objects, exit }
    }

    /// Build a world from explicit objects. Exactly one of them must be the exit.
    pub fn from_objects(objects: Vec<WorldObject>) -> Result<Self, String> {
        let mut exits = objects
            .iter()
            .enumerate()
            .filter(|(_, o)| o.is_exit())
            .map(|(i, _)| i);
        let exit = exits
            .next()
            .ok_or_else(|| "world has no exit".to_string())?;
        if exits.next().is_some() {
            return Err("world has more than one exit".to_string());
        }
        Ok(Self {
            objects,
            exit: ExitIndex(exit),
        })
    }

    pub fn objects(&self) -> &[WorldObject] {
        &self.objects
    }

    pub fn exit_index(&self) -> ExitIndex {
        self.exit
    }

    pub fn exit(&self) -> &WorldObject {
        &self.objects[self.exit.0]
    }

    pub fn count(&self, pred: impl Fn(&ObjectKind) -> bool) -> usize {
        self.objects.iter().filter(|o| pred(&o.kind)).count()
    }
}

/// Uniform spherical coordinates mapped onto the planet surface.
pub fn random_point_on_sphere(config: &GameConfig, rng: &mut impl Rng) -> Vec3 {
    let theta = rng.gen_range(0.0..PI);
    let phi = rng.gen_range(0.0..2.0 * PI);
    let unit = Vec3::new(phi.cos() * theta.sin(), phi.sin() * theta.sin(), theta.cos());
    add(config.world_center, scale(unit, config.world_radius))
}

#[cfg(test)]
mod tests {
    use super::*;
    use planet_walker_shared::vec3::{distance, vec3};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    #[test]
    fn generates_expected_counts() {
        let config = GameConfig::default();
        let world = World::generate(&config, &mut test_rng());
        assert_eq!(world.objects().len(), 376);
        assert_eq!(world.count(|k| matches!(k, ObjectKind::Grass { .. })), 300);
        assert_eq!(world.count(|k| *k == ObjectKind::Tree), 75);
        assert_eq!(world.count(|k| *k == ObjectKind::Exit), 1);
    }

    #[test]
    fn generation_order_is_grass_trees_exit() {
        let config = GameConfig::default();
        let world = World::generate(&config, &mut test_rng());
        let objects = world.objects();
        assert!(objects[..300]
            .iter()
            .all(|o| matches!(o.kind, ObjectKind::Grass { .. })));
        assert!(objects[300..375].iter().all(|o| o.kind == ObjectKind::Tree));
        assert_eq!(world.exit_index().get(), 375);
        assert!(world.exit().is_exit());
    }

    #[test]
    fn all_objects_lie_on_the_surface() {
        let config = GameConfig {
            world_center: vec3(10.0, -5.0, 3.0),
            ..Default::default()
        };
        let world = World::generate(&config, &mut test_rng());
        for o in world.objects() {
            let r = distance(o.position, config.world_center);
            assert!((r - config.world_radius).abs() < 1e-9);
        }
    }

    #[test]
    fn both_grass_variants_appear() {
        let world = World::generate(&GameConfig::default(), &mut test_rng());
        let forward = world.count(|k| {
            *k == ObjectKind::Grass {
                variant: GrassVariant::Forward,
            }
        });
        assert!(forward > 0 && forward < 300);
    }

    #[test]
    fn same_seed_same_world() {
        let config = GameConfig::default();
        let a = World::generate(&config, &mut ChaCha8Rng::seed_from_u64(7));
        let b = World::generate(&config, &mut ChaCha8Rng::seed_from_u64(7));
        assert_eq!(a.objects(), b.objects());
        let c = World::generate(&config, &mut ChaCha8Rng::seed_from_u64(8));
        assert_ne!(a.objects(), c.objects());
    }

    #[test]
    fn covers_both_hemispheres() {
        let world = World::generate(&GameConfig::default(), &mut test_rng());
        assert!(world.objects().iter().any(|o| o.position.z > 125.0));
        assert!(world.objects().iter().any(|o| o.position.z < -125.0));
    }

    #[test]
    fn from_objects_requires_exactly_one_exit() {
        let tree = WorldObject::new(vec3(0.0, 0.0, 250.0), ObjectKind::Tree);
        let exit = WorldObject::new(vec3(250.0, 0.0, 0.0), ObjectKind::Exit);

        assert!(World::from_objects(vec![tree]).is_err());
        assert!(World::from_objects(vec![exit, tree, exit]).is_err());

        let world = World::from_objects(vec![tree, exit]).unwrap();
        assert_eq!(world.exit_index().get(), 1);
        assert_eq!(world.exit().position, exit.position);
    }
}
