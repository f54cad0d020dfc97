use super::World;
use crate::brain::BrainRegistry;
use crate::config::AppConfig;
use crate::entity::{Critter, Food, Pit};
use critters_data::{Point, Vector};
use rand::Rng;
use std::f64::consts::TAU;
use uuid::Uuid;

impl World {
    /// Builds a populated world: pits, food, then `critters_per_brain`
    /// critters for every registered brain, all at uniformly random spots.
    pub fn new(config: AppConfig, registry: &BrainRegistry) -> crate::error::Result<Self> {
        let mut world = Self::empty(config)?;

        for _ in 0..world.config.world.pits {
            let location = world.random_location();
            let radius = world
                .rng
                .gen_range(world.config.world.pit_radius_min..=world.config.world.pit_radius_max);
            let id = world.next_id();
            world.add_pit(Pit::new(location, radius).with_id(id));
        }

        for _ in 0..world.config.world.initial_food {
            let location = world.random_location();
            let value = world
                .rng
                .gen_range(world.config.world.food_value_min..=world.config.world.food_value_max);
            let id = world.next_id();
            world.add_food(Food::new(location, value).with_id(id));
        }

        for entry in registry.iter() {
            for n in 0..world.config.world.critters_per_brain {
                let location = world.random_location();
                let heading = Vector::from_polar(1.0, world.rng.gen_range(0.0..TAU));
                let id = world.next_id();
                let critter = Critter::new(
                    entry.critter_name(n),
                    location,
                    heading,
                    world.config.critter.initial_size,
                    entry.build(),
                )
                .with_id(id);
                world.add_critter(critter);
            }
        }

        tracing::info!(
            width = world.width,
            height = world.height,
            critters = world.critters.len(),
            food = world.food.len(),
            pits = world.pits.len(),
            brains = registry.len(),
            "World spawned"
        );
        Ok(world)
    }

    pub(crate) fn random_location(&mut self) -> Point {
        Point::new(
            self.rng.gen_range(0.0..self.width),
            self.rng.gen_range(0.0..self.height),
        )
    }

    /// Ids come from the world's random source so seeded runs repeat.
    pub(crate) fn next_id(&mut self) -> Uuid {
        Uuid::from_u128(self.rng.gen())
    }
}
