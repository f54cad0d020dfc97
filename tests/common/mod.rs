pub mod macros;

use critters_lib::model::brain::{Brain, ScriptedBrain};
use critters_lib::model::config::AppConfig;
use critters_lib::model::data::{Command, Contact, Point, Senses, Vector};
use critters_lib::model::entity::{Critter, Food, Pit};
use critters_lib::model::world::World;
use rand::RngCore;
use std::sync::{Arc, Mutex};

/// An empty, seeded world to which a test adds exactly what it needs.
#[allow(dead_code)]
pub struct WorldBuilder {
    config: AppConfig,
    critters: Vec<Critter>,
    food: Vec<Food>,
    pits: Vec<Pit>,
}

#[allow(dead_code)]
impl WorldBuilder {
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.world.initial_food = 0;
        config.world.pits = 0;
        config.world.critters_per_brain = 0;
        config.world.seed = Some(0);
        Self {
            config,
            critters: Vec::new(),
            food: Vec::new(),
            pits: Vec::new(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.world.seed = Some(seed);
        self
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.config.world.width = width;
        self.config.world.height = height;
        self
    }

    pub fn with_config<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut AppConfig),
    {
        modifier(&mut self.config);
        self
    }

    pub fn with_food(mut self, x: f64, y: f64, value: u32) -> Self {
        self.food.push(Food::new(Point::new(x, y), value));
        self
    }

    pub fn with_pit(mut self, x: f64, y: f64, radius: f64) -> Self {
        self.pits.push(Pit::new(Point::new(x, y), radius));
        self
    }

    pub fn with_critter(mut self, critter: Critter) -> Self {
        self.critters.push(critter);
        self
    }

    pub fn with_brain(
        self,
        name: &str,
        x: f64,
        y: f64,
        heading: Vector,
        brain: Box<dyn Brain>,
    ) -> Self {
        self.with_critter(Critter::new(name, Point::new(x, y), heading, 1.0, brain))
    }

    /// A critter that plays back the given command lines.
    pub fn with_scripted(self, name: &str, x: f64, y: f64, heading: Vector, lines: &[&str]) -> Self {
        let brain = ScriptedBrain::new(lines.iter().copied());
        self.with_brain(name, x, y, heading, Box::new(brain))
    }

    pub fn build(self) -> World {
        let mut world = World::empty(self.config).expect("Failed to create world in test builder");
        for pit in self.pits {
            world.add_pit(pit);
        }
        for food in self.food {
            world.add_food(food);
        }
        for critter in self.critters {
            world.add_critter(critter);
        }
        world
    }
}

/// Records the direction of every collision it is told about and never acts.
#[allow(dead_code)]
#[derive(Debug, Clone, Default)]
pub struct ProbeBrain {
    pub collisions: Arc<Mutex<Vec<Vector>>>,
}

impl Brain for ProbeBrain {
    fn on_tick(&mut self, _senses: &Senses, _rng: &mut dyn RngCore) -> Option<Command> {
        None
    }

    fn on_collision(&mut self, direction: Vector, _other: &Contact, _senses: &Senses) -> Option<Command> {
        self.collisions
            .lock()
            .expect("probe lock poisoned")
            .push(direction);
        None
    }
}
