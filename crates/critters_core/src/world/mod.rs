//! The toroidal world: entity registries and the tick loop.

use crate::config::AppConfig;
use crate::entity::{Critter, Food, PhysicalObject, Pit, Sound};
use crate::metrics::Metrics;
use critters_data::{DisplayObject, VisualKind};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub mod collision;
pub mod init;
pub mod update;

pub use update::TickReport;

pub struct World {
    pub width: f64,
    pub height: f64,
    pub tick: u64,
    /// Dead critters stay registered; they are skipped everywhere else.
    pub critters: Vec<Critter>,
    pub food: Vec<Food>,
    pub pits: Vec<Pit>,
    pub sounds: Vec<Sound>,
    pub config: AppConfig,
    pub metrics: Metrics,
    pub rng: ChaCha8Rng,
}

impl World {
    /// A world with nothing in it. Validates the config.
    pub fn empty(config: AppConfig) -> crate::error::Result<Self> {
        config.validate()?;
        let rng = match config.world.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Ok(Self {
            width: config.world.width,
            height: config.world.height,
            tick: 0,
            critters: Vec::new(),
            food: Vec::new(),
            pits: Vec::new(),
            sounds: Vec::new(),
            config,
            metrics: Metrics::new(),
            rng,
        })
    }

    /// Replaces the random source, e.g. to make a test reproducible.
    pub fn set_seed(&mut self, seed: u64) {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
    }

    /// Places a critter, wrapping its location into the world.
    pub fn add_critter(&mut self, mut critter: Critter) -> usize {
        critter.location = critter.location.wrap(self.width, self.height);
        self.critters.push(critter);
        self.critters.len() - 1
    }

    pub fn add_food(&mut self, mut food: Food) -> usize {
        food.location = food.location.wrap(self.width, self.height);
        self.food.push(food);
        self.food.len() - 1
    }

    pub fn add_pit(&mut self, mut pit: Pit) -> usize {
        pit.location = pit.location.wrap(self.width, self.height);
        self.pits.push(pit);
        self.pits.len() - 1
    }

    #[must_use]
    pub fn critter(&self, name: &str) -> Option<&Critter> {
        self.critters.iter().find(|c| c.name == name)
    }

    #[must_use]
    pub fn living_count(&self) -> usize {
        self.critters.iter().filter(|c| c.is_alive()).count()
    }

    #[must_use]
    pub fn all_dead(&self) -> bool {
        self.critters.iter().all(|c| c.dead)
    }

    /// Everything a view should draw this tick: pits, food, live critters,
    /// then sounds.
    #[must_use]
    pub fn display_objects(&self) -> Vec<DisplayObject> {
        let pits = self.pits.iter().map(|p| DisplayObject {
            location: p.location,
            radius: p.radius(),
            kind: VisualKind::Pit,
            label: String::new(),
        });
        let food = self.food.iter().map(|f| DisplayObject {
            location: f.location,
            radius: f.radius(),
            kind: VisualKind::Food,
            label: f.value.to_string(),
        });
        let critters = self
            .critters
            .iter()
            .filter(|c| c.is_alive())
            .map(|c| DisplayObject {
                location: c.location,
                radius: c.radius(),
                kind: VisualKind::Critter,
                label: c.name.clone(),
            });
        let sounds = self.sounds.iter().map(|s| DisplayObject {
            location: s.location,
            radius: s.radius(),
            kind: VisualKind::Sound,
            label: s.text.clone(),
        });
        pits.chain(food).chain(critters).chain(sounds).collect()
    }

    /// Logs one line per critter.
    pub fn dump_status(&self) {
        for critter in &self.critters {
            tracing::info!(
                tick = self.tick,
                name = %critter.name,
                x = critter.location.x,
                y = critter.location.y,
                speed = critter.speed(),
                size = critter.size,
                dead = critter.dead,
                "Critter status"
            );
        }
    }
}
