//! Configuration management for simulation parameters.
//!
//! Strongly-typed configuration structures mapping to `config.toml`.
//! Every field has a default, so a partial file only overrides what it names.
//!
//! ## Example `config.toml`
//!
//! ```toml
//! target_tps = 30
//!
//! [world]
//! width = 200.0
//! height = 100.0
//! initial_food = 40
//! pits = 3
//! seed = 7
//!
//! [senses]
//! sight_radius = 30.0
//! ```

use serde::{Deserialize, Serialize};

/// Shape of the world and what is placed in it at start-up.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct WorldConfig {
    pub width: f64,
    pub height: f64,
    pub initial_food: usize,
    pub food_value_min: u32,
    pub food_value_max: u32,
    pub pits: usize,
    pub pit_radius_min: f64,
    pub pit_radius_max: f64,
    /// How many critters each registered brain gets at spawn time.
    pub critters_per_brain: usize,
    pub seed: Option<u64>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 200.0,
            height: 100.0,
            initial_food: 30,
            food_value_min: 3,
            food_value_max: 12,
            pits: 4,
            pit_radius_min: 2.0,
            pit_radius_max: 5.0,
            critters_per_brain: 3,
            seed: None,
        }
    }
}

/// Critter body physics.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct CritterConfig {
    /// Starting size; radius is `sqrt(size)`.
    pub initial_size: f64,
    /// Size lost per non-food collision.
    pub collision_shrink: f64,
    /// Collisions never shrink a critter below this.
    pub min_size: f64,
    /// `Stop` divides the speed by this instead of zeroing it.
    pub stop_divisor: f64,
    /// Speeds at or below this read as "not moving".
    pub moving_threshold: f64,
}

impl Default for CritterConfig {
    fn default() -> Self {
        Self {
            initial_size: 1.0,
            collision_shrink: 0.1,
            min_size: 0.25,
            stop_divisor: 1000.0,
            moving_threshold: 0.01,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct SenseConfig {
    pub sight_radius: f64,
    pub smell_radius: f64,
}

impl Default for SenseConfig {
    fn default() -> Self {
        Self {
            sight_radius: 25.0,
            smell_radius: 40.0,
        }
    }
}

/// Lifetimes (in ticks) of the sounds critters make.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct SoundConfig {
    pub eat_volume: u32,
    pub bump_volume: u32,
    pub death_volume: u32,
}

impl Default for SoundConfig {
    fn default() -> Self {
        Self {
            eat_volume: 5,
            bump_volume: 3,
            death_volume: 20,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub world: WorldConfig,
    pub critter: CritterConfig,
    pub senses: SenseConfig,
    pub sound: SoundConfig,
    /// Ticks per second for throttled runs.
    pub target_tps: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            world: WorldConfig::default(),
            critter: CritterConfig::default(),
            senses: SenseConfig::default(),
            sound: SoundConfig::default(),
            target_tps: 20,
        }
    }
}

impl AppConfig {
    /// Validates all configuration parameters.
    ///
    /// Returns `Ok(())` if all parameters are valid, or `Err` with a description
    /// of the first validation failure.
    pub fn validate(&self) -> anyhow::Result<()> {
        // World validation
        anyhow::ensure!(
            self.world.width.is_finite() && self.world.width > 0.0,
            "World width must be positive"
        );
        anyhow::ensure!(
            self.world.height.is_finite() && self.world.height > 0.0,
            "World height must be positive"
        );
        anyhow::ensure!(
            self.world.width <= 10_000.0 && self.world.height <= 10_000.0,
            "World too large (max 10000 per side)"
        );
        anyhow::ensure!(
            self.world.initial_food <= 10_000,
            "Initial food too large (max 10000)"
        );
        anyhow::ensure!(
            self.world.food_value_min > 0,
            "Minimum food value must be positive"
        );
        anyhow::ensure!(
            self.world.food_value_min <= self.world.food_value_max,
            "Food value range is empty"
        );
        anyhow::ensure!(
            self.world.pit_radius_min > 0.0,
            "Pit radius must be positive"
        );
        anyhow::ensure!(
            self.world.pit_radius_min <= self.world.pit_radius_max,
            "Pit radius range is empty"
        );
        anyhow::ensure!(
            self.world.critters_per_brain <= 1000,
            "Too many critters per brain (max 1000)"
        );

        // Critter validation
        anyhow::ensure!(
            self.critter.initial_size > 0.0,
            "Initial critter size must be positive"
        );
        anyhow::ensure!(
            self.critter.min_size > 0.0,
            "Minimum critter size must be positive"
        );
        anyhow::ensure!(
            self.critter.collision_shrink >= 0.0,
            "Collision shrink must be non-negative"
        );
        anyhow::ensure!(
            self.critter.stop_divisor > 1.0,
            "Stop divisor must be greater than 1"
        );
        anyhow::ensure!(
            self.critter.moving_threshold >= 0.0,
            "Moving threshold must be non-negative"
        );

        // Senses validation
        anyhow::ensure!(
            self.senses.sight_radius >= 0.0 && self.senses.smell_radius >= 0.0,
            "Sensing radii must be non-negative"
        );

        // Target TPS validation
        anyhow::ensure!(self.target_tps > 0, "Target TPS must be positive");
        anyhow::ensure!(self.target_tps <= 240, "Target TPS too high (max 240)");

        Ok(())
    }

    /// Parses and validates a `config.toml` document.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Hash of every parameter that changes simulation behaviour.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", self.world).as_bytes());
        hasher.update(format!("{:?}", self.critter).as_bytes());
        hasher.update(format!("{:?}", self.senses).as_bytes());
        hasher.update(format!("{:?}", self.sound).as_bytes());
        hex::encode(hasher.finalize())
    }
}
