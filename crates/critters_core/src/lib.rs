//! # Critters Core
//!
//! The simulation kernel for a discrete-tick artificial-life world.
//!
//! Critters steered by pluggable brains wander a toroidal world shared with
//! food and pits. Every tick each live critter, in random order:
//! - senses its surroundings
//! - asks its brain for a command
//! - carries the command out, moves and wraps around the edges
//! - takes a bite of any food under it
//!
//! Overlapping objects are then resolved pairwise.
//!
//! ## Example
//!
//! ```
//! use critters_core::brain::BrainRegistry;
//! use critters_core::config::AppConfig;
//! use critters_core::world::World;
//!
//! let mut config = AppConfig::default();
//! config.world.seed = Some(42);
//! let mut world = World::new(config, &BrainRegistry::with_builtins()).unwrap();
//! for _ in 0..10 {
//!     world.tick();
//! }
//! assert_eq!(world.tick, 10);
//! ```

/// Decision policies and their registry
pub mod brain;
/// Configuration management for simulation parameters
pub mod config;
/// Critters, food, pits and sounds
pub mod entity;
/// Kernel error types
pub mod error;
/// Tick metrics and structured logging
pub mod metrics;
/// Perception snapshots
pub mod senses;
/// World registries, tick loop and collisions
pub mod world;

pub use brain::{Brain, BrainRegistry};
pub use config::AppConfig;
pub use error::{Result, SimError};
pub use metrics::{init_logging, Metrics};
pub use world::{TickReport, World};
