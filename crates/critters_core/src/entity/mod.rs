//! Entities living in the world.
//!
//! Critters, food and pits are physical objects: they have a location and a
//! radius and take part in collision detection. Sounds are perceptual only.

pub mod critter;
pub mod food;
pub mod pit;
pub mod sound;

pub use critter::{ActContext, ActionOutput, Critter, PerceptionMemory};
pub use food::Food;
pub use pit::Pit;
pub use sound::Sound;

use crate::config::AppConfig;
use critters_data::{Contact, ObjectKind, Point, Vector};
use uuid::Uuid;

/// What the world must do after an object reacted to a collision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reaction {
    Ignore,
    /// The other party is moved to `center` and, if it is a critter, killed.
    Capture { center: Point },
    /// The critter takes an automatic bite of the food it touches, then its
    /// brain is consulted.
    Feed,
    /// The object's brain should be consulted; `bumped` means the body was
    /// pushed back by a solid obstacle.
    Consult { bumped: bool },
}

/// Capability set shared by everything that collides.
pub trait PhysicalObject {
    fn id(&self) -> Uuid;
    fn kind(&self) -> ObjectKind;
    fn location(&self) -> Point;
    fn radius(&self) -> f64;

    /// Per-tick hook for the object's own timers.
    fn on_tick(&mut self) {}

    /// `direction` is the unit vector pointing from this object toward `other`.
    fn on_collision(&mut self, _direction: Vector, _other: &Contact, _config: &AppConfig) -> Reaction {
        Reaction::Ignore
    }

    fn contact(&self) -> Contact {
        Contact {
            id: self.id(),
            kind: self.kind(),
            location: self.location(),
            radius: self.radius(),
        }
    }
}

/// Index of a physical object in one of the world registries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectRef {
    Critter(usize),
    Food(usize),
    Pit(usize),
}
