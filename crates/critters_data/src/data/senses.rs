//! Perception snapshot handed to brains every tick.

use crate::data::geometry::Point;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The kinds of entity that take part in collisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectKind {
    Critter,
    Food,
    Pit,
}

/// Visible colour of an object. Brains key their behaviour off this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    /// Food.
    Green,
    /// Pits and other obstacles.
    Brown,
    /// Other critters.
    Red,
}

impl From<ObjectKind> for Color {
    fn from(kind: ObjectKind) -> Self {
        match kind {
            ObjectKind::Critter => Color::Red,
            ObjectKind::Food => Color::Green,
            ObjectKind::Pit => Color::Brown,
        }
    }
}

/// Food whose sighting gap is below this is within reach of the mouth.
pub const BITE_RANGE: f64 = 0.1;

/// One object on the radar sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sighting {
    pub color: Color,
    /// Gap between the two surfaces, never negative.
    pub distance: f64,
    /// Bearing relative to the observer's heading, in `(-π, π]`.
    /// Positive is counter-clockwise.
    pub direction: f64,
    /// Angular width subtended by the object.
    pub width: f64,
    /// Change of `distance` since the previous tick.
    pub change: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SmellKind {
    Food,
    Critter,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scent {
    pub strength: f64,
    pub kind: SmellKind,
    pub change: f64,
}

/// A live sound, heard regardless of distance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heard {
    pub text: String,
    /// Bearing relative to the listener's heading.
    pub direction: f64,
    pub age: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BodySense {
    pub speed: f64,
    pub moving: bool,
    pub size: f64,
}

/// Everything a critter perceives on a given tick.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Senses {
    /// Sorted by ascending distance.
    pub sight: Vec<Sighting>,
    pub smell: Vec<Scent>,
    pub hearing: Vec<Heard>,
    /// Kinds of object currently in the critter's mouth.
    pub taste: Vec<ObjectKind>,
    pub body: BodySense,
    pub gps: Point,
    pub compass: f64,
}

impl Senses {
    #[must_use]
    pub fn nearest(&self) -> Option<&Sighting> {
        self.sight.first()
    }

    #[must_use]
    pub fn farthest(&self) -> Option<&Sighting> {
        self.sight.last()
    }

    /// Nearest sighting of the given colour.
    #[must_use]
    pub fn nearest_of(&self, color: Color) -> Option<&Sighting> {
        self.sight.iter().find(|s| s.color == color)
    }

    #[must_use]
    pub fn tastes(&self, kind: ObjectKind) -> bool {
        self.taste.contains(&kind)
    }
}

/// What a brain is told about the other party of a collision or attack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub id: Uuid,
    pub kind: ObjectKind,
    pub location: Point,
    pub radius: f64,
}

impl Contact {
    #[must_use]
    pub fn is_food(&self) -> bool {
        self.kind == ObjectKind::Food
    }
}
