use super::{PhysicalObject, Reaction};
use crate::config::AppConfig;
use critters_data::{Contact, ObjectKind, Point, Vector};
use uuid::Uuid;

/// A fixed hazard. Any critter touching it falls in and dies.
#[derive(Debug, Clone, PartialEq)]
pub struct Pit {
    pub id: Uuid,
    pub location: Point,
    pub radius: f64,
}

impl Pit {
    #[must_use]
    pub fn new(location: Point, radius: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            location,
            radius,
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }
}

impl PhysicalObject for Pit {
    fn id(&self) -> Uuid {
        self.id
    }

    fn kind(&self) -> ObjectKind {
        ObjectKind::Pit
    }

    fn location(&self) -> Point {
        self.location
    }

    fn radius(&self) -> f64 {
        self.radius
    }

    fn on_collision(&mut self, _direction: Vector, other: &Contact, _config: &AppConfig) -> Reaction {
        match other.kind {
            ObjectKind::Critter => Reaction::Capture {
                center: self.location,
            },
            _ => Reaction::Ignore,
        }
    }
}
