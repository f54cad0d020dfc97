use super::PhysicalObject;
use critters_data::{ObjectKind, Point};
use uuid::Uuid;

/// A heap of edible units. Radius shrinks as it is eaten.
#[derive(Debug, Clone, PartialEq)]
pub struct Food {
    pub id: Uuid,
    pub location: Point,
    pub value: u32,
}

impl Food {
    #[must_use]
    pub fn new(location: Point, value: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            location,
            value,
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.value == 0
    }

    /// Removes one unit. Returns false once nothing is left.
    pub fn take_bite(&mut self) -> bool {
        if self.value == 0 {
            return false;
        }
        self.value -= 1;
        true
    }
}

impl PhysicalObject for Food {
    fn id(&self) -> Uuid {
        self.id
    }

    fn kind(&self) -> ObjectKind {
        ObjectKind::Food
    }

    fn location(&self) -> Point {
        self.location
    }

    fn radius(&self) -> f64 {
        f64::from(self.value).sqrt()
    }
}
