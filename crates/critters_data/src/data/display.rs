use crate::data::geometry::Point;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VisualKind {
    Critter,
    Food,
    Pit,
    Sound,
}

/// One drawable item, as handed to a view once per tick.
///
/// A radius of 0 means "nothing to draw" and says nothing about whether
/// the underlying entity still exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayObject {
    pub location: Point,
    pub radius: f64,
    pub kind: VisualKind,
    pub label: String,
}
