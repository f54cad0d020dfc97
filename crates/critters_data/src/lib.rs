//! Plain data shared by the critters kernel, its brains and its viewers.

pub mod data;

pub use data::command::{Command, CommandError};
pub use data::display::{DisplayObject, VisualKind};
pub use data::geometry::{normalize_angle, Point, Vector};
pub use data::senses::{
    BodySense, Color, Contact, Heard, ObjectKind, Scent, Senses, Sighting, SmellKind, BITE_RANGE,
};
