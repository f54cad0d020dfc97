//! Single import point for the kernel, as seen by the driver and the tests.

pub use critters_core::{Brain, BrainRegistry, TickReport, World};
pub mod brain {
    pub use critters_core::brain::*;
}
pub mod config {
    pub use critters_core::config::*;
}
pub mod entity {
    pub use critters_core::entity::*;
}
pub mod error {
    pub use critters_core::error::*;
}
pub mod metrics {
    pub use critters_core::metrics::*;
}
pub mod senses {
    pub use critters_core::senses::*;
}
pub mod world {
    pub use critters_core::world::*;
}
pub mod data {
    pub use critters_data::*;
}
