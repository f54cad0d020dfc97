//! Decision policies.
//!
//! A brain is owned by exactly one critter and keeps whatever private
//! counters it likes between ticks. Every callback may answer with a
//! [`Command`] or stay silent.

use critters_data::{Command, Contact, Senses, Vector};
use rand::{Rng, RngCore};
use std::fmt;

pub mod hibernation;
pub mod maze;
pub mod racer;
pub mod registry;
pub mod scripted;
pub mod tasting;

pub use hibernation::HibernationBrain;
pub use maze::MazeBrain;
pub use racer::RacerBrain;
pub use registry::{BrainEntry, BrainFactory, BrainRegistry};
pub use scripted::ScriptedBrain;
pub use tasting::TastingBrain;

pub trait Brain: Send + fmt::Debug {
    /// Called once per tick before the body moves.
    fn on_tick(&mut self, senses: &Senses, rng: &mut dyn RngCore) -> Option<Command>;

    /// `direction` points from this critter toward `other`.
    fn on_collision(
        &mut self,
        _direction: Vector,
        _other: &Contact,
        _senses: &Senses,
    ) -> Option<Command> {
        None
    }

    /// Reserved: nothing in the world currently resolves attacks.
    fn on_attack(
        &mut self,
        _direction: Vector,
        _attacker: &Contact,
        _senses: &Senses,
    ) -> Option<Command> {
        None
    }
}

/// Small random course correction used when there is nothing to steer by.
pub(crate) fn wander(rng: &mut dyn RngCore) -> f64 {
    rng.gen_range(-0.1..=0.1) * f64::from(rng.gen_range(1u8..4))
}

/// Turn away from something seen at the given relative bearing.
pub(crate) fn avoid(direction: f64) -> f64 {
    if direction > 0.0 {
        -0.5
    } else {
        0.5
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_wander_is_bounded() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..500 {
            let turn = wander(&mut rng);
            assert!(turn.abs() <= 0.3 + 1e-12);
        }
    }

    #[test]
    fn test_avoid_turns_away() {
        assert_eq!(avoid(0.3), -0.5);
        assert_eq!(avoid(-0.3), 0.5);
        assert_eq!(avoid(0.0), 0.5);
    }
}
