//! Runs straight at a fixed cruising speed.

use super::Brain;
use critters_data::{Command, Senses};
use rand::RngCore;

#[derive(Debug, Default, Clone)]
pub struct RacerBrain;

impl RacerBrain {
    pub const CODE: &'static str = "R";
    pub const MAX_SPEED: f64 = 1.322;
    pub const MAX_ACCELERATION: f64 = 1.2;

    /// Factor that moves `speed` toward `MAX_SPEED` without overshooting,
    /// capped at `MAX_ACCELERATION`.
    #[must_use]
    pub fn acceleration_for(speed: f64) -> f64 {
        if speed > 0.0 {
            (Self::MAX_SPEED / speed).min(Self::MAX_ACCELERATION)
        } else {
            Self::MAX_ACCELERATION
        }
    }
}

impl Brain for RacerBrain {
    fn on_tick(&mut self, senses: &Senses, _rng: &mut dyn RngCore) -> Option<Command> {
        if senses.body.speed.is_nan() || senses.body.speed <= 0.0 {
            // a zero heading cannot be scaled back up
            return Some(Command::Go);
        }
        Some(Command::Accelerate(Self::acceleration_for(senses.body.speed)))
    }
}
