//! Eats whatever food it can taste; otherwise roams toward green.

use super::{avoid, wander, Brain};
use critters_data::{Color, Command, ObjectKind, Senses};
use rand::{Rng, RngCore};

#[derive(Debug, Default, Clone)]
pub struct TastingBrain;

impl TastingBrain {
    pub const CODE: &'static str = "t";
}

impl Brain for TastingBrain {
    fn on_tick(&mut self, senses: &Senses, rng: &mut dyn RngCore) -> Option<Command> {
        let moving = senses.body.moving;

        if senses.tastes(ObjectKind::Food) {
            if moving && rng.gen_range(0..4) == 0 {
                return Some(Command::Stop);
            }
            return Some(Command::Eat);
        }
        if !moving {
            return Some(Command::Go);
        }

        let turn = if let Some(food) = senses.nearest_of(Color::Green) {
            food.direction
        } else if let Some(obstacle) = senses.nearest() {
            avoid(obstacle.direction)
        } else {
            wander(rng)
        };
        Some(Command::Turn(turn))
    }
}
