//! Wall-follower with a drifting left/right preference.

use super::Brain;
use critters_data::{Color, Command, Contact, Senses, Vector, BITE_RANGE};
use rand::{Rng, RngCore};

/// A far object beyond this is worth heading for.
const LANDMARK_RANGE: f64 = 4.0;
/// Near objects within this get a reaction.
const REACT_RANGE: f64 = 5.0;
/// Bearing error tolerated when already lined up with a landmark.
const AIM_TOLERANCE: f64 = 0.1;

#[derive(Debug, Clone)]
pub struct MazeBrain {
    prefers_left: bool,
}

impl Default for MazeBrain {
    fn default() -> Self {
        Self { prefers_left: true }
    }
}

impl MazeBrain {
    pub const CODE: &'static str = "M";

    #[must_use]
    pub fn prefers_left(&self) -> bool {
        self.prefers_left
    }

    fn hard_turn(&self) -> Command {
        if self.prefers_left {
            Command::Turn(-1.0)
        } else {
            Command::Turn(1.0)
        }
    }
}

impl Brain for MazeBrain {
    fn on_tick(&mut self, senses: &Senses, rng: &mut dyn RngCore) -> Option<Command> {
        if rng.gen_range(0..100) == 0 {
            self.prefers_left = !self.prefers_left;
        }
        let moving = senses.body.moving;

        if let Some(food) = senses.nearest_of(Color::Green) {
            return Some(match (food.distance < BITE_RANGE, moving) {
                (true, true) => Command::Stop,
                (true, false) => Command::Eat,
                (false, false) => Command::Go,
                (false, true) => Command::Turn(food.direction / 2.0),
            });
        }

        let (Some(closest), Some(farthest)) = (senses.nearest(), senses.farthest()) else {
            return Some(Command::Go);
        };

        if farthest.distance > LANDMARK_RANGE {
            if farthest.direction.abs() > AIM_TOLERANCE {
                return Some(Command::Turn(farthest.direction / 2.0));
            }
            if rng.gen_range(0..10) == 0 {
                return Some(self.hard_turn());
            }
            return Some(Command::Go);
        }

        if closest.distance < REACT_RANGE {
            if closest.color == Color::Brown {
                return Some(self.hard_turn());
            }
            return Some(Command::Turn(if closest.direction > 0.0 { -0.5 } else { 0.5 }));
        }

        Some(Command::Go)
    }

    fn on_collision(&mut self, direction: Vector, other: &Contact, _senses: &Senses) -> Option<Command> {
        if other.is_food() {
            Some(Command::Eat)
        } else {
            Some(Command::Turn(-direction.phi()))
        }
    }
}
