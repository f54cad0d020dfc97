//! Grazer that settles down to feed after repeatedly bumping into food.

use super::{avoid, wander, Brain};
use critters_data::{Color, Command, Contact, Senses, Vector, BITE_RANGE};
use rand::RngCore;

/// Food closer than this is eaten in place; farther is chased.
const NEAR_FOOD: f64 = 5.0;
/// Food hits needed before the brain stops to feed.
const FEED_TRIGGER: u32 = 5;
/// Ticks spent feeding once triggered.
const FEED_TICKS: u32 = 3;

#[derive(Debug, Default, Clone)]
pub struct HibernationBrain {
    hit_food: u32,
    eating: u32,
}

impl HibernationBrain {
    pub const CODE: &'static str = "h";

    #[must_use]
    pub fn hit_food(&self) -> u32 {
        self.hit_food
    }

    #[must_use]
    pub fn eating(&self) -> u32 {
        self.eating
    }

    fn update_counters(&mut self) {
        self.hit_food = self.hit_food.saturating_sub(1);
        if self.hit_food >= FEED_TRIGGER {
            self.eating = FEED_TICKS;
            self.hit_food -= 1;
        }
    }
}

impl Brain for HibernationBrain {
    fn on_tick(&mut self, senses: &Senses, rng: &mut dyn RngCore) -> Option<Command> {
        self.update_counters();
        if self.eating > 0 {
            self.eating -= 1;
            return Some(Command::Eat);
        }

        let moving = senses.body.moving;
        let food_seen = senses.nearest_of(Color::Green).is_some();

        let turn = match senses.nearest() {
            None => wander(rng),
            Some(closest) if closest.color == Color::Green => {
                if closest.distance < NEAR_FOOD {
                    return Some(if moving {
                        Command::Accelerate(0.1)
                    } else if closest.distance < BITE_RANGE {
                        Command::Eat
                    } else {
                        // creep: one unit step, then brake again
                        Command::Turn(closest.direction)
                    });
                }
                if closest.distance > NEAR_FOOD && !moving {
                    return Some(Command::Accelerate(10.0));
                }
                closest.direction
            }
            Some(closest) => avoid(closest.direction),
        };

        if !moving && !food_seen {
            return Some(Command::Accelerate(10.0));
        }
        Some(Command::Turn(turn))
    }

    fn on_collision(&mut self, _direction: Vector, other: &Contact, _senses: &Senses) -> Option<Command> {
        if other.is_food() {
            self.hit_food += 2;
            return Some(Command::Eat);
        }
        None
    }
}
