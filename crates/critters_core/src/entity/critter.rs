use super::{Food, PhysicalObject, Reaction, Sound};
use crate::brain::Brain;
use crate::config::AppConfig;
use critters_data::{Command, Contact, ObjectKind, Point, Vector, BITE_RANGE};
use std::collections::HashMap;
use std::fmt;
use uuid::Uuid;

/// What a critter remembers of last tick's perception, keyed by object id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PerceptionMemory {
    pub seen: HashMap<Uuid, f64>,
    pub smelled: HashMap<Uuid, f64>,
}

/// World state a critter may touch while carrying out a command.
pub struct ActContext<'a> {
    pub food: &'a mut [Food],
    pub config: &'a AppConfig,
    pub width: f64,
    pub height: f64,
}

/// Side effects of a command that the world applies afterwards.
#[derive(Debug, Default)]
pub struct ActionOutput {
    pub sounds: Vec<Sound>,
    pub bites: u32,
}

/// An autonomous agent: a body steered by an exclusively owned brain.
pub struct Critter {
    pub id: Uuid,
    pub name: String,
    pub location: Point,
    /// Direction of travel; magnitude is the distance covered per tick.
    pub heading: Vector,
    /// Radius is `sqrt(size)`.
    pub size: f64,
    pub dead: bool,
    pub brain: Box<dyn Brain>,
    pub memory: PerceptionMemory,
}

impl fmt::Debug for Critter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Critter")
            .field("name", &self.name)
            .field("location", &self.location)
            .field("heading", &self.heading)
            .field("size", &self.size)
            .field("dead", &self.dead)
            .field("brain", &self.brain)
            .finish_non_exhaustive()
    }
}

impl Critter {
    pub fn new(
        name: impl Into<String>,
        location: Point,
        heading: Vector,
        size: f64,
        brain: Box<dyn Brain>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            location,
            heading,
            size,
            dead: false,
            brain,
            memory: PerceptionMemory::default(),
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    #[must_use]
    pub fn speed(&self) -> f64 {
        self.heading.r()
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        !self.dead
    }

    /// Translates a brain decision into a physical effect.
    pub fn act(&mut self, command: &Command, ctx: &mut ActContext, output: &mut ActionOutput) {
        if self.dead {
            return;
        }
        match command {
            Command::Stop => {
                self.heading = self.heading * (1.0 / ctx.config.critter.stop_divisor);
            }
            Command::Go => {
                self.heading = Vector::from_polar(1.0, self.heading.phi());
            }
            Command::Turn(angle) => {
                self.heading = Vector::from_polar(1.0, self.heading.phi() + angle);
            }
            Command::Accelerate(factor) => {
                let next = self.heading * *factor;
                if next.is_finite() {
                    self.heading = next;
                } else {
                    tracing::warn!(critter = %self.name, factor, "ignoring non-finite acceleration");
                }
            }
            Command::Attack(target) => {
                tracing::debug!(critter = %self.name, target = %target, "attack has no effect");
            }
            Command::Eat => {
                self.eat(ctx, output);
            }
        }
    }

    /// Takes one unit from the first food item within reach of the mouth.
    pub fn eat(&mut self, ctx: &mut ActContext, output: &mut ActionOutput) -> bool {
        let (width, height) = (ctx.width, ctx.height);
        let Some(food) = ctx
            .food
            .iter_mut()
            .find(|f| !f.is_exhausted() && self.can_reach(f, width, height))
        else {
            return false;
        };
        self.bite(food, ctx.config, output)
    }

    /// True when the surface gap to `food` is within [`BITE_RANGE`], so any
    /// food the critter overlaps is reachable.
    #[must_use]
    pub fn can_reach(&self, food: &Food, width: f64, height: f64) -> bool {
        let centre = self.location.toroidal_distance(&food.location, width, height);
        centre - self.radius() - food.radius() < BITE_RANGE
    }

    /// Takes one unit from `food`, wherever it is.
    pub fn bite(&mut self, food: &mut Food, config: &AppConfig, output: &mut ActionOutput) -> bool {
        if self.dead || !food.take_bite() {
            return false;
        }
        self.size += 1.0;
        output.bites += 1;
        output
            .sounds
            .push(Sound::new(self.location, config.sound.eat_volume, "munch"));
        true
    }

    /// Moves one heading-length and wraps into the world.
    pub fn advance(&mut self, width: f64, height: f64) {
        if self.dead {
            return;
        }
        self.location = (self.location + self.heading).wrap(width, height);
    }

    /// Falls into a pit: pinned to its centre and killed.
    pub fn fall_into(&mut self, center: Point) {
        self.location = center;
        self.heading = Vector::ZERO;
        self.dead = true;
    }

    /// Marks the critter dead if its body has become degenerate.
    /// Returns true when this call killed it.
    pub fn check_vitals(&mut self) -> bool {
        if self.dead {
            return false;
        }
        let degenerate = !(self.size.is_finite() && self.size > 0.0)
            || !self.location.is_finite()
            || !self.heading.is_finite();
        if degenerate {
            self.dead = true;
        }
        degenerate
    }
}

impl PhysicalObject for Critter {
    fn id(&self) -> Uuid {
        self.id
    }

    fn kind(&self) -> ObjectKind {
        ObjectKind::Critter
    }

    fn location(&self) -> Point {
        self.location
    }

    fn radius(&self) -> f64 {
        if self.size > 0.0 {
            self.size.sqrt()
        } else {
            0.0
        }
    }

    /// Food is walked over and fed on. Anything else shrinks the critter and
    /// bounces it back along the contact normal.
    fn on_collision(&mut self, direction: Vector, other: &Contact, config: &AppConfig) -> Reaction {
        if self.dead {
            return Reaction::Ignore;
        }
        if other.kind == ObjectKind::Food {
            return Reaction::Feed;
        }

        self.size = (self.size - config.critter.collision_shrink).max(config.critter.min_size);
        if self.heading.dot(&direction) > 0.0 {
            self.heading = self.heading.reflect(&direction);
        }
        Reaction::Consult { bumped: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brain::RacerBrain;
    use std::f64::consts::PI;

    fn critter_at(x: f64, y: f64, heading: Vector) -> Critter {
        Critter::new("t1", Point::new(x, y), heading, 1.0, Box::new(RacerBrain))
    }

    fn act(critter: &mut Critter, command: Command, food: &mut [Food]) -> ActionOutput {
        let config = AppConfig::default();
        let mut output = ActionOutput::default();
        let mut ctx = ActContext {
            food,
            config: &config,
            width: 200.0,
            height: 100.0,
        };
        critter.act(&command, &mut ctx, &mut output);
        output
    }

    #[test]
    fn test_turn_rotates_at_unit_speed() {
        let mut c = critter_at(10.0, 10.0, Vector::from_polar(1.0, 0.0));
        act(&mut c, Command::Turn(PI / 2.0), &mut []);
        assert!((c.heading.phi() - PI / 2.0).abs() < 1e-9);
        assert!((c.speed() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_turn_resets_speed_to_unit() {
        let mut c = critter_at(10.0, 10.0, Vector::from_polar(3.0, 0.5));
        act(&mut c, Command::Turn(-0.5), &mut []);
        assert!(c.heading.phi().abs() < 1e-9);
        assert!((c.speed() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_stop_is_near_stop_not_exact() {
        let mut c = critter_at(10.0, 10.0, Vector::from_polar(1.0, 1.0));
        act(&mut c, Command::Stop, &mut []);
        assert!(c.speed() > 0.0);
        assert!(c.speed() < 0.01);
        assert!((c.heading.phi() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_accelerate_compounds() {
        let mut c = critter_at(10.0, 10.0, Vector::from_polar(1.0, 0.0));
        act(&mut c, Command::Accelerate(2.0), &mut []);
        act(&mut c, Command::Accelerate(2.0), &mut []);
        assert!((c.speed() - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_go_restores_unit_speed() {
        let mut c = critter_at(10.0, 10.0, Vector::from_polar(0.001, 2.0));
        act(&mut c, Command::Go, &mut []);
        assert!((c.speed() - 1.0).abs() < 1e-9);
        assert!((c.heading.phi() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_attack_has_no_effect() {
        let mut c = critter_at(10.0, 10.0, Vector::from_polar(1.0, 0.0));
        let before = (c.location, c.heading, c.size);
        act(&mut c, Command::Attack("x".into()), &mut []);
        assert_eq!(before, (c.location, c.heading, c.size));
    }

    #[test]
    fn test_eat_takes_one_unit_and_grows() {
        let mut c = critter_at(100.0, 49.5, Vector::ZERO);
        let mut food = vec![Food::new(Point::new(100.0, 50.0), 4)];
        let out = act(&mut c, Command::Eat, &mut food);
        assert_eq!(food[0].value, 3);
        assert_eq!(c.size, 2.0);
        assert_eq!(out.bites, 1);
        assert_eq!(out.sounds.len(), 1);
    }

    #[test]
    fn test_eat_out_of_reach_does_nothing() {
        let mut c = critter_at(100.0, 40.0, Vector::ZERO);
        let mut food = vec![Food::new(Point::new(100.0, 50.0), 4)];
        let out = act(&mut c, Command::Eat, &mut food);
        assert_eq!(food[0].value, 4);
        assert_eq!(c.size, 1.0);
        assert!(out.sounds.is_empty());
    }

    #[test]
    fn test_eat_reaches_overlapping_food() {
        // centre 2.5 away: outside the critter's own radius, inside the heap's
        let mut c = critter_at(10.0, 10.0, Vector::ZERO);
        let mut food = vec![Food::new(Point::new(12.5, 10.0), 4)];
        let out = act(&mut c, Command::Eat, &mut food);
        assert_eq!(out.bites, 1);
        assert_eq!(food[0].value, 3);
    }

    #[test]
    fn test_eat_reach_ends_at_bite_range() {
        let c = critter_at(10.0, 10.0, Vector::ZERO);
        let touching = Food::new(Point::new(13.0 + BITE_RANGE / 2.0, 10.0), 4);
        let beyond = Food::new(Point::new(13.0 + BITE_RANGE * 2.0, 10.0), 4);
        assert!(c.can_reach(&touching, 200.0, 100.0));
        assert!(!c.can_reach(&beyond, 200.0, 100.0));
    }

    proptest::proptest! {
        #[test]
        fn test_overlapping_food_is_always_in_reach(
            x in 0.0f64..200.0,
            y in 0.0f64..100.0,
            size in 0.25f64..20.0,
            value in 1u32..30,
            gap in 0.0f64..1.0,
            angle in -PI..PI
        ) {
            let mut c = critter_at(x, y, Vector::ZERO);
            c.size = size;
            let food = Food::new(Point::new(0.0, 0.0), value);
            let centre = (c.radius() + food.radius()) * gap;
            let at = (Point::new(x, y) + Vector::from_polar(centre, angle)).wrap(200.0, 100.0);
            let food = Food { location: at, ..food };
            proptest::prop_assert!(c.can_reach(&food, 200.0, 100.0));
        }
    }

    #[test]
    fn test_dead_critter_cannot_bite() {
        let config = AppConfig::default();
        let mut c = critter_at(10.0, 10.0, Vector::ZERO);
        c.fall_into(Point::new(10.0, 10.0));
        let mut food = Food::new(Point::new(10.0, 10.0), 2);
        let mut out = ActionOutput::default();
        assert!(!c.bite(&mut food, &config, &mut out));
        assert_eq!(food.value, 2);
    }

    #[test]
    fn test_eat_skips_exhausted_food() {
        let mut c = critter_at(10.0, 10.0, Vector::ZERO);
        let mut food = vec![
            Food::new(Point::new(10.0, 10.5), 0),
            Food::new(Point::new(10.5, 10.0), 2),
        ];
        act(&mut c, Command::Eat, &mut food);
        assert_eq!(food[0].value, 0);
        assert_eq!(food[1].value, 1);
    }

    #[test]
    fn test_eat_reaches_across_the_seam() {
        let mut c = critter_at(0.2, 50.0, Vector::ZERO);
        let mut food = vec![Food::new(Point::new(199.8, 50.0), 1)];
        act(&mut c, Command::Eat, &mut food);
        assert_eq!(food[0].value, 0);
    }

    #[test]
    fn test_advance_wraps() {
        let mut c = critter_at(199.5, 0.5, Vector::new(1.0, -1.0));
        c.advance(200.0, 100.0);
        assert!((c.location.x - 0.5).abs() < 1e-9);
        assert!((c.location.y - 99.5).abs() < 1e-9);
    }

    #[test]
    fn test_bump_shrinks_and_reflects() {
        let config = AppConfig::default();
        let mut c = critter_at(10.0, 10.0, Vector::new(1.0, 0.0));
        c.size = 4.0;
        let other = Contact {
            id: Uuid::new_v4(),
            kind: ObjectKind::Critter,
            location: Point::new(11.0, 10.0),
            radius: 1.0,
        };
        let reaction = c.on_collision(Vector::new(1.0, 0.0), &other, &config);
        assert_eq!(reaction, Reaction::Consult { bumped: true });
        assert!((c.size - (4.0 - config.critter.collision_shrink)).abs() < 1e-9);
        assert!((c.heading.x + 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_bump_never_shrinks_below_floor() {
        let config = AppConfig::default();
        let mut c = critter_at(10.0, 10.0, Vector::ZERO);
        c.size = config.critter.min_size;
        let other = Contact {
            id: Uuid::new_v4(),
            kind: ObjectKind::Pit,
            location: Point::new(11.0, 10.0),
            radius: 1.0,
        };
        c.on_collision(Vector::new(1.0, 0.0), &other, &config);
        assert_eq!(c.size, config.critter.min_size);
    }

    #[test]
    fn test_food_contact_does_not_bump() {
        let config = AppConfig::default();
        let mut c = critter_at(10.0, 10.0, Vector::new(1.0, 0.0));
        let other = Contact {
            id: Uuid::new_v4(),
            kind: ObjectKind::Food,
            location: Point::new(11.0, 10.0),
            radius: 2.0,
        };
        let reaction = c.on_collision(Vector::new(1.0, 0.0), &other, &config);
        assert_eq!(reaction, Reaction::Feed);
        assert_eq!(c.size, 1.0);
        assert_eq!(c.heading, Vector::new(1.0, 0.0));
    }

    #[test]
    fn test_dead_critter_ignores_commands() {
        let mut c = critter_at(10.0, 10.0, Vector::new(1.0, 0.0));
        c.fall_into(Point::new(3.0, 3.0));
        act(&mut c, Command::Go, &mut []);
        c.advance(200.0, 100.0);
        assert_eq!(c.location, Point::new(3.0, 3.0));
        assert_eq!(c.heading, Vector::ZERO);
    }

    #[test]
    fn test_degenerate_size_counts_as_dead() {
        let mut c = critter_at(10.0, 10.0, Vector::ZERO);
        c.size = -1.0;
        assert_eq!(c.radius(), 0.0);
        assert!(c.check_vitals());
        assert!(c.dead);
        assert!(!c.check_vitals());
    }
}
