use super::World;
use crate::entity::{ActContext, ActionOutput, PhysicalObject};
use crate::senses::synthesize;
use critters_data::Command;
use rand::seq::SliceRandom;
use std::time::Instant;

/// What happened during one tick.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Number of the tick just completed, starting at 1.
    pub tick: u64,
    /// Names of critters that died this tick.
    pub deaths: Vec<String>,
    /// Successful bites, whether commanded or automatic.
    pub eats: u32,
    /// Contacts that involved at least one critter.
    pub collisions: u32,
}

impl World {
    /// Advances the simulation by one tick.
    ///
    /// Critters act one at a time in a freshly shuffled order, each seeing
    /// the world as left by those before it. Collisions are resolved once
    /// everyone has moved.
    pub fn tick(&mut self) -> TickReport {
        let start = Instant::now();
        let mut report = TickReport {
            tick: self.tick + 1,
            ..Default::default()
        };

        self.sounds.retain(|s| !s.is_faded());
        self.food.retain(|f| !f.is_exhausted());

        let mut order: Vec<usize> = (0..self.critters.len()).collect();
        order.shuffle(&mut self.rng);

        for idx in order {
            if self.critters[idx].dead {
                continue;
            }
            let (senses, memory) = synthesize(self, idx);
            let critter = &mut self.critters[idx];
            critter.memory = memory;
            let command = critter.brain.on_tick(&senses, &mut self.rng);

            if let Some(command) = command {
                self.apply(idx, &command, &mut report);
            }
            let critter = &mut self.critters[idx];
            critter.advance(self.width, self.height);
            self.apply(idx, &Command::Eat, &mut report);

            if self.critters[idx].check_vitals() {
                self.record_death(idx, &mut report);
            }
        }

        for sound in &mut self.sounds {
            sound.on_tick();
        }
        for food in &mut self.food {
            food.on_tick();
        }
        for pit in &mut self.pits {
            pit.on_tick();
        }

        self.resolve_collisions(&mut report);

        self.tick += 1;
        self.metrics
            .record_tick(start.elapsed(), self.living_count(), self.food.len());
        report
    }

    /// Carries out `command` for critter `idx` and folds its side effects
    /// into the world.
    pub(crate) fn apply(&mut self, idx: usize, command: &Command, report: &mut TickReport) {
        let mut output = ActionOutput::default();
        let mut ctx = ActContext {
            food: &mut self.food,
            config: &self.config,
            width: self.width,
            height: self.height,
        };
        self.critters[idx].act(command, &mut ctx, &mut output);
        self.absorb(output, report);
    }

    /// Critter `idx` bites the food heap it is touching.
    pub(crate) fn feed(&mut self, idx: usize, food: usize, report: &mut TickReport) {
        let mut output = ActionOutput::default();
        self.critters[idx].bite(&mut self.food[food], &self.config, &mut output);
        self.absorb(output, report);
    }

    fn absorb(&mut self, output: ActionOutput, report: &mut TickReport) {
        for _ in 0..output.bites {
            self.metrics.increment_counter("eat");
        }
        report.eats += output.bites;
        self.sounds.extend(output.sounds);
    }

    pub(crate) fn record_death(&mut self, idx: usize, report: &mut TickReport) {
        let critter = &self.critters[idx];
        tracing::info!(
            tick = self.tick + 1,
            name = %critter.name,
            x = critter.location.x,
            y = critter.location.y,
            "Critter died"
        );
        self.metrics.increment_counter("death");
        report.deaths.push(critter.name.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brain::{RacerBrain, ScriptedBrain};
    use crate::config::AppConfig;
    use crate::entity::{Critter, Food, Pit, Sound};
    use critters_data::{Point, Vector};

    fn world() -> World {
        let mut config = AppConfig::default();
        config.world.seed = Some(11);
        World::empty(config).unwrap()
    }

    fn scripted(name: &str, at: Point, heading: Vector, lines: &[&str]) -> Critter {
        Critter::new(
            name,
            at,
            heading,
            1.0,
            Box::new(ScriptedBrain::new(lines.iter().copied())),
        )
    }

    #[test]
    fn test_tick_moves_and_wraps() {
        let mut w = world();
        w.add_critter(scripted("a", Point::new(199.5, 10.0), Vector::new(1.0, 0.0), &[]));
        let report = w.tick();
        assert_eq!(report.tick, 1);
        assert_eq!(w.tick, 1);
        assert!((w.critters[0].location.x - 0.5).abs() < 1e-9);
        assert_eq!(w.metrics.tick_count(), 1);
    }

    #[test]
    fn test_command_applies_before_movement() {
        let mut w = world();
        w.add_critter(scripted(
            "a",
            Point::new(50.0, 50.0),
            Vector::new(1.0, 0.0),
            &["Turn 1.5707963267948966"],
        ));
        w.tick();
        let c = &w.critters[0];
        assert!((c.location.x - 50.0).abs() < 1e-9);
        assert!((c.location.y - 51.0).abs() < 1e-9);
    }

    #[test]
    fn test_automatic_eat_each_tick() {
        let mut w = world();
        w.add_food(Food::new(Point::new(50.5, 50.0), 3));
        w.add_critter(scripted("a", Point::new(50.0, 50.0), Vector::ZERO, &[]));
        let report = w.tick();
        // the post-move bite, then the bite from touching the heap
        assert_eq!(report.eats, 2);
        assert_eq!(w.food[0].value, 1);
        assert_eq!(w.critters[0].size, 3.0);
        assert_eq!(w.metrics.counter("eat"), 2);
        assert!(w.sounds.iter().any(|s| s.text == "munch"));
    }

    #[test]
    fn test_resting_critter_clears_overlapping_food() {
        let mut w = world();
        w.add_food(Food::new(Point::new(12.5, 10.0), 4));
        w.add_critter(scripted("a", Point::new(10.0, 10.0), Vector::ZERO, &[]));
        let mut eats = 0;
        for _ in 0..20 {
            eats += w.tick().eats;
        }
        assert_eq!(eats, 4);
        assert!(w.food.is_empty());
        assert_eq!(w.critters[0].size, 5.0);
    }

    #[test]
    fn test_exhausted_food_and_faded_sounds_are_pruned() {
        let mut w = world();
        w.add_food(Food::new(Point::new(10.0, 10.0), 0));
        w.sounds.push(Sound::new(Point::new(1.0, 1.0), 0, "gone"));
        w.sounds.push(Sound::new(Point::new(1.0, 1.0), 5, "fresh"));
        w.tick();
        assert!(w.food.is_empty());
        assert_eq!(w.sounds.len(), 1);
        assert_eq!(w.sounds[0].age, 1);
    }

    #[test]
    fn test_dead_critters_are_skipped() {
        let mut w = world();
        let i = w.add_critter(scripted("a", Point::new(10.0, 10.0), Vector::new(1.0, 0.0), &["Go"]));
        w.critters[i].fall_into(Point::new(10.0, 10.0));
        w.tick();
        assert_eq!(w.critters[i].location, Point::new(10.0, 10.0));
        assert_eq!(w.living_count(), 0);
    }

    #[test]
    fn test_pit_kills_and_reports() {
        let mut w = world();
        w.add_pit(Pit::new(Point::new(52.0, 50.0), 1.0));
        w.add_critter(Critter::new(
            "victim",
            Point::new(50.0, 50.0),
            Vector::new(0.5, 0.0),
            1.0,
            Box::new(RacerBrain),
        ));
        let report = w.tick();
        assert_eq!(report.deaths, vec!["victim".to_string()]);
        let c = &w.critters[0];
        assert!(c.dead);
        assert_eq!(c.location, Point::new(52.0, 50.0));
        assert_eq!(w.metrics.counter("death"), 1);
        assert!(w.sounds.iter().any(|s| s.text == "aaargh"));
    }

    #[test]
    fn test_seeded_worlds_tick_identically() {
        let run = || {
            let mut w = world();
            for i in 0..5 {
                w.add_critter(Critter::new(
                    format!("c{i}"),
                    Point::new(10.0 * f64::from(i), 20.0),
                    Vector::new(1.0, 0.3),
                    1.0,
                    Box::new(crate::brain::MazeBrain::default()),
                ));
            }
            for _ in 0..50 {
                w.tick();
            }
            w.critters.iter().map(|c| c.location).collect::<Vec<_>>()
        };
        assert_eq!(run(), run());
    }
}
