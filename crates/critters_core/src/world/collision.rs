//! Pairwise collision detection and resolution.

use super::{TickReport, World};
use crate::entity::{ObjectRef, PhysicalObject, Reaction, Sound};
use crate::senses::synthesize;
use critters_data::{Contact, ObjectKind, Point, Vector};

impl World {
    /// Every physical object that can still collide, in registry order.
    fn collidable(&self) -> Vec<ObjectRef> {
        let critters = (0..self.critters.len()).map(ObjectRef::Critter);
        let food = (0..self.food.len()).map(ObjectRef::Food);
        let pits = (0..self.pits.len()).map(ObjectRef::Pit);
        critters.chain(food).chain(pits).collect()
    }

    /// Current contact for `object`, or `None` once it no longer takes part
    /// (dead critter, eaten-up food).
    pub(crate) fn contact_of(&self, object: ObjectRef) -> Option<Contact> {
        match object {
            ObjectRef::Critter(i) => {
                let critter = &self.critters[i];
                critter.is_alive().then(|| critter.contact())
            }
            ObjectRef::Food(i) => {
                let food = &self.food[i];
                (!food.is_exhausted()).then(|| food.contact())
            }
            ObjectRef::Pit(i) => Some(self.pits[i].contact()),
        }
    }

    /// Tests every unordered pair once. Each side of an overlapping pair is
    /// told the unit direction toward the other, so the two directions are
    /// exact negations of each other.
    pub(crate) fn resolve_collisions(&mut self, report: &mut TickReport) {
        let objects = self.collidable();
        for (n, &a) in objects.iter().enumerate() {
            for &b in &objects[n + 1..] {
                // re-read both: earlier pairs may have moved or killed them
                let (Some(contact_a), Some(contact_b)) = (self.contact_of(a), self.contact_of(b))
                else {
                    continue;
                };
                let offset = contact_a.location.toroidal_displacement(
                    &contact_b.location,
                    self.width,
                    self.height,
                );
                if offset.r() >= contact_a.radius + contact_b.radius {
                    continue;
                }
                let direction = if offset.r() > 0.0 {
                    offset.normalized()
                } else {
                    Vector::new(1.0, 0.0)
                };

                if contact_a.kind == ObjectKind::Critter || contact_b.kind == ObjectKind::Critter {
                    report.collisions += 1;
                    self.metrics.increment_counter("collision");
                }
                self.collide_one(a, direction, b, &contact_b, report);
                self.collide_one(b, -direction, a, &contact_a, report);
            }
        }
    }

    fn collide_one(
        &mut self,
        target: ObjectRef,
        direction: Vector,
        other: ObjectRef,
        other_contact: &Contact,
        report: &mut TickReport,
    ) {
        let config = &self.config;
        let reaction = match target {
            ObjectRef::Critter(i) => self.critters[i].on_collision(direction, other_contact, config),
            ObjectRef::Food(i) => self.food[i].on_collision(direction, other_contact, config),
            ObjectRef::Pit(i) => self.pits[i].on_collision(direction, other_contact, config),
        };

        match (reaction, target, other) {
            (Reaction::Ignore, _, _) => {}
            (Reaction::Capture { center }, _, ObjectRef::Critter(j)) => {
                self.kill_critter(j, center, report);
            }
            (Reaction::Capture { .. }, _, _) => {}
            (Reaction::Feed, ObjectRef::Critter(i), ObjectRef::Food(j)) => {
                self.feed(i, j, report);
                self.consult(i, direction, other_contact, report);
            }
            (Reaction::Feed, _, _) => {}
            (Reaction::Consult { bumped }, ObjectRef::Critter(i), _) => {
                if bumped {
                    let sound = Sound::new(
                        self.critters[i].location,
                        self.config.sound.bump_volume,
                        "bump",
                    );
                    self.sounds.push(sound);
                }
                self.consult(i, direction, other_contact, report);
            }
            (Reaction::Consult { .. }, _, _) => {}
        }
    }

    /// Lets critter `idx`'s brain answer a collision, with fresh senses.
    fn consult(&mut self, idx: usize, direction: Vector, other: &Contact, report: &mut TickReport) {
        let (senses, _) = synthesize(self, idx);
        let command = self.critters[idx]
            .brain
            .on_collision(direction, other, &senses);
        if let Some(command) = command {
            self.apply(idx, &command, report);
        }
    }

    /// Pins a critter to `center` and marks it dead.
    fn kill_critter(&mut self, idx: usize, center: Point, report: &mut TickReport) {
        if self.critters[idx].dead {
            return;
        }
        self.critters[idx].fall_into(center);
        self.sounds
            .push(Sound::new(center, self.config.sound.death_volume, "aaargh"));
        self.record_death(idx, report);
    }
}
