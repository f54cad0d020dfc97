//! Builds each critter's perception snapshot from the current world state.
//!
//! Everything is measured along the shortest toroidal path, so an object just
//! across the seam is as visible as one next door.

use crate::entity::{PerceptionMemory, PhysicalObject};
use crate::world::World;
use critters_data::{
    normalize_angle, BodySense, Color, Contact, Heard, ObjectKind, Scent, Senses, Sighting,
    SmellKind,
};
use std::f64::consts::PI;

/// Another physical object as seen from the observer, plus how strongly it smells.
struct Neighbour {
    contact: Contact,
    amount: f64,
}

fn neighbours(world: &World, observer: usize) -> Vec<Neighbour> {
    let critters = world
        .critters
        .iter()
        .enumerate()
        .filter(|(i, c)| *i != observer && c.is_alive())
        .map(|(_, c)| Neighbour {
            contact: c.contact(),
            amount: c.size,
        });
    let food = world
        .food
        .iter()
        .filter(|f| !f.is_exhausted())
        .map(|f| Neighbour {
            contact: f.contact(),
            amount: f64::from(f.value),
        });
    let pits = world.pits.iter().map(|p| Neighbour {
        contact: p.contact(),
        amount: 0.0,
    });
    critters.chain(food).chain(pits).collect()
}

/// Perception for critter `observer`, together with the memory to keep for
/// next tick's `change` readings.
#[must_use]
pub fn synthesize(world: &World, observer: usize) -> (Senses, PerceptionMemory) {
    let me = &world.critters[observer];
    let (width, height) = (world.width, world.height);
    let my_radius = me.radius();
    let bearing = me.heading.phi();
    let sight_radius = world.config.senses.sight_radius;
    let smell_radius = world.config.senses.smell_radius;

    let mut senses = Senses::default();
    let mut memory = PerceptionMemory::default();

    for Neighbour { contact, amount } in neighbours(world, observer) {
        let offset = me
            .location
            .toroidal_displacement(&contact.location, width, height);
        let centre = offset.r();

        if centre <= my_radius && contact.kind != ObjectKind::Pit && !senses.tastes(contact.kind) {
            senses.taste.push(contact.kind);
        }

        let gap = (centre - my_radius - contact.radius).max(0.0);
        if gap <= sight_radius {
            let change = me.memory.seen.get(&contact.id).map_or(0.0, |prev| gap - prev);
            memory.seen.insert(contact.id, gap);
            senses.sight.push(Sighting {
                color: Color::from(contact.kind),
                distance: gap,
                direction: normalize_angle(offset.phi() - bearing),
                width: if centre > 0.0 {
                    2.0 * (contact.radius / centre).atan()
                } else {
                    PI
                },
                change,
            });
        }

        let smell_kind = match contact.kind {
            ObjectKind::Food => Some(SmellKind::Food),
            ObjectKind::Critter => Some(SmellKind::Critter),
            ObjectKind::Pit => None,
        };
        if let Some(kind) = smell_kind {
            if centre <= smell_radius {
                let strength = amount / (1.0 + centre * centre);
                let change = me
                    .memory
                    .smelled
                    .get(&contact.id)
                    .map_or(0.0, |prev| strength - prev);
                memory.smelled.insert(contact.id, strength);
                senses.smell.push(Scent {
                    strength,
                    kind,
                    change,
                });
            }
        }
    }

    senses
        .sight
        .sort_by(|a, b| a.distance.total_cmp(&b.distance));

    senses.hearing = world
        .sounds
        .iter()
        .map(|s| Heard {
            text: s.text.clone(),
            direction: normalize_angle(
                me.location
                    .toroidal_displacement(&s.location, width, height)
                    .phi()
                    - bearing,
            ),
            age: s.age,
        })
        .collect();

    let speed = me.speed();
    senses.body = BodySense {
        speed,
        moving: speed > world.config.critter.moving_threshold,
        size: me.size,
    };
    senses.gps = me.location;
    senses.compass = bearing;

    (senses, memory)
}
