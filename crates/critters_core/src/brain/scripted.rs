//! Replays textual commands, one line per tick.

use super::Brain;
use critters_data::{Command, Contact, Senses, Vector};
use rand::RngCore;
use std::collections::VecDeque;

/// A brain driven by a fixed script in the textual command grammar.
///
/// Blank lines are silent ticks. Lines that do not parse are reported and
/// skipped; the critter carries on with its current heading.
#[derive(Debug, Default, Clone)]
pub struct ScriptedBrain {
    script: VecDeque<String>,
    on_collision: Option<String>,
    rejected: usize,
}

impl ScriptedBrain {
    pub const CODE: &'static str = "s";

    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            script: lines.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Command answered to every collision.
    #[must_use]
    pub fn with_collision_reply(mut self, line: impl Into<String>) -> Self {
        self.on_collision = Some(line.into());
        self
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.script.len()
    }

    /// Lines that failed to parse so far.
    #[must_use]
    pub fn rejected(&self) -> usize {
        self.rejected
    }

    fn interpret(&mut self, line: &str) -> Option<Command> {
        if line.trim().is_empty() {
            return None;
        }
        match line.parse::<Command>() {
            Ok(command) => Some(command),
            Err(err) => {
                self.rejected += 1;
                tracing::warn!(line, error = %err, "ignoring bad command");
                None
            }
        }
    }
}

impl Brain for ScriptedBrain {
    fn on_tick(&mut self, _senses: &Senses, _rng: &mut dyn RngCore) -> Option<Command> {
        let line = self.script.pop_front()?;
        self.interpret(&line)
    }

    fn on_collision(&mut self, _direction: Vector, _other: &Contact, _senses: &Senses) -> Option<Command> {
        let line = self.on_collision.clone()?;
        self.interpret(&line)
    }
}
