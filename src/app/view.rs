//! Consumers of the per-tick display list.
//!
//! The kernel keeps no rendering state. A view gets the display objects once
//! per tick and answers whether the run should go on.

use crate::model::data::{DisplayObject, VisualKind};
use anyhow::Result;
use serde::Serialize;
use std::io::Write;

pub trait View {
    fn render(&mut self, tick: u64, objects: &[DisplayObject]) -> Result<()>;

    /// Checked once per tick before the next one starts.
    fn keep_running(&self) -> bool {
        true
    }
}

/// Logs a population summary every `every` ticks.
pub struct LogView {
    every: u64,
}

impl LogView {
    pub fn new(every: u64) -> Self {
        Self { every: every.max(1) }
    }
}

impl View for LogView {
    fn render(&mut self, tick: u64, objects: &[DisplayObject]) -> Result<()> {
        if tick % self.every != 0 {
            return Ok(());
        }
        let count = |kind: VisualKind| objects.iter().filter(|o| o.kind == kind).count();
        tracing::info!(
            tick,
            critters = count(VisualKind::Critter),
            food = count(VisualKind::Food),
            sounds = count(VisualKind::Sound),
            "World state"
        );
        Ok(())
    }
}

#[derive(Serialize)]
struct Frame<'a> {
    tick: u64,
    objects: &'a [DisplayObject],
}

/// Writes one JSON document per tick, newline separated.
pub struct JsonLinesView<W: Write> {
    out: W,
}

impl<W: Write> JsonLinesView<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> View for JsonLinesView<W> {
    fn render(&mut self, tick: u64, objects: &[DisplayObject]) -> Result<()> {
        serde_json::to_writer(&mut self.out, &Frame { tick, objects })?;
        self.out.write_all(b"\n")?;
        self.out.flush()?;
        Ok(())
    }
}
