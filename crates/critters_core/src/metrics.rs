//! Tick metrics and structured logging for the simulation.

use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Per-world statistics, logged periodically through `tracing`.
pub struct Metrics {
    tick_count: u64,
    living_critters: usize,
    food_count: usize,
    counters: HashMap<&'static str, u64>,
    log_interval: u64,
    start_time: Instant,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    #[must_use]
    pub fn new() -> Self {
        Self::with_log_interval(100)
    }

    /// Logs a summary every `log_interval` ticks; 0 disables the summary.
    #[must_use]
    pub fn with_log_interval(log_interval: u64) -> Self {
        Self {
            tick_count: 0,
            living_critters: 0,
            food_count: 0,
            counters: HashMap::new(),
            log_interval,
            start_time: Instant::now(),
        }
    }

    /// Records a completed tick with its duration.
    pub fn record_tick(&mut self, duration: Duration, living: usize, food: usize) {
        self.tick_count += 1;
        self.living_critters = living;
        self.food_count = food;

        if self.log_interval > 0 && self.tick_count % self.log_interval == 0 {
            tracing::info!(
                tick = self.tick_count,
                living = living,
                food = food,
                eats = self.counter("eat"),
                collisions = self.counter("collision"),
                deaths = self.counter("death"),
                duration_us = duration.as_micros() as u64,
                "Simulation tick"
            );
        }
    }

    pub fn increment_counter(&mut self, name: &'static str) {
        *self.counters.entry(name).or_insert(0) += 1;
    }

    #[must_use]
    pub fn counter(&self, name: &str) -> u64 {
        self.counters.get(name).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    #[must_use]
    pub fn living_critters(&self) -> usize {
        self.living_critters
    }

    #[must_use]
    pub fn food_count(&self) -> usize {
        self.food_count
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Initialize tracing subscriber for logging.
pub fn init_logging() {
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_max_level(tracing::Level::INFO)
            .finish(),
    )
    .ok();
}
