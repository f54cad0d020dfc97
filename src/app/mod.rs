pub mod shutdown;
pub mod view;

pub use shutdown::ShutdownManager;
pub use view::{JsonLinesView, LogView, View};

use crate::model::config::AppConfig;
use crate::model::{BrainRegistry, World};
use anyhow::Result;
use std::time::Duration;
use tokio::time::MissedTickBehavior;

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    ViewClosed,
    MaxTicks,
    Interrupted,
    AllDead,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub ticks: u64,
    pub living: usize,
    pub reason: StopReason,
}

/// Drives a world at a fixed tick rate and feeds a view.
pub struct App {
    pub world: World,
    pub max_ticks: Option<u64>,
    /// When false, ticks run back to back.
    pub throttled: bool,
    pub shutdown: ShutdownManager,
}

impl App {
    pub fn new(config: AppConfig, registry: &BrainRegistry) -> Result<Self> {
        let world = World::new(config, registry)?;
        Ok(Self::from_world(world))
    }

    pub fn from_world(world: World) -> Self {
        Self {
            world,
            max_ticks: None,
            throttled: true,
            shutdown: ShutdownManager::new(),
        }
    }

    #[must_use]
    pub fn with_max_ticks(mut self, max_ticks: Option<u64>) -> Self {
        self.max_ticks = max_ticks;
        self
    }

    #[must_use]
    pub fn with_throttle(mut self, throttled: bool) -> Self {
        self.throttled = throttled;
        self
    }

    fn stop_reason(&self, view: &dyn View, ticks: u64) -> Option<StopReason> {
        if self.shutdown.is_shutdown_requested() {
            Some(StopReason::Interrupted)
        } else if !view.keep_running() {
            Some(StopReason::ViewClosed)
        } else if self.max_ticks.is_some_and(|max| ticks >= max) {
            Some(StopReason::MaxTicks)
        } else if self.world.all_dead() {
            Some(StopReason::AllDead)
        } else {
            None
        }
    }

    /// Runs one tick and hands the result to the view.
    pub fn step(&mut self, view: &mut dyn View) -> Result<()> {
        let report = self.world.tick();
        if !report.deaths.is_empty() {
            tracing::debug!(tick = report.tick, deaths = ?report.deaths, "Deaths this tick");
        }
        view.render(report.tick, &self.world.display_objects())
    }

    pub async fn run(&mut self, view: &mut dyn View) -> Result<RunSummary> {
        self.shutdown.listen_for_ctrl_c();

        let period = Duration::from_secs_f64(1.0 / self.world.config.target_tps as f64);
        let mut gate = tokio::time::interval(period);
        gate.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let mut ticks = 0;
        let reason = loop {
            if let Some(reason) = self.stop_reason(view, ticks) {
                break reason;
            }
            if self.throttled {
                gate.tick().await;
            } else {
                tokio::task::yield_now().await;
            }
            if let Err(err) = self.step(view) {
                self.shutdown.stop_listening();
                return Err(err);
            }
            ticks += 1;
        };

        tracing::info!(ticks, reason = ?reason, "Run finished");
        self.shutdown.cleanup(&self.world);
        Ok(RunSummary {
            ticks,
            living: self.world.living_count(),
            reason,
        })
    }
}
