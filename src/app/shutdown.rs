//! Graceful shutdown handling for the application.
//!
//! Ctrl+C only raises a flag; the run loop notices it between ticks, so a
//! tick is never cut in half.

use crate::model::World;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tokio::task::JoinHandle;

/// Manages graceful shutdown of the application.
#[derive(Clone)]
pub struct ShutdownManager {
    shutdown_requested: Arc<AtomicBool>,
    dump_on_exit: bool,
    listener: Arc<Mutex<Option<JoinHandle<()>>>>,
}

impl Default for ShutdownManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ShutdownManager {
    pub fn new() -> Self {
        Self {
            shutdown_requested: Arc::new(AtomicBool::new(false)),
            dump_on_exit: true,
            listener: Arc::new(Mutex::new(None)),
        }
    }

    /// Sets whether every critter's status is logged on exit.
    pub fn set_dump_on_exit(&mut self, dump: bool) {
        self.dump_on_exit = dump;
    }

    pub fn should_dump_on_exit(&self) -> bool {
        self.dump_on_exit
    }

    pub fn request_shutdown(&self) {
        self.shutdown_requested.store(true, Ordering::SeqCst);
        tracing::info!("Shutdown requested");
    }

    pub fn is_shutdown_requested(&self) -> bool {
        self.shutdown_requested.load(Ordering::SeqCst)
    }

    /// Spawns a task that requests shutdown on Ctrl+C, replacing any
    /// listener left from an earlier run.
    /// Must be called from inside a tokio runtime.
    pub fn listen_for_ctrl_c(&self) {
        let manager = self.clone();
        let handle = tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("Ctrl+C received, initiating graceful shutdown...");
                manager.request_shutdown();
            }
        });
        if let Ok(mut slot) = self.listener.lock() {
            if let Some(previous) = slot.replace(handle) {
                previous.abort();
            }
        }
    }

    /// Aborts the Ctrl+C listener, if one is running.
    pub fn stop_listening(&self) {
        if let Ok(mut slot) = self.listener.lock() {
            if let Some(handle) = slot.take() {
                handle.abort();
            }
        }
    }

    pub fn is_listening(&self) -> bool {
        self.listener
            .lock()
            .map(|slot| slot.as_ref().is_some_and(|h| !h.is_finished()))
            .unwrap_or(false)
    }

    /// Final bookkeeping once the run loop has stopped.
    pub fn cleanup(&self, world: &World) {
        tracing::info!("Performing shutdown cleanup...");
        self.stop_listening();
        if self.dump_on_exit {
            world.dump_status();
        }
        tracing::info!(
            ticks = world.tick,
            living = world.living_count(),
            eats = world.metrics.counter("eat"),
            collisions = world.metrics.counter("collision"),
            deaths = world.metrics.counter("death"),
            elapsed_ms = world.metrics.elapsed().as_millis() as u64,
            "Cleanup complete"
        );
    }
}
