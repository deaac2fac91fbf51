//! Frame driver - one simulation tick per rendered frame
//!
//! ## Tick order
//!
//! 1. Spawn automatically if the generation interval has elapsed
//! 2. Advance every shape and cull the fallen ones
//! 3. Report count and total area
//!
//! Pointer input arrives between ticks through `dismiss` and `click_canvas`.

use std::time::{Duration, Instant};

use super::config::SimConfig;
use super::debounce::Debounce;
use super::lifecycle::ShapeStore;
use super::params::{Adjustment, Params};
use super::spawner::Spawner;
use super::stats::FrameStats;
use crate::render::{DrawSurface, DrawableId};

/// Frame rate at which `delta == 1.0`
pub const TARGET_FPS: f32 = 60.0;

/// Convert a frame's duration in seconds into frame-relative delta
///
/// Slow frames produce deltas above 1.0; motion scales with them.
pub fn frame_delta(seconds: f32) -> f32 {
    seconds * TARGET_FPS
}

/// All mutable state of a running toy
pub struct Simulation {
    config: SimConfig,
    store: ShapeStore,
    spawner: Spawner,
    params: Params,
    debounce: Debounce,
    last_auto_spawn: Option<Instant>,
}

impl Simulation {
    pub fn new(config: SimConfig) -> Self {
        let spawner = Spawner::new(&config);
        Self::with_spawner(config, spawner)
    }

    /// Create a simulation whose spawns are reproducible
    #[cfg(test)]
    pub fn seeded(config: SimConfig, seed: u64) -> Self {
        let spawner = Spawner::seeded(&config, seed);
        Self::with_spawner(config, spawner)
    }

    fn with_spawner(config: SimConfig, spawner: Spawner) -> Self {
        Self {
            params: Params::new(config.initial_generation_rate, config.initial_gravity),
            debounce: Debounce::new(Duration::from_millis(config.debounce_ms)),
            store: ShapeStore::new(),
            spawner,
            last_auto_spawn: None,
            config,
        }
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn shapes(&self) -> &ShapeStore {
        &self.store
    }

    /// Run one frame
    pub fn tick<S: DrawSurface>(&mut self, now: Instant, delta: f32, surface: &mut S) -> FrameStats {
        self.debounce.poll(now);

        if self.auto_spawn_due(now) {
            self.spawner.spawn_automatic(&mut self.store, surface);
            self.last_auto_spawn = Some(now);
        }

        let culled = self.store.advance(
            self.params.gravity(),
            delta,
            self.config.cull_line(),
            surface,
        );
        if culled > 0 {
            log::debug!("Culled {} shapes below the canvas", culled);
        }

        self.stats()
    }

    /// Whether the generation interval has passed since the last automatic spawn
    fn auto_spawn_due(&self, now: Instant) -> bool {
        let Some(interval) = self.params.spawn_interval() else {
            return false;
        };
        match self.last_auto_spawn {
            Some(last) => now.saturating_duration_since(last) > interval,
            None => true,
        }
    }

    /// Current count and total area
    pub fn stats(&self) -> FrameStats {
        self.store.stats()
    }

    /// Remove the shape owning `handle` after a click or tap on it
    ///
    /// Also arms the debounce so the same gesture does not spawn.
    /// Dismissing a shape that is already gone is a no-op.
    pub fn dismiss<S: DrawSurface>(&mut self, handle: DrawableId, now: Instant, surface: &mut S) -> bool {
        self.debounce.arm(now);
        let removed = self.store.destroy(handle, surface);
        if removed {
            log::debug!("Dismissed shape {:?}", handle);
        }
        removed
    }

    /// Spawn at a canvas position unless a dismissal just happened
    pub fn click_canvas<S: DrawSurface>(
        &mut self,
        x: f32,
        y: f32,
        now: Instant,
        surface: &mut S,
    ) -> Option<DrawableId> {
        if self.debounce.is_active(now) {
            log::trace!("Canvas click at ({:.0}, {:.0}) suppressed", x, y);
            return None;
        }
        self.spawner.spawn_at(x, y, &mut self.store, surface)
    }

    /// Apply a rate or gravity button press
    pub fn adjust(&mut self, adjustment: Adjustment) {
        self.params.apply(adjustment);
        log::debug!(
            "{:?}: rate = {}, gravity = {}",
            adjustment,
            self.params.generation_rate.value(),
            self.params.gravity.value()
        );
    }
}
