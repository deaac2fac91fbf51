//! Spawner - creates shapes on a timer or at a pointer
//!
//! Both entry points respect the population cap; at capacity they
//! quietly do nothing.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::SimConfig;
use super::lifecycle::ShapeStore;
use crate::render::{DrawSurface, DrawableId};
use crate::shapes::{Shape, ShapeColor, ShapeKind};

pub struct Spawner {
    rng: StdRng,
    max_shapes: usize,
    canvas_width: f32,
    spawn_height: f32,
}

impl Spawner {
    /// Create a spawner seeded from the OS
    pub fn new(config: &SimConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create a spawner with a fixed seed
    #[cfg(test)]
    pub fn seeded(config: &SimConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: &SimConfig, rng: StdRng) -> Self {
        Self {
            rng,
            max_shapes: config.max_shapes,
            canvas_width: config.canvas_width,
            spawn_height: config.spawn_height,
        }
    }

    /// Spawn just above the canvas at a random x
    pub fn spawn_automatic<S: DrawSurface>(
        &mut self,
        store: &mut ShapeStore,
        surface: &mut S,
    ) -> Option<DrawableId> {
        let x = self.rng.gen_range(0.0..self.canvas_width);
        self.spawn(x, self.spawn_height, store, surface)
    }

    /// Spawn at an exact canvas position
    pub fn spawn_at<S: DrawSurface>(
        &mut self,
        x: f32,
        y: f32,
        store: &mut ShapeStore,
        surface: &mut S,
    ) -> Option<DrawableId> {
        self.spawn(x, y, store, surface)
    }

    fn spawn<S: DrawSurface>(
        &mut self,
        x: f32,
        y: f32,
        store: &mut ShapeStore,
        surface: &mut S,
    ) -> Option<DrawableId> {
        if store.len() >= self.max_shapes {
            log::trace!("Spawn at ({:.0}, {:.0}) refused, {} shapes live", x, y, store.len());
            return None;
        }

        let color = ShapeColor::random(&mut self.rng);
        let kind = ShapeKind::random(&mut self.rng);
        let shape = Shape::create(kind, x, y, color, &mut self.rng);
        let spawned = shape.geometry.kind();
        let handle = store.insert(shape, surface);

        log::debug!("Spawned {} at ({:.0}, {:.0})", spawned.name(), x, y);
        Some(handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::ShapeCanvas;

    #[test]
    fn test_spawn_at_exact_position() {
        let config = SimConfig::default();
        let mut spawner = Spawner::seeded(&config, 1);
        let mut store = ShapeStore::new();
        let mut canvas = ShapeCanvas::new();

        let handle = spawner
            .spawn_at(123.0, 456.0, &mut store, &mut canvas)
            .expect("room to spawn");
        let live = store.get(handle).expect("shape is live");
        assert_eq!((live.shape.body.x, live.shape.body.y), (123.0, 456.0));
        assert!(ShapeColor::PALETTE.contains(&live.shape.color));
    }

    #[test]
    fn test_spawn_automatic_above_canvas() {
        let config = SimConfig::default();
        let mut spawner = Spawner::seeded(&config, 2);
        let mut store = ShapeStore::new();
        let mut canvas = ShapeCanvas::new();

        for _ in 0..40 {
            spawner.spawn_automatic(&mut store, &mut canvas);
        }
        for live in store.iter() {
            assert_eq!(live.shape.body.y, -30.0);
            assert!((0.0..800.0).contains(&live.shape.body.x));
        }
    }

    #[test]
    fn test_spawn_automatic_narrow_canvas() {
        let config = SimConfig {
            canvas_width: 1.0,
            ..SimConfig::default()
        };
        let mut spawner = Spawner::seeded(&config, 6);
        let mut store = ShapeStore::new();
        let mut canvas = ShapeCanvas::new();

        for _ in 0..20 {
            spawner.spawn_automatic(&mut store, &mut canvas);
        }
        assert_eq!(store.len(), 20);
        assert!(store.iter().all(|live| (0.0..1.0).contains(&live.shape.body.x)));
    }

    #[test]
    fn test_population_cap() {
        let config = SimConfig::default();
        let mut spawner = Spawner::seeded(&config, 3);
        let mut store = ShapeStore::new();
        let mut canvas = ShapeCanvas::new();

        for i in 0..50 {
            assert!(spawner
                .spawn_at(i as f32, 100.0, &mut store, &mut canvas)
                .is_some());
        }
        assert!(spawner.spawn_at(51.0, 100.0, &mut store, &mut canvas).is_none());
        assert!(spawner.spawn_automatic(&mut store, &mut canvas).is_none());

        assert_eq!(store.len(), 50);
        assert_eq!(canvas.len(), 50);
    }

    #[test]
    fn test_cap_never_exceeded() {
        let config = SimConfig {
            max_shapes: 5,
            ..SimConfig::default()
        };
        let mut spawner = Spawner::seeded(&config, 4);
        let mut store = ShapeStore::new();
        let mut canvas = ShapeCanvas::new();

        for i in 0..100 {
            if i % 3 == 0 {
                spawner.spawn_automatic(&mut store, &mut canvas);
            } else {
                spawner.spawn_at(10.0, 10.0, &mut store, &mut canvas);
            }
            assert!(store.len() <= 5);
        }
    }
}
