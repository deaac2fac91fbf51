//! Simulation tunables

use serde::{Deserialize, Serialize};

/// Fixed parameters of a simulation run
///
/// Deserialized from the `simulation` section of the settings file.
/// Missing fields fall back to their defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Canvas width in pixels; automatic spawns land in [0, width)
    pub canvas_width: f32,
    /// Canvas height in pixels
    pub canvas_height: f32,
    /// Population cap checked before every spawn
    pub max_shapes: usize,
    /// Shapes are culled once `y >= canvas_height + cull_margin`
    pub cull_margin: f32,
    /// Y coordinate of automatic spawns (negative = above the canvas)
    pub spawn_height: f32,
    /// How long a dismissal suppresses spawn-on-click
    pub debounce_ms: u64,
    /// Starting generation rate (shapes per second, 0..=10)
    pub initial_generation_rate: u8,
    /// Starting gravity (0..=10)
    pub initial_gravity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            canvas_width: 800.0,
            canvas_height: 600.0,
            max_shapes: 50,
            cull_margin: 50.0,
            spawn_height: -30.0,
            debounce_ms: 10,
            initial_generation_rate: 1,
            initial_gravity: 1,
        }
    }
}

impl SimConfig {
    /// Y coordinate at which shapes are culled
    pub fn cull_line(&self) -> f32 {
        self.canvas_height + self.cull_margin
    }
}
