//! Sim module - the falling shapes simulation
//!
//! This module provides:
//! - `ShapeStore`: live shapes, per-frame motion and culling
//! - `Spawner`: timed and pointer spawns under a population cap
//! - `Simulation`: the frame driver tying spawns, motion, input and stats together
//! - `Params`/`Adjustment`: the rate and gravity knobs
//! - `Debounce`: keeps a dismiss click from also spawning

mod config;
mod debounce;
mod driver;
mod lifecycle;
mod params;
mod spawner;
mod stats;

pub use config::SimConfig;
pub use driver::{frame_delta, Simulation};
pub use params::{Adjustment, PARAM_MAX};
pub use stats::FrameStats;
