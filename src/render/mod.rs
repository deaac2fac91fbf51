//! Render module - on-screen side of the shapes
//!
//! This module provides:
//! - `DrawSurface` trait the simulation drives drawables through
//! - `ShapeCanvas`, the egui implementation with painting and hit-testing

mod canvas;
mod traits;

pub use canvas::{CanvasSettings, ShapeCanvas};
pub use traits::{DrawSurface, DrawableId};
