//! Shapes module - the falling shape model
//!
//! This module provides:
//! - `ShapeKind` and `Geometry`: the seven variants and their size records
//! - `Outline`: local-space vertices and containment for drawing and hit-testing
//! - `Shape` and `Body`: a geometry with color and motion state
//! - `ShapeColor`: the spawn palette

mod color;
mod geometry;
mod shape;

pub use color::ShapeColor;
pub use geometry::{Geometry, Outline, ShapeKind};
pub use shape::Shape;
