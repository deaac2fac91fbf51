//! Draw surface trait - the seam between the simulation and the screen
//!
//! The simulation owns shapes; the surface owns their on-screen drawables.
//! Every live shape holds exactly one `DrawableId`, handed out by
//! `create_drawable` and given back through `remove_drawable`.

use crate::shapes::{Geometry, ShapeColor};

/// Opaque handle to a drawable registered with a surface
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct DrawableId(pub u64);

/// Something that can display shapes
///
/// Calls are assumed to succeed. Removing or transforming an unknown
/// handle must be a no-op.
pub trait DrawSurface {
    /// Register a drawable for a shape and return its handle
    fn create_drawable(&mut self, geometry: &Geometry, color: ShapeColor) -> DrawableId;

    /// Move and rotate a drawable (canvas pixels, radians)
    fn set_transform(&mut self, handle: DrawableId, x: f32, y: f32, rotation: f32);

    /// Release a drawable
    fn remove_drawable(&mut self, handle: DrawableId);
}
