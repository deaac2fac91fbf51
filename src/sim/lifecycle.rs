//! Live shape collection
//!
//! Owns every live shape together with its drawable handle, advances
//! their motion once per frame and removes shapes that fell off the
//! canvas or were dismissed.

use super::stats::FrameStats;
use crate::render::{DrawSurface, DrawableId};
use crate::shapes::Shape;

/// A shape that is on screen
#[derive(Clone, Debug)]
pub struct LiveShape {
    pub drawable: DrawableId,
    pub shape: Shape,
}

/// The live shapes, in insertion order
#[derive(Default)]
pub struct ShapeStore {
    shapes: Vec<LiveShape>,
}

impl ShapeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LiveShape> {
        self.shapes.iter()
    }

    #[cfg(test)]
    pub fn get(&self, handle: DrawableId) -> Option<&LiveShape> {
        self.shapes.iter().find(|live| live.drawable == handle)
    }

    /// Register a drawable for `shape` and start tracking it
    pub fn insert<S: DrawSurface>(&mut self, shape: Shape, surface: &mut S) -> DrawableId {
        let drawable = surface.create_drawable(&shape.geometry, shape.color);
        let body = &shape.body;
        surface.set_transform(drawable, body.x, body.y, body.rotation);

        self.shapes.push(LiveShape { drawable, shape });
        drawable
    }

    /// Destroy the shape owning `handle`
    ///
    /// Releases the drawable and drops the entry. Returns `false`, and
    /// touches nothing, when the shape is already gone.
    pub fn destroy<S: DrawSurface>(&mut self, handle: DrawableId, surface: &mut S) -> bool {
        match self.shapes.iter().position(|live| live.drawable == handle) {
            Some(index) => {
                self.shapes.remove(index);
                surface.remove_drawable(handle);
                true
            }
            None => false,
        }
    }

    /// Move every shape by `delta` frames and cull those past `cull_line`
    ///
    /// Walks the collection back to front so removals don't skip entries.
    /// Returns the number of shapes culled.
    pub fn advance<S: DrawSurface>(
        &mut self,
        gravity: f32,
        delta: f32,
        cull_line: f32,
        surface: &mut S,
    ) -> usize {
        let mut culled = 0;

        for index in (0..self.shapes.len()).rev() {
            let live = &mut self.shapes[index];
            let body = &mut live.shape.body;
            body.step(gravity, delta);
            surface.set_transform(live.drawable, body.x, body.y, body.rotation);

            if body.y >= cull_line {
                let handle = live.drawable;
                self.shapes.remove(index);
                surface.remove_drawable(handle);
                culled += 1;
            }
        }

        culled
    }

    /// Sum of the areas of all live shapes
    pub fn total_area(&self) -> f32 {
        self.iter().map(|live| live.shape.area()).sum()
    }

    pub fn stats(&self) -> FrameStats {
        FrameStats {
            shape_count: self.len(),
            total_area: self.total_area(),
        }
    }
}
