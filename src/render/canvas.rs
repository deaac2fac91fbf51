//! Shape canvas widget
//!
//! Keeps the drawables registered by the simulation, paints them with egui
//! and resolves pointer positions to the drawable underneath.
//!
//! ## Coordinate System
//!
//! Canvas space matches the simulation: (0, 0) is the top-left corner,
//! X grows right, Y grows down, one unit per logical pixel.

use std::collections::BTreeMap;

use eframe::egui::{self, Color32, Mesh, Pos2, Rect, Sense, Vec2};

use super::traits::{DrawSurface, DrawableId};
use crate::shapes::{Geometry, Outline, ShapeColor};

/// Segments used to flatten circles and ellipses
const ELLIPSE_SEGMENTS: usize = 48;

/// Display settings for the canvas
#[derive(Clone)]
pub struct CanvasSettings {
    /// Logical canvas size in pixels
    pub size: Vec2,

    /// Background color
    pub background: Color32,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            size: Vec2::new(800.0, 600.0),
            background: Color32::WHITE,
        }
    }
}

/// A shape as the canvas sees it
#[derive(Clone, Debug)]
struct Drawable {
    outline: Outline,
    color: Color32,
    x: f32,
    y: f32,
    rotation: f32,
}

impl Drawable {
    /// Map a canvas point into the drawable's unrotated local frame
    fn to_local(&self, x: f32, y: f32) -> (f32, f32) {
        let dx = x - self.x;
        let dy = y - self.y;
        let (sin_r, cos_r) = self.rotation.sin_cos();
        (dx * cos_r + dy * sin_r, -dx * sin_r + dy * cos_r)
    }

    /// Map a local point to canvas space
    fn to_canvas(&self, x: f32, y: f32) -> (f32, f32) {
        let (sin_r, cos_r) = self.rotation.sin_cos();
        (
            self.x + x * cos_r - y * sin_r,
            self.y + x * sin_r + y * cos_r,
        )
    }

    fn contains(&self, x: f32, y: f32) -> bool {
        let (lx, ly) = self.to_local(x, y);
        self.outline.contains(lx, ly)
    }

    /// Filled triangle fan around the local origin
    ///
    /// All outlines are star-shaped about their origin, so a fan fills
    /// the star's notches correctly where a convex fill would not.
    fn mesh(&self, origin: Pos2) -> Mesh {
        let points = self.outline.points(ELLIPSE_SEGMENTS);
        let mut mesh = Mesh::default();

        mesh.colored_vertex(origin + Vec2::new(self.x, self.y), self.color);
        for &(lx, ly) in &points {
            let (cx, cy) = self.to_canvas(lx, ly);
            mesh.colored_vertex(origin + Vec2::new(cx, cy), self.color);
        }

        let n = points.len() as u32;
        for i in 0..n {
            mesh.add_triangle(0, 1 + i, 1 + (i + 1) % n);
        }
        mesh
    }
}

/// Canvas widget that displays falling shapes
pub struct ShapeCanvas {
    /// Display settings
    pub settings: CanvasSettings,

    /// Drawables in creation order (later ones paint on top)
    drawables: BTreeMap<DrawableId, Drawable>,

    next_id: u64,
}

impl Default for ShapeCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl ShapeCanvas {
    /// Create a canvas with default settings
    pub fn new() -> Self {
        Self::with_settings(CanvasSettings::default())
    }

    /// Create a canvas with custom settings
    pub fn with_settings(settings: CanvasSettings) -> Self {
        Self {
            settings,
            drawables: BTreeMap::new(),
            next_id: 0,
        }
    }

    /// Number of registered drawables
    pub fn len(&self) -> usize {
        self.drawables.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.drawables.is_empty()
    }

    #[cfg(test)]
    pub fn contains(&self, handle: DrawableId) -> bool {
        self.drawables.contains_key(&handle)
    }

    /// Topmost drawable under a canvas point
    pub fn hit_test(&self, x: f32, y: f32) -> Option<DrawableId> {
        self.drawables
            .iter()
            .rev()
            .find(|(_, drawable)| drawable.contains(x, y))
            .map(|(&handle, _)| handle)
    }

    /// Draw the canvas
    ///
    /// # Returns
    /// The response from the widget; use `canvas_pos` to map its
    /// interaction position into canvas space.
    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let (response, painter) = ui.allocate_painter(self.settings.size, Sense::click());
        let rect = response.rect;

        painter.rect_filled(rect, 0.0, self.settings.background);

        let painter = painter.with_clip_rect(rect);
        for drawable in self.drawables.values() {
            painter.add(egui::Shape::mesh(drawable.mesh(rect.min)));
        }

        response
    }

    /// Convert a screen position to canvas coordinates
    pub fn canvas_pos(rect: Rect, pos: Pos2) -> (f32, f32) {
        (pos.x - rect.min.x, pos.y - rect.min.y)
    }
}

impl DrawSurface for ShapeCanvas {
    fn create_drawable(&mut self, geometry: &Geometry, color: ShapeColor) -> DrawableId {
        let handle = DrawableId(self.next_id);
        self.next_id += 1;

        self.drawables.insert(
            handle,
            Drawable {
                outline: geometry.outline(),
                color: Color32::from_rgb(color.r(), color.g(), color.b()),
                x: 0.0,
                y: 0.0,
                rotation: 0.0,
            },
        );
        handle
    }

    fn set_transform(&mut self, handle: DrawableId, x: f32, y: f32, rotation: f32) {
        if let Some(drawable) = self.drawables.get_mut(&handle) {
            drawable.x = x;
            drawable.y = y;
            drawable.rotation = rotation;
        }
    }

    fn remove_drawable(&mut self, handle: DrawableId) {
        self.drawables.remove(&handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_4;

    #[test]
    fn test_create_and_remove() {
        let mut canvas = ShapeCanvas::new();
        let a = canvas.create_drawable(&Geometry::Circle { radius: 10.0 }, ShapeColor(0xff6b6b));
        let b = canvas.create_drawable(&Geometry::Square { size: 10.0 }, ShapeColor(0x4ecdc4));
        assert_ne!(a, b);
        assert_eq!(canvas.len(), 2);

        canvas.remove_drawable(a);
        canvas.remove_drawable(a);
        assert_eq!(canvas.len(), 1);
        assert!(!canvas.contains(a));
        assert!(canvas.contains(b));
    }

    #[test]
    fn test_hit_test_follows_transform() {
        let mut canvas = ShapeCanvas::new();
        let handle = canvas.create_drawable(&Geometry::Circle { radius: 10.0 }, ShapeColor(0xff6b6b));
        canvas.set_transform(handle, 100.0, 100.0, 0.0);

        assert_eq!(canvas.hit_test(105.0, 95.0), Some(handle));
        assert_eq!(canvas.hit_test(0.0, 0.0), None);
    }

    #[test]
    fn test_hit_test_rotation() {
        let mut canvas = ShapeCanvas::new();
        let handle = canvas.create_drawable(&Geometry::Square { size: 20.0 }, ShapeColor(0xff6b6b));

        // Corner region of the unrotated square
        canvas.set_transform(handle, 50.0, 50.0, 0.0);
        assert_eq!(canvas.hit_test(59.0, 59.0), Some(handle));

        // Rotated 45 degrees the corner swings away from the diagonal
        canvas.set_transform(handle, 50.0, 50.0, FRAC_PI_4);
        assert_eq!(canvas.hit_test(59.0, 59.0), None);
        assert_eq!(canvas.hit_test(63.0, 50.0), Some(handle));
    }

    #[test]
    fn test_hit_test_topmost() {
        let mut canvas = ShapeCanvas::new();
        let below = canvas.create_drawable(&Geometry::Circle { radius: 20.0 }, ShapeColor(0xff6b6b));
        let above = canvas.create_drawable(&Geometry::Circle { radius: 20.0 }, ShapeColor(0x54a0ff));
        canvas.set_transform(below, 50.0, 50.0, 0.0);
        canvas.set_transform(above, 60.0, 50.0, 0.0);

        assert_eq!(canvas.hit_test(55.0, 50.0), Some(above));
        assert_eq!(canvas.hit_test(35.0, 50.0), Some(below));
    }

    #[test]
    fn test_mesh_is_fan() {
        let mut canvas = ShapeCanvas::new();
        let handle = canvas.create_drawable(
            &Geometry::Star { outer_radius: 20.0, inner_radius: 10.0 },
            ShapeColor(0xfeca57),
        );
        let mesh = canvas.drawables[&handle].mesh(Pos2::ZERO);
        assert_eq!(mesh.vertices.len(), 11);
        assert_eq!(mesh.indices.len(), 30);
    }
}
