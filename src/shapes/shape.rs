//! Shape - a geometry in motion
//!
//! A `Shape` couples a variant's size record with a color and a `Body`
//! holding position, velocity and spin.

use std::f32::consts::TAU;

use rand::Rng;

use super::color::ShapeColor;
use super::geometry::{Geometry, ShapeKind};

/// Share of the gravity constant added to vertical speed each frame
const GRAVITY_SCALE: f32 = 0.3;

/// Motion state of a falling shape
///
/// Units are canvas pixels and radians, per frame at the target rate.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Body {
    pub x: f32,
    pub y: f32,
    pub velocity_x: f32,
    pub velocity_y: f32,
    pub rotation: f32,
    pub rotation_speed: f32,
}

impl Body {
    /// A body at rest
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            ..Default::default()
        }
    }

    /// A body with random drift, initial angle and spin
    ///
    /// `velocity_x` is in [-1, 1), `rotation` in [0, 2π) and
    /// `rotation_speed` in [-0.05, 0.05). Vertical speed starts at zero.
    pub fn random<R: Rng>(x: f32, y: f32, rng: &mut R) -> Self {
        Self {
            velocity_x: (rng.gen::<f32>() - 0.5) * 2.0,
            rotation: rng.gen::<f32>() * TAU,
            rotation_speed: (rng.gen::<f32>() - 0.5) * 0.1,
            ..Self::at(x, y)
        }
    }

    /// Advance by `delta` frames under `gravity`
    pub fn step(&mut self, gravity: f32, delta: f32) {
        self.velocity_y += gravity * delta * GRAVITY_SCALE;

        self.y += self.velocity_y * delta;
        self.x += self.velocity_x * delta;

        self.rotation += self.rotation_speed * delta;
    }
}

/// A falling shape
#[derive(Clone, Debug)]
pub struct Shape {
    pub geometry: Geometry,
    pub color: ShapeColor,
    pub body: Body,
}

impl Shape {
    /// Create a shape of `kind` at (x, y) with random size and motion
    ///
    /// Position is unconstrained; automatic spawns start above the canvas.
    pub fn create<R: Rng>(
        kind: ShapeKind,
        x: f32,
        y: f32,
        color: ShapeColor,
        rng: &mut R,
    ) -> Self {
        let geometry = Geometry::random(kind, rng);
        Self {
            body: Body::random(x, y, rng),
            ..Self::new(geometry, x, y, color)
        }
    }

    /// Create a shape with known geometry, at rest
    pub fn new(geometry: Geometry, x: f32, y: f32, color: ShapeColor) -> Self {
        Self {
            geometry,
            color,
            body: Body::at(x, y),
        }
    }

    pub fn area(&self) -> f32 {
        self.geometry.area()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_step() {
        let mut body = Body::at(100.0, 0.0);
        body.velocity_x = 1.0;
        body.rotation_speed = 0.05;

        body.step(1.0, 1.0);
        assert!((body.velocity_y - 0.3).abs() < 1e-6);
        assert!((body.y - 0.3).abs() < 1e-6);
        assert_eq!(body.x, 101.0);
        assert!((body.rotation - 0.05).abs() < 1e-6);
    }

    #[test]
    fn test_step_scales_with_delta() {
        let mut body = Body::at(0.0, 0.0);
        body.velocity_x = 0.5;
        body.step(0.0, 2.5);
        assert_eq!(body.x, 1.25);
        assert_eq!(body.y, 0.0);
    }

    #[test]
    fn test_random_body_ranges() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..500 {
            let body = Body::random(5.0, -30.0, &mut rng);
            assert_eq!((body.x, body.y, body.velocity_y), (5.0, -30.0, 0.0));
            assert!((-1.0..1.0).contains(&body.velocity_x));
            assert!((0.0..TAU).contains(&body.rotation));
            assert!((-0.05..0.05).contains(&body.rotation_speed));
        }
    }

    #[test]
    fn test_area_ignores_motion() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut shape = Shape::create(ShapeKind::Star, 10.0, 10.0, ShapeColor(0xff6b6b), &mut rng);
        let before = shape.area();
        for _ in 0..100 {
            shape.body.step(10.0, 3.0);
        }
        assert_eq!(shape.area(), before);
        assert_eq!(shape.geometry.kind(), ShapeKind::Star);
    }
}
