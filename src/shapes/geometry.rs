//! Geometry - the seven shape variants and their size parameters
//!
//! Each variant carries its own size record. Area and outline are pure
//! functions of that record, so they never change while a shape falls.

use std::f32::consts::{PI, TAU};

use rand::Rng;

/// The seven kinds of shape that can fall
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ShapeKind {
    Triangle,
    Square,
    Pentagon,
    Hexagon,
    Circle,
    Ellipse,
    Star,
}

impl ShapeKind {
    pub const ALL: &[ShapeKind] = &[
        Self::Triangle,
        Self::Square,
        Self::Pentagon,
        Self::Hexagon,
        Self::Circle,
        Self::Ellipse,
        Self::Star,
    ];

    /// Pick a kind uniformly at random
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Triangle => "Triangle",
            Self::Square => "Square",
            Self::Pentagon => "Pentagon",
            Self::Hexagon => "Hexagon",
            Self::Circle => "Circle",
            Self::Ellipse => "Ellipse",
            Self::Star => "Star",
        }
    }
}

/// Size parameters of a shape, one record per variant
///
/// Lengths are in canvas pixels, measured from the shape's local origin.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Geometry {
    /// Isosceles triangle, apex up, base and height both `size`
    Triangle { size: f32 },
    /// Axis-aligned square with side `size`
    Square { size: f32 },
    /// Regular pentagon with circumradius `radius`
    Pentagon { radius: f32 },
    /// Regular hexagon with circumradius `radius`
    Hexagon { radius: f32 },
    Circle { radius: f32 },
    Ellipse { radius_x: f32, radius_y: f32 },
    /// Five-pointed star
    Star { outer_radius: f32, inner_radius: f32 },
}

impl Geometry {
    /// Draw random size parameters for a kind
    ///
    /// ## Ranges
    /// ```text
    /// Triangle, Square           size         in [20, 50)
    /// Pentagon, Hexagon, Circle  radius       in [15, 35)
    /// Ellipse                    radius_x     in [15, 30), radius_y in [10, 30)
    /// Star                       outer_radius in [20, 35), inner = outer / 2
    /// ```
    pub fn random<R: Rng>(kind: ShapeKind, rng: &mut R) -> Self {
        match kind {
            ShapeKind::Triangle => Self::Triangle {
                size: rng.gen_range(20.0..50.0),
            },
            ShapeKind::Square => Self::Square {
                size: rng.gen_range(20.0..50.0),
            },
            ShapeKind::Pentagon => Self::Pentagon {
                radius: rng.gen_range(15.0..35.0),
            },
            ShapeKind::Hexagon => Self::Hexagon {
                radius: rng.gen_range(15.0..35.0),
            },
            ShapeKind::Circle => Self::Circle {
                radius: rng.gen_range(15.0..35.0),
            },
            ShapeKind::Ellipse => Self::Ellipse {
                radius_x: rng.gen_range(15.0..30.0),
                radius_y: rng.gen_range(10.0..30.0),
            },
            ShapeKind::Star => {
                let outer_radius = rng.gen_range(20.0..35.0);
                Self::Star {
                    outer_radius,
                    inner_radius: outer_radius * 0.5,
                }
            }
        }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Triangle { .. } => ShapeKind::Triangle,
            Self::Square { .. } => ShapeKind::Square,
            Self::Pentagon { .. } => ShapeKind::Pentagon,
            Self::Hexagon { .. } => ShapeKind::Hexagon,
            Self::Circle { .. } => ShapeKind::Circle,
            Self::Ellipse { .. } => ShapeKind::Ellipse,
            Self::Star { .. } => ShapeKind::Star,
        }
    }

    /// Geometric surface area in square pixels
    pub fn area(&self) -> f32 {
        match *self {
            Self::Triangle { size } => size * size / 2.0,
            Self::Square { size } => size * size,
            Self::Pentagon { radius } => 5.0 * radius * radius * (TAU / 5.0).sin() / 2.0,
            Self::Hexagon { radius } => 3.0 * 3.0_f32.sqrt() * radius * radius / 2.0,
            Self::Circle { radius } => PI * radius * radius,
            Self::Ellipse { radius_x, radius_y } => PI * radius_x * radius_y,
            Self::Star {
                outer_radius,
                inner_radius,
            } => 5.0 * inner_radius * outer_radius * (PI / 5.0).sin(),
        }
    }

    /// Outline in local coordinates (y grows downward, origin at the shape center)
    pub fn outline(&self) -> Outline {
        match *self {
            Self::Triangle { size } => {
                let h = size / 2.0;
                Outline::Polygon(vec![(-h, h), (h, h), (0.0, -h)])
            }
            Self::Square { size } => {
                let h = size / 2.0;
                Outline::Polygon(vec![(-h, -h), (h, -h), (h, h), (-h, h)])
            }
            Self::Pentagon { radius } => Outline::Polygon(ring(5, -PI / 2.0, |_| radius)),
            Self::Hexagon { radius } => Outline::Polygon(ring(6, 0.0, |_| radius)),
            Self::Circle { radius } => Outline::Ellipse {
                radius_x: radius,
                radius_y: radius,
            },
            Self::Ellipse { radius_x, radius_y } => Outline::Ellipse { radius_x, radius_y },
            Self::Star {
                outer_radius,
                inner_radius,
            } => Outline::Polygon(ring(10, -PI / 2.0, |i| {
                if i % 2 == 0 {
                    outer_radius
                } else {
                    inner_radius
                }
            })),
        }
    }
}

/// `n` vertices evenly spaced around the origin, starting at `offset` radians
fn ring(n: usize, offset: f32, radius: impl Fn(usize) -> f32) -> Vec<(f32, f32)> {
    (0..n)
        .map(|i| {
            let angle = offset + i as f32 * TAU / n as f32;
            let r = radius(i);
            (r * angle.cos(), r * angle.sin())
        })
        .collect()
}

/// Drawable outline of a shape
#[derive(Clone, PartialEq, Debug)]
pub enum Outline {
    /// Closed polygon, last vertex connects back to the first
    Polygon(Vec<(f32, f32)>),
    Ellipse { radius_x: f32, radius_y: f32 },
}

impl Outline {
    /// Whether a local-space point lies inside the outline
    ///
    /// Polygons use the even-odd rule, so the star's notches are outside.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        match self {
            Self::Ellipse { radius_x, radius_y } => {
                if *radius_x <= 0.0 || *radius_y <= 0.0 {
                    return false;
                }
                let nx = x / radius_x;
                let ny = y / radius_y;
                nx * nx + ny * ny <= 1.0
            }
            Self::Polygon(vertices) => {
                let n = vertices.len();
                let mut inside = false;
                let mut j = n.wrapping_sub(1);
                for i in 0..n {
                    let (xi, yi) = vertices[i];
                    let (xj, yj) = vertices[j];
                    if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
                        inside = !inside;
                    }
                    j = i;
                }
                inside
            }
        }
    }

    /// Points along the outline, with ellipses flattened to `segments` points
    pub fn points(&self, segments: usize) -> Vec<(f32, f32)> {
        match self {
            Self::Polygon(vertices) => vertices.clone(),
            Self::Ellipse { radius_x, radius_y } => (0..segments)
                .map(|i| {
                    let angle = i as f32 * TAU / segments as f32;
                    (radius_x * angle.cos(), radius_y * angle.sin())
                })
                .collect(),
        }
    }
}
