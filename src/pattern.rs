//! Procedural 3D color patterns. A pattern carries its own transform,
//! independent of the shape it decorates: sampling first maps the world
//! point into object space, then into pattern space.

use crate::color::Color;
use crate::matrix::{Matrix, NotInvertible};
use crate::tuple::Tuple;

#[derive(Debug, Clone, PartialEq)]
pub enum PatternKind {
    /// Alternates `a`/`b` on the integer parity of x.
    Stripe(Color, Color),
    /// Blends linearly from `a` to `b` over the fractional part of x.
    Gradient(Color, Color),
    /// Alternates on the integer parity of the xz distance from the origin.
    Ring(Color, Color),
    /// Alternates on the parity of floor(x) + floor(y) + floor(z).
    Checker(Color, Color),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Pattern {
    kind: PatternKind,
    transform: Matrix,
    inverse: Matrix,
}

impl Pattern {
    pub fn new(kind: PatternKind) -> Pattern {
        Pattern {
            kind,
            transform: Matrix::identity(4),
            inverse: Matrix::identity(4),
        }
    }

    pub fn stripe(a: Color, b: Color) -> Pattern {
        Pattern::new(PatternKind::Stripe(a, b))
    }

    pub fn gradient(a: Color, b: Color) -> Pattern {
        Pattern::new(PatternKind::Gradient(a, b))
    }

    pub fn ring(a: Color, b: Color) -> Pattern {
        Pattern::new(PatternKind::Ring(a, b))
    }

    pub fn checker(a: Color, b: Color) -> Pattern {
        Pattern::new(PatternKind::Checker(a, b))
    }

    pub fn transform(&self) -> &Matrix {
        &self.transform
    }

    pub fn set_transform(&mut self, transform: Matrix) -> Result<(), NotInvertible> {
        self.inverse = transform.inverse()?;
        self.transform = transform;
        Ok(())
    }

    /// The pattern color at a point already in pattern space.
    pub fn pattern_at(&self, p: Tuple) -> Color {
        match &self.kind {
            PatternKind::Stripe(a, b) => parity(p.x.floor(), *a, *b),
            PatternKind::Gradient(a, b) => {
                let fraction = p.x - p.x.floor();
                *a + (*b - *a) * fraction
            }
            PatternKind::Ring(a, b) => {
                let distance = (p.x * p.x + p.z * p.z).sqrt();
                parity(distance.floor(), *a, *b)
            }
            PatternKind::Checker(a, b) => parity(p.x.floor() + p.y.floor() + p.z.floor(), *a, *b),
        }
    }

    /// The pattern color at a world-space point on an object. The object's
    /// inverse transform applies first, then the pattern's own inverse.
    pub fn pattern_at_object(&self, object_inverse: &Matrix, world_point: Tuple) -> Color {
        let object_point = object_inverse * world_point;
        let pattern_point = &self.inverse * object_point;
        self.pattern_at(pattern_point)
    }
}

fn parity(n: f64, a: Color, b: Color) -> Color {
    if (n as i64).rem_euclid(2) == 0 {
        a
    } else {
        b
    }
}
