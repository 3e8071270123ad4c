//! Homogeneous 4-component tuples: points (`w = 1`) and vectors (`w = 0`).

use crate::fp::approx_eq;
use std::ops::{Add, Div, Mul, Neg, Sub};

#[derive(Debug, Clone, Copy, Default)]
pub struct Tuple {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

/// Shorthand for [`Tuple::point`].
pub fn point(x: f64, y: f64, z: f64) -> Tuple {
    Tuple::point(x, y, z)
}

/// Shorthand for [`Tuple::vector`].
pub fn vector(x: f64, y: f64, z: f64) -> Tuple {
    Tuple::vector(x, y, z)
}

impl Tuple {
    pub fn new(x: f64, y: f64, z: f64, w: f64) -> Tuple {
        Tuple { x, y, z, w }
    }

    pub fn point(x: f64, y: f64, z: f64) -> Tuple {
        Tuple { x, y, z, w: 1.0 }
    }

    pub fn vector(x: f64, y: f64, z: f64) -> Tuple {
        Tuple { x, y, z, w: 0.0 }
    }

    pub fn is_point(&self) -> bool {
        self.w == 1.0
    }

    pub fn is_vector(&self) -> bool {
        self.w == 0.0
    }

    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w).sqrt()
    }

    pub fn normalized(&self) -> Tuple {
        *self / self.magnitude()
    }

    pub fn dot(&self, other: Tuple) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Cross product. Only defined for vector operands; invoking it with a
    /// point is a precondition violation.
    pub fn cross(&self, other: Tuple) -> Tuple {
        assert!(
            self.is_vector() && other.is_vector(),
            "cross product requires vector operands"
        );
        Tuple::vector(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Reflects this vector about `normal`.
    pub fn reflected(&self, normal: Tuple) -> Tuple {
        *self - normal * 2.0 * self.dot(normal)
    }
}

// Equality is component-wise within EPSILON to absorb floating-point drift.
impl PartialEq for Tuple {
    fn eq(&self, other: &Tuple) -> bool {
        approx_eq(self.x, other.x)
            && approx_eq(self.y, other.y)
            && approx_eq(self.z, other.z)
            && approx_eq(self.w, other.w)
    }
}

impl Add for Tuple {
    type Output = Tuple;

    fn add(self, other: Tuple) -> Tuple {
        Tuple::new(
            self.x + other.x,
            self.y + other.y,
            self.z + other.z,
            self.w + other.w,
        )
    }
}

impl Sub for Tuple {
    type Output = Tuple;

    fn sub(self, other: Tuple) -> Tuple {
        Tuple::new(
            self.x - other.x,
            self.y - other.y,
            self.z - other.z,
            self.w - other.w,
        )
    }
}

impl Neg for Tuple {
    type Output = Tuple;

    fn neg(self) -> Tuple {
        Tuple::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl Mul<f64> for Tuple {
    type Output = Tuple;

    fn mul(self, s: f64) -> Tuple {
        Tuple::new(self.x * s, self.y * s, self.z * s, self.w * s)
    }
}

impl Div<f64> for Tuple {
    type Output = Tuple;

    fn div(self, s: f64) -> Tuple {
        Tuple::new(self.x / s, self.y / s, self.z / s, self.w / s)
    }
}
