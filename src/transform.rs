//! The canonical 4x4 affine transforms and the view transform.
//!
//! Free functions build individual transforms; the chaining methods on
//! [`Matrix`] pre-multiply so that a fluent chain applies in the order it is
//! written: `identity.rotate_x(r).scale(..).translate(..)` rotates first.

use crate::matrix::Matrix;
use crate::tuple::Tuple;

pub fn translation(x: f64, y: f64, z: f64) -> Matrix {
    let mut m = Matrix::identity(4);
    m.set(0, 3, x);
    m.set(1, 3, y);
    m.set(2, 3, z);
    m
}

pub fn scaling(x: f64, y: f64, z: f64) -> Matrix {
    let mut m = Matrix::identity(4);
    m.set(0, 0, x);
    m.set(1, 1, y);
    m.set(2, 2, z);
    m
}

pub fn rotation_x(r: f64) -> Matrix {
    let mut m = Matrix::identity(4);
    m.set(1, 1, r.cos());
    m.set(1, 2, -r.sin());
    m.set(2, 1, r.sin());
    m.set(2, 2, r.cos());
    m
}

pub fn rotation_y(r: f64) -> Matrix {
    let mut m = Matrix::identity(4);
    m.set(0, 0, r.cos());
    m.set(0, 2, r.sin());
    m.set(2, 0, -r.sin());
    m.set(2, 2, r.cos());
    m
}

pub fn rotation_z(r: f64) -> Matrix {
    let mut m = Matrix::identity(4);
    m.set(0, 0, r.cos());
    m.set(0, 1, -r.sin());
    m.set(1, 0, r.sin());
    m.set(1, 1, r.cos());
    m
}

pub fn shearing(xy: f64, xz: f64, yx: f64, yz: f64, zx: f64, zy: f64) -> Matrix {
    let mut m = Matrix::identity(4);
    m.set(0, 1, xy);
    m.set(0, 2, xz);
    m.set(1, 0, yx);
    m.set(1, 2, yz);
    m.set(2, 0, zx);
    m.set(2, 1, zy);
    m
}

/// Builds the world-to-camera transform for an eye at `from` looking at `to`
/// with the given approximate `up`, orthonormalizing the basis on the way.
pub fn view_transform(from: Tuple, to: Tuple, up: Tuple) -> Matrix {
    let forward = (to - from).normalized();
    let left = forward.cross(up.normalized());
    let true_up = left.cross(forward);
    let orientation = Matrix::from_values(
        4,
        4,
        &[
            left.x, left.y, left.z, 0., //
            true_up.x, true_up.y, true_up.z, 0., //
            -forward.x, -forward.y, -forward.z, 0., //
            0., 0., 0., 1.,
        ],
    );
    orientation * translation(-from.x, -from.y, -from.z)
}

impl Matrix {
    pub fn translate(self, x: f64, y: f64, z: f64) -> Matrix {
        translation(x, y, z) * self
    }

    pub fn scale(self, x: f64, y: f64, z: f64) -> Matrix {
        scaling(x, y, z) * self
    }

    pub fn rotate_x(self, r: f64) -> Matrix {
        rotation_x(r) * self
    }

    pub fn rotate_y(self, r: f64) -> Matrix {
        rotation_y(r) * self
    }

    pub fn rotate_z(self, r: f64) -> Matrix {
        rotation_z(r) * self
    }

    pub fn shear(self, xy: f64, xz: f64, yx: f64, yz: f64, zx: f64, zy: f64) -> Matrix {
        shearing(xy, xz, yx, yz, zx, zy) * self
    }
}
