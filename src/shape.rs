//! Geometric primitives and the object envelope that places them in the
//! world.
//!
//! Each [`Shape`] variant only knows its own local-space geometry: intersect
//! a local ray, compute a local normal. [`Object`] supplies everything the
//! variants share - the transform with its cached inverse and
//! inverse-transpose, and the material - and converts between world space
//! and local space on the way in and out. Adding a primitive means adding a
//! variant and two match arms.

use crate::fp::EPSILON;
use crate::intersection::Intersections;
use crate::material::Material;
use crate::matrix::{Matrix, NotInvertible};
use crate::ray::Ray;
use crate::tuple::{vector, Tuple};
use arrayvec::ArrayVec;

/// Local intersections of a ray with a primitive: at most two `t` values.
pub type LocalHits = ArrayVec<f64, 2>;

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// The unit sphere centered on the local origin.
    Sphere,
    /// The local xz-plane, infinite in x and z.
    Plane,
    /// The axis-aligned cube spanning -1..1 on each axis.
    Cube,
}

impl Shape {
    pub fn local_intersect(&self, ray: &Ray) -> LocalHits {
        let mut hits = LocalHits::new();
        match self {
            Shape::Sphere => {
                let sphere_to_ray = ray.origin - Tuple::point(0., 0., 0.);
                let a = ray.direction.dot(ray.direction);
                let b = 2.0 * ray.direction.dot(sphere_to_ray);
                let c = sphere_to_ray.dot(sphere_to_ray) - 1.0;
                let discriminant = b * b - 4.0 * a * c;
                if discriminant >= 0.0 {
                    let sqrt = discriminant.sqrt();
                    hits.push((-b - sqrt) / (2.0 * a));
                    hits.push((-b + sqrt) / (2.0 * a));
                }
            }
            Shape::Plane => {
                if ray.direction.y.abs() >= EPSILON {
                    hits.push(-ray.origin.y / ray.direction.y);
                }
            }
            Shape::Cube => {
                let (xtmin, xtmax) = check_axis(ray.origin.x, ray.direction.x);
                let (ytmin, ytmax) = check_axis(ray.origin.y, ray.direction.y);
                let (ztmin, ztmax) = check_axis(ray.origin.z, ray.direction.z);
                let tmin = xtmin.max(ytmin).max(ztmin);
                let tmax = xtmax.min(ytmax).min(ztmax);
                if tmin <= tmax {
                    hits.push(tmin);
                    hits.push(tmax);
                }
            }
        }
        hits
    }

    pub fn local_normal_at(&self, p: Tuple) -> Tuple {
        match self {
            Shape::Sphere => p - Tuple::point(0., 0., 0.),
            Shape::Plane => vector(0., 1., 0.),
            Shape::Cube => {
                let maxc = p.x.abs().max(p.y.abs()).max(p.z.abs());
                if maxc == p.x.abs() {
                    vector(p.x, 0., 0.)
                } else if maxc == p.y.abs() {
                    vector(0., p.y, 0.)
                } else {
                    vector(0., 0., p.z)
                }
            }
        }
    }
}

/// One slab of the cube test. A ray parallel to the slab never crosses its
/// planes: inside the slab the interval is unbounded, outside it is empty.
fn check_axis(origin: f64, direction: f64) -> (f64, f64) {
    let tmin_numerator = -1.0 - origin;
    let tmax_numerator = 1.0 - origin;
    if direction.abs() >= EPSILON {
        let tmin = tmin_numerator / direction;
        let tmax = tmax_numerator / direction;
        if tmin > tmax {
            (tmax, tmin)
        } else {
            (tmin, tmax)
        }
    } else if tmin_numerator <= 0.0 && tmax_numerator >= 0.0 {
        (f64::NEG_INFINITY, f64::INFINITY)
    } else {
        (f64::INFINITY, f64::NEG_INFINITY)
    }
}

/// A shape placed in the world. Identity is reference identity: two default
/// spheres are distinct objects even with identical parameters, so `Object`
/// deliberately does not implement `PartialEq`.
#[derive(Debug, Clone)]
pub struct Object {
    shape: Shape,
    transform: Matrix,
    inverse: Matrix,
    inverse_transpose: Matrix,
    material: Material,
}

impl Object {
    pub fn new(shape: Shape) -> Object {
        Object {
            shape,
            transform: Matrix::identity(4),
            inverse: Matrix::identity(4),
            inverse_transpose: Matrix::identity(4),
            material: Material::default(),
        }
    }

    pub fn sphere() -> Object {
        Object::new(Shape::Sphere)
    }

    pub fn plane() -> Object {
        Object::new(Shape::Plane)
    }

    pub fn cube() -> Object {
        Object::new(Shape::Cube)
    }

    /// A unit sphere with a glass-like material: fully transparent,
    /// refractive index 1.5.
    pub fn glass_sphere() -> Object {
        let mut s = Object::sphere();
        s.material.transparency = 1.0;
        s.material.refractive_index = 1.5;
        s
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn transform(&self) -> &Matrix {
        &self.transform
    }

    pub fn inverse_transform(&self) -> &Matrix {
        &self.inverse
    }

    pub fn set_transform(&mut self, transform: Matrix) -> Result<(), NotInvertible> {
        self.inverse = transform.inverse()?;
        self.inverse_transpose = self.inverse.transpose();
        self.transform = transform;
        Ok(())
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    pub fn material_mut(&mut self) -> &mut Material {
        &mut self.material
    }

    pub fn set_material(&mut self, material: Material) {
        self.material = material;
    }

    /// Intersects a world-space ray with this object, returning the
    /// intersections sorted ascending by `t`.
    pub fn intersect(&self, ray: &Ray) -> Intersections<'_> {
        let local_ray = ray.transform(&self.inverse);
        let mut xs = Intersections::new();
        for t in self.shape.local_intersect(&local_ray) {
            xs.add(t, self);
        }
        xs
    }

    /// The world-space surface normal at a world-space point. The
    /// inverse-transpose corrects the direction under non-uniform scaling;
    /// zeroing `w` discards the translation column it drags in.
    pub fn normal_at(&self, world_point: Tuple) -> Tuple {
        let local_point = &self.inverse * world_point;
        let local_normal = self.shape.local_normal_at(local_point);
        let mut world_normal = &self.inverse_transpose * local_normal;
        world_normal.w = 0.0;
        world_normal.normalized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Material;
    use crate::ray::Ray;
    use crate::transform::{rotation_z, scaling, translation};
    use crate::tuple::{point, vector};
    use std::f64::consts::PI;

    #[test]
    fn a_ray_intersects_a_sphere_at_two_points() {
        let r = Ray::new(point(0., 0., -5.), vector(0., 0., 1.));
        let s = Object::sphere();
        let xs = s.intersect(&r);
        assert_eq!(xs.len(), 2);
        assert_eq!(xs[0].t, 4.0);
        assert_eq!(xs[1].t, 6.0);
    }

    #[test]
    fn a_ray_intersects_a_sphere_at_a_tangent() {
        let r = Ray::new(point(0., 1., -5.), vector(0., 0., 1.));
        let s = Object::sphere();
        let xs = s.intersect(&r);
        assert_eq!(xs.len(), 2);
        assert_eq!(xs[0].t, 5.0);
        assert_eq!(xs[1].t, 5.0);
    }

    #[test]
    fn a_ray_misses_a_sphere() {
        let r = Ray::new(point(0., 2., -5.), vector(0., 0., 1.));
        let s = Object::sphere();
        assert!(s.intersect(&r).is_empty());
    }

    #[test]
    fn a_ray_originating_inside_a_sphere() {
        let r = Ray::new(point(0., 0., 0.), vector(0., 0., 1.));
        let s = Object::sphere();
        let xs = s.intersect(&r);
        assert_eq!(xs[0].t, -1.0);
        assert_eq!(xs[1].t, 1.0);
    }

    #[test]
    fn a_sphere_behind_a_ray() {
        let r = Ray::new(point(0., 0., 5.), vector(0., 0., 1.));
        let s = Object::sphere();
        let xs = s.intersect(&r);
        assert_eq!(xs[0].t, -6.0);
        assert_eq!(xs[1].t, -4.0);
    }

    #[test]
    fn intersect_records_the_object() {
        let r = Ray::new(point(0., 0., -5.), vector(0., 0., 1.));
        let s = Object::sphere();
        let xs = s.intersect(&r);
        assert!(std::ptr::eq(xs[0].object, &s));
        assert!(std::ptr::eq(xs[1].object, &s));
    }

    #[test]
    fn intersecting_a_scaled_sphere() {
        let r = Ray::new(point(0., 0., -5.), vector(0., 0., 1.));
        let mut s = Object::sphere();
        s.set_transform(scaling(2., 2., 2.)).unwrap();
        let xs = s.intersect(&r);
        assert_eq!(xs.len(), 2);
        assert_eq!(xs[0].t, 3.0);
        assert_eq!(xs[1].t, 7.0);
    }

    #[test]
    fn intersecting_a_translated_sphere() {
        let r = Ray::new(point(0., 0., -5.), vector(0., 0., 1.));
        let mut s = Object::sphere();
        s.set_transform(translation(5., 0., 0.)).unwrap();
        assert!(s.intersect(&r).is_empty());
    }

    #[test]
    fn an_object_has_a_default_identity_transform() {
        let s = Object::sphere();
        assert_eq!(*s.transform(), Matrix::identity(4));
    }

    #[test]
    fn setting_a_singular_transform_fails() {
        let mut s = Object::sphere();
        assert!(s.set_transform(scaling(0., 0., 0.)).is_err());
    }

    #[test]
    fn an_object_has_a_default_material() {
        let s = Object::sphere();
        assert_eq!(*s.material(), Material::default());
    }

    #[test]
    fn an_object_may_be_assigned_a_material() {
        let mut s = Object::sphere();
        let mut m = Material::default();
        m.ambient = 1.0;
        s.set_material(m.clone());
        assert_eq!(*s.material(), m);
    }

    #[test]
    fn a_glass_sphere_is_transparent_with_ri_1_5() {
        let s = Object::glass_sphere();
        assert_eq!(*s.transform(), Matrix::identity(4));
        assert_eq!(s.material().transparency, 1.0);
        assert_eq!(s.material().refractive_index, 1.5);
    }

    #[test]
    fn sphere_normals_on_the_axes() {
        let s = Object::sphere();
        assert_eq!(s.normal_at(point(1., 0., 0.)), vector(1., 0., 0.));
        assert_eq!(s.normal_at(point(0., 1., 0.)), vector(0., 1., 0.));
        assert_eq!(s.normal_at(point(0., 0., 1.)), vector(0., 0., 1.));
    }

    #[test]
    fn sphere_normal_at_a_nonaxial_point() {
        let s = Object::sphere();
        let k = 3f64.sqrt() / 3.;
        let n = s.normal_at(point(k, k, k));
        assert_eq!(n, vector(k, k, k));
        assert_eq!(n, n.normalized());
    }

    #[test]
    fn normal_on_a_translated_object() {
        let mut s = Object::sphere();
        s.set_transform(translation(0., 1., 0.)).unwrap();
        let n = s.normal_at(point(0., 1.70711, -0.70711));
        assert_eq!(n, vector(0., 0.70711, -0.70711));
    }

    #[test]
    fn normal_on_a_transformed_object() {
        let mut s = Object::sphere();
        s.set_transform(scaling(1., 0.5, 1.) * rotation_z(PI / 5.))
            .unwrap();
        let s2 = 2f64.sqrt() / 2.;
        let n = s.normal_at(point(0., s2, -s2));
        assert_eq!(n, vector(0., 0.97014, -0.24254));
    }

    #[test]
    fn a_ray_parallel_to_the_plane_never_intersects() {
        let p = Object::plane();
        let r = Ray::new(point(0., 10., 0.), vector(0., 0., 1.));
        assert!(p.intersect(&r).is_empty());
    }

    #[test]
    fn a_coplanar_ray_misses_the_plane() {
        let p = Object::plane();
        let r = Ray::new(point(0., 0., 0.), vector(0., 0., 1.));
        assert!(p.intersect(&r).is_empty());
    }

    #[test]
    fn a_ray_intersecting_the_plane_from_above() {
        let p = Object::plane();
        let r = Ray::new(point(0., 1., 0.), vector(0., -1., 0.));
        let xs = p.intersect(&r);
        assert_eq!(xs.len(), 1);
        assert_eq!(xs[0].t, 1.0);
        assert!(std::ptr::eq(xs[0].object, &p));
    }

    #[test]
    fn a_ray_intersecting_the_plane_from_below() {
        let p = Object::plane();
        let r = Ray::new(point(0., -1., 0.), vector(0., 1., 0.));
        let xs = p.intersect(&r);
        assert_eq!(xs.len(), 1);
        assert_eq!(xs[0].t, 1.0);
    }

    #[test]
    fn the_plane_normal_is_constant_everywhere() {
        let p = Object::plane();
        assert_eq!(p.normal_at(point(0., 0., 0.)), vector(0., 1., 0.));
        assert_eq!(p.normal_at(point(10., 0., -10.)), vector(0., 1., 0.));
        assert_eq!(p.normal_at(point(-5., 0., 150.)), vector(0., 1., 0.));
    }

    #[test]
    fn a_ray_intersects_a_cube_from_each_face_and_inside() {
        let c = Object::cube();
        let cases: &[(Tuple, Tuple, f64, f64)] = &[
            (point(5., 0.5, 0.), vector(-1., 0., 0.), 4., 6.),
            (point(-5., 0.5, 0.), vector(1., 0., 0.), 4., 6.),
            (point(0.5, 5., 0.), vector(0., -1., 0.), 4., 6.),
            (point(0.5, -5., 0.), vector(0., 1., 0.), 4., 6.),
            (point(0.5, 0., 5.), vector(0., 0., -1.), 4., 6.),
            (point(0.5, 0., -5.), vector(0., 0., 1.), 4., 6.),
            (point(0., 0.5, 0.), vector(0., 0., 1.), -1., 1.),
        ];
        for (origin, direction, t1, t2) in cases {
            let xs = c.intersect(&Ray::new(*origin, *direction));
            assert_eq!(xs.len(), 2);
            assert_eq!(xs[0].t, *t1);
            assert_eq!(xs[1].t, *t2);
        }
    }

    #[test]
    fn a_ray_grazing_along_a_cube_face_still_hits() {
        let c = Object::cube();
        // origin exactly on the x = 1 face, direction parallel to it
        let r = Ray::new(point(1., 0., -5.), vector(0., 0., 1.));
        let xs = c.intersect(&r);
        assert_eq!(xs.len(), 2);
        assert_eq!(xs[0].t, 4.0);
        assert_eq!(xs[1].t, 6.0);
    }

    #[test]
    fn a_ray_misses_a_cube() {
        let c = Object::cube();
        let cases: &[(Tuple, Tuple)] = &[
            (point(-2., 0., 0.), vector(0.2673, 0.5345, 0.8018)),
            (point(0., -2., 0.), vector(0.8018, 0.2673, 0.5345)),
            (point(0., 0., -2.), vector(0.5345, 0.8018, 0.2673)),
            (point(2., 0., 2.), vector(0., 0., -1.)),
            (point(0., 2., 2.), vector(0., -1., 0.)),
            (point(2., 2., 0.), vector(-1., 0., 0.)),
        ];
        for (origin, direction) in cases {
            assert!(c.intersect(&Ray::new(*origin, *direction)).is_empty());
        }
    }

    #[test]
    fn the_cube_normal_points_along_the_dominant_axis() {
        let c = Object::cube();
        let cases: &[(Tuple, Tuple)] = &[
            (point(1., 0.5, -0.8), vector(1., 0., 0.)),
            (point(-1., -0.2, 0.9), vector(-1., 0., 0.)),
            (point(-0.4, 1., -0.1), vector(0., 1., 0.)),
            (point(0.3, -1., -0.7), vector(0., -1., 0.)),
            (point(-0.6, 0.3, 1.), vector(0., 0., 1.)),
            (point(0.4, 0.4, -1.), vector(0., 0., -1.)),
            (point(1., 1., 1.), vector(1., 0., 0.)),
            (point(-1., -1., -1.), vector(-1., 0., 0.)),
        ];
        for (p, expected) in cases {
            assert_eq!(c.normal_at(*p), *expected);
        }
    }
}
