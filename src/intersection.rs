//! Ray-object intersections: the sorted hit list and the derived shading
//! context for a single hit.

use crate::fp::EPSILON;
use crate::ray::Ray;
use crate::shape::Object;
use crate::tuple::Tuple;
use std::ops::Index;

#[derive(Debug, Clone, Copy)]
pub struct Intersection<'scene> {
    pub t: f64,
    pub object: &'scene Object,
}

/// A collection of intersections, kept sorted ascending by `t` (stable
/// under ties).
#[derive(Debug, Clone, Default)]
pub struct Intersections<'scene> {
    items: Vec<Intersection<'scene>>,
}

impl<'scene> Intersections<'scene> {
    pub fn new() -> Intersections<'scene> {
        Intersections { items: Vec::new() }
    }

    pub fn add(&mut self, t: f64, object: &'scene Object) {
        let idx = self.items.partition_point(|i| i.t <= t);
        self.items.insert(idx, Intersection { t, object });
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Intersection<'scene>> {
        self.items.iter()
    }

    /// The visible hit: the first intersection with non-negative `t`.
    pub fn hit(&self) -> Option<&Intersection<'scene>> {
        self.items.iter().find(|i| i.t >= 0.0)
    }
}

impl<'scene> Index<usize> for Intersections<'scene> {
    type Output = Intersection<'scene>;

    fn index(&self, idx: usize) -> &Intersection<'scene> {
        &self.items[idx]
    }
}

/// Read-only shading context derived from one intersection within a full
/// intersection list.
#[derive(Debug, Clone)]
pub struct Computations<'scene> {
    pub t: f64,
    pub object: &'scene Object,
    pub point: Tuple,
    /// The point nudged along the normal, the origin for shadow and
    /// reflection rays. Without the nudge those rays immediately re-hit the
    /// surface they start on.
    pub over_point: Tuple,
    /// The point nudged against the normal, the origin for refraction rays.
    pub under_point: Tuple,
    pub eye_v: Tuple,
    pub normal_v: Tuple,
    pub reflect_v: Tuple,
    /// True when the eye is behind the surface; the normal has been flipped.
    pub inside: bool,
    /// Refractive index of the medium the ray is leaving.
    pub n1: f64,
    /// Refractive index of the medium the ray is entering.
    pub n2: f64,
}

impl<'scene> Intersection<'scene> {
    /// Derives the full shading context for this intersection. `xs` must be
    /// the complete intersection list the hit came from: the refractive
    /// indices on each side of the hit are found by walking the sorted list
    /// and tracking which objects the ray is currently inside.
    pub fn prepare_computations(
        &self,
        ray: &Ray,
        xs: &Intersections<'scene>,
    ) -> Computations<'scene> {
        let point = ray.position(self.t);
        let eye_v = -ray.direction;
        let mut normal_v = self.object.normal_at(point);
        let inside = normal_v.dot(eye_v) < 0.0;
        if inside {
            normal_v = -normal_v;
        }
        let over_point = point + normal_v * EPSILON;
        let under_point = point - normal_v * EPSILON;
        let reflect_v = ray.direction.reflected(normal_v);
        let (n1, n2) = self.refractive_indices(xs);

        Computations {
            t: self.t,
            object: self.object,
            point,
            over_point,
            under_point,
            eye_v,
            normal_v,
            reflect_v,
            inside,
            n1,
            n2,
        }
    }

    fn refractive_indices(&self, xs: &Intersections<'scene>) -> (f64, f64) {
        let mut n1 = 1.0;
        let mut n2 = 1.0;
        let mut containers: Vec<&Object> = Vec::new();
        for i in xs.iter() {
            // `Intersection` is `Copy`, so the hit may be a copy rather than
            // a reference into `xs`; match it by value.
            let is_hit = i.t == self.t && std::ptr::eq(i.object, self.object);
            if is_hit {
                n1 = containers
                    .last()
                    .map_or(1.0, |o| o.material().refractive_index);
            }
            match containers.iter().position(|o| std::ptr::eq(*o, i.object)) {
                Some(idx) => {
                    containers.remove(idx);
                }
                None => containers.push(i.object),
            }
            if is_hit {
                n2 = containers
                    .last()
                    .map_or(1.0, |o| o.material().refractive_index);
                break;
            }
        }
        (n1, n2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fp::{approx_eq, EPSILON};
    use crate::ray::Ray;
    use crate::shape::Object;
    use crate::transform::{scaling, translation};
    use crate::tuple::{point, vector};

    fn single<'a>(t: f64, object: &'a Object) -> Intersections<'a> {
        let mut xs = Intersections::new();
        xs.add(t, object);
        xs
    }

    #[test]
    fn an_intersection_has_t_and_an_object() {
        let s = Object::sphere();
        let xs = single(3.5, &s);
        assert_eq!(xs[0].t, 3.5);
        assert!(std::ptr::eq(xs[0].object, &s));
    }

    #[test]
    fn intersections_stay_sorted_by_t() {
        let s = Object::sphere();
        let mut xs = Intersections::new();
        xs.add(5., &s);
        xs.add(7., &s);
        xs.add(-3., &s);
        xs.add(2., &s);
        let ts: Vec<f64> = xs.iter().map(|i| i.t).collect();
        assert_eq!(ts, vec![-3., 2., 5., 7.]);
    }

    #[test]
    fn the_hit_when_all_intersections_have_positive_t() {
        let s = Object::sphere();
        let mut xs = Intersections::new();
        xs.add(1., &s);
        xs.add(2., &s);
        assert_eq!(xs.hit().unwrap().t, 1.);
    }

    #[test]
    fn the_hit_when_some_intersections_have_negative_t() {
        let s = Object::sphere();
        let mut xs = Intersections::new();
        xs.add(-1., &s);
        xs.add(1., &s);
        assert_eq!(xs.hit().unwrap().t, 1.);
    }

    #[test]
    fn there_is_no_hit_when_all_intersections_are_negative() {
        let s = Object::sphere();
        let mut xs = Intersections::new();
        xs.add(-2., &s);
        xs.add(-1., &s);
        assert!(xs.hit().is_none());
    }

    #[test]
    fn the_hit_is_the_lowest_nonnegative_intersection() {
        let s = Object::sphere();
        let mut xs = Intersections::new();
        xs.add(5., &s);
        xs.add(7., &s);
        xs.add(-3., &s);
        xs.add(2., &s);
        assert_eq!(xs.hit().unwrap().t, 2.);
    }

    #[test]
    fn precomputing_the_state_of_an_intersection() {
        let r = Ray::new(point(0., 0., -5.), vector(0., 0., 1.));
        let s = Object::sphere();
        let xs = single(4., &s);
        let comps = xs[0].prepare_computations(&r, &xs);
        assert_eq!(comps.t, 4.);
        assert!(std::ptr::eq(comps.object, &s));
        assert_eq!(comps.point, point(0., 0., -1.));
        assert_eq!(comps.eye_v, vector(0., 0., -1.));
        assert_eq!(comps.normal_v, vector(0., 0., -1.));
        assert!(!comps.inside);
    }

    #[test]
    fn the_hit_when_the_intersection_is_inside_the_object() {
        let r = Ray::new(point(0., 0., 0.), vector(0., 0., 1.));
        let s = Object::sphere();
        let xs = single(1., &s);
        let comps = xs[0].prepare_computations(&r, &xs);
        assert_eq!(comps.point, point(0., 0., 1.));
        assert_eq!(comps.eye_v, vector(0., 0., -1.));
        assert!(comps.inside);
        // the normal is flipped to face the eye
        assert_eq!(comps.normal_v, vector(0., 0., -1.));
    }

    #[test]
    fn the_hit_offsets_the_over_point() {
        let r = Ray::new(point(0., 0., -5.), vector(0., 0., 1.));
        let mut s = Object::sphere();
        s.set_transform(translation(0., 0., 1.)).unwrap();
        let xs = single(5., &s);
        let comps = xs[0].prepare_computations(&r, &xs);
        assert!(comps.over_point.z < -EPSILON / 2.);
        assert!(comps.point.z > comps.over_point.z);
    }

    #[test]
    fn the_hit_offsets_the_under_point() {
        let r = Ray::new(point(0., 0., -5.), vector(0., 0., 1.));
        let mut s = Object::glass_sphere();
        s.set_transform(translation(0., 0., 1.)).unwrap();
        let xs = single(5., &s);
        let comps = xs[0].prepare_computations(&r, &xs);
        assert!(comps.under_point.z > EPSILON / 2.);
        assert!(comps.point.z < comps.under_point.z);
    }

    #[test]
    fn precomputing_the_reflection_vector() {
        let p = Object::plane();
        let s = 2f64.sqrt() / 2.;
        let r = Ray::new(point(0., 1., -1.), vector(0., -s, s));
        let xs = single(2f64.sqrt(), &p);
        let comps = xs[0].prepare_computations(&r, &xs);
        assert_eq!(comps.reflect_v, vector(0., s, s));
    }

    #[test]
    fn a_copied_hit_finds_its_refractive_indices() {
        let s = Object::glass_sphere();
        let r = Ray::new(point(0., 0., -5.), vector(0., 0., 1.));
        let xs = s.intersect(&r);
        let hit = *xs.hit().unwrap();
        let comps = hit.prepare_computations(&r, &xs);
        assert!(approx_eq(comps.n1, 1.0));
        assert!(approx_eq(comps.n2, 1.5));
    }

    #[test]
    fn finding_n1_and_n2_at_various_intersections() {
        // Three nested glass spheres with distinct refractive indices; a ray
        // pierces all of them.
        let mut a = Object::glass_sphere();
        a.set_transform(scaling(2., 2., 2.)).unwrap();
        a.material_mut().refractive_index = 1.5;
        let mut b = Object::glass_sphere();
        b.set_transform(translation(0., 0., -0.25)).unwrap();
        b.material_mut().refractive_index = 2.0;
        let mut c = Object::glass_sphere();
        c.set_transform(translation(0., 0., 0.25)).unwrap();
        c.material_mut().refractive_index = 2.5;

        let r = Ray::new(point(0., 0., -4.), vector(0., 0., 1.));
        let mut xs = Intersections::new();
        xs.add(2., &a);
        xs.add(2.75, &b);
        xs.add(3.25, &c);
        xs.add(4.75, &b);
        xs.add(5.25, &c);
        xs.add(6., &a);

        let expected = [
            (1.0, 1.5),
            (1.5, 2.0),
            (2.0, 2.5),
            (2.5, 2.5),
            (2.5, 1.5),
            (1.5, 1.0),
        ];
        for (idx, (n1, n2)) in expected.iter().enumerate() {
            let comps = xs[idx].prepare_computations(&r, &xs);
            assert!(approx_eq(comps.n1, *n1), "n1 mismatch at index {}", idx);
            assert!(approx_eq(comps.n2, *n2), "n2 mismatch at index {}", idx);
        }
    }
}
