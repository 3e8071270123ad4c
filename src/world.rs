//! The scene graph: a flat collection of objects plus one point light, and
//! the recursive color resolution that ties intersection and shading
//! together.

use crate::color::{Color, BLACK, WHITE};
use crate::intersection::{Computations, Intersections};
use crate::light::PointLight;
use crate::ray::Ray;
use crate::shape::Object;
use crate::tuple::{point, Tuple};

/// Reflection/refraction recursion budget. Mutually reflective surfaces
/// (two facing mirrors) would otherwise recurse forever, so the bound is a
/// correctness requirement, not a tuning knob.
pub const MAX_BOUNCES: u32 = 5;

#[derive(Debug, Clone, Default)]
pub struct World {
    pub objects: Vec<Object>,
    pub light: Option<PointLight>,
}

impl World {
    pub fn new() -> World {
        World::default()
    }

    /// The canonical two-sphere test world: a white light at (-10, 10, -10),
    /// an outer green-ish sphere and an inner sphere at half scale.
    pub fn default_world() -> World {
        let mut w = World::new();
        w.light = Some(PointLight::new(point(-10., 10., -10.), WHITE));
        let mut s1 = Object::sphere();
        s1.material_mut().color = Color::new(0.8, 1.0, 0.6);
        s1.material_mut().diffuse = 0.7;
        s1.material_mut().specular = 0.2;
        let mut s2 = Object::sphere();
        s2.set_transform(crate::transform::scaling(0.5, 0.5, 0.5))
            .expect("uniform scaling is invertible");
        w.objects.push(s1);
        w.objects.push(s2);
        w
    }

    pub fn add_object(&mut self, object: Object) {
        self.objects.push(object);
    }

    /// Intersects the ray with every object, merged into one sorted list.
    pub fn intersections(&self, ray: &Ray) -> Intersections<'_> {
        let mut xs = Intersections::new();
        for object in &self.objects {
            for i in object.intersect(ray).iter() {
                xs.add(i.t, i.object);
            }
        }
        xs
    }

    /// Whether `p` lies in shadow: an object blocks the segment between the
    /// point and the light. A hit beyond the light does not shadow.
    pub fn is_shadowed(&self, p: Tuple) -> bool {
        let light = match &self.light {
            Some(light) => light,
            None => return false,
        };
        let point_to_light = light.position - p;
        let distance = point_to_light.magnitude();
        let r = Ray::new(p, point_to_light.normalized());
        match self.intersections(&r).hit() {
            Some(hit) => hit.t < distance,
            None => false,
        }
    }

    /// Full illumination for a prepared hit: direct Phong lighting plus the
    /// reflected and refracted contributions, summed. (Reflection and
    /// refraction are deliberately not blended by the Schlick coefficient;
    /// see [`World::schlick`].)
    pub fn shade_hit(&self, comps: &Computations<'_>, remaining: u32) -> Color {
        let surface = match &self.light {
            Some(light) => {
                let in_shadow = self.is_shadowed(comps.over_point);
                comps.object.material().lighting(
                    light,
                    comps.object.inverse_transform(),
                    comps.point,
                    comps.eye_v,
                    comps.normal_v,
                    in_shadow,
                )
            }
            None => BLACK,
        };
        let reflected = self.reflected_color(comps, remaining);
        let refracted = self.refracted_color(comps, remaining);
        surface + reflected + refracted
    }

    /// The color visible along `ray`, black if it hits nothing.
    pub fn color_at(&self, ray: &Ray, remaining: u32) -> Color {
        let xs = self.intersections(ray);
        match xs.hit() {
            Some(hit) => {
                let comps = hit.prepare_computations(ray, &xs);
                self.shade_hit(&comps, remaining)
            }
            None => BLACK,
        }
    }

    /// The contribution of the reflection bounce: a ray cast from the
    /// over-point along the reflection vector, attenuated by the material's
    /// reflectivity. Black once the bounce budget is exhausted.
    pub fn reflected_color(&self, comps: &Computations<'_>, remaining: u32) -> Color {
        let material = comps.object.material();
        if remaining == 0 || !material.is_reflective() {
            return BLACK;
        }
        let reflect_ray = Ray::new(comps.over_point, comps.reflect_v);
        self.color_at(&reflect_ray, remaining - 1) * material.reflective
    }

    /// The contribution of the refracted ray per Snell's law, cast from the
    /// under-point. Black for opaque materials, an exhausted budget, or
    /// total internal reflection.
    pub fn refracted_color(&self, comps: &Computations<'_>, remaining: u32) -> Color {
        let material = comps.object.material();
        if remaining == 0 || !material.is_transparent() {
            return BLACK;
        }
        let n_ratio = comps.n1 / comps.n2;
        let cos_i = comps.eye_v.dot(comps.normal_v);
        let sin2_t = n_ratio * n_ratio * (1.0 - cos_i * cos_i);
        if sin2_t > 1.0 {
            return BLACK;
        }
        let cos_t = (1.0 - sin2_t).sqrt();
        let direction = comps.normal_v * (n_ratio * cos_i - cos_t) - comps.eye_v * n_ratio;
        let refract_ray = Ray::new(comps.under_point, direction);
        self.color_at(&refract_ray, remaining - 1) * material.transparency
    }

    /// Schlick's approximation of the Fresnel reflectance at the hit.
    /// Provided for callers that want to weight reflection against
    /// refraction; `shade_hit` itself sums both contributions unweighted,
    /// matching the reference behavior.
    pub fn schlick(comps: &Computations<'_>) -> f64 {
        let mut cos = comps.eye_v.dot(comps.normal_v);
        if comps.n1 > comps.n2 {
            let n = comps.n1 / comps.n2;
            let sin2_t = n * n * (1.0 - cos * cos);
            if sin2_t > 1.0 {
                return 1.0;
            }
            cos = (1.0 - sin2_t).sqrt();
        }
        let r0 = ((comps.n1 - comps.n2) / (comps.n1 + comps.n2)).powi(2);
        r0 + (1.0 - r0) * (1.0 - cos).powi(5)
    }
}
