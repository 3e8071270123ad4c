//! Surface materials and the Phong lighting evaluator.

use crate::color::{Color, BLACK, WHITE};
use crate::fp::approx_eq;
use crate::light::PointLight;
use crate::matrix::Matrix;
use crate::pattern::Pattern;
use crate::tuple::Tuple;

#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub color: Color,
    pub ambient: f64,
    pub diffuse: f64,
    pub specular: f64,
    pub shininess: f64,
    pub reflective: f64,
    pub transparency: f64,
    pub refractive_index: f64,
    pub pattern: Option<Pattern>,
}

impl Default for Material {
    fn default() -> Material {
        Material {
            color: WHITE,
            ambient: 0.1,
            diffuse: 0.9,
            specular: 0.9,
            shininess: 200.0,
            reflective: 0.0,
            transparency: 0.0,
            refractive_index: 1.0,
            pattern: None,
        }
    }
}

impl Material {
    pub fn new() -> Material {
        Material::default()
    }

    /// Phong shading for a single light. `object_inverse` is the inverse
    /// transform of the shaded object, needed to sample an attached pattern
    /// in pattern space. Components of the result may exceed 1; clamping is
    /// the encoder's job.
    pub fn lighting(
        &self,
        light: &PointLight,
        object_inverse: &Matrix,
        point: Tuple,
        eye: Tuple,
        normal: Tuple,
        in_shadow: bool,
    ) -> Color {
        let color = match &self.pattern {
            Some(pattern) => pattern.pattern_at_object(object_inverse, point),
            None => self.color,
        };
        let effective_color = color * light.intensity;
        let ambient = effective_color * self.ambient;

        let light_v = (light.position - point).normalized();
        let light_dot_normal = light_v.dot(normal);
        if in_shadow || light_dot_normal < 0.0 {
            return ambient;
        }

        let diffuse = effective_color * self.diffuse * light_dot_normal;
        let reflect_v = (-light_v).reflected(normal);
        let reflect_dot_eye = reflect_v.dot(eye);
        let specular = if reflect_dot_eye <= 0.0 {
            BLACK
        } else {
            light.intensity * self.specular * reflect_dot_eye.powf(self.shininess)
        };

        ambient + diffuse + specular
    }

    pub fn is_reflective(&self) -> bool {
        !approx_eq(self.reflective, 0.0)
    }

    pub fn is_transparent(&self) -> bool {
        self.transparency != 0.0
    }
}
