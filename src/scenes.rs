//! Built-in demo scenes for the renderer binary and benchmarks.

use crate::camera::Camera;
use crate::color::{Color, WHITE};
use crate::light::PointLight;
use crate::matrix::NotInvertible;
use crate::pattern::Pattern;
use crate::shape::Object;
use crate::transform::{scaling, translation, view_transform};
use crate::tuple::{point, vector};
use crate::world::World;
use std::f64::consts::PI;

/// A showcase scene: a checkered, slightly reflective floor, a glass sphere,
/// a mirror sphere, and a striped matte sphere, boxed in by a cube acting as
/// a back wall.
pub fn cover_scene(hsize: usize, vsize: usize) -> Result<(World, Camera), NotInvertible> {
    let mut world = World::new();
    world.light = Some(PointLight::new(point(-10., 10., -10.), WHITE));

    let mut floor = Object::plane();
    {
        let m = floor.material_mut();
        let mut checker = Pattern::checker(Color::new(0.85, 0.85, 0.85), Color::new(0.2, 0.25, 0.3));
        checker.set_transform(scaling(0.75, 0.75, 0.75))?;
        m.pattern = Some(checker);
        m.specular = 0.1;
        m.reflective = 0.15;
    }
    world.add_object(floor);

    let mut backdrop = Object::cube();
    backdrop.set_transform(scaling(12., 12., 0.1).translate(0., 0., 8.))?;
    {
        let m = backdrop.material_mut();
        m.color = Color::new(0.9, 0.9, 1.0);
        m.specular = 0.;
        m.diffuse = 0.8;
    }
    world.add_object(backdrop);

    let mut middle = Object::glass_sphere();
    middle.set_transform(translation(-0.5, 1., 0.5))?;
    {
        let m = middle.material_mut();
        m.color = Color::new(0.05, 0.05, 0.05);
        m.diffuse = 0.1;
        m.specular = 1.0;
        m.shininess = 300.;
        m.reflective = 0.9;
    }
    world.add_object(middle);

    let mut right = Object::sphere();
    right.set_transform(scaling(0.5, 0.5, 0.5).translate(1.5, 0.5, -0.5))?;
    {
        let m = right.material_mut();
        m.color = Color::new(0.1, 0.1, 0.1);
        m.diffuse = 0.3;
        m.specular = 1.0;
        m.shininess = 400.;
        m.reflective = 0.9;
    }
    world.add_object(right);

    let mut left = Object::sphere();
    left.set_transform(scaling(0.33, 0.33, 0.33).translate(-1.5, 0.33, -0.75))?;
    {
        let m = left.material_mut();
        let mut stripes = Pattern::stripe(Color::new(0.9, 0.3, 0.3), Color::new(0.9, 0.6, 0.1));
        stripes.set_transform(scaling(0.25, 0.25, 0.25).rotate_z(PI / 4.))?;
        m.pattern = Some(stripes);
        m.diffuse = 0.9;
        m.specular = 0.3;
    }
    world.add_object(left);

    let mut camera = Camera::new(hsize, vsize, PI / 3.);
    camera.set_transform(view_transform(
        point(0., 1.5, -5.),
        point(0., 1., 0.),
        vector(0., 1., 0.),
    ))?;

    Ok((world, camera))
}

/// The canonical two-sphere world seen from just in front of it. Mostly
/// useful for eyeballing regressions cheaply.
pub fn default_scene(hsize: usize, vsize: usize) -> Result<(World, Camera), NotInvertible> {
    let world = World::default_world();
    let mut camera = Camera::new(hsize, vsize, PI / 2.);
    camera.set_transform(view_transform(
        point(0., 0., -5.),
        point(0., 0., 0.),
        vector(0., 1., 0.),
    ))?;
    Ok((world, camera))
}

/// Looks up a scene constructor by name.
pub fn by_name(
    name: &str,
    hsize: usize,
    vsize: usize,
) -> Option<Result<(World, Camera), NotInvertible>> {
    match name {
        "cover" => Some(cover_scene(hsize, vsize)),
        "default" => Some(default_scene(hsize, vsize)),
        _ => None,
    }
}
