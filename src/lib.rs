//! A Whitted-style software ray tracer: homogeneous tuple/matrix algebra,
//! a polymorphic shape protocol, Phong shading with procedural patterns,
//! shadows, and recursive reflection/refraction, driven by a pinhole camera
//! into a pixel canvas.

pub mod camera;
pub mod canvas;
pub mod color;
pub mod fp;
pub mod intersection;
pub mod light;
pub mod material;
pub mod matrix;
pub mod pattern;
pub mod ray;
pub mod scenes;
pub mod shape;
pub mod transform;
pub mod tuple;
pub mod world;

pub use camera::Camera;
pub use canvas::Canvas;
pub use color::Color;
pub use intersection::{Computations, Intersection, Intersections};
pub use light::PointLight;
pub use material::Material;
pub use matrix::{Matrix, NotInvertible};
pub use pattern::{Pattern, PatternKind};
pub use ray::Ray;
pub use shape::{Object, Shape};
pub use tuple::Tuple;
pub use world::{World, MAX_BOUNCES};
