//! The camera: maps pixel coordinates to world-space rays and drives the
//! per-pixel render loop.

use crate::canvas::Canvas;
use crate::matrix::{Matrix, NotInvertible};
use crate::ray::Ray;
use crate::tuple::point;
use crate::world::{World, MAX_BOUNCES};
use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Clone)]
pub struct Camera {
    hsize: usize,
    vsize: usize,
    field_of_view: f64,
    transform: Matrix,
    inverse: Matrix,
    half_width: f64,
    half_height: f64,
    pixel_size: f64,
}

impl Camera {
    pub fn new(hsize: usize, vsize: usize, field_of_view: f64) -> Camera {
        assert!(hsize > 0 && vsize > 0, "camera dimensions must be positive");
        let mut c = Camera {
            hsize,
            vsize,
            field_of_view,
            transform: Matrix::identity(4),
            inverse: Matrix::identity(4),
            half_width: 0.,
            half_height: 0.,
            pixel_size: 0.,
        };
        c.recalc_sizes();
        c
    }

    fn recalc_sizes(&mut self) {
        let half_view = (self.field_of_view / 2.0).tan();
        let aspect = self.hsize as f64 / self.vsize as f64;
        if aspect >= 1.0 {
            self.half_width = half_view;
            self.half_height = half_view / aspect;
        } else {
            self.half_width = half_view * aspect;
            self.half_height = half_view;
        }
        self.pixel_size = (self.half_width * 2.0) / self.hsize as f64;
    }

    pub fn hsize(&self) -> usize {
        self.hsize
    }

    pub fn vsize(&self) -> usize {
        self.vsize
    }

    pub fn field_of_view(&self) -> f64 {
        self.field_of_view
    }

    pub fn set_size(&mut self, hsize: usize, vsize: usize) {
        assert!(hsize > 0 && vsize > 0, "camera dimensions must be positive");
        self.hsize = hsize;
        self.vsize = vsize;
        self.recalc_sizes();
    }

    pub fn set_field_of_view(&mut self, field_of_view: f64) {
        self.field_of_view = field_of_view;
        self.recalc_sizes();
    }

    pub fn pixel_size(&self) -> f64 {
        self.pixel_size
    }

    pub fn transform(&self) -> &Matrix {
        &self.transform
    }

    pub fn set_transform(&mut self, transform: Matrix) -> Result<(), NotInvertible> {
        self.inverse = transform.inverse()?;
        self.transform = transform;
        Ok(())
    }

    /// The world-space ray through the center of pixel `(px, py)`.
    pub fn ray_for_pixel(&self, px: usize, py: usize) -> Ray {
        let xoffset = (px as f64 + 0.5) * self.pixel_size;
        let yoffset = (py as f64 + 0.5) * self.pixel_size;
        // untransformed, the camera looks toward -z with +x to the left
        let world_x = self.half_width - xoffset;
        let world_y = self.half_height - yoffset;
        let pixel = &self.inverse * point(world_x, world_y, -1.);
        let origin = &self.inverse * point(0., 0., 0.);
        let direction = (pixel - origin).normalized();
        Ray::new(origin, direction)
    }

    /// Renders the world pixel by pixel in row-major order.
    pub fn render(&self, world: &World) -> Canvas {
        let mut image = Canvas::new(self.hsize, self.vsize);
        for py in 0..self.vsize {
            for px in 0..self.hsize {
                let ray = self.ray_for_pixel(px, py);
                image.set_pixel(px, py, world.color_at(&ray, MAX_BOUNCES));
            }
        }
        image
    }

    /// Renders the world with the rows fanned out across the rayon pool.
    /// Pixels have no cross dependency, so workers only read the immutable
    /// world and camera and write disjoint rows; the result is identical to
    /// [`Camera::render`]. `progress` counts finished pixels for UI threads.
    pub fn render_parallel(&self, world: &World, progress: &AtomicUsize) -> Canvas {
        let mut image = Canvas::new(self.hsize, self.vsize);
        let width = self.hsize;
        image
            .pixels_mut()
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(py, row)| {
                for (px, pixel) in row.iter_mut().enumerate() {
                    let ray = self.ray_for_pixel(px, py);
                    *pixel = world.color_at(&ray, MAX_BOUNCES);
                }
                progress.fetch_add(width, Ordering::Relaxed);
            });
        image
    }
}
