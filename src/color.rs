//! RGB color triples. Colors reuse tuple-style arithmetic but are a distinct
//! type: a color is never interpreted as a spatial quantity.

use crate::fp::approx_eq;
use std::ops::{Add, Mul, Sub};

#[derive(Debug, Clone, Copy, Default)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

pub const BLACK: Color = Color {
    red: 0.,
    green: 0.,
    blue: 0.,
};

pub const WHITE: Color = Color {
    red: 1.,
    green: 1.,
    blue: 1.,
};

impl Color {
    pub fn new(red: f64, green: f64, blue: f64) -> Color {
        Color { red, green, blue }
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Color) -> bool {
        approx_eq(self.red, other.red)
            && approx_eq(self.green, other.green)
            && approx_eq(self.blue, other.blue)
    }
}

impl Add for Color {
    type Output = Color;

    fn add(self, other: Color) -> Color {
        Color::new(
            self.red + other.red,
            self.green + other.green,
            self.blue + other.blue,
        )
    }
}

impl Sub for Color {
    type Output = Color;

    fn sub(self, other: Color) -> Color {
        Color::new(
            self.red - other.red,
            self.green - other.green,
            self.blue - other.blue,
        )
    }
}

impl Mul<f64> for Color {
    type Output = Color;

    fn mul(self, s: f64) -> Color {
        Color::new(self.red * s, self.green * s, self.blue * s)
    }
}

// Hadamard product, used to filter one color through another.
impl Mul for Color {
    type Output = Color;

    fn mul(self, other: Color) -> Color {
        Color::new(
            self.red * other.red,
            self.green * other.green,
            self.blue * other.blue,
        )
    }
}
