//! The pixel buffer and its encoders.

use crate::color::Color;
use itertools::Itertools;

/// Maximum line length of the plain-text PPM output, per the format's
/// informal 70-column convention.
const PPM_LINE_LIMIT: usize = 70;

#[derive(Debug, Clone)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl Canvas {
    /// A `width` x `height` canvas initialized to black.
    pub fn new(width: usize, height: usize) -> Canvas {
        Canvas {
            width,
            height,
            pixels: vec![Color::default(); width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixel(&self, x: usize, y: usize) -> Color {
        self.pixels[y * self.width + x]
    }

    pub fn set_pixel(&mut self, x: usize, y: usize, color: Color) {
        self.pixels[y * self.width + x] = color;
    }

    /// The raw pixel storage in row-major order, for renderers that fan rows
    /// out across threads.
    pub fn pixels_mut(&mut self) -> &mut [Color] {
        &mut self.pixels
    }

    /// Encodes the canvas as plain-text PPM (P3): header, then one row of
    /// pixels per logical line, wrapped so no line exceeds 70 characters.
    /// Channels are scaled to 0..255, rounded and clamped.
    pub fn to_ppm(&self) -> String {
        let mut out = String::new();
        out.push_str("P3\n");
        out.push_str(&format!("{} {}\n255\n", self.width, self.height));
        for row in self.pixels.chunks(self.width) {
            let numbers = row
                .iter()
                .flat_map(|p| vec![to_255(p.red), to_255(p.green), to_255(p.blue)])
                .map(|v| v.to_string())
                .join(" ");
            for line in wrap(&numbers, PPM_LINE_LIMIT) {
                out.push_str(line);
                out.push('\n');
            }
        }
        out
    }

    /// Packed RGB8 bytes in row-major order, for handing to the `image`
    /// crate.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for p in &self.pixels {
            bytes.push(to_255(p.red));
            bytes.push(to_255(p.green));
            bytes.push(to_255(p.blue));
        }
        bytes
    }
}

fn to_255(channel: f64) -> u8 {
    (channel * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Splits `s` at spaces so no piece exceeds `limit` characters.
fn wrap(s: &str, limit: usize) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = s;
    while rest.len() > limit {
        let cut = rest[..=limit]
            .rfind(' ')
            .expect("a PPM channel value is never longer than the line limit");
        lines.push(&rest[..cut]);
        rest = &rest[cut + 1..];
    }
    lines.push(rest);
    lines
}
