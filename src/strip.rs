//! In-memory LED strip
//!
//! Holds the framebuffer a frame's lights are applied to. Pushing the
//! buffer to real LEDs is left to whatever owns the hardware.

use crate::sim::{Color, Light};

pub struct Strip {
    pixels: Vec<Color>,
    brightness: u8,
}

impl Strip {
    pub fn new(length: u32, brightness: u8) -> Self {
        Self {
            pixels: vec![Color::BLACK; length as usize],
            brightness,
        }
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn clear(&mut self) {
        self.pixels.fill(Color::BLACK);
    }

    /// Apply lights in order; later lights overwrite earlier ones.
    pub fn apply<'a>(&mut self, lights: impl IntoIterator<Item = &'a Light>) {
        for light in lights {
            match self.pixels.get_mut(light.position as usize) {
                Some(pixel) => *pixel = light.color,
                None => log::trace!("light at {} is off the strip", light.position),
            }
        }
    }

    /// Unscaled colors
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Colors as they would be sent to the LEDs
    pub fn scaled(&self) -> impl Iterator<Item = Color> + '_ {
        self.pixels.iter().map(|c| c.scaled(self.brightness))
    }

    /// One character per LED, for terminal output
    pub fn render_ascii(&self) -> String {
        self.pixels
            .iter()
            .map(|c| match (c.r, c.g, c.b) {
                (0, 0, 0) => '.',
                (r, g, b) if r == g && g == b => 'O',
                (r, g, 0) if r > 0 && g > 0 => 'y',
                (r, 0, b) if r > 0 && b > 0 => 'm',
                (r, g, b) if r >= g && r >= b => 'r',
                (_, g, b) if g >= b => 'g',
                _ => 'b',
            })
            .collect()
    }
}
