//! Light instructions emitted by the simulation

use serde::{Deserialize, Serialize};

/// An RGB color, 0-255 per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Scale each channel the way the strip driver applies brightness
    pub fn scaled(self, brightness: u8) -> Self {
        let scale = |c: u8| ((c as u16 * (brightness as u16 + 1)) >> 8) as u8;
        Self::new(scale(self.r), scale(self.g), scale(self.b))
    }
}

/// One LED instruction: light `position` with `color`.
///
/// Positions are not clamped to the strip; consumers drop what they cannot show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Light {
    pub position: u32,
    pub color: Color,
}

impl Light {
    pub const fn new(position: u32, color: Color) -> Self {
        Self { position, color }
    }
}
