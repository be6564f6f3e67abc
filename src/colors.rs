//! Pixel type and color helpers for the drift animator.
//!
//! HSV helpers return `palette::Srgb` (0.0-1.0); [`Rgbw::from_srgb`] scales
//! such a color into the small integer range the animator walks in.

use palette::{FromColor, Hsv, Srgb};

/// One RGBW pixel, 8 bits per channel, in the order the strip expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgbw {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub w: u8,
}

impl Rgbw {
    /// All channels off.
    pub const OFF: Rgbw = Rgbw::new(0, 0, 0, 0);

    /// Creates a pixel from its four channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, w: u8) -> Self {
        Self { r, g, b, w }
    }

    /// Scales an `Srgb` color so that 1.0 maps to `max`. White stays off.
    pub fn from_srgb(color: Srgb, max: u8) -> Self {
        let scale = |c: f32| (c.clamp(0.0, 1.0) * max as f32 + 0.5) as u8;
        Self::new(scale(color.red), scale(color.green), scale(color.blue), 0)
    }

    /// Mutable references to the channels in R, G, B, W order.
    #[inline]
    pub fn channels_mut(&mut self) -> [&mut u8; 4] {
        [&mut self.r, &mut self.g, &mut self.b, &mut self.w]
    }

    /// Returns true if every channel is zero.
    pub fn is_off(&self) -> bool {
        *self == Self::OFF
    }
}

impl From<Rgbw> for Srgb<u8> {
    /// Drops the white channel.
    fn from(pixel: Rgbw) -> Self {
        Srgb::new(pixel.r, pixel.g, pixel.b)
    }
}

/// Creates an RGB color from HSV (Hue, Saturation, Value) components.
#[inline]
pub fn hsv(hue: f32, saturation: f32, value: f32) -> Srgb {
    let hsv = Hsv::new(hue, saturation, value);
    Srgb::from_color(hsv)
}

/// Creates an RGB color from hue only (full saturation and value).
#[inline]
pub fn hue(hue: f32) -> Srgb {
    hsv(hue, 1.0, 1.0)
}
