//! Pixel shaders for triangle rasterization.
//!
//! The rasterizer decides coverage and depth; a [`PixelShader`] decides the
//! color of each covered pixel from its barycentric weights. Flat shading
//! computes one color per triangle up front, so [`FlatShader`] ignores them.

use crate::colors::Rgb;

/// Exponent approximating the sRGB transfer curve (without its linear toe).
pub const GAMMA: f64 = 2.4;

/// Trait for per-pixel shading computations.
///
/// The `lambda` parameter contains the barycentric weights `[b1, b2, b3]` of
/// the pixel, each in [0, 1] and summing to 1.
pub trait PixelShader {
    /// Compute the ARGB8888 color for a covered pixel.
    fn shade(&self, lambda: [f64; 3]) -> u32;
}

/// Flat shader - returns a constant color for all pixels.
pub struct FlatShader {
    color: u32,
}

impl FlatShader {
    pub fn new(color: Rgb) -> Self {
        Self {
            color: color.to_argb(),
        }
    }

    /// Lights `base` with `intensity` and shades every pixel with the result.
    pub fn lit(base: Rgb, intensity: f64) -> Self {
        Self::new(shade(base, intensity))
    }
}

impl PixelShader for FlatShader {
    #[inline]
    fn shade(&self, _lambda: [f64; 3]) -> u32 {
        self.color
    }
}

/// Scales `color` by a light `intensity` in linear light.
///
/// Each channel is decoded with `c^2.4`, multiplied by the intensity, encoded
/// back with `^(1/2.4)` and truncated. Intensity is clamped to [0, 1] first
/// and the result to [0, 255].
pub fn shade(color: Rgb, intensity: f64) -> Rgb {
    let intensity = intensity.clamp(0.0, 1.0);
    let [r, g, b] = color.channels().map(|c| shade_channel(c, intensity));
    Rgb::new(r, g, b)
}

#[inline]
fn shade_channel(channel: u8, intensity: f64) -> u8 {
    let linear = f64::from(channel).powf(GAMMA) * intensity;
    linear.powf(1.0 / GAMMA).trunc().clamp(0.0, 255.0) as u8
}
