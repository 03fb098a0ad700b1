//! Owned render output.

use std::path::Path;

use image::{ImageFormat, Rgba, RgbaImage};

use crate::colors::{self, argb_to_rgba};
use crate::error::ViewerError;

/// Number of pixels in a `width` x `height` buffer, computed without `u32`
/// overflow.
#[inline]
pub fn buffer_len(width: u32, height: u32) -> usize {
    width as usize * height as usize
}

/// Row-major index of (x, y) in a buffer `width` pixels wide.
#[inline]
pub fn pixel_index(x: u32, y: u32, width: u32) -> usize {
    y as usize * width as usize + x as usize
}

/// A finished frame's pixels in ARGB8888, row-major (`y * width + x`).
///
/// Pixels no triangle covered stay [`colors::TRANSPARENT`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Surface {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl Surface {
    /// A fully transparent surface.
    pub fn new(width: u32, height: u32) -> Self {
        Self::from_pixels(
            width,
            height,
            vec![colors::TRANSPARENT; buffer_len(width, height)],
        )
    }

    pub(crate) fn from_pixels(width: u32, height: u32, pixels: Vec<u32>) -> Self {
        debug_assert_eq!(pixels.len(), buffer_len(width, height));
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Get the color at (x, y), or None if out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x < self.width && y < self.height {
            Some(self.pixels[pixel_index(x, y, self.width)])
        } else {
            None
        }
    }

    /// Number of pixels some triangle or outline was drawn into.
    pub fn covered_pixels(&self) -> usize {
        self.pixels
            .iter()
            .filter(|&&p| colors::alpha(p) != 0)
            .count()
    }

    /// Native-endian bytes, the layout an ARGB8888 streaming texture expects.
    pub fn as_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|p| p.to_ne_bytes()).collect()
    }

    /// Converts to an RGBA image, keeping transparency.
    pub fn to_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width, self.height, |x, y| {
            Rgba(argb_to_rgba(self.pixels[pixel_index(x, y, self.width)]))
        })
    }

    /// Writes the surface as a PNG file.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), ViewerError> {
        if self.width == 0 || self.height == 0 {
            return Err(ViewerError::EmptySurface {
                width: self.width,
                height: self.height,
            });
        }
        self.to_image()
            .save_with_format(path.as_ref(), ImageFormat::Png)?;
        Ok(())
    }
}

/// A surface together with the depth buffer that produced it.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub surface: Surface,
    depth: Vec<f64>,
}

impl Frame {
    pub(crate) fn new(surface: Surface, depth: Vec<f64>) -> Self {
        debug_assert_eq!(depth.len(), surface.pixels.len());
        Self { surface, depth }
    }

    /// Depth of the nearest fragment at (x, y); negative infinity where
    /// nothing was drawn. None if out of bounds.
    pub fn depth_at(&self, x: u32, y: u32) -> Option<f64> {
        if x < self.surface.width && y < self.surface.height {
            Some(self.depth[pixel_index(x, y, self.surface.width)])
        } else {
            None
        }
    }

    pub fn into_surface(self) -> Surface {
        self.surface
    }
}
