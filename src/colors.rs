//! Color constants and ARGB8888 packing.
//!
//! Surfaces store pixels as `0xAARRGGBB`, the layout SDL streams as
//! `PixelFormatEnum::ARGB8888`.

/// An opaque 8-bit-per-channel color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const GREEN: Rgb = Rgb::new(0, 255, 0);
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn channels(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Packs into a fully opaque ARGB8888 value.
    #[inline]
    pub const fn to_argb(self) -> u32 {
        0xFF00_0000 | ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Unpacks the color channels of an ARGB8888 value, dropping alpha.
    #[inline]
    pub const fn from_argb(argb: u32) -> Self {
        Self {
            r: ((argb >> 16) & 0xFF) as u8,
            g: ((argb >> 8) & 0xFF) as u8,
            b: (argb & 0xFF) as u8,
        }
    }
}

/// Cleared surface pixels; the canvas behind shows through.
pub const TRANSPARENT: u32 = 0x0000_0000;

/// Canvas color the surface is composited over.
pub const BACKGROUND: Rgb = Rgb::BLACK;

pub const WIREFRAME: u32 = Rgb::WHITE.to_argb();

/// Alpha channel of an ARGB8888 value.
#[inline]
pub const fn alpha(argb: u32) -> u8 {
    (argb >> 24) as u8
}

/// Converts ARGB8888 to the RGBA byte order image encoders expect.
#[inline]
pub fn argb_to_rgba(argb: u32) -> [u8; 4] {
    let Rgb { r, g, b } = Rgb::from_argb(argb);
    [r, g, b, alpha(argb)]
}
