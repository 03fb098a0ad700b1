//! Triangle rasterization.
//!
//! [`BarycentricRasterizer`] decides which pixels a [`ScreenTriangle`] covers
//! and how deep each one is; a [`PixelShader`] decides its color.

mod barycentric;
pub mod shader;

pub use barycentric::{
    is_inside, BarycentricRasterizer, PixelBounds, ScreenTriangle, DEGENERATE_AREA_EPSILON,
};
pub use shader::{shade, FlatShader, PixelShader};
