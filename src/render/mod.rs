//! Low-level rendering: buffers, rasterization and shading.

pub mod framebuffer;
pub mod rasterizer;
pub mod renderer;
pub mod surface;

pub use framebuffer::FrameBuffer;
pub use rasterizer::{BarycentricRasterizer, FlatShader, PixelShader, ScreenTriangle};
pub use renderer::Renderer;
pub use surface::{Frame, Surface};
