//! A CPU-rendered, interactively rotated tetrahedron.
//!
//! The pipeline rotates four colored triangles with a hand-built 3x3 matrix,
//! projects them orthographically, rasterizes them with barycentric weights
//! against a depth buffer and flat-shades them from a light behind the
//! viewer. SDL2 is used only to show the result.
//!
//! # Quick Start
//!
//! ```
//! use tetraview::prelude::*;
//!
//! let scene = Scene::tetrahedron();
//! let surface = render(&scene, 180.0, 0.0, 400, 400);
//! assert_eq!(surface.width(), 400);
//! ```

// Public API - exposed to library consumers
pub mod colors;
pub mod config;
pub mod controls;
pub mod engine;
pub mod error;
pub mod light;
pub mod math;
pub mod scene;
pub mod window;

pub mod render;

pub use engine::{render, render_frame, Engine, RenderMode, RenderOptions};
pub use error::ViewerError;
pub use render::{Frame, Surface};
pub use scene::{Scene, Triangle};

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use tetraview::prelude::*;
/// ```
pub mod prelude {
    // Engine
    pub use crate::engine::{render, render_frame, Engine, RenderMode, RenderOptions};

    // Scene
    pub use crate::colors::Rgb;
    pub use crate::light::DirectionalLight;
    pub use crate::scene::{Scene, Triangle};

    // Controls
    pub use crate::controls::ViewAngles;

    // Math
    pub use crate::math::mat3::Mat3;
    pub use crate::math::vec3::Vec3;

    // Output
    pub use crate::render::{Frame, Surface};
}

/// Module exposing internals for benchmarking. Not part of the stable API.
pub mod bench {
    pub use crate::render::rasterizer::shade;
    pub use crate::render::{BarycentricRasterizer, FlatShader, FrameBuffer, ScreenTriangle};
}
