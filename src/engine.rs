//! Core rendering pipeline.
//!
//! [`render`] is the whole pipeline as a pure function: the same scene,
//! angles and size always produce the same surface. [`Engine`] bundles a
//! scene with render options for the viewer.

use std::fmt;

use log::{debug, trace};

use crate::colors::{self, Rgb};
use crate::controls::ViewAngles;
use crate::light::DirectionalLight;
use crate::math::mat3::Mat3;
use crate::render::{BarycentricRasterizer, FlatShader, Frame, Renderer, ScreenTriangle, Surface};
use crate::scene::{Scene, Triangle};

/// What each frame draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum RenderMode {
    /// Flat-shaded, depth-tested triangles.
    #[default]
    Filled,
    /// Triangle outlines only.
    Wireframe,
    /// Outlines drawn first, filled triangles over them.
    FilledWireframe,
}

impl RenderMode {
    pub fn draws_filled(self) -> bool {
        matches!(self, RenderMode::Filled | RenderMode::FilledWireframe)
    }

    pub fn draws_wireframe(self) -> bool {
        matches!(self, RenderMode::Wireframe | RenderMode::FilledWireframe)
    }

    /// The next mode in the viewer's toggle cycle.
    pub fn next(self) -> Self {
        match self {
            RenderMode::Filled => RenderMode::Wireframe,
            RenderMode::Wireframe => RenderMode::FilledWireframe,
            RenderMode::FilledWireframe => RenderMode::Filled,
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderMode::Filled => write!(f, "Filled"),
            RenderMode::Wireframe => write!(f, "Wireframe"),
            RenderMode::FilledWireframe => write!(f, "FilledWireframe"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RenderOptions {
    pub mode: RenderMode,
    pub light: DirectionalLight,
}

/// A scene triangle after rotation and projection, with its flat lighting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedTriangle {
    pub screen: ScreenTriangle,
    pub color: Rgb,
    pub intensity: f64,
}

/// Rotates every triangle, lights it and moves it onto the surface.
///
/// The normal comes from the rotated vertices, so lighting follows the
/// rotation while the light stays fixed to the viewer.
pub fn project_scene(
    scene: &Scene,
    transform: &Mat3,
    light: &DirectionalLight,
    width: u32,
    height: u32,
) -> Vec<ProjectedTriangle> {
    scene
        .triangles()
        .iter()
        .map(|triangle| {
            let [v1, v2, v3] = triangle.vertices().map(|v| transform.apply(v));
            let rotated = Triangle::new(v1, v2, v3, triangle.color);

            ProjectedTriangle {
                screen: ScreenTriangle::project(rotated.vertices(), width, height),
                color: triangle.color,
                intensity: light.intensity(rotated.normal().normalize()),
            }
        })
        .collect()
}

/// Renders `scene` seen through `transform`, returning the color surface and
/// the depth buffer behind it.
pub fn render_frame(
    scene: &Scene,
    transform: &Mat3,
    width: u32,
    height: u32,
    options: &RenderOptions,
) -> Frame {
    let projected = project_scene(scene, transform, &options.light, width, height);
    let mut renderer = Renderer::new(width, height);

    if options.mode.draws_wireframe() {
        for triangle in &projected {
            renderer.draw_triangle_wireframe(&triangle.screen, colors::WIREFRAME);
        }
    }

    if options.mode.draws_filled() {
        let rasterizer = BarycentricRasterizer::new();
        let mut fb = renderer.as_framebuffer();
        for (i, triangle) in projected.iter().enumerate() {
            let shader = FlatShader::lit(triangle.color, triangle.intensity);
            let written = rasterizer.fill_triangle(&triangle.screen, &mut fb, &shader);
            trace!(
                "triangle {i}: intensity {:.3}, {written} pixels written",
                triangle.intensity
            );
        }
    }

    renderer.into_frame()
}

/// Renders the filled scene at the given slider angles (degrees).
pub fn render(
    scene: &Scene,
    heading_degrees: f64,
    pitch_degrees: f64,
    width: u32,
    height: u32,
) -> Surface {
    let transform = Mat3::from_view_angles(heading_degrees, pitch_degrees);
    render_frame(scene, &transform, width, height, &RenderOptions::default()).into_surface()
}

/// A scene plus the options the viewer renders it with.
pub struct Engine {
    scene: Scene,
    options: RenderOptions,
}

impl Engine {
    pub fn new(scene: Scene) -> Self {
        Self {
            scene,
            options: RenderOptions::default(),
        }
    }

    pub fn with_mode(mut self, mode: RenderMode) -> Self {
        self.options.mode = mode;
        self
    }

    pub fn set_render_mode(&mut self, mode: RenderMode) {
        self.options.mode = mode;
    }

    pub fn render_mode(&self) -> RenderMode {
        self.options.mode
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn render(&self, angles: ViewAngles, width: u32, height: u32) -> Surface {
        debug!(
            "rendering {width}x{height} at heading {:.1}, pitch {:.1} ({})",
            angles.heading(),
            angles.pitch(),
            self.options.mode
        );
        render_frame(
            &self.scene,
            &angles.transform(),
            width,
            height,
            &self.options,
        )
        .into_surface()
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(Scene::tetrahedron())
    }
}
