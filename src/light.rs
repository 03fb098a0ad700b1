//! Lighting for flat shading.

use crate::math::vec3::Vec3;

/// A directional light that illuminates the scene uniformly from a direction.
///
/// All rays are parallel, as from a source infinitely far away. Faces are lit
/// on both sides: only the angle between normal and light matters, not which
/// way the face winds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    /// Unit direction along which the light travels.
    pub direction: Vec3,
}

impl DirectionalLight {
    /// Create a new directional light pointing in the given direction.
    /// The direction will be normalized automatically.
    pub fn new(direction: Vec3) -> Self {
        DirectionalLight {
            direction: direction.normalize(),
        }
    }

    /// A light placed directly behind the viewer, shining along +Z.
    pub fn camera_aligned() -> Self {
        Self::new(Vec3::FORWARD)
    }

    /// Flat-shading intensity in [0.0, 1.0]: the absolute cosine of the
    /// angle between the surface normal and the light direction.
    pub fn intensity(&self, normal: Vec3) -> f64 {
        normal.normalize().dot(self.direction).abs()
    }
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self::camera_aligned()
    }
}
