//! The fixed geometry the viewer renders.

use crate::colors::Rgb;
use crate::math::vec3::Vec3;

/// A colored triangle in object space.
///
/// Vertex order is significant: it fixes the direction of the face normal
/// and the roles of the barycentric weights.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub v1: Vec3,
    pub v2: Vec3,
    pub v3: Vec3,
    pub color: Rgb,
}

impl Triangle {
    pub const fn new(v1: Vec3, v2: Vec3, v3: Vec3, color: Rgb) -> Self {
        Self { v1, v2, v3, color }
    }

    pub fn vertices(&self) -> [Vec3; 3] {
        [self.v1, self.v2, self.v3]
    }

    /// Unnormalized face normal, `(v2 - v1) x (v3 - v1)`.
    pub fn normal(&self) -> Vec3 {
        (self.v2 - self.v1).cross(self.v3 - self.v1)
    }
}

// Static data compiled into the binary; every Scene borrows from it.
pub const TETRAHEDRON: [Triangle; 4] = [
    Triangle::new(
        Vec3::new(100.0, 100.0, 100.0),
        Vec3::new(-100.0, -100.0, 100.0),
        Vec3::new(-100.0, 100.0, -100.0),
        Rgb::WHITE,
    ),
    Triangle::new(
        Vec3::new(100.0, 100.0, 100.0),
        Vec3::new(-100.0, -100.0, 100.0),
        Vec3::new(100.0, -100.0, -100.0),
        Rgb::RED,
    ),
    Triangle::new(
        Vec3::new(-100.0, 100.0, -100.0),
        Vec3::new(100.0, -100.0, -100.0),
        Vec3::new(100.0, 100.0, 100.0),
        Rgb::GREEN,
    ),
    Triangle::new(
        Vec3::new(-100.0, 100.0, -100.0),
        Vec3::new(100.0, -100.0, -100.0),
        Vec3::new(-100.0, -100.0, 100.0),
        Rgb::BLUE,
    ),
];

/// An immutable, ordered list of triangles.
///
/// Built once and shared by reference with every render call; only the
/// rotation changes between frames.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    triangles: Vec<Triangle>,
}

impl Scene {
    pub fn new(triangles: Vec<Triangle>) -> Self {
        Self { triangles }
    }

    /// The four-faced demo solid centered on the origin.
    pub fn tetrahedron() -> Self {
        Self::new(TETRAHEDRON.to_vec())
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::tetrahedron()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn tetrahedron_has_four_faces() {
        let scene = Scene::tetrahedron();
        assert_eq!(scene.len(), 4);
        let colors: Vec<Rgb> = scene.triangles().iter().map(|t| t.color).collect();
        assert_eq!(colors, vec![Rgb::WHITE, Rgb::RED, Rgb::GREEN, Rgb::BLUE]);
    }

    #[test]
    fn tetrahedron_is_centered_on_origin() {
        let sum = TETRAHEDRON
            .iter()
            .fold(Vec3::ZERO, |acc, t| acc + (t.v1 + t.v2 + t.v3) / 3.0);
        assert_relative_eq!(sum / 4.0, Vec3::ZERO, epsilon = 1e-12);
    }

    #[test]
    fn normal_follows_winding() {
        let t = Triangle::new(Vec3::ZERO, Vec3::RIGHT, Vec3::UP, Rgb::WHITE);
        assert_relative_eq!(t.normal(), Vec3::FORWARD);
        let flipped = Triangle::new(Vec3::ZERO, Vec3::UP, Vec3::RIGHT, Rgb::WHITE);
        assert_relative_eq!(flipped.normal(), -Vec3::FORWARD);
    }

    #[test]
    fn faces_are_not_degenerate() {
        for t in &TETRAHEDRON {
            assert!(t.normal().magnitude() > 1.0);
        }
    }
}
