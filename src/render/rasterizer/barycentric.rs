//! Barycentric triangle rasterization.
//!
//! # Algorithm Overview
//!
//! 1. Compute the triangle's bounding box: `ceil` of the minimum and `floor`
//!    of the maximum on each axis, clipped to the frame buffer
//! 2. For each integer pixel (x, y) in the box, compute barycentric weights
//!    `(b1, b2, b3)` as ratios of signed areas
//! 3. A pixel is covered when every weight lies in the closed range [0, 1]
//! 4. Covered pixels interpolate depth from the vertices and go through the
//!    depth test
//!
//! # Barycentric Weights
//!
//! With the shared denominator
//!
//! ```text
//! area = (v1.y - v3.y)(v2.x - v3.x) + (v2.y - v3.y)(v3.x - v1.x)
//! ```
//!
//! the weights at pixel P are
//!
//! ```text
//! b1 = ((P.y - v3.y)(v2.x - v3.x) + (v2.y - v3.y)(v3.x - P.x)) / area
//! b2 = ((P.y - v1.y)(v3.x - v1.x) + (v3.y - v1.y)(v1.x - P.x)) / area
//! b3 = ((P.y - v2.y)(v1.x - v2.x) + (v1.y - v2.y)(v2.x - P.x)) / area
//! ```
//!
//! Numerators and denominator flip sign together, so both windings rasterize.
//! Pixels are sampled at their integer corner, not their center.

use log::trace;

use super::shader::PixelShader;
use crate::math::vec3::Vec3;
use crate::render::framebuffer::FrameBuffer;

/// Triangles whose projected `area` term is smaller than this are skipped.
pub const DEGENERATE_AREA_EPSILON: f64 = 1e-9;

/// A triangle in surface space: x and y in pixels, z kept as a depth key.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenTriangle {
    pub points: [Vec3; 3],
}

impl ScreenTriangle {
    pub fn new(points: [Vec3; 3]) -> Self {
        Self { points }
    }

    /// Moves rotated, origin-centered vertices onto a `width` x `height`
    /// surface by offsetting x and y by half the surface size.
    ///
    /// The offset uses integer halves, so an odd dimension leaves the origin
    /// on the pixel left of (or above) the exact middle.
    pub fn project(vertices: [Vec3; 3], width: u32, height: u32) -> Self {
        let offset = Vec3::new(f64::from(width / 2), f64::from(height / 2), 0.0);
        Self::new(vertices.map(|v| v + offset))
    }

    /// Denominator shared by the three barycentric weights. Twice the signed
    /// area of the projected triangle.
    #[inline]
    pub fn area(&self) -> f64 {
        let [v1, v2, v3] = self.points;
        (v1.y - v3.y) * (v2.x - v3.x) + (v2.y - v3.y) * (v3.x - v1.x)
    }

    /// Barycentric weights of the point (x, y) given a precomputed `area`.
    #[inline]
    pub fn barycentric(&self, area: f64, x: f64, y: f64) -> [f64; 3] {
        let [v1, v2, v3] = self.points;
        let b1 = ((y - v3.y) * (v2.x - v3.x) + (v2.y - v3.y) * (v3.x - x)) / area;
        let b2 = ((y - v1.y) * (v3.x - v1.x) + (v3.y - v1.y) * (v1.x - x)) / area;
        let b3 = ((y - v2.y) * (v1.x - v2.x) + (v1.y - v2.y) * (v2.x - x)) / area;
        [b1, b2, b3]
    }

    /// Depth at the point with the given barycentric weights.
    #[inline]
    pub fn interpolate_depth(&self, lambda: [f64; 3]) -> f64 {
        let [v1, v2, v3] = self.points;
        lambda[0] * v1.z + lambda[1] * v2.z + lambda[2] * v3.z
    }

    /// Inclusive pixel bounds clipped to a `width` x `height` buffer.
    ///
    /// Empty when the triangle lies entirely off the buffer.
    pub fn pixel_bounds(&self, width: u32, height: u32) -> PixelBounds {
        let [v1, v2, v3] = self.points;
        let max_x = f64::from(width) - 1.0;
        let max_y = f64::from(height) - 1.0;
        PixelBounds {
            min_x: v1.x.min(v2.x).min(v3.x).ceil().max(0.0) as i32,
            max_x: v1.x.max(v2.x).max(v3.x).floor().min(max_x) as i32,
            min_y: v1.y.min(v2.y).min(v3.y).ceil().max(0.0) as i32,
            max_y: v1.y.max(v2.y).max(v3.y).floor().min(max_y) as i32,
        }
    }
}

/// Whether barycentric weights describe a point on or inside the triangle.
///
/// NaN weights, as produced by a zero `area`, are never inside.
#[inline]
pub fn is_inside(lambda: [f64; 3]) -> bool {
    lambda.iter().all(|b| (0.0..=1.0).contains(b))
}

/// Inclusive integer pixel rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelBounds {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

impl PixelBounds {
    pub fn is_empty(&self) -> bool {
        self.min_x > self.max_x || self.min_y > self.max_y
    }
}

/// Triangle rasterizer that tests every pixel of the bounding box with
/// barycentric weights.
///
/// Weights double as interpolation factors, so depth falls out of the same
/// computation that decides coverage.
#[derive(Debug, Default, Clone, Copy)]
pub struct BarycentricRasterizer;

impl BarycentricRasterizer {
    pub fn new() -> Self {
        BarycentricRasterizer
    }

    /// Fills `triangle` into `buffer`, coloring covered pixels with `shader`
    /// where they pass the depth test.
    ///
    /// Returns the number of pixels written.
    pub fn fill_triangle<S: PixelShader>(
        &self,
        triangle: &ScreenTriangle,
        buffer: &mut FrameBuffer,
        shader: &S,
    ) -> usize {
        let area = triangle.area();
        if !(area.abs() >= DEGENERATE_AREA_EPSILON) {
            trace!("skipping degenerate triangle (area {area})");
            return 0;
        }

        let bounds = triangle.pixel_bounds(buffer.width(), buffer.height());
        if bounds.is_empty() {
            return 0;
        }

        let mut written = 0;
        for y in bounds.min_y..=bounds.max_y {
            for x in bounds.min_x..=bounds.max_x {
                let lambda = triangle.barycentric(area, f64::from(x), f64::from(y));
                if !is_inside(lambda) {
                    continue;
                }

                let depth = triangle.interpolate_depth(lambda);
                if buffer.set_pixel_with_depth(x, y, depth, shader.shade(lambda)) {
                    written += 1;
                }
            }
        }
        written
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{Rgb, TRANSPARENT};
    use crate::render::rasterizer::shader::FlatShader;
    use approx::assert_relative_eq;

    const SIZE: u32 = 16;

    fn buffers() -> (Vec<u32>, Vec<f64>) {
        let n = (SIZE * SIZE) as usize;
        (vec![TRANSPARENT; n], vec![f64::NEG_INFINITY; n])
    }

    fn right_triangle(z: f64) -> ScreenTriangle {
        ScreenTriangle::new([
            Vec3::new(0.0, 0.0, z),
            Vec3::new(10.0, 0.0, z),
            Vec3::new(0.0, 10.0, z),
        ])
    }

    #[test]
    fn centroid_weights_are_interior_and_sum_to_one() {
        let tri = ScreenTriangle::new([
            Vec3::new(3.5, 1.25, 0.0),
            Vec3::new(40.0, 9.0, 0.0),
            Vec3::new(12.0, 33.0, 0.0),
        ]);
        let [v1, v2, v3] = tri.points;
        let c = (v1 + v2 + v3) / 3.0;
        let lambda = tri.barycentric(tri.area(), c.x, c.y);
        for b in lambda {
            assert!(b > 0.0 && b < 1.0);
            assert_relative_eq!(b, 1.0 / 3.0, epsilon = 1e-12);
        }
        assert_relative_eq!(lambda.iter().sum::<f64>(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn weights_at_vertices_and_edges_are_exact() {
        let tri = right_triangle(0.0);
        let area = tri.area();
        assert_eq!(area, -100.0);
        assert_eq!(tri.barycentric(area, 0.0, 0.0), [1.0, 0.0, 0.0]);
        assert_eq!(tri.barycentric(area, 5.0, 0.0), [0.5, 0.5, 0.0]);
        assert_eq!(tri.barycentric(area, 0.0, 10.0), [0.0, 0.0, 1.0]);
        assert!(is_inside(tri.barycentric(area, 5.0, 5.0)));
        assert!(!is_inside(tri.barycentric(area, 6.0, 5.0)));
    }

    #[test]
    fn edge_pixels_are_included() {
        let (mut color, mut depth) = buffers();
        let mut fb = FrameBuffer::new(&mut color, &mut depth, SIZE, SIZE);
        let shader = FlatShader::new(Rgb::RED);

        BarycentricRasterizer::new().fill_triangle(&right_triangle(1.0), &mut fb, &shader);

        let red = Rgb::RED.to_argb();
        assert_eq!(fb.get_pixel(0, 0), Some(red));
        assert_eq!(fb.get_pixel(5, 0), Some(red));
        assert_eq!(fb.get_pixel(10, 0), Some(red));
        assert_eq!(fb.get_pixel(0, 10), Some(red));
        assert_eq!(fb.get_pixel(5, 5), Some(red));
        assert_eq!(fb.get_pixel(6, 5), Some(TRANSPARENT));
        assert_eq!(fb.get_pixel(11, 0), Some(TRANSPARENT));
    }

    #[test]
    fn covers_expected_pixel_count() {
        let (mut color, mut depth) = buffers();
        let mut fb = FrameBuffer::new(&mut color, &mut depth, SIZE, SIZE);
        let written = BarycentricRasterizer::new().fill_triangle(
            &right_triangle(0.0),
            &mut fb,
            &FlatShader::new(Rgb::WHITE),
        );
        // x + y <= 10 over non-negative integers
        assert_eq!(written, 66);
    }

    #[test]
    fn winding_does_not_matter() {
        let ccw = right_triangle(0.0);
        let [a, b, c] = ccw.points;
        let cw = ScreenTriangle::new([a, c, b]);

        let (mut color_a, mut depth_a) = buffers();
        let (mut color_b, mut depth_b) = buffers();
        let shader = FlatShader::new(Rgb::GREEN);
        BarycentricRasterizer::new().fill_triangle(
            &ccw,
            &mut FrameBuffer::new(&mut color_a, &mut depth_a, SIZE, SIZE),
            &shader,
        );
        BarycentricRasterizer::new().fill_triangle(
            &cw,
            &mut FrameBuffer::new(&mut color_b, &mut depth_b, SIZE, SIZE),
            &shader,
        );
        assert_eq!(color_a, color_b);
    }

    #[test]
    fn nearer_triangle_hides_farther_regardless_of_order() {
        let near = right_triangle(5.0);
        let far = right_triangle(-5.0);
        let rasterizer = BarycentricRasterizer::new();

        for order in [[near, far], [far, near]] {
            let (mut color, mut depth) = buffers();
            let mut fb = FrameBuffer::new(&mut color, &mut depth, SIZE, SIZE);
            for tri in &order {
                let c = if tri.points[0].z > 0.0 { Rgb::GREEN } else { Rgb::BLUE };
                rasterizer.fill_triangle(tri, &mut fb, &FlatShader::new(c));
            }
            assert_eq!(fb.get_pixel(2, 2), Some(Rgb::GREEN.to_argb()));
            assert_relative_eq!(fb.get_depth(2, 2).unwrap(), 5.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn depth_is_interpolated() {
        let tri = ScreenTriangle::new([
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(10.0, 0.0, 10.0),
            Vec3::new(0.0, 10.0, 20.0),
        ]);
        let (mut color, mut depth) = buffers();
        let mut fb = FrameBuffer::new(&mut color, &mut depth, SIZE, SIZE);
        BarycentricRasterizer::new().fill_triangle(&tri, &mut fb, &FlatShader::new(Rgb::WHITE));
        assert_relative_eq!(fb.get_depth(4, 3).unwrap(), 4.0 + 6.0, epsilon = 1e-12);
    }

    #[test]
    fn degenerate_triangle_writes_nothing() {
        let line = ScreenTriangle::new([
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(5.0, 5.0, 0.0),
            Vec3::new(9.0, 9.0, 0.0),
        ]);
        let (mut color, mut depth) = buffers();
        let mut fb = FrameBuffer::new(&mut color, &mut depth, SIZE, SIZE);
        let written =
            BarycentricRasterizer::new().fill_triangle(&line, &mut fb, &FlatShader::new(Rgb::RED));
        assert_eq!(written, 0);
        assert!(color.iter().all(|&c| c == TRANSPARENT));
    }

    #[test]
    fn bounds_are_clipped_and_rounded_inward() {
        let tri = ScreenTriangle::new([
            Vec3::new(-4.5, 2.2, 0.0),
            Vec3::new(30.0, 2.2, 0.0),
            Vec3::new(7.0, 12.8, 0.0),
        ]);
        let bounds = tri.pixel_bounds(SIZE, SIZE);
        assert_eq!(
            bounds,
            PixelBounds {
                min_x: 0,
                max_x: 15,
                min_y: 3,
                max_y: 12
            }
        );
    }

    #[test]
    fn offscreen_triangle_has_empty_bounds() {
        let tri = ScreenTriangle::new([
            Vec3::new(-40.0, -40.0, 0.0),
            Vec3::new(-20.0, -40.0, 0.0),
            Vec3::new(-30.0, -20.0, 0.0),
        ]);
        assert!(tri.pixel_bounds(SIZE, SIZE).is_empty());
    }

    #[test]
    fn project_offsets_by_integer_half_size() {
        let tri = ScreenTriangle::project([Vec3::new(0.0, 0.0, 3.0); 3], 401, 300);
        assert_eq!(tri.points[0], Vec3::new(200.0, 150.0, 3.0));
    }
}
