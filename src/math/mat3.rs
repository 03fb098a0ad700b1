//! 3x3 rotation matrix using the row-vector convention.
//!
//! # Convention
//! - Storage is **row-major**: `m[row * 3 + col]`
//! - Vectors are **row vectors** on the left: `v * M`, so `apply` reads the
//!   matrix column by column (`x' = v.x*m[0] + v.y*m[3] + v.z*m[6]`)
//! - `a.compose(b)` is the plain product `A * B`; with row vectors the
//!   result applies `A` first, then `B`
//!
//! Swapping `apply` for the column-vector product `M * v` transposes every
//! rotation and inverts its direction.
//!
//! # Example
//! ```ignore
//! let transform = Mat3::from_heading(h).compose(Mat3::from_pitch(p));
//! let rotated = transform.apply(vertex);
//! ```

use std::ops::Mul;

use approx::{AbsDiffEq, RelativeEq};

use super::vec3::Vec3;

/// 3x3 matrix stored row-major in a flat array.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat3 {
    m: [f64; 9],
}

impl Mat3 {
    pub const fn new(m: [f64; 9]) -> Self {
        Mat3 { m }
    }

    pub const fn identity() -> Self {
        Mat3::new([
            1.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, //
            0.0, 0.0, 1.0,
        ])
    }

    /// Creates a rotation about the vertical (Y) axis.
    pub fn from_heading(angle: f64) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        Mat3::new([
            c, 0.0, s, //
            0.0, 1.0, 0.0, //
            -s, 0.0, c,
        ])
    }

    /// Creates a rotation about the horizontal (X) axis.
    pub fn from_pitch(angle: f64) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        Mat3::new([
            1.0, 0.0, 0.0, //
            0.0, c, s, //
            0.0, -s, c,
        ])
    }

    /// Builds the viewer transform from slider angles given in degrees.
    ///
    /// Heading is composed with pitch, in that order.
    pub fn from_view_angles(heading_degrees: f64, pitch_degrees: f64) -> Self {
        Mat3::from_heading(heading_degrees.to_radians())
            .compose(Mat3::from_pitch(pitch_degrees.to_radians()))
    }

    /// Standard matrix product `self * other`.
    pub fn compose(&self, other: Mat3) -> Mat3 {
        let mut result = [0.0f64; 9];

        for row in 0..3 {
            for col in 0..3 {
                result[row * 3 + col] = self.m[row * 3] * other.m[col]
                    + self.m[row * 3 + 1] * other.m[3 + col]
                    + self.m[row * 3 + 2] * other.m[6 + col];
            }
        }

        Mat3::new(result)
    }

    /// Transforms `v` as a row vector: `v * self`.
    #[inline]
    pub fn apply(&self, v: Vec3) -> Vec3 {
        let m = &self.m;
        Vec3::new(
            v.x * m[0] + v.y * m[3] + v.z * m[6],
            v.x * m[1] + v.y * m[4] + v.z * m[7],
            v.x * m[2] + v.y * m[5] + v.z * m[8],
        )
    }

    /// Access element at [row][col].
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.m[row * 3 + col]
    }

    /// The raw row-major values.
    pub fn values(&self) -> &[f64; 9] {
        &self.m
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Mat3::identity()
    }
}

/// Matrix composition: `A * B` is `A.compose(B)`.
impl Mul<Mat3> for Mat3 {
    type Output = Mat3;

    fn mul(self, rhs: Mat3) -> Self::Output {
        self.compose(rhs)
    }
}

/// Row-vector transform: `v * M`.
impl Mul<Mat3> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: Mat3) -> Self::Output {
        rhs.apply(self)
    }
}

impl AbsDiffEq for Mat3 {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.m
            .iter()
            .zip(other.m.iter())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl RelativeEq for Mat3 {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.m
            .iter()
            .zip(other.m.iter())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}
