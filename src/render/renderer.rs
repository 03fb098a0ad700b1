//! Per-frame render target.
//!
//! Provides the [`Renderer`] struct which owns the color and depth buffers of
//! one frame and implements the non-depth-tested outline drawing.

use super::framebuffer::FrameBuffer;
use super::rasterizer::ScreenTriangle;
use super::surface::{buffer_len, Frame, Surface};
use crate::colors;

pub struct Renderer {
    color_buffer: Vec<u32>,
    depth_buffer: Vec<f64>,
    width: u32,
    height: u32,
}

impl Renderer {
    /// Buffers for a fresh frame: transparent color, depth at negative
    /// infinity so the first fragment anywhere wins.
    pub fn new(width: u32, height: u32) -> Self {
        let size = buffer_len(width, height);
        Self {
            color_buffer: vec![colors::TRANSPARENT; size],
            depth_buffer: vec![f64::NEG_INFINITY; size],
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            let index = y as usize * self.width as usize + x as usize;
            self.color_buffer[index] = color;
        }
    }

    /// Outlines a triangle. Vertex coordinates are truncated to whole pixels.
    pub fn draw_triangle_wireframe(&mut self, triangle: &ScreenTriangle, color: u32) {
        let [p0, p1, p2] = triangle.points;

        self.draw_line_bresenham(p0.x as i32, p0.y as i32, p1.x as i32, p1.y as i32, color);
        self.draw_line_bresenham(p1.x as i32, p1.y as i32, p2.x as i32, p2.y as i32, color);
        self.draw_line_bresenham(p2.x as i32, p2.y as i32, p0.x as i32, p0.y as i32, color);
    }

    /// Draws a line between two points using Bresenham's line algorithm.
    ///
    /// For each step along the major axis, an error term decides whether to
    /// also step along the minor axis. Both endpoints are drawn; pixels off
    /// the buffer are skipped.
    pub fn draw_line_bresenham(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: u32) {
        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();

        let x_incr_direction = if x0 < x1 { 1 } else { -1 };
        let y_incr_direction = if y0 < y1 { 1 } else { -1 };

        // Positive error favors x movement, negative favors y.
        let mut err = dx - dy;

        let mut x = x0;
        let mut y = y0;

        loop {
            self.set_pixel(x, y, color);

            if x == x1 && y == y1 {
                break;
            }

            let e2 = 2 * err;
            if e2 > -dy {
                err -= dy;
                x += x_incr_direction;
            }
            if e2 < dx {
                err += dx;
                y += y_incr_direction;
            }
        }
    }

    /// Get a mutable FrameBuffer view into the color and depth buffers.
    pub fn as_framebuffer(&mut self) -> FrameBuffer<'_> {
        FrameBuffer::new(
            &mut self.color_buffer,
            &mut self.depth_buffer,
            self.width,
            self.height,
        )
    }

    /// Finishes the frame, handing over both buffers.
    pub fn into_frame(self) -> Frame {
        Frame::new(
            Surface::from_pixels(self.width, self.height, self.color_buffer),
            self.depth_buffer,
        )
    }
}
