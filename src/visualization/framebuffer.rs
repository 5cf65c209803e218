//! CPU-side pixel buffer and per-pixel circle rasterizer
//!
//! The frame buffer is a plain `width * height` grid of packed `0x00RRGGBB`
//! pixels, y-down with the origin at the top left, allocated once and reused
//! every frame. The renderer draws into it with [`FrameBuffer::fill_circle`]
//! and the Bevy side copies it into the window surface texture.

use crate::simulation::states::NVec2;
use crate::simulation::trajectory::Trajectory;

/// Packed `0x00RRGGBB` color.
pub type Rgb = u32;

pub struct FrameBuffer {
    width: usize,
    height: usize,
    pixels: Vec<Rgb>,
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Fill the whole buffer with `color`
    pub fn clear(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    /// Write one pixel. Coordinates outside the buffer are silently
    /// dropped, so callers may rasterize shapes that transiently overshoot
    /// the edges (the boundary step pulls bodies back on the next frame).
    pub fn set_pixel(&mut self, x: i64, y: i64, color: Rgb) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        self.pixels[y as usize * self.width + x as usize] = color;
    }

    /// Read one pixel, `None` outside the buffer
    pub fn pixel(&self, x: i64, y: i64) -> Option<Rgb> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        Some(self.pixels[y as usize * self.width + x as usize])
    }

    /// Rasterize a filled disc centered at `center` with radius `radius`.
    ///
    /// Every integer pixel coordinate inside the bounding box whose squared
    /// distance to the center is *strictly* less than `radius^2` is set to
    /// `color`; pixels exactly on the boundary stay untouched. O(radius^2),
    /// fine for the small radii this simulation draws.
    pub fn fill_circle(&mut self, center: NVec2, radius: f64, color: Rgb) {
        let low_x = (center.x - radius).floor() as i64;
        let high_x = (center.x + radius).ceil() as i64;
        let low_y = (center.y - radius).floor() as i64;
        let high_y = (center.y + radius).ceil() as i64;

        let radius_squared = radius * radius;

        for x in low_x..=high_x {
            for y in low_y..=high_y {
                // is the coordinate within the circle?
                let dx = x as f64 - center.x;
                let dy = y as f64 - center.y;
                let center_distance_squared = dx * dx + dy * dy;
                if center_distance_squared < radius_squared {
                    self.set_pixel(x, y, color);
                }
            }
        }
    }

    /// Draw every recorded trail point as a small disc of fixed radius
    /// `width` in `color`, oldest first so the newest dots end up on top
    pub fn fill_trajectory(&mut self, trail: &Trajectory, width: f64, color: Rgb) {
        for point in trail.iter() {
            self.fill_circle(point.x, width, color);
        }
    }

    /// Expand the packed pixels into an RGBA8 byte stream (alpha 255),
    /// the layout the surface texture expects
    pub fn write_rgba(&self, out: &mut [u8]) {
        debug_assert_eq!(out.len(), self.pixels.len() * 4);
        for (px, chunk) in self.pixels.iter().zip(out.chunks_exact_mut(4)) {
            chunk[0] = (px >> 16) as u8;
            chunk[1] = (px >> 8) as u8;
            chunk[2] = *px as u8;
            chunk[3] = 0xff;
        }
    }
}
