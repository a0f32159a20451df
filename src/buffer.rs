use egui::Color32;

use crate::geometry::Point;

/// An RGBA8 pixel grid: row-major, origin top-left, four bytes per pixel.
///
/// This is the substrate every rasterization and color primitive writes
/// into. Buffers are exchanged with surfaces by value (copy-out, mutate,
/// copy-in); a primitive borrows one for the duration of a single call and
/// retains nothing afterwards.
///
/// Pixel values round-trip bit-for-bit: `get` and `set` use the stored
/// channel bytes directly, without premultiplication or any other
/// conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    data: Vec<u8>,
    width: usize,
    height: usize,
}

impl PixelBuffer {
    /// Create a fully transparent buffer.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            data: vec![0; width * height * 4],
            width,
            height,
        }
    }

    /// Wrap raw RGBA bytes. Returns `None` if the length does not match
    /// `width * height * 4`.
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Option<Self> {
        if data.len() != width * height * 4 {
            return None;
        }
        Some(Self {
            data,
            width,
            height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether the point lies inside the buffer.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < self.width && (p.y as usize) < self.height
    }

    fn index(&self, p: Point) -> usize {
        (p.y as usize * self.width + p.x as usize) * 4
    }

    /// Read the pixel at `p`, or `None` when out of bounds.
    pub fn get(&self, p: Point) -> Option<Color32> {
        if !self.contains(p) {
            return None;
        }
        let i = self.index(p);
        Some(Color32::from_rgba_premultiplied(
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ))
    }

    /// Write the pixel at `p`. Out-of-bounds writes are clipped silently,
    /// so primitives can rasterize shapes that extend past the edges.
    pub fn set(&mut self, p: Point, color: Color32) {
        if !self.contains(p) {
            return;
        }
        let i = self.index(p);
        self.data[i..i + 4].copy_from_slice(&color.to_array());
    }

    /// Reset every pixel to transparent.
    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    /// True when every byte (all channels, alpha included) is zero.
    pub fn is_blank(&self) -> bool {
        self.data.iter().all(|&b| b == 0)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}
