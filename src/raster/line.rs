use egui::Color32;

use crate::buffer::PixelBuffer;
use crate::geometry::Point;

/// Rasterize the segment from `p0` to `p1` with the bidirectional Bresenham
/// walk: one accumulated error term decides which axis advances at each
/// step, so the same code covers every octant and the drawn pixels never
/// deviate from the true line by a full pixel.
///
/// `color_fn` is called once per visited pixel and picks the output color.
/// `p0 == p1` visits exactly one pixel. No allocation; the buffer is
/// mutated in place.
pub fn draw<F>(buffer: &mut PixelBuffer, p0: Point, p1: Point, mut color_fn: F)
where
    F: FnMut(Point) -> Color32,
{
    let mut x = p0.x;
    let mut y = p0.y;
    let dx = (p1.x - p0.x).abs();
    let sx = if p0.x < p1.x { 1 } else { -1 };
    let dy = -(p1.y - p0.y).abs();
    let sy = if p0.y < p1.y { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        let p = Point::new(x, y);
        buffer.set(p, color_fn(p));
        if x == p1.x && y == p1.y {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}
