//! Rasterization and color primitives.
//!
//! Pure functions from geometry to pixel writes. Each one borrows a
//! [`PixelBuffer`](crate::buffer::PixelBuffer) for a single call, mutates it
//! in place and returns nothing; callers decide when the buffer is written
//! back to a surface. Writes that fall outside the buffer are clipped, never
//! reported.

pub mod ellipse;
pub mod invert;
pub mod line;

pub use ellipse::draw_in_rect;
pub use invert::invert_colors;
pub use line::draw as draw_line;
