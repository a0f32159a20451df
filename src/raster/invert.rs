use crate::buffer::PixelBuffer;

/// Invert every pixel in place: each of R, G, B becomes `255 - channel`,
/// alpha is left untouched. Applying the transform twice restores the
/// buffer bit-for-bit.
pub fn invert_colors(buffer: &mut PixelBuffer) {
    for px in buffer.as_bytes_mut().chunks_exact_mut(4) {
        px[0] = 255 - px[0];
        px[1] = 255 - px[1];
        px[2] = 255 - px[2];
    }
}
