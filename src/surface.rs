use crate::buffer::PixelBuffer;
use crate::error::SurfaceError;

/// The contract a rendering surface offers to the editor core.
///
/// A surface owns a device pixel buffer; the core only ever sees snapshots.
/// `pixel_data` copies the pixels out, the caller mutates the copy, and
/// `set_pixel_data` copies it back in. Primitives must never assume they
/// alias the live surface — this round trip is what lets a tool redraw a
/// preview every frame without touching the committed image.
pub trait Surface {
    fn width(&self) -> usize;
    fn height(&self) -> usize;

    /// Copy the surface's pixels out into an owned buffer.
    fn pixel_data(&self) -> Result<PixelBuffer, SurfaceError>;

    /// Copy a buffer back onto the surface. Fails with
    /// [`SurfaceError::SizeMismatch`] when the dimensions differ.
    fn set_pixel_data(&mut self, buffer: PixelBuffer) -> Result<(), SurfaceError>;

    /// Reset the surface to fully transparent.
    fn clear(&mut self) -> Result<(), SurfaceError>;
}

/// An in-memory surface. Hosts with a real rendering target supply their
/// own [`Surface`] implementation; this one backs headless embedding and
/// the test suite.
#[derive(Debug, Clone)]
pub struct CanvasSurface {
    buffer: PixelBuffer,
}

impl CanvasSurface {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            buffer: PixelBuffer::new(width, height),
        }
    }
}

impl Surface for CanvasSurface {
    fn width(&self) -> usize {
        self.buffer.width()
    }

    fn height(&self) -> usize {
        self.buffer.height()
    }

    fn pixel_data(&self) -> Result<PixelBuffer, SurfaceError> {
        Ok(self.buffer.clone())
    }

    fn set_pixel_data(&mut self, buffer: PixelBuffer) -> Result<(), SurfaceError> {
        if buffer.width() != self.buffer.width() || buffer.height() != self.buffer.height() {
            return Err(SurfaceError::SizeMismatch {
                want_width: self.buffer.width(),
                want_height: self.buffer.height(),
                got_width: buffer.width(),
                got_height: buffer.height(),
            });
        }
        self.buffer = buffer;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), SurfaceError> {
        self.buffer.clear();
        Ok(())
    }
}
