use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::effect::Effect;
use crate::error::SurfaceError;
use crate::raster;
use crate::surface::Surface;

/// Inverts the RGB channels of the whole selected surface, leaving alpha
/// untouched. Applying it twice restores the image.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct InvertEffect;

impl Effect for InvertEffect {
    fn name(&self) -> &'static str {
        "Invert"
    }

    fn apply(&self, target: Option<&mut dyn Surface>) -> Result<(), SurfaceError> {
        let Some(surface) = target else {
            trace!("{}: no surface selected, nothing to do", self.name());
            return Ok(());
        };

        let mut pixels = surface.pixel_data()?;
        raster::invert_colors(&mut pixels);
        surface.set_pixel_data(pixels)?;
        debug!("{}: applied to {}x{} surface", self.name(), surface.width(), surface.height());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::PixelBuffer;
    use crate::geometry::Point;
    use crate::surface::CanvasSurface;
    use egui::Color32;

    #[test]
    fn no_selection_is_a_no_op() {
        assert_eq!(InvertEffect.apply(None), Ok(()));
    }

    #[test]
    fn applies_inversion_through_the_surface_round_trip() {
        let mut surface = CanvasSurface::new(3, 3);
        let mut pixels = PixelBuffer::new(3, 3);
        pixels.set(Point::new(1, 1), Color32::from_rgba_premultiplied(0, 0, 0, 255));
        surface.set_pixel_data(pixels).unwrap();

        InvertEffect.apply(Some(&mut surface)).unwrap();
        assert_eq!(
            surface.pixel_data().unwrap().get(Point::new(1, 1)),
            Some(Color32::from_rgba_premultiplied(255, 255, 255, 255))
        );

        InvertEffect.apply(Some(&mut surface)).unwrap();
        assert_eq!(
            surface.pixel_data().unwrap().get(Point::new(1, 1)),
            Some(Color32::from_rgba_premultiplied(0, 0, 0, 255))
        );
    }
}
