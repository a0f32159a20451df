use egui::Pos2;
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::buffer::PixelBuffer;
use crate::error::SurfaceError;
use crate::geometry::Point;
use crate::raster;
use crate::tool::trait_def::{DrawingParams, Gesture, Tool, ToolContext};

/// Ellipse tool: the drag spans a bounding rectangle and the committed
/// shape is the outline of the ellipse inscribed in it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EllipseTool {
    pub params: DrawingParams,
    #[serde(skip)]
    gesture: Gesture,
}

impl EllipseTool {
    pub fn new(params: DrawingParams) -> Self {
        Self {
            params,
            gesture: Gesture::default(),
        }
    }

    /// Rasterize the outline with the configured thickness: concentric
    /// outlines, each inset one pixel further into the bounding rectangle.
    fn rasterize(&self, pixels: &mut PixelBuffer, anchor: Point, current: Point) {
        let min = Point::new(anchor.x.min(current.x), anchor.y.min(current.y));
        let max = Point::new(anchor.x.max(current.x), anchor.y.max(current.y));
        let t = self.params.thickness.max(1) as i32;
        for i in 0..t {
            if min.x + i > max.x - i || min.y + i > max.y - i {
                break;
            }
            raster::draw_in_rect(
                pixels,
                Point::new(min.x + i, min.y + i),
                Point::new(max.x - i, max.y - i),
                |_| self.params.color,
            );
        }
    }

    fn render_preview(
        &self,
        ctx: &mut ToolContext<'_>,
        anchor: Point,
        current: Point,
    ) -> Result<(), SurfaceError> {
        ctx.preview.clear()?;
        let mut pixels = ctx.preview.pixel_data()?;
        self.rasterize(&mut pixels, anchor, current);
        ctx.preview.set_pixel_data(pixels)
    }
}

impl Tool for EllipseTool {
    fn name(&self) -> &'static str {
        "Ellipse"
    }

    fn on_activate(&mut self, _ctx: &mut ToolContext<'_>) -> Result<(), SurfaceError> {
        self.gesture = Gesture::Idle;
        Ok(())
    }

    fn on_deactivate(&mut self, ctx: &mut ToolContext<'_>) -> Result<(), SurfaceError> {
        if self.gesture.end().is_some() {
            ctx.preview.clear()?;
        }
        Ok(())
    }

    fn on_pointer_down(
        &mut self,
        pos: Pos2,
        _ctx: &mut ToolContext<'_>,
    ) -> Result<(), SurfaceError> {
        let p = Point::from_pos(pos);
        if self.gesture.begin(p) {
            debug!("{}: gesture anchored at {:?}", self.name(), p);
        } else {
            trace!("{}: duplicate pointer-down, ignoring", self.name());
        }
        Ok(())
    }

    fn on_pointer_move(
        &mut self,
        pos: Pos2,
        ctx: &mut ToolContext<'_>,
    ) -> Result<(), SurfaceError> {
        let p = Point::from_pos(pos);
        match self.gesture.update(p) {
            Some((anchor, current)) => self.render_preview(ctx, anchor, current),
            None => {
                trace!("{}: pointer-move without a gesture, ignoring", self.name());
                Ok(())
            }
        }
    }

    fn on_pointer_up(&mut self, pos: Pos2, ctx: &mut ToolContext<'_>) -> Result<(), SurfaceError> {
        self.on_pointer_move(pos, ctx)?;

        let Some((anchor, current)) = self.gesture.end() else {
            trace!("{}: pointer-up without a gesture, ignoring", self.name());
            return Ok(());
        };

        let mut pixels = ctx.drawing.pixel_data()?;
        self.rasterize(&mut pixels, anchor, current);
        ctx.drawing.set_pixel_data(pixels)?;
        ctx.preview.clear()?;
        debug!(
            "{}: committed ellipse spanning {:?} -> {:?}",
            self.name(),
            anchor,
            current
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{CanvasSurface, Surface};
    use egui::{pos2, Color32};

    #[test]
    fn commit_matches_the_primitive_output() {
        let mut preview = CanvasSurface::new(12, 12);
        let mut drawing = CanvasSurface::new(12, 12);
        let mut tool = EllipseTool::default();
        let mut ctx = ToolContext {
            preview: &mut preview,
            drawing: &mut drawing,
        };

        tool.on_pointer_down(pos2(2.0, 3.0), &mut ctx).unwrap();
        tool.on_pointer_move(pos2(9.0, 8.0), &mut ctx).unwrap();
        tool.on_pointer_up(pos2(9.0, 8.0), &mut ctx).unwrap();

        let mut expected = crate::buffer::PixelBuffer::new(12, 12);
        raster::draw_in_rect(&mut expected, Point::new(2, 3), Point::new(9, 8), |_| {
            Color32::BLACK
        });
        assert_eq!(ctx.drawing.pixel_data().unwrap(), expected);
        assert!(ctx.preview.pixel_data().unwrap().is_blank());
    }

    #[test]
    fn drag_direction_does_not_change_the_shape() {
        let corners = [
            (pos2(2.0, 3.0), pos2(9.0, 8.0)),
            (pos2(9.0, 8.0), pos2(2.0, 3.0)),
            (pos2(9.0, 3.0), pos2(2.0, 8.0)),
        ];
        let mut committed = Vec::new();
        for (from, to) in corners {
            let mut preview = CanvasSurface::new(12, 12);
            let mut drawing = CanvasSurface::new(12, 12);
            let mut tool = EllipseTool::default();
            let mut ctx = ToolContext {
                preview: &mut preview,
                drawing: &mut drawing,
            };
            tool.on_pointer_down(from, &mut ctx).unwrap();
            tool.on_pointer_up(to, &mut ctx).unwrap();
            committed.push(drawing.pixel_data().unwrap());
        }
        assert_eq!(committed[0], committed[1]);
        assert_eq!(committed[0], committed[2]);
    }
}
