use egui::Pos2;
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::buffer::PixelBuffer;
use crate::error::SurfaceError;
use crate::geometry::Point;
use crate::raster;
use crate::tool::trait_def::{DrawingParams, Gesture, Tool, ToolContext};

/// Straight-line tool: drag from an anchor point, watch the segment follow
/// the pointer on the preview surface, commit it on release.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LineTool {
    pub params: DrawingParams,
    #[serde(skip)]
    gesture: Gesture,
}

impl LineTool {
    pub fn new(params: DrawingParams) -> Self {
        Self {
            params,
            gesture: Gesture::default(),
        }
    }

    /// Rasterize the segment with the configured thickness: offset copies
    /// perpendicular to the major axis, centered on the true segment.
    fn rasterize(&self, pixels: &mut PixelBuffer, anchor: Point, current: Point) {
        let t = self.params.thickness.max(1) as i32;
        let x_major = (current.x - anchor.x).abs() >= (current.y - anchor.y).abs();
        for i in 0..t {
            let off = i - t / 2;
            let (p0, p1) = if x_major {
                (
                    Point::new(anchor.x, anchor.y + off),
                    Point::new(current.x, current.y + off),
                )
            } else {
                (
                    Point::new(anchor.x + off, anchor.y),
                    Point::new(current.x + off, current.y),
                )
            };
            raster::draw_line(pixels, p0, p1, |_| self.params.color);
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

impl Tool for LineTool {
    fn name(&self) -> &'static str {
        "Line"
    }

    fn on_activate(&mut self, _ctx: &mut ToolContext<'_>) -> Result<(), SurfaceError> {
        // Start from a clean state even after an aborted gesture.
        self.gesture = Gesture::Idle;
        Ok(())
    }

    fn on_deactivate(&mut self, ctx: &mut ToolContext<'_>) -> Result<(), SurfaceError> {
        // Abort an in-progress gesture without committing it.
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
        // Final move-equivalent update before the commit.
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
            "{}: committed segment {:?} -> {:?}",
            self.name(),
            anchor,
            current
        );
        Ok(())
    }
}
