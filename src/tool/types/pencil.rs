use egui::{Color32, Pos2};
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::error::SurfaceError;
use crate::geometry::Point;
use crate::raster;
use crate::tool::trait_def::{Gesture, Tool, ToolContext};

/// Free-hand drawing: a pure-black single-pixel stroke.
///
/// Unlike the shape tools there is no preview step. Every pointer move
/// draws the segment from the previously captured point straight onto the
/// committed drawing surface and advances the anchor, so the stroke is
/// committed incrementally; pointer-up only ends the gesture.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PencilTool {
    #[serde(skip)]
    gesture: Gesture,
}

impl PencilTool {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Tool for PencilTool {
    fn name(&self) -> &'static str {
        "Pencil"
    }

    fn on_activate(&mut self, _ctx: &mut ToolContext<'_>) -> Result<(), SurfaceError> {
        self.gesture = Gesture::Idle;
        Ok(())
    }

    fn on_deactivate(&mut self, _ctx: &mut ToolContext<'_>) -> Result<(), SurfaceError> {
        // Drawn segments are already committed; just forget the gesture.
        self.gesture = Gesture::Idle;
        Ok(())
    }

    fn on_pointer_down(
        &mut self,
        pos: Pos2,
        _ctx: &mut ToolContext<'_>,
    ) -> Result<(), SurfaceError> {
        let p = Point::from_pos(pos);
        if self.gesture.begin(p) {
            debug!("{}: stroke started at {:?}", self.name(), p);
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
        let from = match self.gesture {
            Gesture::Dragging { last, .. } => last,
            Gesture::Idle => {
                trace!("{}: pointer-move without a stroke, ignoring", self.name());
                return Ok(());
            }
        };

        let mut pixels = ctx.drawing.pixel_data()?;
        raster::draw_line(&mut pixels, from, p, |_| Color32::BLACK);
        ctx.drawing.set_pixel_data(pixels)?;

        self.gesture.update(p);
        Ok(())
    }

    fn on_pointer_up(&mut self, _pos: Pos2, _ctx: &mut ToolContext<'_>) -> Result<(), SurfaceError> {
        // The final segment was drawn by the preceding move; nothing left
        // to commit.
        match self.gesture.end() {
            Some((anchor, last)) => {
                debug!("{}: stroke ended {:?} -> {:?}", self.name(), anchor, last);
            }
            None => trace!("{}: pointer-up without a stroke, ignoring", self.name()),
        }
        Ok(())
    }
}
