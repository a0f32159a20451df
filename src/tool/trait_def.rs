use egui::{Color32, Pos2};
use log::trace;
use serde::{Deserialize, Serialize};

use crate::error::SurfaceError;
use crate::event::EventBinding;
use crate::geometry::Point;
use crate::input::InputEvent;
use crate::surface::Surface;

/// The two surfaces a tool draws against: the scratch preview, redrawn on
/// every pointer move, and the committed drawing, mutated once per
/// completed gesture (shape tools) or segment by segment (free-hand).
pub struct ToolContext<'a> {
    pub preview: &'a mut dyn Surface,
    pub drawing: &'a mut dyn Surface,
}

/// Stroke settings shared by the shape tools. Tools without parameters
/// hard-code their behavior instead of carrying one of these.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawingParams {
    pub color: Color32,
    /// Stroke thickness in pixels, interpreted by the tool as repeated
    /// offset outlines. The primitives themselves are single-pixel.
    pub thickness: u32,
}

impl Default for DrawingParams {
    fn default() -> Self {
        Self {
            color: Color32::BLACK,
            thickness: 1,
        }
    }
}

/// The in-progress gesture of a tool, made explicit so the handlers match
/// on states instead of sprinkling null checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gesture {
    /// No gesture in progress.
    #[default]
    Idle,
    /// Pointer is down; `anchor` is where the gesture started, `last` the
    /// most recently captured position.
    Dragging { anchor: Point, last: Point },
}

impl Gesture {
    /// Capture the gesture anchor. Returns `false` (and stays put) for a
    /// duplicate down without an intervening up.
    pub fn begin(&mut self, p: Point) -> bool {
        match self {
            Gesture::Idle => {
                *self = Gesture::Dragging { anchor: p, last: p };
                true
            }
            Gesture::Dragging { .. } => false,
        }
    }

    /// Advance the current position. Returns the `(anchor, current)` pair,
    /// or `None` when no gesture is in progress.
    pub fn update(&mut self, p: Point) -> Option<(Point, Point)> {
        match self {
            Gesture::Idle => None,
            Gesture::Dragging { anchor, last } => {
                *last = p;
                Some((*anchor, *last))
            }
        }
    }

    /// End the gesture, returning its final `(anchor, current)` pair, or
    /// `None` for an up with no preceding down.
    pub fn end(&mut self) -> Option<(Point, Point)> {
        match std::mem::take(self) {
            Gesture::Idle => None,
            Gesture::Dragging { anchor, last } => Some((anchor, last)),
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Gesture::Dragging { .. })
    }
}

/// An interactive drawing capability: a stateful handler of pointer
/// down/move/up events driving the rasterization primitives against the
/// two surfaces in a [`ToolContext`].
///
/// Pointer-event streams are assumed to be possibly malformed (duplicate
/// or missing transitions); handlers treat out-of-state events as silent
/// no-ops and must never corrupt the committed surface. Errors are
/// reserved for surface collaborator faults.
pub trait Tool {
    fn name(&self) -> &'static str;

    /// The event bindings this tool wants registered while active.
    fn bindings(&self) -> Vec<EventBinding> {
        EventBinding::pointer_gestures()
    }

    /// Called when the tool becomes the active tool.
    fn on_activate(&mut self, _ctx: &mut ToolContext<'_>) -> Result<(), SurfaceError> {
        Ok(())
    }

    /// Called when another tool takes over. Implementations abort any
    /// in-progress gesture and leave the preview surface cleared.
    fn on_deactivate(&mut self, _ctx: &mut ToolContext<'_>) -> Result<(), SurfaceError> {
        Ok(())
    }

    fn on_pointer_down(&mut self, pos: Pos2, ctx: &mut ToolContext<'_>)
        -> Result<(), SurfaceError>;

    fn on_pointer_move(&mut self, pos: Pos2, ctx: &mut ToolContext<'_>)
        -> Result<(), SurfaceError>;

    fn on_pointer_up(&mut self, pos: Pos2, ctx: &mut ToolContext<'_>) -> Result<(), SurfaceError>;

    /// Route a delivered input event to the matching pointer handler.
    /// Events outside the canvas are dropped.
    fn handle_event(
        &mut self,
        event: &InputEvent,
        ctx: &mut ToolContext<'_>,
    ) -> Result<(), SurfaceError> {
        let location = event.location();
        if !location.is_in_canvas {
            trace!("{}: dropping event outside canvas", self.name());
            return Ok(());
        }
        match event {
            InputEvent::PointerDown { .. } => self.on_pointer_down(location.position, ctx),
            InputEvent::PointerMove { .. } => self.on_pointer_move(location.position, ctx),
            InputEvent::PointerUp { .. } => self.on_pointer_up(location.position, ctx),
        }
    }
}
