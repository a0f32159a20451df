pub mod ellipse;
pub mod line;
pub mod pencil;

pub use ellipse::EllipseTool;
pub use line::LineTool;
pub use pencil::PencilTool;

use egui::Pos2;
use serde::{Deserialize, Serialize};

use crate::error::SurfaceError;
use crate::event::EventBinding;

use super::trait_def::{Tool, ToolContext};

/// The concrete tools, dispatched by variant tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ToolType {
    Pencil(PencilTool),
    Line(LineTool),
    Ellipse(EllipseTool),
}

impl Default for ToolType {
    fn default() -> Self {
        Self::Pencil(PencilTool::default())
    }
}

impl ToolType {
    fn as_tool_mut(&mut self) -> &mut dyn Tool {
        match self {
            ToolType::Pencil(tool) => tool,
            ToolType::Line(tool) => tool,
            ToolType::Ellipse(tool) => tool,
        }
    }
}

impl Tool for ToolType {
    fn name(&self) -> &'static str {
        match self {
            ToolType::Pencil(tool) => tool.name(),
            ToolType::Line(tool) => tool.name(),
            ToolType::Ellipse(tool) => tool.name(),
        }
    }

    fn bindings(&self) -> Vec<EventBinding> {
        match self {
            ToolType::Pencil(tool) => tool.bindings(),
            ToolType::Line(tool) => tool.bindings(),
            ToolType::Ellipse(tool) => tool.bindings(),
        }
    }

    fn on_activate(&mut self, ctx: &mut ToolContext<'_>) -> Result<(), SurfaceError> {
        self.as_tool_mut().on_activate(ctx)
    }

    fn on_deactivate(&mut self, ctx: &mut ToolContext<'_>) -> Result<(), SurfaceError> {
        self.as_tool_mut().on_deactivate(ctx)
    }

    fn on_pointer_down(
        &mut self,
        pos: Pos2,
        ctx: &mut ToolContext<'_>,
    ) -> Result<(), SurfaceError> {
        self.as_tool_mut().on_pointer_down(pos, ctx)
    }

    fn on_pointer_move(
        &mut self,
        pos: Pos2,
        ctx: &mut ToolContext<'_>,
    ) -> Result<(), SurfaceError> {
        self.as_tool_mut().on_pointer_move(pos, ctx)
    }

    fn on_pointer_up(&mut self, pos: Pos2, ctx: &mut ToolContext<'_>) -> Result<(), SurfaceError> {
        self.as_tool_mut().on_pointer_up(pos, ctx)
    }
}
