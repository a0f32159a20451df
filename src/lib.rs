#![warn(clippy::all, rust_2018_idioms)]

pub mod buffer;
pub mod effect;
pub mod error;
pub mod event;
pub mod geometry;
pub mod input;
pub mod raster;
pub mod surface;
pub mod tool;

pub use buffer::PixelBuffer;
pub use effect::{Effect, EffectType, InvertEffect};
pub use error::SurfaceError;
pub use event::{EventBinding, EventHandler, EventKind, EventRouter, EventTarget, RegistrationId};
pub use geometry::Point;
pub use input::{CanvasMapping, InputEvent, InputLocation};
pub use surface::{CanvasSurface, Surface};
pub use tool::{DrawingParams, EllipseTool, Gesture, LineTool, PencilTool, Tool, ToolContext, ToolType};
