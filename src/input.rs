use egui::{PointerButton, Pos2, Rect};

use crate::event::{EventKind, EventTarget};

/// Represents the location where an input event occurred, already mapped
/// into buffer-pixel space by a [`CanvasMapping`].
#[derive(Debug, Clone, Copy)]
pub struct InputLocation {
    /// The position in buffer-pixel space (still fractional; tools floor it
    /// when they capture a gesture point).
    pub position: Pos2,
    /// Whether this position is within the canvas bounds
    pub is_in_canvas: bool,
}

/// The pointer events the editor core consumes.
#[derive(Debug, Clone)]
pub enum InputEvent {
    /// Mouse button was pressed
    PointerDown {
        location: InputLocation,
        button: PointerButton,
    },
    /// Mouse moved (with or without buttons pressed)
    PointerMove { location: InputLocation },
    /// Mouse button was released
    PointerUp {
        location: InputLocation,
        button: PointerButton,
    },
}

impl InputEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            InputEvent::PointerDown { .. } => EventKind::PointerDown,
            InputEvent::PointerMove { .. } => EventKind::PointerMove,
            InputEvent::PointerUp { .. } => EventKind::PointerUp,
        }
    }

    pub fn location(&self) -> InputLocation {
        match self {
            InputEvent::PointerDown { location, .. }
            | InputEvent::PointerMove { location }
            | InputEvent::PointerUp { location, .. } => *location,
        }
    }

    /// The region the event lands in, used to match registered bindings.
    pub fn target(&self) -> EventTarget {
        if self.location().is_in_canvas {
            EventTarget::Canvas
        } else {
            EventTarget::Controls
        }
    }
}

/// Maps raw client-space pointer positions into buffer-pixel space.
///
/// The canvas element may be displayed at a different size than its backing
/// pixel buffer (display scaling); positions are translated to the canvas
/// origin and scaled by the backing/displayed ratio per axis.
#[derive(Debug, Clone, Copy)]
pub struct CanvasMapping {
    canvas_rect: Rect,
    buffer_width: usize,
    buffer_height: usize,
}

impl CanvasMapping {
    pub fn new(canvas_rect: Rect, buffer_width: usize, buffer_height: usize) -> Self {
        Self {
            canvas_rect,
            buffer_width,
            buffer_height,
        }
    }

    /// Update the canvas rectangle (e.g. if the window is resized).
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    /// Map a client-space position to buffer-pixel space.
    pub fn to_buffer(&self, client: Pos2) -> Pos2 {
        let rel = client - self.canvas_rect.min;
        Pos2::new(
            rel.x * self.buffer_width as f32 / self.canvas_rect.width(),
            rel.y * self.buffer_height as f32 / self.canvas_rect.height(),
        )
    }

    /// Build an [`InputLocation`] from a client-space position.
    pub fn location(&self, client: Pos2) -> InputLocation {
        InputLocation {
            position: self.to_buffer(client),
            is_in_canvas: self.canvas_rect.contains(client),
        }
    }
}
