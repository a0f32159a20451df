mod registration;

pub use registration::{EventRouter, RegistrationId};

use serde::{Deserialize, Serialize};

/// The input event kinds a tool or effect can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    PointerDown,
    PointerMove,
    PointerUp,
}

/// The screen region a binding applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventTarget {
    /// The drawable canvas area.
    Canvas,
    /// Everything outside the canvas (tool buttons, parameter widgets).
    Controls,
}

/// One declared subscription: deliver events of `kind` occurring on
/// `target`. Tools and effects expose their bindings as a set, which is
/// registered and unregistered atomically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventBinding {
    pub kind: EventKind,
    pub target: EventTarget,
}

impl EventBinding {
    pub const fn new(kind: EventKind, target: EventTarget) -> Self {
        Self { kind, target }
    }

    /// The full drag vocabulary on the canvas: down, move and up.
    pub fn pointer_gestures() -> Vec<EventBinding> {
        vec![
            EventBinding::new(EventKind::PointerDown, EventTarget::Canvas),
            EventBinding::new(EventKind::PointerMove, EventTarget::Canvas),
            EventBinding::new(EventKind::PointerUp, EventTarget::Canvas),
        ]
    }
}

/// A registered callback: invoked with the originating event whenever one
/// of its declared bindings matches.
pub trait EventHandler {
    fn handle_event(&mut self, event: &crate::input::InputEvent);
}
