pub mod invert;

pub use invert::InvertEffect;

use serde::{Deserialize, Serialize};

use crate::error::SurfaceError;
use crate::event::{EventBinding, EventKind, EventTarget};
use crate::surface::Surface;

/// A stateless whole-image transform: reads the selected drawable surface,
/// rewrites its pixels in one shot, and is done.
///
/// Effects do not participate in the drag state machine. `target` is the
/// currently selected surface; `None` (nothing selected) is a silent
/// no-op, not an error. Surface read/write faults propagate.
pub trait Effect {
    fn name(&self) -> &'static str;

    /// Effects are triggered from the controls region, not the canvas.
    fn bindings(&self) -> Vec<EventBinding> {
        vec![EventBinding::new(
            EventKind::PointerDown,
            EventTarget::Controls,
        )]
    }

    fn apply(&self, target: Option<&mut dyn Surface>) -> Result<(), SurfaceError>;
}

/// The concrete effects, dispatched by variant tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum EffectType {
    Invert(InvertEffect),
}

impl Effect for EffectType {
    fn name(&self) -> &'static str {
        match self {
            EffectType::Invert(effect) => effect.name(),
        }
    }

    fn bindings(&self) -> Vec<EventBinding> {
        match self {
            EffectType::Invert(effect) => effect.bindings(),
        }
    }

    fn apply(&self, target: Option<&mut dyn Surface>) -> Result<(), SurfaceError> {
        match self {
            EffectType::Invert(effect) => effect.apply(target),
        }
    }
}
