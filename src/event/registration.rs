use log::debug;
use uuid::Uuid;

use crate::event::{EventBinding, EventHandler};
use crate::input::InputEvent;

/// Identifies one registered set of event bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegistrationId(Uuid);

struct Registration {
    id: RegistrationId,
    bindings: Vec<EventBinding>,
    handler: Box<dyn EventHandler>,
}

/// Routes input events to registered handlers.
///
/// A tool or effect hands over its declared bindings together with a
/// handler; the whole set becomes active atomically and is later removed
/// atomically by id. Dispatch walks the registrations in registration
/// order and invokes every handler with a matching binding.
#[derive(Default)]
pub struct EventRouter {
    registrations: Vec<Registration>,
}

impl std::fmt::Debug for EventRouter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventRouter")
            .field(
                "registrations",
                &format!("<{} registrations>", self.registrations.len()),
            )
            .finish()
    }
}

impl EventRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Activate a set of bindings. The set matches as a whole from this
    /// call on; partial registration is not observable.
    pub fn register(
        &mut self,
        bindings: Vec<EventBinding>,
        handler: Box<dyn EventHandler>,
    ) -> RegistrationId {
        let id = RegistrationId(Uuid::new_v4());
        debug!("registering {} event bindings as {:?}", bindings.len(), id);
        self.registrations.push(Registration {
            id,
            bindings,
            handler,
        });
        id
    }

    /// Remove a registration and hand its handler back. Returns `None` for
    /// an id that is not (or no longer) registered.
    pub fn unregister(&mut self, id: RegistrationId) -> Option<Box<dyn EventHandler>> {
        let pos = self.registrations.iter().position(|r| r.id == id)?;
        debug!("unregistering {:?}", id);
        Some(self.registrations.remove(pos).handler)
    }

    pub fn is_registered(&self, id: RegistrationId) -> bool {
        self.registrations.iter().any(|r| r.id == id)
    }

    /// Deliver an event to every registration with a matching binding.
    pub fn dispatch(&mut self, event: &InputEvent) {
        let kind = event.kind();
        let target = event.target();
        for registration in &mut self.registrations {
            if registration
                .bindings
                .iter()
                .any(|b| b.kind == kind && b.target == target)
            {
                registration.handler.handle_event(event);
            }
        }
    }
}
