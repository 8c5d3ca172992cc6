//! RAII DOM event listener registration.
//!
//! Each [`EventBinding`] owns its closure and removes the listener on
//! drop, so teardown is a plain iteration over owned values and
//! repeated start/stop cycles cannot accumulate duplicate listeners.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::EventTarget;

use crate::error::GlintError;

/// A registered DOM event listener, removed when dropped.
pub struct EventBinding {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web_sys::Event)>,
}

impl EventBinding {
    /// Register `handler` for `event` on `target`.
    pub fn new(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(web_sys::Event) + 'static,
    ) -> Result<Self, GlintError> {
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
        target
            .add_event_listener_with_callback(
                event,
                closure.as_ref().unchecked_ref(),
            )
            .map_err(|_| {
                GlintError::Dom(format!("failed to add {event} listener"))
            })?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl Drop for EventBinding {
    fn drop(&mut self) {
        // Removal of an already-removed listener is harmless.
        let _ = self.target.remove_event_listener_with_callback(
            self.event,
            self.closure.as_ref().unchecked_ref(),
        );
    }
}
